//! State machine module - reassemble record groups from classified lines

pub mod processor;
pub mod state;
pub mod transition;

// Re-export key types
pub use processor::{ProcessSummary, RecordProcessor};
pub use state::State;
pub use transition::{Action, Transition, transition};
