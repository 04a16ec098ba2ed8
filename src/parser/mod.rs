//! Parser module - statement line classification and record assembly

pub mod classifier;
pub mod record;

// Re-export key types
pub use classifier::{DataCaptures, Event, LineClassifier, RecordIdCaptures};
pub use record::Record;
pub(crate) use record::PartialRecord;
