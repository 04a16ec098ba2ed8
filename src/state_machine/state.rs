//! State representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of the processor within a three line record group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum State {
    /// Between records, waiting for an id line
    #[default]
    Default,
    /// Id and name captured, waiting for the CUSIP line
    AfterRecordId,
    /// CUSIP captured, waiting for the data line
    AfterCusip,
}

impl State {
    pub fn name(&self) -> &'static str {
        match self {
            State::Default => "Default",
            State::AfterRecordId => "AfterRecordId",
            State::AfterCusip => "AfterCusip",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
