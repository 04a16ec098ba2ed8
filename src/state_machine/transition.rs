//! Transition table

use crate::parser::Event;
use crate::state_machine::State;

/// Work performed on a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the partial record alone
    Noop,
    /// Store id and name
    CaptureRecordId,
    /// Store the CUSIP
    CaptureCusip,
    /// Store quantity, dates and amounts, then emit the finished record
    CaptureDataAndEmit,
}

/// Action to run and state to move to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    pub next: State,
}

impl Transition {
    pub const fn new(action: Action, next: State) -> Self {
        Self { action, next }
    }
}

/// Look up the transition for `(state, event)`
///
/// Returns `None` for pairs with no handler, e.g. a CUSIP line before any id line.
pub fn transition(state: State, event: Event) -> Option<Transition> {
    use Action::*;

    let t = match (state, event) {
        (State::Default, Event::RecordId) => Transition::new(CaptureRecordId, State::AfterRecordId),
        (State::Default, Event::Other) => Transition::new(Noop, State::Default),

        (State::AfterRecordId, Event::Cusip) => Transition::new(CaptureCusip, State::AfterCusip),
        (State::AfterRecordId, Event::Other) => Transition::new(Noop, State::AfterRecordId),

        (State::AfterCusip, Event::Data) => Transition::new(CaptureDataAndEmit, State::Default),
        (State::AfterCusip, Event::Other) => Transition::new(Noop, State::AfterCusip),

        _ => return None,
    };
    Some(t)
}
