//! Record processor
//!
//! Feeds statement lines through the classifier and the transition table,
//! accumulating one partial record at a time and handing each finished
//! [`Record`] to a caller supplied callback.

use crate::error::{Error, Result};
use crate::parser::{Event, LineClassifier, PartialRecord, Record, classifier};
use crate::state_machine::{Action, State, transition};

/// Counters reported once the input is exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessSummary {
    pub lines_ingested: u64,
    pub records_emitted: u64,
    /// A record group was started but never completed
    pub incomplete: bool,
}

/// Streaming state machine that reassembles three line record groups
///
/// Holds a single partial record, so memory use does not grow with the input.
/// Lines must be ingested in the order they appear in the statement.
pub struct RecordProcessor<F>
where
    F: FnMut(Record) -> Result<()>,
{
    classifier: LineClassifier,
    on_record: F,
    state: State,
    partial: PartialRecord,
    lines_ingested: u64,
    records_emitted: u64,
}

impl<F> RecordProcessor<F>
where
    F: FnMut(Record) -> Result<()>,
{
    pub fn new(on_record: F) -> Self {
        Self {
            classifier: LineClassifier::new(),
            on_record,
            state: State::Default,
            partial: PartialRecord::new(),
            lines_ingested: 0,
            records_emitted: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// True while fields of an unfinished record are held
    pub fn has_pending(&self) -> bool {
        !self.partial.is_empty()
    }

    pub fn lines_ingested(&self) -> u64 {
        self.lines_ingested
    }

    pub fn records_emitted(&self) -> u64 {
        self.records_emitted
    }

    /// Process the next line of the statement
    ///
    /// Fails on a line that has no transition from the current state, and
    /// passes through any error returned by the record callback. After an
    /// error the processor should not be fed further lines.
    pub fn ingest(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        self.lines_ingested += 1;

        let event = self.classifier.classify(line);
        let Some(t) = transition(self.state, event) else {
            tracing::error!(
                line_number = self.lines_ingested,
                state = %self.state,
                event = %event,
                "Undefined transition for line {:?}",
                line
            );
            return Err(Error::UndefinedTransition {
                state: self.state.to_string(),
                event: event.to_string(),
                line_number: self.lines_ingested,
                line: line.to_string(),
            });
        };

        tracing::trace!(
            line_number = self.lines_ingested,
            "{} + {} -> {} ({:?})",
            self.state,
            event,
            t.next,
            t.action
        );

        let completed = self.apply(t.action, event, line)?;
        self.state = t.next;

        if let Some(record) = completed {
            tracing::debug!("Emitting record {}", record);
            (self.on_record)(record)?;
            self.records_emitted += 1;
        }

        Ok(())
    }

    /// Run an action against the partial record, returning a record once complete
    fn apply(&mut self, action: Action, event: Event, line: &str) -> Result<Option<Record>> {
        match action {
            Action::Noop => Ok(None),
            Action::CaptureRecordId => {
                let caps = classifier::capture_record_id(line)
                    .ok_or_else(|| mismatch(event, line))?;
                self.partial.set_record_id(&caps);
                Ok(None)
            }
            Action::CaptureCusip => {
                self.partial.set_cusip(line);
                Ok(None)
            }
            Action::CaptureDataAndEmit => {
                let caps = classifier::capture_data(line).ok_or_else(|| mismatch(event, line))?;
                self.partial.set_data(&caps);
                self.partial.build().map(Some)
            }
        }
    }

    /// Report counters, warning about a trailing unfinished record group
    pub fn finish(self) -> ProcessSummary {
        let incomplete = self.state != State::Default || self.has_pending();
        if incomplete {
            tracing::warn!(
                state = %self.state,
                "Input ended in the middle of a record group; partial record dropped"
            );
        }

        ProcessSummary {
            lines_ingested: self.lines_ingested,
            records_emitted: self.records_emitted,
            incomplete,
        }
    }
}

fn mismatch(event: Event, line: &str) -> Error {
    Error::FragmentMismatch {
        event: event.to_string(),
        line: line.to_string(),
    }
}
