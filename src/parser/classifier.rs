//! Line classification
//!
//! Maps a single line of extracted statement text to one of a closed set of
//! events. Patterns are tried in list order and the first match wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// `00002 HOOLI INC`
static RECORD_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<id>\d{4,5}) (?P<name>.*)$").expect("valid regex"));

/// `30303M102`
static CUSIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{9}$").expect("valid regex"));

/// `1.0000 03/25/16 04/25/16 $1,166.00 $1,882.00`
static DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^
        (?P<quantity>[\d.]+)\x20
        (?P<acquired_date>VARIOUS|\d\d/\d\d/\d\d)\x20
        (?P<sold_date>\d\d/\d\d/\d\d)\x20
        \$(?P<gross_proceeds>[\d.,]+)\x20
        \$(?P<cost_basis>[\d.,]+)
        $
        ",
    )
    .expect("valid regex")
});

/// Category of a statement line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Holding identifier followed by its name
    RecordId,
    /// Nine character security identifier
    Cusip,
    /// Quantity, dates and amounts of one lot
    Data,
    /// Anything else (headers, footers, totals)
    Other,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::RecordId => "RecordId",
            Event::Cusip => "Cusip",
            Event::Data => "Data",
            Event::Other => "Other",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Captures of a record id line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIdCaptures<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

/// Captures of a data line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataCaptures<'a> {
    pub quantity: &'a str,
    pub acquired_date: &'a str,
    pub sold_date: &'a str,
    pub gross_proceeds: &'a str,
    pub cost_basis: &'a str,
}

/// Extract id and name from a record id line
pub fn capture_record_id(line: &str) -> Option<RecordIdCaptures<'_>> {
    let caps = RECORD_ID_RE.captures(line)?;
    Some(RecordIdCaptures {
        id: caps.name("id")?.as_str(),
        name: caps.name("name")?.as_str(),
    })
}

/// Extract quantity, dates and amounts from a data line
pub fn capture_data(line: &str) -> Option<DataCaptures<'_>> {
    let caps = DATA_RE.captures(line)?;
    Some(DataCaptures {
        quantity: caps.name("quantity")?.as_str(),
        acquired_date: caps.name("acquired_date")?.as_str(),
        sold_date: caps.name("sold_date")?.as_str(),
        gross_proceeds: caps.name("gross_proceeds")?.as_str(),
        cost_basis: caps.name("cost_basis")?.as_str(),
    })
}

/// Stateless line classifier
///
/// Holds the ordered `(pattern, event)` list. A data line whose quantity is a
/// four or five digit integer also matches the record id pattern, so the order
/// of the list is part of the contract.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    matchers: Vec<(&'static Regex, Event)>,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            matchers: vec![
                (&*RECORD_ID_RE, Event::RecordId),
                (&*CUSIP_RE, Event::Cusip),
                (&*DATA_RE, Event::Data),
            ],
        }
    }

    /// Classify one (already trimmed) line
    pub fn classify(&self, line: &str) -> Event {
        self.matchers
            .iter()
            .find(|(re, _)| re.is_match(line))
            .map(|(_, event)| *event)
            .unwrap_or(Event::Other)
    }
}
