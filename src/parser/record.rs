//! Sold security lot records

use crate::error::{Error, Result};
use crate::parser::classifier::{DataCaptures, RecordIdCaptures};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One sold lot, assembled from its three statement lines
///
/// All values are kept exactly as they appear in the statement text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub cusip: String,
    pub quantity: String,
    /// A `MM/DD/YY` date, or `VARIOUS` for lots bought over several dates
    pub acquired_date: String,
    pub sold_date: String,
    pub gross_proceeds: String,
    pub cost_basis: String,
}

impl Record {
    /// Column names in row order
    pub const COLUMNS: [&'static str; 8] = [
        "id",
        "name",
        "cusip",
        "quantity",
        "acquired_date",
        "sold_date",
        "gross_proceeds",
        "cost_basis",
    ];

    /// Field values in row order
    pub fn to_row(&self) -> [&str; 8] {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.cusip.as_str(),
            self.quantity.as_str(),
            self.acquired_date.as_str(),
            self.sold_date.as_str(),
            self.gross_proceeds.as_str(),
            self.cost_basis.as_str(),
        ]
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_row().join(" "))
    }
}

/// Fields captured so far for the record in flight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PartialRecord {
    id: Option<String>,
    name: Option<String>,
    cusip: Option<String>,
    quantity: Option<String>,
    acquired_date: Option<String>,
    sold_date: Option<String>,
    gross_proceeds: Option<String>,
    cost_basis: Option<String>,
}

impl PartialRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_record_id(&mut self, caps: &RecordIdCaptures<'_>) {
        self.id = Some(caps.id.to_string());
        self.name = Some(caps.name.to_string());
    }

    pub fn set_cusip(&mut self, cusip: &str) {
        self.cusip = Some(cusip.to_string());
    }

    pub fn set_data(&mut self, caps: &DataCaptures<'_>) {
        self.quantity = Some(caps.quantity.to_string());
        self.acquired_date = Some(caps.acquired_date.to_string());
        self.sold_date = Some(caps.sold_date.to_string());
        self.gross_proceeds = Some(caps.gross_proceeds.to_string());
        self.cost_basis = Some(caps.cost_basis.to_string());
    }

    /// True when no field has been captured
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Take the captured fields out as a complete record, leaving `self` empty
    ///
    /// Fails with [`Error::MissingField`] naming the first absent field, in
    /// which case `self` is left untouched.
    pub fn build(&mut self) -> Result<Record> {
        let record = Record {
            id: required(&self.id, "id")?,
            name: required(&self.name, "name")?,
            cusip: required(&self.cusip, "cusip")?,
            quantity: required(&self.quantity, "quantity")?,
            acquired_date: required(&self.acquired_date, "acquired_date")?,
            sold_date: required(&self.sold_date, "sold_date")?,
            gross_proceeds: required(&self.gross_proceeds, "gross_proceeds")?,
            cost_basis: required(&self.cost_basis, "cost_basis")?,
        };
        self.clear();
        Ok(record)
    }
}

fn required(field: &Option<String>, name: &'static str) -> Result<String> {
    field.clone().ok_or(Error::MissingField(name))
}
