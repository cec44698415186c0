use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A single raw value submitted for one field.
///
/// JSON numbers become [`FieldValue::Number`]; strings that parse as an
/// ISO 8601 date become [`FieldValue::Date`]; any other string is a
/// categorical token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FieldValue {
    Number(f64),
    Date(Date),
    Choice(String),
}

impl FieldValue {
    /// Parse a raw form string as a number. Non-finite values are rejected.
    pub fn parse_number(field: &str, raw: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidNumber {
            field: field.to_string(),
            raw: raw.to_string(),
        };
        let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(FieldValue::Number(value))
    }

    /// Parse a raw form string as a calendar date (`YYYY-MM-DD`).
    pub fn parse_date(field: &str, raw: &str) -> Result<Self, CoreError> {
        raw.trim()
            .parse::<Date>()
            .map(FieldValue::Date)
            .map_err(|source| CoreError::InvalidDate {
                field: field.to_string(),
                raw: raw.to_string(),
                source,
            })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Number(_) => "number",
            FieldValue::Date(_) => "date",
            FieldValue::Choice(_) => "choice",
        }
    }
}

/// Field id → raw value, built once per evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InputRecord(BTreeMap<String, FieldValue>);

impl InputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder-style insert.
    pub fn with(mut self, id: impl Into<String>, value: FieldValue) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.0.insert(id.into(), value)
    }

    /// Merge another record into this one; values in `other` win.
    pub fn extend(&mut self, other: InputRecord) {
        self.0.extend(other.0);
    }

    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.0.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn number(&self, id: &str) -> Result<f64, CoreError> {
        match self.require(id)? {
            FieldValue::Number(v) => Ok(*v),
            other => Err(wrong_type(id, "number", other)),
        }
    }

    pub fn date(&self, id: &str) -> Result<Date, CoreError> {
        match self.require(id)? {
            FieldValue::Date(d) => Ok(*d),
            other => Err(wrong_type(id, "date", other)),
        }
    }

    pub fn choice(&self, id: &str) -> Result<&str, CoreError> {
        match self.require(id)? {
            FieldValue::Choice(c) => Ok(c),
            other => Err(wrong_type(id, "choice", other)),
        }
    }

    fn require(&self, id: &str) -> Result<&FieldValue, CoreError> {
        self.0
            .get(id)
            .ok_or_else(|| CoreError::MissingField(id.to_string()))
    }
}

fn wrong_type(id: &str, expected: &'static str, found: &FieldValue) -> CoreError {
    CoreError::WrongType {
        field: id.to_string(),
        expected,
        found: found.kind_name(),
    }
}
