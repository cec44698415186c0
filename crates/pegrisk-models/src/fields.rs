use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use pegrisk_core::error::CoreError;
use pegrisk_core::models::record::{FieldValue, InputRecord};

use crate::error::ModelError;

/// Earliest date any date field accepts.
pub const EARLIEST_DATE: Date = jiff::civil::date(1900, 1, 1);

/// Defines the valid range for a numeric field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ValueRange {
    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// One allowed token of a categorical field.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Number { range: ValueRange },
    Select { options: Vec<SelectOption> },
    /// Calendar date between `earliest` and the evaluation day.
    Date { earliest: Date },
}

/// Schema for one model input, enough to render and validate it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Numeric field. Without an explicit step, whole numbers are expected.
    pub fn number(id: &str, label: &str, min: f64, max: f64, step: Option<f64>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: FieldKind::Number {
                range: ValueRange {
                    min,
                    max,
                    step: Some(step.unwrap_or(1.0)),
                },
            },
        }
    }

    pub fn select(id: &str, label: &str, options: &[(&str, &str)]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: FieldKind::Select {
                options: options
                    .iter()
                    .map(|(value, label)| SelectOption {
                        value: value.to_string(),
                        label: label.to_string(),
                    })
                    .collect(),
            },
        }
    }

    pub fn date(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: FieldKind::Date {
                earliest: EARLIEST_DATE,
            },
        }
    }

    /// Parse a raw form string according to this field's kind.
    pub fn parse_raw(&self, raw: &str) -> Result<FieldValue, CoreError> {
        match self.kind {
            FieldKind::Number { .. } => FieldValue::parse_number(&self.id, raw),
            FieldKind::Date { .. } => FieldValue::parse_date(&self.id, raw),
            FieldKind::Select { .. } => Ok(FieldValue::Choice(raw.trim().to_string())),
        }
    }

    /// Check one submitted value, returning it in its canonical kind.
    ///
    /// Strings submitted for numeric or date fields are parsed first, so a
    /// record built from form strings validates the same as a typed one.
    pub fn check(
        &self,
        model_name: &str,
        value: Option<&FieldValue>,
        today: Date,
    ) -> Result<FieldValue, ValidationError> {
        let Some(value) = value else {
            return Err(self.error(
                ValidationErrorKind::Missing,
                format!("{model_name}: {} is required", self.label),
            ));
        };

        let value = match (&self.kind, value) {
            (FieldKind::Number { .. } | FieldKind::Date { .. }, FieldValue::Choice(raw)) => {
                self.parse_raw(raw).map_err(|e| {
                    self.error(ValidationErrorKind::WrongType, format!("{model_name}: {e}"))
                })?
            }
            _ => value.clone(),
        };

        match (&self.kind, &value) {
            (FieldKind::Number { range }, FieldValue::Number(v)) => {
                if !v.is_finite() {
                    return Err(self.error(
                        ValidationErrorKind::WrongType,
                        format!("{model_name}: {} must be a finite number", self.label),
                    ));
                }
                if !range.contains(*v) {
                    let step = range
                        .step
                        .map(|s| format!(", step {s}"))
                        .unwrap_or_default();
                    return Err(self.error(
                        ValidationErrorKind::OutOfRange,
                        format!(
                            "{model_name}: {} value {v} is outside range [{}, {}]{step}",
                            self.label, range.min, range.max,
                        ),
                    ));
                }
            }
            (FieldKind::Select { options }, FieldValue::Choice(token)) => {
                if !options.iter().any(|o| &o.value == token) {
                    let allowed: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
                    return Err(self.error(
                        ValidationErrorKind::NotAnOption,
                        format!(
                            "{model_name}: {} must be one of [{}], got '{token}'",
                            self.label,
                            allowed.join(", "),
                        ),
                    ));
                }
            }
            (FieldKind::Date { earliest }, FieldValue::Date(d)) => {
                if d < earliest || *d > today {
                    return Err(self.error(
                        ValidationErrorKind::OutOfRange,
                        format!(
                            "{model_name}: {} {d} is outside range [{earliest}, {today}]",
                            self.label,
                        ),
                    ));
                }
            }
            (kind, other) => {
                return Err(self.error(
                    ValidationErrorKind::WrongType,
                    format!(
                        "{model_name}: {} expects a {} value, got {}",
                        self.label,
                        kind.name(),
                        other.kind_name(),
                    ),
                ));
            }
        }

        Ok(value)
    }

    fn error(&self, kind: ValidationErrorKind, message: String) -> ValidationError {
        ValidationError {
            field_id: self.id.clone(),
            kind,
            message,
        }
    }
}

impl FieldKind {
    fn name(&self) -> &'static str {
        match self {
            FieldKind::Number { .. } => "number",
            FieldKind::Select { .. } => "choice",
            FieldKind::Date { .. } => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationErrorKind {
    Missing,
    Unknown,
    WrongType,
    OutOfRange,
    NotAnOption,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field_id: String,
    pub kind: ValidationErrorKind,
    pub message: String,
}

/// Validate a record against a model's fields.
///
/// Every problem is collected before returning. On success the returned
/// record holds exactly the declared fields, each in its canonical kind.
pub fn validate_record(
    model_name: &str,
    fields: &[FieldSpec],
    record: &InputRecord,
    today: Date,
) -> Result<InputRecord, ModelError> {
    let mut errors = Vec::new();

    for id in record.ids() {
        if !fields.iter().any(|f| f.id == id) {
            errors.push(ValidationError {
                field_id: id.to_string(),
                kind: ValidationErrorKind::Unknown,
                message: format!("{model_name}: unknown field '{id}'"),
            });
        }
    }

    let mut validated = InputRecord::new();
    for field in fields {
        match field.check(model_name, record.get(&field.id), today) {
            Ok(value) => {
                validated.insert(field.id.clone(), value);
            }
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(validated)
    } else {
        tracing::debug!(model = model_name, errors = errors.len(), "input rejected");
        Err(ModelError::InvalidInput(errors))
    }
}
