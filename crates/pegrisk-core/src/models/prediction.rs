use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Binary PEG-placement risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskCategory {
    Low,
    High,
}

impl RiskCategory {
    pub fn label(self) -> &'static str {
        match self {
            RiskCategory::Low => "Low",
            RiskCategory::High => "High",
        }
    }
}

/// Output of a logistic PEG model. Recomputed on every submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResult {
    pub probability: f64,
    pub category: RiskCategory,
}

/// Expected occurrences per 100 similar patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum CohortCount {
    Single { count: u8 },
    Range { lower: u8, upper: u8 },
}

/// Cohort payload handed to the renderer: the count plus which narrative
/// framing (High: "expected to actually require", Low: "still expected to
/// require") applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CohortEstimate {
    pub count: CohortCount,
    pub framing: RiskCategory,
}
