use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SurvivalCategory {
    ShortSurvival,
    LongSurvival,
}

impl SurvivalCategory {
    pub fn label(self) -> &'static str {
        match self {
            SurvivalCategory::ShortSurvival => "Short Survival",
            SurvivalCategory::LongSurvival => "Long Survival",
        }
    }
}

/// Standardized (z-score) value of each PRO-MAL marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProMalDiagnostics {
    pub albumin_z: f64,
    pub prealbumin_z: f64,
    pub transferrin_z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProMalResult {
    pub score: f64,
    pub category: SurvivalCategory,
    pub standardized: ProMalDiagnostics,
}
