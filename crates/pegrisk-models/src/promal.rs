//! PRO-MAL: protein-malnutrition survival score.
//!
//! Each serum marker is standardized against its reference distribution and
//! weighted by its loading on the first principal component. The raw score
//! is compared directly against [`THRESHOLD`]; there is no logistic step.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pegrisk_core::models::promal::{ProMalDiagnostics, ProMalResult, SurvivalCategory};
use pegrisk_core::models::record::InputRecord;

use crate::error::ModelError;
use crate::fields::{validate_record, FieldSpec};
use crate::registry::ModelId;
use crate::standardize::standardize;

/// Scores at or above this value are classified Long Survival.
pub const THRESHOLD: f64 = 0.19;

/// Reference mean, standard deviation and eigenvector loading of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MarkerReference {
    pub mean: f64,
    pub sd: f64,
    pub eigenvector: f64,
}

// The reference means, SDs and first-component loadings below are
// provisional placeholders, not the published PRO-MAL parameters. Replace
// all three markers together once the published values are available.

/// Serum albumin, g/dL. Provisional.
pub const ALBUMIN: MarkerReference = MarkerReference {
    mean: 4.18,
    sd: 0.36,
    eigenvector: 0.6070,
};

/// Serum prealbumin (transthyretin), mg/dL. Provisional.
pub const PREALBUMIN: MarkerReference = MarkerReference {
    mean: 25.9,
    sd: 6.3,
    eigenvector: 0.5608,
};

/// Serum transferrin, mg/dL. Provisional.
pub const TRANSFERRIN: MarkerReference = MarkerReference {
    mean: 236.0,
    sd: 41.0,
    eigenvector: 0.5633,
};

const ALBUMIN_FIELD: &str = "albumin";
const PREALBUMIN_FIELD: &str = "prealbumin";
const TRANSFERRIN_FIELD: &str = "transferrin";

/// Raw marker values for one patient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProMalMarkers {
    pub albumin: f64,
    pub prealbumin: f64,
    pub transferrin: f64,
}

pub struct ProMal;

impl ProMal {
    pub fn id(&self) -> ModelId {
        ModelId::ProMal
    }

    pub fn name(&self) -> &str {
        "PRO-MAL Score"
    }

    pub fn short_name(&self) -> &str {
        "PRO-MAL"
    }

    pub fn threshold(&self) -> f64 {
        THRESHOLD
    }

    pub fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            vec![
                FieldSpec::number(ALBUMIN_FIELD, "Albumin, g/dL", 1.0, 6.0, Some(0.1)),
                FieldSpec::number(PREALBUMIN_FIELD, "Prealbumin, mg/dL", 1.0, 60.0, Some(0.1)),
                FieldSpec::number(TRANSFERRIN_FIELD, "Transferrin, mg/dL", 50.0, 500.0, None),
            ]
        });
        &FIELDS
    }

    /// Validate a submitted record and score it.
    pub fn predict(&self, record: &InputRecord, today: Date) -> Result<ProMalResult, ModelError> {
        let record = validate_record(self.name(), self.fields(), record, today)?;
        self.score(ProMalMarkers {
            albumin: record.number(ALBUMIN_FIELD)?,
            prealbumin: record.number(PREALBUMIN_FIELD)?,
            transferrin: record.number(TRANSFERRIN_FIELD)?,
        })
    }

    pub fn score(&self, markers: ProMalMarkers) -> Result<ProMalResult, ModelError> {
        let standardized = ProMalDiagnostics {
            albumin_z: standardize(markers.albumin, ALBUMIN.mean, ALBUMIN.sd)?,
            prealbumin_z: standardize(markers.prealbumin, PREALBUMIN.mean, PREALBUMIN.sd)?,
            transferrin_z: standardize(markers.transferrin, TRANSFERRIN.mean, TRANSFERRIN.sd)?,
        };

        let score = ALBUMIN.eigenvector * standardized.albumin_z
            + PREALBUMIN.eigenvector * standardized.prealbumin_z
            + TRANSFERRIN.eigenvector * standardized.transferrin_z;

        let category = if score < THRESHOLD {
            SurvivalCategory::ShortSurvival
        } else {
            SurvivalCategory::LongSurvival
        };

        tracing::debug!(score, category = category.label(), "pro-mal evaluated");

        Ok(ProMalResult {
            score,
            category,
            standardized,
        })
    }
}
