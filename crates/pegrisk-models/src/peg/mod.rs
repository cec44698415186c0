//! PEG-placement logistic models.

pub mod anamnestic;
pub mod functional;
pub mod nutritional;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pegrisk_core::models::prediction::{CohortEstimate, PredictionResult};
use pegrisk_core::models::record::InputRecord;

use crate::classify::classify;
use crate::cohort::{interpolate, CohortTable};
use crate::error::ModelError;
use crate::fields::{validate_record, FieldSpec};
use crate::logistic;
use crate::registry::ModelId;

/// Trait implemented by each PEG-placement prediction model.
pub trait PegModel: Send + Sync {
    fn id(&self) -> ModelId;

    /// Human-readable name (e.g., "Anamnestic Prediction Model").
    fn name(&self) -> &str;

    /// Abbreviation used in the literature (e.g., "A-PM").
    fn short_name(&self) -> &str;

    /// Ordered input fields.
    fn fields(&self) -> &[FieldSpec];

    /// Probability at or above which the patient is classified High.
    fn cutoff(&self) -> f64;

    fn cohort_table(&self) -> &CohortTable;

    /// Linear predictor for a record that already passed validation.
    fn logit(&self, record: &InputRecord) -> Result<f64, ModelError>;

    /// Validate, score, classify and interpret one record.
    fn predict(&self, record: &InputRecord, today: Date) -> Result<PegAssessment, ModelError> {
        let record = validate_record(self.name(), self.fields(), record, today)?;
        let logit = self.logit(&record)?;
        // Classify and interpolate on the exact transform so a saturated
        // logit lands on the top or bottom cohort slot.
        let raw = logistic::probability(logit)?;
        let category = classify(raw, self.cutoff());
        let cohort = interpolate(raw, self.cutoff(), self.cohort_table());
        let probability = logistic::reported(raw);

        tracing::debug!(
            model = self.short_name(),
            logit,
            probability,
            category = category.label(),
            "peg model evaluated"
        );

        Ok(PegAssessment {
            model: self.id(),
            logit,
            prediction: PredictionResult {
                probability,
                category,
            },
            cohort,
        })
    }
}

/// Everything the result page shows for a PEG model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PegAssessment {
    pub model: ModelId,
    pub logit: f64,
    pub prediction: PredictionResult,
    pub cohort: CohortEstimate,
}

pub(crate) const AGE: &str = "age";
pub(crate) const ONSET_SITE: &str = "onset_site";
pub(crate) const NIV_USE: &str = "niv_use";

pub(crate) fn age_field() -> FieldSpec {
    FieldSpec::number(AGE, "Age at Evaluation, years", 18.0, 100.0, None)
}

pub(crate) fn onset_site_field() -> FieldSpec {
    FieldSpec::select(
        ONSET_SITE,
        "Site of Onset",
        &[("bulbar", "Bulbar"), ("spinal", "Spinal")],
    )
}

pub(crate) fn niv_use_field() -> FieldSpec {
    FieldSpec::select(
        NIV_USE,
        "Use of NIV at Evaluation",
        &[("yes", "Yes"), ("no", "No")],
    )
}

pub(crate) fn bulbar_onset(record: &InputRecord) -> Result<f64, ModelError> {
    Ok(logistic::indicator(record.choice(ONSET_SITE)? == "bulbar"))
}

pub(crate) fn niv_in_use(record: &InputRecord) -> Result<f64, ModelError> {
    Ok(logistic::indicator(record.choice(NIV_USE)? == "yes"))
}
