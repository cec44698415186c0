use pegrisk_core::models::record::InputRecord;

use crate::cohort::CohortTable;
use crate::error::ModelError;
use crate::fields::FieldSpec;
use crate::peg::{age_field, bulbar_onset, niv_in_use, niv_use_field, onset_site_field, PegModel, AGE};
use crate::registry::ModelId;

/// A-PM: age, site of onset and NIV use at evaluation.
pub struct Anamnestic;

const INTERCEPT: f64 = -2.9255;
const AGE_COEF: f64 = 0.0408;
const BULBAR_COEF: f64 = 0.9503;
const NIV_COEF: f64 = 1.0346;

static COHORT: CohortTable = CohortTable::new([0, 25, 28, 32, 34, 66, 80, 94, 100, 100]);

impl PegModel for Anamnestic {
    fn id(&self) -> ModelId {
        ModelId::Anamnestic
    }

    fn name(&self) -> &str {
        "Anamnestic Prediction Model"
    }

    fn short_name(&self) -> &str {
        "A-PM"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> =
            std::sync::LazyLock::new(|| vec![age_field(), onset_site_field(), niv_use_field()]);
        &FIELDS
    }

    fn cutoff(&self) -> f64 {
        0.5258
    }

    fn cohort_table(&self) -> &CohortTable {
        &COHORT
    }

    fn logit(&self, record: &InputRecord) -> Result<f64, ModelError> {
        let age = record.number(AGE)?;
        Ok(INTERCEPT
            + AGE_COEF * age
            + BULBAR_COEF * bulbar_onset(record)?
            + NIV_COEF * niv_in_use(record)?)
    }
}
