use pegrisk_core::models::record::InputRecord;

use crate::cohort::CohortTable;
use crate::error::ModelError;
use crate::fields::FieldSpec;
use crate::peg::{age_field, PegModel, AGE};
use crate::registry::ModelId;

/// AF-PM: age, ALSFRS-R bulbar subscore and seated FVC%.
pub struct Functional;

const BULBAR_SCORE: &str = "bulbar_score";
const FVC: &str = "fvc";

const INTERCEPT: f64 = 3.3238;
const AGE_COEF: f64 = 0.0730;
const BULBAR_SCORE_COEF: f64 = -0.6943;
const FVC_COEF: f64 = -0.0317;

static COHORT: CohortTable = CohortTable::new([0, 9, 14, 17, 18, 87, 88, 92, 99, 100]);

impl PegModel for Functional {
    fn id(&self) -> ModelId {
        ModelId::Functional
    }

    fn name(&self) -> &str {
        "Anamnestic and Functional Prediction Model"
    }

    fn short_name(&self) -> &str {
        "AF-PM"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            vec![
                age_field(),
                FieldSpec::number(BULBAR_SCORE, "Bulbar Subscore", 0.0, 12.0, None),
                FieldSpec::number(FVC, "FVC%, seated", 0.0, 150.0, Some(0.1)),
            ]
        });
        &FIELDS
    }

    fn cutoff(&self) -> f64 {
        0.5779
    }

    fn cohort_table(&self) -> &CohortTable {
        &COHORT
    }

    fn logit(&self, record: &InputRecord) -> Result<f64, ModelError> {
        Ok(INTERCEPT
            + AGE_COEF * record.number(AGE)?
            + BULBAR_SCORE_COEF * record.number(BULBAR_SCORE)?
            + FVC_COEF * record.number(FVC)?)
    }
}
