use pegrisk_core::models::record::InputRecord;

use crate::cohort::CohortTable;
use crate::error::ModelError;
use crate::fields::{FieldSpec, ValidationError, ValidationErrorKind};
use crate::interval::months_between;
use crate::peg::{age_field, bulbar_onset, niv_in_use, niv_use_field, onset_site_field, PegModel, AGE};
use crate::registry::ModelId;

/// AN-PM: the anamnestic predictors plus BMI and the rate of weight loss
/// since disease onset.
pub struct Nutritional;

const BMI: &str = "bmi";
const PRE_WEIGHT: &str = "pre_weight";
const POST_WEIGHT: &str = "post_weight";
const ONSET_DATE: &str = "onset_date";
const EVAL_DATE: &str = "eval_date";

const INTERCEPT: f64 = 0.9190;
const AGE_COEF: f64 = 0.0455;
const BULBAR_COEF: f64 = 0.7473;
const NIV_COEF: f64 = 1.2324;
const BMI_COEF: f64 = -0.2014;
const WEIGHT_LOSS_RATE_COEF: f64 = 0.8990;

static COHORT: CohortTable = CohortTable::new([0, 9, 14, 16, 18, 87, 88, 92, 99, 100]);

impl PegModel for Nutritional {
    fn id(&self) -> ModelId {
        ModelId::Nutritional
    }

    fn name(&self) -> &str {
        "Anamnestic and Nutritional Prediction Model"
    }

    fn short_name(&self) -> &str {
        "AN-PM"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            vec![
                age_field(),
                onset_site_field(),
                niv_use_field(),
                FieldSpec::number(BMI, "BMI at Evaluation, kg/m²", 10.0, 50.0, Some(0.1)),
                FieldSpec::number(PRE_WEIGHT, "Premorbid Weight, kg", 0.0, 150.0, None),
                FieldSpec::number(POST_WEIGHT, "Weight at Evaluation, kg", 0.0, 150.0, None),
                FieldSpec::date(ONSET_DATE, "Date of Disease Onset"),
                FieldSpec::date(EVAL_DATE, "Date of Evaluation"),
            ]
        });
        &FIELDS
    }

    fn cutoff(&self) -> f64 {
        0.5167
    }

    fn cohort_table(&self) -> &CohortTable {
        &COHORT
    }

    fn logit(&self, record: &InputRecord) -> Result<f64, ModelError> {
        let age = record.number(AGE)?;
        let bmi = record.number(BMI)?;
        let weight_loss = WEIGHT_LOSS_RATE_COEF * weight_loss_percent(record)?;
        let months = months_since_onset(record)?;

        Ok(INTERCEPT
            + AGE_COEF * age
            + BULBAR_COEF * bulbar_onset(record)?
            + NIV_COEF * niv_in_use(record)?
            + BMI_COEF * bmi
            + weight_loss / months)
    }
}

/// `100 * (1 - post / pre)`: percent of premorbid weight lost.
fn weight_loss_percent(record: &InputRecord) -> Result<f64, ModelError> {
    let pre = record.number(PRE_WEIGHT)?;
    let post = record.number(POST_WEIGHT)?;
    if pre == 0.0 {
        return Err(ModelError::degenerate(
            "weight loss rate",
            "premorbid weight is zero",
        ));
    }
    Ok(100.0 * (1.0 - post / pre))
}

/// Disease duration in months, rounded to one decimal. Must be positive.
fn months_since_onset(record: &InputRecord) -> Result<f64, ModelError> {
    let onset = record.date(ONSET_DATE)?;
    let evaluation = record.date(EVAL_DATE)?;
    if evaluation < onset {
        return Err(ModelError::InvalidInput(vec![ValidationError {
            field_id: EVAL_DATE.to_string(),
            kind: ValidationErrorKind::OutOfRange,
            message: format!(
                "Anamnestic and Nutritional Prediction Model: Date of Evaluation {evaluation} \
                 precedes Date of Disease Onset {onset}"
            ),
        }]));
    }

    // Day-of-month arithmetic can go negative across short month ends
    // (Jan 31 to Feb 1 is -0.1), which would flip the sign of the rate.
    let months = months_between(onset, evaluation);
    if months == 0.0 {
        return Err(ModelError::degenerate(
            "weight loss rate",
            format!("{onset} to {evaluation} rounds to zero months since onset"),
        ));
    }
    if months < 0.0 {
        return Err(ModelError::degenerate(
            "weight loss rate",
            format!("{onset} to {evaluation} gives a negative month count ({months})"),
        ));
    }
    Ok(months)
}
