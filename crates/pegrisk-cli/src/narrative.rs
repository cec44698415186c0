//! Plain-text rendering of evaluation results.

use pegrisk_core::models::prediction::{CohortCount, CohortEstimate, RiskCategory};
use pegrisk_core::models::promal::ProMalResult;
use pegrisk_models::peg::PegAssessment;
use pegrisk_models::Evaluation;

const COHORT_PREFIX: &str =
    "Based on the clinical data provided, among 100 patients with the same disease conditions,";

pub fn risk_statement(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::High => {
            "The patient is expected to require PEG placement within the next 6 months.\n\
             A specialist assessment is recommended."
        }
        RiskCategory::Low => {
            "The patient is not expected to require PEG placement within the next 6 months.\n\
             Continue standard monitoring."
        }
    }
}

pub fn cohort_statement(estimate: &CohortEstimate) -> String {
    let verb = match estimate.framing {
        RiskCategory::High => "expected to actually require",
        RiskCategory::Low => "still expected to require",
    };
    match estimate.count {
        CohortCount::Single { count } => {
            format!("{COHORT_PREFIX} {count} are {verb} PEG placement within the next 6 months.")
        }
        CohortCount::Range { lower, upper } => format!(
            "{COHORT_PREFIX} between {lower} to {upper} are {verb} PEG placement within the next 6 months."
        ),
    }
}

fn render_peg(assessment: &PegAssessment) -> String {
    let model = assessment.model.model();
    format!(
        "{name} ({short})\n\
         Probability: {probability:.4} (cutoff {cutoff})\n\
         Risk: {risk}\n\n\
         {statement}\n\n\
         {cohort}\n",
        name = model.name(),
        short = model.short_name(),
        probability = assessment.prediction.probability,
        cutoff = model.cutoff(),
        risk = assessment.prediction.category.label(),
        statement = risk_statement(assessment.prediction.category),
        cohort = cohort_statement(&assessment.cohort),
    )
}

fn render_promal(result: &ProMalResult) -> String {
    format!(
        "PRO-MAL Score\n\
         Score: {score:.3} (threshold {threshold})\n\
         Prognosis: {category}\n\n\
         Standardized values:\n\
         - Albumin: {albumin:.3}\n\
         - Prealbumin: {prealbumin:.3}\n\
         - Transferrin: {transferrin:.3}\n",
        score = result.score,
        threshold = pegrisk_models::promal::THRESHOLD,
        category = result.category.label(),
        albumin = result.standardized.albumin_z,
        prealbumin = result.standardized.prealbumin_z,
        transferrin = result.standardized.transferrin_z,
    )
}

pub fn render_text(evaluation: &Evaluation) -> String {
    match evaluation {
        Evaluation::Peg(assessment) => render_peg(assessment),
        Evaluation::ProMal(result) => render_promal(result),
    }
}
