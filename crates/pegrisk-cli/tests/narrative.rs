use jiff::civil::date;
use pegrisk_core::models::prediction::{CohortCount, CohortEstimate, RiskCategory};
use pegrisk_core::models::record::{FieldValue, InputRecord};
use pegrisk_cli::narrative::{cohort_statement, render_text, risk_statement};
use pegrisk_models::{evaluate, EvaluationContext, ModelId};

#[test]
fn risk_statements_differ_by_category() {
    assert!(risk_statement(RiskCategory::High).starts_with("The patient is expected"));
    assert!(risk_statement(RiskCategory::Low).starts_with("The patient is not expected"));
    assert!(risk_statement(RiskCategory::Low).ends_with("Continue standard monitoring."));
}

#[test]
fn cohort_range_with_high_framing() {
    let text = cohort_statement(&CohortEstimate {
        count: CohortCount::Range {
            lower: 80,
            upper: 94,
        },
        framing: RiskCategory::High,
    });
    assert!(text.contains("between 80 to 94 are expected to actually require PEG placement"));
}

#[test]
fn cohort_single_with_low_framing() {
    let text = cohort_statement(&CohortEstimate {
        count: CohortCount::Single { count: 18 },
        framing: RiskCategory::Low,
    });
    assert!(text.contains(" 18 are still expected to require PEG placement"));
    assert!(!text.contains("between"));
}

#[test]
fn full_peg_report() {
    let record = InputRecord::new()
        .with("age", FieldValue::Number(55.0))
        .with("onset_site", FieldValue::Choice("bulbar".to_string()))
        .with("niv_use", FieldValue::Choice("yes".to_string()));
    let evaluation = evaluate(
        ModelId::Anamnestic,
        &record,
        &EvaluationContext::new(date(2025, 1, 1)),
    )
    .unwrap();

    let text = render_text(&evaluation);
    assert!(text.starts_with("Anamnestic Prediction Model (A-PM)"));
    assert!(text.contains("Risk: High"));
    assert!(text.contains("between 80 to 94"));
}

#[test]
fn full_promal_report() {
    let record = InputRecord::new()
        .with("albumin", FieldValue::Number(3.5))
        .with("prealbumin", FieldValue::Number(15.0))
        .with("transferrin", FieldValue::Number(180.0));
    let evaluation = evaluate(
        ModelId::ProMal,
        &record,
        &EvaluationContext::new(date(2025, 1, 1)),
    )
    .unwrap();

    let text = render_text(&evaluation);
    assert!(text.contains("Prognosis: Short Survival"));
    assert!(text.contains("- Albumin: -"));
}
