use jiff::civil::date;
use pegrisk_core::models::promal::SurvivalCategory;
use pegrisk_core::models::record::{FieldValue, InputRecord};
use pegrisk_models::error::ModelError;
use pegrisk_models::promal::{ProMal, ProMalMarkers, ALBUMIN, PREALBUMIN, THRESHOLD, TRANSFERRIN};
use pegrisk_models::standardize::standardize;

fn markers(albumin: f64, prealbumin: f64, transferrin: f64) -> ProMalMarkers {
    ProMalMarkers {
        albumin,
        prealbumin,
        transferrin,
    }
}

#[test]
fn low_markers_mean_short_survival() {
    let result = ProMal.score(markers(3.5, 15.0, 180.0)).unwrap();
    assert!(result.standardized.albumin_z < 0.0);
    assert!(result.standardized.prealbumin_z < 0.0);
    assert!(result.standardized.transferrin_z < 0.0);
    assert!(result.score < THRESHOLD);
    assert_eq!(result.category, SurvivalCategory::ShortSurvival);
    assert_eq!(result.category.label(), "Short Survival");
}

#[test]
fn high_markers_mean_long_survival() {
    let result = ProMal.score(markers(4.8, 35.0, 300.0)).unwrap();
    assert!(result.score > THRESHOLD);
    assert_eq!(result.category, SurvivalCategory::LongSurvival);
}

#[test]
fn score_is_weighted_sum_of_z_values() {
    let result = ProMal.score(markers(4.0, 20.0, 220.0)).unwrap();
    let expected = ALBUMIN.eigenvector * ((4.0 - ALBUMIN.mean) / ALBUMIN.sd)
        + PREALBUMIN.eigenvector * ((20.0 - PREALBUMIN.mean) / PREALBUMIN.sd)
        + TRANSFERRIN.eigenvector * ((220.0 - TRANSFERRIN.mean) / TRANSFERRIN.sd);
    assert_eq!(result.score.to_bits(), expected.to_bits());
}

#[test]
fn reference_means_score_zero() {
    let result = ProMal
        .score(markers(ALBUMIN.mean, PREALBUMIN.mean, TRANSFERRIN.mean))
        .unwrap();
    assert_eq!(result.score, 0.0);
    assert_eq!(result.category, SurvivalCategory::ShortSurvival);
}

#[test]
fn predict_validates_before_scoring() {
    let today = date(2025, 1, 1);
    let record = InputRecord::new()
        .with("albumin", FieldValue::Number(3.5))
        .with("prealbumin", FieldValue::Number(15.0))
        .with("transferrin", FieldValue::Number(180.0));
    let result = ProMal.predict(&record, today).unwrap();
    assert_eq!(result.category, SurvivalCategory::ShortSurvival);

    let record = InputRecord::new().with("albumin", FieldValue::Number(9.0));
    let err = ProMal.predict(&record, today).unwrap_err();
    match err {
        ModelError::InvalidInput(errors) => assert_eq!(errors.len(), 3),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn standardize_guards_zero_deviation() {
    assert_eq!(standardize(5.0, 3.0, 2.0).unwrap(), 1.0);
    assert!(matches!(
        standardize(5.0, 3.0, 0.0),
        Err(ModelError::Degenerate { .. })
    ));
    assert!(matches!(
        standardize(f64::INFINITY, 3.0, 2.0),
        Err(ModelError::Degenerate { .. })
    ));
}
