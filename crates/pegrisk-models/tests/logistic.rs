use pegrisk_models::error::ModelError;
use pegrisk_models::logistic::{probability, reported, MAX_REPORTED, MIN_REPORTED};

#[test]
fn large_finite_logits_are_not_errors() {
    assert_eq!(probability(800.0).unwrap(), 1.0);
    assert_eq!(probability(-800.0).unwrap(), 0.0);
}

#[test]
fn reported_probability_stays_inside_unit_interval() {
    assert_eq!(reported(1.0), MAX_REPORTED);
    assert_eq!(reported(0.0), MIN_REPORTED);
    assert!(MAX_REPORTED < 1.0);
    assert!(MIN_REPORTED > 0.0);
    assert_eq!(reported(0.5258), 0.5258);
}

#[test]
fn non_finite_logit_is_degenerate() {
    for logit in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            probability(logit),
            Err(ModelError::Degenerate { term: "logit", .. })
        ));
    }
}
