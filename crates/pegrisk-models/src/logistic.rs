//! Logistic scoring primitives shared by the PEG models.

use crate::error::ModelError;

/// Standard logistic transform `1 / (1 + e^(-logit))`.
pub fn logistic(logit: f64) -> f64 {
    1.0 / (1.0 + (-logit).exp())
}

/// Largest and smallest values a reported probability may take.
pub const MAX_REPORTED: f64 = 1.0 - f64::EPSILON / 2.0;
pub const MIN_REPORTED: f64 = f64::MIN_POSITIVE;

/// Turn a linear predictor into a probability.
///
/// Only a non-finite logit is an error. A finite logit large enough that
/// the transform rounds to exactly 0 or 1 is still a valid, extreme
/// prediction; use [`reported`] before showing it.
pub fn probability(logit: f64) -> Result<f64, ModelError> {
    if !logit.is_finite() {
        return Err(ModelError::degenerate(
            "logit",
            format!("linear predictor {logit} is not finite"),
        ));
    }
    Ok(logistic(logit))
}

/// Pull a saturated probability back inside the open interval (0, 1).
pub fn reported(p: f64) -> f64 {
    p.clamp(MIN_REPORTED, MAX_REPORTED)
}

/// 1.0 when the flag is set, 0.0 otherwise.
pub fn indicator(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}
