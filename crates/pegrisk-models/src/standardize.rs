use crate::error::ModelError;

/// z-score of `value` against a reference mean and standard deviation.
///
/// A zero or non-finite standard deviation, or a non-finite result, is an
/// error rather than a NaN/Infinity handed to the caller.
pub fn standardize(value: f64, mean: f64, sd: f64) -> Result<f64, ModelError> {
    if sd == 0.0 || !sd.is_finite() {
        return Err(ModelError::degenerate(
            "standardize",
            format!("standard deviation {sd} cannot scale a z-score"),
        ));
    }
    let z = (value - mean) / sd;
    if !z.is_finite() {
        return Err(ModelError::degenerate(
            "standardize",
            format!("z-score of {value} against mean {mean}, sd {sd} is not finite"),
        ));
    }
    Ok(z)
}
