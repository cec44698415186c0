use pegrisk_core::models::prediction::RiskCategory;

/// High when `probability >= cutoff`. No rounding before the comparison.
pub fn classify(probability: f64, cutoff: f64) -> RiskCategory {
    if probability < cutoff {
        RiskCategory::Low
    } else {
        RiskCategory::High
    }
}
