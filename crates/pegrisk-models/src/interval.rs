//! Fractional month interval between two calendar dates.

use jiff::civil::Date;

/// Months from `start` to `end`, as whole (year, month) steps plus the day
/// difference over the length of `end`'s month, rounded to one decimal.
///
/// The result is negative when `end` precedes `start`; callers decide
/// whether that is acceptable. Rounding is done on the exact rational value
/// with ties away from zero, so `3.25` becomes `3.3` and `-3.25` becomes
/// `-3.3`.
pub fn months_between(start: Date, end: Date) -> f64 {
    let whole_months = (i64::from(end.year()) - i64::from(start.year())) * 12
        + (i64::from(end.month()) - i64::from(start.month()));
    let day_delta = i64::from(end.day()) - i64::from(start.day());
    let days_in_month = i64::from(end.days_in_month());

    // months * 10 == numerator / days_in_month
    let numerator = (whole_months * days_in_month + day_delta) * 10;
    let tenths = round_half_away(numerator, days_in_month);

    tenths as f64 / 10.0
}

fn round_half_away(numerator: i64, denominator: i64) -> i64 {
    let magnitude = (2 * numerator.abs() + denominator) / (2 * denominator);
    if numerator < 0 { -magnitude } else { magnitude }
}
