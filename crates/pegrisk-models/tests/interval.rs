use jiff::civil::date;
use pegrisk_models::interval::months_between;

#[test]
fn same_day_of_month_is_whole_months() {
    assert_eq!(months_between(date(2023, 1, 15), date(2023, 4, 15)), 3.0);
}

#[test]
fn fraction_uses_end_month_length() {
    // 2 months, then (1 - 31) / 31 days of March.
    assert_eq!(months_between(date(2023, 1, 31), date(2023, 3, 1)), 1.0);
    // 1 month, then (28 - 1) / 28 days of February 2023 = 1.964..
    assert_eq!(months_between(date(2023, 1, 1), date(2023, 2, 28)), 2.0);
    // Leap February: (29 - 1) / 29 = 0.9655..
    assert_eq!(months_between(date(2024, 2, 1), date(2024, 2, 29)), 1.0);
    // 30-day month: 5 / 30 = 0.1666..
    assert_eq!(months_between(date(2023, 6, 1), date(2023, 6, 6)), 0.2);
}

#[test]
fn exact_half_tenths_round_away_from_zero() {
    // 7 / 28 days of February 2023 = 0.25 exactly.
    assert_eq!(months_between(date(2023, 2, 1), date(2023, 2, 8)), 0.3);
    assert_eq!(months_between(date(2022, 11, 1), date(2023, 2, 8)), 3.3);
    assert_eq!(months_between(date(2023, 2, 8), date(2023, 2, 1)), -0.3);
}

#[test]
fn crosses_year_boundaries() {
    assert_eq!(months_between(date(2022, 11, 10), date(2023, 2, 10)), 3.0);
    assert_eq!(months_between(date(2020, 1, 1), date(2023, 1, 1)), 36.0);
}

#[test]
fn end_before_start_is_negative() {
    assert_eq!(months_between(date(2023, 4, 15), date(2023, 1, 15)), -3.0);
}

#[test]
fn short_intervals_round_to_zero() {
    assert_eq!(months_between(date(2023, 3, 1), date(2023, 3, 1)), 0.0);
    assert_eq!(months_between(date(2023, 3, 1), date(2023, 3, 2)), 0.0);
}
