use bdreminder::utils::date::{age_on, days_until_next, month_day, parse_date};

mod common;
use common::ymd;

#[test]
fn test_parse_date_accepts_iso_and_compact() {
    assert_eq!(parse_date("2024-01-01"), Some(ymd(2024, 1, 1)));
    assert_eq!(parse_date("20240101"), Some(ymd(2024, 1, 1)));
    assert_eq!(parse_date(" 1990-05-17 "), Some(ymd(1990, 5, 17)));
}

#[test]
fn test_parse_date_rejects_invalid() {
    assert_eq!(parse_date("2023-02-29"), None);
    assert_eq!(parse_date("20231301"), None);
    assert_eq!(parse_date("2024011"), None);
    assert_eq!(parse_date("17/05/1990"), None);
    assert_eq!(parse_date(""), None);
}

#[test]
fn test_parse_date_rejects_out_of_range_years() {
    assert_eq!(parse_date("+10000-05-17"), None);
    assert_eq!(parse_date("-0005-05-17"), None);
    assert_eq!(parse_date("9999-12-31"), Some(ymd(9999, 12, 31)));
    assert_eq!(parse_date("0000-05-17"), Some(ymd(0, 5, 17)));
}

#[test]
fn test_month_day_key() {
    assert_eq!(month_day(&ymd(1990, 5, 7)), "05-07");
}

#[test]
fn test_days_until_next() {
    assert_eq!(days_until_next(&ymd(1990, 5, 17), &ymd(2026, 5, 17)), 0);
    assert_eq!(days_until_next(&ymd(1990, 5, 18), &ymd(2026, 5, 17)), 1);
    assert_eq!(days_until_next(&ymd(1990, 5, 16), &ymd(2026, 5, 17)), 364);
    // next 29 February after 2026-03-01 is in 2028
    assert_eq!(
        days_until_next(&ymd(2000, 2, 29), &ymd(2026, 3, 1)),
        (ymd(2028, 2, 29) - ymd(2026, 3, 1)).num_days()
    );
}

#[test]
fn test_age_on() {
    assert_eq!(age_on(&ymd(1990, 5, 17), &ymd(2026, 5, 17)), 36);
    assert_eq!(age_on(&ymd(1990, 12, 31), &ymd(2026, 1, 1)), 36);
}
