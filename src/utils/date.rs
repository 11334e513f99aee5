use chrono::{Datelike, NaiveDate};

pub const DB_DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Years that survive a round trip through SQLite's date functions.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Parse a user supplied date.
/// Accepts the ISO form `YYYY-MM-DD` and the compact form `YYYYMMDD`;
/// signed or five-digit years are rejected.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let parsed = if let Ok(d) = NaiveDate::parse_from_str(s, DB_DATE_FMT) {
        Some(d)
    } else if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        NaiveDate::parse_from_str(s, "%Y%m%d").ok()
    } else {
        None
    };
    parsed.filter(|d| YEAR_RANGE.contains(&d.year()))
}

pub fn to_db_str(date: &NaiveDate) -> String {
    date.format(DB_DATE_FMT).to_string()
}

/// `MM-DD` key used for the year-agnostic birthday comparison.
pub fn month_day(date: &NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

pub fn same_month_day(a: &NaiveDate, b: &NaiveDate) -> bool {
    a.month() == b.month() && a.day() == b.day()
}

/// Days from `from` to the next occurrence of `birth`'s month/day
/// (0 when it is `from` itself). 29 February only occurs in leap years.
pub fn days_until_next(birth: &NaiveDate, from: &NaiveDate) -> i64 {
    let mut year = from.year();
    loop {
        if let Some(candidate) = NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
            && candidate >= *from
        {
            return (candidate - *from).num_days();
        }
        year += 1;
    }
}

/// Age turned (or to be turned) in `on`'s year.
pub fn age_on(birth: &NaiveDate, on: &NaiveDate) -> i32 {
    on.year() - birth.year()
}
