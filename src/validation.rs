//! Form input checks. Everything here runs before a query is issued.

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::AppError;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));
static SHOW_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid regex"));
static START_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("valid regex"));
static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("valid regex"));

pub const SHOW_DATE_MESSAGE: &str = "ShowDate must be in YYYY-MM-DD format.";
pub const START_TIME_MESSAGE: &str = "StartTime must be in HH:MM format.";
pub const PRICE_MESSAGE: &str = "Price must be numeric (e.g., 120 or 120.00).";

// NUMBER(11) on the phone column
const PHONE_MAX_DIGITS: usize = 11;

pub fn is_digits(s: &str) -> bool {
    DIGITS.is_match(s)
}

pub fn parse_id(s: &str, message: &'static str) -> Result<i64, AppError> {
    let s = s.trim();
    if !is_digits(s) {
        return Err(AppError::InvalidInput(message));
    }
    s.parse().map_err(|_| AppError::InvalidInput(message))
}

pub fn parse_show_date(s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    if !SHOW_DATE.is_match(s) {
        return Err(AppError::InvalidInput(SHOW_DATE_MESSAGE));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidInput(SHOW_DATE_MESSAGE))
}

/// Returns the normalized `HH:MM` string stored in `Showtime.StartTime`.
pub fn parse_start_time(s: &str) -> Result<String, AppError> {
    let s = s.trim();
    if !START_TIME.is_match(s) {
        return Err(AppError::InvalidInput(START_TIME_MESSAGE));
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| AppError::InvalidInput(START_TIME_MESSAGE))
}

pub fn parse_price(s: &str) -> Result<Decimal, AppError> {
    let s = s.trim();
    if !PRICE.is_match(s) {
        return Err(AppError::InvalidInput(PRICE_MESSAGE));
    }
    Decimal::from_str(s).map_err(|_| AppError::InvalidInput(PRICE_MESSAGE))
}

pub fn parse_phone(s: &str) -> Result<i64, AppError> {
    let s = s.trim();
    if !is_digits(s) || s.len() > PHONE_MAX_DIGITS {
        return Err(AppError::InvalidPhone);
    }
    s.parse().map_err(|_| AppError::InvalidPhone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn digits() {
        assert!(is_digits("0"));
        assert!(is_digits("5051234567"));
        assert!(!is_digits(""));
        assert!(!is_digits("abc123"));
        assert!(!is_digits("12 3"));
        assert!(!is_digits("-1"));
        assert!(!is_digits("١٢٣"));
    }

    #[test]
    fn show_date() {
        assert_eq!(
            parse_show_date(" 2025-11-03 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
        );
        for bad in ["2025-1-03", "25-11-03", "2025/11/03", "2025-11-03T10", "", "2025-13-01", "2025-02-30"] {
            assert!(
                matches!(parse_show_date(bad), Err(AppError::InvalidInput(SHOW_DATE_MESSAGE))),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn start_time() {
        assert_eq!(parse_start_time("09:30").unwrap(), "09:30");
        for bad in ["9:30", "09:3", "0930", "09:30:00", "", "24:00", "12:60"] {
            assert!(parse_start_time(bad).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn price() {
        assert_eq!(parse_price("120").unwrap(), Decimal::new(120, 0));
        assert_eq!(parse_price("120.5").unwrap(), Decimal::new(1205, 1));
        assert_eq!(parse_price("120.00").unwrap().to_string(), "120.00");
        for bad in ["-1", "120.", ".5", "120.123", "1e3", "abc", ""] {
            assert!(parse_price(bad).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn phone() {
        assert_eq!(parse_phone("5051234567").unwrap(), 5_051_234_567);
        assert!(matches!(parse_phone("abc123"), Err(AppError::InvalidPhone)));
        assert!(matches!(parse_phone("+905051234567"), Err(AppError::InvalidPhone)));
        assert!(matches!(parse_phone("123456789012"), Err(AppError::InvalidPhone)));
    }

    #[test]
    fn ids() {
        assert_eq!(parse_id("42", "bad").unwrap(), 42);
        assert!(parse_id("4x2", "bad").is_err());
        assert!(parse_id("99999999999999999999999", "bad").is_err());
    }

    proptest! {
        #[test]
        fn any_well_formed_price_parses(whole in 0u32..1_000_000, cents in 0u32..100) {
            let text = format!("{whole}.{cents:02}");
            let parsed = parse_price(&text).unwrap();
            prop_assert_eq!(parsed, Decimal::new(i64::from(whole) * 100 + i64::from(cents), 2));
        }

        #[test]
        fn prices_with_letters_are_rejected(s in "[0-9]{0,4}[a-zA-Z,+-][0-9]{0,4}") {
            prop_assert!(parse_price(&s).is_err());
        }

        #[test]
        fn dates_off_pattern_are_rejected(s in "[0-9]{1,3}-[0-9]{1,2}-[0-9]{1,2}") {
            prop_assert!(parse_show_date(&s).is_err());
        }

        #[test]
        fn valid_times_round_trip(h in 0u32..24, m in 0u32..60) {
            let text = format!("{h:02}:{m:02}");
            prop_assert_eq!(parse_start_time(&text).unwrap(), text);
        }
    }
}
