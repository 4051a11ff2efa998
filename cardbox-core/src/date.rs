//! Deadline date parsing
//!
//! Deadlines arrive on the command line as `dd-mm-yyyy` tokens, with the
//! literal `null` standing for "no deadline". Cards render every date in
//! the `dd/mm/yyyy` form.

use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveDate};
use regex::Regex;

use crate::error::{CoreError, Result};

// Pattern is validated at compile time - an invalid pattern is a programming error
static DEADLINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})-(\d{1,2})-(\d{4})$").expect("Invalid deadline regex pattern"));

/// Parse a deadline token into a calendar date
///
/// Returns `Ok(None)` for the literal `"null"`. Day and month are 1-based
/// on input and the token must name a real calendar date, so `31-02-2021`
/// is rejected rather than rolled over.
pub fn parse_deadline(input: &str) -> Result<Option<NaiveDate>> {
    let input = input.trim();
    if input == "null" {
        return Ok(None);
    }

    let caps = DEADLINE_REGEX
        .captures(input)
        .ok_or_else(|| CoreError::InvalidDate(input.to_string()))?;

    let day: u32 = caps[1]
        .parse()
        .map_err(|_| CoreError::InvalidDate(input.to_string()))?;
    let month: u32 = caps[2]
        .parse()
        .map_err(|_| CoreError::InvalidDate(input.to_string()))?;
    let year: i32 = caps[3]
        .parse()
        .map_err(|_| CoreError::InvalidDate(input.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or_else(|| CoreError::InvalidDate(input.to_string()))
}

/// Format a calendar date the way cards print it
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a timestamp with the same day/month/year form as deadlines
pub fn format_card_timestamp(ts: DateTime<Local>) -> String {
    format_card_date(ts.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_deadline() {
        let date = parse_deadline("10-07-1999").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1999, 7, 10));
    }

    #[test]
    fn test_parse_single_digit_day_and_month() {
        let date = parse_deadline("1-1-2020").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 1));
    }

    #[test]
    fn test_parse_null_literal() {
        assert_eq!(parse_deadline("null").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_unreal_date() {
        let err = parse_deadline("31-02-2021").unwrap_err();
        assert_eq!(err, CoreError::InvalidDate("31-02-2021".to_string()));
    }

    #[test]
    fn test_parse_rejects_bad_shape() {
        assert!(parse_deadline("1999-07-10").is_err());
        assert!(parse_deadline("10/07/1999").is_err());
        assert!(parse_deadline("soon").is_err());
    }

    #[test]
    fn test_round_trip_render() {
        let date = parse_deadline("10-07-1999").unwrap().unwrap();
        assert_eq!(format_card_date(date), "10/07/1999");
    }
}
