use chrono::{Datelike, Local, NaiveDate};

/// Storage and display format for expense dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date on the process clock, rendered as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` calendar date. Month and day may be unpadded (`2025-3-7`).
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

pub fn is_valid_date(input: &str) -> bool {
    parse_date(input).is_some()
}

/// Year and month of a stored date string, if it parses.
pub fn year_month(input: &str) -> Option<(i32, u32)> {
    parse_date(input).map(|date| (date.year(), date.month()))
}

/// Parses a non-negative, finite decimal amount.
pub fn parse_amount(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Renders an amount as entered: shortest round-trip form, at least one decimal.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.1}")
    } else {
        amount.to_string()
    }
}

/// Renders an aggregate with exactly two decimals. Negative zero prints as `0.00`.
pub fn format_total(total: f64) -> String {
    let total = if total == 0.0 { 0.0 } else { total };
    format!("{total:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_must_be_real_calendar_days() {
        assert!(is_valid_date("2025-03-09"));
        assert!(is_valid_date("2025-3-9"));
        assert!(!is_valid_date("2025-02-30"));
        assert!(!is_valid_date("2025-13-01"));
        assert!(!is_valid_date("09-03-2025"));
        assert!(!is_valid_date("2025/03/09"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn year_month_extracts_components() {
        assert_eq!(year_month("2024-11-30"), Some((2024, 11)));
        assert_eq!(year_month("2025-1-5"), Some((2025, 1)));
        assert_eq!(year_month("not a date"), None);
    }

    #[test]
    fn amounts_must_be_finite_and_non_negative() {
        assert_eq!(parse_amount("12.50"), Some(12.5));
        assert_eq!(parse_amount(" 7 "), Some(7.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("-4"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn amount_formatting_keeps_one_decimal() {
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(3.0), "3.0");
        assert_eq!(format_amount(0.125), "0.125");
        assert_eq!(format_total(12.5), "12.50");
        assert_eq!(format_total(0.0), "0.00");
        assert_eq!(format_total(-0.0), "0.00");
    }

    #[test]
    fn today_is_a_valid_date() {
        assert!(is_valid_date(&today()));
    }
}
