//! Display Formatting
//!
//! Currency, date, and name helpers used by the components.

use chrono::{DateTime, Datelike, Utc};

/// "$1,234.56" with two decimals and thousands separators
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    for (i, digit) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{}${}.{:02}", sign, grouped, frac)
}

/// Badge-style date, "Jan 5, 2026"
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Compact date for the history table, "1/5/2026"
pub fn format_date_short(date: DateTime<Utc>) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Initials from the first letters of name tokens, upper-cased, max two
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(782.45), "$782.45");
        assert_eq!(format_currency(15.46), "$15.46");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-3.2), "-$3.20");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2026");
        assert_eq!(format_date_short(date), "1/5/2026");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("Robert Downey Jr"), "RD");
        assert_eq!(initials(""), "");
    }
}
