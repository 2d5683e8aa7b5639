//! Display helpers for application rows.

use chrono::{DateTime, NaiveDate};

/// Formats an amount as whole pounds, e.g. `1000.5` becomes `£1,001`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}£{grouped}")
}

/// Formats an RFC 3339 timestamp or a plain `YYYY-MM-DD` date as `DD-MM-YYYY`.
///
/// Timestamps are reduced to their UTC calendar date. Anything else is
/// returned unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.naive_utc().date())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%d-%m-%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn format_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
