use chrono::{NaiveDate, NaiveTime};

use crate::server::error::AppError;

/// Parses a strict `YYYY-MM-DD` date.
///
/// # Returns
/// - `Ok(NaiveDate)` - Well-formed calendar date
/// - `Err(AppError::BadRequest)` - Wrong shape or impossible date (e.g. `2025-02-30`)
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });

    if !well_formed {
        return Err(AppError::BadRequest(format!(
            "Invalid date '{}', expected YYYY-MM-DD",
            value
        )));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}'", value)))
}

/// Formats a date as `DD/MM/YYYY`.
pub fn format_dmy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats a time of day as `HH:MM:SS`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}
