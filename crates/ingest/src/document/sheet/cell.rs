//! Cell value normalization.
//!
//! Cells arrive from the decoder as a tagged union (number, date,
//! bool, string, formula error, empty). Everything is resolved to one
//! canonical trimmed string here so no downstream stage branches on
//! source type again. Total: no input variant panics.

use calamine::Data;
use chrono::{Duration, NaiveDate, NaiveTime};

/// Formula error sentinels that sometimes survive as plain strings.
const FORMULA_ERRORS: &[&str] = &[
    "#REF!", "#VALUE!", "#DIV/0!", "#NAME?", "#N/A", "#NULL!", "#NUM!",
];

/// Convert a raw cell value to its canonical string form.
/// Empty, error, and degenerate cells all map to `""`.
pub fn normalize_cell(value: &Data) -> String {
    match value {
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::String(s) => normalize_string(s),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_float(*f),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format_serial_datetime(dt.as_f64()),
        // Already canonical ISO strings.
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
    }
}

fn normalize_string(s: &str) -> String {
    let trimmed = s.trim();
    if FORMULA_ERRORS.contains(&trimmed) {
        return String::new();
    }
    trimmed.to_string()
}

/// Fixed-point float formatting with trailing zeros and a trailing
/// decimal point stripped. A float that strips to nothing is `"0"`.
pub(crate) fn format_float(f: f64) -> String {
    let formatted = format!("{f:.10}");
    let stripped = formatted.trim_end_matches('0').trim_end_matches('.');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

/// Render an Excel serial date/time value.
///
/// Serial values count days since 1899-12-30; the fraction is the time
/// of day. Values below 1.0 carry no date part, a zero fraction no
/// time part. Out-of-range serials render as empty rather than erroring.
pub(crate) fn format_serial_datetime(serial: f64) -> String {
    let Some((date, time)) = serial_to_parts(serial) else {
        return String::new();
    };
    if serial < 1.0 {
        time.format("%H:%M:%S").to_string()
    } else if time == NaiveTime::MIN {
        date.format("%Y-%m-%d").to_string()
    } else {
        format!("{} {}", date.format("%Y-%m-%d"), time.format("%H:%M:%S"))
    }
}

fn serial_to_parts(serial: f64) -> Option<(NaiveDate, NaiveTime)> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let mut days = serial.floor() as i64;
    let mut secs = ((serial - serial.floor()) * 86_400.0).round() as i64;
    if secs >= 86_400 {
        secs -= 86_400;
        days += 1;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let date = base.checked_add_signed(Duration::days(days))?;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(secs as u32, 0)?;
    Some((date, time))
}
