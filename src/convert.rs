//! Default-on-absent coercion of attribute and text values.
//!
//! None of these functions fail: a missing or unparsable value yields the
//! supplied (or type-appropriate) default.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const TIMESTAMP_FORMAT_SPACED: &str = "%Y-%m-%d %H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn to_string(value: Option<&str>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

pub fn to_bool(value: Option<&str>) -> bool {
    match value {
        Some(s) => {
            let s = s.trim();
            ["true", "1", "yes", "on"]
                .iter()
                .any(|t| s.eq_ignore_ascii_case(t))
        }
        None => false,
    }
}

pub fn to_int(value: Option<&str>, default: i32) -> i32 {
    value
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

pub fn to_timestamp(value: Option<&str>, default: NaiveDateTime) -> NaiveDateTime {
    value.and_then(parse_timestamp).unwrap_or(default)
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT_SPACED))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

pub fn is_unset_timestamp(value: &NaiveDateTime) -> bool {
    *value == NaiveDateTime::default()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
