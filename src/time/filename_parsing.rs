use chrono::{DateTime, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

static RE_YYYYMMDD_HHMMSS: OnceLock<Regex> = OnceLock::new();
static RE_YYYY_MM_DD_HH_MM_SS: OnceLock<Regex> = OnceLock::new();
static RE_UNIX_MS: OnceLock<Regex> = OnceLock::new();

/// A timestamp recovered from a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenameTimestamp {
    /// Wall-clock time as the camera named the file (`PXL_20230729_143200.jpg`).
    Local(NaiveDateTime),
    /// Unix milliseconds (`1690641120000.jpg`), always UTC.
    Utc(NaiveDateTime),
}

/// Looks for a capture timestamp in phone-style file names.
pub fn parse_datetime_from_filename(filename: &str) -> Option<FilenameTimestamp> {
    let re1 = RE_YYYYMMDD_HHMMSS
        .get_or_init(|| Regex::new(r"(\d{8})_(\d{6})").expect("filename regex is valid"));
    if let Some(caps) = re1.captures(filename) {
        let datetime_str = format!("{}{}", &caps[1], &caps[2]);
        if let Ok(dt) = NaiveDateTime::parse_from_str(&datetime_str, "%Y%m%d%H%M%S") {
            return Some(FilenameTimestamp::Local(dt));
        }
    }

    let re2 = RE_YYYY_MM_DD_HH_MM_SS.get_or_init(|| {
        Regex::new(r"(\d{4}-\d{2}-\d{2})_(\d{2}-\d{2}-\d{2})").expect("filename regex is valid")
    });
    if let Some(caps) = re2.captures(filename) {
        let datetime_str = format!("{} {}", &caps[1], &caps[2]);
        if let Ok(dt) = NaiveDateTime::parse_from_str(&datetime_str, "%Y-%m-%d %H-%M-%S") {
            return Some(FilenameTimestamp::Local(dt));
        }
    }

    let re3 = RE_UNIX_MS.get_or_init(|| Regex::new(r"^(\d{13})\.").expect("filename regex is valid"));
    re3.captures(filename)
        .and_then(|caps| caps[1].parse::<i64>().ok())
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| FilenameTimestamp::Utc(dt.naive_utc()))
}
