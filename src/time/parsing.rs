//! Parsers for the date and offset strings found in EXIF tags.

use chrono::{FixedOffset, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

static RE_OFFSET: OnceLock<Regex> = OnceLock::new();

/// Parses an EXIF-style naive datetime (`YYYY:MM:DD HH:MM:SS[.fff]`).
///
/// The dash-separated variant some editors write is accepted as well. Placeholder
/// values such as `0000:00:00 00:00:00` fail to parse.
pub fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    let formats = [
        "%Y:%m:%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y:%m:%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parses an offset tag like `"+02:00"`, `"-0500"` or `"Z"`.
pub fn parse_offset(offset_str: &str) -> Option<FixedOffset> {
    let offset_str = offset_str.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    if offset_str == "Z" {
        return FixedOffset::east_opt(0);
    }
    let re = RE_OFFSET.get_or_init(|| {
        Regex::new(r"^([+-])(\d{2}):?(\d{2})$").expect("offset regex is valid")
    });
    let caps = re.captures(offset_str)?;
    let sign = if &caps[1] == "-" { -1 } else { 1 };
    let hours = caps[2].parse::<i32>().ok()?;
    let minutes = caps[3].parse::<i32>().ok()?;
    if hours > 14 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
