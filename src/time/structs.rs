use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The resolved moment a photo was taken, with how it was found.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VisitDate {
    /// Local capture time with its UTC offset (ISO 8601 / RFC 3339 when serialized).
    pub datetime: DateTime<FixedOffset>,

    /// Tag (or `"FileName"`) the wall-clock time was read from.
    pub source: String,

    pub timezone: TimeZoneInfo,
}

/// Contains details about the timezone determination.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeZoneInfo {
    /// An IANA name (e.g., "Europe/Rome"), a fixed offset string (e.g., "+03:00"), or "UTC".
    pub name: String,
    /// The offset from UTC in seconds, DST included.
    pub offset_seconds: i32,
    /// How the zone was obtained (e.g., "IANA from GPS", "OffsetTimeOriginal").
    pub source: String,
}
