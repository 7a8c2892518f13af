//! Picks the visit date out of a tag set and attaches the best available offset.

use super::filename_parsing::{FilenameTimestamp, parse_datetime_from_filename};
use super::parsing::{parse_naive, parse_offset};
use super::structs::{TimeZoneInfo, VisitDate};
use crate::features::coordinates::DecimalCoordinate;
use crate::features::error::MetadataError;
use crate::features::exif_tags::ExifTagSet;
use chrono::{FixedOffset, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;
use std::str::FromStr;
use tzf_rs::DefaultFinder;

/// Date tags in the order they are trusted, paired with the offset tag that qualifies each.
pub const DATE_TAG_PRIORITY: [(&str, &str); 3] = [
    ("DateTimeOriginal", "OffsetTimeOriginal"),
    ("DateTime", "OffsetTime"),
    ("CreateDate", "OffsetTimeDigitized"),
];

static FINDER: std::sync::LazyLock<DefaultFinder> = std::sync::LazyLock::new(DefaultFinder::new);

/// Resolves the visit date from the first date tag that parses.
///
/// The offset comes from the matching `OffsetTime*` tag, else from the timezone
/// at `coordinates`, else UTC.
pub fn resolve_visit_date(
    tags: &ExifTagSet,
    coordinates: Option<&DecimalCoordinate>,
) -> Result<VisitDate, MetadataError> {
    let (naive_dt, source, offset_tag) = DATE_TAG_PRIORITY
        .iter()
        .find_map(|(date_tag, offset_tag)| {
            tags.text(date_tag)
                .and_then(parse_naive)
                .map(|dt| (dt, *date_tag, *offset_tag))
        })
        .ok_or(MetadataError::DateUnresolved)?;

    if let Some(offset_str) = tags.text(offset_tag)
        && let Some(offset) = parse_offset(offset_str)
        && let LocalResult::Single(dt) = offset.from_local_datetime(&naive_dt)
    {
        return Ok(VisitDate {
            datetime: dt,
            source: source.to_string(),
            timezone: TimeZoneInfo {
                name: offset.to_string(),
                offset_seconds: offset.local_minus_utc(),
                source: offset_tag.to_string(),
            },
        });
    }

    Ok(zone_naive(naive_dt, source, coordinates))
}

/// Reads a visit date from the file name, for photos whose EXIF carries none.
pub fn visit_date_from_filename(
    file_name: &str,
    coordinates: Option<&DecimalCoordinate>,
) -> Option<VisitDate> {
    match parse_datetime_from_filename(file_name)? {
        FilenameTimestamp::Local(naive_dt) => Some(zone_naive(naive_dt, "FileName", coordinates)),
        FilenameTimestamp::Utc(naive_dt) => {
            let utc = FixedOffset::east_opt(0)?;
            Some(VisitDate {
                datetime: utc.from_utc_datetime(&naive_dt),
                source: "FileName".to_string(),
                timezone: utc_info("Unix timestamp"),
            })
        }
    }
}

/// Gives a wall-clock time the GPS location's zone, or UTC when that is unknown.
fn zone_naive(
    naive_dt: NaiveDateTime,
    source: &str,
    coordinates: Option<&DecimalCoordinate>,
) -> VisitDate {
    if let Some(coordinates) = coordinates
        && let Ok(tz) = Tz::from_str(FINDER.get_tz_name(coordinates.lng(), coordinates.lat()))
        && let Some((offset, zone_source)) = zone_offset(tz, naive_dt)
        && let LocalResult::Single(datetime) = offset.from_local_datetime(&naive_dt)
    {
        return VisitDate {
            datetime,
            source: source.to_string(),
            timezone: TimeZoneInfo {
                name: tz.name().to_string(),
                offset_seconds: offset.local_minus_utc(),
                source: zone_source.to_string(),
            },
        };
    }

    VisitDate {
        datetime: naive_dt.and_utc().fixed_offset(),
        source: source.to_string(),
        timezone: utc_info("Assumed UTC"),
    }
}

/// Offset of `tz` at a wall-clock time. Ambiguous times take the earlier offset;
/// times skipped by a DST jump take the offset in force just before the jump.
fn zone_offset(tz: Tz, naive_dt: NaiveDateTime) -> Option<(FixedOffset, &'static str)> {
    match tz.from_local_datetime(&naive_dt) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            Some((dt.offset().fix(), "IANA from GPS"))
        }
        LocalResult::None => tz
            .from_local_datetime(&(naive_dt - TimeDelta::hours(1)))
            .earliest()
            .map(|dt| (dt.offset().fix(), "IANA from GPS (DST gap)")),
    }
}

fn utc_info(source: &str) -> TimeZoneInfo {
    TimeZoneInfo {
        name: "UTC".to_string(),
        offset_seconds: 0,
        source: source.to_string(),
    }
}
