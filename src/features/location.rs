use crate::backends::ExifCapability;
use crate::features::coordinates::{
    Axis, DecimalCoordinate, GpsCoordinateDms, HemisphereRef, decimal_from_dms,
};
use crate::features::error::{CoordinateError, MetadataError};
use crate::features::exif_tags::{ExifTagSet, TagValue};
use crate::time::resolve_visit_date;
use crate::time::structs::VisitDate;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Location and date recovered from one image. `lat` and `lng` are set together or not at all.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedLocation {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub date_visited: Option<DateTime<FixedOffset>>,
    /// How `date_visited` was found; `None` exactly when `date_visited` is.
    pub date_details: Option<VisitDate>,
}

impl ExtractedLocation {
    /// The decoded position, if both halves are present.
    #[must_use]
    pub fn coordinates(&self) -> Option<DecimalCoordinate> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => DecimalCoordinate::new(lat, lng).ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn with_visit_date(mut self, visit: VisitDate) -> Self {
        self.date_visited = Some(visit.datetime);
        self.date_details = Some(visit);
        self
    }
}

/// Reads GPS position and capture date from raw image bytes.
///
/// Never fails: a missing capability, an image without metadata, partial GPS data
/// and unparseable dates all come back as `None` fields.
pub fn extract_location_and_date(
    capability: Option<&dyn ExifCapability>,
    image: &[u8],
) -> ExtractedLocation {
    let Some(capability) = capability else {
        debug!("No EXIF capability configured, skipping metadata read");
        return ExtractedLocation::default();
    };

    match capability.read_tags(image) {
        Ok(tags) => location_from_tags(&tags),
        Err(e) => {
            debug!(reader = capability.name(), "{e}");
            ExtractedLocation::default()
        }
    }
}

/// Resolves location and date from an already-read tag set.
pub fn location_from_tags(tags: &ExifTagSet) -> ExtractedLocation {
    let coordinates = match gps_coordinates(tags) {
        Ok(coordinates) => Some(coordinates),
        Err(e) => {
            debug!("GPS position discarded: {e}");
            None
        }
    };

    let visit = match resolve_visit_date(tags, coordinates.as_ref()) {
        Ok(visit) => Some(visit),
        Err(e) => {
            debug!("{e}");
            None
        }
    };

    let location = ExtractedLocation {
        lat: coordinates.map(|c| c.lat()),
        lng: coordinates.map(|c| c.lng()),
        ..ExtractedLocation::default()
    };
    match visit {
        Some(visit) => location.with_visit_date(visit),
        None => location,
    }
}

/// Decodes both GPS axes; fails if either one is missing or malformed.
pub fn gps_coordinates(tags: &ExifTagSet) -> Result<DecimalCoordinate, MetadataError> {
    let lat = axis_value(tags, "GPSLatitude", "GPSLatitudeRef", Axis::Latitude)?;
    let lng = axis_value(tags, "GPSLongitude", "GPSLongitudeRef", Axis::Longitude)?;
    DecimalCoordinate::new(lat, lng).map_err(|e| MetadataError::Unavailable(e.to_string()))
}

fn axis_value(
    tags: &ExifTagSet,
    value_tag: &str,
    ref_tag: &str,
    axis: Axis,
) -> Result<f64, MetadataError> {
    let value = tags
        .get(value_tag)
        .ok_or_else(|| MetadataError::Unavailable(format!("{value_tag} missing")))?;
    decode_axis(value, tags.text(ref_tag), axis)
        .map_err(|e| MetadataError::Unavailable(format!("{value_tag}: {e}")))
}

fn decode_axis(
    value: &TagValue,
    hemisphere: Option<&str>,
    axis: Axis,
) -> Result<f64, CoordinateError> {
    let hemisphere = hemisphere
        .map(|r| HemisphereRef::parse(r, axis))
        .transpose()?;

    if let Some(parts) = value.as_dms() {
        let hemisphere = hemisphere.ok_or_else(|| {
            CoordinateError::InvalidCoordinateFormat("hemisphere reference missing".to_string())
        })?;
        return decimal_from_dms(parts, hemisphere);
    }

    // Numeric tags are already decimal; a missing ref falls back to the sign.
    let decimal = value.as_number().ok_or_else(|| {
        CoordinateError::InvalidCoordinateFormat(format!("{value:?} is not a coordinate"))
    })?;
    let hemisphere = hemisphere.unwrap_or_else(|| HemisphereRef::from_sign(decimal, axis));
    decimal_from_dms(GpsCoordinateDms::new(decimal.abs(), 0.0, 0.0), hemisphere)
}
