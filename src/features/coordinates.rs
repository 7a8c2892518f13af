use crate::features::error::CoordinateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which axis a coordinate or hemisphere reference belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest absolute decimal value legal on this axis.
    #[must_use]
    pub const fn limit(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }
}

/// The hemisphere letter that accompanies an EXIF GPS coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum HemisphereRef {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl HemisphereRef {
    /// Parses an EXIF ref value (`"N"`, `"s"`, `" W\0"`, ...) for the given axis.
    ///
    /// Letters from the other axis are rejected, so `"E"` is not a valid latitude ref.
    pub fn parse(text: &str, axis: Axis) -> Result<Self, CoordinateError> {
        let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\0' || c == '"');
        let hemisphere = match trimmed.to_ascii_uppercase().as_str() {
            "N" => Self::North,
            "S" => Self::South,
            "E" => Self::East,
            "W" => Self::West,
            _ => {
                return Err(CoordinateError::InvalidCoordinateFormat(format!(
                    "unknown hemisphere reference {text:?}"
                )));
            }
        };
        if hemisphere.axis() != axis {
            return Err(CoordinateError::InvalidCoordinateFormat(format!(
                "hemisphere {trimmed} is not valid for {axis:?}"
            )));
        }
        Ok(hemisphere)
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Latitude,
            Self::East | Self::West => Axis::Longitude,
        }
    }

    /// `true` for the hemispheres that carry a negative decimal sign.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }

    /// Hemisphere implied by the sign of a decimal value on an axis.
    #[must_use]
    pub fn from_sign(value: f64, axis: Axis) -> Self {
        match (axis, value.is_sign_negative()) {
            (Axis::Latitude, false) => Self::North,
            (Axis::Latitude, true) => Self::South,
            (Axis::Longitude, false) => Self::East,
            (Axis::Longitude, true) => Self::West,
        }
    }
}

impl fmt::Display for HemisphereRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::West => "W",
        };
        f.write_str(letter)
    }
}

/// A GPS angle in degrees/minutes/seconds, as stored in EXIF.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GpsCoordinateDms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl GpsCoordinateDms {
    #[must_use]
    pub const fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }
}

impl From<[f64; 3]> for GpsCoordinateDms {
    fn from([degrees, minutes, seconds]: [f64; 3]) -> Self {
        Self::new(degrees, minutes, seconds)
    }
}

/// A validated signed decimal-degree coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "RawCoordinate")]
pub struct DecimalCoordinate {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinate> for DecimalCoordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng)
    }
}

impl DecimalCoordinate {
    /// Builds a coordinate, rejecting anything outside lat [-90, 90] / lng [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        let in_range = |value: f64, axis: Axis| value.is_finite() && value.abs() <= axis.limit();
        if in_range(lat, Axis::Latitude) && in_range(lng, Axis::Longitude) {
            Ok(Self { lat, lng })
        } else {
            Err(CoordinateError::OutOfRange { lat, lng })
        }
    }

    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    #[must_use]
    pub fn google_maps_link(&self) -> String {
        format!("https://www.google.com/maps?q={},{}", self.lat, self.lng)
    }
}

/// Converts a DMS angle plus hemisphere into signed decimal degrees.
///
/// `S` and `W` produce negative values. Negative or non-finite components are
/// rejected with [`CoordinateError::InvalidCoordinateFormat`].
pub fn decimal_from_dms(
    dms: GpsCoordinateDms,
    hemisphere: HemisphereRef,
) -> Result<f64, CoordinateError> {
    let GpsCoordinateDms {
        degrees,
        minutes,
        seconds,
    } = dms;
    if [degrees, minutes, seconds]
        .iter()
        .any(|c| !c.is_finite() || *c < 0.0)
    {
        return Err(CoordinateError::InvalidCoordinateFormat(format!(
            "negative or non-finite component in ({degrees}, {minutes}, {seconds})"
        )));
    }

    let value = degrees + minutes / 60.0 + seconds / 3600.0;
    Ok(if hemisphere.is_negative() { -value } else { value })
}

/// Splits signed decimal degrees into a DMS angle and the matching hemisphere.
pub fn dms_from_decimal(
    value: f64,
    axis: Axis,
) -> Result<(GpsCoordinateDms, HemisphereRef), CoordinateError> {
    if !value.is_finite() || value.abs() > axis.limit() {
        let (lat, lng) = match axis {
            Axis::Latitude => (value, 0.0),
            Axis::Longitude => (0.0, value),
        };
        return Err(CoordinateError::OutOfRange { lat, lng });
    }

    let hemisphere = HemisphereRef::from_sign(value, axis);
    let abs = value.abs();
    let degrees = abs.trunc();
    let minutes_full = (abs - degrees) * 60.0;
    let minutes = minutes_full.trunc();
    let seconds = (minutes_full - minutes) * 60.0;
    Ok((GpsCoordinateDms::new(degrees, minutes, seconds), hemisphere))
}
