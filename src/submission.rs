use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Payload for the POI creation API.
///
/// Field names follow that API exactly, including its mix of snake and camel case.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PoiSubmission {
    pub map_id: String,
    #[serde(rename = "locationName")]
    pub location_name: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub date_visited: DateTime<FixedOffset>,
    pub tags: Vec<String>,
    #[serde(rename = "googleMapsLink")]
    pub google_maps_link: String,
    #[serde(rename = "isPrivate")]
    pub is_private: bool,
    /// Sent as separate upload calls, not as part of the POI body.
    #[serde(skip_serializing)]
    #[serde(default)]
    pub photos: Vec<PhotoUploadRequest>,
}

/// One photo upload that follows a POI creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhotoUploadRequest {
    pub photo_id: String,
    pub file_name: String,
    pub is_primary: bool,
}
