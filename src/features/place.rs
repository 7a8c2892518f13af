use crate::features::coordinates::DecimalCoordinate;
use reverse_geocoder::ReverseGeocoder;
use serde::{Deserialize, Serialize};

/// The nearest known place to a coordinate, offered as context next to the
/// candidate's editable name.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceHint {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub admin1: String,
    pub admin2: String,
    pub country_code: String,
    pub country_name: Option<String>,
}

impl PlaceHint {
    /// `"Amsterdam, Netherlands"`, or just the place name when the country is unknown.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.country_name {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

pub fn nearest_place(geocoder: &ReverseGeocoder, coordinates: &DecimalCoordinate) -> PlaceHint {
    let search_result = geocoder.search((coordinates.lat(), coordinates.lng()));
    let record = search_result.record;
    let country_name = rust_iso3166::from_alpha2(&record.cc).map(|c| c.name.to_string());

    PlaceHint {
        latitude: record.lat,
        longitude: record.lon,
        name: record.name.clone(),
        admin1: record.admin1.clone(),
        admin2: record.admin2.clone(),
        country_code: record.cc.clone(),
        country_name,
    }
}
