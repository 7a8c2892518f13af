//! Draft points of interest built from freshly decoded photos.

use crate::features::coordinates::DecimalCoordinate;
use crate::features::error::CandidateError;
use crate::features::location::ExtractedLocation;
use crate::features::photo_ref::PhotoRef;
use crate::features::place::PlaceHint;
use crate::submission::{PhotoUploadRequest, PoiSubmission};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Shown to the user when a photo arrives without usable GPS data.
pub const PLACEMENT_NOTICE: &str = "Photo added! Please set coordinates manually on the map.";

/// Where a candidate is in the upload wizard.
///
/// Every transition is triggered by the user; nothing expires on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum CandidateState {
    /// Freshly built, with or without coordinates.
    Draft,
    /// Name, description or tags changed by the user.
    Edited,
    /// Handed to the POI creation API.
    Submitted,
    /// Removed by the user before submission.
    Discarded,
}

impl CandidateState {
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Submitted | Self::Discarded)
    }
}

/// An unpersisted POI awaiting review.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoiCandidate {
    pub coordinates: Option<DecimalCoordinate>,
    pub date_visited: DateTime<FixedOffset>,
    pub location_name: String,
    pub photo_reference: PhotoRef,
    pub is_primary: bool,
    pub additional_photos: Vec<PhotoRef>,
    pub tags: BTreeSet<String>,
    pub description: String,
    pub place_hint: Option<PlaceHint>,
    pub sequence: u64,
    pub state: CandidateState,
}

/// Builds a draft candidate, filling a missing date with the current time.
#[must_use]
pub fn build_candidate(
    photo: PhotoRef,
    extracted: &ExtractedLocation,
    sequence_index: u64,
) -> PoiCandidate {
    build_candidate_at(photo, extracted, sequence_index, Utc::now().fixed_offset())
}

/// Same as [`build_candidate`] with an explicit clock.
#[must_use]
pub fn build_candidate_at(
    photo: PhotoRef,
    extracted: &ExtractedLocation,
    sequence_index: u64,
    now: DateTime<FixedOffset>,
) -> PoiCandidate {
    PoiCandidate {
        coordinates: extracted.coordinates(),
        date_visited: extracted.date_visited.unwrap_or(now),
        location_name: default_location_name(sequence_index),
        photo_reference: photo,
        is_primary: true,
        additional_photos: Vec::new(),
        tags: BTreeSet::new(),
        description: String::new(),
        place_hint: None,
        sequence: sequence_index,
        state: CandidateState::Draft,
    }
}

#[must_use]
pub fn default_location_name(sequence_index: u64) -> String {
    format!("Photo Location {sequence_index}")
}

impl PoiCandidate {
    #[must_use]
    pub const fn is_geolocated(&self) -> bool {
        self.coordinates.is_some()
    }

    #[must_use]
    pub const fn needs_manual_placement(&self) -> bool {
        self.coordinates.is_none()
    }

    #[must_use]
    pub const fn placement_notice(&self) -> Option<&'static str> {
        if self.needs_manual_placement() {
            Some(PLACEMENT_NOTICE)
        } else {
            None
        }
    }

    #[must_use]
    pub fn with_place_hint(mut self, place_hint: Option<PlaceHint>) -> Self {
        self.place_hint = place_hint;
        self
    }

    /// Places the candidate on the map (user click or typed coordinates).
    pub fn set_coordinates(&mut self, coordinates: DecimalCoordinate) -> Result<(), CandidateError> {
        self.ensure_open()?;
        self.coordinates = Some(coordinates);
        Ok(())
    }

    pub fn rename(&mut self, location_name: impl Into<String>) -> Result<(), CandidateError> {
        self.edit(|c| c.location_name = location_name.into())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), CandidateError> {
        self.edit(|c| c.description = description.into())
    }

    /// Adds a tag. Blank tags are ignored; returns whether the set changed.
    pub fn add_tag(&mut self, tag: &str) -> Result<bool, CandidateError> {
        self.ensure_open()?;
        let tag = tag.trim();
        if tag.is_empty() || self.tags.contains(tag) {
            return Ok(false);
        }
        self.edit(|c| c.tags.insert(tag.to_string()))?;
        Ok(true)
    }

    pub fn remove_tag(&mut self, tag: &str) -> Result<bool, CandidateError> {
        self.ensure_open()?;
        if !self.tags.contains(tag) {
            return Ok(false);
        }
        self.edit(|c| c.tags.remove(tag))?;
        Ok(true)
    }

    /// Attaches another photo of the same place. Only the first photo is primary.
    pub fn add_photo(&mut self, photo: PhotoRef) -> Result<(), CandidateError> {
        self.ensure_open()?;
        self.additional_photos.push(photo);
        Ok(())
    }

    /// One upload request per photo, the primary one first.
    #[must_use]
    pub fn photo_uploads(&self) -> Vec<PhotoUploadRequest> {
        std::iter::once((&self.photo_reference, self.is_primary))
            .chain(self.additional_photos.iter().map(|p| (p, false)))
            .map(|(photo, is_primary)| PhotoUploadRequest {
                photo_id: photo.id.clone(),
                file_name: photo.file_name.clone(),
                is_primary,
            })
            .collect()
    }

    /// Converts the candidate into the POI creation payload and marks it submitted.
    ///
    /// # Errors
    ///
    /// [`CandidateError::MissingCoordinates`] while the candidate still needs placing,
    /// [`CandidateError::Finalized`] if it was already submitted or discarded.
    pub fn submit(&mut self, map_id: &str, is_private: bool) -> Result<PoiSubmission, CandidateError> {
        self.ensure_open()?;
        let coordinates = self.coordinates.ok_or(CandidateError::MissingCoordinates)?;
        let submission = PoiSubmission {
            map_id: map_id.to_string(),
            location_name: self.location_name.clone(),
            description: self.description.clone(),
            lat: coordinates.lat(),
            lng: coordinates.lng(),
            date_visited: self.date_visited,
            tags: self.tags.iter().cloned().collect(),
            google_maps_link: coordinates.google_maps_link(),
            is_private,
            photos: self.photo_uploads(),
        };
        self.state = CandidateState::Submitted;
        Ok(submission)
    }

    pub fn discard(&mut self) -> Result<(), CandidateError> {
        self.ensure_open()?;
        self.state = CandidateState::Discarded;
        Ok(())
    }

    fn edit<T>(&mut self, change: impl FnOnce(&mut Self) -> T) -> Result<T, CandidateError> {
        self.ensure_open()?;
        let result = change(self);
        self.state = CandidateState::Edited;
        Ok(result)
    }

    fn ensure_open(&self) -> Result<(), CandidateError> {
        if self.state.is_final() {
            Err(CandidateError::Finalized(self.state))
        } else {
            Ok(())
        }
    }
}
