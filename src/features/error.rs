use crate::candidate::CandidateState;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinateFormat(String),

    #[error("Coordinate out of range: lat {lat}, lng {lng}")]
    OutOfRange { lat: f64, lng: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetadataError {
    #[error("EXIF metadata unavailable: {0}")]
    Unavailable(String),

    #[error("No usable date tag found")]
    DateUnresolved,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    #[error("Candidate has no coordinates; place it on the map before submitting")]
    MissingCoordinates,

    #[error("Candidate is {0:?} and can no longer be changed")]
    Finalized(CandidateState),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("Photo {file_name} is {size_bytes} bytes, limit is {max_bytes}")]
    TooLarge {
        file_name: String,
        size_bytes: u64,
        max_bytes: u64,
    },

    #[error("Photo {file_name} has unsupported type {mime_type}")]
    UnsupportedType { file_name: String, mime_type: String },

    #[error("Photo {0} is empty")]
    Empty(String),
}
