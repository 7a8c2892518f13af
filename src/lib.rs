//! # POI Ingest
//!
//! Turn uploaded photos into draft points of interest.
//!
//! Each photo is read for its EXIF GPS position and capture date. Photos with a
//! usable position become geolocated candidates, the rest are flagged for manual
//! placement on the map. Nothing a photo carries (or lacks) makes ingestion fail.
//!
//! ## Key Features
//!
//! - **Coordinate Decoding**: Degrees/minutes/seconds plus hemisphere reference to signed decimal degrees.
//! - **EXIF Reading**: GPS position and `DateTimeOriginal` / `DateTime` / `CreateDate`, through a pluggable EXIF reader.
//! - **Time Zones**: Offset tags when present, otherwise the IANA zone at the photo's GPS position.
//! - **Place Hints**: Offline reverse geocoding to the nearest known place.
//! - **Candidates**: Default names, tags, description and a submit step producing the POI creation payload.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use poi_ingest::{PhotoInput, PoiIngestor, UploadSession};
//! use std::path::Path;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let ingestor = PoiIngestor::builder().build();
//!     let mut session = UploadSession::new();
//!
//!     let photo = PhotoInput::from_path(Path::new("assets/sunset.jpg"))?;
//!     ingestor.ingest_one(&mut session, photo)?;
//!
//!     for candidate in session.candidates() {
//!         println!("{}: {:?}", candidate.location_name, candidate.coordinates);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod backends;
pub mod candidate;
pub mod error;
pub mod features;
pub mod poi_ingestor;
pub mod submission;
pub mod time;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use backends::{ExifCapability, ExifToolCapability, KamadakExif};
pub use candidate::{CandidateState, PoiCandidate};
pub use error::PoiIngestError;
pub use features::coordinates::{DecimalCoordinate, GpsCoordinateDms, HemisphereRef};
pub use features::location::{ExtractedLocation, extract_location_and_date};
pub use poi_ingestor::{ExifBackend, IngestOutcome, PhotoInput, PoiIngestor, UploadLimits, UploadSession};
pub use submission::PoiSubmission;
