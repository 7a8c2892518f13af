use crate::backends::{ExifCapability, ExifToolCapability, KamadakExif};
use crate::PoiIngestError;
use crate::candidate::{PoiCandidate, build_candidate};
use crate::features::error::{CandidateError, IngestError, MetadataError};
use crate::features::location::{ExtractedLocation, extract_location_and_date};
use crate::features::photo_ref::PhotoRef;
use crate::features::place::{PlaceHint, nearest_place};
use crate::submission::PoiSubmission;
use crate::time::visit_date_from_filename;
use bon::bon;
use rayon::prelude::*;
use reverse_geocoder::ReverseGeocoder;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default per-photo size ceiling, 15 MiB.
pub const DEFAULT_MAX_PHOTO_BYTES: u64 = 15 * 1024 * 1024;

/// Which EXIF reader the ingestor hands to the metadata reader.
#[derive(Default)]
pub enum ExifBackend {
    /// In-process `kamadak-exif`.
    #[default]
    Kamadak,
    /// A persistent `exiftool` process, from `PATH` or the given executable.
    ExifTool(Option<PathBuf>),
    /// Any other implementation.
    Custom(Box<dyn ExifCapability>),
    /// No EXIF support: every photo needs manual placement.
    Disabled,
}

impl ExifBackend {
    fn into_capability(self) -> Option<Box<dyn ExifCapability>> {
        match self {
            Self::Kamadak => Some(Box::new(KamadakExif)),
            Self::ExifTool(path) => {
                let started = match path {
                    Some(path) => ExifToolCapability::with_executable(&path),
                    None => ExifToolCapability::new(),
                };
                match started {
                    Ok(exiftool) => Some(Box::new(exiftool)),
                    Err(e) => {
                        warn!("{e}; photos will be ingested without EXIF metadata");
                        None
                    }
                }
            }
            Self::Custom(capability) => Some(capability),
            Self::Disabled => None,
        }
    }
}

/// Size and type limits applied to every upload before it is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_photo_bytes: u64,
    pub accepted_mime_prefix: String,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_photo_bytes: DEFAULT_MAX_PHOTO_BYTES,
            accepted_mime_prefix: "image/".to_string(),
        }
    }
}

impl UploadLimits {
    /// Default limits with the size ceiling given in MiB.
    #[must_use]
    pub fn with_max_megabytes(max_mb: u64) -> Self {
        Self {
            max_photo_bytes: max_mb.saturating_mul(1024 * 1024),
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// The matching [`IngestError`] for empty, oversized or non-image uploads.
    pub fn validate(&self, photo: &PhotoInput) -> Result<(), IngestError> {
        let size_bytes = photo.bytes.len() as u64;
        if size_bytes == 0 {
            return Err(IngestError::Empty(photo.file_name.clone()));
        }
        if size_bytes > self.max_photo_bytes {
            return Err(IngestError::TooLarge {
                file_name: photo.file_name.clone(),
                size_bytes,
                max_bytes: self.max_photo_bytes,
            });
        }
        if !photo.mime_type.starts_with(&self.accepted_mime_prefix) {
            return Err(IngestError::UnsupportedType {
                file_name: photo.file_name.clone(),
                mime_type: photo.mime_type.clone(),
            });
        }
        Ok(())
    }
}

/// A user-selected file, as delivered by a picker or drop event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoInput {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoInput {
    #[must_use]
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk, guessing its MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Any I/O error from reading the file.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::new(file_name_of(path), mime_from_path(path), bytes))
    }

    /// Like [`PhotoInput::from_path`], but checks type and size against `limits`
    /// before any bytes are read.
    ///
    /// # Errors
    ///
    /// [`PoiIngestError::Ingest`] for files the limits reject, [`PoiIngestError::Io`]
    /// when the file cannot be read.
    pub fn from_path_checked(path: &Path, limits: &UploadLimits) -> Result<Self, PoiIngestError> {
        let mime_type = mime_from_path(path);
        if !mime_type.starts_with(&limits.accepted_mime_prefix) {
            return Err(IngestError::UnsupportedType {
                file_name: file_name_of(path),
                mime_type: mime_type.to_string(),
            }
            .into());
        }
        let size_bytes = std::fs::metadata(path)?.len();
        if size_bytes > limits.max_photo_bytes {
            return Err(IngestError::TooLarge {
                file_name: file_name_of(path),
                size_bytes,
                max_bytes: limits.max_photo_bytes,
            }
            .into());
        }
        Ok(Self::from_path(path)?)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

/// MIME type for common photo extensions, `application/octet-stream` otherwise.
#[must_use]
pub fn mime_from_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .unwrap_or_default()
        .to_string_lossy()
        .to_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "tif" | "tiff" => "image/tiff",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Result of feeding one photo to the ingestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    Added { sequence: u64, needs_placement: bool },
    Rejected(IngestError),
}

/// The candidate list of one upload wizard.
///
/// Sequence numbers start at 1, follow enqueue order and are never reused,
/// even after a candidate is removed.
#[derive(Debug, Clone)]
pub struct UploadSession {
    candidates: Vec<PoiCandidate>,
    next_sequence: u64,
}

impl Default for UploadSession {
    fn default() -> Self {
        Self {
            candidates: Vec::new(),
            next_sequence: 1,
        }
    }
}

impl UploadSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number the next accepted photo will get.
    #[must_use]
    pub const fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    fn reserve_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    fn push(&mut self, candidate: PoiCandidate) {
        self.candidates.push(candidate);
    }

    #[must_use]
    pub fn candidates(&self) -> &[PoiCandidate] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub fn get(&self, sequence: u64) -> Option<&PoiCandidate> {
        self.candidates.iter().find(|c| c.sequence == sequence)
    }

    pub fn get_mut(&mut self, sequence: u64) -> Option<&mut PoiCandidate> {
        self.candidates.iter_mut().find(|c| c.sequence == sequence)
    }

    /// Discards a candidate and takes it out of the list.
    pub fn remove(&mut self, sequence: u64) -> Option<PoiCandidate> {
        let index = self.candidates.iter().position(|c| c.sequence == sequence)?;
        let mut candidate = self.candidates.remove(index);
        if let Err(e) = candidate.discard() {
            debug!(sequence, "{e}");
        }
        Some(candidate)
    }

    /// Candidates still waiting for a map click.
    pub fn needs_placement(&self) -> impl Iterator<Item = &PoiCandidate> {
        self.candidates
            .iter()
            .filter(|c| !c.state.is_final() && c.needs_manual_placement())
    }

    /// Submits every open candidate, reporting each result by sequence number.
    pub fn submit_all(
        &mut self,
        map_id: &str,
        is_private: bool,
    ) -> Vec<(u64, Result<PoiSubmission, CandidateError>)> {
        self.candidates
            .iter_mut()
            .filter(|c| !c.state.is_final())
            .map(|c| (c.sequence, c.submit(map_id, is_private)))
            .collect()
    }
}

/// Turns uploaded photos into POI candidates.
///
/// Built once and shared; ingestion only needs `&self`, so batches are
/// decoded in parallel.
pub struct PoiIngestor {
    capability: Option<Box<dyn ExifCapability>>,
    geocoder: Option<ReverseGeocoder>,
    limits: UploadLimits,
    filename_date_fallback: bool,
}

#[bon]
impl PoiIngestor {
    /// Constructs a `PoiIngestor` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `backend: ExifBackend` - (Default: `Kamadak`) EXIF reader to use. If `exiftool`
    ///   cannot be started the ingestor runs without EXIF support and logs a warning.
    /// * `limits: UploadLimits` - (Default: 15 MiB, `image/*`) Checks applied before decoding.
    /// * `reverse_geocode: bool` - (Default: `true`) Attach the nearest known place to
    ///   geolocated candidates.
    /// * `filename_date_fallback: bool` - (Default: `false`) When EXIF has no date, look
    ///   for one in the file name before falling back to the current time.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use poi_ingest::{ExifBackend, PoiIngestor};
    /// let ingestor = PoiIngestor::builder()
    ///     .backend(ExifBackend::Kamadak)
    ///     .reverse_geocode(false)
    ///     .build();
    /// ```
    #[builder]
    pub fn new(
        #[builder(default)] backend: ExifBackend,
        #[builder(default)] limits: UploadLimits,
        #[builder(default = true)] reverse_geocode: bool,
        #[builder(default = false)] filename_date_fallback: bool,
    ) -> Self {
        let capability = backend.into_capability();
        if let Some(capability) = &capability {
            debug!(reader = capability.name(), "EXIF capability ready");
        }
        Self {
            capability,
            geocoder: reverse_geocode.then(ReverseGeocoder::new),
            limits,
            filename_date_fallback,
        }
    }

    #[must_use]
    pub const fn limits(&self) -> &UploadLimits {
        &self.limits
    }

    /// Reads location and date from one image, including the file-name fallback if enabled.
    #[must_use]
    pub fn extract(&self, photo: &PhotoInput) -> ExtractedLocation {
        let extracted = extract_location_and_date(self.capability.as_deref(), &photo.bytes);
        if extracted.date_visited.is_some() || !self.filename_date_fallback {
            return extracted;
        }
        match visit_date_from_filename(&photo.file_name, extracted.coordinates().as_ref()) {
            Some(visit) => extracted.with_visit_date(visit),
            None => extracted,
        }
    }

    /// Validates and ingests a single photo.
    ///
    /// # Errors
    ///
    /// The photo's [`IngestError`] if it fails the upload limits.
    pub fn ingest_one(
        &self,
        session: &mut UploadSession,
        photo: PhotoInput,
    ) -> Result<u64, IngestError> {
        self.limits.validate(&photo)?;
        let sequence = session.reserve_sequence();
        session.push(self.build(&photo, sequence));
        Ok(sequence)
    }

    /// Ingests a batch of photos.
    ///
    /// Sequence numbers are handed out in the order the photos are given, then the
    /// photos are decoded in parallel and appended to `session` in that same order.
    /// Rejected photos get no sequence number.
    pub fn ingest_batch(
        &self,
        session: &mut UploadSession,
        photos: Vec<PhotoInput>,
    ) -> Vec<IngestOutcome> {
        let jobs: Vec<Result<(u64, PhotoInput), IngestError>> = photos
            .into_iter()
            .map(|photo| {
                self.limits
                    .validate(&photo)
                    .map(|()| (session.reserve_sequence(), photo))
            })
            .collect();

        let built: Vec<Result<PoiCandidate, IngestError>> = jobs
            .into_par_iter()
            .map(|job| job.map(|(sequence, photo)| self.build(&photo, sequence)))
            .collect();

        built
            .into_iter()
            .map(|result| match result {
                Ok(candidate) => {
                    let outcome = IngestOutcome::Added {
                        sequence: candidate.sequence,
                        needs_placement: candidate.needs_manual_placement(),
                    };
                    session.push(candidate);
                    outcome
                }
                Err(e) => {
                    warn!("{e}");
                    IngestOutcome::Rejected(e)
                }
            })
            .collect()
    }

    fn build(&self, photo: &PhotoInput, sequence: u64) -> PoiCandidate {
        let photo_ref = PhotoRef::from_bytes(&photo.file_name, &photo.mime_type, &photo.bytes);
        let extracted = self.extract(photo);
        if extracted.date_visited.is_none() {
            debug!(
                file = %photo.file_name,
                "{}, using current time",
                MetadataError::DateUnresolved
            );
        }

        let place_hint = self
            .geocoder
            .as_ref()
            .zip(extracted.coordinates())
            .map(|(geocoder, coordinates)| nearest_place(geocoder, &coordinates));
        let candidate = build_candidate(photo_ref, &extracted, sequence).with_place_hint(place_hint);

        match candidate.placement_notice() {
            Some(notice) => info!(sequence, file = %photo.file_name, "{notice}"),
            None => info!(
                sequence,
                file = %photo.file_name,
                place = ?candidate.place_hint.as_ref().map(PlaceHint::label),
                "Geolocated photo added"
            ),
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::CandidateState;
    use crate::features::coordinates::DecimalCoordinate;
    use crate::features::exif_tags::ExifTagSet;
    use crate::test_utils::{ExifFixture, jpeg_with_exif, jpeg_without_exif};
    use chrono::{NaiveDate, Utc};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ingestor() -> PoiIngestor {
        PoiIngestor::builder().reverse_geocode(false).build()
    }

    fn new_york_jpeg() -> Vec<u8> {
        jpeg_with_exif(
            &ExifFixture::new()
                .latitude([40, 42, 46], "N")
                .longitude_frac([(74, 1), (0, 1), (216, 10)], "W")
                .date_time_original("2023:07:29 14:32:00"),
        )
    }

    fn jpeg(name: &str, bytes: Vec<u8>) -> PhotoInput {
        PhotoInput::new(name, "image/jpeg", bytes)
    }

    /// Records every call so tests can see the injected reader was used.
    struct CountingCapability {
        calls: Arc<AtomicUsize>,
    }

    impl ExifCapability for CountingCapability {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn read_tags(&self, _image: &[u8]) -> Result<ExifTagSet, MetadataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ExifTagSet::new())
        }
    }

    #[test]
    fn test_geolocated_photo_with_exif_date() {
        let ingestor = ingestor();
        let mut session = UploadSession::new();

        let sequence = ingestor
            .ingest_one(&mut session, jpeg("nyc.jpg", new_york_jpeg()))
            .unwrap();

        let candidate = session.get(sequence).unwrap();
        assert!(candidate.is_geolocated());
        assert_eq!(
            candidate.date_visited.naive_local(),
            NaiveDate::from_ymd_opt(2023, 7, 29)
                .unwrap()
                .and_hms_opt(14, 32, 0)
                .unwrap()
        );
        assert_eq!(candidate.location_name, "Photo Location 1");
        assert!(candidate.place_hint.is_none(), "geocoding disabled");
    }

    #[test]
    fn test_photo_without_metadata_gets_build_time() {
        let ingestor = ingestor();
        let mut session = UploadSession::new();
        session.next_sequence = 3;

        let before = Utc::now();
        let sequence = ingestor
            .ingest_one(&mut session, jpeg("blank.jpg", jpeg_without_exif()))
            .unwrap();
        let after = Utc::now();

        let candidate = session.get(sequence).unwrap();
        assert_eq!(candidate.coordinates, None);
        assert_eq!(candidate.location_name, "Photo Location 3");
        assert!(candidate.tags.is_empty());
        assert!(candidate.is_primary);
        assert!(candidate.date_visited >= before && candidate.date_visited <= after);
    }

    #[test]
    fn test_place_hint_when_geocoding() {
        let ingestor = PoiIngestor::builder().build();
        let mut session = UploadSession::new();

        ingestor
            .ingest_one(&mut session, jpeg("nyc.jpg", new_york_jpeg()))
            .unwrap();

        let hint = session.candidates()[0].place_hint.as_ref().unwrap();
        assert_eq!(hint.country_code, "US");
        assert_eq!(session.candidates()[0].location_name, "Photo Location 1");
    }

    #[test]
    fn test_disabled_backend_never_geolocates() {
        let ingestor = PoiIngestor::builder()
            .backend(ExifBackend::Disabled)
            .reverse_geocode(false)
            .build();
        let mut session = UploadSession::new();

        ingestor
            .ingest_one(&mut session, jpeg("nyc.jpg", new_york_jpeg()))
            .unwrap();

        assert!(session.candidates()[0].needs_manual_placement());
    }

    #[test]
    fn test_custom_backend_is_used() {
        let calls = Arc::new(AtomicUsize::new(0));
        let capability = CountingCapability {
            calls: Arc::clone(&calls),
        };
        let ingestor = PoiIngestor::builder()
            .backend(ExifBackend::Custom(Box::new(capability)))
            .reverse_geocode(false)
            .build();
        let mut session = UploadSession::new();

        let outcomes = ingestor.ingest_batch(
            &mut session,
            vec![jpeg("a.jpg", vec![1]), jpeg("b.jpg", vec![2])],
        );

        assert_eq!(outcomes.len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(session.candidates().iter().all(|c| c.needs_manual_placement()));
    }

    #[test]
    fn test_missing_exiftool_falls_back_to_no_capability() {
        let ingestor = PoiIngestor::builder()
            .backend(ExifBackend::ExifTool(Some(PathBuf::from(
                "/definitely/not/exiftool",
            ))))
            .reverse_geocode(false)
            .build();
        let mut session = UploadSession::new();

        let sequence = ingestor
            .ingest_one(&mut session, jpeg("nyc.jpg", new_york_jpeg()))
            .unwrap();

        assert!(session.get(sequence).unwrap().needs_manual_placement());
    }

    #[test]
    fn test_batch_keeps_enqueue_order() {
        let ingestor = ingestor();
        let mut session = UploadSession::new();
        let photos: Vec<PhotoInput> = (0..12)
            .map(|i| {
                let bytes = if i % 2 == 0 {
                    new_york_jpeg()
                } else {
                    jpeg_without_exif()
                };
                jpeg(&format!("photo_{i}.jpg"), bytes)
            })
            .collect();

        let outcomes = ingestor.ingest_batch(&mut session, photos);

        assert_eq!(session.len(), 12, "no candidate may be dropped");
        for (i, (outcome, candidate)) in outcomes.iter().zip(session.candidates()).enumerate() {
            let expected_sequence = i as u64 + 1;
            assert_eq!(candidate.sequence, expected_sequence);
            assert_eq!(candidate.photo_reference.file_name, format!("photo_{i}.jpg"));
            assert_eq!(
                candidate.location_name,
                format!("Photo Location {expected_sequence}")
            );
            assert_eq!(
                *outcome,
                IngestOutcome::Added {
                    sequence: expected_sequence,
                    needs_placement: i % 2 == 1,
                }
            );
        }
    }

    #[test]
    fn test_rejected_photos_skip_sequence_numbers() {
        let ingestor = PoiIngestor::builder()
            .reverse_geocode(false)
            .limits(UploadLimits {
                max_photo_bytes: 1024,
                ..UploadLimits::default()
            })
            .build();
        let mut session = UploadSession::new();

        let outcomes = ingestor.ingest_batch(
            &mut session,
            vec![
                jpeg("ok.jpg", jpeg_without_exif()),
                jpeg("huge.jpg", vec![0; 2048]),
                PhotoInput::new("notes.txt", "text/plain", b"hello".to_vec()),
                jpeg("empty.jpg", Vec::new()),
                jpeg("also_ok.jpg", jpeg_without_exif()),
            ],
        );

        assert_eq!(
            outcomes[0],
            IngestOutcome::Added {
                sequence: 1,
                needs_placement: true
            }
        );
        assert!(matches!(
            outcomes[1],
            IngestOutcome::Rejected(IngestError::TooLarge {
                size_bytes: 2048,
                ..
            })
        ));
        assert!(matches!(
            outcomes[2],
            IngestOutcome::Rejected(IngestError::UnsupportedType { .. })
        ));
        assert!(matches!(
            outcomes[3],
            IngestOutcome::Rejected(IngestError::Empty(_))
        ));
        assert_eq!(
            outcomes[4],
            IngestOutcome::Added {
                sequence: 2,
                needs_placement: true
            }
        );
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_sequence_is_monotonic_across_batches_and_removals() {
        let ingestor = ingestor();
        let mut session = UploadSession::new();

        ingestor.ingest_batch(
            &mut session,
            vec![jpeg("a.jpg", jpeg_without_exif()), jpeg("b.jpg", jpeg_without_exif())],
        );
        let removed = session.remove(2).unwrap();
        assert_eq!(removed.state, CandidateState::Discarded);
        assert_eq!(session.len(), 1);

        let sequence = ingestor
            .ingest_one(&mut session, jpeg("c.jpg", jpeg_without_exif()))
            .unwrap();
        assert_eq!(sequence, 3, "numbers are not reused after removal");
        assert_eq!(session.get(3).unwrap().location_name, "Photo Location 3");
        assert!(session.remove(2).is_none());
    }

    #[test]
    fn test_filename_date_fallback() {
        let with_fallback = PoiIngestor::builder()
            .reverse_geocode(false)
            .filename_date_fallback(true)
            .build();

        let extracted = with_fallback.extract(&jpeg("PXL_20230729_143200000.jpg", jpeg_without_exif()));
        assert_eq!(extracted.date_details.unwrap().source, "FileName");

        let without_fallback =
            ingestor().extract(&jpeg("PXL_20230729_143200000.jpg", jpeg_without_exif()));
        assert!(without_fallback.date_visited.is_none());
    }

    #[test]
    fn test_session_placement_and_submit_all() {
        let ingestor = ingestor();
        let mut session = UploadSession::new();
        ingestor.ingest_batch(
            &mut session,
            vec![
                jpeg("nyc.jpg", new_york_jpeg()),
                jpeg("blank.jpg", jpeg_without_exif()),
            ],
        );

        let unplaced: Vec<u64> = session.needs_placement().map(|c| c.sequence).collect();
        assert_eq!(unplaced, vec![2]);

        let results = session.submit_all("map-1", false);
        assert_eq!(results.len(), 2);
        assert!(results[0].1.is_ok());
        assert_eq!(results[1].1, Err(CandidateError::MissingCoordinates));

        session
            .get_mut(2)
            .unwrap()
            .set_coordinates(DecimalCoordinate::new(51.5, -0.12).unwrap())
            .unwrap();
        let results = session.submit_all("map-1", false);
        assert_eq!(results.len(), 1, "already submitted candidates are skipped");
        assert_eq!(results[0].0, 2);
        assert!(results[0].1.is_ok());
        assert_eq!(session.needs_placement().count(), 0);
    }

    #[test]
    fn test_ingestor_is_shareable() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<PoiIngestor>();
    }

    #[test]
    fn test_from_path_checked_rejects_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let limits = UploadLimits {
            max_photo_bytes: 16,
            ..UploadLimits::default()
        };
        let big = dir.path().join("big.jpg");
        std::fs::write(&big, vec![0u8; 64]).unwrap();
        let small = dir.path().join("small.JPG");
        std::fs::write(&small, jpeg_without_exif()).unwrap();
        let notes = dir.path().join("notes.txt");
        std::fs::write(&notes, b"hello").unwrap();

        assert!(matches!(
            PhotoInput::from_path_checked(&big, &limits),
            Err(PoiIngestError::Ingest(IngestError::TooLarge {
                size_bytes: 64,
                max_bytes: 16,
                ..
            }))
        ));
        assert!(matches!(
            PhotoInput::from_path_checked(&notes, &limits),
            Err(PoiIngestError::Ingest(IngestError::UnsupportedType { .. }))
        ));
        assert!(matches!(
            PhotoInput::from_path_checked(&dir.path().join("gone.jpg"), &limits),
            Err(PoiIngestError::Io(_))
        ));

        let photo = PhotoInput::from_path_checked(&small, &limits).unwrap();
        assert_eq!(photo.file_name, "small.JPG");
        assert_eq!(photo.mime_type, "image/jpeg");
        assert_eq!(photo.bytes, jpeg_without_exif());
    }

    #[test]
    fn test_limits_from_megabytes_saturate() {
        assert_eq!(UploadLimits::with_max_megabytes(15), UploadLimits::default());
        assert_eq!(UploadLimits::with_max_megabytes(u64::MAX).max_photo_bytes, u64::MAX);
    }

    #[test]
    fn test_mime_from_path() {
        assert_eq!(mime_from_path(Path::new("a/B.JPG")), "image/jpeg");
        assert_eq!(mime_from_path(Path::new("x.heic")), "image/heic");
        assert_eq!(mime_from_path(Path::new("notes")), "application/octet-stream");
    }
}
