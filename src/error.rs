use thiserror::Error;

/// The primary error type for the poi-ingest crate.
#[derive(Error, Debug)]
pub enum PoiIngestError {
    #[error("Exiftool failed to execute or process the file")]
    Exiftool(#[from] exiftool::ExifToolError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // --- Module Errors ---
    #[error("Photo rejected: {0}")]
    Ingest(#[from] crate::features::error::IngestError),
}
