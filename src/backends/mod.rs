//! Pluggable EXIF readers.
//!
//! The metadata reader never looks for a parser on its own; it is handed an
//! [`ExifCapability`] (or `None`, meaning no EXIF support is configured).

mod exiftool_process;
mod kamadak;

pub use exiftool_process::{ExifToolCapability, tags_from_exiftool_json};
pub use kamadak::KamadakExif;

use crate::features::error::MetadataError;
use crate::features::exif_tags::ExifTagSet;

/// Something that can turn raw image bytes into an [`ExifTagSet`].
pub trait ExifCapability: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Reads the primary image's tags.
    ///
    /// # Errors
    ///
    /// [`MetadataError::Unavailable`] when the bytes hold no readable metadata block.
    fn read_tags(&self, image: &[u8]) -> Result<ExifTagSet, MetadataError>;
}
