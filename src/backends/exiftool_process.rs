use super::ExifCapability;
use crate::PoiIngestError;
use crate::features::error::MetadataError;
use crate::features::exif_tags::ExifTagSet;
use exiftool::ExifTool;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// exiftool names for tags the date resolver looks up by their EXIF name.
const EXIF_NAME_ALIASES: [(&str, &str); 1] = [("ModifyDate", "DateTime")];

/// Reader that shells out to a long-running `exiftool` process.
///
/// Slower than [`super::KamadakExif`] but understands far more formats and
/// maker notes. Tags are requested in numeric form (`-n`), so GPS positions
/// arrive as decimal degrees rather than DMS triples.
pub struct ExifToolCapability {
    exiftool: Mutex<ExifTool>,
}

impl ExifToolCapability {
    /// Starts `exiftool` from `PATH`.
    ///
    /// # Errors
    ///
    /// [`PoiIngestError::Exiftool`] if the executable cannot be found or started.
    pub fn new() -> Result<Self, PoiIngestError> {
        Ok(Self {
            exiftool: Mutex::new(ExifTool::new()?),
        })
    }

    /// Starts a specific `exiftool` executable.
    ///
    /// # Errors
    ///
    /// [`PoiIngestError::Exiftool`] if the executable cannot be started.
    pub fn with_executable(path: &Path) -> Result<Self, PoiIngestError> {
        Ok(Self {
            exiftool: Mutex::new(ExifTool::with_executable(path)?),
        })
    }
}

impl ExifCapability for ExifToolCapability {
    fn name(&self) -> &'static str {
        "exiftool"
    }

    fn read_tags(&self, image: &[u8]) -> Result<ExifTagSet, MetadataError> {
        // exiftool works on paths, so the upload is spooled to disk first.
        let mut file =
            tempfile::NamedTempFile::new().map_err(|e| MetadataError::Unavailable(e.to_string()))?;
        file.write_all(image)
            .and_then(|()| file.flush())
            .map_err(|e| MetadataError::Unavailable(e.to_string()))?;

        let json = self
            .exiftool
            .lock()
            .map_err(|_| MetadataError::Unavailable("exiftool process lock poisoned".to_string()))?
            .json(file.path(), &["-n"])
            .map_err(|e| MetadataError::Unavailable(e.to_string()))?;

        Ok(tags_from_exiftool_json(&json))
    }
}

/// Converts exiftool `-n` JSON into a tag set.
///
/// exiftool reports IFD0 `DateTime` as `ModifyDate`; it is also published
/// under `DateTime` unless that key is already present.
pub fn tags_from_exiftool_json(json: &Value) -> ExifTagSet {
    let mut tags = ExifTagSet::from_json(json);
    for (exiftool_name, exif_name) in EXIF_NAME_ALIASES {
        if !tags.contains(exif_name)
            && let Some(value) = tags.get(exiftool_name).cloned()
        {
            tags.insert(exif_name, value);
        }
    }
    tags
}
