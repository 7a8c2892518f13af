use crate::poi_ingestor::mime_from_path;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Checks if a directory entry is hidden (starts with '.').
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Recursively lists photo files under `dir`, judged by extension.
///
/// Traversal errors are propagated. A plain file path is returned as-is when it
/// looks like a photo.
pub fn list_photos_walkdir_filtered(
    dir: &Path,
    include_hidden: bool,
) -> Result<Vec<PathBuf>, walkdir::Error> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        // depth 0 is the root the caller asked for, even if it is hidden
        .filter_entry(|e| include_hidden || e.depth() == 0 || !is_hidden(e))
        .filter_map(|entry_result| match entry_result {
            Ok(entry) => (entry.file_type().is_file() && is_photo(entry.path()))
                .then(|| Ok(entry.into_path())),
            Err(e) => Some(Err(e)),
        })
        .collect()
}

fn is_photo(path: &Path) -> bool {
    mime_from_path(path).starts_with("image/")
}
