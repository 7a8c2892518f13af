use serde::{Deserialize, Serialize};

/// Opaque handle to an uploaded image, keyed by the BLAKE3 hash of its bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRef {
    pub id: String,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl PhotoRef {
    #[must_use]
    pub fn from_bytes(file_name: &str, mime_type: &str, bytes: &[u8]) -> Self {
        Self {
            id: hash_bytes(bytes),
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            size_bytes: bytes.len() as u64,
        }
    }
}

/// Computes the BLAKE3 hash of an in-memory image.
#[must_use]
pub fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update_rayon(bytes);

    let hash = hasher.finalize();
    hash.to_hex().to_string()
}
