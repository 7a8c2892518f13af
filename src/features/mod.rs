pub mod coordinates;
pub mod error;
pub mod exif_tags;
pub mod location;
pub mod photo_ref;
pub mod place;
