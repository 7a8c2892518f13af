//! Module for resolving the visit date of a photo from its metadata.
mod filename_parsing;
mod logic;
mod parsing;
pub mod structs;
pub use logic::{DATE_TAG_PRIORITY, resolve_visit_date, visit_date_from_filename};
pub use parsing::{parse_naive, parse_offset};
