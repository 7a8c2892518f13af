use crate::features::coordinates::GpsCoordinateDms;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single metadata value as recovered from an image.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    Dms([f64; 3]),
    Number(f64),
    Text(String),
}

impl TagValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric view of the value. Text is parsed when it holds a plain number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Dms(_) => None,
        }
    }

    #[must_use]
    pub fn as_dms(&self) -> Option<GpsCoordinateDms> {
        match self {
            Self::Dms(parts) => Some(GpsCoordinateDms::from(*parts)),
            _ => None,
        }
    }

    /// Maps one JSON value from exiftool's `-n` output. Arrays and objects are skipped.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => n.as_f64().map(Self::Number),
            Value::Bool(b) => Some(Self::Number(f64::from(u8::from(*b)))),
            _ => None,
        }
    }
}

/// Tag name to value map recovered from an image's metadata block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ExifTagSet {
    tags: BTreeMap<String, TagValue>,
}

impl ExifTagSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: TagValue) {
        self.tags.insert(name.into(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.tags.get(name)
    }

    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(TagValue::as_text)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builds a tag set from exiftool's flat JSON object.
    #[must_use]
    pub fn from_json(exif: &Value) -> Self {
        let tags = exif
            .as_object()
            .map(|object| {
                object
                    .iter()
                    .filter_map(|(name, value)| {
                        TagValue::from_json(value).map(|v| (name.clone(), v))
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self { tags }
    }
}

impl<S: Into<String>> FromIterator<(S, TagValue)> for ExifTagSet {
    fn from_iter<I: IntoIterator<Item = (S, TagValue)>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
