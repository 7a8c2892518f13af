use super::ExifCapability;
use crate::features::error::MetadataError;
use crate::features::exif_tags::{ExifTagSet, TagValue};
use exif::{In, Value};
use std::io::Cursor;

/// In-process reader backed by `kamadak-exif`.
///
/// Handles JPEG, TIFF, HEIF, PNG and WebP containers. Fields of the primary
/// image are exposed under their EXIF tag names; `DateTimeDigitized` is also
/// published as `CreateDate`, the name exiftool uses for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct KamadakExif;

impl ExifCapability for KamadakExif {
    fn name(&self) -> &'static str {
        "kamadak-exif"
    }

    fn read_tags(&self, image: &[u8]) -> Result<ExifTagSet, MetadataError> {
        let exif = exif::Reader::new()
            .read_from_container(&mut Cursor::new(image))
            .map_err(|e| MetadataError::Unavailable(e.to_string()))?;

        let mut tags: ExifTagSet = exif
            .fields()
            .filter(|field| field.ifd_num == In::PRIMARY)
            .filter_map(|field| convert_value(&field.value).map(|v| (field.tag.to_string(), v)))
            .collect();

        if !tags.contains("CreateDate")
            && let Some(digitized) = tags.get("DateTimeDigitized").cloned()
        {
            tags.insert("CreateDate", digitized);
        }
        Ok(tags)
    }
}

fn convert_value(value: &Value) -> Option<TagValue> {
    match value {
        Value::Ascii(parts) => parts.first().map(|bytes| {
            TagValue::Text(
                String::from_utf8_lossy(bytes)
                    .trim_matches(|c: char| c.is_whitespace() || c == '\0')
                    .to_string(),
            )
        }),
        Value::Rational(r) if r.len() == 3 => {
            Some(TagValue::Dms([r[0].to_f64(), r[1].to_f64(), r[2].to_f64()]))
        }
        Value::SRational(r) if r.len() == 3 => {
            Some(TagValue::Dms([r[0].to_f64(), r[1].to_f64(), r[2].to_f64()]))
        }
        Value::Rational(r) if r.len() == 1 => Some(TagValue::Number(r[0].to_f64())),
        Value::SRational(r) if r.len() == 1 => Some(TagValue::Number(r[0].to_f64())),
        Value::Byte(v) if v.len() == 1 => Some(TagValue::Number(f64::from(v[0]))),
        Value::Short(v) if v.len() == 1 => Some(TagValue::Number(f64::from(v[0]))),
        Value::Long(v) if v.len() == 1 => Some(TagValue::Number(f64::from(v[0]))),
        Value::SShort(v) if v.len() == 1 => Some(TagValue::Number(f64::from(v[0]))),
        Value::SLong(v) if v.len() == 1 => Some(TagValue::Number(f64::from(v[0]))),
        Value::Float(v) if v.len() == 1 => Some(TagValue::Number(f64::from(v[0]))),
        Value::Double(v) if v.len() == 1 => Some(TagValue::Number(v[0])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ExifFixture, jpeg_with_exif};

    #[test]
    fn test_reads_gps_and_dates() {
        let jpeg = jpeg_with_exif(
            &ExifFixture::new()
                .latitude([40, 42, 46], "N")
                .longitude_frac([(74, 1), (0, 1), (216, 10)], "W")
                .date_time_original("2023:07:29 14:32:00")
                .date_time_digitized("2023:07:29 14:32:05"),
        );

        let tags = KamadakExif.read_tags(&jpeg).unwrap();

        assert_eq!(
            tags.get("GPSLatitude"),
            Some(&TagValue::Dms([40.0, 42.0, 46.0]))
        );
        assert_eq!(tags.text("GPSLatitudeRef"), Some("N"));
        assert_eq!(
            tags.get("GPSLongitude"),
            Some(&TagValue::Dms([74.0, 0.0, 21.6]))
        );
        assert_eq!(tags.text("GPSLongitudeRef"), Some("W"));
        assert_eq!(tags.text("DateTimeOriginal"), Some("2023:07:29 14:32:00"));
        assert_eq!(tags.text("CreateDate"), Some("2023:07:29 14:32:05"));
    }

    #[test]
    fn test_jpeg_without_exif_is_unavailable() {
        let bare_jpeg = [0xFF, 0xD8, 0xFF, 0xD9];
        assert!(matches!(
            KamadakExif.read_tags(&bare_jpeg),
            Err(MetadataError::Unavailable(_))
        ));
    }

    #[test]
    fn test_non_image_bytes_are_unavailable() {
        assert!(KamadakExif.read_tags(b"just some text").is_err());
        assert!(KamadakExif.read_tags(&[]).is_err());
    }

    #[test]
    fn test_truncated_exif_segment_is_unavailable() {
        let jpeg = jpeg_with_exif(&ExifFixture::new().latitude([1, 2, 3], "S"));
        let truncated = &jpeg[..jpeg.len() / 2];
        assert!(KamadakExif.read_tags(truncated).is_err());
    }
}
