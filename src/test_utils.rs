//! In-memory image fixtures for tests.

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use std::io::Cursor;

/// Builder for an EXIF block, written with `kamadak-exif`'s TIFF writer.
#[derive(Debug, Default)]
pub struct ExifFixture {
    fields: Vec<Field>,
}

impl ExifFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latitude(self, dms: [u32; 3], hemisphere: &str) -> Self {
        self.latitude_frac(dms.map(|c| (c, 1)), hemisphere)
    }

    pub fn latitude_frac(self, dms: [(u32, u32); 3], hemisphere: &str) -> Self {
        self.rational(Tag::GPSLatitude, dms)
            .ascii(Tag::GPSLatitudeRef, hemisphere)
    }

    pub fn longitude(self, dms: [u32; 3], hemisphere: &str) -> Self {
        self.longitude_frac(dms.map(|c| (c, 1)), hemisphere)
    }

    pub fn longitude_frac(self, dms: [(u32, u32); 3], hemisphere: &str) -> Self {
        self.rational(Tag::GPSLongitude, dms)
            .ascii(Tag::GPSLongitudeRef, hemisphere)
    }

    pub fn date_time_original(self, value: &str) -> Self {
        self.ascii(Tag::DateTimeOriginal, value)
    }

    pub fn date_time(self, value: &str) -> Self {
        self.ascii(Tag::DateTime, value)
    }

    pub fn date_time_digitized(self, value: &str) -> Self {
        self.ascii(Tag::DateTimeDigitized, value)
    }

    pub fn make(self, value: &str) -> Self {
        self.ascii(Tag::Make, value)
    }

    pub fn ascii(mut self, tag: Tag, value: &str) -> Self {
        self.fields.push(Field {
            tag,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![value.as_bytes().to_vec()]),
        });
        self
    }

    fn rational(mut self, tag: Tag, parts: [(u32, u32); 3]) -> Self {
        self.fields.push(Field {
            tag,
            ifd_num: In::PRIMARY,
            value: Value::Rational(
                parts
                    .iter()
                    .map(|&(num, denom)| Rational { num, denom })
                    .collect(),
            ),
        });
        self
    }
}

/// Serializes the fixture as a little-endian TIFF/EXIF blob.
pub fn tiff_bytes(fixture: &ExifFixture) -> Vec<u8> {
    let mut writer = Writer::new();
    for field in &fixture.fields {
        writer.push_field(field);
    }
    let mut buf = Cursor::new(Vec::new());
    writer
        .write(&mut buf, true)
        .expect("fixture EXIF should serialize");
    buf.into_inner()
}

/// Wraps the fixture in the smallest JPEG that EXIF readers accept: SOI, APP1, EOI.
pub fn jpeg_with_exif(fixture: &ExifFixture) -> Vec<u8> {
    let mut payload = b"Exif\0\0".to_vec();
    payload.extend(tiff_bytes(fixture));
    let segment_len = u16::try_from(payload.len() + 2).expect("fixture fits in one segment");

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend(payload);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// A JPEG with no APP1 segment at all.
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}
