// src/core/metadata.rs
use anyhow::{Context as _, Result};
use exif::{Exif, In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::models::ImageMetadata;

/// Source of capture date and camera model for a photo on disk.
pub trait MetadataExtractor {
    /// Reads the metadata of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or carries no
    /// embedded metadata container. Callers treat this as "not a
    /// candidate", never as a fatal condition.
    fn extract(&self, path: &Path) -> Result<ImageMetadata>;
}

/// Reads the primary IFD of a JPEG's EXIF block.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExifReader;

impl MetadataExtractor for ExifReader {
    #[inline]
    fn extract(&self, path: &Path) -> Result<ImageMetadata> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;
        let mut reader = BufReader::new(file);
        let exif = Reader::new()
            .read_from_container(&mut reader)
            .with_context(|| format!("Failed to read EXIF data: {}", path.display()))?;

        let raw_datetime = ascii_field(&exif, Tag::DateTime);
        let camera_model = ascii_field(&exif, Tag::Model);

        Ok(ImageMetadata::from_raw_datetime(&raw_datetime, camera_model))
    }
}

/// Raw text of an ASCII tag in the primary IFD, or an empty string.
fn ascii_field(exif: &Exif, tag: Tag) -> String {
    match exif.get_field(tag, In::PRIMARY).map(|field| &field.value) {
        Some(Value::Ascii(values)) => values.first().map_or_else(String::new, |bytes| {
            String::from_utf8_lossy(bytes).into_owned()
        }),
        _ => String::new(),
    }
}
