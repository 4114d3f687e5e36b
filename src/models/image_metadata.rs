// src/models/image_metadata.rs

/// Capture date and camera model read from a photo's EXIF block.
///
/// Either field is empty when the tag is missing from the file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    /// Date portion of the EXIF `DateTime` tag, normally `YYYY:MM:DD`.
    pub capture_date: String,
    pub camera_model: String,
}

impl ImageMetadata {
    #[inline]
    #[must_use]
    pub fn new(capture_date: impl Into<String>, camera_model: impl Into<String>) -> Self {
        Self {
            capture_date: capture_date.into(),
            camera_model: camera_model.into(),
        }
    }

    /// Builds metadata from a raw EXIF date-time value, keeping only the date.
    #[inline]
    #[must_use]
    pub fn from_raw_datetime(raw_datetime: &str, camera_model: impl Into<String>) -> Self {
        Self::new(trim_time_from_date(raw_datetime), camera_model)
    }
}

/// Returns the first ten characters of an EXIF date-time (`YYYY:MM:DD`).
/// Values shorter than that are returned unchanged.
#[inline]
#[must_use]
pub fn trim_time_from_date(full_date_time: &str) -> String {
    full_date_time.chars().take(10).collect()
}
