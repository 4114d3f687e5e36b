// src/core/scanner/utils.rs

/// Whether a file name carries a `.jpg` or `.jpeg` extension, in any case.
#[inline]
#[must_use]
pub fn is_jpeg(filename: &str) -> bool {
    let lower = filename.to_ascii_lowercase();
    lower.ends_with(".jpg") || lower.ends_with(".jpeg")
}
