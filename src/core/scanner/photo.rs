// src/core/scanner/photo.rs
use std::path::Path;
use tracing::debug;

use crate::core::metadata::{ExifReader, MetadataExtractor};
use crate::core::scanner::utils::is_jpeg;
use crate::core::scanner::walk::walk_files;
use crate::core::wildcard::matches;
use crate::models::{FileMatch, ImageMetadata, MatchCriteria};

/// Finds the JPEG files below `dir` that satisfy every non-empty filter.
///
/// # Arguments
///
/// * `dir` - The directory path to scan
/// * `date_filter` - Exact capture date (`YYYY:MM:DD`), or empty
/// * `model_filter` - Camera model wildcard, or empty
/// * `name_filter` - Filename wildcard, or empty
///
/// # Returns
///
/// The qualifying files in traversal order, possibly empty. Unreadable
/// entries and files without EXIF data are skipped, not reported.
#[inline]
#[must_use]
pub fn find_matches(
    dir: &Path,
    date_filter: &str,
    model_filter: &str,
    name_filter: &str,
) -> Vec<FileMatch> {
    let criteria = MatchCriteria::new(name_filter, date_filter, model_filter);
    find_matches_with(dir, &criteria, &ExifReader)
}

/// Same as [`find_matches`], reading metadata through `extractor`.
#[inline]
#[must_use]
pub fn find_matches_with<E>(dir: &Path, criteria: &MatchCriteria, extractor: &E) -> Vec<FileMatch>
where
    E: MetadataExtractor + ?Sized,
{
    let mut files = Vec::new();

    for entry in walk_files(dir) {
        let filename = entry.file_name().to_string_lossy().to_ascii_lowercase();

        if !is_jpeg(&filename) {
            continue;
        }

        if criteria.is_name_active() && !matches(&criteria.name, &filename) {
            continue;
        }

        let metadata = match extractor.extract(entry.path()) {
            Ok(metadata) => metadata,
            Err(err) => {
                debug!("Skipping {}: {err:#}", entry.path().display());
                continue;
            }
        };

        if meets_criteria(&metadata, criteria) {
            files.push(FileMatch::new(filename, metadata, criteria));
        }
    }

    files
}

fn meets_criteria(metadata: &ImageMetadata, criteria: &MatchCriteria) -> bool {
    let date_ok = !criteria.is_date_active() || criteria.date == metadata.capture_date;
    let model_ok = !criteria.is_model_active() || matches(&criteria.model, &metadata.camera_model);
    date_ok && model_ok
}
