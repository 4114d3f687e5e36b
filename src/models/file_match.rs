// src/models/file_match.rs
use crate::models::{ImageMetadata, MatchCriteria};

/// A photo that passed every active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatch {
    pub filename: String,
    pub metadata: ImageMetadata,
    pub matched_by_name: bool,
    pub matched_by_date: bool,
    pub matched_by_model: bool,
}

impl FileMatch {
    /// Records a qualifying file. Only call this once the file has passed
    /// every active criterion: the flags are taken from which criteria were
    /// active, which is then the same as which were satisfied.
    #[inline]
    #[must_use]
    pub fn new(filename: String, metadata: ImageMetadata, criteria: &MatchCriteria) -> Self {
        Self {
            filename,
            metadata,
            matched_by_name: criteria.is_name_active(),
            matched_by_date: criteria.is_date_active(),
            matched_by_model: criteria.is_model_active(),
        }
    }
}
