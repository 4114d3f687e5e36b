// src/models.rs
mod file_match;
mod image_metadata;
mod match_criteria;

pub use file_match::FileMatch;
pub use image_metadata::ImageMetadata;
pub use match_criteria::MatchCriteria;
