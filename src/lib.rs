// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod report;

pub use crate::core::metadata::{ExifReader, MetadataExtractor};
pub use crate::core::scanner::{find_matches, find_matches_with, is_jpeg, walk_files};
pub use crate::core::wildcard::matches;
pub use cli::{Args, parse_args, run};
pub use models::{FileMatch, ImageMetadata, MatchCriteria};
pub use report::{format_row, match_indicator, write_table};
