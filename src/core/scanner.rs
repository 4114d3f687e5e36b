// src/core/scanner.rs
mod photo;
mod utils;
mod walk;


pub use photo::{find_matches, find_matches_with};
pub use utils::is_jpeg;
pub use walk::walk_files;
