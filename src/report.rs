// src/report.rs
use std::io::{self, Write};

use crate::models::FileMatch;

/// Three-letter marker of the criteria a file was filtered by: `n`, `d`
/// and `c` in fixed positions, `-` where the criterion was not used.
#[inline]
#[must_use]
pub fn match_indicator(file: &FileMatch) -> String {
    [
        (file.matched_by_name, 'n'),
        (file.matched_by_date, 'd'),
        (file.matched_by_model, 'c'),
    ]
    .into_iter()
    .map(|(active, letter)| if active { letter } else { '-' })
    .collect()
}

/// One left-aligned, fixed-width table row. Long values are not cut.
#[inline]
#[must_use]
pub fn format_row(file: &FileMatch) -> String {
    format!(
        "{:<8} {:<25} {:<23} {:<20}",
        match_indicator(file),
        file.filename,
        file.metadata.camera_model,
        file.metadata.capture_date
    )
}

/// Writes one row per match.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
#[inline]
pub fn write_table<W: Write>(out: &mut W, files: &[FileMatch]) -> io::Result<()> {
    for file in files {
        writeln!(out, "{}", format_row(file))?;
    }
    Ok(())
}
