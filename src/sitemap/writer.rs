// src/sitemap/writer.rs
// =============================================================================
// Writes a sitemap to disk.
//
// Steps:
// 1. Refuse to write an empty sitemap (nothing was crawled)
// 2. Create the output directory if it doesn't exist yet
// 3. Write the XML to a temporary file next to the target
// 4. Rename it into place
//
// The rename is what keeps a half-written sitemap from ever appearing at the
// target path: readers either see the old file or the complete new one.
// =============================================================================

use super::serialize;
use crate::crawl::VisitedSet;
use crate::error::{Result, SitemapError};
use chrono::{Local, NaiveDate};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// Writes the sitemap for `visited`, dated today, and returns its path
pub fn generate_xml_sitemap(
    visited: &VisitedSet,
    output_dir: &Path,
    filename: &str,
) -> Result<PathBuf> {
    let today = Local::now().date_naive();
    write_sitemap(visited, output_dir, filename, today)
}

/// Writes the sitemap for `visited` with an explicit generation date
pub fn write_sitemap(
    visited: &VisitedSet,
    output_dir: &Path,
    filename: &str,
    date: NaiveDate,
) -> Result<PathBuf> {
    if visited.is_empty() {
        return Err(SitemapError::NoUrls);
    }

    validate_filename(filename)?;

    let xml = serialize(visited, date)?;

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(filename);

    let mut tmp = NamedTempFile::new_in(output_dir)?;
    tmp.write_all(xml.as_bytes())?;
    tmp.as_file().sync_all()?;
    make_world_readable(&tmp)?;
    tmp.persist(&path).map_err(|e| SitemapError::Io(e.error))?;

    info!(path = %path.display(), urls = visited.len(), "sitemap created");
    Ok(path)
}

// Temp files are created owner-only; a sitemap is meant to be served, so
// give it the usual rw-r--r-- before it lands at the target path.
#[cfg(unix)]
fn make_world_readable(tmp: &NamedTempFile) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    tmp.as_file()
        .set_permissions(fs::Permissions::from_mode(0o644))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_world_readable(_tmp: &NamedTempFile) -> Result<()> {
    Ok(())
}

// Only a plain file name is accepted; "../x.xml" or "a/b.xml" would put the
// sitemap outside the output directory.
fn validate_filename(filename: &str) -> Result<()> {
    let plain = Path::new(filename)
        .file_name()
        .map_or(false, |name| name == filename);

    if plain && filename != "." && filename != ".." {
        Ok(())
    } else {
        Err(SitemapError::InvalidFilename(filename.to_string()))
    }
}
