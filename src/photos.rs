// src/photos.rs
// Officer photo folder, for importing pictures into contacts by hand later.
// The folder is wiped at the start of every run, so its content depends only
// on the pages scraped.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::options::ExportOptions;
use crate::core::net::ImageFetcher;
use crate::core::sanitize::sanitize_file_stem;
use crate::error::Result;
use crate::file::{recreate_dir, write_bytes};
use crate::roster::OfficerRecord;

#[derive(Debug, Default)]
pub struct PhotoReport {
    pub saved: Vec<PathBuf>,
    /// Placeholder / default images and officers without email.
    pub skipped: usize,
    pub failed: usize,
}

/// Extension guessed from the URL: text after the last '.', cut at '?',
/// at most 4 chars. "…/jane.jpeg?v=3" → "jpeg".
pub fn url_extension(url: &str) -> String {
    let tail = url.rsplit('.').next().unwrap_or("");
    let tail = tail.split('?').next().unwrap_or("");
    tail.chars().take(4).collect()
}

/// URL extension when it looks like one, else whatever the bytes say.
pub fn photo_extension(url: &str, bytes: &[u8]) -> String {
    let ext = url_extension(url);
    if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return ext;
    }
    image::guess_format(bytes)
        .ok()
        .and_then(|f| f.extensions_str().first().copied())
        .map(|e| s!(e))
        .unwrap_or_else(|| s!("img"))
}

pub fn wants_photo(rec: &OfficerRecord, export: &ExportOptions) -> bool {
    !rec.email.is_empty()
        && !rec.photo.is_empty()
        && !rec.default_photo
        && !export.is_placeholder(&rec.photo)
}

/// Recreate `dir` and save `<email>.<ext>` for every officer with a real photo.
/// Download failures are logged and counted, never fatal.
pub fn download_photos(
    records: &[OfficerRecord],
    dir: &Path,
    export: &ExportOptions,
    fetcher: &dyn ImageFetcher,
) -> Result<PhotoReport> {
    recreate_dir(dir)?;
    let mut report = PhotoReport::default();

    for rec in records {
        if !wants_photo(rec, export) {
            report.skipped += 1;
            continue;
        }

        let bytes = match fetcher.fetch(&rec.photo) {
            Ok(b) => b,
            Err(e) => {
                warn!("Error downloading {}: {e}", rec.photo);
                report.failed += 1;
                continue;
            }
        };

        let ext = photo_extension(&rec.photo, &bytes);
        let path = dir.join(format!("{}.{}", sanitize_file_stem(&rec.email), ext));
        write_bytes(&path, &bytes)?;
        debug!("Saved {}", path.display());
        report.saved.push(path);
    }

    info!(
        "Photos: {} saved, {} skipped, {} failed",
        report.saved.len(),
        report.skipped,
        report.failed
    );
    Ok(report)
}
