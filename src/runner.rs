// src/runner.rs
// Fetch → extract → organize → render, strictly in that order.

use std::path::PathBuf;

use tracing::info;

use crate::{
    browser::PageDriver,
    config::options::AppOptions,
    core::net::ImageFetcher,
    csv::contacts_csv,
    error::Result,
    file::{ensure_directory, write_csv_tolerant, write_text},
    html::render_page,
    photos::{download_photos, PhotoReport},
    progress::Progress,
    roster::{LabelScheme, OfficerRecord, Roster},
    scrape::collect_pages,
    specs::officers::{OfficerPage, OfficerPageSpec},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub pages_requested: usize,
    pub pages_scraped: usize,
    pub officers: usize,
    /// `None` when the CSV target was locked.
    pub csv: Option<PathBuf>,
    pub html: PathBuf,
    pub photos: Option<PhotoReport>,
}

impl RunSummary {
    pub fn pages_skipped(&self) -> usize {
        self.pages_requested.saturating_sub(self.pages_scraped)
    }
}

/// Visit every configured club page and parse what rendered.
pub fn scrape_all(
    opts: &AppOptions,
    driver: &mut dyn PageDriver,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<OfficerPage>> {
    let spec = OfficerPageSpec::new(&opts.scrape.base_url)?;
    let urls = opts.scrape.club_urls();
    let fetched = collect_pages(driver, &spec, &urls, &opts.scrape, progress)?;

    Ok(fetched
        .iter()
        .map(|page| spec.extract(&page.html, &page.current_url))
        .collect())
}

/// Write the photo folder, the CSV and the HTML page for already-parsed pages.
/// Photos are skipped when `fetcher` is `None`.
pub fn export(
    opts: &AppOptions,
    pages: &[OfficerPage],
    fetcher: Option<&dyn ImageFetcher>,
) -> Result<RunSummary> {
    let export = &opts.export;
    ensure_directory(&export.out_dir)?;

    // Encounter order; the CSV keeps it, the page sorts by role.
    let records: Vec<OfficerRecord> = pages.iter().flat_map(|p| p.officers.iter().cloned()).collect();

    let photos = match fetcher {
        Some(f) if export.download_photos => Some(download_photos(&records, &export.photos_path(), export, f)?),
        _ => None,
    };

    let mut roster = Roster::new();
    for page in pages {
        roster.register(&page.organization);
        for rec in &page.officers {
            roster.add(rec.clone());
        }
    }
    roster.sort();

    let labels = LabelScheme::new(&export.board);
    let csv = contacts_csv(&records, &labels)?;
    let csv_path = write_csv_tolerant(&export.csv_path(), &csv)?;

    let html = render_page(&roster, &csv, &export.csv_file);
    let html_path = write_text(&export.html_path(), &html)?;

    info!(
        "Wrote {} officers from {} organizations",
        roster.officer_count(),
        roster.groups().len()
    );

    Ok(RunSummary {
        pages_requested: pages.len(),
        pages_scraped: pages.len(),
        officers: records.len(),
        csv: csv_path,
        html: html_path,
        photos,
    })
}

/// Whole pipeline against an already-prepared driver (logged in, or offline).
/// The driver is dropped as soon as the pages are in, so a live browser is
/// closed before the photo downloads start. Pass `&mut driver` to keep it.
pub fn run<D: PageDriver>(
    opts: &AppOptions,
    mut driver: D,
    fetcher: Option<&dyn ImageFetcher>,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let pages = scrape_all(opts, &mut driver, progress)?;
    drop(driver);

    let mut summary = export(opts, &pages, fetcher)?;
    summary.pages_requested = opts.scrape.club_ids.len();
    Ok(summary)
}
