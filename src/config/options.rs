// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub club_ids: Vec<u32>,
    pub render_wait_ms: u64,
    pub tab_wait_ms: u64,
    /// Block on a console prompt after opening the portal so the user can log in.
    pub login: bool,
    /// Replay saved pages from this directory instead of driving a browser.
    pub snapshots: Option<PathBuf>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            club_ids: DEFAULT_CLUB_IDS.to_vec(),
            render_wait_ms: RENDER_WAIT_MS,
            tab_wait_ms: TAB_WAIT_MS,
            login: true,
            snapshots: None,
        }
    }
}

impl ScrapeOptions {
    /// Officers-tab URL for one organization id.
    pub fn club_url(&self, id: u32) -> String {
        format!("{}/feeds?type=club&type_id={}&tab=officers", self.base(), id)
    }

    pub fn club_urls(&self) -> Vec<String> {
        self.club_ids.iter().map(|&id| self.club_url(id)).collect()
    }

    pub fn portal_home(&self) -> String {
        join!(self.base(), "/")
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub csv_file: String,
    pub html_file: String,
    pub photos_dir: String,
    /// Prefix of the board-wide contact labels ("ES Officers", "ES Treasurers", …).
    pub board: String,
    pub placeholder_fragments: Vec<String>,
    pub download_photos: bool,
    pub http_timeout_secs: u64,
    pub open_page: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            csv_file: s!(CSV_FILE),
            html_file: s!(HTML_FILE),
            photos_dir: s!(PHOTOS_DIR),
            board: s!(BOARD_PREFIX),
            placeholder_fragments: PLACEHOLDER_FRAGMENTS.iter().map(|f| s!(*f)).collect(),
            download_photos: true,
            http_timeout_secs: HTTP_TIMEOUT_SECS,
            open_page: true,
        }
    }
}

impl ExportOptions {
    pub fn csv_path(&self) -> PathBuf { self.out_dir.join(&self.csv_file) }
    pub fn html_path(&self) -> PathBuf { self.out_dir.join(&self.html_file) }
    pub fn photos_path(&self) -> PathBuf { self.out_dir.join(&self.photos_dir) }

    pub fn is_placeholder(&self, photo_url: &str) -> bool {
        self.placeholder_fragments.iter().any(|f| photo_url.contains(f.as_str()))
    }
}

/* ---------------- TOML config file ---------------- */

// Every key is optional; whatever is present overrides the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    scrape: ScrapeSection,
    export: ExportSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ScrapeSection {
    base_url: Option<String>,
    club_ids: Option<Vec<u32>>,
    render_wait_ms: Option<u64>,
    tab_wait_ms: Option<u64>,
    login: Option<bool>,
    snapshots: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ExportSection {
    out_dir: Option<PathBuf>,
    csv_file: Option<String>,
    html_file: Option<String>,
    photos_dir: Option<String>,
    board: Option<String>,
    placeholder_fragments: Option<Vec<String>>,
    download_photos: Option<bool>,
    http_timeout_secs: Option<u64>,
    open_page: Option<bool>,
}

impl AppOptions {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// Parse a TOML document on top of the defaults. `origin` only labels errors.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(text).map_err(|e| Error::Config {
            path: s!(origin),
            message: e.to_string(),
        })?;

        let mut opts = AppOptions::default();
        let (s, e) = (file.scrape, file.export);

        if let Some(v) = s.base_url { opts.scrape.base_url = v; }
        if let Some(v) = s.club_ids { opts.scrape.club_ids = v; }
        if let Some(v) = s.render_wait_ms { opts.scrape.render_wait_ms = v; }
        if let Some(v) = s.tab_wait_ms { opts.scrape.tab_wait_ms = v; }
        if let Some(v) = s.login { opts.scrape.login = v; }
        if s.snapshots.is_some() { opts.scrape.snapshots = s.snapshots; }

        if let Some(v) = e.out_dir { opts.export.out_dir = v; }
        if let Some(v) = e.csv_file { opts.export.csv_file = v; }
        if let Some(v) = e.html_file { opts.export.html_file = v; }
        if let Some(v) = e.photos_dir { opts.export.photos_dir = v; }
        if let Some(v) = e.board { opts.export.board = v; }
        if let Some(v) = e.placeholder_fragments { opts.export.placeholder_fragments = v; }
        if let Some(v) = e.download_photos { opts.export.download_photos = v; }
        if let Some(v) = e.http_timeout_secs { opts.export.http_timeout_secs = v; }
        if let Some(v) = e.open_page { opts.export.open_page = v; }

        Ok(opts)
    }
}
