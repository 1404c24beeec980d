// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::{info, warn};

use crate::{
    browser::{PageDriver, SnapshotDriver},
    config::options::AppOptions,
    core::net::{HttpFetcher, ImageFetcher},
    error::{Error, Result},
    progress::LogProgress,
    runner::{self, RunSummary},
};

/// Scrape BullsConnect officer rosters into officers.html + club_contacts.csv.
#[derive(Debug, Parser)]
#[command(name = "club_roster", version, about)]
pub struct Args {
    /// TOML file with [scrape] / [export] overrides.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Organization id to scrape (repeatable). Replaces the configured list.
    #[arg(short = 'c', long = "club", value_name = "ID")]
    pub clubs: Vec<u32>,

    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Directory for the CSV, the HTML page and the photo folder.
    #[arg(short = 'o', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Replay saved pages (<DIR>/<type_id>.html) instead of driving Chrome.
    #[arg(long, value_name = "DIR")]
    pub snapshots: Option<PathBuf>,

    /// Prefix for the board-wide labels.
    #[arg(long)]
    pub board: Option<String>,

    /// Don't wait for a manual login before scraping.
    #[arg(long)]
    pub no_login: bool,

    /// Don't open the generated page.
    #[arg(long)]
    pub no_open: bool,

    /// Skip the photo folder.
    #[arg(long)]
    pub no_photos: bool,

    /// More console output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Defaults, then the config file, then flags.
    pub fn to_options(&self) -> Result<AppOptions> {
        let mut opts = match &self.config {
            Some(path) => AppOptions::load(path)?,
            None => AppOptions::default(),
        };

        if !self.clubs.is_empty() { opts.scrape.club_ids = self.clubs.clone(); }
        if let Some(v) = &self.base_url { opts.scrape.base_url = v.clone(); }
        if let Some(v) = &self.snapshots { opts.scrape.snapshots = Some(v.clone()); }
        if self.no_login { opts.scrape.login = false; }

        if let Some(v) = &self.out_dir { opts.export.out_dir = v.clone(); }
        if let Some(v) = &self.board { opts.export.board = v.clone(); }
        if self.no_open { opts.export.open_page = false; }
        if self.no_photos { opts.export.download_photos = false; }

        Ok(opts)
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);
    let opts = args.to_options()?;

    let mut driver = open_driver(&opts)?;
    if opts.scrape.login && opts.scrape.snapshots.is_none() {
        wait_for_login(driver.as_mut(), &opts)?;
    }

    let fetcher = HttpFetcher::new(opts.export.http_timeout_secs)?;
    let mut progress = LogProgress::default();
    let summary = runner::run(&opts, driver, Some(&fetcher as &dyn ImageFetcher), Some(&mut progress))?;

    print_summary(&summary, &opts);

    if opts.export.open_page {
        if let Err(e) = open::that(&summary.html) {
            warn!("Could not open {}: {e}", summary.html.display());
        }
    }
    Ok(())
}

fn open_driver(opts: &AppOptions) -> Result<Box<dyn PageDriver>> {
    if let Some(dir) = &opts.scrape.snapshots {
        info!("Replaying saved pages from {}", dir.display());
        return Ok(Box::new(SnapshotDriver::new(dir)));
    }
    live_driver()
}

#[cfg(feature = "browser")]
fn live_driver() -> Result<Box<dyn PageDriver>> {
    Ok(Box::new(crate::browser::ChromeDriver::launch()?))
}

#[cfg(not(feature = "browser"))]
fn live_driver() -> Result<Box<dyn PageDriver>> {
    Err(Error::browser("built without the `browser` feature; use --snapshots"))
}

/// Open the portal and block until the user confirms the login went through.
fn wait_for_login(driver: &mut dyn PageDriver, opts: &AppOptions) -> Result<()> {
    let home = opts.scrape.portal_home();
    println!("Opening {home}\n");
    driver.navigate(&home)?;

    print!("After login completes, press ENTER here to continue...");
    io::stdout().flush()?;
    let mut line = s!();
    io::stdin().lock().read_line(&mut line).map_err(Error::from)?;
    Ok(())
}

fn print_summary(summary: &RunSummary, opts: &AppOptions) {
    println!();
    println!(
        "Scraped {} of {} club pages ({} skipped), {} officers",
        summary.pages_scraped,
        summary.pages_requested,
        summary.pages_skipped(),
        summary.officers
    );
    println!("Wrote {}", summary.html.display());
    match &summary.csv {
        Some(p) => println!("Wrote {}", p.display()),
        None => println!(
            "ERROR: could not write {}; close it and run again",
            opts.export.csv_path().display()
        ),
    }
    if let Some(photos) = &summary.photos {
        println!(
            "Saved {} photos to {} ({} failed)",
            photos.saved.len(),
            opts.export.photos_path().display(),
            photos.failed
        );
    }
    println!("\nUse the Download CSV button on the page to import the contacts into Google Contacts.");
}
