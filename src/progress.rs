// src/progress.rs
use tracing::{info, warn};

/// Lightweight progress reporting for the page loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to visit.
    fn begin(&mut self, _total: usize) {}

    /// A page was fetched and its roster is present.
    fn item_done(&mut self, _url: &str) {}

    /// A page was skipped; the run goes on.
    fn item_failed(&mut self, _url: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Reports through `tracing`, numbering pages as it goes.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    seen: usize,
    failed: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        info!("Scraping officer info from {total} club pages…");
    }

    fn item_done(&mut self, url: &str) {
        self.seen += 1;
        info!("[{}/{}] {url}", self.seen, self.total);
    }

    fn item_failed(&mut self, url: &str, reason: &str) {
        self.seen += 1;
        self.failed += 1;
        warn!("[{}/{}] skipped {url}: {reason}", self.seen, self.total);
    }

    fn finish(&mut self) {
        info!("Pages done: {} ok, {} skipped", self.seen - self.failed, self.failed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_progress_counts_skips() {
        let mut p = LogProgress::default();
        p.begin(3);
        p.item_done("a");
        p.item_failed("b", "no roster");
        p.item_done("c");
        p.finish();
        assert_eq!((p.total, p.seen, p.failed), (3, 3, 1));
    }
}
