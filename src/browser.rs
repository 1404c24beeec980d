// src/browser.rs
//! Page drivers: where rendered HTML comes from.
//!
//! The portal renders the officer list client-side and sits behind a login, so
//! the live driver is a real (visible) Chrome session. `SnapshotDriver` replays
//! saved pages from disk for offline runs and fixtures.

use std::{fs, path::PathBuf, thread, time::Duration};

use crate::core::html::query_param;
use crate::error::{Error, Result};

pub trait PageDriver {
    fn navigate(&mut self, url: &str) -> Result<()>;

    /// Rendered markup of the current page.
    fn page_source(&mut self) -> Result<String>;

    /// URL the browser ended up on (after redirects / client-side routing).
    fn current_url(&mut self) -> Result<String>;

    /// Run a snippet of JavaScript in the page. The result is ignored.
    fn execute_script(&mut self, script: &str) -> Result<()>;

    /// Fixed pause for client-side rendering.
    fn wait(&mut self, ms: u64) {
        if ms > 0 {
            thread::sleep(Duration::from_millis(ms));
        }
    }
}

// Lets callers hand over either an owned driver or a borrow of one.
impl<D: PageDriver + ?Sized> PageDriver for &mut D {
    fn navigate(&mut self, url: &str) -> Result<()> { (**self).navigate(url) }
    fn page_source(&mut self) -> Result<String> { (**self).page_source() }
    fn current_url(&mut self) -> Result<String> { (**self).current_url() }
    fn execute_script(&mut self, script: &str) -> Result<()> { (**self).execute_script(script) }
    fn wait(&mut self, ms: u64) { (**self).wait(ms) }
}

impl<D: PageDriver + ?Sized> PageDriver for Box<D> {
    fn navigate(&mut self, url: &str) -> Result<()> { (**self).navigate(url) }
    fn page_source(&mut self) -> Result<String> { (**self).page_source() }
    fn current_url(&mut self) -> Result<String> { (**self).current_url() }
    fn execute_script(&mut self, script: &str) -> Result<()> { (**self).execute_script(script) }
    fn wait(&mut self, ms: u64) { (**self).wait(ms) }
}

/* ---------------- Live browser ---------------- */

#[cfg(feature = "browser")]
pub use chrome::ChromeDriver;

#[cfg(feature = "browser")]
mod chrome {
    use std::{sync::Arc, time::Duration};

    use headless_chrome::{Browser, LaunchOptions, Tab};
    use tracing::debug;

    use super::PageDriver;
    use crate::error::{Error, Result};

    // Long enough to sit through a manual SSO login without the browser
    // being reaped as idle.
    const IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

    pub struct ChromeDriver {
        // Owns the process; the tab dies with it.
        _browser: Browser,
        tab: Arc<Tab>,
    }

    impl ChromeDriver {
        pub fn launch() -> Result<Self> {
            let opts = LaunchOptions::default_builder()
                .headless(false)
                .idle_browser_timeout(IDLE_TIMEOUT)
                .build()
                .map_err(Error::browser)?;
            let browser = Browser::new(opts).map_err(Error::browser)?;
            let tab = browser.new_tab().map_err(Error::browser)?;
            debug!("Chrome launched");
            Ok(Self { _browser: browser, tab })
        }
    }

    impl PageDriver for ChromeDriver {
        fn navigate(&mut self, url: &str) -> Result<()> {
            self.tab
                .navigate_to(url)
                .map_err(Error::browser)?
                .wait_until_navigated()
                .map_err(Error::browser)?;
            Ok(())
        }

        fn page_source(&mut self) -> Result<String> {
            self.tab.get_content().map_err(Error::browser)
        }

        fn current_url(&mut self) -> Result<String> {
            Ok(self.tab.get_url())
        }

        fn execute_script(&mut self, script: &str) -> Result<()> {
            self.tab.evaluate(script, false).map_err(Error::browser)?;
            Ok(())
        }
    }
}

/* ---------------- Saved pages ---------------- */

/// Serves `<dir>/<type_id>.html` for each requested organization URL.
/// Scripts cannot run here, so the tab fallback always fails.
pub struct SnapshotDriver {
    dir: PathBuf,
    current: Option<(String, String)>, // (url, html)
}

impl SnapshotDriver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), current: None }
    }

    fn loaded(&self) -> Result<&(String, String)> {
        self.current
            .as_ref()
            .ok_or_else(|| Error::browser("no page loaded"))
    }
}

impl PageDriver for SnapshotDriver {
    fn navigate(&mut self, url: &str) -> Result<()> {
        let id = query_param(url, "type_id")
            .ok_or_else(|| Error::browser(format!("no type_id in {url}")))?;
        let path = self.dir.join(join!(&id, ".html"));
        let html = fs::read_to_string(&path)
            .map_err(|e| Error::browser(format!("{}: {e}", path.display())))?;
        self.current = Some((s!(url), html));
        Ok(())
    }

    fn page_source(&mut self) -> Result<String> {
        Ok(self.loaded()?.1.clone())
    }

    fn current_url(&mut self) -> Result<String> {
        Ok(self.loaded()?.0.clone())
    }

    fn execute_script(&mut self, _script: &str) -> Result<()> {
        Err(Error::browser("scripts are not supported when replaying snapshots"))
    }

    fn wait(&mut self, _ms: u64) {}
}
