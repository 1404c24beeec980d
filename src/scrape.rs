// src/scrape.rs
// Page loop: load each organization page, make sure the Officers tab is
// showing, hand back the rendered HTML. Sequential; no retries beyond the
// single scripted tab click.

use tracing::{debug, info, warn};

use crate::{
    browser::PageDriver,
    config::options::ScrapeOptions,
    core::html::query_param,
    error::Result,
    progress::Progress,
    specs::officers::OfficerPageSpec,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedPage {
    /// URL we asked for.
    pub url: String,
    /// URL the browser reported afterwards.
    pub current_url: String,
    pub html: String,
}

#[derive(Debug)]
pub enum PageOutcome {
    Ready(FetchedPage),
    Skipped(String),
}

/// Script the portal itself runs when the Officers tab is clicked.
pub fn tab_script(type_id: &str) -> String {
    format!("clickFeedTopTab({type_id}, 'officers')")
}

/// Load one page. Missing roster (after the fallback) or a failing fallback
/// is a `Skipped` outcome; driver errors while loading are returned as `Err`.
pub fn fetch_page(
    driver: &mut dyn PageDriver,
    spec: &OfficerPageSpec,
    url: &str,
    opts: &ScrapeOptions,
) -> Result<PageOutcome> {
    driver.navigate(url)?;
    driver.wait(opts.render_wait_ms);
    let mut html = driver.page_source()?;

    if !spec.has_roster(&html) {
        let Some(type_id) = query_param(url, "type_id").filter(|id| id.bytes().all(|b| b.is_ascii_digit()))
        else {
            return Ok(PageOutcome::Skipped(s!("no numeric type_id to switch tabs with")));
        };

        info!("Attempting to switch to the Officers tab via script ({type_id})");
        if let Err(e) = driver.execute_script(&tab_script(&type_id)) {
            return Ok(PageOutcome::Skipped(format!("could not switch to Officers tab: {e}")));
        }
        driver.wait(opts.tab_wait_ms);
        html = driver.page_source()?;

        if !spec.has_roster(&html) {
            return Ok(PageOutcome::Skipped(s!("officer list still missing after tab switch")));
        }
    }

    let current_url = driver.current_url()?;
    debug!("Fetched {url} ({} bytes, now at {current_url})", html.len());
    Ok(PageOutcome::Ready(FetchedPage { url: s!(url), current_url, html }))
}

/// Visit every URL in order, skipping pages whose roster never shows up.
pub fn collect_pages(
    driver: &mut dyn PageDriver,
    spec: &OfficerPageSpec,
    urls: &[String],
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<FetchedPage>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(urls.len());
    }

    let mut pages = Vec::with_capacity(urls.len());
    for url in urls {
        match fetch_page(driver, spec, url, opts)? {
            PageOutcome::Ready(page) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(url);
                }
                pages.push(page);
            }
            PageOutcome::Skipped(reason) => {
                match progress.as_deref_mut() {
                    Some(p) => p.item_failed(url, &reason),
                    None => warn!("Skipping {url}: {reason}"),
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(pages)
}
