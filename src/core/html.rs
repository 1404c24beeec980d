// src/core/html.rs
// Small helpers shared by the page specs and the renderers.

use scraper::{ElementRef, Selector};
use url::Url;

use super::sanitize::normalize_ws;
use crate::error::{Error, Result};

/// Parse a CSS selector, keeping the offending text in the error.
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(s!(css)))
}

/// Visible text of an element with whitespace collapsed.
pub fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// First descendant of `el` matching `sel`.
pub fn select_first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// Resolve a root-relative path (`/images/x.png`) against `base`.
/// Anything else, absolute URLs included, is returned unchanged.
pub fn absolutize(src: &str, base: &Url) -> String {
    if !src.starts_with('/') {
        return s!(src);
    }
    match base.join(src) {
        Ok(u) => u.into(),
        Err(_) => join!(base.as_str().trim_end_matches('/'), src),
    }
}

/// Value of a query parameter, e.g. `type_id` in `/feeds?type=club&type_id=58067`.
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// Rewrite the `tab` query parameter (officers → about). Other pairs keep
/// their order. URLs that fail to parse, or carry no `tab`, come back as-is.
pub fn with_tab(url: &str, tab: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else { return s!(url) };
    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if !pairs.iter().any(|(k, _)| k == "tab") {
        return s!(url);
    }
    parsed.query_pairs_mut().clear().extend_pairs(
        pairs.iter().map(|(k, v)| (k.as_str(), if k == "tab" { tab } else { v.as_str() })),
    );
    parsed.into()
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
