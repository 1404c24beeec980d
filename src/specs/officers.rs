// src/specs/officers.rs
// Organization page, "Officers" tab.
//
//   div.feed__top-title__name span   → organization name
//   div.feed__top-title__img img     → organization logo
//   li.list-group-item               → one officer each:
//       h2.media-heading             → name
//       a[href^=mailto]              → email
//       strong                       → role
//       img.img-user                 → photo

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::consts::{DEFAULT_IMAGE_PATH, NAME_PLACEHOLDER, UNKNOWN_CLUB};
use crate::core::html::{absolutize, element_text, select_first, selector, with_tab};
use crate::error::Result;
use crate::roster::{OfficerRecord, Organization};

pub const ROSTER_ITEM: &str = "li.list-group-item";

/// Everything read off one organization page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfficerPage {
    pub organization: Organization,
    pub officers: Vec<OfficerRecord>,
}

pub struct OfficerPageSpec {
    base: Url,
    default_image: String,
    roster_item: Selector,
    name: Selector,
    email: Selector,
    role: Selector,
    photo: Selector,
    club_name: Selector,
    club_logo: Selector,
}

impl OfficerPageSpec {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;
        let default_image = absolutize(DEFAULT_IMAGE_PATH, &base);
        Ok(Self {
            base,
            default_image,
            roster_item: selector(ROSTER_ITEM)?,
            name: selector("h2.media-heading")?,
            email: selector("a[href^=mailto]")?,
            role: selector("strong")?,
            photo: selector("img.img-user")?,
            club_name: selector("div.feed__top-title__name span")?,
            club_logo: selector("div.feed__top-title__img img")?,
        })
    }

    /// True once the officer list has rendered.
    pub fn has_roster(&self, html: &str) -> bool {
        Html::parse_document(html).select(&self.roster_item).next().is_some()
    }

    /// Parse a rendered page. `current_url` is where the browser sits; the
    /// organization link points at the same page's "about" tab.
    pub fn extract(&self, html: &str, current_url: &str) -> OfficerPage {
        let doc = Html::parse_document(html);
        let root = doc.root_element();

        let name = select_first(root, &self.club_name)
            .map(element_text)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| s!(UNKNOWN_CLUB));

        let logo = select_first(root, &self.club_logo)
            .and_then(|img| img.value().attr("src"))
            .map(|src| absolutize(src.trim(), &self.base))
            .unwrap_or_default();

        let organization = Organization { name, logo, page_url: with_tab(current_url, "about") };

        let officers = doc
            .select(&self.roster_item)
            .filter_map(|li| self.read_officer(li, &organization))
            .collect();

        OfficerPage { organization, officers }
    }

    fn read_officer(&self, li: ElementRef<'_>, org: &Organization) -> Option<OfficerRecord> {
        let name = select_first(li, &self.name).map(element_text).filter(|s| !s.is_empty())?;
        if name.contains(NAME_PLACEHOLDER) {
            return None;
        }

        let email = select_first(li, &self.email)
            .and_then(|a| a.value().attr("href"))
            .map(|href| s!(href.trim().trim_start_matches("mailto:").trim()))
            .filter(|s| !s.is_empty())?;

        let role = select_first(li, &self.role).map(element_text).filter(|s| !s.is_empty())?;

        let photo = select_first(li, &self.photo)
            .and_then(|img| img.value().attr("src"))
            .map(str::trim)
            .filter(|src| !src.is_empty());

        let (photo, default_photo) = match photo {
            Some(src) => (absolutize(src, &self.base), false),
            None => (self.default_image.clone(), true),
        };

        Some(OfficerRecord {
            organization: org.name.clone(),
            logo: org.logo.clone(),
            org_url: org.page_url.clone(),
            name,
            email,
            role,
            photo,
            default_photo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://bullsconnect.usf.edu";
    const URL: &str = "https://bullsconnect.usf.edu/feeds?type=club&type_id=58067&tab=officers";

    fn spec() -> OfficerPageSpec { OfficerPageSpec::new(BASE).unwrap() }

    fn item(body: &str) -> String {
        format!(r#"<ul><li class="list-group-item">{body}</li></ul>"#)
    }

    #[test]
    fn email_prefix_is_stripped() {
        let html = item(r#"<h2 class="media-heading">Ada Lovelace</h2>
            <strong>Secretary</strong><a href="mailto:ada@usf.edu">Email</a>"#);
        let page = spec().extract(&html, URL);
        assert_eq!(page.officers.len(), 1);
        assert_eq!(page.officers[0].email, "ada@usf.edu");
    }

    #[test]
    fn name_whitespace_is_collapsed() {
        let html = item(r#"<h2 class="media-heading">
                Ada
                <span>Lovelace</span>
            </h2><strong>Advisor</strong><a href="mailto:ada@usf.edu">x</a>"#);
        let page = spec().extract(&html, URL);
        assert_eq!(page.officers[0].name, "Ada Lovelace");
    }

    #[test]
    fn template_placeholder_rows_are_dropped() {
        let html = item(r#"<h2 class="media-heading">[firstName] [lastName]</h2>
            <strong>President</strong><a href="mailto:x@usf.edu">x</a>"#);
        assert!(spec().extract(&html, URL).officers.is_empty());
    }

    #[test]
    fn blank_fields_count_as_missing() {
        let html = item(r#"<h2 class="media-heading">  </h2>
            <strong>President</strong><a href="mailto:x@usf.edu">x</a>"#);
        assert!(spec().extract(&html, URL).officers.is_empty());

        let html = item(r#"<h2 class="media-heading">A B</h2>
            <strong>President</strong><a href="mailto:">x</a>"#);
        assert!(spec().extract(&html, URL).officers.is_empty());
    }

    #[test]
    fn has_roster_detects_list_items() {
        assert!(spec().has_roster(&item("")));
        assert!(!spec().has_roster("<div class='feed'>loading…</div>"));
    }

    #[test]
    fn organization_link_points_at_about_tab() {
        let page = spec().extract("<html></html>", URL);
        assert_eq!(page.organization.page_url, URL.replace("tab=officers", "tab=about"));
        assert_eq!(page.organization.name, UNKNOWN_CLUB);
        assert_eq!(page.organization.logo, "");
    }
}
