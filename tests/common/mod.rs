// tests/common/mod.rs
//
// Synthetic portal pages and offline stand-ins for the browser and HTTP.
//
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use club_roster::browser::PageDriver;
use club_roster::core::net::ImageFetcher;
use club_roster::{Error, Result};

pub const BASE: &str = "https://bullsconnect.usf.edu";

pub fn club_url(id: u32) -> String {
    format!("{BASE}/feeds?type=club&type_id={id}&tab=officers")
}

pub struct Officer<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub role: Option<&'a str>,
    pub photo: Option<&'a str>,
}

pub fn officer<'a>(name: &'a str, email: &'a str, role: &'a str, photo: Option<&'a str>) -> Officer<'a> {
    Officer { name: Some(name), email: Some(email), role: Some(role), photo }
}

fn officer_li(o: &Officer) -> String {
    let mut li = String::from(r#"<li class="list-group-item"><div class="media">"#);
    if let Some(p) = o.photo {
        li.push_str(&format!(r#"<img class="img-user" src="{p}">"#));
    }
    if let Some(n) = o.name {
        li.push_str(&format!(r#"<h2 class="media-heading">{n}</h2>"#));
    }
    if let Some(r) = o.role {
        li.push_str(&format!("<p><strong>{r}</strong></p>"));
    }
    if let Some(e) = o.email {
        li.push_str(&format!(r#"<a href="mailto:{e}">Send email</a>"#));
    }
    li.push_str("</div></li>");
    li
}

/// A rendered "Officers" tab.
pub fn club_page(name: &str, logo: Option<&str>, officers: &[Officer]) -> String {
    let logo = logo
        .map(|src| format!(r#"<div class="feed__top-title__img"><img src="{src}"></div>"#))
        .unwrap_or_default();
    let items: String = officers.iter().map(officer_li).collect();
    format!(
        r#"<html><body>
        <div class="feed__top-title">{logo}
          <div class="feed__top-title__name"><span>{name}</span></div>
        </div>
        <ul class="list-group">{items}</ul>
        </body></html>"#
    )
}

/// Same club, but still showing another tab.
pub fn club_page_without_roster(name: &str) -> String {
    format!(
        r#"<html><body>
        <div class="feed__top-title__name"><span>{name}</span></div>
        <div class="feed-posts">No posts yet</div>
        </body></html>"#
    )
}

/// Pages keyed by URL. `after_script` holds what a page shows once the tab
/// script ran; pages without an entry make the script fail.
#[derive(Default)]
pub struct FakeDriver {
    pub pages: HashMap<String, String>,
    pub after_script: HashMap<String, String>,
    pub scripts: Vec<String>,
    pub waits: Vec<u64>,
    current: String,
    html: String,
}

impl FakeDriver {
    pub fn with_page(mut self, url: String, html: String) -> Self {
        self.pages.insert(url, html);
        self
    }

    pub fn with_script_result(mut self, url: String, html: String) -> Self {
        self.after_script.insert(url, html);
        self
    }
}

impl PageDriver for FakeDriver {
    fn navigate(&mut self, url: &str) -> Result<()> {
        let html = self
            .pages
            .get(url)
            .ok_or_else(|| Error::browser(format!("no page for {url}")))?;
        self.current = url.to_string();
        self.html = html.clone();
        Ok(())
    }

    fn page_source(&mut self) -> Result<String> {
        Ok(self.html.clone())
    }

    fn current_url(&mut self) -> Result<String> {
        Ok(self.current.clone())
    }

    fn execute_script(&mut self, script: &str) -> Result<()> {
        self.scripts.push(script.to_string());
        match self.after_script.get(&self.current) {
            Some(html) => {
                self.html = html.clone();
                Ok(())
            }
            None => Err(Error::browser("clickFeedTopTab is not defined")),
        }
    }

    fn wait(&mut self, ms: u64) {
        self.waits.push(ms);
    }
}

/// Serves bytes derived from the URL; URLs containing "missing" fail with 404.
#[derive(Default)]
pub struct FakeFetcher {
    pub requested: RefCell<Vec<String>>,
}

impl ImageFetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.requested.borrow_mut().push(url.to_string());
        if url.contains("missing") {
            return Err(Error::Status { status: 404, url: url.to_string() });
        }
        Ok(format!("image bytes for {url}").into_bytes())
    }
}
