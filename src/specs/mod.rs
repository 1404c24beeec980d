// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific scraping specifications for the portal. Each spec knows
//! *where the ground truth lives in the rendered HTML* and how to read it.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-rendered markup (the browser layer hands
//!   us a string; specs never navigate).
//! - **Selector choice** and the small normalizations the portal needs
//!   (root-relative URLs, `mailto:` prefixes, template placeholders).
//! - **Light shaping** into `roster::OfficerRecord`s.
//!
//! ## What does **not** live here
//! - Navigation, waits or the tab fallback (`scrape`).
//! - Grouping, sorting or labels (`roster`).
//! - Output formatting (`csv`, `html`, `photos`).
//!
//! ## Conventions
//! - Entries missing a required field are dropped silently; a page with no
//!   usable entries still yields its organization.
//! - Specs are testable offline against synthetic or saved pages.
pub mod officers;
