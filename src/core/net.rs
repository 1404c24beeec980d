// src/core/net.rs
// Blocking HTTP for photo downloads. One request per call, no retries.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::error::{Error, Result};

/// Fetch raw bytes for a URL. Seam for the photo stage so tests can run offline.
pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("club_roster/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl ImageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        // Only a plain 200 counts; redirects are already followed by reqwest.
        if status != StatusCode::OK {
            return Err(Error::Status { status: status.as_u16(), url: s!(url) });
        }
        Ok(resp.bytes()?.to_vec())
    }
}
