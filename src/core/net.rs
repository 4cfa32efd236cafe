// src/core/net.rs
// Blocking HTTPS GET for conjugation pages.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{BASE_URL, USER_AGENT};
use crate::error::{BatchError, FetchError};

/// Source of raw page markup. The batch driver only sees this trait,
/// which keeps it testable without a network.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, BatchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(BatchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: url.to_string() });
        }
        Ok(resp.text()?)
    }
}

/// Conjugation page for `verb`. Everything outside the unreserved set is percent-encoded,
/// including `'` and `/`.
pub fn conjugation_url(verb: &str) -> String {
    format!("{BASE_URL}{}", urlencoding::encode(verb))
}
