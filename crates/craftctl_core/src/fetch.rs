//! Remote fetching.
//!
//! Version resolution, server downloads and remote icons all go through the
//! [`Fetch`] trait so they can run against an in-memory source in tests.

use std::io::Write;

use crate::error::{CraftError, Result};

/// A blocking source of remote documents.
pub trait Fetch {
    /// Fetch the full body at `url`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;

    /// Stream the body at `url` into `writer`, returning the bytes written.
    fn download_to(&self, url: &str, writer: &mut dyn Write) -> Result<u64> {
        let body = self.fetch(url)?;
        writer
            .write_all(&body)
            .map_err(|e| CraftError::download(url, e))?;
        Ok(body.len() as u64)
    }
}

/// [`Fetch`] over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    /// Build a client that identifies itself with `user_agent`.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            // No timeout at all; the blocking client otherwise gives up after 30s.
            .timeout(None)
            .build()
            .map_err(|e| CraftError::download("<client>", e))?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        tracing::debug!("GET {url}");
        self.client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| CraftError::download(url, e))
    }
}

impl Fetch for HttpClient {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let body = self
            .get(url)?
            .bytes()
            .map_err(|e| CraftError::download(url, e))?;
        Ok(body.to_vec())
    }

    fn download_to(&self, url: &str, writer: &mut dyn Write) -> Result<u64> {
        let mut response = self.get(url)?;
        std::io::copy(&mut response, writer).map_err(|e| CraftError::download(url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_without_timeouts() {
        assert!(HttpClient::new("craftctl-test").is_ok());
    }
}
