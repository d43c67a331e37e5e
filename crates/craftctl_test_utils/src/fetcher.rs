//! In-memory fetcher.

use std::cell::RefCell;
use std::collections::HashMap;

use craftctl_core::error::{CraftError, Result};
use craftctl_core::fetch::Fetch;

/// Serves fixed bodies by URL and records every request.
///
/// Unknown URLs fail with [`CraftError::Download`], like a 404 would.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    bodies: HashMap<String, Vec<u8>>,
    requests: RefCell<Vec<String>>,
}

impl MemoryFetcher {
    /// Empty fetcher; every request fails.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` at `url`.
    #[must_use]
    pub fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.insert(url, body);
        self
    }

    /// Serve `body` at `url`.
    pub fn insert(&mut self, url: &str, body: impl Into<Vec<u8>>) {
        self.bodies.insert(url.to_string(), body.into());
    }

    /// URLs requested so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetch for MemoryFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| CraftError::download(url, "404 Not Found"))
    }
}
