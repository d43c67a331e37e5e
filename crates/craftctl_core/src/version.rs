//! Version resolution against the remote version manifest.
//!
//! The manifest lists the latest release and snapshot ids plus one entry per
//! version pointing at a per-version metadata document. That document carries
//! the server jar download. Nothing is cached; every resolve fetches both
//! documents again.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{CraftError, Result};
use crate::fetch::Fetch;

/// Default location of the version manifest.
pub const DEFAULT_MANIFEST_URL: &str =
    "https://piston-meta.mojang.com/mc/game/version_manifest_v2.json";

/// The version a user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRequest {
    /// Latest release (also the empty request).
    Release,
    /// Latest snapshot.
    Snapshot,
    /// An explicit version id.
    Exact(String),
}

impl From<&str> for VersionRequest {
    fn from(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case("release") {
            Self::Release
        } else if tag.eq_ignore_ascii_case("snapshot") {
            Self::Snapshot
        } else {
            Self::Exact(tag.strip_prefix('v').unwrap_or(tag).to_string())
        }
    }
}

/// Top-level version manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Latest ids.
    pub latest: Latest,
    /// All published versions, newest first.
    pub versions: Vec<ManifestEntry>,
}

/// Latest release and snapshot ids.
#[derive(Debug, Clone, Deserialize)]
pub struct Latest {
    /// Latest stable release id.
    pub release: String,
    /// Latest snapshot id.
    pub snapshot: String,
}

/// One manifest entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// Version id, e.g. `1.20.4`.
    pub id: String,
    /// URL of the per-version metadata document.
    pub url: String,
    /// Release timestamp as published.
    pub release_time: String,
}

impl Manifest {
    /// The concrete id a request refers to.
    pub fn resolve_id<'a>(&'a self, request: &'a VersionRequest) -> &'a str {
        match request {
            VersionRequest::Release => &self.latest.release,
            VersionRequest::Snapshot => &self.latest.snapshot,
            VersionRequest::Exact(id) => id,
        }
    }

    /// First entry with exactly this id.
    pub fn find(&self, id: &str) -> Option<&ManifestEntry> {
        self.versions.iter().find(|entry| entry.id == id)
    }
}

/// Per-version metadata; only the parts needed to download the server.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionMetadata {
    /// Downloadable artifacts.
    #[serde(default)]
    pub downloads: Downloads,
}

/// Artifact table of a version.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Downloads {
    /// Dedicated server jar; absent for very old versions.
    pub server: Option<Artifact>,
}

/// A downloadable file.
#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    /// Download URL.
    pub url: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
}

/// A resolved server version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDescriptor {
    /// Concrete version id.
    pub id: String,
    /// Release timestamp as published.
    pub release_time: String,
    /// Server jar download URL.
    pub server_url: String,
    /// Advertised jar size, if published.
    pub server_size: Option<u64>,
}

/// Resolves version requests through a manifest URL.
pub struct VersionResolver<'a, F: ?Sized> {
    fetcher: &'a F,
    manifest_url: String,
}

impl<'a, F: Fetch + ?Sized> VersionResolver<'a, F> {
    /// Resolver reading the manifest at `manifest_url`.
    pub fn new(fetcher: &'a F, manifest_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            manifest_url: manifest_url.into(),
        }
    }

    /// Fetch and parse the manifest.
    pub fn manifest(&self) -> Result<Manifest> {
        fetch_json(self.fetcher, &self.manifest_url)
    }

    /// Resolve a version tag (`release`, `snapshot`, `1.20.4`, `v1.20.4`, or empty).
    ///
    /// # Errors
    ///
    /// [`CraftError::VersionNotFound`] if no manifest entry matches,
    /// [`CraftError::NoServerDownload`] if the version has no server jar.
    pub fn resolve(&self, tag: &str) -> Result<VersionDescriptor> {
        let request = VersionRequest::from(tag);
        let manifest = self.manifest()?;
        let id = manifest.resolve_id(&request);

        let entry = manifest
            .find(id)
            .ok_or_else(|| CraftError::VersionNotFound(id.to_string()))?;
        tracing::debug!("Version {} metadata at {}", entry.id, entry.url);

        let metadata: VersionMetadata = fetch_json(self.fetcher, &entry.url)?;
        let server = metadata
            .downloads
            .server
            .ok_or_else(|| CraftError::NoServerDownload(entry.id.clone()))?;

        Ok(VersionDescriptor {
            id: entry.id.clone(),
            release_time: entry.release_time.clone(),
            server_url: server.url,
            server_size: server.size,
        })
    }
}

fn fetch_json<T: DeserializeOwned, F: Fetch + ?Sized>(fetcher: &F, url: &str) -> Result<T> {
    let body = fetcher.fetch(url)?;
    serde_json::from_slice(&body).map_err(|e| CraftError::ManifestParse {
        url: url.to_string(),
        message: e.to_string(),
    })
}
