//! Canned version manifest documents.
//!
//! Two releases and a snapshot, mirroring the shape of the real manifest:
//!
//! | id       | server jar                  |
//! |----------|-----------------------------|
//! | 24w14a   | `SNAPSHOT_JAR`              |
//! | 1.20.4   | `RELEASE_JAR`               |
//! | 1.2.5    | none (predates server jars) |

use serde_json::json;

use crate::fetcher::MemoryFetcher;

/// Manifest URL served by [`manifest_fetcher`].
pub const MANIFEST_URL: &str = "https://meta.test/mc/game/version_manifest_v2.json";
/// Latest release id.
pub const RELEASE_ID: &str = "1.20.4";
/// Latest snapshot id.
pub const SNAPSHOT_ID: &str = "24w14a";
/// A release without a server download.
pub const ANCIENT_ID: &str = "1.2.5";

/// Jar URL of the release.
pub const RELEASE_JAR_URL: &str = "https://data.test/release/server.jar";
/// Jar URL of the snapshot.
pub const SNAPSHOT_JAR_URL: &str = "https://data.test/snapshot/server.jar";

/// Release jar body.
pub const RELEASE_JAR: &[u8] = b"PK\x03\x04release-server-jar";
/// Snapshot jar body.
pub const SNAPSHOT_JAR: &[u8] = b"PK\x03\x04snapshot-server-jar";

fn metadata_url(id: &str) -> String {
    format!("https://meta.test/v1/packages/{id}.json")
}

/// The manifest document.
#[must_use]
pub fn manifest_json() -> String {
    json!({
        "latest": { "release": RELEASE_ID, "snapshot": SNAPSHOT_ID },
        "versions": [
            {
                "id": SNAPSHOT_ID,
                "type": "snapshot",
                "url": metadata_url(SNAPSHOT_ID),
                "time": "2024-04-03T12:00:00+00:00",
                "releaseTime": "2024-04-03T12:00:00+00:00"
            },
            {
                "id": RELEASE_ID,
                "type": "release",
                "url": metadata_url(RELEASE_ID),
                "time": "2023-12-07T12:00:00+00:00",
                "releaseTime": "2023-12-07T12:00:00+00:00"
            },
            {
                "id": ANCIENT_ID,
                "type": "release",
                "url": metadata_url(ANCIENT_ID),
                "time": "2012-03-01T00:00:00+00:00",
                "releaseTime": "2012-03-01T00:00:00+00:00"
            }
        ]
    })
    .to_string()
}

fn version_json(id: &str, server: Option<(&str, usize)>) -> String {
    let mut downloads = json!({
        "client": { "url": format!("https://data.test/{id}/client.jar"), "size": 1 }
    });
    if let Some((url, size)) = server {
        downloads["server"] = json!({ "url": url, "size": size, "sha1": "0000" });
    }
    json!({ "id": id, "downloads": downloads }).to_string()
}

/// A fetcher serving the manifest, every version document and both jars.
#[must_use]
pub fn manifest_fetcher() -> MemoryFetcher {
    MemoryFetcher::new()
        .with(MANIFEST_URL, manifest_json())
        .with(
            &metadata_url(RELEASE_ID),
            version_json(RELEASE_ID, Some((RELEASE_JAR_URL, RELEASE_JAR.len()))),
        )
        .with(
            &metadata_url(SNAPSHOT_ID),
            version_json(SNAPSHOT_ID, Some((SNAPSHOT_JAR_URL, SNAPSHOT_JAR.len()))),
        )
        .with(&metadata_url(ANCIENT_ID), version_json(ANCIENT_ID, None))
        .with(RELEASE_JAR_URL, RELEASE_JAR)
        .with(SNAPSHOT_JAR_URL, SNAPSHOT_JAR)
}
