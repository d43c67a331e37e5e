//! Removal of generated server files.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{CraftError, Result};
use crate::layout::{ServerDir, EULA_FILE, ICON_FILE, PROPERTIES_FILE};

/// Runtime artefacts the server regenerates on every start.
pub const RUNTIME_ENTRIES: [&str; 4] = ["logs", "crash-reports", "debug", "usercache.json"];

/// Everything else a full clean removes, besides the server jar.
pub const WORLD_AND_CONFIG_ENTRIES: [&str; 12] = [
    "world",
    "world_nether",
    "world_the_end",
    "libraries",
    "versions",
    PROPERTIES_FILE,
    EULA_FILE,
    ICON_FILE,
    "ops.json",
    "whitelist.json",
    "banned-players.json",
    "banned-ips.json",
];

/// Which entries a clean touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanScope {
    /// Logs and caches only.
    Runtime,
    /// Runtime files plus worlds, jar and configuration.
    All,
}

/// Paths a clean of `scope` would remove, existing or not.
pub fn targets(dir: &ServerDir, scope: CleanScope) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = RUNTIME_ENTRIES.iter().map(|e| dir.join(e)).collect();
    if scope == CleanScope::All {
        paths.extend(WORLD_AND_CONFIG_ENTRIES.iter().map(|e| dir.join(e)));
        paths.push(dir.jar());
    }
    paths
}

/// Remove the files of `scope`, returning the ones that existed.
pub fn clean(dir: &ServerDir, scope: CleanScope) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for path in targets(dir, scope) {
        let result = match fs::symlink_metadata(&path) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(&path),
            Ok(_) => fs::remove_file(&path),
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => Err(e),
        };
        result.map_err(|e| CraftError::io(&path, e))?;

        tracing::info!("Removed {}", path.display());
        removed.push(path);
    }

    Ok(removed)
}
