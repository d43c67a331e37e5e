//! `create`: download a server version and initialize its directory.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{CraftError, Result};
use crate::fetch::Fetch;
use crate::layout::ServerDir;
use crate::properties::PropertyStore;
use crate::version::{VersionDescriptor, VersionResolver};

/// Result of a successful create.
#[derive(Debug, Clone)]
pub struct CreateReport {
    /// The version that was installed.
    pub version: VersionDescriptor,
    /// Where the jar was written.
    pub jar: PathBuf,
    /// Jar size in bytes.
    pub bytes: u64,
    /// Whether the default configuration was written.
    pub initialized_config: bool,
}

/// Install `tag` into `dir`.
///
/// The jar is streamed to a `.part` file and renamed once complete, so a
/// failed download never replaces a working jar. The default configuration
/// is only written when the directory has no `server.properties` yet.
pub fn create<F: Fetch + ?Sized>(
    fetcher: &F,
    manifest_url: &str,
    dir: &ServerDir,
    tag: &str,
) -> Result<CreateReport> {
    let version = VersionResolver::new(fetcher, manifest_url).resolve(tag)?;
    tracing::info!("Resolved {} (released {})", version.id, version.release_time);

    fs::create_dir_all(dir.root()).map_err(|e| CraftError::io(dir.root(), e))?;

    let jar = dir.jar();
    let partial = jar.with_extension("jar.part");
    let bytes = match download(fetcher, &version, &partial) {
        Ok(bytes) => bytes,
        Err(e) => {
            let _ = fs::remove_file(&partial);
            return Err(e);
        }
    };
    fs::rename(&partial, &jar).map_err(|e| CraftError::io(&jar, e))?;
    tracing::info!("Downloaded {} ({bytes} bytes)", jar.display());

    let store = PropertyStore::open(dir);
    let initialized_config = !store.path().exists();
    if initialized_config {
        store.reset()?;
    }

    Ok(CreateReport {
        version,
        jar,
        bytes,
        initialized_config,
    })
}

fn download<F: Fetch + ?Sized>(
    fetcher: &F,
    version: &VersionDescriptor,
    dest: &std::path::Path,
) -> Result<u64> {
    let file = File::create(dest).map_err(|e| CraftError::io(dest, e))?;
    let mut writer = BufWriter::new(file);
    let bytes = fetcher.download_to(&version.server_url, &mut writer)?;
    writer.flush().map_err(|e| CraftError::io(dest, e))?;

    match version.server_size {
        Some(expected) if expected != bytes => Err(CraftError::SizeMismatch {
            expected,
            actual: bytes,
        }),
        _ => Ok(bytes),
    }
}
