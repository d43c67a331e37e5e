//! Server icon coercion.
//!
//! `conf set icon <source>` does not store a property. It fetches an image,
//! resamples it to the icon size and writes it next to `server.properties`,
//! or deletes the icon when the source is one of [`REMOVE_SENTINELS`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{ImageError, ImageFormat};

use crate::error::{CraftError, Result};
use crate::fetch::Fetch;

/// Icon edge length the game client expects.
pub const ICON_SIZE: u32 = 64;

/// Source tokens that delete the icon instead of replacing it.
pub const REMOVE_SENTINELS: [&str; 5] = ["none", "null", "empty", "rm", "remove"];

/// Where an icon comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// Delete the current icon.
    Remove,
    /// Read from the local filesystem.
    Local(PathBuf),
    /// Fetch over the network.
    Remote(String),
}

impl IconSource {
    /// Classify a user-supplied source token.
    ///
    /// `file://` is stripped to a local path. Anything else that is not an
    /// existing file is treated as a URL.
    pub fn parse(source: &str) -> Self {
        if REMOVE_SENTINELS
            .iter()
            .any(|s| s.eq_ignore_ascii_case(source))
        {
            return Self::Remove;
        }
        if let Some(path) = source.strip_prefix("file://") {
            return Self::Local(PathBuf::from(path));
        }
        let path = Path::new(source);
        if path.is_file() {
            Self::Local(path.to_path_buf())
        } else {
            Self::Remote(source.to_string())
        }
    }
}

/// What [`resize_icon`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconOutcome {
    /// A new icon was written.
    Written,
    /// The existing icon was deleted.
    Removed,
    /// Removal was requested but there was no icon.
    NothingToRemove,
}

/// Replace or delete the icon at `dest`.
///
/// On any error the existing icon is left untouched.
///
/// # Errors
///
/// [`CraftError::Download`] if a remote source cannot be fetched,
/// [`CraftError::ImageDecode`] if the bytes are not a supported image.
pub fn resize_icon<F: Fetch + ?Sized>(
    fetcher: &F,
    source: &str,
    dest: &Path,
    width: u32,
    height: u32,
) -> Result<IconOutcome> {
    let bytes = match IconSource::parse(source) {
        IconSource::Remove => return remove_icon(dest),
        IconSource::Local(path) => fs::read(&path).map_err(|e| CraftError::io(&path, e))?,
        IconSource::Remote(url) => fetcher.fetch(&url)?,
    };

    let img = image::load_from_memory(&bytes).map_err(|e| CraftError::ImageDecode(e.to_string()))?;
    let resized = img.resize_exact(width, height, FilterType::Lanczos3);
    resized
        .save_with_format(dest, ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(io) => CraftError::io(dest, io),
            other => CraftError::ImageDecode(other.to_string()),
        })?;

    tracing::info!(
        "Wrote {}x{} icon to {} (source was {}x{})",
        width,
        height,
        dest.display(),
        img.width(),
        img.height()
    );
    Ok(IconOutcome::Written)
}

fn remove_icon(dest: &Path) -> Result<IconOutcome> {
    match fs::remove_file(dest) {
        Ok(()) => {
            tracing::info!("Removed icon {}", dest.display());
            Ok(IconOutcome::Removed)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(IconOutcome::NothingToRemove),
        Err(e) => Err(CraftError::io(dest, e)),
    }
}

/// Dimensions of the icon at `path`.
///
/// # Errors
///
/// [`CraftError::PropertyNotFound`] (key `icon`) if there is no icon.
pub fn icon_dimensions(path: &Path) -> Result<(u32, u32)> {
    if !path.is_file() {
        return Err(CraftError::PropertyNotFound("icon".to_string()));
    }
    image::image_dimensions(path).map_err(|e| CraftError::ImageDecode(e.to_string()))
}
