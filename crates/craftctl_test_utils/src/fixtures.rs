//! Test fixtures and helpers.
//!
//! Scratch server directories and small images for consistent testing.

use std::fs;
use std::path::{Path, PathBuf};

use craftctl_core::layout::ServerDir;
use craftctl_core::properties::PropertyStore;
use image::{ImageFormat, Rgba, RgbaImage};
use tempfile::TempDir;

/// A temporary server directory, deleted on drop.
pub struct TestServer {
    /// Keeps the directory alive.
    pub tmp: TempDir,
    /// Layout rooted at `tmp`.
    pub dir: ServerDir,
}

impl TestServer {
    /// An empty directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn empty() -> Self {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let dir = ServerDir::new(tmp.path());
        Self { tmp, dir }
    }

    /// A directory holding the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the defaults cannot be written.
    #[must_use]
    pub fn with_defaults() -> Self {
        let server = Self::empty();
        server.store().reset().expect("write default properties");
        server
    }

    /// A directory whose `server.properties` is exactly `text`.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_properties(text: &str) -> Self {
        let server = Self::empty();
        fs::write(server.dir.properties(), text).expect("write server.properties");
        server
    }

    /// Property store for this directory.
    #[must_use]
    pub fn store(&self) -> PropertyStore {
        PropertyStore::open(&self.dir)
    }

    /// Root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.tmp.path()
    }

    /// Raw `server.properties` text.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    #[must_use]
    pub fn properties_text(&self) -> String {
        fs::read_to_string(self.dir.properties()).expect("read server.properties")
    }
}

/// A `server.properties` in the shape the game writes, comments included.
pub const GAME_WRITTEN_PROPERTIES: &str = "\
#Minecraft server properties
#Sat Apr 06 10:00:00 UTC 2024
spawn-protection=16
max-players=20
server-port=25565
motd=A Minecraft Server
pvp=true
";

/// Encode a solid-colour PNG of the given size.
///
/// # Panics
///
/// Panics if encoding fails.
#[must_use]
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([30, 160, 90, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).expect("encode png");
    out.into_inner()
}

/// Write a solid-colour PNG to `dir/name` and return its path.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, png_bytes(width, height)).expect("write png");
    path
}
