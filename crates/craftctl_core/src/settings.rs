//! Tool settings.
//!
//! These configure craftctl itself, not the game server. They are read from a
//! RON file and every field is optional.
//!
//! # Example RON
//!
//! ```ron
//! Settings(
//!     java: "/usr/lib/jvm/java-21/bin/java",
//!     min_ram_mb: 2048,
//!     max_ram_mb: 6144,
//! )
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CraftError, Result};
use crate::icon::ICON_SIZE;
use crate::layout::{ServerDir, DEFAULT_JAR_FILE, SETTINGS_FILE};
use crate::version::DEFAULT_MANIFEST_URL;

/// Environment variable naming an explicit settings file.
pub const SETTINGS_ENV: &str = "CRAFTCTL_CONFIG";

/// Default initial heap in MB.
pub const DEFAULT_MIN_RAM_MB: u32 = 1024;
/// Default maximum heap in MB.
pub const DEFAULT_MAX_RAM_MB: u32 = 3072;

/// craftctl settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Version manifest location.
    pub manifest_url: String,
    /// Java executable, looked up on `PATH` when not absolute.
    pub java: String,
    /// Server jar file name inside the server directory.
    pub jar_name: String,
    /// Initial heap when `run` is given no minimum.
    pub min_ram_mb: u32,
    /// Maximum heap when `run` is given no maximum.
    pub max_ram_mb: u32,
    /// Edge length of the generated server icon.
    pub icon_size: u32,
    /// User agent sent with every HTTP request.
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            java: "java".to_string(),
            jar_name: DEFAULT_JAR_FILE.to_string(),
            min_ram_mb: DEFAULT_MIN_RAM_MB,
            max_ram_mb: DEFAULT_MAX_RAM_MB,
            icon_size: ICON_SIZE,
            user_agent: concat!("craftctl/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Settings {
    /// Parse a settings file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CraftError::io(path, e))?;
        ron::from_str(&content).map_err(|e| CraftError::SettingsParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load settings for a server directory.
    ///
    /// Looks, in order, at:
    /// 1. The file named by `CRAFTCTL_CONFIG`
    /// 2. `craftctl.ron` inside `server_dir`
    /// 3. Built-in defaults
    pub fn load(server_dir: &Path) -> Result<Self> {
        let explicit = std::env::var_os(SETTINGS_ENV).map(PathBuf::from);
        Self::load_from(explicit.as_deref(), server_dir)
    }

    /// [`Settings::load`] with the environment lookup already done.
    pub fn load_from(explicit: Option<&Path>, server_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("Using settings from {}", path.display());
            return Self::from_file(path);
        }

        let local = server_dir.join(SETTINGS_FILE);
        if local.is_file() {
            tracing::debug!("Using settings from {}", local.display());
            return Self::from_file(&local);
        }

        Ok(Self::default())
    }

    /// Layout of `root` using the configured jar name.
    pub fn server_dir(&self, root: impl Into<PathBuf>) -> ServerDir {
        ServerDir::new(root).with_jar_name(self.jar_name.clone())
    }
}
