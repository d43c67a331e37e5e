//! File names inside a server directory.
//!
//! Every operation receives a [`ServerDir`] explicitly. Nothing in this crate
//! changes the process-wide current directory.

use std::path::{Path, PathBuf};

/// Properties file name.
pub const PROPERTIES_FILE: &str = "server.properties";
/// EULA acceptance flag file name.
pub const EULA_FILE: &str = "eula.txt";
/// Server icon file name.
pub const ICON_FILE: &str = "server-icon.png";
/// Default server jar file name.
pub const DEFAULT_JAR_FILE: &str = "server.jar";
/// Optional per-directory tool settings.
pub const SETTINGS_FILE: &str = "craftctl.ron";

/// A directory holding (or about to hold) one game server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDir {
    root: PathBuf,
    jar_name: String,
}

impl ServerDir {
    /// Use `root` with the default jar name.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            jar_name: DEFAULT_JAR_FILE.to_string(),
        }
    }

    /// Override the server jar file name.
    pub fn with_jar_name(mut self, jar_name: impl Into<String>) -> Self {
        self.jar_name = jar_name.into();
        self
    }

    /// The directory itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `server.properties`.
    pub fn properties(&self) -> PathBuf {
        self.root.join(PROPERTIES_FILE)
    }

    /// Path of `eula.txt`.
    pub fn eula(&self) -> PathBuf {
        self.root.join(EULA_FILE)
    }

    /// Path of the server icon.
    pub fn icon(&self) -> PathBuf {
        self.root.join(ICON_FILE)
    }

    /// Path of the server jar.
    pub fn jar(&self) -> PathBuf {
        self.root.join(&self.jar_name)
    }

    /// File name of the server jar.
    pub fn jar_name(&self) -> &str {
        &self.jar_name
    }

    /// Path of the per-directory settings file.
    pub fn settings(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    /// Resolve a path relative to the server directory.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}
