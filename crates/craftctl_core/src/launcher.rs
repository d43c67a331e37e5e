//! Foreground server launch.
//!
//! The server runs as a child process in the server directory and this
//! process blocks until it exits. There is no restart, detach or supervision.

use std::process::{Command, ExitStatus};

use crate::error::{CraftError, Result};
use crate::layout::ServerDir;
use crate::settings::Settings;

/// Flag that keeps the server from opening its GUI.
pub const NO_GUI_FLAG: &str = "nogui";

/// How to launch one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Java executable.
    pub java: String,
    /// Initial heap in MB.
    pub min_ram_mb: u32,
    /// Maximum heap in MB.
    pub max_ram_mb: u32,
}

impl LaunchOptions {
    /// Options from settings, with optional per-run overrides.
    pub fn new(settings: &Settings, min_ram_mb: Option<u32>, max_ram_mb: Option<u32>) -> Self {
        Self {
            java: settings.java.clone(),
            min_ram_mb: min_ram_mb.unwrap_or(settings.min_ram_mb),
            max_ram_mb: max_ram_mb.unwrap_or(settings.max_ram_mb),
        }
    }

    /// JVM arguments, in order.
    pub fn args(&self, dir: &ServerDir) -> Vec<String> {
        vec![
            format!("-Xms{}M", self.min_ram_mb),
            format!("-Xmx{}M", self.max_ram_mb),
            "-jar".to_string(),
            dir.jar_name().to_string(),
            NO_GUI_FLAG.to_string(),
        ]
    }

    /// Check the options against a server directory.
    ///
    /// # Errors
    ///
    /// [`CraftError::Argument`] if the heap range is inverted or the server
    /// jar is missing.
    pub fn validate(&self, dir: &ServerDir) -> Result<()> {
        if self.min_ram_mb == 0 || self.min_ram_mb > self.max_ram_mb {
            return Err(CraftError::Argument(format!(
                "invalid memory range: min {} MB, max {} MB",
                self.min_ram_mb, self.max_ram_mb
            )));
        }
        if !dir.jar().is_file() {
            return Err(CraftError::Argument(format!(
                "{} not found, run `craftctl create` first",
                dir.jar().display()
            )));
        }
        Ok(())
    }

    /// The command that would be spawned.
    pub fn command(&self, dir: &ServerDir) -> Command {
        let mut command = Command::new(&self.java);
        command.args(self.args(dir)).current_dir(dir.root());
        command
    }
}

/// Run the server in the foreground and return its exit status.
pub fn run(dir: &ServerDir, options: &LaunchOptions) -> Result<ExitStatus> {
    options.validate(dir)?;

    tracing::info!(
        "Starting {} in {} ({}-{} MB)",
        dir.jar_name(),
        dir.root().display(),
        options.min_ram_mb,
        options.max_ram_mb
    );

    let status = options
        .command(dir)
        .status()
        .map_err(|source| CraftError::Launch {
            program: options.java.clone(),
            source,
        })?;

    tracing::info!("Server exited with {status}");
    Ok(status)
}
