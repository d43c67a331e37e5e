//! Command-line definitions.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "craftctl")]
#[command(about = "Create, run, clean and configure a local game server")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Server directory to operate on
    #[arg(short, long, global = true, default_value = ".")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Verbs.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download a server version and initialize its directory
    Create {
        /// `release`, `snapshot` or an exact version id (default: latest release)
        version: Option<String>,

        /// Target directory (default: --dir)
        #[arg(value_name = "DIR")]
        target: Option<PathBuf>,
    },

    /// Run the server in the foreground
    Run {
        /// Initial heap in MB
        min: Option<u32>,

        /// Maximum heap in MB
        max: Option<u32>,
    },

    /// Remove logs and caches; `clean all` also removes worlds, jar and configuration
    Clean {
        /// Clean everything the server and craftctl created
        scope: Option<CleanArg>,
    },

    /// Read and edit server.properties
    #[command(subcommand)]
    Conf(ConfCommand),
}

/// Argument of `clean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CleanArg {
    /// Worlds, jar and configuration too
    All,
}

/// `conf` verbs.
#[derive(Debug, Subcommand)]
pub enum ConfCommand {
    /// Set a property (`icon` sets the server icon, `default` restores the template value)
    Set {
        /// Property name; spaces and underscores become hyphens
        key: String,

        /// New value; multiple words are joined with spaces
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Print a property
    Get {
        /// Property name
        key: String,
    },

    /// Print every property
    List,

    /// Restore the default properties and accept the EULA
    Reset,

    /// Print properties whose key or value contains a string
    Search {
        /// Text to look for
        needle: String,
    },
}

impl Cli {
    /// Directory the chosen command works on.
    pub fn target_dir(&self) -> &Path {
        match &self.command {
            Some(Commands::Create {
                target: Some(target),
                ..
            }) => target,
            _ => &self.dir,
        }
    }
}
