//! Command dispatch.
//!
//! Maps parsed verbs onto `craftctl_core`. Command output goes to the given
//! writer (stdout in the binary); progress and warnings go through `tracing`.

use std::io::Write;
use std::path::Path;

use craftctl_core::clean::{clean, CleanScope};
use craftctl_core::conf::{self, ConfChange};
use craftctl_core::error::{CraftError, Result};
use craftctl_core::fetch::Fetch;
use craftctl_core::icon::IconOutcome;
use craftctl_core::install::create;
use craftctl_core::launcher::{self, LaunchOptions};
use craftctl_core::layout::ServerDir;
use craftctl_core::properties::{PropertyStore, SetOutcome};
use craftctl_core::settings::Settings;

use crate::cli::{CleanArg, Commands, ConfCommand};

/// Everything a command needs besides its own arguments.
pub struct Context<'a, F: ?Sized> {
    /// Directory being operated on.
    pub dir: ServerDir,
    /// Tool settings.
    pub settings: Settings,
    /// Remote source for manifests, jars and icons.
    pub fetcher: &'a F,
}

impl<'a, F: Fetch + ?Sized> Context<'a, F> {
    /// Context for `root`, laid out according to `settings`.
    pub fn new(root: &Path, settings: Settings, fetcher: &'a F) -> Self {
        Self {
            dir: settings.server_dir(root),
            settings,
            fetcher,
        }
    }
}

/// Run one verb and return the process exit code.
pub fn execute<F: Fetch + ?Sized>(
    command: Commands,
    ctx: &Context<'_, F>,
    out: &mut dyn Write,
) -> Result<i32> {
    match command {
        Commands::Create { version, .. } => {
            cmd_create(ctx, version.as_deref().unwrap_or(""), out)?;
            Ok(0)
        }
        Commands::Run { min, max } => cmd_run(ctx, min, max),
        Commands::Clean { scope } => {
            let scope = match scope {
                Some(CleanArg::All) => CleanScope::All,
                None => CleanScope::Runtime,
            };
            let removed = clean(&ctx.dir, scope)?;
            tracing::info!("Removed {} entries", removed.len());
            Ok(0)
        }
        Commands::Conf(conf) => {
            execute_conf(conf, ctx, out)?;
            Ok(0)
        }
    }
}

fn cmd_create<F: Fetch + ?Sized>(ctx: &Context<'_, F>, tag: &str, out: &mut dyn Write) -> Result<()> {
    let report = create(ctx.fetcher, &ctx.settings.manifest_url, &ctx.dir, tag)?;
    write_line(
        out,
        &format!(
            "Created {} server in {}",
            report.version.id,
            ctx.dir.root().display()
        ),
    )?;
    if !report.initialized_config {
        tracing::info!("Kept existing {}", ctx.dir.properties().display());
    }
    Ok(())
}

fn cmd_run<F: Fetch + ?Sized>(
    ctx: &Context<'_, F>,
    min: Option<u32>,
    max: Option<u32>,
) -> Result<i32> {
    let options = LaunchOptions::new(&ctx.settings, min, max);
    let status = launcher::run(&ctx.dir, &options)?;
    // Killed by a signal: no code to forward.
    Ok(status.code().unwrap_or(1))
}

/// Run one `conf` verb.
pub fn execute_conf<F: Fetch + ?Sized>(
    command: ConfCommand,
    ctx: &Context<'_, F>,
    out: &mut dyn Write,
) -> Result<()> {
    let store = PropertyStore::open(&ctx.dir);

    match command {
        ConfCommand::Set { key, value } => {
            let value = value.join(" ");
            let change = conf::set(ctx.fetcher, &ctx.dir, ctx.settings.icon_size, &key, &value)?;
            match change {
                ConfChange::Property(SetOutcome::Added) => tracing::info!("Added {key}"),
                ConfChange::Property(SetOutcome::Updated) => tracing::info!("Updated {key}"),
                ConfChange::Icon(IconOutcome::NothingToRemove) => {
                    tracing::info!("No icon to remove");
                }
                ConfChange::Icon(_) => {}
            }
        }
        ConfCommand::Get { key } => {
            let value = conf::get(&ctx.dir, &key)?;
            write_line(out, &value)?;
        }
        ConfCommand::List => {
            for (key, value) in store.list()? {
                write_line(out, &format!("{key}={value}"))?;
            }
        }
        ConfCommand::Reset => store.reset()?,
        ConfCommand::Search { needle } => {
            for (key, value) in store.search(&needle)? {
                write_line(out, &format!("{key}={value}"))?;
            }
        }
    }

    Ok(())
}

fn write_line(out: &mut dyn Write, line: &str) -> Result<()> {
    writeln!(out, "{line}").map_err(|e| CraftError::io("<stdout>", e))
}
