//! craftctl - local game server manager

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use craftctl_cli::cli::Cli;
use craftctl_cli::commands::{execute, Context};
use craftctl_cli::logging;
use craftctl_core::error::{CraftError, Result};
use craftctl_core::fetch::HttpClient;
use craftctl_core::settings::Settings;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Initialize logging to stderr (stdout is for command output)
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    logging::subscriber(cli.verbose, directives.as_deref(), std::io::stderr).init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let root = cli.target_dir().to_path_buf();
    let Some(command) = cli.command else {
        Cli::command()
            .print_help()
            .map_err(|e| CraftError::io("<stdout>", e))?;
        return Ok(0);
    };

    let settings = Settings::load(&root)?;
    let http = HttpClient::new(&settings.user_agent)?;
    let ctx = Context::new(&root, settings, &http);

    execute(command, &ctx, &mut std::io::stdout().lock())
}
