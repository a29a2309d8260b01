//! `eero-cli` -- manage an eero mesh network from the terminal.

mod cli;
mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use eero_config::FileConfigStore;
use eero_core::Session;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

/// Logs go to stderr so they never mix with rendered output.
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    if let Command::Completions(args) = &cli.command {
        use clap::CommandFactory;
        use clap_complete::generate;

        let mut cmd = Cli::command();
        generate(args.shell, &mut cmd, "eero-cli", &mut std::io::stdout());
        return Ok(());
    }

    let config_path = config_path(&cli.global);
    let session = build_session(&cli.global, config_path.clone())?;
    commands::dispatch(cli.command, &session, &config_path, &cli.global).await
}

fn config_path(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(eero_config::config_path)
}

/// Layer CLI flags over the config file, then open a session on it.
fn build_session(global: &GlobalOpts, path: PathBuf) -> Result<Session, CliError> {
    let mut config = eero_config::load_config(&path)?;
    if let Some(url) = &global.api_url {
        config.api_url = Some(url.clone());
    }
    if let Some(timeout) = global.timeout {
        config.timeout = timeout;
    }
    let settings = config.session_config()?;
    tracing::debug!(config = %path.display(), api = %settings.base_url, "session configured");

    let store = Arc::new(FileConfigStore::new(path));
    Ok(Session::new(&settings, store)?)
}
