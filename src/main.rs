use clap::Parser;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

mod api;
mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod storage;

use crate::api::state::AppState;
use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::storage::{PasswordLog, StatsStore};

fn to_io_error(e: Box<dyn std::error::Error>) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e.to_string())
}

#[tokio::main]
async fn main() -> Result<ExitCode, io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(path) = args.passwords_file.clone() {
        config.passwords_file = path;
    }
    if let Some(path) = args.stats_file.clone() {
        config.stats_file = path;
    }

    logging::init(&config)?;
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: passwords_file={} stats_file={} port={}",
        config.passwords_file.display(), config.stats_file.display(), config.web_port);

    let password_log = PasswordLog::new(&config.passwords_file);

    match args.command {
        None => {
            cli::menu::run_cli_menu(&password_log).map_err(|e| {
                log::error!("CLI menu error: {}", e);
                to_io_error(e)
            })?;
        }
        Some(CliCommand::Generate { length, numbers, symbols, save }) => {
            return Ok(cli::handlers::run_generate(&password_log, length, numbers, symbols, save));
        }
        Some(CliCommand::Stats) => {
            cli::handlers::handle_stats(&StatsStore::new(&config.stats_file));
        }
        Some(CliCommand::Serve { port }) => {
            if let Some(port) = port {
                config.web_port = port;
            }

            if config.uses_default_secret() {
                log::warn!("SECRET_KEY is not set; using the development default");
            }

            let state = Arc::new(AppState::from_config(&config));
            api::start_server(state, &config.web_address, config.web_port)
                .await
                .map_err(|e| {
                    log::error!("Web server failed: {}", e);
                    e
                })?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
