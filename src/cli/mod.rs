// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Random password generator with a CLI prompt loop and a web form", long_about = None)]
pub struct Args {
    /// File that saved passwords are appended to
    #[arg(long, global = true, env = "PASSWORDS_FILE")]
    pub passwords_file: Option<PathBuf>,

    /// JSON file holding the daily generation counter
    #[arg(long, global = true, env = "STATS_FILE")]
    pub stats_file: Option<PathBuf>,

    /// Command to execute (interactive prompt loop when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
