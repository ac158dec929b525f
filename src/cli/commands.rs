// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CliCommand {
    /// Generate a single password and exit
    Generate {
        /// Password length
        #[arg(long, short, allow_hyphen_values = true)]
        length: i64,

        /// Include digits
        #[arg(long)]
        numbers: bool,

        /// Include punctuation
        #[arg(long)]
        symbols: bool,

        /// Append the password to the passwords file
        #[arg(long)]
        save: bool,
    },

    /// Run the web form
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Show the daily generation counter
    Stats,
}
