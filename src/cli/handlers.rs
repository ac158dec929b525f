// src/cli/handlers.rs
use std::error::Error;
use std::fmt::Display;
use std::process::ExitCode;

use chrono::Local;
use console::style;

use crate::generators::{check_strength, generate_password};
use crate::models::StrengthLabel;
use crate::storage::{PasswordLog, StatsStore};

/// Two-line report printed after every generation.
pub fn format_generated(password: &str, strength: impl Display) -> String {
    format!("Password: {}\nStrength: {}", password, strength)
}

pub fn print_generated(password: &str) {
    let strength = check_strength(password);
    let label = match strength {
        StrengthLabel::Weak => style(strength).red(),
        StrengthLabel::Medium => style(strength).yellow(),
        StrengthLabel::Strong => style(strength).green(),
    };

    println!("{}", format_generated(password, label));
}

pub fn handle_save(password_log: &PasswordLog, password: &str) -> Result<(), Box<dyn Error>> {
    password_log.append(password)?;
    println!("Password saved to {}!", password_log.path().display());
    Ok(())
}

pub fn handle_generate(
    password_log: &PasswordLog,
    length: i64,
    include_numbers: bool,
    include_symbols: bool,
    save: bool,
) -> Result<String, Box<dyn Error>> {
    let password = generate_password(length, include_numbers, include_symbols)?;
    log::debug!("Generated pw len={} nums={} syms={}", length, include_numbers, include_symbols);

    print_generated(&password);

    if save {
        handle_save(password_log, &password)?;
    }

    Ok(password)
}

/// `generate` subcommand: report failures by message and map them to a
/// failing exit status.
pub fn run_generate(
    password_log: &PasswordLog,
    length: i64,
    include_numbers: bool,
    include_symbols: bool,
    save: bool,
) -> ExitCode {
    match handle_generate(password_log, length, include_numbers, include_symbols, save) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("generate failed: {:?}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

pub fn handle_stats(stats: &StatsStore) {
    let today = Local::now().date_naive();
    let snapshot = stats.snapshot(today);

    println!("Total generations today: {}", stats.today_count(today));
    println!(
        "Stored record in {}: {} generation(s) on {} (today is {})",
        stats.path().display(), snapshot.count, snapshot.date, snapshot.current_date
    );
}
