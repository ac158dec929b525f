// src/cli/menu.rs
use inquire::{Confirm, InquireError, Text};
use std::error::Error;

use crate::cli::handlers::{handle_save, print_generated};
use crate::generators::PasswordGenerator;
use crate::models::GenerationRequest;
use crate::storage::PasswordLog;

const FAREWELL: &str = "Thanks for using Password Generator!";

pub fn run_cli_menu(password_log: &PasswordLog) -> Result<(), Box<dyn Error>> {
    println!("Welcome to Password Generator!");
    println!("{}", "-".repeat(30));

    match prompt_loop(password_log) {
        Ok(()) => {}
        // Ctrl+C / Esc end the session like answering "no"
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            println!();
        }
        Err(e) => return Err(Box::new(e)),
    }

    println!("{}", FAREWELL);
    Ok(())
}

fn prompt_loop(password_log: &PasswordLog) -> Result<(), InquireError> {
    let password_generator = PasswordGenerator::new();

    loop {
        let request = prompt_request()?;
        let password = password_generator.generate_password(&request);
        log::debug!(
            "Generated pw len={} nums={} syms={}",
            request.length(),
            request.include_numbers,
            request.include_symbols
        );

        print_generated(&password);

        let save = Confirm::new("Save to file?")
            .with_default(false)
            .prompt()?;

        if save {
            if let Err(e) = handle_save(password_log, &password) {
                log::error!("Failed to save password: {}", e);
                println!("❌ Could not save password: {}", e);
            }
        }

        let again = Confirm::new("Generate another?")
            .with_default(false)
            .prompt()?;

        if !again {
            return Ok(());
        }
        println!();
    }
}

/// Ask for length and options, re-prompting until the length is valid.
fn prompt_request() -> Result<GenerationRequest, InquireError> {
    let mut request = loop {
        let raw = Text::new("How long should the password be?").prompt()?;

        match GenerationRequest::parse(&raw, false, false) {
            Ok(request) => break request,
            Err(e) => println!("{}", e),
        }
    };

    request.include_numbers = Confirm::new("Include numbers?")
        .with_default(false)
        .prompt()?;

    request.include_symbols = Confirm::new("Include symbols?")
        .with_default(false)
        .prompt()?;

    Ok(request)
}
