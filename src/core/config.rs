// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub passwords_file: PathBuf,
    pub stats_file: PathBuf,

    // Password Generation
    pub default_password_length: usize,

    // Web Interface
    pub secret_key: String,
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Problems found while loading, logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Storage
            passwords_file: PathBuf::from("passwords.txt"),
            stats_file: PathBuf::from("stats.json"),

            // Password Generation
            default_password_length: crate::models::DEFAULT_FORM_LENGTH,

            // Web Interface
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup. Values that fail
    /// to parse keep their defaults and leave a note in `warnings`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Storage
        if let Some(path) = lookup("PASSWORDS_FILE") {
            config.passwords_file = PathBuf::from(path);
        }

        if let Some(path) = lookup("STATS_FILE") {
            config.stats_file = PathBuf::from(path);
        }

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) if length > 0 => config.default_password_length = length,
                _ => {
                    let warning = format!("Invalid DEFAULT_PASSWORD_LENGTH '{}', using {}", val, config.default_password_length);
                    config.warnings.push(warning);
                }
            }
        }

        // Web Interface
        if let Some(key) = lookup("SECRET_KEY") {
            if !key.is_empty() {
                config.secret_key = key;
            }
        }

        if let Some(val) = lookup("PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => {
                    let warning = format!("Invalid PORT '{}', using {}", val, config.web_port);
                    config.warnings.push(warning);
                }
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config.warnings.push(format!("Unknown LOG_LEVEL '{}', using info", level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}
