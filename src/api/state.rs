// src/api/state.rs
use crate::core::config::Config;
use crate::storage::{PasswordLog, StatsStore};

/// Shared by every worker of the web server
pub struct AppState {
    pub password_log: PasswordLog,
    pub stats: StatsStore,
    pub default_length: usize,
}

impl AppState {
    pub fn new(password_log: PasswordLog, stats: StatsStore, default_length: usize) -> Self {
        Self {
            password_log,
            stats,
            default_length,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            PasswordLog::new(&config.passwords_file),
            StatsStore::new(&config.stats_file),
            config.default_password_length,
        )
    }
}
