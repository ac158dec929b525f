// src/storage/mod.rs
use std::io;
use thiserror::Error;

mod password_log;
mod stats;

pub use password_log::PasswordLog;
pub use stats::StatsStore;

/// IO failures on the flat files backing the generator.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
