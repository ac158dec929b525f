use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::Result;

/// Append-only plain text file, one password per line.
#[derive(Debug, Clone)]
pub struct PasswordLog {
    path: PathBuf,
}

impl PasswordLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, password: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{}", password)?;
        log::debug!("Appended password to {}", self.path.display());

        Ok(())
    }

    /// Every stored password in write order. A missing file reads as empty.
    pub fn read_all(&self) -> Result<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(content.lines().map(String::from).collect())
    }
}
