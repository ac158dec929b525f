use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDate;

use super::Result;
use crate::models::{StatsRecord, StatsSnapshot};

/// Daily generation counter persisted as a single JSON object.
///
/// Read failures (missing file, unreadable file, malformed JSON) count as an
/// empty record. Updates go through `write_lock` so that concurrent workers
/// sharing one store never interleave their read-modify-write cycles.
#[derive(Debug)]
pub struct StatsStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<StatsRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let record: StatsRecord = serde_json::from_str(&content)?;

        Ok(Some(record))
    }

    fn load_or_empty(&self) -> Option<StatsRecord> {
        match self.load() {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Ignoring unreadable stats file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Generations recorded for `today`, zero if the stored day differs.
    pub fn today_count(&self, today: NaiveDate) -> u64 {
        match self.load_or_empty() {
            Some(record) if record.date == Some(today) => record.count.unwrap_or(0),
            _ => 0,
        }
    }

    pub fn snapshot(&self, today: NaiveDate) -> StatsSnapshot {
        match self.load_or_empty() {
            Some(record) => StatsSnapshot {
                date: record.date.unwrap_or(today),
                count: record.count.unwrap_or(0),
                current_date: today,
            },
            None => StatsSnapshot {
                date: today,
                count: 0,
                current_date: today,
            },
        }
    }

    /// Record one generation for `today` and return the new count.
    ///
    /// A different stored day, a missing file or a malformed file all start
    /// the day over at 1. Only write failures are reported.
    pub fn increment(&self, today: NaiveDate) -> Result<u64> {
        let _guard = self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let count = match self.load_or_empty() {
            Some(record) if record.date == Some(today) => record.count.unwrap_or(0) + 1,
            _ => 1,
        };

        let content = serde_json::to_string(&StatsRecord::for_day(today, count))?;
        fs::write(&self.path, content)?;

        Ok(count)
    }
}
