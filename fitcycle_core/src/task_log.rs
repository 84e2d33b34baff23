//! Daily task completion log with file locking.
//!
//! Completion flags are stored per calendar day, keyed by the task key of
//! each meal label. The log is saved atomically so concurrent CLI runs never
//! see a half-written file.

use crate::keys::task_key;
use crate::{DailyPlan, Error, Result};
use chrono::NaiveDate;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Completion flags by date key (`YYYY-MM-DD`), then by task key
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TaskLog {
    #[serde(default)]
    pub days: BTreeMap<String, BTreeMap<String, bool>>,
}

/// How many of a day's tasks are done
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayProgress {
    pub completed: usize,
    pub total: usize,
}

impl DayProgress {
    /// Completion as a whole percentage; 0 when there is nothing to do
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed * 100) / self.total) as u32
    }
}

impl TaskLog {
    /// Storage key for a calendar day
    pub fn date_key(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    pub fn is_done(&self, date: NaiveDate, task_key: &str) -> bool {
        self.days
            .get(&Self::date_key(date))
            .and_then(|day| day.get(task_key))
            .copied()
            .unwrap_or(false)
    }

    /// Whether the meal behind `label` is done on `date`
    pub fn is_label_done(&self, date: NaiveDate, label: &str) -> bool {
        let key = task_key(label);
        !key.is_empty() && self.is_done(date, &key)
    }

    pub fn set(&mut self, date: NaiveDate, task_key: &str, done: bool) {
        self.days
            .entry(Self::date_key(date))
            .or_default()
            .insert(task_key.to_string(), done);
    }

    /// Flip the completion flag of a meal label.
    ///
    /// Returns the new state, or `None` when the label has no usable task
    /// key and nothing was recorded.
    pub fn toggle(&mut self, date: NaiveDate, label: &str) -> Option<bool> {
        let key = task_key(label);
        if key.is_empty() {
            tracing::debug!("Label {:?} has no task key, not tracking", label);
            return None;
        }

        let done = !self.is_done(date, &key);
        self.set(date, &key, done);
        tracing::debug!("Task {} on {} set to {}", key, date, done);
        Some(done)
    }

    /// Progress over the distinct task keys of a plan's meals
    pub fn day_progress(&self, plan: &DailyPlan<'_>) -> DayProgress {
        let keys: BTreeSet<String> = plan
            .meals()
            .iter()
            .map(|meal| task_key(meal.as_str()))
            .filter(|key| !key.is_empty())
            .collect();

        let completed = keys
            .iter()
            .filter(|key| self.is_done(plan.date, key))
            .count();

        DayProgress {
            completed,
            total: keys.len(),
        }
    }

    /// Load the log from a file with shared locking
    ///
    /// Returns an empty log if the file doesn't exist.
    /// If the file is corrupted, logs a warning and returns an empty log.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No task log at {:?}, starting empty", path);
            return Ok(Self::default());
        }

        let file = File::open(path)?;

        // Acquire shared lock for reading
        file.lock_shared()?;

        let mut contents = String::new();
        let read = std::io::BufReader::new(&file).read_to_string(&mut contents);
        file.unlock()?;
        read?;

        match serde_json::from_str::<TaskLog>(&contents) {
            Ok(log) => {
                tracing::debug!("Loaded task log from {:?}", path);
                Ok(log)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse task log {:?}: {}. Starting empty.",
                    path,
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Save the log to a file with exclusive locking
    ///
    /// Writes to a temp file in the same directory, syncs it, then renames
    /// it over the original.
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| Error::Other(format!("task log path {:?} has no parent", path)))?;
        std::fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            serde_json::to_writer(&mut writer, self)?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved task log to {:?}", path);
        Ok(())
    }

    /// Load the log, modify it, and save it back
    ///
    /// Concurrent updates are serialized through an exclusive lock on a
    /// `.lock` file next to the log.
    pub fn update<F, T>(path: &Path, f: F) -> Result<T>
    where
        F: FnOnce(&mut TaskLog) -> Result<T>,
    {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path.with_extension("lock"))?;
        lock_file.lock_exclusive()?;

        let result = Self::load(path).and_then(|mut log| {
            let value = f(&mut log)?;
            log.save(path)?;
            Ok(value)
        });

        lock_file.unlock()?;
        result
    }
}
