//! Implements a JSON file backed budget store with atomic writes.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use crate::{Error, budget::Budgets, stores::BudgetStore};

/// Stores the budget mapping as a single JSON object in a file on disk.
///
/// Saves go through a temp-file-then-rename so the file is either fully
/// written or left untouched.
#[derive(Debug, Clone)]
pub struct JsonBudgetStore {
    path: PathBuf,
}

impl JsonBudgetStore {
    /// Create a new store that persists budgets at `path`.
    ///
    /// The file is not created until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BudgetStore for JsonBudgetStore {
    /// Read the saved budget mapping from disk.
    ///
    /// Returns the default mapping if the file does not exist yet.
    ///
    /// # Errors
    /// Returns an [Error::BudgetStoreError] if the file cannot be opened
    /// or does not parse as a budget mapping.
    fn load(&self) -> Result<Budgets, Error> {
        if !self.path.exists() {
            return Ok(Budgets::default());
        }

        let file = File::open(&self.path).map_err(|error| {
            Error::BudgetStoreError(format!(
                "failed to open {}: {}",
                self.path.display(),
                error
            ))
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|error| {
            Error::BudgetStoreError(format!(
                "failed to parse {}: {}",
                self.path.display(),
                error
            ))
        })
    }

    /// Overwrite the stored budget mapping.
    ///
    /// The new mapping is written to a temp file in the same directory and
    /// renamed over the old file, so a crash mid-save cannot corrupt the
    /// stored budgets.
    ///
    /// # Errors
    /// Returns an [Error::BudgetStoreError] if any filesystem operation
    /// fails.
    fn save(&mut self, budgets: &Budgets) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|error| {
                Error::BudgetStoreError(format!(
                    "failed to create directory {}: {}",
                    parent.display(),
                    error
                ))
            })?;
        }

        // The temp file must live in the same directory for the rename to
        // be atomic.
        let temp_path = self.path.with_extension("json.tmp");

        let file = File::create(&temp_path).map_err(|error| {
            Error::BudgetStoreError(format!("failed to create temp file: {}", error))
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, budgets).map_err(|error| {
            Error::BudgetStoreError(format!("failed to serialize budgets: {}", error))
        })?;

        writer
            .flush()
            .map_err(|error| Error::BudgetStoreError(format!("failed to flush data: {}", error)))?;

        writer.get_ref().sync_all().map_err(|error| {
            Error::BudgetStoreError(format!("failed to sync data: {}", error))
        })?;

        fs::rename(&temp_path, &self.path).map_err(|error| {
            let _ = fs::remove_file(&temp_path);
            Error::BudgetStoreError(format!("failed to rename temp file: {}", error))
        })?;

        Ok(())
    }
}
