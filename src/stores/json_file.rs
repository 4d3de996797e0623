//! Implements an expense store backed by a single JSON file.

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{Error, expense::Expense, stores::ExpenseStore};

/// Stores the expenses as a pretty-printed JSON array in one file.
///
/// The file is read in full on every [load](ExpenseStore::load) and replaced in
/// full on every [save](ExpenseStore::save). Saving writes a sibling `.tmp`
/// file first and renames it over the original, so a crash mid-write leaves
/// either the old or the new collection on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`.
    ///
    /// The file does not need to exist yet, it is created on the first save.
    /// The parent directory must exist by then.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the JSON file holding the expenses.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temporary_path(&self) -> Option<PathBuf> {
        let mut file_name: OsString = self.path.file_name()?.to_owned();
        file_name.push(".tmp");

        Some(self.path.with_file_name(file_name))
    }
}

impl ExpenseStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Expense>, Error> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    "{} does not exist yet, starting with no expenses",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(error) => {
                tracing::error!("Could not read {}: {error}", self.path.display());
                return Err(Error::StorageRead(error.to_string()));
            }
        };

        let expenses: Vec<Expense> = serde_json::from_slice(&contents).map_err(|error| {
            tracing::error!("{} is not a valid expense list: {error}", self.path.display());
            Error::StorageCorrupt(error.to_string())
        })?;

        tracing::debug!(
            "Loaded {} expenses from {}",
            expenses.len(),
            self.path.display()
        );

        Ok(expenses)
    }

    fn save(&mut self, expenses: &[Expense]) -> Result<(), Error> {
        let json = serde_json::to_vec_pretty(expenses)
            .map_err(|error| Error::StorageWrite(error.to_string()))?;

        let temporary_path = self.temporary_path().ok_or_else(|| {
            Error::StorageWrite(format!("{} is not a file path", self.path.display()))
        })?;

        if let Err(error) = write_and_replace(&temporary_path, &self.path, &json) {
            tracing::error!("Could not save expenses to {}: {error}", self.path.display());
            // The original file is still intact, only the partial copy needs cleaning up.
            match fs::remove_file(&temporary_path) {
                Err(cleanup_error) if cleanup_error.kind() != io::ErrorKind::NotFound => {
                    tracing::warn!(
                        "Could not remove {}: {cleanup_error}",
                        temporary_path.display()
                    );
                }
                _ => {}
            }
            return Err(Error::StorageWrite(error.to_string()));
        }

        tracing::debug!(
            "Saved {} expenses to {}",
            expenses.len(),
            self.path.display()
        );

        Ok(())
    }
}

fn write_and_replace(temporary_path: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = File::create(temporary_path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    fs::rename(temporary_path, path)
}
