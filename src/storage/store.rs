use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::ExpenseRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but does not hold a valid expense list.
    #[error("expense file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to access expense file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File-backed store for the expense ledger.
/// The whole ledger is read on load and rewritten on save; there is no
/// incremental update path.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full ledger in canonical (insertion) order.
    /// A missing file reads as an empty ledger. A file that exists but
    /// fails to parse is reported as corrupt rather than silently replaced,
    /// so the next save cannot destroy whatever is in it.
    pub fn load(&self) -> Result<Vec<ExpenseRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Overwrite the ledger with the given records.
    /// Writes go to a sibling temp file which is flushed, synced, and then
    /// renamed over the original, so a crash mid-write leaves the previous
    /// file intact.
    pub fn save(&self, records: &[ExpenseRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let temp_path = self.path.with_extension("json.tmp");

        let file = File::create(&temp_path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)
            .map_err(|e| self.io_error(std::io::Error::other(e)))?;
        writer.flush().map_err(|e| self.io_error(e))?;

        // Sync before rename so the rename never publishes a partial file
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| self.io_error(e))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            self.io_error(e)
        })
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
