// src/storage/mod.rs
use crate::profile::{CandidateTable, ProfileRecord};
use crate::utils::error::StorageError;
use std::path::{Path, PathBuf};

/// Reads and writes the candidate table snapshot as a CSV file with
/// headers. A loaded snapshot stands in for a full re-extraction run.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Writes the table, one row per record, creating parent directories
    /// as needed.
    pub fn save(&self, table: &CandidateTable) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        for record in table.records() {
            writer
                .serialize(record)
                .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        }
        writer
            .flush()
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved {} records to {}", table.len(), self.path.display());
        Ok(())
    }

    /// Loads a previously saved snapshot back into a CandidateTable,
    /// preserving row order.
    pub fn load(&self) -> Result<CandidateTable, StorageError> {
        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        let mut records = Vec::new();
        for row in reader.deserialize::<ProfileRecord>() {
            let record = row.map_err(|e| StorageError::SerializationError(e.to_string()))?;
            records.push(record);
        }

        tracing::info!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(CandidateTable::from_records(records))
    }
}
