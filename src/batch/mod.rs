// src/batch/mod.rs

use crate::extractors::extract_text;
use crate::profile::{self, experience, CandidateTable, ProfileRecord};
use crate::utils::error::{AppError, ExtractError};
use std::fs;
use std::path::{Path, PathBuf};

/// Explicit pipeline configuration, passed into the core instead of
/// hardcoded filesystem locations.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory of CV documents to process.
    pub source_dir: PathBuf,
    /// Where the candidate table snapshot lives.
    pub snapshot_path: PathBuf,
    /// Year used to resolve "Present" date ranges. Callers wanting
    /// wall-clock behavior supply the current year at the boundary.
    pub reference_year: i32,
}

/// A document that could not be processed: its identifier plus the error.
/// Collected by the batch driver so one bad CV never aborts the run.
#[derive(Debug)]
pub struct BatchFailure {
    pub file: String,
    pub error: ExtractError,
}

/// The result of one batch run. An empty table is a valid outcome,
/// distinct from a directory-level failure.
#[derive(Debug)]
pub struct BatchOutcome {
    pub table: CandidateTable,
    pub failures: Vec<BatchFailure>,
}

/// Processes every document in the source directory sequentially:
/// extract text, parse fields, derive years of experience. Hidden entries
/// and non-regular files are skipped outright; per-document failures are
/// recorded and the batch moves on.
pub fn process_directory(config: &PipelineConfig) -> Result<BatchOutcome, AppError> {
    tracing::info!("Processing CV directory: {}", config.source_dir.display());

    let mut table = CandidateTable::new();
    let mut failures = Vec::new();

    for entry in fs::read_dir(&config.source_dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();

        if file_name.starts_with('.') {
            tracing::debug!("Skipping hidden entry: {}", file_name);
            continue;
        }
        if !path.is_file() {
            tracing::debug!("Skipping non-file entry: {}", file_name);
            continue;
        }

        match process_document(&path, &file_name, config.reference_year) {
            Ok(record) => {
                tracing::info!("Processed {}: {}", file_name, record.name);
                table.push(record);
            }
            Err(error) => {
                tracing::error!("Error processing {}: {}", file_name, error);
                failures.push(BatchFailure { file: file_name, error });
            }
        }
    }

    if table.is_empty() {
        tracing::warn!("No metadata extracted. Check the CVs and extraction logic.");
    } else {
        tracing::info!(
            "Batch finished. Records: {}, failures: {}",
            table.len(),
            failures.len()
        );
    }

    Ok(BatchOutcome { table, failures })
}

/// The per-document step: extraction is the only fallible stage, parsing
/// and the experience sum are total.
fn process_document(
    path: &Path,
    file_name: &str,
    reference_year: i32,
) -> Result<ProfileRecord, ExtractError> {
    let raw_text = extract_text(path)?;
    let mut record = profile::parse_profile(&raw_text, file_name);
    record.years_of_experience = experience::total_years(&raw_text, reference_year);
    Ok(record)
}
