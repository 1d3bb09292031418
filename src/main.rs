// src/main.rs
mod batch;
mod extractors;
mod profile;
mod ranking;
mod storage;
mod utils;

use batch::PipelineConfig;
use chrono::Datelike;
use clap::Parser;
use ranking::{RankedCandidate, RankingCriteria};
use std::path::PathBuf;
use storage::SnapshotStore;
use utils::AppError;

/// Command Line Interface for the consultant CV ranking pipeline
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing CV documents (pdf, docx, txt)
    #[arg(short, long, default_value = "./cv")]
    cv_dir: PathBuf,

    /// Candidate table snapshot path (default: consultant_metadata.csv inside the CV directory)
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Re-run extraction even if a snapshot exists
    #[arg(long)]
    rebuild: bool,

    /// Required skills, comma-separated (e.g. "SQL, Python"); enables ranking
    #[arg(long)]
    skills: Option<String>,

    /// Minimum experience in years, applied as a pre-filter when nonzero
    #[arg(long, default_value_t = 0)]
    min_experience: u32,

    /// Weight for the skills match component, in [0, 1]
    #[arg(long, default_value_t = 0.7)]
    weight_skills: f64,

    /// Weight for the years-of-experience component, in [0, 1]
    #[arg(long, default_value_t = 0.3)]
    weight_experience: f64,

    /// Number of ranked results to display
    #[arg(long, default_value_t = 3)]
    top: usize,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting with args: {:?}", args);

    for (flag, weight) in [
        ("--weight-skills", args.weight_skills),
        ("--weight-experience", args.weight_experience),
    ] {
        if !(0.0..=1.0).contains(&weight) {
            return Err(AppError::Config(format!(
                "{} must be within [0, 1], got {}",
                flag, weight
            )));
        }
    }

    // 3. Build the pipeline configuration. "Present" ranges resolve against
    //    the current calendar year; the core itself only sees the number.
    let snapshot_path = args
        .snapshot
        .clone()
        .unwrap_or_else(|| args.cv_dir.join("consultant_metadata.csv"));
    let config = PipelineConfig {
        source_dir: args.cv_dir.clone(),
        snapshot_path,
        reference_year: chrono::Local::now().year(),
    };

    // 4. Load the snapshot if we have one, otherwise extract from scratch
    let store = SnapshotStore::new(&config.snapshot_path);
    let table = if store.exists() && !args.rebuild {
        tracing::info!("Loading existing snapshot: {}", config.snapshot_path.display());
        store.load()?
    } else {
        tracing::info!("Generating metadata from CVs in {}", config.source_dir.display());
        let outcome = batch::process_directory(&config)?;
        if !outcome.failures.is_empty() {
            tracing::warn!(
                "{} of {} documents failed to process",
                outcome.failures.len(),
                outcome.failures.len() + outcome.table.len()
            );
        }
        if !outcome.table.is_empty() {
            store.save(&outcome.table)?;
        }
        outcome.table
    };

    // 5. Rank against the caller's criteria, if any were given
    let Some(raw_skills) = &args.skills else {
        tracing::info!("No required skills given; extraction finished ({} records)", table.len());
        return Ok(());
    };

    let criteria = RankingCriteria::new(
        raw_skills,
        args.min_experience,
        args.weight_skills,
        args.weight_experience,
        args.top,
    );

    // The minimum-experience threshold is an explicit pre-filter, never
    // part of the scoring formula.
    let table = if criteria.min_experience > 0 {
        table.with_min_experience(criteria.min_experience)
    } else {
        table
    };

    match ranking::rank(&table, &criteria) {
        Ok(ranked) => print!("{}", render_ranked_table(&ranked, args.top)),
        Err(e) => tracing::warn!("No consultant data available: {}", e),
    }

    Ok(())
}

/// Renders the ranked rows as a plain table. The header names the
/// requested result count, even when fewer candidates qualified.
fn render_ranked_table(ranked: &[RankedCandidate], requested: usize) -> String {
    let mut out = format!("Top {} consultants for your project\n", requested);
    out.push_str(&format!(
        "{:<25} {:<30} {:<20} {:>7}\n",
        "Name", "Email", "Phone", "Score"
    ));
    for candidate in ranked {
        out.push_str(&format!(
            "{:<25} {:<30} {:<20} {:>7.2}\n",
            candidate.record.name,
            candidate.record.email,
            candidate.record.phone,
            candidate.score
        ));
    }
    out
}
