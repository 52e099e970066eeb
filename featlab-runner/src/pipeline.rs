//! End-to-end batch build.
//!
//! Per-symbol partial datasets are built concurrently and merged in
//! universe order; the merged row order is identical to a sequential
//! symbol-major build, so downstream consumers see a deterministic
//! dataset regardless of worker scheduling.

use crate::config::{BuildConfig, RunId};
use crate::loader::{load_frames, BuildProgress};
use chrono::NaiveDate;
use featlab_core::data::Universe;
use featlab_core::features::{
    DatasetError, FeatureMatrixBuilder, LearningDataset, SymbolFrame,
};
use rayon::prelude::*;

/// Result of one batch build.
#[derive(Debug)]
pub struct BuildOutcome {
    pub dataset: LearningDataset,
    /// Content hash of the configuration that produced the dataset.
    pub run_id: RunId,
    /// BLAKE3 fingerprint over all rows and labels.
    pub fingerprint: String,
    /// Symbols that contributed frames (after skips).
    pub symbols: usize,
}

/// Assemble a dataset from precomputed frames.
///
/// Builds one partial dataset per symbol in parallel, then merges them in
/// frame order. A width mismatch anywhere aborts the whole build; no
/// partial dataset is returned.
pub fn build_dataset(
    builder: &FeatureMatrixBuilder,
    frames: &[SymbolFrame],
    reference_dates: &[NaiveDate],
) -> Result<LearningDataset, DatasetError> {
    let partials: Vec<LearningDataset> = frames
        .par_iter()
        .map(|frame| builder.build(std::slice::from_ref(frame), reference_dates))
        .collect::<Result<_, _>>()?;

    let mut dataset = LearningDataset::new();
    for partial in partials {
        dataset.merge(partial)?;
    }
    Ok(dataset)
}

/// Run a full configured build: resolve the universe, load frames, build
/// the dataset, fingerprint it.
pub fn run_build(
    config: &BuildConfig,
    progress: &dyn BuildProgress,
) -> Result<BuildOutcome, anyhow::Error> {
    let universe = resolve_universe(config)?;
    let frames = load_frames(
        &config.data_dir,
        universe.symbols(),
        &config.indicators,
        progress,
    )?;

    let builder =
        FeatureMatrixBuilder::new(config.mode.clone(), config.label, config.forward_offset);
    let dataset = build_dataset(&builder, &frames, &config.reference_dates)?;

    Ok(BuildOutcome {
        run_id: config.run_id(),
        fingerprint: dataset.fingerprint(),
        symbols: frames.len(),
        dataset,
    })
}

fn resolve_universe(config: &BuildConfig) -> Result<Universe, anyhow::Error> {
    let universe = if !config.symbols.is_empty() {
        Universe::from_symbols(config.symbols.clone())
    } else if let Some(path) = &config.universe_file {
        Universe::from_file(path)?
    } else {
        Universe::from_symbols(Vec::new())
    };
    Ok(match config.max_symbols {
        Some(max) => universe.truncated(max),
        None => universe,
    })
}
