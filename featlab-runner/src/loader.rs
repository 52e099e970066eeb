//! Symbol loading and battery precompute.
//!
//! File reads stay sequential (and report progress per symbol); the
//! indicator battery — the expensive part — fans out across symbols with
//! rayon. Symbols whose files parse to nothing are reported and skipped;
//! an unreadable file aborts the batch.

use featlab_core::data::{ingest, DataError};
use featlab_core::domain::PriceSeries;
use featlab_core::features::SymbolFrame;
use featlab_core::indicators::IndicatorOptions;
use rayon::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("universe is empty — nothing to load")]
    EmptyUniverse,

    #[error(transparent)]
    Data(#[from] DataError),
}

/// Progress callbacks for multi-symbol loads.
pub trait BuildProgress: Send + Sync {
    fn on_symbol_start(&self, _symbol: &str, _index: usize, _total: usize) {}
    fn on_symbol_loaded(&self, _symbol: &str, _days: usize) {}
    fn on_symbol_skipped(&self, _symbol: &str, _reason: &str) {}
    fn on_batch_complete(&self, _loaded: usize, _skipped: usize) {}
}

/// Progress reporter that prints to stdout.
pub struct StdoutProgress;

impl BuildProgress for StdoutProgress {
    fn on_symbol_start(&self, symbol: &str, index: usize, total: usize) {
        println!("[{}/{}] Loading {symbol}...", index + 1, total);
    }

    fn on_symbol_loaded(&self, symbol: &str, days: usize) {
        println!("  OK: {symbol} ({days} trading days)");
    }

    fn on_symbol_skipped(&self, symbol: &str, reason: &str) {
        eprintln!("  SKIP: {symbol}: {reason}");
    }

    fn on_batch_complete(&self, loaded: usize, skipped: usize) {
        println!("\nLoad complete: {loaded} loaded, {skipped} skipped");
    }
}

/// No-op progress for tests and embedding.
pub struct SilentProgress;

impl BuildProgress for SilentProgress {}

/// Load every symbol's CSV into a [`SymbolFrame`], preserving universe order.
pub fn load_frames(
    data_dir: &Path,
    symbols: &[String],
    options: &IndicatorOptions,
    progress: &dyn BuildProgress,
) -> Result<Vec<SymbolFrame>, LoadError> {
    if symbols.is_empty() {
        return Err(LoadError::EmptyUniverse);
    }

    let total = symbols.len();
    let mut loaded: Vec<PriceSeries> = Vec::with_capacity(total);
    let mut skipped = 0usize;

    for (index, symbol) in symbols.iter().enumerate() {
        progress.on_symbol_start(symbol, index, total);
        let series = ingest::load_symbol(data_dir, symbol)?;
        if series.is_empty() {
            progress.on_symbol_skipped(symbol, "no parseable rows");
            skipped += 1;
            continue;
        }
        progress.on_symbol_loaded(symbol, series.len());
        loaded.push(series);
    }

    // Per-symbol battery precompute is embarrassingly parallel: no shared
    // mutable state, and collect() preserves input order.
    let frames: Vec<SymbolFrame> = loaded
        .into_par_iter()
        .map(|series| SymbolFrame::with_options(series, options))
        .collect();

    progress.on_batch_complete(frames.len(), skipped);
    Ok(frames)
}
