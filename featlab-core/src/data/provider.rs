//! Data provider trait and structured error types.
//!
//! Acquisition of raw quote data (network download, cache refresh) lives
//! outside this crate. The trait is the seam: anything that can hand back
//! parsed rows for a symbol can feed the pipeline, and tests mock it
//! without touching the filesystem.

use crate::domain::RawRow;
use thiserror::Error;

/// Structured error types for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("data error: {0}")]
    Other(String),
}

/// Trait for row sources (CSV directories, download layers, test fixtures).
///
/// Implementations return rows in arbitrary order; `PriceSeries::from_rows`
/// owns ordering and adjustment.
pub trait DataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch all available daily rows for a symbol.
    fn fetch(&self, symbol: &str) -> Result<Vec<RawRow>, DataError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceSeries;
    use chrono::NaiveDate;

    struct FixtureProvider;

    impl DataProvider for FixtureProvider {
        fn name(&self) -> &str {
            "fixture"
        }

        fn fetch(&self, symbol: &str) -> Result<Vec<RawRow>, DataError> {
            if symbol != "SPY" {
                return Err(DataError::SymbolNotFound {
                    symbol: symbol.to_string(),
                });
            }
            Ok(vec![RawRow {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                open: 100.0,
                high: 102.0,
                low: 99.0,
                close: 101.0,
                volume: 1000.0,
                adj_close: 101.0,
            }])
        }
    }

    #[test]
    fn provider_feeds_series_construction() {
        let provider = FixtureProvider;
        let rows = provider.fetch("SPY").unwrap();
        let series = PriceSeries::from_rows("SPY", rows);
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn unknown_symbol_is_a_structured_error() {
        let provider = FixtureProvider;
        match provider.fetch("NOPE") {
            Err(DataError::SymbolNotFound { symbol }) => assert_eq!(symbol, "NOPE"),
            other => panic!("expected SymbolNotFound, got {other:?}"),
        }
    }
}
