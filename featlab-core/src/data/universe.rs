//! Universe — the plain-text symbol list consumed verbatim.
//!
//! One symbol per line; blank lines and `#` comments are ignored. The list
//! order is preserved because downstream row order (and therefore dataset
//! fingerprints) follows it.

use crate::data::provider::DataError;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    symbols: Vec<String>,
}

impl Universe {
    pub fn from_file(path: &Path) -> Result<Self, DataError> {
        let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    pub fn from_text(text: &str) -> Self {
        let symbols = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();
        Self { symbols }
    }

    pub fn from_symbols(symbols: Vec<String>) -> Self {
        Self { symbols }
    }

    /// Keep at most the first `max` symbols.
    pub fn truncated(mut self, max: usize) -> Self {
        self.symbols.truncate(max);
        self
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
