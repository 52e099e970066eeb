//! Serializable build configuration.

use chrono::NaiveDate;
use featlab_core::features::{FeatureMode, LabelMode};
use featlab_core::indicators::IndicatorOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Unique identifier for a build (content-addressable hash).
pub type RunId = String;

/// Everything needed to reproduce one dataset build:
/// where the data lives, which symbols, which reference dates, and how
/// feature vectors and labels are formed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildConfig {
    /// Directory holding one `<symbol>.csv` per symbol.
    pub data_dir: PathBuf,

    /// Plain-text symbol list, one per line. Ignored when `symbols` is
    /// non-empty.
    pub universe_file: Option<PathBuf>,

    /// Inline symbol list (takes precedence over `universe_file`).
    #[serde(default)]
    pub symbols: Vec<String>,

    /// Cap on how many symbols to load, applied after universe resolution.
    pub max_symbols: Option<usize>,

    /// Anchor dates; each (symbol, date) pair yields at most one row.
    pub reference_dates: Vec<NaiveDate>,

    /// How feature vectors are formed.
    pub mode: FeatureMode,

    /// How labels are formed.
    pub label: LabelMode,

    /// Trading days between the reference day and the label day.
    pub forward_offset: usize,

    /// Battery semantics knobs (MFI zero-flow policy).
    #[serde(default)]
    pub indicators: IndicatorOptions,
}

impl BuildConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&text)?)
    }

    /// Deterministic hash ID for this configuration. Two builds with
    /// identical configs share a RunId and can share cached results.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_string(self).expect("BuildConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use featlab_core::indicators::IndicatorKind;

    const SAMPLE: &str = r#"
        data_dir = "data"
        universe_file = "stock_symbols.txt"
        max_symbols = 10
        reference_dates = ["1984-01-03", "1985-01-02"]
        forward_offset = 50
        label = "RATIO"

        [mode]
        type = "OFFSET_NORMALIZED"
        offsets = [50, 100, 150]
    "#;

    #[test]
    fn parses_offset_mode_config() {
        let config = BuildConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.max_symbols, Some(10));
        assert_eq!(config.reference_dates.len(), 2);
        assert_eq!(config.forward_offset, 50);
        assert_eq!(
            config.mode,
            FeatureMode::OffsetNormalized {
                offsets: vec![50, 100, 150]
            }
        );
        assert_eq!(config.label, LabelMode::Ratio);
    }

    #[test]
    fn parses_indicator_mode_config() {
        let text = r#"
            data_dir = "data"
            reference_dates = ["2020-06-01"]
            forward_offset = 5
            label = "BINARY"

            [mode]
            type = "INDICATOR"
            kinds = ["RSI", "STOCH", "UO"]
        "#;
        let config = BuildConfig::from_toml(text).unwrap();
        assert_eq!(
            config.mode,
            FeatureMode::Indicator {
                kinds: vec![IndicatorKind::Rsi, IndicatorKind::Stoch, IndicatorKind::Uo]
            }
        );
        assert_eq!(config.label, LabelMode::Binary);
        // Defaults apply when omitted.
        assert!(config.symbols.is_empty());
        assert_eq!(config.indicators, IndicatorOptions::default());
    }

    #[test]
    fn run_id_is_content_addressed() {
        let a = BuildConfig::from_toml(SAMPLE).unwrap();
        let b = BuildConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(a.run_id(), b.run_id());

        let mut c = BuildConfig::from_toml(SAMPLE).unwrap();
        c.forward_offset = 49;
        assert_ne!(a.run_id(), c.run_id());
    }
}
