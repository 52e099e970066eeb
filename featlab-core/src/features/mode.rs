//! Feature and label modes.
//!
//! Two historically separate construction strategies, modeled as variants
//! of one enum behind the same builder interface: offset-normalized raw
//! prices (regression-flavored) and indicator samples
//! (classification-flavored). Both serialize for batch configs.

use crate::indicators::IndicatorKind;
use serde::{Deserialize, Serialize};

/// What goes into a feature vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureMode {
    /// Sample the close at the reference day and at each backward
    /// trading-day offset, dividing everything by the reference-day close
    /// (the reference sample itself is therefore always 1.0).
    OffsetNormalized { offsets: Vec<usize> },

    /// Sample the named battery series at the reference index, in the
    /// caller's order.
    Indicator { kinds: Vec<IndicatorKind> },
}

impl FeatureMode {
    /// Fixed width of every vector this mode produces.
    pub fn width(&self) -> usize {
        match self {
            FeatureMode::OffsetNormalized { offsets } => offsets.len() + 1,
            FeatureMode::Indicator { kinds } => kinds.len(),
        }
    }

    /// How far back into the past the mode reaches from the reference index.
    pub fn max_backward_offset(&self) -> usize {
        match self {
            FeatureMode::OffsetNormalized { offsets } => {
                offsets.iter().copied().max().unwrap_or(0)
            }
            FeatureMode::Indicator { .. } => 0,
        }
    }
}

/// What the label measures, always against the close `forward_offset`
/// trading days after the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LabelMode {
    /// future close / reference close (regression target).
    Ratio,
    /// 1.0 if that ratio is >= 1, else 0.0.
    Binary,
}
