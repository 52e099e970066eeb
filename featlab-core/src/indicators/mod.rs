//! The indicator battery.
//!
//! Thirteen named series derived from one PriceSeries, all index-aligned
//! with it (short windows are left at the zero-fill default rather than
//! truncated). The battery is computed exactly once per symbol by the pure
//! [`compute_indicators`] function; the resulting [`IndicatorSet`] is never
//! mutated afterwards.
//!
//! Numeric edge policy, applied per the table in each module: a division
//! that yields NaN maps to 0, and several calculators additionally clamp
//! magnitudes at or above 1e300 back to 0 as a guard against near-zero
//! denominators.

pub mod adx;
pub mod cci;
pub mod cmo;
pub mod mfi;
pub mod natr;
pub mod ppo;
pub mod roc;
pub mod rsi;
pub mod smooth;
pub mod stoch;
pub mod tsi;
pub mod uo;

pub use mfi::MfiZeroFlow;
pub use smooth::{ema, sma, SmoothError};

use crate::domain::PriceSeries;
use serde::{Deserialize, Serialize};

/// Wilder smoothing with period 14, realized as a 27-period EMA
/// (N_wilder ≈ (N_ema − 1) / 2, so alpha = 1/14).
pub(crate) const WILDER_14: usize = 27;

/// Magnitude at or above which a quotient is treated as a blown-up
/// division and clamped to zero. Doubles as the MFI zero-flow sentinel.
pub(crate) const HUGE: f64 = 1e300;

pub(crate) fn nan_to_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

pub(crate) fn clamp_huge(value: f64) -> f64 {
    if value.is_nan() || value.abs() >= HUGE {
        0.0
    } else {
        value
    }
}

/// Run a smoothing primitive, degrading an out-of-range period to the
/// zero-fill default so battery outputs stay index-aligned.
pub(crate) fn ema_or_zero(series: &[f64], period: usize) -> Vec<f64> {
    smooth::ema(series, period).unwrap_or_else(|_| vec![0.0; series.len()])
}

pub(crate) fn sma_or_zero(series: &[f64], period: usize) -> Vec<f64> {
    smooth::sma(series, period).unwrap_or_else(|_| vec![0.0; series.len()])
}

/// Extend a derived array (typically one element short, missing the oldest
/// day) back to full series length with the zero-fill default.
pub(crate) fn pad_tail(mut values: Vec<f64>, len: usize) -> Vec<f64> {
    values.resize(len, 0.0);
    values
}

/// The closed set of battery series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorKind {
    Rsi,
    Tsi,
    Ppo,
    DiPlus,
    DiMinus,
    Adx,
    Cci,
    Cmo,
    Mfi,
    Natr,
    Roc,
    Stoch,
    Uo,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 13] = [
        IndicatorKind::Rsi,
        IndicatorKind::Tsi,
        IndicatorKind::Ppo,
        IndicatorKind::DiPlus,
        IndicatorKind::DiMinus,
        IndicatorKind::Adx,
        IndicatorKind::Cci,
        IndicatorKind::Cmo,
        IndicatorKind::Mfi,
        IndicatorKind::Natr,
        IndicatorKind::Roc,
        IndicatorKind::Stoch,
        IndicatorKind::Uo,
    ];

    /// Stable name including the window(s), e.g. "rsi_14".
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Rsi => "rsi_14",
            IndicatorKind::Tsi => "tsi_25_13",
            IndicatorKind::Ppo => "ppo_12_26",
            IndicatorKind::DiPlus => "di_plus_14",
            IndicatorKind::DiMinus => "di_minus_14",
            IndicatorKind::Adx => "adx_14",
            IndicatorKind::Cci => "cci_20",
            IndicatorKind::Cmo => "cmo_9",
            IndicatorKind::Mfi => "mfi_14",
            IndicatorKind::Natr => "natr_14",
            IndicatorKind::Roc => "roc_12",
            IndicatorKind::Stoch => "stoch_14_3",
            IndicatorKind::Uo => "uo_7_14_28",
        }
    }
}

/// Knobs that change battery semantics. Defaults reproduce the legacy
/// behavior; see [`MfiZeroFlow`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorOptions {
    #[serde(default)]
    pub mfi_zero_flow: MfiZeroFlow,
}

/// All thirteen battery series for one symbol, each exactly as long as the
/// PriceSeries they were computed from.
#[derive(Debug, Clone)]
pub struct IndicatorSet {
    len: usize,
    rsi: Vec<f64>,
    tsi: Vec<f64>,
    ppo: Vec<f64>,
    di_plus: Vec<f64>,
    di_minus: Vec<f64>,
    adx: Vec<f64>,
    cci: Vec<f64>,
    cmo: Vec<f64>,
    mfi: Vec<f64>,
    natr: Vec<f64>,
    roc: Vec<f64>,
    stoch: Vec<f64>,
    uo: Vec<f64>,
}

impl IndicatorSet {
    /// Length shared by every series (equal to the source PriceSeries).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total mapping from kind to series.
    pub fn series(&self, kind: IndicatorKind) -> &[f64] {
        match kind {
            IndicatorKind::Rsi => &self.rsi,
            IndicatorKind::Tsi => &self.tsi,
            IndicatorKind::Ppo => &self.ppo,
            IndicatorKind::DiPlus => &self.di_plus,
            IndicatorKind::DiMinus => &self.di_minus,
            IndicatorKind::Adx => &self.adx,
            IndicatorKind::Cci => &self.cci,
            IndicatorKind::Cmo => &self.cmo,
            IndicatorKind::Mfi => &self.mfi,
            IndicatorKind::Natr => &self.natr,
            IndicatorKind::Roc => &self.roc,
            IndicatorKind::Stoch => &self.stoch,
            IndicatorKind::Uo => &self.uo,
        }
    }

    /// Value of one series at a specific index, if in range.
    pub fn value(&self, kind: IndicatorKind, index: usize) -> Option<f64> {
        self.series(kind).get(index).copied()
    }
}

/// Compute the full battery with default options.
pub fn compute_indicators(series: &PriceSeries) -> IndicatorSet {
    compute_indicators_with(series, &IndicatorOptions::default())
}

/// Compute the full battery. Pure: the input series is untouched and equal
/// inputs produce equal outputs.
pub fn compute_indicators_with(series: &PriceSeries, options: &IndicatorOptions) -> IndicatorSet {
    let adx::DirectionalSystem {
        di_plus,
        di_minus,
        adx,
    } = adx::directional_system(series);
    let stoch = stoch::stoch(series);

    IndicatorSet {
        len: series.len(),
        rsi: rsi::rsi(series),
        tsi: tsi::tsi(series),
        ppo: ppo::ppo(series),
        di_plus,
        di_minus,
        adx,
        cci: cci::cci(series),
        cmo: cmo::cmo(series),
        mfi: mfi::mfi(series, options.mfi_zero_flow),
        natr: natr::natr(series),
        roc: roc::roc(series),
        stoch: stoch.percent_d,
        uo: uo::uo(series),
    }
}

/// Create a synthetic series from close prices for testing (index 0 newest).
///
/// Generates plausible OHLV around each close: open = next older close (or
/// the close itself for the oldest bar), high/low bracket both by 1.0,
/// volume = 1000.
#[cfg(test)]
pub(crate) fn make_series(closes: &[f64]) -> PriceSeries {
    let data: Vec<(f64, f64, f64, f64)> = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i + 1 < closes.len() {
                closes[i + 1]
            } else {
                close
            };
            (open, open.max(close) + 1.0, open.min(close) - 1.0, close)
        })
        .collect();
    make_ohlc_series(&data)
}

/// Create a synthetic series from (open, high, low, close) tuples, index 0
/// newest, with dates counting back one day per index.
#[cfg(test)]
pub(crate) fn make_ohlc_series(data: &[(f64, f64, f64, f64)]) -> PriceSeries {
    use crate::domain::RawRow;
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
    let rows: Vec<RawRow> = data
        .iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| RawRow {
            date: base_date - chrono::Duration::days(i as i64),
            open,
            high,
            low,
            close,
            volume: 1000.0,
            adj_close: close,
        })
        .collect();
    PriceSeries::from_rows("TEST", rows)
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub(crate) fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub(crate) const DEFAULT_EPSILON: f64 = 1e-10;
