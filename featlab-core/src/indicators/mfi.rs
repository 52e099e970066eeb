//! Money Flow Index (MFI).
//!
//! Fourteen-day summed positive vs negative money flow (typical price x
//! volume, signed by the typical-price direction), mapped through
//! 100 - 100/(1 + ratio).
//!
//! When negative flow is zero the legacy behavior forces the ratio to a
//! large sentinel and then clamps large magnitudes back to zero, so "no
//! selling pressure" reads 0 rather than the intuitive ~100. That literal
//! behavior is kept behind [`MfiZeroFlow::ClampToZero`] (the default);
//! [`MfiZeroFlow::Saturate`] lets the sentinel through so MFI reads ~100.

use crate::domain::PriceSeries;
use crate::indicators::{clamp_huge, nan_to_zero, HUGE};
use serde::{Deserialize, Serialize};

const PERIOD: usize = 14;

/// Policy for the zero-negative-flow ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MfiZeroFlow {
    /// Legacy behavior: sentinel ratio, then huge-clamp, so MFI reads 0.
    #[default]
    ClampToZero,
    /// Sentinel survives → MFI saturates at ~100.
    Saturate,
}

pub fn mfi(series: &PriceSeries, zero_flow: MfiZeroFlow) -> Vec<f64> {
    let len = series.len();
    let mut out = vec![0.0; len];
    if len < 2 {
        return out;
    }

    let high = series.high();
    let low = series.low();
    let close = series.close();
    let volume = series.volume();

    let tp: Vec<f64> = (0..len)
        .map(|i| (high[i] + low[i] + close[i]) / 3.0)
        .collect();

    let n = len - 1;
    let mut positive = vec![0.0; n];
    let mut negative = vec![0.0; n];
    for i in 0..n {
        let flow = tp[i] * volume[i];
        if tp[i] > tp[i + 1] {
            positive[i] = flow;
        } else if tp[i] < tp[i + 1] {
            negative[i] = flow;
        }
    }

    if n < PERIOD {
        return out;
    }

    let mut pos_sum: f64 = positive[n - PERIOD..].iter().sum();
    let mut neg_sum: f64 = negative[n - PERIOD..].iter().sum();
    let mut i = n - PERIOD;
    out[i] = mfi_value(pos_sum, neg_sum, zero_flow);
    while i > 0 {
        i -= 1;
        pos_sum += positive[i] - positive[i + PERIOD];
        neg_sum += negative[i] - negative[i + PERIOD];
        out[i] = mfi_value(pos_sum, neg_sum, zero_flow);
    }
    out
}

fn mfi_value(pos: f64, neg: f64, zero_flow: MfiZeroFlow) -> f64 {
    let ratio = if neg == 0.0 { HUGE } else { pos / neg };
    let ratio = match zero_flow {
        MfiZeroFlow::ClampToZero => clamp_huge(ratio),
        MfiZeroFlow::Saturate => ratio,
    };
    nan_to_zero(100.0 - 100.0 / (1.0 + ratio))
}
