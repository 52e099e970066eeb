//! Commodity Channel Index (CCI).
//!
//! (typical price - SMA(tp, 20)) / (0.015 * mean absolute deviation), with
//! the deviation taken over the same 20-day window against that window's
//! mean. NaN and blown-up quotients (flat windows) clamp to 0.

use crate::domain::PriceSeries;
use crate::indicators::{clamp_huge, sma_or_zero};

const PERIOD: usize = 20;

pub fn cci(series: &PriceSeries) -> Vec<f64> {
    let len = series.len();
    let mut out = vec![0.0; len];
    if len <= PERIOD {
        return out;
    }

    let high = series.high();
    let low = series.low();
    let close = series.close();
    let tp: Vec<f64> = (0..len)
        .map(|i| (high[i] + low[i] + close[i]) / 3.0)
        .collect();
    let mean = sma_or_zero(&tp, PERIOD);

    for i in 0..=len - PERIOD {
        let window = &tp[i..i + PERIOD];
        let deviation: f64 =
            window.iter().map(|v| (v - mean[i]).abs()).sum::<f64>() / PERIOD as f64;
        out[i] = clamp_huge((tp[i] - mean[i]) / (0.015 * deviation));
    }
    out
}
