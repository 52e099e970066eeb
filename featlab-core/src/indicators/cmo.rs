//! Chande Momentum Oscillator (CMO).
//!
//! (SMA(up, 9) - SMA(down, 9)) / (SMA(up, 9) + SMA(down, 9)) over the
//! gain/loss split of day-over-day close changes. NaN and blown-up
//! quotients clamp to 0.

use crate::domain::PriceSeries;
use crate::indicators::{clamp_huge, sma_or_zero};

const PERIOD: usize = 9;

pub fn cmo(series: &PriceSeries) -> Vec<f64> {
    let close = series.close();
    let len = close.len();
    let mut out = vec![0.0; len];
    if len < 2 {
        return out;
    }

    let n = len - 1;
    let mut up = vec![0.0; n];
    let mut down = vec![0.0; n];
    for i in 0..n {
        let change = close[i] - close[i + 1];
        if change > 0.0 {
            up[i] = change;
        } else {
            down[i] = -change;
        }
    }

    let up_mean = sma_or_zero(&up, PERIOD);
    let down_mean = sma_or_zero(&down, PERIOD);

    for i in 0..n {
        out[i] = clamp_huge((up_mean[i] - down_mean[i]) / (up_mean[i] + down_mean[i]));
    }
    out
}
