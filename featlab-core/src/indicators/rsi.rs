//! Relative Strength Index (RSI).
//!
//! Day-over-day close changes split into gains and losses, Wilder-smoothed
//! (period 14 via the 27-period EMA), then RS = avg_gain / avg_loss and
//! RSI = 100 - 100/(1 + RS). Zero average loss reads 100 — checked before
//! the quotient, so the unseeded tail of an all-gains series reads 100 too.

use crate::domain::PriceSeries;
use crate::indicators::{ema_or_zero, nan_to_zero, WILDER_14};

pub fn rsi(series: &PriceSeries) -> Vec<f64> {
    let close = series.close();
    let len = close.len();
    let mut out = vec![0.0; len];
    if len < 2 {
        return out;
    }

    let n = len - 1;
    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for i in 0..n {
        let change = close[i] - close[i + 1];
        if change > 0.0 {
            gains[i] = change;
        } else {
            losses[i] = -change;
        }
    }

    let avg_gain = ema_or_zero(&gains, WILDER_14);
    let avg_loss = ema_or_zero(&losses, WILDER_14);

    for i in 0..n {
        out[i] = if avg_loss[i] == 0.0 {
            100.0
        } else {
            nan_to_zero(100.0 - 100.0 / (1.0 + avg_gain[i] / avg_loss[i]))
        };
    }
    out
}
