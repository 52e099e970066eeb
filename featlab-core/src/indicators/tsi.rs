//! True Strength Index (TSI).
//!
//! Double EMA (long 25, short 13) of day-over-day momentum divided by the
//! same double smoothing of absolute momentum. NaN quotients map to 0.

use crate::domain::PriceSeries;
use crate::indicators::{ema_or_zero, nan_to_zero};

const LONG: usize = 25;
const SHORT: usize = 13;

pub fn tsi(series: &PriceSeries) -> Vec<f64> {
    let close = series.close();
    let len = close.len();
    let mut out = vec![0.0; len];
    if len < 2 {
        return out;
    }

    let n = len - 1;
    let mut momentum = vec![0.0; n];
    let mut abs_momentum = vec![0.0; n];
    for i in 0..n {
        let m = close[i] - close[i + 1];
        momentum[i] = m;
        abs_momentum[i] = m.abs();
    }

    let num = ema_or_zero(&ema_or_zero(&momentum, LONG), SHORT);
    let den = ema_or_zero(&ema_or_zero(&abs_momentum, LONG), SHORT);

    for i in 0..n {
        out[i] = nan_to_zero(num[i] / den[i]);
    }
    out
}
