//! Normalized Average True Range (NATR), plus the shared true-range series.
//!
//! NATR = 100 * WilderEMA(TR, 14) / close, with the Wilder smoothing
//! realized as the 27-period EMA.

use crate::domain::PriceSeries;
use crate::indicators::{ema_or_zero, nan_to_zero, WILDER_14};

/// True range per day, newest first: max(high, prev_close) - min(low, prev_close).
///
/// The previous close sits at index i+1 in the reverse-chronological
/// convention, so the result is one element shorter than the series (the
/// oldest day has no predecessor).
pub(crate) fn true_range(series: &PriceSeries) -> Vec<f64> {
    let len = series.len();
    if len < 2 {
        return Vec::new();
    }
    let high = series.high();
    let low = series.low();
    let close = series.close();

    (0..len - 1)
        .map(|i| {
            let prev_close = close[i + 1];
            high[i].max(prev_close) - low[i].min(prev_close)
        })
        .collect()
}

pub fn natr(series: &PriceSeries) -> Vec<f64> {
    let close = series.close();
    let len = close.len();
    let mut out = vec![0.0; len];

    let smoothed = ema_or_zero(&true_range(series), WILDER_14);
    for (i, &tr) in smoothed.iter().enumerate() {
        out[i] = nan_to_zero(100.0 * tr / close[i]);
    }
    out
}
