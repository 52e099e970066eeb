//! Ultimate Oscillator (UO).
//!
//! Buying pressure BP = close - true_low and the true range TR, summed over
//! 7/14/28-day windows and combined as
//! 100 * (4*BP7/TR7 + 2*BP14/TR14 + BP28/TR28) / 7. NaN quotients map to 0.

use crate::domain::PriceSeries;
use crate::indicators::nan_to_zero;

const SHORT: usize = 7;
const MID: usize = 14;
const LONG: usize = 28;

pub fn uo(series: &PriceSeries) -> Vec<f64> {
    let len = series.len();
    let mut out = vec![0.0; len];
    if len < 2 {
        return out;
    }

    let high = series.high();
    let low = series.low();
    let close = series.close();

    let n = len - 1;
    let mut bp = vec![0.0; n];
    let mut tr = vec![0.0; n];
    for i in 0..n {
        let prev_close = close[i + 1];
        let true_low = low[i].min(prev_close);
        let true_high = high[i].max(prev_close);
        bp[i] = close[i] - true_low;
        tr[i] = true_high - true_low;
    }

    if n < LONG {
        return out;
    }

    for i in 0..=n - LONG {
        let ratio = |window: usize| -> f64 {
            let pressure: f64 = bp[i..i + window].iter().sum();
            let range: f64 = tr[i..i + window].iter().sum();
            pressure / range
        };
        out[i] = nan_to_zero(
            100.0 * (4.0 * ratio(SHORT) + 2.0 * ratio(MID) + ratio(LONG)) / 7.0,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_ohlc_series};

    #[test]
    fn close_at_true_high_reads_100() {
        // Every day closes at its high and opens at the previous close, so
        // BP == TR for each day and all three ratios are exactly 1.
        let bars: Vec<(f64, f64, f64, f64)> = (0..40)
            .map(|i| {
                let prev_close = 100.0 + (40 - i - 1) as f64;
                let close = prev_close + 1.0;
                (prev_close, close, prev_close, close)
            })
            .collect();
        let series = make_ohlc_series(&bars);
        let out = uo(&series);
        assert_approx(out[0], 100.0, 1e-9);
        assert_approx(out[5], 100.0, 1e-9);
    }

    #[test]
    fn close_at_true_low_reads_0() {
        let bars: Vec<(f64, f64, f64, f64)> = (0..40)
            .map(|i| {
                let prev_close = 200.0 - (40 - i - 1) as f64;
                let close = prev_close - 1.0;
                (prev_close, prev_close, close, close)
            })
            .collect();
        let series = make_ohlc_series(&bars);
        let out = uo(&series);
        assert_approx(out[0], 0.0, 1e-9);
    }

    #[test]
    fn output_is_bounded() {
        let bars: Vec<(f64, f64, f64, f64)> = (0..80)
            .map(|i| {
                let base = 100.0 + ((i * 41) % 29) as f64;
                (base, base + 3.0, base - 3.0, base + ((i % 5) as f64 - 2.0))
            })
            .collect();
        let series = make_ohlc_series(&bars);
        let out = uo(&series);
        for (i, &v) in out.iter().enumerate() {
            assert!((0.0..=100.0).contains(&v), "UO out of bounds at {i}: {v}");
        }
    }

    #[test]
    fn windows_shorter_than_28_pairs_stay_zero() {
        let bars = vec![(100.0, 102.0, 98.0, 101.0); 20];
        let series = make_ohlc_series(&bars);
        assert_eq!(uo(&series), vec![0.0; 20]);
    }
}
