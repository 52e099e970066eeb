//! Percentage Price Oscillator (PPO).
//!
//! (EMA12 - EMA26) / EMA26 of close. NaN and blown-up quotients (the slow
//! EMA is zero over its unseeded tail) clamp to 0.

use crate::domain::PriceSeries;
use crate::indicators::{clamp_huge, ema_or_zero};

const FAST: usize = 12;
const SLOW: usize = 26;

pub fn ppo(series: &PriceSeries) -> Vec<f64> {
    let close = series.close();
    let fast = ema_or_zero(close, FAST);
    let slow = ema_or_zero(close, SLOW);

    fast.iter()
        .zip(&slow)
        .map(|(f, s)| clamp_huge((f - s) / s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_series};

    #[test]
    fn flat_series_reads_zero() {
        let out = ppo(&make_series(&[100.0; 40]));
        for &v in &out {
            assert_approx(v, 0.0, 1e-12);
        }
    }

    #[test]
    fn rising_series_reads_positive_where_both_seeded() {
        let closes: Vec<f64> = (0..50).map(|i| 150.0 - i as f64).collect();
        let out = ppo(&make_series(&closes));
        // Index 0 is newest: the fast EMA tracks the recent (higher) closes
        // more tightly than the slow one.
        assert!(out[0] > 0.0);
    }

    #[test]
    fn unseeded_slow_tail_clamps_to_zero() {
        // Slow EMA is zero above index len-26; the raw quotient there is
        // infinite and must be clamped.
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let out = ppo(&make_series(&closes));
        for (i, &v) in out.iter().enumerate().skip(30 - 26 + 1) {
            assert_eq!(v, 0.0, "expected clamp at index {i}");
        }
        assert!(out.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn output_is_series_length() {
        let out = ppo(&make_series(&[100.0, 101.0]));
        assert_eq!(out.len(), 2);
        assert_eq!(out, vec![0.0, 0.0]);
    }
}
