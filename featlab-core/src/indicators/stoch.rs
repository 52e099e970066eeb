//! Stochastic oscillator (%K / %D).
//!
//! %K = (close - lowest_low_14) / (highest_high_14 - lowest_low_14) over
//! the 14-day window reaching into the past; a zero range (NaN quotient)
//! reads 1. %D = SMA(%K, 3) * 100. The battery exposes %D.

use crate::domain::PriceSeries;
use crate::indicators::sma_or_zero;

const WINDOW: usize = 14;
const SMOOTH: usize = 3;

#[derive(Debug)]
pub struct StochOutput {
    /// Raw %K in [0, 1].
    pub percent_k: Vec<f64>,
    /// Smoothed and scaled %D in [0, 100].
    pub percent_d: Vec<f64>,
}

pub fn stoch(series: &PriceSeries) -> StochOutput {
    let len = series.len();
    let high = series.high();
    let low = series.low();
    let close = series.close();

    let mut percent_k = vec![0.0; len];
    if len >= WINDOW {
        for i in 0..=len - WINDOW {
            let highest = high[i..i + WINDOW].iter().copied().fold(f64::MIN, f64::max);
            let lowest = low[i..i + WINDOW].iter().copied().fold(f64::MAX, f64::min);
            let k = (close[i] - lowest) / (highest - lowest);
            percent_k[i] = if k.is_nan() { 1.0 } else { k };
        }
    }

    let percent_d = sma_or_zero(&percent_k, SMOOTH)
        .into_iter()
        .map(|v| v * 100.0)
        .collect();

    StochOutput {
        percent_k,
        percent_d,
    }
}
