//! EMA/SMA smoothing primitives over reverse-chronological arrays.
//!
//! Both filters seed from the *oldest* `period` elements (the highest-index
//! tail) and run the recurrence toward index 0, consistent with the
//! "index increases into the past" convention:
//!
//! - EMA: alpha = 2/(period+1); seed = mean of the oldest `period` elements,
//!   placed at index `len - period`; then
//!   `out[i] = series[i]*alpha + out[i+1]*(1-alpha)` down to index 0.
//!   Indices older than the seed boundary stay 0.0.
//! - SMA: growing-window mean over the oldest `period` elements, then a
//!   fixed-window rolling sum for every newer index.
//!
//! `period == 0` or `period >= len` is rejected with a structured error;
//! callers that need graceful degradation map it to a zero-filled series.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SmoothError {
    #[error("smoothing period {period} out of range for series of length {len}")]
    BadPeriod { period: usize, len: usize },
}

/// Exponential moving average. Output is index-aligned with `series`.
pub fn ema(series: &[f64], period: usize) -> Result<Vec<f64>, SmoothError> {
    let len = series.len();
    if period == 0 || period >= len {
        return Err(SmoothError::BadPeriod { period, len });
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = vec![0.0; len];

    let boundary = len - period;
    out[boundary] = series[boundary..].iter().sum::<f64>() / period as f64;

    for i in (0..boundary).rev() {
        out[i] = series[i] * alpha + out[i + 1] * (1.0 - alpha);
    }

    Ok(out)
}

/// Simple moving average. Output is index-aligned with `series`.
pub fn sma(series: &[f64], period: usize) -> Result<Vec<f64>, SmoothError> {
    let len = series.len();
    if period == 0 || period >= len {
        return Err(SmoothError::BadPeriod { period, len });
    }

    let mut out = vec![0.0; len];

    // Growing window over the oldest `period` elements.
    let mut sum = 0.0;
    for k in 1..=period {
        let i = len - k;
        sum += series[i];
        out[i] = sum / k as f64;
    }

    // Fixed window rolled toward the newest index.
    for i in (0..len - period).rev() {
        sum += series[i] - series[i + period];
        out[i] = sum / period as f64;
    }

    Ok(out)
}
