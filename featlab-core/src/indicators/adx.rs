//! Directional movement system: +DI, -DI and ADX (Wilder, period 14 via
//! the 27-period EMA).
//!
//! Steps, all in the reverse-chronological convention:
//! 1. +DM / -DM from consecutive bars (predecessor at index i+1)
//! 2. Wilder-smooth +DM, -DM and TR
//! 3. +DI = smoothed(+DM) / smoothed(TR), -DI symmetric
//! 4. DX = |+DI - -DI| / (+DI + -DI)
//! 5. ADX = Wilder-smoothed DX
//!
//! Every quotient is NaN/huge-clamped to 0.

use crate::domain::PriceSeries;
use crate::indicators::natr::true_range;
use crate::indicators::{clamp_huge, ema_or_zero, pad_tail, WILDER_14};

/// The three series the directional system produces, each full length.
#[derive(Debug)]
pub struct DirectionalSystem {
    pub di_plus: Vec<f64>,
    pub di_minus: Vec<f64>,
    pub adx: Vec<f64>,
}

pub fn directional_system(series: &PriceSeries) -> DirectionalSystem {
    let len = series.len();
    if len < 2 {
        return DirectionalSystem {
            di_plus: vec![0.0; len],
            di_minus: vec![0.0; len],
            adx: vec![0.0; len],
        };
    }

    let high = series.high();
    let low = series.low();
    let n = len - 1;

    let mut plus_dm = vec![0.0; n];
    let mut minus_dm = vec![0.0; n];
    for i in 0..n {
        let up_move = high[i] - high[i + 1];
        let down_move = low[i + 1] - low[i];
        if up_move > down_move && up_move > 0.0 {
            plus_dm[i] = up_move;
        }
        if down_move > up_move && down_move > 0.0 {
            minus_dm[i] = down_move;
        }
    }

    let smooth_tr = ema_or_zero(&true_range(series), WILDER_14);
    let smooth_plus = ema_or_zero(&plus_dm, WILDER_14);
    let smooth_minus = ema_or_zero(&minus_dm, WILDER_14);

    let mut di_plus = vec![0.0; len];
    let mut di_minus = vec![0.0; len];
    let mut dx = vec![0.0; n];
    for i in 0..n {
        di_plus[i] = clamp_huge(smooth_plus[i] / smooth_tr[i]);
        di_minus[i] = clamp_huge(smooth_minus[i] / smooth_tr[i]);
        dx[i] = clamp_huge((di_plus[i] - di_minus[i]).abs() / (di_plus[i] + di_minus[i]));
    }

    DirectionalSystem {
        di_plus,
        di_minus,
        adx: pad_tail(ema_or_zero(&dx, WILDER_14), len),
    }
}
