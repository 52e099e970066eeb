//! SymbolFrame — one symbol's series plus its precomputed battery.
//!
//! The battery is computed exactly once, at construction; the frame is
//! immutable afterwards and safe to share across worker threads.

use crate::domain::PriceSeries;
use crate::indicators::{compute_indicators_with, IndicatorOptions, IndicatorSet};

#[derive(Debug, Clone)]
pub struct SymbolFrame {
    series: PriceSeries,
    indicators: IndicatorSet,
}

impl SymbolFrame {
    pub fn new(series: PriceSeries) -> Self {
        Self::with_options(series, &IndicatorOptions::default())
    }

    pub fn with_options(series: PriceSeries, options: &IndicatorOptions) -> Self {
        let indicators = compute_indicators_with(&series, options);
        Self { series, indicators }
    }

    pub fn symbol(&self) -> &str {
        self.series.symbol()
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawRow;
    use crate::indicators::IndicatorKind;
    use chrono::NaiveDate;

    fn series(days: usize) -> PriceSeries {
        let base = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let rows: Vec<RawRow> = (0..days)
            .map(|i| {
                let close = 100.0 + i as f64;
                RawRow {
                    date: base + chrono::Duration::days(i as i64),
                    open: close - 1.0,
                    high: close + 1.0,
                    low: close - 2.0,
                    close,
                    volume: 1000.0,
                    adj_close: close,
                }
            })
            .collect();
        PriceSeries::from_rows("SPY", rows)
    }

    #[test]
    fn frame_precomputes_aligned_battery() {
        let frame = SymbolFrame::new(series(40));
        assert_eq!(frame.indicators().len(), frame.series().len());
        for kind in IndicatorKind::ALL {
            assert_eq!(frame.indicators().series(kind).len(), 40);
        }
        assert_eq!(frame.symbol(), "SPY");
    }
}
