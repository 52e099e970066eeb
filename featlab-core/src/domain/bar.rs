//! RawRow — one parsed quote row, before split adjustment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily OHLCV row as it comes off a symbol's CSV file.
///
/// Prices are unadjusted; `adj_close` carries the provider's split/dividend
/// adjusted close. `PriceSeries::from_rows` applies the `adj_close / close`
/// ratio to all price columns during construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRow {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub adj_close: f64,
}

impl RawRow {
    /// Basic OHLC sanity check: high >= low, open/close inside the range,
    /// strictly positive prices.
    pub fn is_sane(&self) -> bool {
        self.high >= self.low
            && self.open >= self.low
            && self.open <= self.high
            && self.close >= self.low
            && self.close <= self.high
            && self.open > 0.0
            && self.close > 0.0
    }
}
