//! PriceSeries — one symbol's split-adjusted daily history.
//!
//! Index convention: index 0 is the most recent trading day; the index
//! increases moving into the past. Dates are strictly decreasing and the
//! five value columns are parallel to the date column. The series is
//! immutable after construction; indicator results are computed from it
//! into separate containers, never written back.

use crate::dateindex::ref_date_index;
use crate::domain::RawRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    symbol: String,
    dates: Vec<NaiveDate>,
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    volume: Vec<f64>,
}

impl PriceSeries {
    /// Build a series from parsed rows in arbitrary order.
    ///
    /// Rows are sorted newest-first, duplicate dates are dropped (first
    /// parsed row wins), and all price columns are split-adjusted with the
    /// per-row `adj_close / close` ratio. Volume is carried through as-is.
    pub fn from_rows(symbol: impl Into<String>, mut rows: Vec<RawRow>) -> Self {
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows.dedup_by_key(|r| r.date);

        let mut series = Self {
            symbol: symbol.into(),
            dates: Vec::with_capacity(rows.len()),
            open: Vec::with_capacity(rows.len()),
            high: Vec::with_capacity(rows.len()),
            low: Vec::with_capacity(rows.len()),
            close: Vec::with_capacity(rows.len()),
            volume: Vec::with_capacity(rows.len()),
        };

        for row in rows {
            let ratio = if row.close > 0.0 {
                row.adj_close / row.close
            } else {
                1.0
            };
            series.dates.push(row.date);
            series.open.push(row.open * ratio);
            series.high.push(row.high * ratio);
            series.low.push(row.low * ratio);
            series.close.push(row.close * ratio);
            series.volume.push(row.volume);
        }

        series
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn open(&self) -> &[f64] {
        &self.open
    }

    pub fn high(&self) -> &[f64] {
        &self.high
    }

    pub fn low(&self) -> &[f64] {
        &self.low
    }

    pub fn close(&self) -> &[f64] {
        &self.close
    }

    pub fn volume(&self) -> &[f64] {
        &self.volume
    }

    /// Resolve a calendar date to the index of the earliest trading day on
    /// or after it. See [`crate::dateindex::ref_date_index`] for the full
    /// boundary contract.
    pub fn index_on_or_after(&self, target: NaiveDate) -> Option<usize> {
        ref_date_index(&self.dates, target)
    }
}
