//! Deterministic synthetic price histories for tests and benchmarks.
//!
//! A random walk seeded from the symbol name: the same symbol always yields
//! the same rows, different symbols diverge. Weekends are skipped so the
//! date axis looks like a real trading calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use featlab_core::domain::{PriceSeries, RawRow};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `days` trading days of rows, oldest first, starting 2018-01-02.
pub fn synthetic_rows(symbol: &str, days: usize) -> Vec<RawRow> {
    let seed: [u8; 32] = *blake3::hash(symbol.as_bytes()).as_bytes();
    let mut rng = StdRng::from_seed(seed);

    let mut rows = Vec::with_capacity(days);
    let mut price = 100.0_f64;
    let mut date = NaiveDate::from_ymd_opt(2018, 1, 2).unwrap();

    while rows.len() < days {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            date += chrono::Duration::days(1);
            continue;
        }

        let daily_return: f64 = rng.gen_range(-0.03..0.03);
        let open = price;
        let close = price * (1.0 + daily_return);
        let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.01));
        let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.01));
        let volume = rng.gen_range(500_000.0..5_000_000.0_f64);

        rows.push(RawRow {
            date,
            open,
            high,
            low,
            close,
            volume,
            adj_close: close,
        });

        price = close;
        date += chrono::Duration::days(1);
    }

    rows
}

/// Rows assembled into a ready PriceSeries.
pub fn synthetic_series(symbol: &str, days: usize) -> PriceSeries {
    PriceSeries::from_rows(symbol, synthetic_rows(symbol, days))
}
