//! Lenient CSV ingestion.
//!
//! One CSV file per symbol, header line plus
//! `date, open, high, low, close, volume, adjusted_close` rows in arbitrary
//! order. A row that fails to parse is skipped silently — a data-quality
//! filter, not an error. An unreadable file IS an error; the distinction
//! matters to the batch runner (skip a row, abort on a missing symbol).

use crate::data::provider::DataError;
use crate::domain::{PriceSeries, RawRow};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse all well-formed rows from a CSV stream, skipping the rest.
pub fn read_rows<R: Read>(reader: R) -> Vec<RawRow> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let Ok(record) = record else { continue };
        if let Some(row) = parse_record(&record) {
            rows.push(row);
        }
    }
    rows
}

/// Read `<dir>/<symbol>.csv` into a split-adjusted PriceSeries.
///
/// Zero parseable rows yield an empty series, not an error.
pub fn load_symbol(dir: &Path, symbol: &str) -> Result<PriceSeries, DataError> {
    let path = dir.join(format!("{symbol}.csv"));
    let file = File::open(&path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let rows = read_rows(BufReader::new(file));
    Ok(PriceSeries::from_rows(symbol, rows))
}

fn parse_record(record: &csv::StringRecord) -> Option<RawRow> {
    if record.len() < 7 {
        return None;
    }
    Some(RawRow {
        date: parse_date(record.get(0)?)?,
        open: parse_field(record.get(1)?)?,
        high: parse_field(record.get(2)?)?,
        low: parse_field(record.get(3)?)?,
        close: parse_field(record.get(4)?)?,
        volume: parse_field(record.get(5)?)?,
        adj_close: parse_field(record.get(6)?)?,
    })
}

fn parse_field(field: &str) -> Option<f64> {
    field.trim().parse().ok()
}

/// Accept ISO dates and the legacy locale form some archives still carry.
fn parse_date(field: &str) -> Option<NaiveDate> {
    let field = field.trim();
    NaiveDate::parse_from_str(field, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(field, "%m/%d/%Y"))
        .ok()
}
