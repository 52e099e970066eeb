//! FeatureMatrixBuilder — symbols × reference dates into a LearningDataset.
//!
//! Per (symbol, reference date) pair: resolve the date, verify the series
//! reaches far enough into both the past (backward offsets) and the future
//! (label offset), then emit one row. Unresolvable or short-history pairs
//! are skipped silently; only a width mismatch aborts the build.

use crate::features::dataset::{DatasetError, LearningDataset};
use crate::features::frame::SymbolFrame;
use crate::features::mode::{FeatureMode, LabelMode};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct FeatureMatrixBuilder {
    mode: FeatureMode,
    label: LabelMode,
    forward_offset: usize,
}

impl FeatureMatrixBuilder {
    pub fn new(mode: FeatureMode, label: LabelMode, forward_offset: usize) -> Self {
        Self {
            mode,
            label,
            forward_offset,
        }
    }

    pub fn mode(&self) -> &FeatureMode {
        &self.mode
    }

    pub fn label(&self) -> LabelMode {
        self.label
    }

    pub fn forward_offset(&self) -> usize {
        self.forward_offset
    }

    /// Build a fresh dataset from scratch.
    pub fn build(
        &self,
        frames: &[SymbolFrame],
        reference_dates: &[NaiveDate],
    ) -> Result<LearningDataset, DatasetError> {
        let mut dataset = LearningDataset::new();
        self.extend(&mut dataset, frames, reference_dates)?;
        Ok(dataset)
    }

    /// Append rows to an existing dataset. Returns how many rows landed.
    ///
    /// Row order is symbol-major: all reference dates for the first frame,
    /// then the second, and so on — the order the parallel batch path
    /// reproduces when it merges per-symbol partials.
    pub fn extend(
        &self,
        dataset: &mut LearningDataset,
        frames: &[SymbolFrame],
        reference_dates: &[NaiveDate],
    ) -> Result<usize, DatasetError> {
        let mut appended = 0;
        for frame in frames {
            for &date in reference_dates {
                if let Some((row, label)) = self.sample(frame, date) {
                    dataset.append(row, label)?;
                    appended += 1;
                }
            }
        }
        Ok(appended)
    }

    /// One (symbol, reference date) pair → one row, or None to skip.
    fn sample(&self, frame: &SymbolFrame, date: NaiveDate) -> Option<(Vec<f64>, f64)> {
        let series = frame.series();
        let index = series.index_on_or_after(date)?;

        // History checks in both directions before touching any array.
        if index < self.forward_offset {
            return None;
        }
        if index + self.mode.max_backward_offset() >= series.len() {
            return None;
        }

        let close = series.close();
        let reference = close[index];

        let row = match &self.mode {
            FeatureMode::OffsetNormalized { offsets } => {
                let mut row = Vec::with_capacity(offsets.len() + 1);
                row.push(close[index] / reference);
                for &offset in offsets {
                    row.push(close[index + offset] / reference);
                }
                row
            }
            FeatureMode::Indicator { kinds } => kinds
                .iter()
                .map(|&kind| frame.indicators().series(kind)[index])
                .collect(),
        };

        let ratio = close[index - self.forward_offset] / reference;
        let label = match self.label {
            LabelMode::Ratio => ratio,
            LabelMode::Binary => {
                if ratio >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
        };

        Some((row, label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PriceSeries, RawRow};
    use crate::indicators::IndicatorKind;
    use chrono::NaiveDate;

    /// 40 trading days, close strictly rising toward the present:
    /// close[i] = 100 + (39 - i), newest (index 0) = 139.
    fn rising_frame() -> SymbolFrame {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let rows: Vec<RawRow> = (0..40)
            .map(|i| {
                let close = 100.0 + i as f64;
                RawRow {
                    date: base + chrono::Duration::days(i as i64),
                    open: close - 0.5,
                    high: close + 1.0,
                    low: close - 1.0,
                    close,
                    volume: 1000.0,
                    adj_close: close,
                }
            })
            .collect();
        SymbolFrame::new(PriceSeries::from_rows("UP", rows))
    }

    fn date_at_index(frame: &SymbolFrame, index: usize) -> NaiveDate {
        frame.series().dates()[index]
    }

    #[test]
    fn offset_mode_normalizes_against_the_reference_close() {
        let frame = rising_frame();
        let builder = FeatureMatrixBuilder::new(
            FeatureMode::OffsetNormalized {
                offsets: vec![5, 10, 15],
            },
            LabelMode::Ratio,
            5,
        );
        let date = date_at_index(&frame, 20);
        let ds = builder.build(std::slice::from_ref(&frame), &[date]).unwrap();

        assert_eq!(ds.rows(), 1);
        let row = &ds.x()[0];
        assert_eq!(row.len(), 4);
        assert_eq!(row[0], 1.0);
        // close[20] = 119; close[25] = 114; close[30] = 109; close[35] = 104.
        assert!((row[1] - 114.0 / 119.0).abs() < 1e-12);
        assert!((row[2] - 109.0 / 119.0).abs() < 1e-12);
        assert!((row[3] - 104.0 / 119.0).abs() < 1e-12);
        // Label: close[15] = 124 over 119.
        assert!((ds.y()[0] - 124.0 / 119.0).abs() < 1e-12);
    }

    #[test]
    fn indicator_mode_samples_in_caller_order() {
        let frame = rising_frame();
        let builder = FeatureMatrixBuilder::new(
            FeatureMode::Indicator {
                kinds: vec![IndicatorKind::Rsi, IndicatorKind::Roc, IndicatorKind::Cmo],
            },
            LabelMode::Binary,
            5,
        );
        let date = date_at_index(&frame, 20);
        let ds = builder.build(std::slice::from_ref(&frame), &[date]).unwrap();

        assert_eq!(ds.rows(), 1);
        let row = &ds.x()[0];
        let ind = frame.indicators();
        assert_eq!(row[0], ind.series(IndicatorKind::Rsi)[20]);
        assert_eq!(row[1], ind.series(IndicatorKind::Roc)[20]);
        assert_eq!(row[2], ind.series(IndicatorKind::Cmo)[20]);
        // Rising series: future close is higher.
        assert_eq!(ds.y()[0], 1.0);
    }

    #[test]
    fn unresolvable_date_is_skipped_not_an_error() {
        let frame = rising_frame();
        let builder = FeatureMatrixBuilder::new(
            FeatureMode::OffsetNormalized { offsets: vec![5] },
            LabelMode::Ratio,
            5,
        );
        // Far older than any recorded history.
        let ancient = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
        let ds = builder.build(std::slice::from_ref(&frame), &[ancient]).unwrap();
        assert_eq!(ds.rows(), 0);
    }

    #[test]
    fn insufficient_backward_history_is_skipped() {
        let frame = rising_frame();
        let builder = FeatureMatrixBuilder::new(
            FeatureMode::OffsetNormalized { offsets: vec![50] },
            LabelMode::Ratio,
            5,
        );
        // Index 20 + offset 50 reaches past the 40-day history.
        let date = date_at_index(&frame, 20);
        let ds = builder.build(std::slice::from_ref(&frame), &[date]).unwrap();
        assert_eq!(ds.rows(), 0);
    }

    #[test]
    fn insufficient_forward_history_is_skipped() {
        let frame = rising_frame();
        let builder = FeatureMatrixBuilder::new(
            FeatureMode::OffsetNormalized { offsets: vec![5] },
            LabelMode::Ratio,
            30,
        );
        // Index 20 has only 20 newer days; a 30-day forward label cannot form.
        let date = date_at_index(&frame, 20);
        let ds = builder.build(std::slice::from_ref(&frame), &[date]).unwrap();
        assert_eq!(ds.rows(), 0);
    }

    #[test]
    fn deepest_backward_sample_may_land_on_the_oldest_day() {
        let frame = rising_frame();
        let builder = FeatureMatrixBuilder::new(
            FeatureMode::OffsetNormalized { offsets: vec![19] },
            LabelMode::Ratio,
            5,
        );
        // Index 20 + offset 19 = 39, the oldest recorded day: still valid.
        let date = date_at_index(&frame, 20);
        let ds = builder.build(std::slice::from_ref(&frame), &[date]).unwrap();
        assert_eq!(ds.rows(), 1);
        assert!((ds.x()[0][1] - 100.0 / 119.0).abs() < 1e-12);
    }

    #[test]
    fn extend_onto_wrong_width_dataset_is_fatal() {
        let frame = rising_frame();
        let wide = FeatureMatrixBuilder::new(
            FeatureMode::OffsetNormalized {
                offsets: vec![5, 10],
            },
            LabelMode::Ratio,
            5,
        );
        let narrow = FeatureMatrixBuilder::new(
            FeatureMode::OffsetNormalized { offsets: vec![5] },
            LabelMode::Ratio,
            5,
        );
        let date = date_at_index(&frame, 20);
        let mut ds = wide.build(std::slice::from_ref(&frame), &[date]).unwrap();
        assert_eq!(ds.columns(), 3);

        let err = narrow
            .extend(&mut ds, std::slice::from_ref(&frame), &[date])
            .unwrap_err();
        assert_eq!(err, DatasetError::WidthMismatch { expected: 3, got: 2 });
    }

    #[test]
    fn reference_date_between_trading_days_rolls_to_the_newer_day() {
        // Only weekdays: a weekend reference date resolves to Monday.
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(); // Monday
        let rows: Vec<RawRow> = (0..40)
            .filter(|i| {
                let date = base + chrono::Duration::days(*i as i64);
                !matches!(
                    date.format("%a").to_string().as_str(),
                    "Sat" | "Sun"
                )
            })
            .map(|i| {
                let close = 100.0 + i as f64;
                RawRow {
                    date: base + chrono::Duration::days(i as i64),
                    open: close,
                    high: close + 1.0,
                    low: close - 1.0,
                    close,
                    volume: 1000.0,
                    adj_close: close,
                }
            })
            .collect();
        let frame = SymbolFrame::new(PriceSeries::from_rows("WD", rows));

        let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let idx = frame.series().index_on_or_after(saturday).unwrap();
        assert_eq!(frame.series().dates()[idx], monday);
    }
}
