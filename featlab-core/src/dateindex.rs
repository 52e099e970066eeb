//! Calendar-date to array-index resolution by binary search.
//!
//! Works over the reverse-chronological convention: the date array is
//! strictly decreasing, index 0 newest. A reference date is usually not a
//! trading day, so the lookup answers "the earliest available trading day
//! on or after the target".

/// Resolve `target` against a strictly decreasing date array.
///
/// Returns the largest index whose date is on or after `target`, in
/// O(log L). Boundary contract, pinned by the tests below:
/// - empty array → `None`
/// - `target` older than the oldest recorded date → `None`
/// - `target` newer than the newest recorded date → `Some(0)`
pub fn ref_date_index<T: Ord + Copy>(dates: &[T], target: T) -> Option<usize> {
    let newest = *dates.first()?;
    let oldest = *dates.last()?;
    if target < oldest {
        return None;
    }
    if target > newest {
        return Some(0);
    }
    // The descending order means exactly the leading run satisfies `>= target`.
    let on_or_after = dates.partition_point(|d| *d >= target);
    Some(on_or_after - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn descending_10_to_1() -> Vec<i64> {
        (1..=10).rev().collect()
    }

    #[test]
    fn exact_hit_returns_its_index() {
        let dates = descending_10_to_1();
        assert_eq!(ref_date_index(&dates, 8), Some(2));
        assert_eq!(ref_date_index(&dates, 10), Some(0));
        assert_eq!(ref_date_index(&dates, 1), Some(9));
    }

    #[test]
    fn non_trading_day_resolves_to_next_newer_day() {
        // Dates 10, 8, 6, ... with gaps: target 7 → first day on/after is 8.
        let dates: Vec<i64> = (1..=5).rev().map(|d| d * 2).collect(); // [10, 8, 6, 4, 2]
        assert_eq!(ref_date_index(&dates, 7), Some(1));
        assert_eq!(ref_date_index(&dates, 3), Some(3));
    }

    #[test]
    fn target_older_than_history_is_not_found() {
        let dates = descending_10_to_1();
        assert_eq!(ref_date_index(&dates, 0), None);
    }

    #[test]
    fn target_newer_than_history_pins_to_index_zero() {
        let dates = descending_10_to_1();
        assert_eq!(ref_date_index(&dates, 11), Some(0));
    }

    #[test]
    fn empty_series_is_not_found() {
        let dates: Vec<i64> = Vec::new();
        assert_eq!(ref_date_index(&dates, 5), None);
    }

    #[test]
    fn works_over_calendar_dates() {
        let dates: Vec<NaiveDate> = (1..=10)
            .rev()
            .map(|d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap())
            .collect();
        let target = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        assert_eq!(ref_date_index(&dates, target), Some(4));
    }
}
