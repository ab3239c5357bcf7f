//! Date-window alignment across time series.

use fundattr_primitives::Date;

use crate::SkipReason;

/// A common date window across two or more series.
///
/// `rows[i]` holds the indices of series `i` whose dates fall inside
/// `[start, end]`; all row sets have the same length. Rows correspond by
/// date, not by original position.
#[derive(Debug, Clone)]
pub struct AlignedWindow {
    /// First date of the window, inclusive.
    pub start: Date,
    /// Last date of the window, inclusive.
    pub end: Date,
    /// Selected row indices, one set per input series.
    pub rows: Vec<Vec<usize>>,
}

impl AlignedWindow {
    /// Number of observations in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Check if the window holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute the overlapping window across `series` and select each series'
/// rows inside it.
///
/// The default `start` is the latest second date across the series: the
/// first record of every series is skipped because its return or
/// excess-return is undefined. The default `end` is the earliest last
/// date. Rows are kept when their date lies in `[start, end]` inclusive.
///
/// No interpolation or filling is performed: series that produce different
/// row counts over the window (missing months, no overlap at all) cannot
/// be regressed jointly and yield `SkipReason::Misaligned`. Callers must
/// treat that as "no result", never as a best-effort fit.
///
/// # Errors
/// `SkipReason::Misaligned` when any series has fewer than two records, or
/// when the selected row counts differ or are zero.
pub fn align(
    series: &[&[Date]],
    start: Option<Date>,
    end: Option<Date>,
) -> Result<AlignedWindow, SkipReason> {
    let misaligned =
        || SkipReason::Misaligned { lengths: series.iter().map(|s| s.len()).collect() };

    let mut default_start: Option<Date> = None;
    let mut default_end: Option<Date> = None;
    for s in series {
        let (Some(&second), Some(&last)) = (s.get(1), s.last()) else {
            return Err(misaligned());
        };
        default_start = Some(default_start.map_or(second, |d| d.max(second)));
        default_end = Some(default_end.map_or(last, |d| d.min(last)));
    }
    let (Some(default_start), Some(default_end)) = (default_start, default_end) else {
        return Err(misaligned());
    };

    let start = start.unwrap_or(default_start);
    let end = end.unwrap_or(default_end);

    let rows: Vec<Vec<usize>> = series
        .iter()
        .map(|s| {
            s.iter()
                .enumerate()
                .filter(|(_, d)| **d >= start && **d <= end)
                .map(|(i, _)| i)
                .collect()
        })
        .collect();

    let first_len = rows.first().map_or(0, Vec::len);
    if first_len == 0 || rows.iter().any(|r| r.len() != first_len) {
        return Err(SkipReason::Misaligned { lengths: rows.iter().map(Vec::len).collect() });
    }

    Ok(AlignedWindow { start, end, rows })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn monthly_dates(start_month: usize, n: usize) -> Vec<Date> {
        (start_month..start_month + n)
            .map(|m| Date::from_ymd_opt(2000 + (m / 12) as i32, (m % 12) as u32 + 1, 28).unwrap())
            .collect()
    }

    #[test]
    fn identical_series_drop_first_record() {
        let a = monthly_dates(0, 10);
        let b = monthly_dates(0, 10);

        let window = align(&[&a, &b], None, None).unwrap();

        assert_eq!(window.start, a[1]);
        assert_eq!(window.end, a[9]);
        assert_eq!(window.len(), 9);
        assert_eq!(window.rows[0], window.rows[1]);
        assert_eq!(window.rows[0][0], 1);
    }

    #[test]
    fn offset_series_intersect() {
        let a = monthly_dates(0, 10);
        let b = monthly_dates(3, 10);

        let window = align(&[&a, &b], None, None).unwrap();

        // start = b's second date (month 4), end = a's last date (month 9)
        assert_eq!(window.start, b[1]);
        assert_eq!(window.end, a[9]);
        assert_eq!(window.len(), 6);
        assert_eq!(window.rows[0], vec![4, 5, 6, 7, 8, 9]);
        assert_eq!(window.rows[1], vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn disjoint_series_misaligned() {
        let a = monthly_dates(0, 6);
        let b = monthly_dates(120, 6);

        assert!(matches!(align(&[&a, &b], None, None), Err(SkipReason::Misaligned { .. })));
    }

    #[test]
    fn missing_month_misaligned() {
        let a = monthly_dates(0, 12);
        let mut b = monthly_dates(0, 12);
        b.remove(5);

        let result = align(&[&a, &b], None, None);

        match result {
            Err(SkipReason::Misaligned { lengths }) => assert_eq!(lengths, vec![11, 10]),
            other => panic!("expected Misaligned, got {other:?}"),
        }
    }

    #[test]
    fn explicit_window_filters_inclusively() {
        let a = monthly_dates(0, 12);
        let b = monthly_dates(0, 12);

        let window = align(&[&a, &b], Some(a[3]), Some(a[7])).unwrap();

        assert_eq!(window.len(), 5);
        assert_eq!(window.rows[0], vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn three_series_align() {
        let a = monthly_dates(0, 24);
        let b = monthly_dates(2, 24);
        let c = monthly_dates(4, 24);

        let window = align(&[&a, &b, &c], None, None).unwrap();

        // start = c's second date (month 5), end = a's last date (month 23)
        assert_eq!(window.start, c[1]);
        assert_eq!(window.end, a[23]);
        assert_eq!(window.rows.len(), 3);
        assert_eq!(window.len(), 19);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn too_short_series_misaligned(#[case] n: usize) {
        let a = monthly_dates(0, n);
        let b = monthly_dates(0, 12);

        assert!(matches!(align(&[&a, &b], None, None), Err(SkipReason::Misaligned { .. })));
    }
}
