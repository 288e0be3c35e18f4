//! Usage Series
//!
//! Turns raw daily usage into a current-week/prior-week chart series and the
//! week-over-week change shown next to it.

use crate::models::{UsagePoint, UsageRecord};

pub const WEEK_DAYS: usize = 7;

/// Align the latest week of records against the week before it
///
/// Records are sorted by date (stable), the last seven become the current
/// week and the up to seven before them the prior week. Points pair by
/// position from the start of each week; missing prior days stay `None`.
pub fn align_weeks(records: &[UsageRecord]) -> Vec<UsagePoint> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.usage_date);

    let current_start = sorted.len().saturating_sub(WEEK_DAYS);
    let prior_start = current_start.saturating_sub(WEEK_DAYS);
    let current = &sorted[current_start..];
    let prior = &sorted[prior_start..current_start];

    current
        .iter()
        .enumerate()
        .map(|(i, day)| UsagePoint {
            label: day.usage_date.format("%a").to_string(),
            date: day.usage_date,
            current: Some(day.used),
            prior: prior.get(i).map(|p| p.used),
        })
        .collect()
}

/// Percent change of the current-week total over the prior-week total
///
/// A zero prior total reports 100. An empty series reports 0.
pub fn week_over_week_change(points: &[UsagePoint]) -> i64 {
    if points.is_empty() {
        return 0;
    }

    let current: u64 = points.iter().map(|p| p.current.unwrap_or(0)).sum();
    let prior: u64 = points.iter().map(|p| p.prior.unwrap_or(0)).sum();
    if prior == 0 {
        return 100;
    }

    let change = (current as f64 - prior as f64) / prior as f64 * 100.0;
    // half-up, so -2.5 rounds to -2
    (change + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32, used: u64) -> UsageRecord {
        UsageRecord {
            usage_date: NaiveDate::from_ymd_opt(2025, 6, d).unwrap(),
            used,
        }
    }

    fn point(current: Option<u64>, prior: Option<u64>) -> UsagePoint {
        UsagePoint {
            label: String::new(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            current,
            prior,
        }
    }

    #[test]
    fn test_ten_days_out_of_order() {
        let records: Vec<UsageRecord> = [7, 2, 10, 1, 5, 9, 3, 8, 4, 6].iter().map(|&d| day(d, d as u64 * 10)).collect();

        let points = align_weeks(&records);

        // current week is June 4..=10, prior week is June 1..=3
        assert_eq!(points.len(), 7);
        let dates: Vec<u32> = points.iter().map(|p| chrono::Datelike::day(&p.date)).collect();
        assert_eq!(dates, vec![4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(points[0].prior, Some(10));
        assert_eq!(points[1].prior, Some(20));
        assert_eq!(points[2].prior, Some(30));
        assert!(points[3..].iter().all(|p| p.prior.is_none()));
        assert_eq!(points[6].current, Some(100));
    }

    #[test]
    fn test_labels_come_from_each_record_date() {
        // 2025-06-02 is a Monday
        let points = align_weeks(&[day(2, 1), day(3, 1), day(8, 1)]);
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Mon", "Tue", "Sun"]);
    }

    #[test]
    fn test_fourteen_days_fill_both_weeks() {
        let records: Vec<UsageRecord> = (1..=14).map(|d| day(d, d as u64)).collect();
        let points = align_weeks(&records);

        assert_eq!(points.len(), 7);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.current, Some(i as u64 + 8));
            assert_eq!(p.prior, Some(i as u64 + 1));
        }
    }

    #[test]
    fn test_empty_and_short_input() {
        assert!(align_weeks(&[]).is_empty());

        let points = align_weeks(&[day(3, 4)]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].prior, None);
    }

    #[test]
    fn test_change_from_zero_baseline_is_100() {
        let points = vec![point(Some(10), Some(0)), point(Some(20), Some(0))];
        assert_eq!(week_over_week_change(&points), 100);
    }

    #[test]
    fn test_change_percentages() {
        assert_eq!(week_over_week_change(&[point(Some(120), Some(100))]), 20);
        assert_eq!(week_over_week_change(&[point(Some(80), Some(100))]), -20);
        assert_eq!(week_over_week_change(&[point(Some(60), None), point(None, Some(50))]), 20);
    }

    #[test]
    fn test_change_rounds_half_up() {
        // +12.5% and -2.5%
        assert_eq!(week_over_week_change(&[point(Some(9), Some(8))]), 13);
        assert_eq!(week_over_week_change(&[point(Some(39), Some(40))]), -2);
    }

    #[test]
    fn test_change_of_empty_series_is_zero() {
        assert_eq!(week_over_week_change(&[]), 0);
    }
}
