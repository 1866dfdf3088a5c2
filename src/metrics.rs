//! Derived metrics over record collections.
//!
//! Every function here is pure: it reads the slices it is given and the
//! `today` it is told about, and never touches shared state.

use crate::models::Dated;
use chrono::{Duration, NaiveDate};

/// Length of the trailing window, today included.
pub const WINDOW_DAYS: i64 = 7;

/// First calendar day of the trailing window ending on `today`.
pub fn window_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(WINDOW_DAYS - 1)
}

/// Records dated on or after `start`.
pub fn trailing_window<T: Dated + Clone>(records: &[T], start: NaiveDate) -> Vec<T> {
    records
        .iter()
        .filter(|record| record.date() >= start)
        .cloned()
        .collect()
}

/// Date-descending copy. Same-day records keep their relative order.
pub fn sort_by_date<T: Dated + Clone>(records: &[T]) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));
    sorted
}

pub fn top_n<T: Dated + Clone>(records: &[T], n: usize) -> Vec<T> {
    let mut sorted = sort_by_date(records);
    sorted.truncate(n);
    sorted
}

/// Mean of `field`; an empty slice averages to zero.
pub fn average<T>(records: &[T], field: impl Fn(&T) -> f64) -> f64 {
    sum(records, field) / records.len().max(1) as f64
}

pub fn sum<T>(records: &[T], field: impl Fn(&T) -> f64) -> f64 {
    records.iter().map(field).sum()
}

/// Record with the greatest date. On ties the earliest-positioned wins.
pub fn latest_by<T: Dated>(records: &[T]) -> Option<&T> {
    records.iter().reduce(|best, candidate| {
        if candidate.date() > best.date() {
            candidate
        } else {
            best
        }
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Delta<T> {
    pub latest: T,
    pub previous: T,
    pub change: f64,
}

/// Change between the two most recent records of the comparison set.
/// `None` when fewer than two records are available.
pub fn delta<T: Dated + Clone>(records: &[T], field: impl Fn(&T) -> f64) -> Option<Delta<T>> {
    let mut sorted = top_n(records, 2).into_iter();
    let latest = sorted.next()?;
    let previous = sorted.next()?;
    let change = field(&latest) - field(&previous);
    Some(Delta {
        latest,
        previous,
        change,
    })
}
