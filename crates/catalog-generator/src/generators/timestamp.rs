//! Timestamp value generators.

use chrono::{NaiveDateTime, TimeDelta};
use rand::Rng;

/// Generate a timestamp a whole number of days before `now`.
///
/// The offset is drawn uniformly from `0..=days`, so the result lies within
/// the past `days` days and keeps the time-of-day of `now`.
pub fn recent_timestamp<R: Rng>(rng: &mut R, now: NaiveDateTime, days: i64) -> NaiveDateTime {
    if days <= 0 {
        return now;
    }

    let offset = rng.random_range(0..=days);
    now - TimeDelta::days(offset)
}
