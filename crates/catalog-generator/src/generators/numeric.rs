//! Numeric value generators.

use rand::Rng;
use rust_decimal::Decimal;

/// Generate a price uniformly over the cent grid in `[min_cents, max_cents]`.
///
/// The result always has scale 2.
pub fn price<R: Rng>(rng: &mut R, min_cents: i64, max_cents: i64) -> Decimal {
    Decimal::new(rng.random_range(min_cents..=max_cents), 2)
}

/// Generate a stock quantity in `[min, max]` (inclusive).
pub fn stock<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

/// Pick one identifier uniformly at random. `None` when `ids` is empty.
pub fn pick_category<R: Rng, T: Copy>(rng: &mut R, ids: &[T]) -> Option<T> {
    if ids.is_empty() {
        return None;
    }
    Some(ids[rng.random_range(0..ids.len())])
}
