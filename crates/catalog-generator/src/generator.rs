//! Main generator producing category and item rows.

use crate::generators::{numeric, timestamp};
use catalog_core::{
    category_code, category_name, item_name, item_sku, CategoryId, NewCategory, NewItem,
    PRICE_MAX_CENTS, PRICE_MIN_CENTS, RECENCY_DAYS, STOCK_MAX, STOCK_MIN,
};
use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Items need at least one category to reference
    #[error("cannot generate items: no category identifiers available")]
    NoCategories,
}

/// Generator for category and item rows.
///
/// Sequence numbers are dense and 1-based per entity type, so codes and SKUs
/// are unique within one generator's lifetime.
pub struct CatalogGenerator {
    /// Seed used to build the RNG, if any
    seed: Option<u64>,
    /// Random number generator shared by every value generator
    rng: StdRng,
    /// "Now" for `updated_at` randomization
    reference_time: NaiveDateTime,
    /// Last category sequence number handed out
    category_index: u64,
    /// Last item sequence number handed out
    item_index: u64,
}

impl CatalogGenerator {
    /// Create a generator. Without a seed the RNG is seeded from the OS.
    ///
    /// "Now" is captured once here and shared by every row, so all `updated_at`
    /// values of a run are measured back from the same instant.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            seed,
            rng,
            reference_time: Local::now().naive_local(),
            category_index: 0,
            item_index: 0,
        }
    }

    /// Pin the reference time that `updated_at` values are drawn back from.
    pub fn with_reference_time(mut self, reference_time: NaiveDateTime) -> Self {
        self.reference_time = reference_time;
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn reference_time(&self) -> NaiveDateTime {
        self.reference_time
    }

    /// Number of categories generated so far.
    pub fn categories_generated(&self) -> u64 {
        self.category_index
    }

    /// Number of items generated so far.
    pub fn items_generated(&self) -> u64 {
        self.item_index
    }

    /// Generate the next category.
    pub fn next_category(&mut self) -> NewCategory {
        self.category_index += 1;
        let index = self.category_index;

        NewCategory {
            code: category_code(index),
            name: category_name(index),
            updated_at: timestamp::recent_timestamp(
                &mut self.rng,
                self.reference_time,
                RECENCY_DAYS,
            ),
        }
    }

    /// Generate the next item, referencing one of `category_ids` uniformly at random.
    pub fn next_item(&mut self, category_ids: &[CategoryId]) -> Result<NewItem, GeneratorError> {
        let category_id = numeric::pick_category(&mut self.rng, category_ids)
            .ok_or(GeneratorError::NoCategories)?;

        self.item_index += 1;
        let index = self.item_index;

        let price = numeric::price(&mut self.rng, PRICE_MIN_CENTS, PRICE_MAX_CENTS);
        let stock = numeric::stock(&mut self.rng, STOCK_MIN, STOCK_MAX);
        let updated_at =
            timestamp::recent_timestamp(&mut self.rng, self.reference_time, RECENCY_DAYS);

        Ok(NewItem {
            sku: item_sku(index),
            name: item_name(index),
            price,
            stock,
            category_id,
            updated_at,
        })
    }

    /// Lazily generate `count` categories.
    pub fn categories(&mut self, count: u64) -> CategoryIterator<'_> {
        CategoryIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Lazily generate `count` items.
    ///
    /// Fails up front when `count > 0` and there are no categories to reference.
    pub fn items<'a>(
        &'a mut self,
        count: u64,
        category_ids: &'a [CategoryId],
    ) -> Result<ItemIterator<'a>, GeneratorError> {
        if count > 0 && category_ids.is_empty() {
            return Err(GeneratorError::NoCategories);
        }

        Ok(ItemIterator {
            generator: self,
            category_ids,
            remaining: count,
        })
    }
}

/// Iterator that lazily generates categories.
pub struct CategoryIterator<'a> {
    generator: &'a mut CatalogGenerator,
    remaining: u64,
}

impl Iterator for CategoryIterator<'_> {
    type Item = NewCategory;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_category())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CategoryIterator<'_> {}

/// Iterator that lazily generates items.
pub struct ItemIterator<'a> {
    generator: &'a mut CatalogGenerator,
    category_ids: &'a [CategoryId],
    remaining: u64,
}

impl Iterator for ItemIterator<'_> {
    type Item = NewItem;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        // Cannot fail: `items()` rejected an empty id set
        self.generator.next_item(self.category_ids).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ItemIterator<'_> {}
