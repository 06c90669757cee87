//! Target sizes of a seeding run.

use crate::{DEFAULT_BATCH_SIZE, DEFAULT_CATEGORY_COUNT, DEFAULT_ITEM_COUNT};
use serde::{Deserialize, Serialize};

/// How many rows to produce and how to batch them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedPlan {
    /// Category rows to generate
    pub categories: u64,
    /// Item rows to generate
    pub items: u64,
    /// Item rows per INSERT flush
    pub batch_size: usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORY_COUNT,
            items: DEFAULT_ITEM_COUNT,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl SeedPlan {
    /// Number of item flushes the plan results in.
    pub fn item_batches(&self) -> u64 {
        if self.batch_size == 0 {
            return 0;
        }
        self.items.div_ceil(self.batch_size as u64)
    }
}
