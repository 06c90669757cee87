//! Core types for the catalog-seed benchmark data loader.
//!
//! This crate defines the two synthetic entities written by the loader and the
//! naming rules that make their business keys unique within a run:
//!
//! - [`NewCategory`] - a category row before the store assigns its identifier
//! - [`NewItem`] - an item row referencing one already-inserted category
//! - [`SeedPlan`] - target row counts and item batch size
//! - [`Summary`] - row counts reported after a run
//!
//! Codes and SKUs are derived from a dense 1-based sequence number:
//!
//! ```rust
//! use catalog_core::{category_code, item_sku, parse_category_code};
//!
//! assert_eq!(category_code(42), "CAT-0000042");
//! assert_eq!(item_sku(42), "SKU-000000042");
//! assert_eq!(parse_category_code("CAT-0000042"), Some(42));
//! ```

pub mod codes;
pub mod entities;
pub mod plan;
pub mod summary;

pub use codes::{
    category_code, category_name, item_name, item_sku, parse_category_code, parse_item_sku,
    CATEGORY_CODE_DIGITS, CATEGORY_CODE_PREFIX, ITEM_SKU_DIGITS, ITEM_SKU_PREFIX,
};
pub use entities::{CategoryId, NewCategory, NewItem};
pub use plan::SeedPlan;
pub use summary::{format_thousands, Summary};

/// Number of categories generated when nothing else is configured.
pub const DEFAULT_CATEGORY_COUNT: u64 = 2000;

/// Number of items generated when nothing else is configured.
pub const DEFAULT_ITEM_COUNT: u64 = 100_000;

/// Rows per item INSERT flush.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Lower bound of generated item prices, in cents.
pub const PRICE_MIN_CENTS: i64 = 1_000;

/// Upper bound of generated item prices, in cents.
pub const PRICE_MAX_CENTS: i64 = 100_000;

/// Inclusive stock range.
pub const STOCK_MIN: i32 = 0;
pub const STOCK_MAX: i32 = 1000;

/// `updated_at` values fall within this many days before the reference time.
pub const RECENCY_DAYS: i64 = 365;

/// Table holding categories.
pub const CATEGORY_TABLE: &str = "category";

/// Table holding items.
pub const ITEM_TABLE: &str = "item";
