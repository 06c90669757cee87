//! Synthetic data generator for catalog-seed.
//!
//! This crate provides the [`CatalogGenerator`] which produces category and item
//! rows ready for insertion. All randomness flows through one `StdRng`; giving
//! the generator a seed and a fixed reference time makes every value
//! reproducible across runs.
//!
//! # Architecture
//!
//! ```text
//!  seed ──► StdRng ─┬─► next_category() ──► NewCategory { CAT-0000001, .. }
//!                   │
//!  category ids ────┴─► next_item(ids)  ──► NewItem { SKU-000000001, .., category_id }
//! ```
//!
//! Items can only be generated once the store has assigned category
//! identifiers, so the caller inserts categories, reads the ids back and then
//! hands them to [`CatalogGenerator::items`].
//!
//! # Example
//!
//! ```rust
//! use catalog_generator::CatalogGenerator;
//!
//! let mut generator = CatalogGenerator::new(Some(42));
//! let categories: Vec<_> = generator.categories(3).collect();
//! assert_eq!(categories[0].code, "CAT-0000001");
//!
//! let ids = [10, 11, 12];
//! let item = generator.next_item(&ids).unwrap();
//! assert!(ids.contains(&item.category_id));
//! ```

pub mod generator;
pub mod generators;

pub use generator::{CatalogGenerator, CategoryIterator, GeneratorError, ItemIterator};
