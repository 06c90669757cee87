//! Rows written by the loader.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-assigned category identifier (`BIGSERIAL`).
pub type CategoryId = i64;

/// A category before insertion. The identifier is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub code: String,
    pub name: String,
    pub updated_at: NaiveDateTime,
}

/// An item before insertion.
///
/// `category_id` must be one of the identifiers read back after the
/// category phase committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub sku: String,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: CategoryId,
    pub updated_at: NaiveDateTime,
}
