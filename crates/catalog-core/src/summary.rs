//! End-of-run summary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row counts observed in the store after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub category_count: u64,
    pub item_count: u64,
}

impl Summary {
    pub fn new(category_count: u64, item_count: u64) -> Self {
        Self {
            category_count,
            item_count,
        }
    }

    /// Items per category, or `0.0` when there are no categories.
    pub fn average_items_per_category(&self) -> f64 {
        if self.category_count > 0 {
            self.item_count as f64 / self.category_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total Categories: {}",
            format_thousands(self.category_count)
        )?;
        writeln!(f, "Total Items: {}", format_thousands(self.item_count))?;
        write!(
            f,
            "Average Items per Category: {:.2}",
            self.average_items_per_category()
        )
    }
}

/// Render an integer with `,` thousands separators.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
