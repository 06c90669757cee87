//! Verification report types.

use catalog_core::SeedPlan;
use std::fmt;
use std::time::Duration;

/// Raw numbers gathered from the store.
///
/// Every field except the two row counts counts *violations*, so a healthy
/// dataset has zeros there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerificationCounts {
    pub category_rows: u64,
    pub item_rows: u64,
    pub malformed_codes: u64,
    pub duplicate_codes: u64,
    /// Codes whose sequence number lies outside `1..=category_rows`
    pub out_of_sequence_codes: u64,
    pub malformed_skus: u64,
    pub duplicate_skus: u64,
    pub out_of_sequence_skus: u64,
    pub orphan_items: u64,
    pub prices_out_of_range: u64,
    pub stock_out_of_range: u64,
}

/// Outcome of one named check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    fn expect_eq(name: &'static str, expected: u64, actual: u64) -> Self {
        Self {
            name,
            passed: expected == actual,
            detail: format!("expected {expected}, found {actual}"),
        }
    }

    fn expect_none(name: &'static str, violations: u64) -> Self {
        Self {
            name,
            passed: violations == 0,
            detail: format!("{violations} violating rows"),
        }
    }
}

/// Verification report.
#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    pub checks: Vec<CheckResult>,
    pub counts: VerificationCounts,
    /// Total verification time.
    pub total_duration: Duration,
}

impl VerificationReport {
    /// Evaluate `counts` against what `plan` should have produced.
    pub fn evaluate(plan: &SeedPlan, counts: VerificationCounts) -> Self {
        let checks = vec![
            CheckResult::expect_eq("category row count", plan.categories, counts.category_rows),
            CheckResult::expect_eq("item row count", plan.items, counts.item_rows),
            CheckResult::expect_none("category code format", counts.malformed_codes),
            CheckResult::expect_none("category code uniqueness", counts.duplicate_codes),
            CheckResult::expect_none("category code sequence", counts.out_of_sequence_codes),
            CheckResult::expect_none("item sku format", counts.malformed_skus),
            CheckResult::expect_none("item sku uniqueness", counts.duplicate_skus),
            CheckResult::expect_none("item sku sequence", counts.out_of_sequence_skus),
            CheckResult::expect_none("item category references", counts.orphan_items),
            CheckResult::expect_none("item price range", counts.prices_out_of_range),
            CheckResult::expect_none("item stock range", counts.stock_out_of_range),
        ];

        Self {
            checks,
            counts,
            total_duration: Duration::ZERO,
        }
    }

    /// Check if verification passed.
    pub fn is_success(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|check| !check.passed)
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        let failed = self.failed_checks().count();
        if failed == 0 {
            format!(
                "Verification PASSED: {} checks in {:?}",
                self.checks.len(),
                self.total_duration
            )
        } else {
            format!(
                "Verification FAILED: {} of {} checks failed",
                failed,
                self.checks.len()
            )
        }
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for check in &self.checks {
            let mark = if check.passed { "✓" } else { "✗" };
            writeln!(f, "  {mark} {}: {}", check.name, check.detail)?;
        }
        write!(f, "{}", self.summary())
    }
}
