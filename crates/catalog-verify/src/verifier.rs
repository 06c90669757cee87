//! Aggregate-query verifier.

use crate::error::VerifyError;
use crate::report::{VerificationCounts, VerificationReport};
use catalog_core::SeedPlan;
use std::time::Instant;
use tokio_postgres::Client;
use tracing::{debug, info, warn};

const COUNT_CATEGORIES: &str = r#"SELECT COUNT(*) FROM "category""#;
const COUNT_ITEMS: &str = r#"SELECT COUNT(*) FROM "item""#;

const MALFORMED_CODES: &str =
    r#"SELECT COUNT(*) FROM "category" WHERE "code" !~ '^CAT-[0-9]{7}$'"#;
const DUPLICATE_CODES: &str =
    r#"SELECT COUNT(*) - COUNT(DISTINCT "code") FROM "category""#;
const OUT_OF_SEQUENCE_CODES: &str = r#"SELECT COUNT(*) FROM "category"
    WHERE CASE WHEN "code" ~ '^CAT-[0-9]{7}$'
        THEN substring("code" FROM 5)::bigint NOT BETWEEN 1 AND $1
        ELSE FALSE
    END"#;

const MALFORMED_SKUS: &str = r#"SELECT COUNT(*) FROM "item" WHERE "sku" !~ '^SKU-[0-9]{9}$'"#;
const DUPLICATE_SKUS: &str = r#"SELECT COUNT(*) - COUNT(DISTINCT "sku") FROM "item""#;
const OUT_OF_SEQUENCE_SKUS: &str = r#"SELECT COUNT(*) FROM "item"
    WHERE CASE WHEN "sku" ~ '^SKU-[0-9]{9}$'
        THEN substring("sku" FROM 5)::bigint NOT BETWEEN 1 AND $1
        ELSE FALSE
    END"#;

const ORPHAN_ITEMS: &str = r#"SELECT COUNT(*) FROM "item" i
    LEFT JOIN "category" c ON c."id" = i."category_id"
    WHERE c."id" IS NULL"#;
const PRICES_OUT_OF_RANGE: &str = r#"SELECT COUNT(*) FROM "item"
    WHERE "price" < 10.00 OR "price" > 1000.00 OR "price" <> round("price", 2)"#;
const STOCK_OUT_OF_RANGE: &str =
    r#"SELECT COUNT(*) FROM "item" WHERE "stock" < 0 OR "stock" > 1000"#;

/// Checks a seeded dataset through an existing connection.
pub struct CatalogVerifier<'a> {
    client: &'a Client,
}

impl<'a> CatalogVerifier<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gather violation counts and evaluate them against `plan`.
    pub async fn verify(&self, plan: &SeedPlan) -> Result<VerificationReport, VerifyError> {
        let start_time = Instant::now();
        info!(
            "Verifying {} categories and {} items",
            plan.categories, plan.items
        );

        let counts = self.collect_counts().await?;
        debug!("Verification counts: {:?}", counts);

        let mut report = VerificationReport::evaluate(plan, counts);
        report.total_duration = start_time.elapsed();

        for check in report.failed_checks() {
            warn!("Check '{}' failed: {}", check.name, check.detail);
        }
        info!("{}", report.summary());

        Ok(report)
    }

    /// Like [`CatalogVerifier::verify`] but turns failed checks into an error.
    pub async fn verify_strict(&self, plan: &SeedPlan) -> Result<VerificationReport, VerifyError> {
        let report = self.verify(plan).await?;
        if report.is_success() {
            Ok(report)
        } else {
            Err(VerifyError::VerificationFailed {
                failed: report.failed_checks().count(),
                total: report.checks.len(),
            })
        }
    }

    async fn collect_counts(&self) -> Result<VerificationCounts, VerifyError> {
        let category_rows = self.count(COUNT_CATEGORIES, None, "count categories").await?;
        let item_rows = self.count(COUNT_ITEMS, None, "count items").await?;

        Ok(VerificationCounts {
            category_rows,
            item_rows,
            malformed_codes: self.count(MALFORMED_CODES, None, "category code format").await?,
            duplicate_codes: self.count(DUPLICATE_CODES, None, "category code uniqueness").await?,
            out_of_sequence_codes: self
                .count(
                    OUT_OF_SEQUENCE_CODES,
                    Some(category_rows as i64),
                    "category code sequence",
                )
                .await?,
            malformed_skus: self.count(MALFORMED_SKUS, None, "item sku format").await?,
            duplicate_skus: self.count(DUPLICATE_SKUS, None, "item sku uniqueness").await?,
            out_of_sequence_skus: self
                .count(OUT_OF_SEQUENCE_SKUS, Some(item_rows as i64), "item sku sequence")
                .await?,
            orphan_items: self.count(ORPHAN_ITEMS, None, "item category references").await?,
            prices_out_of_range: self
                .count(PRICES_OUT_OF_RANGE, None, "item price range")
                .await?,
            stock_out_of_range: self
                .count(STOCK_OUT_OF_RANGE, None, "item stock range")
                .await?,
        })
    }

    async fn count(
        &self,
        sql: &str,
        bound: Option<i64>,
        context: &'static str,
    ) -> Result<u64, VerifyError> {
        let row = match bound {
            Some(bound) => self.client.query_one(sql, &[&bound]).await,
            None => self.client.query_one(sql, &[]).await,
        }
        .map_err(|source| VerifyError::Query { context, source })?;

        let count: i64 = row
            .try_get(0)
            .map_err(|source| VerifyError::Query { context, source })?;
        Ok(count.max(0) as u64)
    }
}
