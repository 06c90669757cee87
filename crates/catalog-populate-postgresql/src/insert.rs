//! Batched INSERT logic and the statements the loader issues.

use crate::error::PopulateError;
use catalog_core::{NewCategory, NewItem, CATEGORY_TABLE, ITEM_TABLE};
use tokio_postgres::types::ToSql;
use tokio_postgres::Transaction;

/// PostgreSQL accepts at most this many bind parameters per statement.
pub const MAX_BIND_PARAMS: usize = 65_535;

/// Empties both tables. Item rows go with their categories.
pub const TRUNCATE_SQL: &str = "TRUNCATE TABLE \"item\", \"category\" RESTART IDENTITY CASCADE";

/// Reads back the identifiers assigned to categories.
pub const SELECT_CATEGORY_IDS_SQL: &str = "SELECT \"id\" FROM \"category\" ORDER BY \"id\"";

/// Tables whose planner statistics are refreshed after a run, in order.
pub const ANALYZE_TABLES: [&str; 2] = [CATEGORY_TABLE, ITEM_TABLE];

/// DDL for the two tables, matching the layout the benchmark application expects.
pub const CREATE_SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS "category" (
    "id" BIGSERIAL PRIMARY KEY,
    "code" VARCHAR(32) NOT NULL UNIQUE,
    "name" VARCHAR(128) NOT NULL,
    "updated_at" TIMESTAMP NOT NULL
);
CREATE TABLE IF NOT EXISTS "item" (
    "id" BIGSERIAL PRIMARY KEY,
    "sku" VARCHAR(32) NOT NULL UNIQUE,
    "name" VARCHAR(128) NOT NULL,
    "price" NUMERIC(10, 2) NOT NULL,
    "stock" INTEGER NOT NULL,
    "category_id" BIGINT NOT NULL REFERENCES "category" ("id") ON DELETE CASCADE,
    "updated_at" TIMESTAMP NOT NULL
);
CREATE INDEX IF NOT EXISTS "idx_item_category_id" ON "item" ("category_id");
"#;

/// A row type that can be written with a multi-row INSERT.
pub trait InsertRow {
    /// Target table
    const TABLE: &'static str;
    /// Columns in bind order
    const COLUMNS: &'static [&'static str];

    /// Append this row's values in [`Self::COLUMNS`] order.
    fn push_params<'a>(&'a self, params: &mut Vec<&'a (dyn ToSql + Sync)>);
}

impl InsertRow for NewCategory {
    const TABLE: &'static str = CATEGORY_TABLE;
    const COLUMNS: &'static [&'static str] = &["code", "name", "updated_at"];

    fn push_params<'a>(&'a self, params: &mut Vec<&'a (dyn ToSql + Sync)>) {
        params.push(&self.code);
        params.push(&self.name);
        params.push(&self.updated_at);
    }
}

impl InsertRow for NewItem {
    const TABLE: &'static str = ITEM_TABLE;
    const COLUMNS: &'static [&'static str] = &[
        "sku",
        "name",
        "price",
        "stock",
        "category_id",
        "updated_at",
    ];

    fn push_params<'a>(&'a self, params: &mut Vec<&'a (dyn ToSql + Sync)>) {
        params.push(&self.sku);
        params.push(&self.name);
        params.push(&self.price);
        params.push(&self.stock);
        params.push(&self.category_id);
        params.push(&self.updated_at);
    }
}

/// Largest number of rows one INSERT can carry for `column_count` columns.
pub fn max_rows_per_statement(column_count: usize) -> usize {
    (MAX_BIND_PARAMS / column_count.max(1)).max(1)
}

/// Build `INSERT INTO "table" ("a", "b") VALUES ($1, $2), ($3, $4), ...`.
pub fn build_insert_sql(table: &str, columns: &[&str], row_count: usize) -> String {
    let col_count = columns.len();
    let mut placeholders: Vec<String> = Vec::with_capacity(row_count);
    let mut param_idx = 1;

    for _ in 0..row_count {
        let row_placeholders: Vec<String> = (0..col_count)
            .map(|_| {
                let p = format!("${param_idx}");
                param_idx += 1;
                p
            })
            .collect();
        placeholders.push(format!("({})", row_placeholders.join(", ")));
    }

    format!(
        "INSERT INTO \"{}\" ({}) VALUES {}",
        table,
        columns
            .iter()
            .map(|c| format!("\"{c}\""))
            .collect::<Vec<_>>()
            .join(", "),
        placeholders.join(", ")
    )
}

/// Insert `rows` inside `tx`.
///
/// Rows are split into as few statements as the bind-parameter limit allows;
/// nothing is visible to other sessions until the caller commits.
pub async fn insert_rows<R: InsertRow + Sync>(
    tx: &Transaction<'_>,
    rows: &[R],
) -> Result<u64, PopulateError> {
    if rows.is_empty() {
        return Ok(0);
    }

    let mut inserted = 0;
    for chunk in rows.chunks(max_rows_per_statement(R::COLUMNS.len())) {
        let sql = build_insert_sql(R::TABLE, R::COLUMNS, chunk.len());

        let mut params: Vec<&(dyn ToSql + Sync)> = Vec::with_capacity(chunk.len() * R::COLUMNS.len());
        for row in chunk {
            row.push_params(&mut params);
        }

        inserted += tx
            .execute(&sql, &params)
            .await
            .map_err(|e| PopulateError::from_write(R::TABLE, e))?;
    }

    Ok(inserted)
}

/// Generate `ANALYZE` statement.
pub fn analyze_sql(table: &str) -> String {
    format!("ANALYZE \"{table}\"")
}

/// Generate `SELECT COUNT(*)` statement.
pub fn count_sql(table: &str) -> String {
    format!("SELECT COUNT(*) FROM \"{table}\"")
}
