//! PostgreSQL populator for catalog benchmark data.

use crate::connection::ConnectionConfig;
use crate::error::PopulateError;
use crate::insert::{
    analyze_sql, count_sql, insert_rows, ANALYZE_TABLES, CREATE_SCHEMA_SQL,
    SELECT_CATEGORY_IDS_SQL, TRUNCATE_SQL,
};
use catalog_core::{
    CategoryId, NewCategory, NewItem, SeedPlan, Summary, CATEGORY_TABLE, DEFAULT_BATCH_SIZE,
    ITEM_TABLE,
};
use catalog_generator::CatalogGenerator;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio_postgres::{Client, NoTls, Transaction};
use tracing::{debug, info};

/// Metrics from one populate phase.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows inserted.
    pub rows_inserted: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent inserting data.
    pub insert_duration: Duration,
    /// Number of batches executed.
    pub batch_count: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Outcome of a full [`CatalogPopulator::run`].
#[derive(Debug, Clone)]
pub struct PopulateReport {
    pub categories: PopulateMetrics,
    pub items: PopulateMetrics,
    /// Row counts read back from the store after statistics were refreshed.
    pub summary: Summary,
    pub total_duration: Duration,
}

/// Owns the single connection used for a seeding run.
///
/// Dropping the populator closes the connection, so early returns on error
/// release it as well. [`CatalogPopulator::close`] additionally waits for the
/// connection task to finish.
pub struct CatalogPopulator {
    client: Client,
    connection: JoinHandle<()>,
    batch_size: usize,
}

impl CatalogPopulator {
    /// Connect and verify the connection with a trivial query.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self, PopulateError> {
        let pg_config = config.to_pg_config()?;

        info!("Connecting to {}", config);
        let (client, connection) = pg_config
            .connect(NoTls)
            .await
            .map_err(PopulateError::Connection)?;

        // Spawn the connection task
        let connection = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {}", e);
            }
        });

        // Test connection
        client
            .simple_query("SELECT 1")
            .await
            .map_err(PopulateError::Connection)?;

        Ok(Self {
            client,
            connection,
            batch_size: DEFAULT_BATCH_SIZE,
        })
    }

    /// Set the number of items per INSERT flush.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Access the underlying client, e.g. for verification.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Create both tables if they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), PopulateError> {
        info!("Ensuring tables '{}' and '{}' exist", CATEGORY_TABLE, ITEM_TABLE);
        self.client
            .batch_execute(CREATE_SCHEMA_SQL)
            .await
            .map_err(|e| PopulateError::from_query("create schema", e))
    }

    /// Remove all rows from both tables in a transaction of its own.
    pub async fn clear(&mut self) -> Result<(), PopulateError> {
        let tx = self
            .client
            .transaction()
            .await
            .map_err(|e| PopulateError::from_query("begin clear transaction", e))?;
        truncate_tables(&tx).await?;
        tx.commit()
            .await
            .map_err(|e| PopulateError::from_query("commit clear", e))?;
        println!("Data cleared");
        Ok(())
    }

    /// Generate `count` categories and insert them as one bulk write, then commit.
    ///
    /// Existing rows are left alone; see [`CatalogPopulator::replace_categories`].
    pub async fn populate_categories(
        &mut self,
        generator: &mut CatalogGenerator,
        count: u64,
    ) -> Result<PopulateMetrics, PopulateError> {
        self.write_categories(generator, count, false).await
    }

    /// Clear both tables and insert `count` fresh categories in one transaction.
    ///
    /// If any category fails to insert the clear is rolled back with it and the
    /// previous rows stay in place.
    pub async fn replace_categories(
        &mut self,
        generator: &mut CatalogGenerator,
        count: u64,
    ) -> Result<PopulateMetrics, PopulateError> {
        self.write_categories(generator, count, true).await
    }

    async fn write_categories(
        &mut self,
        generator: &mut CatalogGenerator,
        count: u64,
        clear_first: bool,
    ) -> Result<PopulateMetrics, PopulateError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let tx = self
            .client
            .transaction()
            .await
            .map_err(|e| PopulateError::from_query("begin category transaction", e))?;

        if clear_first {
            truncate_tables(&tx).await?;
            println!("Data cleared");
        }

        info!("Generating {} categories", count);

        let gen_start = Instant::now();
        let categories: Vec<NewCategory> = generator.categories(count).collect();
        metrics.generation_duration = gen_start.elapsed();

        let insert_start = Instant::now();
        metrics.rows_inserted = insert_rows(&tx, &categories).await?;
        tx.commit()
            .await
            .map_err(|e| PopulateError::from_write(CATEGORY_TABLE, e))?;
        metrics.insert_duration = insert_start.elapsed();
        metrics.batch_count = 1;
        metrics.total_duration = start_time.elapsed();

        info!(
            "Generated {} categories in {:?}",
            metrics.rows_inserted, metrics.total_duration
        );

        Ok(metrics)
    }

    /// Read back every category identifier assigned by the store.
    pub async fn fetch_category_ids(&self) -> Result<Vec<CategoryId>, PopulateError> {
        let rows = self
            .client
            .query(SELECT_CATEGORY_IDS_SQL, &[])
            .await
            .map_err(|e| PopulateError::from_query("fetch category ids", e))?;

        let ids = rows
            .iter()
            .map(|row| row.try_get::<_, CategoryId>(0))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| PopulateError::from_query("decode category id", e))?;

        debug!("Fetched {} category ids", ids.len());
        Ok(ids)
    }

    /// Generate `count` items referencing `category_ids`.
    ///
    /// Items are flushed every `batch_size` rows (plus once for the remainder)
    /// inside a single transaction that commits after the last flush, so a
    /// failure part-way through leaves no items behind.
    pub async fn populate_items(
        &mut self,
        generator: &mut CatalogGenerator,
        count: u64,
        category_ids: &[CategoryId],
    ) -> Result<PopulateMetrics, PopulateError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        if count > 0 && category_ids.is_empty() {
            return Err(catalog_generator::GeneratorError::NoCategories.into());
        }

        info!(
            "Generating {} items (batch size: {})",
            count, self.batch_size
        );

        let batch_size = self.batch_size as u64;
        let tx = self
            .client
            .transaction()
            .await
            .map_err(|e| PopulateError::from_query("begin item transaction", e))?;

        let mut remaining = count;
        let mut generation_time = Duration::ZERO;
        let mut insert_time = Duration::ZERO;

        while remaining > 0 {
            let batch_count = std::cmp::min(remaining, batch_size);

            // Generate rows
            let gen_start = Instant::now();
            let rows: Vec<NewItem> = generator.items(batch_count, category_ids)?.collect();
            generation_time += gen_start.elapsed();

            // Insert rows
            let insert_start = Instant::now();
            let inserted = insert_rows(&tx, &rows).await?;
            insert_time += insert_start.elapsed();

            metrics.rows_inserted += inserted;
            metrics.batch_count += 1;
            remaining -= batch_count;

            println!("{}", progress_line(count - remaining, count));
            debug!(
                "Batch {} complete: {} rows inserted, {} remaining",
                metrics.batch_count, inserted, remaining
            );
        }

        let commit_start = Instant::now();
        tx.commit()
            .await
            .map_err(|e| PopulateError::from_write(ITEM_TABLE, e))?;
        insert_time += commit_start.elapsed();

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.insert_duration = insert_time;

        info!(
            "Generated {} items in {:?} ({:.2} rows/sec)",
            metrics.rows_inserted,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Refresh planner statistics for both tables.
    pub async fn refresh_statistics(&self) -> Result<(), PopulateError> {
        info!("Updating statistics");
        for table in ANALYZE_TABLES {
            self.client
                .batch_execute(&analyze_sql(table))
                .await
                .map_err(PopulateError::Statistics)?;
        }
        Ok(())
    }

    /// Get the row count for a table.
    pub async fn row_count(&self, table_name: &str) -> Result<u64, PopulateError> {
        let row = self
            .client
            .query_one(&count_sql(table_name), &[])
            .await
            .map_err(|e| PopulateError::from_query(format!("count rows in {table_name}"), e))?;
        let count: i64 = row.get(0);
        Ok(count as u64)
    }

    /// Count both tables.
    pub async fn summary(&self) -> Result<Summary, PopulateError> {
        Ok(Summary::new(
            self.row_count(CATEGORY_TABLE).await?,
            self.row_count(ITEM_TABLE).await?,
        ))
    }

    /// Run the whole sequence: clear, categories, ids, items, statistics, summary.
    ///
    /// The clear commits together with the categories. Items are flushed in
    /// batches of [`CatalogPopulator::batch_size`]; `plan.batch_size` is only
    /// read by whoever builds the populator.
    pub async fn run(
        &mut self,
        generator: &mut CatalogGenerator,
        plan: &SeedPlan,
    ) -> Result<PopulateReport, PopulateError> {
        let start_time = Instant::now();

        info!("Clearing existing data");
        let categories = self.replace_categories(generator, plan.categories).await?;

        let category_ids = self.fetch_category_ids().await?;

        let items = self
            .populate_items(generator, plan.items, &category_ids)
            .await?;

        self.refresh_statistics().await?;

        let summary = self.summary().await?;

        Ok(PopulateReport {
            categories,
            items,
            summary,
            total_duration: start_time.elapsed(),
        })
    }

    /// Close the connection and wait for its task to finish.
    pub async fn close(self) {
        drop(self.client);
        if let Err(e) = self.connection.await {
            tracing::warn!("PostgreSQL connection task ended abnormally: {}", e);
        }
    }
}

fn progress_line(done: u64, total: u64) -> String {
    format!("Progress: {done}/{total} items")
}

async fn truncate_tables(tx: &Transaction<'_>) -> Result<(), PopulateError> {
    tx.batch_execute(TRUNCATE_SQL)
        .await
        .map_err(|e| PopulateError::from_query("truncate tables", e))
}
