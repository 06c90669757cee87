//! catalog-seed library
//!
//! Fills a PostgreSQL database with synthetic categories and items for
//! benchmarking. A run clears both tables, inserts the categories, reads back
//! their store-assigned identifiers, inserts the items in batches, refreshes
//! planner statistics and reports the resulting row counts.
//!
//! # Crates
//!
//! - `catalog_core` - entity types, key formatting, run plan and summary
//! - `catalog_generator` - seedable synthetic record generator
//! - `catalog_populate_postgresql` - connection handling and batched loading
//! - `catalog_verify` - post-run verification queries
//!
//! # CLI Usage
//!
//! ```bash
//! # Defaults: 2000 categories, 100000 items against localhost/benchmark_db
//! catalog-seed
//!
//! # Reproducible smaller run, then verify the result
//! catalog-seed populate --categories 100 --items 5000 --seed 42 --verify
//!
//! # Check an existing dataset
//! catalog-seed verify --categories 2000 --items 100000
//! ```

use catalog_populate_postgresql::PostgreSQLConnectionArgs;
use clap::Args;
use std::path::PathBuf;

pub mod config;
pub mod run;
pub mod testing;

pub use config::{ConfigError, SeedConfig};

/// Arguments shared by every command.
#[derive(Args, Clone, Debug, Default)]
pub struct SeedArgs {
    /// Path to a YAML configuration file
    #[arg(long, short = 'c', value_name = "PATH", env = "CATALOG_SEED_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub connection: PostgreSQLConnectionArgs,

    /// Number of categories to generate [default: 2000]
    #[arg(long, env = "CATALOG_SEED_CATEGORIES")]
    pub categories: Option<u64>,

    /// Number of items to generate [default: 100000]
    #[arg(long, env = "CATALOG_SEED_ITEMS")]
    pub items: Option<u64>,

    /// Items per INSERT batch [default: 1000]
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Random seed for reproducible values (same seed = same data)
    #[arg(long, env = "CATALOG_SEED_SEED")]
    pub seed: Option<u64>,
}

/// Arguments for `populate`.
#[derive(Args, Clone, Debug, Default)]
pub struct PopulateArgs {
    #[command(flatten)]
    pub common: SeedArgs,

    /// Create the tables first if they do not exist
    #[arg(long)]
    pub create_schema: bool,

    /// Verify the dataset after loading
    #[arg(long)]
    pub verify: bool,

    /// Dry run mode - validate configuration and show the plan without connecting
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `verify`.
#[derive(Args, Clone, Debug, Default)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub common: SeedArgs,
}
