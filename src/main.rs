//! Command-line interface for catalog-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Populate with defaults (2000 categories, 100000 items)
//! catalog-seed
//!
//! # Populate a remote database from a config file, overriding the item count
//! catalog-seed populate --config seed.yaml --items 250000
//!
//! # Verify an existing dataset
//! catalog-seed verify --categories 2000 --items 100000
//! ```

use catalog_seed::run::{run_populate, run_verify};
use catalog_seed::{PopulateArgs, VerifyArgs};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "catalog-seed")]
#[command(about = "Populate a PostgreSQL database with synthetic categories and items for benchmarking")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments for the default `populate` command
    #[command(flatten)]
    populate: PopulateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Clear both tables and load freshly generated data (default)
    Populate(PopulateArgs),

    /// Check row counts and value constraints of an existing dataset
    Verify(VerifyArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("\n✗ Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Populate(cli.populate)) {
        Commands::Populate(args) => run_populate(args).await,
        Commands::Verify(args) => run_verify(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_means_populate() {
        let cli = Cli::try_parse_from(["catalog-seed"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.populate.dry_run);
        assert_eq!(cli.populate.common.items, None);
    }

    #[test]
    fn test_top_level_flags() {
        let cli =
            Cli::try_parse_from(["catalog-seed", "--items", "10", "--dry-run"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.populate.common.items, Some(10));
        assert!(cli.populate.dry_run);
    }

    #[test]
    fn test_verify_subcommand() {
        let cli = Cli::try_parse_from([
            "catalog-seed",
            "verify",
            "--categories",
            "20",
            "--port",
            "6543",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Verify(args)) => {
                assert_eq!(args.common.categories, Some(20));
                assert_eq!(args.common.connection.port, Some(6543));
            }
            _ => panic!("Expected verify command"),
        }
    }
}
