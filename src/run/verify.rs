//! Verify command runner.

use anyhow::Context;
use catalog_populate_postgresql::CatalogPopulator;
use catalog_verify::CatalogVerifier;

use super::print_banner;
use crate::{SeedConfig, VerifyArgs};

/// Run verify command against an existing dataset
pub async fn run_verify(args: VerifyArgs) -> anyhow::Result<()> {
    let config = SeedConfig::load(&args.common).context("Failed to load configuration")?;

    print_banner("Benchmark Data Verification");

    let populator = CatalogPopulator::connect(&config.connection)
        .await
        .context("Failed to connect to PostgreSQL")?;

    let report = CatalogVerifier::new(populator.client())
        .verify(&config.plan)
        .await
        .context("Verification query failed")?;

    let summary = populator
        .summary()
        .await
        .context("Failed to count rows")?;
    populator.close().await;

    println!("{summary}");
    println!("\n{report}");

    if !report.is_success() {
        anyhow::bail!("{}", report.summary());
    }

    Ok(())
}
