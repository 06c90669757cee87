//! Full populate -> verify workflow against PostgreSQL.

use catalog_core::{parse_category_code, parse_item_sku, SeedPlan};
use catalog_generator::CatalogGenerator;
use catalog_populate_postgresql::CatalogPopulator;
use catalog_seed::testing::{generate_test_id, PostgresTestSchema};
use catalog_verify::CatalogVerifier;
use rust_decimal::Decimal;
use std::collections::HashSet;

const SEED: u64 = 42;

fn small_plan() -> SeedPlan {
    SeedPlan {
        categories: 20,
        items: 2_500,
        batch_size: 1_000,
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_populate_small_scale() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("catalog_seed=info,catalog_populate_postgresql=info")
        .try_init()
        .ok();

    let schema = PostgresTestSchema::create(generate_test_id()).await?;
    let plan = small_plan();

    let mut generator = CatalogGenerator::new(Some(SEED));
    let mut populator = CatalogPopulator::connect(&schema.connection_config())
        .await?
        .with_batch_size(plan.batch_size);

    let report = populator.run(&mut generator, &plan).await?;

    assert_eq!(report.summary.category_count, plan.categories);
    assert_eq!(report.summary.item_count, plan.items);
    assert_eq!(report.categories.rows_inserted, plan.categories);
    assert_eq!(report.items.rows_inserted, plan.items);
    // 1000 + 1000 + 500
    assert_eq!(report.items.batch_count, 3);
    assert_eq!(report.summary.average_items_per_category(), 125.0);

    let verification = CatalogVerifier::new(populator.client()).verify(&plan).await?;
    assert!(verification.is_success(), "{verification}");

    populator.close().await;

    // Inspect the rows directly
    let client = schema.client().await?;

    let ids: HashSet<i64> = client
        .query("SELECT id FROM category", &[])
        .await?
        .iter()
        .map(|row| row.get(0))
        .collect();

    let codes: Vec<String> = client
        .query("SELECT code FROM category ORDER BY code", &[])
        .await?
        .iter()
        .map(|row| row.get(0))
        .collect();
    let sequence: Vec<u64> = codes
        .iter()
        .map(|code| parse_category_code(code).expect("malformed code"))
        .collect();
    assert_eq!(sequence, (1..=plan.categories).collect::<Vec<_>>());

    let min_price = Decimal::new(1_000, 2);
    let max_price = Decimal::new(100_000, 2);
    for row in client
        .query("SELECT sku, price, stock, category_id FROM item", &[])
        .await?
    {
        let sku: String = row.get(0);
        let price: Decimal = row.get(1);
        let stock: i32 = row.get(2);
        let category_id: i64 = row.get(3);

        assert!(parse_item_sku(&sku).is_some());
        assert!(price >= min_price && price <= max_price);
        assert!((0..=1000).contains(&stock));
        assert!(ids.contains(&category_id));
    }

    schema.cleanup().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_rerun_yields_same_counts() -> anyhow::Result<()> {
    let schema = PostgresTestSchema::create(generate_test_id()).await?;
    let plan = SeedPlan {
        categories: 10,
        items: 300,
        batch_size: 100,
    };

    for _ in 0..2 {
        // Unseeded: values differ between runs, counts must not
        let mut generator = CatalogGenerator::new(None);
        let mut populator = CatalogPopulator::connect(&schema.connection_config()).await?;

        let report = populator.run(&mut generator, &plan).await?;
        assert_eq!(report.summary.category_count, 10);
        assert_eq!(report.summary.item_count, 300);

        let verification = CatalogVerifier::new(populator.client())
            .verify_strict(&plan)
            .await?;
        assert!(verification.is_success());

        populator.close().await;
    }

    schema.cleanup().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_run_replaces_existing_rows() -> anyhow::Result<()> {
    let schema = PostgresTestSchema::create(generate_test_id()).await?;

    let mut populator = CatalogPopulator::connect(&schema.connection_config()).await?;

    let large = SeedPlan {
        categories: 30,
        items: 900,
        batch_size: 250,
    };
    populator
        .run(&mut CatalogGenerator::new(Some(1)), &large)
        .await?;

    let small = SeedPlan {
        categories: 3,
        items: 30,
        batch_size: 250,
    };
    let report = populator
        .run(&mut CatalogGenerator::new(Some(2)), &small)
        .await?;

    assert_eq!(report.summary.category_count, 3);
    assert_eq!(report.summary.item_count, 30);
    assert_eq!(populator.fetch_category_ids().await?, vec![1, 2, 3]);

    populator.close().await;
    schema.cleanup().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_run_uses_populator_batch_size() -> anyhow::Result<()> {
    let schema = PostgresTestSchema::create(generate_test_id()).await?;
    let mut populator = CatalogPopulator::connect(&schema.connection_config())
        .await?
        .with_batch_size(7);

    let plan = SeedPlan {
        categories: 2,
        items: 20,
        batch_size: 1_000,
    };
    let report = populator
        .run(&mut CatalogGenerator::new(Some(3)), &plan)
        .await?;

    // 7 + 7 + 6
    assert_eq!(populator.batch_size(), 7);
    assert_eq!(report.items.batch_count, 3);
    assert_eq!(report.summary.item_count, 20);

    populator.close().await;
    schema.cleanup().await?;
    Ok(())
}
