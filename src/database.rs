// src/database.rs
//! Startup-only concerns: pool creation, schema bootstrap, sample data.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    // Connectivity check up front so a bad DATABASE_URL fails loudly at boot
    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(&pool)
        .await?;
    tracing::info!(%version, "Database connection successful");

    Ok(pool)
}

pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS products (
            id          BIGSERIAL PRIMARY KEY,
            name        TEXT NOT NULL,
            description TEXT,
            price       DOUBLE PRECISION NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Seeds a handful of demo products, only when the table is empty.
pub async fn seed_products(pool: &PgPool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let samples = [
        (
            "Dell XPS 13",
            "Premium 13-inch laptop with Intel Core i7 and 16GB RAM",
            1299.0,
        ),
        (
            "iPhone 15 Pro",
            "Apple flagship smartphone with A17 Pro chip and 48MP camera",
            999.0,
        ),
        (
            "Samsung Galaxy Watch 6",
            "Smartwatch with GPS and health tracking",
            349.0,
        ),
        (
            "Sony WH-1000XM5",
            "Noise-cancelling over-ear headphones",
            399.0,
        ),
        (
            "MacBook Air M3",
            "Apple laptop with the M3 chip and a 13-inch Retina display",
            1099.0,
        ),
    ];

    for (name, description, price) in samples {
        sqlx::query("INSERT INTO products (name, description, price) VALUES ($1, $2, $3)")
            .bind(name)
            .bind(description)
            .bind(price)
            .execute(pool)
            .await?;
    }

    tracing::info!(count = samples.len(), "Seeded sample products");
    Ok(())
}
