// src/repositories/product.rs
//! Storage contract for products plus the Postgres implementation.
//! Queries are explicit SQL; no derived query magic.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::product::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error>;

    /// Inserts when `id` is unset (the row comes back with one), updates
    /// otherwise.
    async fn save(&self, product: Product) -> Result<Product, sqlx::Error>;

    async fn delete(&self, product: &Product) -> Result<(), sqlx::Error>;

    /// Case-insensitive substring match on name. An empty fragment matches
    /// every row.
    async fn find_by_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Product>, sqlx::Error>;

    /// Inclusive price interval.
    async fn find_by_price_between(
        &self,
        min: f64,
        max: f64,
    ) -> Result<Vec<Product>, sqlx::Error>;

    /// Substring match on name OR description.
    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Product>, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn save(&self, product: Product) -> Result<Product, sqlx::Error> {
        match product.id {
            None => {
                sqlx::query_as::<_, Product>(
                    "INSERT INTO products (name, description, price)
                     VALUES ($1, $2, $3)
                     RETURNING id, name, description, price",
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .fetch_one(&self.pool)
                .await
            }
            Some(id) => {
                sqlx::query_as::<_, Product>(
                    "UPDATE products
                     SET name = $1, description = $2, price = $3
                     WHERE id = $4
                     RETURNING id, name, description, price",
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(id)
                .fetch_one(&self.pool)
                .await
            }
        }
    }

    async fn delete(&self, product: &Product) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products
             WHERE name ILIKE '%' || $1 || '%'
             ORDER BY id",
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await
    }

    async fn find_by_price_between(
        &self,
        min: f64,
        max: f64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products
             WHERE price BETWEEN $1 AND $2
             ORDER BY id",
        )
        .bind(min)
        .bind(max)
        .fetch_all(&self.pool)
        .await
    }

    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products
             WHERE name LIKE '%' || $1 || '%'
                OR description LIKE '%' || $1 || '%'
             ORDER BY id",
        )
        .bind(keyword)
        .fetch_all(&self.pool)
        .await
    }
}

/// In-memory repository with the same match semantics as the SQL above,
/// used by service and router tests.
#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Store {
        rows: Vec<Product>,
        next_id: i64,
    }

    #[derive(Default)]
    pub struct InMemoryProductRepository {
        store: Mutex<Store>,
    }

    impl InMemoryProductRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryProductRepository {
        async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
            Ok(self.store.lock().unwrap().rows.clone())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
            let store = self.store.lock().unwrap();
            Ok(store.rows.iter().find(|p| p.id == Some(id)).cloned())
        }

        async fn save(&self, mut product: Product) -> Result<Product, sqlx::Error> {
            let mut store = self.store.lock().unwrap();
            match product.id {
                None => {
                    store.next_id += 1;
                    product.id = Some(store.next_id);
                    store.rows.push(product.clone());
                }
                Some(id) => {
                    if let Some(row) = store.rows.iter_mut().find(|p| p.id == Some(id)) {
                        *row = product.clone();
                    }
                }
            }
            Ok(product)
        }

        async fn delete(&self, product: &Product) -> Result<(), sqlx::Error> {
            let mut store = self.store.lock().unwrap();
            store.rows.retain(|p| p.id != product.id);
            Ok(())
        }

        async fn find_by_name_containing_ignore_case(
            &self,
            fragment: &str,
        ) -> Result<Vec<Product>, sqlx::Error> {
            let needle = fragment.to_lowercase();
            let store = self.store.lock().unwrap();
            Ok(store
                .rows
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }

        async fn find_by_price_between(
            &self,
            min: f64,
            max: f64,
        ) -> Result<Vec<Product>, sqlx::Error> {
            let store = self.store.lock().unwrap();
            Ok(store
                .rows
                .iter()
                .filter(|p| p.price >= min && p.price <= max)
                .cloned()
                .collect())
        }

        async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Product>, sqlx::Error> {
            let store = self.store.lock().unwrap();
            Ok(store
                .rows
                .iter()
                .filter(|p| {
                    p.name.contains(keyword)
                        || p.description.as_deref().is_some_and(|d| d.contains(keyword))
                })
                .cloned()
                .collect())
        }
    }
}
