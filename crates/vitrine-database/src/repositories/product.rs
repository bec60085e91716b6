//! Product repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use vitrine_core::error::{AppError, ErrorKind};
use vitrine_core::result::AppResult;
use vitrine_entity::product::Product;

use crate::store::ProductStore;

/// PostgreSQL-backed [`ProductStore`].
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find product by id", e)
            })
    }

    async fn find_low_stock(&self) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE quantity <= min_quantity ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list low-stock products", e)
        })
    }

    async fn create(&self, product: &Product) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO products (id, name, quantity, min_quantity, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.min_quantity)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create product", e))?;
        Ok(())
    }
}
