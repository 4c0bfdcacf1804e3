use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Product, ProductFields};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryProductStore;
pub use postgres::SeaOrmProductStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for products. Each call touches a single row and is atomic on its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a new product; the store assigns the id and timestamps.
    async fn create(&self, fields: ProductFields) -> StoreResult<Product>;

    /// All products, ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Product>>;

    /// Overwrite the writable fields. `None` when no row has this id.
    async fn update(&self, id: i64, fields: ProductFields) -> StoreResult<Option<Product>>;

    /// `false` when no row has this id.
    async fn delete(&self, id: i64) -> StoreResult<bool>;
}
