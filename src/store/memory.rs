use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    models::{Product, ProductFields},
    store::{ProductStore, StoreResult},
};

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Product>,
}

/// In-memory implementation of [`ProductStore`] for tests and local development.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn create(&self, fields: ProductFields) -> StoreResult<Product> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let now = Utc::now();
        let product = Product {
            id: table.last_id,
            name: fields.name,
            price: fields.price,
            availability: fields.availability,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "created product");
        Ok(product)
    }

    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(&self, id: i64, fields: ProductFields) -> StoreResult<Option<Product>> {
        let mut table = self.table.write().await;
        let Some(product) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        product.name = fields.name;
        product.price = fields.price;
        product.availability = fields.availability;
        product.updated_at = Utc::now();

        tracing::info!(product_id = id, "updated product");
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let mut table = self.table.write().await;
        if table.rows.remove(&id).is_some() {
            tracing::info!(product_id = id, "deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
