use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use crate::{
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    models::{Product, ProductFields},
    store::{ProductStore, StoreResult},
};

#[derive(Clone)]
pub struct SeaOrmProductStore {
    conn: DatabaseConnection,
}

impl SeaOrmProductStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ProductStore for SeaOrmProductStore {
    async fn create(&self, fields: ProductFields) -> StoreResult<Product> {
        let active = ActiveModel {
            id: NotSet,
            name: Set(fields.name),
            price: Set(fields.price),
            availability: Set(fields.availability),
            created_at: NotSet,
            updated_at: NotSet,
        };
        let model = active.insert(&self.conn).await?;

        tracing::info!(product_id = model.id, "created product");
        Ok(model.into())
    }

    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        let items = Products::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Product::from)
            .collect();
        Ok(items)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Product>> {
        let model = Products::find_by_id(id).one(&self.conn).await?;
        Ok(model.map(Product::from))
    }

    async fn update(&self, id: i64, fields: ProductFields) -> StoreResult<Option<Product>> {
        let existing = match Products::find_by_id(id).one(&self.conn).await? {
            Some(model) => model,
            None => return Ok(None),
        };

        let mut active: ActiveModel = existing.into();
        active.name = Set(fields.name);
        active.price = Set(fields.price);
        active.availability = Set(fields.availability);
        active.updated_at = Set(Utc::now().fixed_offset());

        match active.update(&self.conn).await {
            Ok(model) => {
                tracing::info!(product_id = id, "updated product");
                Ok(Some(model.into()))
            }
            // The row was deleted between the lookup and the update.
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = Products::delete_by_id(id).exec(&self.conn).await?;
        let deleted = result.rows_affected > 0;
        if deleted {
            tracing::info!(product_id = id, "deleted product");
        }
        Ok(deleted)
    }
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: model.id,
            name: model.name,
            price: model.price,
            availability: model.availability,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
