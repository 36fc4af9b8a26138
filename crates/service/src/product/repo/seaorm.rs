use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set, Unchanged,
};
use tracing::debug;

use models::product;

use crate::errors::ServiceError;
use crate::product::domain::Product;
use crate::product::repository::ProductRepository;

pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

impl From<product::Model> for Product {
    fn from(m: product::Model) -> Self {
        Product { id: Some(m.id), name: m.name, description: m.description, price: m.price }
    }
}

/// Row for an INSERT; the store picks the id.
pub fn active_model_for_insert(p: &Product) -> product::ActiveModel {
    product::ActiveModel {
        id: NotSet,
        name: Set(p.name.clone()),
        description: Set(p.description.clone()),
        price: Set(p.price),
    }
}

/// Row for an UPDATE of `id`, overwriting every mutable column.
pub fn active_model_for_update(id: i64, p: &Product) -> product::ActiveModel {
    product::ActiveModel {
        id: Unchanged(id),
        name: Set(p.name.clone()),
        description: Set(p.description.clone()),
        price: Set(p.price),
    }
}

fn db_err(e: DbErr) -> ServiceError { ServiceError::Db(e.to_string()) }

#[async_trait::async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn save(&self, product: Product) -> Result<Product, ServiceError> {
        let saved = match product.id {
            None => active_model_for_insert(&product).insert(&self.db).await,
            Some(id) => match active_model_for_update(id, &product).update(&self.db).await {
                // id carried over from a row that no longer exists: insert afresh
                Err(DbErr::RecordNotUpdated) => {
                    debug!(id, "save of unknown id falls back to insert");
                    active_model_for_insert(&product).insert(&self.db).await
                }
                other => other,
            },
        }
        .map_err(db_err)?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        let res = product::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(res.map(Product::from))
    }

    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let res = product::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        debug!(id, rows_affected = res.rows_affected, "delete_by_id");
        Ok(())
    }

    async fn delete(&self, product: &Product) -> Result<(), ServiceError> {
        match product.id {
            Some(id) => self.delete_by_id(id).await,
            None => Ok(()),
        }
    }

    async fn delete_all(&self) -> Result<(), ServiceError> {
        let res = product::Entity::delete_many().exec(&self.db).await.map_err(db_err)?;
        debug!(rows_affected = res.rows_affected, "delete_all");
        Ok(())
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        product::Entity::find().count(&self.db).await.map_err(db_err)
    }
}
