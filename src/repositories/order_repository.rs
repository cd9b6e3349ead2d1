use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait};
use std::sync::Arc;

use crate::entities::order::{
    ActiveModel as OrderActiveModel, Entity as Order, Model as OrderModel,
};
use crate::errors::ServiceError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Repository for order persistence: find/insert/update/delete/exists.
#[derive(Debug)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find an order by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<OrderModel>, ServiceError> {
        Order::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    /// Insert a new order; the database populates the identity.
    pub async fn insert(&self, order: OrderActiveModel) -> Result<OrderModel, ServiceError> {
        order
            .insert(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    /// Update an existing order in place.
    pub async fn update(&self, order: OrderActiveModel) -> Result<OrderModel, ServiceError> {
        order
            .update(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    /// Delete an order
    pub async fn delete(&self, order: OrderModel) -> Result<(), ServiceError> {
        order
            .delete(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)?;

        Ok(())
    }

    /// Whether an order with the given ID is persisted.
    pub async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let count = Order::find_by_id(id)
            .count(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)?;

        Ok(count > 0)
    }
}

impl Repository for OrderRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
