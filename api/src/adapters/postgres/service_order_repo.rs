//! PostgreSQL adapter for ServiceOrderRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::entities::{
    Comment, CustomerId, NewServiceOrder, ServiceOrder, ServiceOrderId, ServiceOrderStatus,
};
use crate::domain::ports::ServiceOrderRepository;
use crate::entity::{comments, service_orders};
use crate::error::DomainError;

use super::update_error;

/// PostgreSQL implementation of ServiceOrderRepository
pub struct PostgresServiceOrderRepository {
    db: DatabaseConnection,
}

impl PostgresServiceOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceOrderRepository for PostgresServiceOrderRepository {
    async fn find_all(&self) -> Result<Vec<ServiceOrder>, DomainError> {
        let results = service_orders::Entity::find()
            .order_by_asc(service_orders::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &ServiceOrderId) -> Result<Option<ServiceOrder>, DomainError> {
        let result = service_orders::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_with_comments(
        &self,
        id: &ServiceOrderId,
    ) -> Result<Option<ServiceOrder>, DomainError> {
        let Some(model) = service_orders::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        else {
            return Ok(None);
        };

        let thread = model
            .find_related(comments::Entity)
            .order_by_asc(comments::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut order: ServiceOrder = model.into();
        order.comments = thread.into_iter().map(|c| c.into()).collect();
        Ok(Some(order))
    }

    async fn find_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<ServiceOrder>, DomainError> {
        let results = service_orders::Entity::find()
            .filter(service_orders::Column::CustomerId.eq(customer_id.0))
            .order_by_asc(service_orders::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, order: &NewServiceOrder) -> Result<ServiceOrder, DomainError> {
        let model = service_orders::ActiveModel {
            description: Set(order.description.clone()),
            price: Set(order.price),
            status: Set(order.status.to_string()),
            opening_date: Set(order.opening_date.fixed_offset()),
            finish_date: Set(None),
            customer_id: Set(order.customer_id.0),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn finish(&self, order: &ServiceOrder) -> Result<(), DomainError> {
        let now = Utc::now().fixed_offset();

        service_orders::ActiveModel {
            id: Set(order.id.0),
            status: Set(ServiceOrderStatus::Finished.to_string()),
            finish_date: Set(Some(now)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| update_error(e, "Service order", order.id.0))?;

        Ok(())
    }

    async fn cancel(&self, order: &ServiceOrder) -> Result<(), DomainError> {
        service_orders::ActiveModel {
            id: Set(order.id.0),
            status: Set(ServiceOrderStatus::Cancelled.to_string()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| update_error(e, "Service order", order.id.0))?;

        Ok(())
    }
}

/// Unknown stored statuses read back as `OPEN`
fn parse_status(id: i32, raw: &str) -> ServiceOrderStatus {
    match raw.parse() {
        Ok(status) => status,
        Err(e) => {
            tracing::warn!(
                service_order_id = id,
                status = raw,
                error = %e,
                "Unreadable service order status, treating as OPEN"
            );
            ServiceOrderStatus::Open
        }
    }
}

/// Convert SeaORM model to domain entity (comments are loaded separately)
impl From<service_orders::Model> for ServiceOrder {
    fn from(model: service_orders::Model) -> Self {
        ServiceOrder {
            id: ServiceOrderId(model.id),
            description: model.description,
            price: model.price,
            status: parse_status(model.id, &model.status),
            opening_date: model.opening_date.with_timezone(&Utc),
            finish_date: model.finish_date.map(|dt| dt.with_timezone(&Utc)),
            customer_id: CustomerId(model.customer_id),
            comments: vec![],
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<comments::Model> for Comment {
    fn from(model: comments::Model) -> Self {
        Comment {
            id: model.id.into(),
            description: model.description,
            send_date: model.send_date.with_timezone(&Utc),
            service_order_id: ServiceOrderId(model.service_order_id),
        }
    }
}
