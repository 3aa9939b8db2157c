//! PostgreSQL adapter for CommentRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::domain::entities::{Comment, NewComment};
use crate::domain::ports::CommentRepository;
use crate::entity::comments;
use crate::error::DomainError;

/// PostgreSQL implementation of CommentRepository
pub struct PostgresCommentRepository {
    db: DatabaseConnection,
}

impl PostgresCommentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: &NewComment) -> Result<Comment, DomainError> {
        let model = comments::ActiveModel {
            description: Set(comment.description.clone()),
            send_date: Set(comment.send_date.fixed_offset()),
            service_order_id: Set(comment.service_order_id.0),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }
}
