use async_trait::async_trait;
use mongodb::bson::Document;
use service_core::error::AppError;

/// Read access to the customer collection.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Every document currently in the collection, in natural order.
    async fn find_all(&self) -> Result<Vec<Document>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}
