use crate::services::store::CustomerStore;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
    collection: String,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, collection = %collection, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            // The URI carries credentials, keep it out of the logs
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self {
            client,
            db,
            collection: collection.to_string(),
        })
    }

    pub fn customers(&self) -> Collection<Document> {
        self.db.collection(&self.collection)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[async_trait]
impl CustomerStore for MongoDb {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        let cursor = self.customers().find(None, None).await.map_err(|e| {
            tracing::error!(collection = %self.collection, "Failed to query customers: {}", e);
            AppError::from(e)
        })?;

        let documents: Vec<Document> = cursor.try_collect().await.map_err(|e| {
            tracing::error!(collection = %self.collection, "Failed to read customer cursor: {}", e);
            AppError::from(e)
        })?;

        Ok(documents)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
