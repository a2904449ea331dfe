use crate::services::store::CustomerStore;
use async_trait::async_trait;
use mongodb::bson::Document;
use service_core::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Store backed by a vector, for tests and local runs without MongoDB.
pub struct InMemoryStore {
    pub documents: Mutex<Vec<Document>>,
    available: AtomicBool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_documents(Vec::new())
    }

    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: Mutex::new(documents),
            available: AtomicBool::new(true),
        }
    }

    pub fn insert(&self, document: Document) -> Result<(), AppError> {
        self.documents
            .lock()
            .map_err(|e| anyhow::anyhow!("In-memory store mutex poisoned: {}", e))?
            .push(document);
        Ok(())
    }

    /// Simulates the database going away (or coming back).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<(), AppError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::DatabaseError(anyhow::anyhow!(
                "in-memory store is unavailable"
            )))
        }
    }
}

#[async_trait]
impl CustomerStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        self.ensure_available()?;
        let documents = self
            .documents
            .lock()
            .map_err(|e| anyhow::anyhow!("In-memory store mutex poisoned: {}", e))?
            .clone();
        Ok(documents)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.ensure_available()
    }
}
