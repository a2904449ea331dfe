#![allow(dead_code)]

use customer_service::config::{CustomerConfig, MongoConfig};
use customer_service::services::InMemoryStore;
use customer_service::startup::{build_router, AppState, Application};
use mongodb::bson::Document;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub fn test_config() -> CustomerConfig {
    CustomerConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            log_level: "error".to_string(),
            otlp_endpoint: None,
        },
        mongodb: MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "customer_test".to_string(),
            collection: "Customers".to_string(),
        },
    }
}

/// Router over an in-memory store, for `oneshot` tests.
pub fn test_router(store: Arc<InMemoryStore>) -> axum::Router {
    build_router(AppState {
        config: test_config(),
        store,
    })
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    pub async fn spawn(documents: Vec<Document>) -> Self {
        let store = Arc::new(InMemoryStore::with_documents(documents));

        let app = Application::build_with_store(test_config(), store.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
        }
    }

    pub fn customers_url(&self) -> String {
        format!("{}/customer", self.address)
    }
}
