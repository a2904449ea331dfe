//! Runs against a real MongoDB. Set `MONGODB_URI` (defaults to a local instance)
//! and run with `cargo test -- --ignored`.

mod common;

use common::test_config;
use customer_service::services::{CustomerStore, MongoDb};
use customer_service::startup::Application;
use mongodb::bson::{doc, oid::ObjectId};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

async fn connect_test_db() -> (MongoDb, String) {
    dotenvy::dotenv().ok();
    let uri =
        std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let db_name = format!("customer_test_{}", Uuid::new_v4());
    let db = MongoDb::connect(&uri, &db_name, "Customers")
        .await
        .expect("Failed to connect to MongoDB");
    (db, db_name)
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn lists_customers_from_mongodb() {
    let (db, db_name) = connect_test_db().await;
    let oid = ObjectId::new();
    db.customers()
        .insert_many(
            vec![
                doc! { "_id": oid, "fullName": "Ada Lovelace", "discount": 10 },
                doc! { "fullName": "Alan Turing" },
            ],
            None,
        )
        .await
        .expect("Failed to seed customers");

    assert_eq!(db.find_all().await.unwrap().len(), 2);

    let mut config = test_config();
    config.mongodb.database = db_name.clone();
    let app = Application::build_with_store(config, Arc::new(db.clone()))
        .await
        .expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", app.port());
    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    let customers: Vec<Value> = reqwest::get(format!("{}/customer", address))
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0]["_id"], oid.to_hex());
    assert_eq!(customers[0]["discount"], 10);
    assert!(customers[1]["_id"].is_string());

    let _ = db.client().database(&db_name).drop(None).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn health_check_pings_mongodb() {
    let (db, _) = connect_test_db().await;

    db.health_check().await.expect("MongoDB ping failed");
}
