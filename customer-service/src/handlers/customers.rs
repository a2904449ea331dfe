use crate::dtos::CustomerResponse;
use crate::services::metrics::record_customer_list;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use std::time::Instant;

/// `GET /customer`: the whole collection, unpaginated.
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let start = Instant::now();

    let documents = match state.store.find_all().await {
        Ok(documents) => documents,
        Err(e) => {
            record_customer_list("error", 0, start.elapsed());
            return Err(e);
        }
    };

    let customers: Vec<CustomerResponse> =
        documents.into_iter().map(CustomerResponse::from).collect();

    record_customer_list("success", customers.len(), start.elapsed());
    tracing::info!(
        collection = %state.config.mongodb.collection,
        count = customers.len(),
        "Listed customers"
    );

    Ok(Json(customers))
}
