pub mod customers;
pub mod health;

pub use customers::list_customers;
pub use health::{health_check, metrics_endpoint, readiness_check};
