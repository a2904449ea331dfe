pub mod customers;

pub use customers::CustomerResponse;
