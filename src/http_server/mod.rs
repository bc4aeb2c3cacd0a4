//! HTTP server module
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/sales` - Sale record search
//! - `/api/load-data` - Bulk load from the row source
//! - `/observability/metrics` - Counters

pub mod errors;
pub mod observability_routes;
pub mod sales_routes;
pub mod server;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use server::HttpServer;
