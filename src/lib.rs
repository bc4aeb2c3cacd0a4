//! retaildb - filtered, sorted, paginated search over retail sale records
//!
//! Queries go to a structured record store when it holds data, and to a
//! sequential scan of a delimited-text row source when it is empty. Both
//! paths share one matching and ordering contract.

pub mod cli;
pub mod config;
pub mod criteria;
pub mod executor;
pub mod http_server;
pub mod observability;
pub mod planner;
pub mod record;
pub mod scan;
pub mod search;
pub mod source;
pub mod store;
