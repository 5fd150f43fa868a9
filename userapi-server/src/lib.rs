//! userapi-server: HTTP service for user records
//!
//! Exposes create/read/update/delete over a single `user` collection
//! and owns the lifecycle of the one shared storage connection.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use config::{ServerConfig, StorageConfig, Timeouts};
pub use db::{ConnectionError, ConnectionManager, Connector};
pub use http::{build_router, run_server, AppState, ServerError, StorageSummary};
pub use models::{UserFields, UserRecord, ValidationError};
pub use service::{ServiceError, UserService};
