//! Storage layer - connection lifecycle and user collection access
//!
//! # Design Principles
//!
//! - One shared handle per process, created lazily and verified with a ping
//! - Concurrent cold-start callers share a single connection attempt
//! - Exactly one storage call per operation (create adds a re-read)
//! - Driver errors never leak past this module untyped

pub mod connection;
pub mod memory;
pub mod mongo;
pub mod store;

pub use connection::{ConnectionError, ConnectionManager, Connector};
pub use memory::{MemoryConnector, MemoryStore};
pub use mongo::{parse_object_id, redact_uri, MongoConnector, MongoStore};
pub use store::{StoreError, UserStore};
