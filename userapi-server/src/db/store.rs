//! Storage seam for the user collection
//!
//! The service layer talks to this trait only; the MongoDB driver and the
//! in-memory backend both sit behind it.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::models::{UserFields, UserRecord};

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage driver error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error("unexpected document shape: {reason}")]
    Decode { reason: String },
}

/// Access to the user collection through a live handle.
///
/// Each method is a single round trip to the backend.
#[async_trait]
pub trait UserStore: Clone + Send + Sync + 'static {
    /// Backend-native identifier.
    type Id: Clone + Send + Sync + fmt::Display;

    /// The one place API identifiers are converted to the native encoding.
    /// `None` means the value can never name a stored record.
    fn parse_id(raw: &str) -> Option<Self::Id>;

    /// Insert a new document with only `name` and `status`; returns the
    /// generated identifier.
    async fn insert(&self, fields: &UserFields) -> Result<Self::Id, StoreError>;

    async fn find_by_id(&self, id: &Self::Id) -> Result<Option<UserRecord>, StoreError>;

    /// Up to `limit` records in the backend's natural order.
    async fn list(&self, limit: u32) -> Result<Vec<UserRecord>, StoreError>;

    /// Replace `name` and `status`. Returns false when nothing matched.
    async fn update_fields(&self, id: &Self::Id, fields: &UserFields) -> Result<bool, StoreError>;

    /// Returns false when nothing was removed.
    async fn delete(&self, id: &Self::Id) -> Result<bool, StoreError>;
}
