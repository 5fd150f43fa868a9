//! In-memory user store
//!
//! Process-local backend for development (`userapi serve --in-memory`)
//! and for exercising the service and HTTP layers without MongoDB.
//! Identifiers are random UUIDs, so a deleted identifier is never reused.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::connection::{ConnectionError, Connector};
use super::store::{StoreError, UserStore};
use crate::models::{UserFields, UserRecord};

/// User store kept in process memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: Arc<RwLock<Vec<(Uuid, UserFields)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    type Id = Uuid;

    fn parse_id(raw: &str) -> Option<Uuid> {
        Uuid::parse_str(raw).ok()
    }

    async fn insert(&self, fields: &UserFields) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.users.write().await.push((id, fields.clone()));
        Ok(id)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|(stored, _)| stored == id)
            .map(|(stored, fields)| fields.clone().into_record(stored.to_string())))
    }

    async fn list(&self, limit: u32) -> Result<Vec<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .take(limit as usize)
            .map(|(id, fields)| fields.clone().into_record(id.to_string()))
            .collect())
    }

    async fn update_fields(&self, id: &Uuid, fields: &UserFields) -> Result<bool, StoreError> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|(stored, _)| stored == id) {
            Some((_, current)) => {
                *current = fields.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, StoreError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|(stored, _)| stored != id);
        Ok(users.len() < before)
    }
}

/// Connector that hands out a shared [`MemoryStore`]. Never fails.
#[derive(Clone, Default)]
pub struct MemoryConnector {
    store: MemoryStore,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Connector for MemoryConnector {
    type Handle = MemoryStore;

    async fn connect(&self) -> Result<MemoryStore, ConnectionError> {
        Ok(self.store.clone())
    }
}
