//! User record service
//!
//! Turns each CRUD intent into exactly one storage call (create adds a
//! re-read) against the handle supplied by the `ConnectionManager`, and
//! reports failures through `ServiceError`.

use std::sync::Arc;

use crate::db::{ConnectionError, ConnectionManager, Connector, StoreError, UserStore};
use crate::models::{UserFields, UserRecord, ValidationError};

/// Records returned by `list` when the caller does not ask for a limit.
pub const DEFAULT_LIST_LIMIT: u32 = 100;

type IdOf<C> = <<C as Connector>::Handle as UserStore>::Id;

/// Service error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("user '{id}' not found")]
    NotFound { id: String },

    /// The insert was acknowledged but the new record could not be read back.
    #[error("user creation failed")]
    CreationFailed,

    /// A storage call failed or returned an inconsistent result.
    #[error("{reason}")]
    Persistence {
        reason: String,
        source: Option<StoreError>,
    },
}

impl ServiceError {
    fn not_found(id: &str) -> Self {
        Self::NotFound { id: id.to_owned() }
    }

    fn storage(reason: &str, source: StoreError) -> Self {
        tracing::error!(error = %source, "{}", reason);
        Self::Persistence {
            reason: reason.to_owned(),
            source: Some(source),
        }
    }
}

/// CRUD over the `user` collection
pub struct UserService<C: Connector> {
    connections: Arc<ConnectionManager<C>>,
}

impl<C: Connector> Clone for UserService<C> {
    fn clone(&self) -> Self {
        Self {
            connections: Arc::clone(&self.connections),
        }
    }
}

impl<C: Connector> UserService<C> {
    pub fn new(connections: Arc<ConnectionManager<C>>) -> Self {
        Self { connections }
    }

    pub fn connections(&self) -> &ConnectionManager<C> {
        &self.connections
    }

    /// Malformed identifiers are reported exactly like unknown ones.
    fn parse_id(raw: &str) -> Result<IdOf<C>, ServiceError> {
        <C::Handle as UserStore>::parse_id(raw).ok_or_else(|| ServiceError::not_found(raw))
    }

    /// Insert a user and return it as read back from storage.
    ///
    /// Input is validated before any storage traffic. If the re-read after
    /// a successful insert finds nothing, the call fails with
    /// `CreationFailed` instead of echoing the input back.
    pub async fn create(&self, name: &str, status: &str) -> Result<UserRecord, ServiceError> {
        let fields = UserFields::new(name, status)?;
        let store = self.connections.get_handle().await?;

        let id = store
            .insert(&fields)
            .await
            .map_err(|e| ServiceError::storage("user creation failed", e))?;

        let created = store
            .find_by_id(&id)
            .await
            .map_err(|e| ServiceError::storage("user creation failed", e))?;

        match created {
            Some(record) => {
                tracing::info!(user_id = %record.id, "User created");
                Ok(record)
            }
            None => {
                tracing::error!(user_id = %id, "Inserted user not found on re-read");
                Err(ServiceError::CreationFailed)
            }
        }
    }

    pub async fn get(&self, id: &str) -> Result<UserRecord, ServiceError> {
        let native = Self::parse_id(id)?;
        let store = self.connections.get_handle().await?;

        store
            .find_by_id(&native)
            .await
            .map_err(|e| ServiceError::storage("user lookup failed", e))?
            .ok_or_else(|| ServiceError::not_found(id))
    }

    /// Up to `limit` users (default 100) in storage order. No cursor is
    /// exposed; a zero limit yields an empty list.
    pub async fn list(&self, limit: Option<u32>) -> Result<Vec<UserRecord>, ServiceError> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let store = self.connections.get_handle().await?;
        let users = store
            .list(limit)
            .await
            .map_err(|e| ServiceError::storage("user listing failed", e))?;

        tracing::debug!(limit, returned = users.len(), "Listed users");
        Ok(users)
    }

    /// Replace both `name` and `status`; the identifier is untouched.
    pub async fn update(&self, id: &str, name: &str, status: &str) -> Result<(), ServiceError> {
        let fields = UserFields::new(name, status)?;
        let native = Self::parse_id(id)?;
        let store = self.connections.get_handle().await?;

        let matched = store
            .update_fields(&native, &fields)
            .await
            .map_err(|e| ServiceError::storage("user update failed", e))?;

        if !matched {
            return Err(ServiceError::not_found(id));
        }
        tracing::info!(user_id = %id, "User updated");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let native = Self::parse_id(id)?;
        let store = self.connections.get_handle().await?;

        let removed = store
            .delete(&native)
            .await
            .map_err(|e| ServiceError::storage("user deletion failed", e))?;

        if !removed {
            return Err(ServiceError::not_found(id));
        }
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryConnector, MemoryStore};
    use async_trait::async_trait;

    fn service() -> (UserService<MemoryConnector>, MemoryStore) {
        let store = MemoryStore::new();
        let connector = MemoryConnector::with_store(store.clone());
        let service = UserService::new(Arc::new(ConnectionManager::new(connector)));
        (service, store)
    }

    /// Store whose inserts succeed but are never visible afterwards.
    #[derive(Clone, Default)]
    struct VanishingStore;

    #[async_trait]
    impl UserStore for VanishingStore {
        type Id = u64;

        fn parse_id(raw: &str) -> Option<u64> {
            raw.parse().ok()
        }

        async fn insert(&self, _fields: &UserFields) -> Result<u64, StoreError> {
            Ok(7)
        }

        async fn find_by_id(&self, _id: &u64) -> Result<Option<UserRecord>, StoreError> {
            Ok(None)
        }

        async fn list(&self, _limit: u32) -> Result<Vec<UserRecord>, StoreError> {
            Ok(Vec::new())
        }

        async fn update_fields(&self, _id: &u64, _fields: &UserFields) -> Result<bool, StoreError> {
            Ok(false)
        }

        async fn delete(&self, _id: &u64) -> Result<bool, StoreError> {
            Ok(false)
        }
    }

    struct VanishingConnector;

    #[async_trait]
    impl Connector for VanishingConnector {
        type Handle = VanishingStore;

        async fn connect(&self) -> Result<VanishingStore, ConnectionError> {
            Ok(VanishingStore)
        }
    }

    struct DownConnector;

    #[async_trait]
    impl Connector for DownConnector {
        type Handle = MemoryStore;

        async fn connect(&self) -> Result<MemoryStore, ConnectionError> {
            Err(ConnectionError::new("no reachable servers"))
        }
    }

    #[tokio::test]
    async fn create_returns_generated_id() {
        let (service, _) = service();
        let user = service.create("Alice", "active").await.unwrap();

        assert!(!user.id.is_empty());
        assert_eq!(user.name, "Alice");
        assert_eq!(user.status, "active");
    }

    #[tokio::test]
    async fn create_validates_before_storage() {
        let (service, store) = service();
        let err = service.create("", "active").await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::Empty { field: "name" })
        ));
        assert!(store.is_empty().await);
        assert!(!service.connections().is_connected().await);
    }

    #[tokio::test]
    async fn reread_miss_is_creation_failure() {
        let service = UserService::new(Arc::new(ConnectionManager::new(VanishingConnector)));
        let err = service.create("Alice", "active").await.unwrap_err();

        assert!(matches!(err, ServiceError::CreationFailed));
        assert_eq!(err.to_string(), "user creation failed");
    }

    #[tokio::test]
    async fn malformed_id_is_not_found() {
        let (service, _) = service();

        assert!(matches!(
            service.get("definitely-not-an-id").await,
            Err(ServiceError::NotFound { .. })
        ));
        assert!(matches!(
            service.update("nope", "Alice", "active").await,
            Err(ServiceError::NotFound { .. })
        ));
        assert!(matches!(
            service.delete("nope").await,
            Err(ServiceError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn update_with_empty_status_is_validation_error() {
        let (service, _) = service();
        let user = service.create("Alice", "active").await.unwrap();

        let err = service.update(&user.id, "Alice", "").await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(service.get(&user.id).await.unwrap().status, "active");
    }

    #[tokio::test]
    async fn list_defaults_to_one_hundred() {
        let (service, _) = service();
        for i in 0..105 {
            service.create(&format!("user-{}", i), "active").await.unwrap();
        }

        assert_eq!(service.list(None).await.unwrap().len(), 100);
        assert_eq!(service.list(Some(3)).await.unwrap().len(), 3);
        assert!(service.list(Some(0)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn connection_failure_propagates_unchanged() {
        let service = UserService::new(Arc::new(ConnectionManager::new(DownConnector)));

        let err = service.create("Alice", "active").await.unwrap_err();
        match err {
            ServiceError::Connection(e) => assert_eq!(e.cause(), "no reachable servers"),
            other => panic!("expected connection error, got {:?}", other),
        }
        assert!(matches!(
            service.list(None).await,
            Err(ServiceError::Connection(_))
        ));
    }
}
