//! Shared connection lifecycle
//!
//! `ConnectionManager` owns the single storage handle of the process. The
//! handle is built on first use, checked with a liveness ping, and reused
//! until the process exits or a caller explicitly invalidates it.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::Mutex;

use super::store::UserStore;

/// Storage backend could not be reached, authenticated, or pinged.
///
/// Carries a human-readable cause that never includes credentials.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("storage connection failed: {cause}")]
pub struct ConnectionError {
    cause: String,
}

impl ConnectionError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }
}

/// Builds a live handle to the storage backend.
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    type Handle: UserStore;

    /// Construct a handle and confirm it is usable before returning it.
    async fn connect(&self) -> Result<Self::Handle, ConnectionError>;
}

type Attempt<H> = Shared<BoxFuture<'static, Result<H, ConnectionError>>>;

enum Slot<H> {
    Empty,
    Connecting { attempt: Attempt<H>, generation: u64 },
    Ready(H),
}

struct State<H> {
    slot: Slot<H>,
    generation: u64,
}

/// Lazily established, process-wide storage handle.
pub struct ConnectionManager<C: Connector> {
    connector: Arc<C>,
    state: Mutex<State<C::Handle>>,
}

impl<C: Connector> ConnectionManager<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector: Arc::new(connector),
            state: Mutex::new(State {
                slot: Slot::Empty,
                generation: 0,
            }),
        }
    }

    /// Return the shared handle, connecting first if none exists.
    ///
    /// A cached handle is returned without any network traffic. While an
    /// attempt is in flight every caller waits on that same attempt and
    /// sees its outcome. A failed attempt caches nothing, so the next call
    /// starts over.
    pub async fn get_handle(&self) -> Result<C::Handle, ConnectionError> {
        let (attempt, generation) = {
            let mut state = self.state.lock().await;
            match &state.slot {
                Slot::Ready(handle) => return Ok(handle.clone()),
                Slot::Connecting {
                    attempt,
                    generation,
                } => {
                    tracing::debug!(generation, "Waiting on in-flight storage connection");
                    (attempt.clone(), *generation)
                }
                Slot::Empty => {
                    state.generation += 1;
                    let generation = state.generation;
                    let connector = Arc::clone(&self.connector);
                    let attempt = async move { connector.connect().await }.boxed().shared();
                    state.slot = Slot::Connecting {
                        attempt: attempt.clone(),
                        generation,
                    };
                    tracing::info!(generation, "Establishing storage connection");
                    (attempt, generation)
                }
            }
        };

        let outcome = attempt.await;

        let mut state = self.state.lock().await;
        // Only the attempt that still owns the slot may settle it.
        if matches!(&state.slot, Slot::Connecting { generation: g, .. } if *g == generation) {
            state.slot = match &outcome {
                Ok(handle) => {
                    tracing::info!(generation, "Storage connection ready");
                    Slot::Ready(handle.clone())
                }
                Err(e) => {
                    tracing::warn!(generation, error = %e, "Storage connection failed");
                    Slot::Empty
                }
            };
        }

        outcome
    }

    /// Drop the cached handle so the next `get_handle` reconnects.
    ///
    /// An attempt already in flight is left alone.
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        if matches!(state.slot, Slot::Ready(_)) {
            tracing::info!("Storage handle invalidated");
            state.slot = Slot::Empty;
        }
    }

    /// Whether a verified handle is currently cached. No network traffic.
    pub async fn is_connected(&self) -> bool {
        matches!(self.state.lock().await.slot, Slot::Ready(_))
    }
}
