//! Process-wide configuration
//!
//! Values are read once at startup (the CLI fills them from flags and
//! environment) and never change afterwards.

use std::net::SocketAddr;
use std::time::Duration;

/// Default logical database name.
pub const DEFAULT_DATABASE: &str = "career";

/// Collection holding user documents.
pub const USER_COLLECTION: &str = "user";

const DEFAULT_SERVER_SELECTION_MS: u64 = 5_000;
const DEFAULT_CONNECT_MS: u64 = 5_000;
const DEFAULT_SOCKET_MS: u64 = 10_000;

/// The three independent timeout budgets applied to storage traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// How long the driver may search for a usable server.
    pub server_selection: Duration,
    /// Budget for establishing a connection (including SRV/DNS resolution).
    pub connect: Duration,
    /// Budget for a single round trip: the liveness ping and every storage call.
    pub socket: Duration,
}

impl Timeouts {
    /// Build from millisecond values, falling back to defaults for `None`.
    pub fn from_millis(
        server_selection: Option<u64>,
        connect: Option<u64>,
        socket: Option<u64>,
    ) -> Self {
        Self {
            server_selection: Duration::from_millis(
                server_selection.unwrap_or(DEFAULT_SERVER_SELECTION_MS),
            ),
            connect: Duration::from_millis(connect.unwrap_or(DEFAULT_CONNECT_MS)),
            socket: Duration::from_millis(socket.unwrap_or(DEFAULT_SOCKET_MS)),
        }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self::from_millis(None, None, None)
    }
}

/// Storage endpoint configuration
#[derive(Clone)]
pub struct StorageConfig {
    /// Connection string. Absent when the environment did not provide one;
    /// every connection attempt then fails with a `ConnectionError`.
    pub uri: Option<String>,
    /// Logical database name
    pub database: String,
    pub timeouts: Timeouts,
}

impl StorageConfig {
    pub fn new(uri: Option<String>, database: Option<String>, timeouts: Timeouts) -> Self {
        Self {
            uri: uri.filter(|u| !u.trim().is_empty()),
            database: database
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            timeouts,
        }
    }

    /// Whether the required endpoint URI is present.
    pub fn is_configured(&self) -> bool {
        self.uri.is_some()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(None, None, Timeouts::default())
    }
}

// Hand-written so the URI (which may carry credentials) never reaches logs.
impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field(
                "uri",
                &self.uri.as_deref().map(crate::db::mongo::redact_uri),
            )
            .field("database", &self.database)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,

    /// Allow any origin, method and header (default: true)
    ///
    /// When false, only localhost origins are accepted.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            cors_permissive: true,
        }
    }
}
