//! Subcommand implementations

pub mod check;
pub mod serve;

use clap::Args;
use userapi_server::{StorageConfig, Timeouts};

/// Storage connection flags shared by `serve` and `check`
#[derive(Args, Debug, Clone)]
pub struct StorageArgs {
    /// MongoDB connection string
    #[arg(long, env = "MONGO_URI", hide_env_values = true)]
    pub mongo_uri: Option<String>,

    /// Logical database name (default: career)
    #[arg(long, env = "MONGO_DATABASE")]
    pub database: Option<String>,

    /// Server selection timeout in milliseconds (default: 5000)
    #[arg(long, env = "MONGO_SERVER_SELECTION_TIMEOUT_MS")]
    pub server_selection_timeout_ms: Option<u64>,

    /// Connect timeout in milliseconds (default: 5000)
    #[arg(long, env = "MONGO_CONNECT_TIMEOUT_MS")]
    pub connect_timeout_ms: Option<u64>,

    /// Per-operation socket timeout in milliseconds (default: 10000)
    #[arg(long, env = "MONGO_SOCKET_TIMEOUT_MS")]
    pub socket_timeout_ms: Option<u64>,
}

impl StorageArgs {
    pub fn into_config(self) -> StorageConfig {
        let timeouts = Timeouts::from_millis(
            self.server_selection_timeout_ms,
            self.connect_timeout_ms,
            self.socket_timeout_ms,
        );
        StorageConfig::new(self.mongo_uri, self.database, timeouts)
    }
}
