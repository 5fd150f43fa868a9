//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use userapi_server::db::{ConnectionManager, Connector, MemoryConnector, MongoConnector};
use userapi_server::{run_server, AppState, ServerConfig, StorageSummary, UserService};

use super::StorageArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "USERAPI_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Only accept cross-origin requests from localhost
    #[arg(long)]
    pub cors_localhost: bool,

    /// Keep users in process memory instead of MongoDB (data is lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    #[command(flatten)]
    pub storage: StorageArgs,
}

async fn serve_with<C: Connector>(
    connector: C,
    storage: StorageSummary,
    config: ServerConfig,
) -> Result<()> {
    let connections = Arc::new(ConnectionManager::new(connector));
    let state = AppState::new(UserService::new(connections), storage);

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: !args.cors_localhost,
    };

    tracing::info!("Starting userapi server on {}", args.bind);

    if args.in_memory {
        tracing::warn!("Using in-memory storage; data will not survive a restart");
        let storage = StorageSummary {
            uri_configured: true,
            database: "in-memory".to_string(),
        };
        return serve_with(MemoryConnector::new(), storage, config).await;
    }

    let storage = args.storage.into_config();
    let summary = StorageSummary::from(&storage);
    serve_with(MongoConnector::new(storage), summary, config).await
}
