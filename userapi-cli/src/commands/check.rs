//! Storage connectivity check

use anyhow::{bail, Result};
use clap::Parser;

use userapi_server::db::{redact_uri, ConnectionManager, MongoConnector};

use super::StorageArgs;

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub storage: StorageArgs,
}

/// Establish one handle (client construction + ping) and report.
pub async fn run_check(args: CheckArgs) -> Result<()> {
    let storage = args.storage.into_config();
    let Some(uri) = storage.uri.as_deref() else {
        bail!("MONGO_URI not set. Set via --mongo-uri, MONGO_URI env, or a .env file");
    };
    let endpoint = redact_uri(uri);
    let database = storage.database.clone();

    let manager = ConnectionManager::new(MongoConnector::new(storage));
    match manager.get_handle().await {
        Ok(_) => {
            println!("ok: {} (database: {})", endpoint, database);
            Ok(())
        }
        Err(e) => bail!("{} unreachable: {}", endpoint, e),
    }
}
