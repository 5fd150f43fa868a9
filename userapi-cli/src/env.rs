//! `.env` loading
//!
//! Priority order (highest to lowest):
//! 1. Environment variables already set
//! 2. Current directory .env
//! 3. ~/.userapi/.env
//!
//! dotenvy never overwrites variables that are already present.

use std::path::PathBuf;

use tracing::{debug, info};

/// Get the userapi config directory path (~/.userapi)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".userapi"))
}

/// Load environment variables from .env files, returning where they came from.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from current directory: {}", path.display());
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(()) => {
                    debug!("Loaded .env from {}", env_file.display());
                    loaded_from.push(env_file);
                }
                Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
            }
        }
    }

    loaded_from
}

/// Log the outcome of [`load_dotenv`] once tracing is up.
pub fn report(loaded_from: &[PathBuf]) {
    if loaded_from.is_empty() {
        info!("Using environment variables only (no .env file found)");
    } else {
        let sources: Vec<_> = loaded_from.iter().map(|p| p.display().to_string()).collect();
        info!("Loaded configuration from: {}", sources.join(", "));
    }
}
