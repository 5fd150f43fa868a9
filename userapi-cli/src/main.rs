//! userapi CLI - user record HTTP service
//!
//! - `serve`: run the HTTP API (MongoDB, or an in-memory store for local work)
//! - `check`: connect once and ping the configured MongoDB deployment

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod env;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "userapi",
    author,
    version,
    about = "CRUD HTTP service for user records backed by MongoDB"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Connect to the storage backend once and report the result
    Check(commands::check::CheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before clap parses, so `env = ...` fallbacks see .env values.
    let loaded_from = env::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    env::report(&loaded_from);

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Check(args) => commands::check::run_check(args).await,
    }
}
