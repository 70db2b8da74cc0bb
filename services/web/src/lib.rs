mod cli;
mod infra;
mod preview;
mod routes;
mod server;

use apprentice_watch::error::AppError;

/// Entry point shared by the binary: parses the CLI and dispatches.
pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
