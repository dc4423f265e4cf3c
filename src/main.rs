use std::process::ExitCode;

use elasticsearch_mcp::{cli, infra};

#[tokio::main]
async fn main() -> ExitCode {
    infra::logging::init();
    cli::run().await
}
