use clap::{Parser, Subcommand};
use reqwest::Method;
use serde_json::json;
use std::process::ExitCode;

use crate::clients::elasticsearch::EsClient;
use crate::core::content::pretty_text;
use crate::infra::config::EsConfig;
use crate::tools::registry::ToolRegistry;

#[derive(Parser)]
#[command(name = "elasticsearch-mcp")]
#[command(about = "MCP server exposing Elasticsearch search and document tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the MCP server (stdio unless MODE=http)
    Serve,
    /// Check cluster health using the configured credentials
    Health,
    /// Print the tool catalogue as JSON
    Tools,
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    run_commands(cli.command.unwrap_or(Commands::Serve)).await
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Serve => match crate::infra::boot::run_server().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "fatal");
                eprintln!("Fatal: {e:#}");
                ExitCode::FAILURE
            }
        },
        Commands::Health => match health_check().await {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Health check failed: {e:#}");
                ExitCode::FAILURE
            }
        },
        Commands::Tools => match crate::infra::boot::build_registry_from_env() {
            Ok(reg) => {
                println!("{}", tool_catalogue(&reg));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Fatal: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn health_check() -> anyhow::Result<String> {
    let client = EsClient::new(&EsConfig::from_env())?;
    let health = client.call("/_cluster/health", Method::GET, None).await?;
    Ok(pretty_text(&health))
}

/// Same shape as a `tools/list` result, for inspection without a host.
pub fn tool_catalogue(reg: &ToolRegistry) -> String {
    let tools: Vec<serde_json::Value> = reg
        .list()
        .into_iter()
        .map(|t| json!({ "name": t.name, "description": t.description, "inputSchema": t.input_schema }))
        .collect();
    pretty_text(&json!({ "tools": tools }))
}
