//! Workato MCP Server
//!
//! Model Context Protocol server exposing the Workato workflow automation API
//! (recipes, jobs, connections, packages, custom connectors, lookup tables) to LLM
//! agents and developer tools over stdio.

use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use workato_client::WorkatoClient;
use workato_mcp::server::WorkatoMcpServer;

#[derive(Debug, Parser)]
#[command(name = "workato-mcp", version, about)]
struct Cli {
    /// Workato API token. Falls back to WORKATO_API_TOKEN.
    #[arg(long)]
    api_token: Option<String>,

    /// Workato API base URL. Falls back to WORKATO_BASE_URL, then https://www.workato.com/api.
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("workato_mcp=info".parse()?)
                .add_directive("workato_client=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = WorkatoClient::from_env(cli.api_token, cli.base_url)?;

    tracing::info!(base_url = %client.base_url(), "workato-mcp starting (stdio transport)");

    let server = WorkatoMcpServer::new(client);
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
