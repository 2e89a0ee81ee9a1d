//! MCP server initialization for the stdio transport.
//!
//! [`serve_stdio`] compiles the extractor from configuration and wires it into the
//! MCP tool handler.

use crate::tools::JourneyTools;
use anyhow::Result;
use journey::config::JourneyConfig;
use rmcp::ServiceExt;
use std::sync::Arc;

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(config: JourneyConfig) -> Result<()> {
    tracing::info!("starting Journey MCP server on stdio");

    let extractor = Arc::new(config.extractor.build_extractor()?);
    tracing::info!(
        locales = ?config.extractor.locales,
        "extractor ready"
    );

    let tools = JourneyTools::new(extractor);
    let transport = rmcp::transport::stdio();

    let server = tools.serve(transport).await?;
    tracing::info!("MCP server running, waiting for client");

    server.waiting().await?;
    tracing::info!("MCP server shut down");

    Ok(())
}
