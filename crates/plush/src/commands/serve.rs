//! Serve command: MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{debug, info, instrument};

use plush_core::config::Config;

use crate::server::PlushServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // No subcommand-specific arguments; the transport is always stdio
}

/// Run the MCP server until the client disconnects.
///
/// Stdout carries the protocol, so all diagnostics go to the log layers.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    debug!(?max_input_bytes, style = ?config.style, "executing serve command");

    let server = PlushServer::new()
        .with_input_limit(max_input_bytes)
        .with_default_style(config.style);
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server on stdio")?;
    info!("MCP server listening on stdio");

    let reason = service
        .waiting()
        .await
        .context("MCP server task failed")?;
    info!(?reason, "MCP server stopped");
    Ok(())
}
