//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes the manuscript analysis pipeline over the MCP protocol,
//! making it available to writing assistants and editors via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer: it wraps the same core library that
//! the CLI commands use. Each `#[tool]` method delegates to `plush_core`
//! rather than implementing analysis itself.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call core library functions, convert errors to `McpError`
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use plush_core::analysis::{self, cliches, dialogue};
use plush_core::presets::{NO_STYLE, STYLE_PRESETS};
use plush_core::{normalize, report};

/// Parameters for the `get_info` and `list_presets` tools.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FormatParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for tools that take only manuscript text.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The manuscript text.
    pub text: String,
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The manuscript text.
    pub text: String,
    /// Style preset: "Gritty", "Snappy", "Poetic", "Technical", "Sparse", or "None".
    pub style: Option<String>,
    /// Clean quotes, dashes, and whitespace before analyzing.
    #[serde(default)]
    pub clean: bool,
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

/// Parameters for the `export_full_report` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ExportReportParams {
    /// The manuscript text.
    pub text: String,
    /// Style preset: "Gritty", "Snappy", "Poetic", "Technical", "Sparse", or "None".
    pub style: Option<String>,
}

/// MCP server exposing manuscript analysis.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct PlushServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    default_style: Option<String>,
}

impl Default for PlushServer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlushServer {
    /// Reject text larger than `limit` bytes (`None` accepts any size).
    #[must_use]
    pub fn with_input_limit(mut self, limit: Option<usize>) -> Self {
        self.max_input_bytes = limit;
        self
    }

    /// Style preset used when a tool call does not name one.
    #[must_use]
    pub fn with_default_style(mut self, style: Option<String>) -> Self {
        self.default_style = style;
        self
    }

    fn check_input(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(limit) if text.len() > limit => Err(McpError::invalid_params(
                format!(
                    "input too large: {} bytes (limit: {limit} bytes)",
                    text.len()
                ),
                None,
            )),
            _ => Ok(()),
        }
    }

    fn style_for(&self, requested: Option<String>) -> String {
        requested
            .or_else(|| self.default_style.clone())
            .unwrap_or_else(|| NO_STYLE.to_string())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl PlushServer {
    /// Create a new MCP server instance.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes: None,
            default_style: None,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<FormatParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Normalize quotes, dashes, and whitespace.
    #[tool(
        description = "Clean manuscript text: straighten curly quotes, turn -- into an em dash, and collapse whitespace."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn clean_text(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "clean_text", "executing MCP tool");
        self.check_input(&params.text)?;

        let cleaned = normalize::clean(&params.text);

        tracing::info!(tool = "clean_text", chars = cleaned.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(cleaned)]))
    }

    /// Run the analysis report.
    #[tool(
        description = "Analyze manuscript text: word and sentence counts, reading grade, filler words, long sentences, frequent words, passive voice, and per-sentence suggestions. Optional style preset annotates the report."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            style = ?params.style,
            clean = params.clean,
            "executing MCP tool"
        );
        self.check_input(&params.text)?;

        let text = if params.clean {
            normalize::clean(&params.text)
        } else {
            params.text
        };
        let style = self.style_for(params.style);
        let analysis = analysis::run_analysis(&text, &style);

        let output = if params.format == "json" {
            to_json(&analysis)?
        } else {
            report::render_analysis(&analysis)
        };

        tracing::info!(
            tool = "analyze_text",
            words = analysis.readability.words,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    /// Build the full, timestamped report.
    #[tool(
        description = "Export the full report: analysis, dialogue by character, extracted dialogue, and clichés, with a generation timestamp."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn export_full_report(
        &self,
        Parameters(params): Parameters<ExportReportParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "export_full_report", style = ?params.style, "executing MCP tool");
        self.check_input(&params.text)?;

        let style = self.style_for(params.style);
        let full_report = report::export_full_report(&params.text, &style);

        tracing::info!(tool = "export_full_report", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(full_report)]))
    }

    /// Extract quoted dialogue.
    #[tool(description = "Extract quoted dialogue lines in document order.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn extract_dialogue(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "extract_dialogue", "executing MCP tool");
        self.check_input(&params.text)?;

        let found = dialogue::extract_dialogue(&params.text);
        let output = if params.format == "json" {
            to_json(&found)?
        } else {
            report::render_dialogue(&found)
        };

        tracing::info!(
            tool = "extract_dialogue",
            lines = found.lines.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    /// Count dialogue lines per attributed speaker.
    #[tool(
        description = "Count dialogue lines per character, using direct attributions such as \"...\" said Maria."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn dialogue_by_character(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "dialogue_by_character", "executing MCP tool");
        self.check_input(&params.text)?;

        let speakers = dialogue::attribute_speakers(&params.text);
        let output = if params.format == "json" {
            to_json(&speakers)?
        } else {
            report::render_speakers(&speakers)
        };

        tracing::info!(
            tool = "dialogue_by_character",
            speakers = speakers.speakers.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    /// Find catalog clichés.
    #[tool(description = "Find common clichés (case-insensitive), each listed once.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn find_cliches(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "find_cliches", "executing MCP tool");
        self.check_input(&params.text)?;

        let found = cliches::analyze_cliches(&params.text);
        let output = if params.format == "json" {
            to_json(&found)?
        } else {
            report::render_cliches(&found)
        };

        tracing::info!(
            tool = "find_cliches",
            total = found.total_cliches,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    /// List the style presets.
    #[tool(description = "List the style presets with their focus and intent.")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn list_presets(
        &self,
        Parameters(params): Parameters<FormatParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "list_presets", format = %params.format, "executing MCP tool");

        let output = if params.format == "json" {
            to_json(&STYLE_PRESETS)?
        } else {
            STYLE_PRESETS
                .iter()
                .map(|p| format!("{}\n  Focus: {}\n  Note: {}", p.name, p.emphasis, p.note))
                .collect::<Vec<_>>()
                .join("\n\n")
        };

        tracing::info!(tool = "list_presets", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }
}

#[tool_handler]
impl ServerHandler for PlushServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Pass manuscript text to the tools to get analysis reports, \
                 dialogue, character counts, and clichés.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
