//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes message analysis to AI assistants over stdio, so an agent drafting
//! a broadcast message can check its length and reading level before sending.
//!
//! The server is a presentation layer: each `#[tool]` method delegates to
//! `chat_metrics_core` and serializes the result as JSON text content.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use chat_metrics_core::{Analyzer, AnalyzerOptions};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_message` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeMessageParams {
    /// The chat message to analyze.
    pub text: String,
    /// Bullet glyphs to recognize instead of the configured set.
    pub bullet_markers: Option<Vec<char>>,
}

/// MCP server exposing chat message analysis.
#[derive(Clone)]
pub struct MetricsServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    options: AnalyzerOptions,
    analyzer: Analyzer,
    max_input_bytes: Option<usize>,
}

impl Default for MetricsServer {
    fn default() -> Self {
        Self::new(AnalyzerOptions::default(), None)
    }
}

#[tool_router]
impl MetricsServer {
    /// Create a new MCP server instance.
    pub fn new(options: AnalyzerOptions, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            analyzer: Analyzer::new(&options),
            options,
            max_input_bytes,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Analyze a chat message.
    #[tool(
        description = "Analyze a chat message: character, word, line and paragraph counts, formatting and bullet usage, emoji/link/hashtag counts, length category, truncation risk, and Flesch-Kincaid readability with a CEFR band. Returns JSON, or null for empty text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn analyze_message(
        &self,
        Parameters(params): Parameters<AnalyzeMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_message",
            bullet_markers = ?params.bullet_markers,
            "executing MCP tool"
        );

        if let Some(max) = self.max_input_bytes
            && params.text.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    params.text.len()
                ),
                None,
            ));
        }

        let result = match params.bullet_markers {
            Some(markers) => {
                let options = self.options.clone().with_bullet_markers(markers);
                Analyzer::new(&options).analyze(&params.text)
            }
            None => self.analyzer.analyze(&params.text),
        };

        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "analyze_message",
            empty = result.is_none(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for MetricsServer {
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
                "{} MCP server. Call analyze_message with the draft text to get its length category, truncation risk, and reading level.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
