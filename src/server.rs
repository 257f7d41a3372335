//! MCP server exposing the `docx-reader` tool.

use crate::config::Config;
use crate::error::SearchError;
use crate::format::DocxReaderOutput;
use crate::tools::docx_reader::{DocxReaderRequest, handle_docx_reader};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server for searching a Word document.
///
/// Holds no per-request state: every call reads and parses the document anew.
#[derive(Clone)]
pub struct DocSearchServer {
    /// Where the searched document lives
    config: Arc<Config>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DocSearchServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocSearchServer")
            .field("config", &self.config)
            .finish()
    }
}

#[tool_router]
impl DocSearchServer {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[tool(
        name = "docx-reader",
        title = "DOCX Reader Tool",
        output_schema = rmcp::handler::server::tool::schema_for_type::<DocxReaderOutput>(),
        description = "Read and find relevant sections from the configured DOCX document. Provide query as the keyword search text and optionally user_input as the user's original text; the response language is detected from user_input."
    )]
    async fn docx_reader(
        &self,
        Parameters(request): Parameters<DocxReaderRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let response = handle_docx_reader(&self.config, request)
            .await
            .map_err(to_mcp_error)?;

        let structured = serde_json::to_value(&response.output)
            .map_err(|e| McpError::internal_error(format!("Failed to encode result: {}", e), None))?;

        let mut result = CallToolResult::success(vec![Content::text(response.summary)]);
        result.structured_content = Some(structured);
        Ok(result)
    }
}

/// Map a pipeline error to the protocol error returned to the caller.
pub fn to_mcp_error(error: SearchError) -> McpError {
    tracing::warn!("docx-reader failed: {}", error);
    match error {
        SearchError::EmptyQuery => McpError::invalid_params(error.to_string(), None),
        _ => McpError::internal_error(error.to_string(), None),
    }
}

#[tool_handler]
impl ServerHandler for DocSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(format!(
                "docx-search-mcp: searches \"{}\" by heading-based sections. \
                 Call docx-reader with a keyword query; results include each section's parent and sibling headings.",
                self.config.document_name
            ))
    }
}
