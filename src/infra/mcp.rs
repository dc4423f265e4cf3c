//! MCP server integration for elasticsearch-mcp.
//!
//! - Publishes the registry's tools (with their declared input schemas)
//! - Renders tool output as one indented-JSON text block
//! - Argument problems become JSON-RPC `invalid_params`; everything that goes
//!   wrong after validation comes back as a tool result with `isError: true`

use std::sync::Arc;

use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, Content, JsonObject, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler,
};

use crate::core::content::pretty_text;
use crate::tools::registry::ToolRegistry;

/// The MCP server handler. Holds the tool registry built at startup.
#[derive(Clone)]
pub struct GatewaySvc {
    registry: ToolRegistry,
}

impl GatewaySvc {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Tool descriptors as advertised by `tools/list`.
    pub fn tools(&self) -> Vec<Tool> {
        self.registry
            .list()
            .into_iter()
            .map(|meta| {
                let schema = meta
                    .input_schema
                    .as_object()
                    .cloned()
                    .unwrap_or_else(JsonObject::new);
                Tool::new(meta.name, meta.description, Arc::new(schema))
            })
            .collect()
    }

    /// Run one tool and map the outcome onto the protocol.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = arguments.unwrap_or_default();
        tracing::debug!(tool = name, "tool call");

        match self.registry.call(name, &arguments).await {
            Ok(payload) => {
                tracing::trace!(tool = name, payload = %payload, "tool call returning payload");
                Ok(CallToolResult::success(vec![Content::text(pretty_text(&payload))]))
            }
            Err(e) if e.is_invalid_params() => {
                tracing::info!(tool = name, error = %e, "tool call rejected");
                Err(McpError::invalid_params(e.to_string(), None))
            }
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool call failed");
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }
}

impl ServerHandler for GatewaySvc {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Search, read and write documents in Elasticsearch. Query bodies and \
                 documents are passed as JSON-encoded strings."
                    .into(),
            ),
            ..Default::default()
        };
        info.server_info.name = env!("CARGO_PKG_NAME").into();
        info.server_info.version = env!("CARGO_PKG_VERSION").into();
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(&request.name, request.arguments).await
    }
}
