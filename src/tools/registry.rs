use std::sync::Arc;

use serde_json::Value;

use crate::clients::elasticsearch::EsClient;
use crate::core::error::GatewayError;
use crate::core::tool::{Arguments, Tool};
use crate::tools::cluster::{ClusterHealthTool, ListIndicesTool};
use crate::tools::documents::{GetDocumentTool, IndexDocumentTool};
use crate::tools::search::{SearchTool, SimpleSearchTool};

/// Ordered tool table. Listing follows registration order.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tools<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Tool>>,
    {
        let mut reg = Self::new();
        for t in iter {
            reg.register(t);
        }
        reg
    }

    /// Register a tool; a later tool with the same name replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        match self.tools.iter().position(|t| t.name() == tool.name()) {
            Some(i) => self.tools[i] = tool,
            None => self.tools.push(tool),
        }
    }

    pub fn list(&self) -> Vec<ToolMeta> {
        self.tools
            .iter()
            .map(|t| ToolMeta {
                name: t.name(),
                description: t.description(),
                input_schema: t.input_schema(),
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub async fn call(&self, name: &str, args: &Arguments) -> Result<Value, GatewayError> {
        let t = self
            .get(name)
            .ok_or_else(|| GatewayError::UnknownTool(name.to_string()))?;
        t.call(args).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// The six Elasticsearch tools, all sharing one client (and so one limiter).
pub fn build_registry(client: EsClient) -> ToolRegistry {
    ToolRegistry::with_tools([
        Arc::new(SearchTool::new(client.clone())) as Arc<dyn Tool>,
        Arc::new(SimpleSearchTool::new(client.clone())),
        Arc::new(GetDocumentTool::new(client.clone())),
        Arc::new(IndexDocumentTool::new(client.clone())),
        Arc::new(ListIndicesTool::new(client.clone())),
        Arc::new(ClusterHealthTool::new(client)),
    ])
}
