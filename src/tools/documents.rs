use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::clients::elasticsearch::EsClient;
use crate::core::error::GatewayError;
use crate::core::tool::{Arguments, Tool, ToolSpec};
use crate::domain::{DocumentView, GetResponse, IndexResponse, IndexedDocument};
use crate::tools::args;

#[derive(Clone)]
pub struct GetDocumentTool {
    client: EsClient,
}

impl GetDocumentTool {
    pub fn new(client: EsClient) -> Self {
        Self { client }
    }
}

#[derive(Deserialize)]
struct GetArgs {
    index: String,
    id: String,
}

impl ToolSpec for GetDocumentTool {
    fn name(&self) -> &'static str {
        "get_document"
    }
    fn description(&self) -> &'static str {
        "Get a document by ID."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "index": { "type": "string", "minLength": 1 },
                "id": { "type": "string", "minLength": 1 }
            },
            "required": ["index", "id"]
        })
    }
}

#[async_trait]
impl Tool for GetDocumentTool {
    async fn call(&self, arguments: &Arguments) -> Result<Value, GatewayError> {
        let a: GetArgs = args::decode(self.name(), arguments)?;
        args::check_non_empty(self.name(), "index", &a.index)?;
        args::check_non_empty(self.name(), "id", &a.id)?;
        let index = args::path_segment("index", &a.index)?;
        let id = args::path_segment("id", &a.id)?;

        let raw = self
            .client
            .call(&format!("/{index}/_doc/{id}"), Method::GET, None)
            .await?;
        let wire: GetResponse =
            serde_json::from_value(raw).map_err(|e| GatewayError::Decode(e.to_string()))?;
        serde_json::to_value(DocumentView::from(wire)).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

/// Create or replace a document. With an id the write is a PUT to that id,
/// without one Elasticsearch assigns the id.
#[derive(Clone)]
pub struct IndexDocumentTool {
    client: EsClient,
}

impl IndexDocumentTool {
    pub fn new(client: EsClient) -> Self {
        Self { client }
    }
}

#[derive(Deserialize)]
struct IndexArgs {
    index: String,
    #[serde(default)]
    id: Option<String>,
    document: String,
}

impl ToolSpec for IndexDocumentTool {
    fn name(&self) -> &'static str {
        "index_document"
    }
    fn description(&self) -> &'static str {
        "Index (create/update) a document."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "index": { "type": "string", "minLength": 1 },
                "id": { "type": "string", "minLength": 1 },
                "document": { "type": "string", "description": "JSON document body" }
            },
            "required": ["index", "document"]
        })
    }
}

#[async_trait]
impl Tool for IndexDocumentTool {
    async fn call(&self, arguments: &Arguments) -> Result<Value, GatewayError> {
        let a: IndexArgs = args::decode(self.name(), arguments)?;
        args::check_non_empty(self.name(), "index", &a.index)?;
        if let Some(id) = &a.id {
            args::check_non_empty(self.name(), "id", id)?;
        }
        let document = args::parse_json("document", &a.document)?;
        let index = args::path_segment("index", &a.index)?;

        let (path, method) = match &a.id {
            Some(id) => (format!("/{index}/_doc/{}", args::path_segment("id", id)?), Method::PUT),
            None => (format!("/{index}/_doc"), Method::POST),
        };
        let raw = self.client.call(&path, method, Some(&document)).await?;
        let wire: IndexResponse =
            serde_json::from_value(raw).map_err(|e| GatewayError::Decode(e.to_string()))?;
        serde_json::to_value(IndexedDocument::from(wire)).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}
