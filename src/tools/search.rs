use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Number, Value};

use crate::clients::elasticsearch::EsClient;
use crate::core::error::GatewayError;
use crate::core::tool::{Arguments, Tool, ToolSpec};
use crate::domain::{SearchOutput, SearchResponse};
use crate::tools::args;

/// Full Query DSL search: the caller supplies the request body.
#[derive(Clone)]
pub struct SearchTool {
    client: EsClient,
}

impl SearchTool {
    pub fn new(client: EsClient) -> Self {
        Self { client }
    }
}

#[derive(Deserialize)]
struct SearchArgs {
    index: String,
    query: String,
    #[serde(default = "args::default_size")]
    size: Number,
}

impl ToolSpec for SearchTool {
    fn name(&self) -> &'static str {
        "search"
    }
    fn description(&self) -> &'static str {
        "Search documents in an Elasticsearch index."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "index": { "type": "string", "minLength": 1, "description": "Index name or pattern" },
                "query": { "type": "string", "description": "JSON query body (Elasticsearch Query DSL)" },
                "size": size_schema()
            },
            "required": ["index", "query"]
        })
    }
}

#[async_trait]
impl Tool for SearchTool {
    async fn call(&self, arguments: &Arguments) -> Result<Value, GatewayError> {
        let a: SearchArgs = args::decode(self.name(), arguments)?;
        args::check_non_empty(self.name(), "index", &a.index)?;
        let size = args::check_size(self.name(), &a.size)?;

        let mut body = args::parse_json("query", &a.query)?;
        let Some(obj) = body.as_object_mut() else {
            return Err(GatewayError::MalformedInput {
                argument: "query",
                reason: "expected a JSON object".into(),
            });
        };
        obj.insert("size".into(), json!(size));

        run_search(&self.client, &a.index, &body).await
    }
}

/// Plain-text match across fields, for callers that don't speak Query DSL.
#[derive(Clone)]
pub struct SimpleSearchTool {
    client: EsClient,
}

impl SimpleSearchTool {
    pub fn new(client: EsClient) -> Self {
        Self { client }
    }
}

#[derive(Deserialize)]
struct SimpleSearchArgs {
    index: String,
    query: String,
    #[serde(default)]
    fields: Option<Vec<String>>,
    #[serde(default = "args::default_size")]
    size: Number,
}

impl ToolSpec for SimpleSearchTool {
    fn name(&self) -> &'static str {
        "simple_search"
    }
    fn description(&self) -> &'static str {
        "Simple text search across fields."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "index": { "type": "string", "minLength": 1 },
                "query": { "type": "string" },
                "fields": { "type": "array", "items": { "type": "string" } },
                "size": size_schema()
            },
            "required": ["index", "query"]
        })
    }
}

#[async_trait]
impl Tool for SimpleSearchTool {
    async fn call(&self, arguments: &Arguments) -> Result<Value, GatewayError> {
        let a: SimpleSearchArgs = args::decode(self.name(), arguments)?;
        args::check_non_empty(self.name(), "index", &a.index)?;
        let size = args::check_size(self.name(), &a.size)?;

        let mut multi_match = json!({ "query": a.query });
        if let Some(fields) = a.fields {
            multi_match["fields"] = json!(fields);
        }
        let body = json!({ "size": size, "query": { "multi_match": multi_match } });

        run_search(&self.client, &a.index, &body).await
    }
}

fn size_schema() -> Value {
    json!({
        "type": "integer",
        "minimum": args::MIN_SIZE,
        "maximum": args::MAX_SIZE,
        "default": args::DEFAULT_SIZE
    })
}

async fn run_search(client: &EsClient, index: &str, body: &Value) -> Result<Value, GatewayError> {
    let index = args::path_segment("index", index)?;
    let raw = client
        .call(&format!("/{index}/_search"), Method::POST, Some(body))
        .await?;
    let wire: SearchResponse =
        serde_json::from_value(raw).map_err(|e| GatewayError::Decode(e.to_string()))?;
    serde_json::to_value(SearchOutput::from(wire)).map_err(|e| GatewayError::Decode(e.to_string()))
}
