use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};

use crate::clients::elasticsearch::EsClient;
use crate::core::error::GatewayError;
use crate::core::tool::{Arguments, Tool, ToolSpec};
use crate::domain::{CatIndexRow, IndexSummary};

fn no_arguments() -> Value {
    json!({ "type": "object", "properties": {} })
}

#[derive(Clone)]
pub struct ListIndicesTool {
    client: EsClient,
}

impl ListIndicesTool {
    pub fn new(client: EsClient) -> Self {
        Self { client }
    }
}

impl ToolSpec for ListIndicesTool {
    fn name(&self) -> &'static str {
        "list_indices"
    }
    fn description(&self) -> &'static str {
        "List all indices."
    }
    fn input_schema(&self) -> Value {
        no_arguments()
    }
}

#[async_trait]
impl Tool for ListIndicesTool {
    async fn call(&self, _arguments: &Arguments) -> Result<Value, GatewayError> {
        let raw = self
            .client
            .call("/_cat/indices?format=json", Method::GET, None)
            .await?;
        let rows: Vec<CatIndexRow> =
            serde_json::from_value(raw).map_err(|e| GatewayError::Decode(e.to_string()))?;
        let summaries: Vec<IndexSummary> = rows.into_iter().map(IndexSummary::from).collect();
        serde_json::to_value(summaries).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

/// Passes `/_cluster/health` through untouched.
#[derive(Clone)]
pub struct ClusterHealthTool {
    client: EsClient,
}

impl ClusterHealthTool {
    pub fn new(client: EsClient) -> Self {
        Self { client }
    }
}

impl ToolSpec for ClusterHealthTool {
    fn name(&self) -> &'static str {
        "cluster_health"
    }
    fn description(&self) -> &'static str {
        "Get cluster health status."
    }
    fn input_schema(&self) -> Value {
        no_arguments()
    }
}

#[async_trait]
impl Tool for ClusterHealthTool {
    async fn call(&self, _arguments: &Arguments) -> Result<Value, GatewayError> {
        self.client.call("/_cluster/health", Method::GET, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::{Auth, EsConfig};
    use httpmock::prelude::*;

    fn client(base: String) -> EsClient {
        EsClient::new(&EsConfig { url: base, auth: Auth::None }).unwrap()
    }

    #[tokio::test]
    async fn list_indices_maps_cat_rows() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path("/_cat/indices").query_param("format", "json");
            then.status(200).json_body(json!([
                {"health": "green", "status": "open", "index": "books", "uuid": "u1",
                 "pri": "1", "rep": "0", "docs.count": "3", "docs.deleted": "0",
                 "store.size": "12.1kb", "pri.store.size": "12.1kb"},
                {"health": "yellow", "status": "open", "index": "logs", "uuid": "u2",
                 "docs.count": "900", "store.size": "1mb"}
            ]));
        });

        let tool = ListIndicesTool::new(client(server.base_url()));
        let out = tool.call(&Arguments::new()).await.unwrap();
        m.assert();
        assert_eq!(
            out,
            json!([
                {"index": "books", "health": "green", "status": "open", "docsCount": "3", "storeSize": "12.1kb"},
                {"index": "logs", "health": "yellow", "status": "open", "docsCount": "900", "storeSize": "1mb"}
            ])
        );
    }

    #[tokio::test]
    async fn list_indices_rejects_non_array_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/_cat/indices");
            then.status(200).json_body(json!({"unexpected": true}));
        });

        let tool = ListIndicesTool::new(client(server.base_url()));
        let err = tool.call(&Arguments::new()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[tokio::test]
    async fn cluster_health_is_passed_through() {
        let server = MockServer::start();
        let health = json!({
            "cluster_name": "docker-cluster", "status": "green", "timed_out": false,
            "number_of_nodes": 1, "active_shards_percent_as_number": 100.0
        });
        let body = health.clone();
        server.mock(move |when, then| {
            when.method(GET).path("/_cluster/health");
            then.status(200).json_body(body);
        });

        let tool = ClusterHealthTool::new(client(server.base_url()));
        let out = tool.call(&Arguments::new()).await.unwrap();
        assert_eq!(out, health);
    }
}
