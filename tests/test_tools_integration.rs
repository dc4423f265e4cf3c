use std::time::Instant;

use httpmock::prelude::*;
use serde_json::{json, Value};

use elasticsearch_mcp::clients::elasticsearch::EsClient;
use elasticsearch_mcp::infra::config::{Auth, EsConfig};
use elasticsearch_mcp::infra::mcp::GatewaySvc;
use elasticsearch_mcp::infra::runtime::limits::MIN_CALL_INTERVAL;
use elasticsearch_mcp::tools::registry::build_registry;

fn svc(base: String) -> GatewaySvc {
    let client = EsClient::new(&EsConfig { url: base, auth: Auth::None }).unwrap();
    GatewaySvc::new(build_registry(client))
}

fn args(v: Value) -> Option<rmcp::model::JsonObject> {
    v.as_object().cloned()
}

/// Parse the single text block of a successful tool result back into JSON.
fn payload(result: &rmcp::model::CallToolResult) -> Value {
    let v = serde_json::to_value(result).unwrap();
    assert_eq!(v["isError"], false, "tool failed: {v}");
    serde_json::from_str(v["content"][0]["text"].as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn index_then_get_round_trips_the_source() {
    let server = MockServer::start();
    let doc = json!({"title": "Middlemarch", "author": {"name": "George Eliot"}, "tags": ["novel"]});

    let index_body = doc.clone();
    let put = server.mock(move |when, then| {
        when.method(POST).path("/books/_doc").json_body(index_body);
        then.status(201).json_body(json!({
            "_index": "books", "_id": "mm-1", "_version": 1, "result": "created"
        }));
    });
    let stored = doc.clone();
    let get = server.mock(move |when, then| {
        when.method(GET).path("/books/_doc/mm-1");
        then.status(200).json_body(json!({
            "_index": "books", "_id": "mm-1", "_version": 1, "found": true, "_source": stored
        }));
    });

    let svc = svc(server.base_url());
    let indexed = payload(
        &svc.dispatch(
            "index_document",
            args(json!({"index": "books", "document": doc.to_string()})),
        )
        .await
        .unwrap(),
    );
    assert_eq!(indexed["result"], "created");
    let id = indexed["id"].as_str().unwrap().to_string();

    let fetched = payload(
        &svc.dispatch("get_document", args(json!({"index": "books", "id": id})))
            .await
            .unwrap(),
    );
    put.assert();
    get.assert();
    assert_eq!(fetched["found"], true);
    assert_eq!(fetched["id"], "mm-1");
    assert_eq!(fetched["source"], doc);
}

#[tokio::test]
async fn rejected_arguments_never_hit_the_cluster() {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.any_request();
        then.status(200).json_body(json!({}));
    });

    let svc = svc(server.base_url());
    for bad in [
        json!({"index": "books", "query": "{}", "size": 0}),
        json!({"index": "books", "query": "{}", "size": 101}),
        json!({"index": "books", "query": "{}", "size": "ten"}),
        json!({"index": "books"}),
    ] {
        let err = svc.dispatch("search", args(bad.clone())).await.unwrap_err();
        assert_eq!(err.code.0, -32602, "{bad}");
    }
    any.assert_hits(0);
}

#[tokio::test]
async fn list_indices_and_health_share_one_throttle() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/_cat/indices").query_param("format", "json");
        then.status(200).json_body(json!([
            {"index": "books", "health": "green", "status": "open", "docs.count": "2", "store.size": "9kb"}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/_cluster/health");
        then.status(200).json_body(json!({"status": "green", "number_of_nodes": 1}));
    });

    let svc = svc(server.base_url());
    let start = Instant::now();
    let indices = payload(&svc.dispatch("list_indices", None).await.unwrap());
    let health = payload(&svc.dispatch("cluster_health", None).await.unwrap());
    assert!(start.elapsed() >= MIN_CALL_INTERVAL);

    assert_eq!(indices[0]["docsCount"], "2");
    assert_eq!(indices[0]["storeSize"], "9kb");
    assert_eq!(health, json!({"status": "green", "number_of_nodes": 1}));
}
