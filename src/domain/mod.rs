//! Shapes of Elasticsearch responses as consumed here, and the compact views
//! the tools hand back. Document bodies stay opaque `Value`s: their layout is
//! defined by each index mapping, not by this crate.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// --- upstream wire types ---

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Option<HitsEnvelope>,
}

#[derive(Debug, Deserialize)]
pub struct HitsEnvelope {
    /// Either a number or `{ "value": n, "relation": "eq" }` depending on version.
    #[serde(default)]
    pub total: Option<Value>,
    #[serde(default)]
    pub hits: Vec<HitWire>,
}

#[derive(Debug, Deserialize)]
pub struct HitWire {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source", default)]
    pub source: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct GetResponse {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub found: bool,
    #[serde(rename = "_source", default)]
    pub source: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct IndexResponse {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub result: Option<String>,
    #[serde(rename = "_version")]
    pub version: Option<i64>,
}

/// One row of `GET /_cat/indices?format=json`.
#[derive(Debug, Deserialize)]
pub struct CatIndexRow {
    pub index: Option<String>,
    pub health: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "docs.count", default)]
    pub docs_count: Option<Value>,
    #[serde(rename = "store.size", default)]
    pub store_size: Option<Value>,
}

// --- tool output views ---

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchHit {
    pub id: Option<String>,
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Value>,
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DocumentView {
    pub id: Option<String>,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndexedDocument {
    pub id: Option<String>,
    pub result: Option<String>,
    pub version: Option<i64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexSummary {
    pub index: Option<String>,
    pub health: Option<String>,
    pub status: Option<String>,
    pub docs_count: Option<Value>,
    pub store_size: Option<Value>,
}

impl From<HitWire> for SearchHit {
    fn from(w: HitWire) -> Self {
        Self {
            id: w.id,
            score: w.score,
            source: w.source,
        }
    }
}

impl From<SearchResponse> for SearchOutput {
    fn from(r: SearchResponse) -> Self {
        match r.hits {
            Some(env) => Self {
                total: env.total,
                hits: env.hits.into_iter().map(SearchHit::from).collect(),
            },
            None => Self {
                total: None,
                hits: Vec::new(),
            },
        }
    }
}

impl From<GetResponse> for DocumentView {
    fn from(r: GetResponse) -> Self {
        Self {
            id: r.id,
            found: r.found,
            source: r.source,
        }
    }
}

impl From<IndexResponse> for IndexedDocument {
    fn from(r: IndexResponse) -> Self {
        Self {
            id: r.id,
            result: r.result,
            version: r.version,
        }
    }
}

impl From<CatIndexRow> for IndexSummary {
    fn from(r: CatIndexRow) -> Self {
        Self {
            index: r.index,
            health: r.health,
            status: r.status,
            docs_count: r.docs_count,
            store_size: r.store_size,
        }
    }
}
