//! MCP adapter that exposes Elasticsearch search, document and cluster
//! operations as tools for an agent host.

pub mod cli;
pub mod clients;
pub mod core;
pub mod domain;
pub mod infra;
pub mod tools;
