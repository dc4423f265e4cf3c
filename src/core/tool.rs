use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::core::error::GatewayError;

/// Tool arguments as received from the host: a JSON object.
pub type Arguments = Map<String, Value>;

/// Minimal metadata every tool must expose.
pub trait ToolSpec {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_schema(&self) -> Value;
}

/// Tool = metadata + handler. The handler returns plain JSON; rendering to text
/// happens at the protocol edge.
#[async_trait]
pub trait Tool: ToolSpec + Send + Sync {
    async fn call(&self, arguments: &Arguments) -> Result<Value, GatewayError>;
}
