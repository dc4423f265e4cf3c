use thiserror::Error;

/// Gateway-wide error model, shared by the Elasticsearch client and the tools.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Arguments did not match the tool's declared input schema.
    #[error("invalid arguments: {0}")]
    SchemaViolation(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// A JSON-encoded string argument failed to parse.
    #[error("argument `{argument}` is not valid JSON: {reason}")]
    MalformedInput {
        argument: &'static str,
        reason: String,
    },

    /// Non-2xx answer from Elasticsearch; `body` is already truncated.
    #[error("Elasticsearch returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("could not decode Elasticsearch response: {0}")]
    Decode(String),

    #[error("request to Elasticsearch failed: {0}")]
    Transport(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl GatewayError {
    /// Errors the caller caused by sending bad arguments; these are reported
    /// as protocol errors rather than failed tool results.
    pub fn is_invalid_params(&self) -> bool {
        matches!(self, Self::SchemaViolation(_) | Self::UnknownTool(_))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        GatewayError::Transport(e.to_string())
    }
}
