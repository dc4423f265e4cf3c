use reqwest::RequestBuilder;

/// Generate a simple request id suitable for logging/correlation.
pub fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("es-mcp-{}-{}", now.as_secs(), now.subsec_nanos())
}

/// Add standard headers to an outgoing request. Elasticsearch echoes
/// `X-Opaque-Id` into its task list and slow logs, which makes the id usable
/// for correlation on both sides. Returns the updated builder and the id used.
pub fn add_standard_headers(
    builder: RequestBuilder,
    request_id: Option<String>,
) -> (RequestBuilder, String) {
    let rid = request_id.unwrap_or_else(generate_request_id);
    let b = builder.header("x-opaque-id", rid.as_str()).header(
        reqwest::header::USER_AGENT,
        format!("elasticsearch-mcp/{}", env!("CARGO_PKG_VERSION")),
    );
    (b, rid)
}
