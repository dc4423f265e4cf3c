pub fn init() {
    // Initialize tracing subscriber once, honoring RUST_LOG if set.
    // Logs go to stderr: in stdio mode stdout carries the protocol stream.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Record a histogram sample and mirror it as a log line. No exporter is
/// installed, so without a recorder the metric side is a no-op.
pub fn log_metric(tool: &str, metric: &str, value: f64) {
    metrics::histogram!(metric.to_owned(), "tool" => tool.to_owned()).record(value);
    tracing::debug!(tool = tool, metric = metric, value = value, "metric");
}

pub fn count_error(tool: &str, kind: &'static str) {
    metrics::counter!("elasticsearch_mcp_errors_total", "tool" => tool.to_owned(), "kind" => kind)
        .increment(1);
}
