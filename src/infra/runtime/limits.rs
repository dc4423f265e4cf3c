use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::core::error::GatewayError;

/// Minimum spacing between the starts of two outbound calls.
pub const MIN_CALL_INTERVAL: Duration = Duration::from_millis(100);

/// Build a reqwest client carrying the given default headers. No request
/// timeout is set; a slow cluster answer is waited on.
pub fn make_http_client<'a>(
    headers: impl IntoIterator<Item = (&'a String, &'a String)>,
) -> Result<reqwest::Client, GatewayError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| GatewayError::Config(format!("header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| GatewayError::Config(format!("header {}: {e}", name.as_str())))?;
        map.insert(name, value);
    }
    reqwest::Client::builder()
        .default_headers(map)
        .build()
        .map_err(|e| GatewayError::Config(format!("http client: {e}")))
}

/// Fixed-interval throttle: each `acquire` returns no earlier than
/// `min_interval` after the previous one returned.
///
/// The start is recorded when the permit is handed out, not when the caller's
/// request finishes, so a slow request does not push the next one further back.
/// The lock is held across the wait so concurrent callers queue in turn.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_start: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_start: Mutex::new(None),
        }
    }

    /// Wait for the slot, then return the recorded start instant.
    pub async fn acquire(&self) -> Instant {
        let mut last = self.last_start.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                tracing::trace!(wait_ms = wait.as_millis() as u64, "rate limiter delaying call");
                tokio::time::sleep(wait).await;
            }
        }
        let now = Instant::now();
        *last = Some(now);
        now
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(MIN_CALL_INTERVAL)
    }
}
