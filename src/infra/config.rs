use std::collections::BTreeMap;
use std::fmt;

use base64::Engine as _;

pub const DEFAULT_ES_URL: &str = "http://localhost:9200";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Stdio,
    Http,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Stdio => f.write_str("stdio"),
            Mode::Http => f.write_str("http"),
        }
    }
}

/// Process-level settings: which transport to bind and where.
pub struct Config {
    pub mode: Mode,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let mode = match std::env::var("MODE").as_deref() {
            Ok("http") | Ok("server") => Mode::Http,
            _ => Mode::Stdio,
        };
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);

        Self { mode, port }
    }
}

/// How requests to Elasticsearch authenticate. At most one scheme is active.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    None,
    ApiKey(String),
    Basic { user: String, pass: String },
}

impl Auth {
    pub fn scheme(&self) -> &'static str {
        match self {
            Auth::None => "none",
            Auth::ApiKey(_) => "api_key",
            Auth::Basic { .. } => "basic",
        }
    }

    fn header_value(&self) -> Option<String> {
        match self {
            Auth::None => None,
            Auth::ApiKey(key) => Some(format!("ApiKey {key}")),
            Auth::Basic { user, pass } => {
                let token = base64::engine::general_purpose::STANDARD.encode(format!("{user}:{pass}"));
                Some(format!("Basic {token}"))
            }
        }
    }
}

// Credentials stay out of logs.
impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

/// Target cluster and credentials, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EsConfig {
    pub url: String,
    pub auth: Auth,
}

impl EsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let url = var("ELASTICSEARCH_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_ES_URL.to_string());

        let auth = if let Some(key) = var("ELASTICSEARCH_API_KEY") {
            Auth::ApiKey(key)
        } else if let (Some(user), Some(pass)) = (var("ELASTICSEARCH_USER"), var("ELASTICSEARCH_PASS")) {
            Auth::Basic { user, pass }
        } else {
            Auth::None
        };

        Self { url, auth }
    }

    /// Headers sent on every request.
    pub fn headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(value) = self.auth.header_value() {
            headers.insert("Authorization".to_string(), value);
        }
        headers
    }
}
