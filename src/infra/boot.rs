use std::net::SocketAddr;

use crate::clients::elasticsearch::EsClient;
use crate::infra::config::{Config, EsConfig, Mode};
use crate::infra::mcp::GatewaySvc;
use crate::tools::registry::{build_registry, ToolRegistry};

/// Resolve cluster settings and wire client + registry. Fails only on
/// unusable configuration (e.g. a credential that is not a valid header value).
pub fn build_registry_from_env() -> anyhow::Result<ToolRegistry> {
    let es = EsConfig::from_env();
    let client = EsClient::new(&es)?;
    tracing::info!(url = %client.base_url(), auth = es.auth.scheme(), "elasticsearch target");
    Ok(build_registry(client))
}

pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::from_env();
    tracing::info!(mode = %cfg.mode, port = cfg.port, "BOOT elasticsearch-mcp");

    let svc = GatewaySvc::new(build_registry_from_env()?);

    match cfg.mode {
        Mode::Stdio => {
            crate::infra::runtime::mcp_transport::serve_stdio(svc)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        Mode::Http => {
            let app = crate::infra::http_app::build_app(svc);
            let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!(%addr, "listening");
            axum::serve(listener, app).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn registry_from_env_uses_defaults() {
        std::env::remove_var("ELASTICSEARCH_URL");
        std::env::remove_var("ELASTICSEARCH_API_KEY");
        let reg = build_registry_from_env().unwrap();
        assert_eq!(reg.list().len(), 6);
    }

    #[test]
    #[serial]
    fn bad_credentials_fail_at_startup() {
        std::env::set_var("ELASTICSEARCH_API_KEY", "line\nbreak");
        let res = build_registry_from_env();
        std::env::remove_var("ELASTICSEARCH_API_KEY");
        assert!(res.is_err());
    }
}
