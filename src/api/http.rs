use crate::config::Config;
use crate::error::ConnectorError;
use std::time::Duration;

const USER_AGENT: &str = concat!("hubspot-connector/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for the token endpoint and CRM API.
///
/// Redirects are disabled: the token exchange must never follow them.
pub fn build_http_client(cfg: &Config) -> Result<reqwest::Client, ConnectorError> {
    let mut builder = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .timeout(Duration::from_secs(cfg.request_timeout_secs));
    if let Some(proxy_url) = cfg.proxy.as_ref() {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
    }
    Ok(builder.build()?)
}
