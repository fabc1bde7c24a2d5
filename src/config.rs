use crate::error::ConnectorError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable prefix; nested keys are separated by `__`,
/// e.g. `CONNECTOR_HUBSPOT__CLIENT_ID`.
pub const ENV_PREFIX: &str = "CONNECTOR_";

/// `database_url` value selecting the non-persistent in-memory store.
pub const MEMORY_DATABASE_URL: &str = "memory";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub listen_addr: String,
    pub database_url: String,
    pub loglevel: String,
    pub proxy: Option<Url>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub cors_allowed_origin: Option<String>,
    pub hubspot: HubspotConfig,
}

/// OAuth application settings and provider endpoints for HubSpot.
#[derive(Clone, Deserialize, Serialize)]
pub struct HubspotConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: Url,
    pub scopes: Vec<String>,
    pub auth_url: Url,
    pub token_url: Url,
    pub api_base_url: Url,
    /// Base of the web UI, used for item deep links.
    pub app_base_url: Url,
}

impl std::fmt::Debug for HubspotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubspotConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri.as_str())
            .field("scopes", &self.scopes)
            .field("auth_url", &self.auth_url.as_str())
            .field("token_url", &self.token_url.as_str())
            .field("api_base_url", &self.api_base_url.as_str())
            .field("app_base_url", &self.app_base_url.as_str())
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite://connector.sqlite".to_string(),
            loglevel: "info".to_string(),
            proxy: None,
            connect_timeout_secs: 5,
            request_timeout_secs: 30,
            cors_allowed_origin: None,
            hubspot: HubspotConfig::default(),
        }
    }
}

impl Default for HubspotConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: static_url("http://localhost:8000/integrations/hubspot/oauth2callback"),
            scopes: vec![
                "contacts".to_string(),
                "companies".to_string(),
                "deals".to_string(),
            ],
            auth_url: static_url("https://app.hubspot.com/oauth/authorize"),
            token_url: static_url("https://api.hubapi.com/oauth/v1/token"),
            api_base_url: static_url("https://api.hubapi.com"),
            app_base_url: static_url("https://app.hubspot.com"),
        }
    }
}

fn static_url(s: &str) -> Url {
    Url::parse(s).expect("built-in default URL must parse")
}

impl Config {
    /// Defaults layered under `CONNECTOR_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load from the process environment and validate.
    pub fn load() -> Result<Self, ConnectorError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConnectorError> {
        let cfg: Config = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConnectorError> {
        if self.hubspot.client_id.trim().is_empty() {
            return Err(ConnectorError::Config(format!(
                "hubspot.client_id is required (set {ENV_PREFIX}HUBSPOT__CLIENT_ID)"
            )));
        }
        if self.hubspot.client_secret.trim().is_empty() {
            return Err(ConnectorError::Config(format!(
                "hubspot.client_secret is required (set {ENV_PREFIX}HUBSPOT__CLIENT_SECRET)"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
    }

    #[test]
    fn loads_with_secrets_and_defaults() {
        let cfg = Config::from_figment(
            base()
                .merge(("hubspot.client_id", "client-abc"))
                .merge(("hubspot.client_secret", "secret-xyz")),
        )
        .unwrap();

        assert_eq!(cfg.hubspot.client_id, "client-abc");
        assert_eq!(cfg.hubspot.scopes, vec!["contacts", "companies", "deals"]);
        assert_eq!(
            cfg.hubspot.token_url.as_str(),
            "https://api.hubapi.com/oauth/v1/token"
        );
        assert_eq!(cfg.listen_addr, "0.0.0.0:8000");
    }

    #[test]
    fn rejects_missing_client_secret() {
        let err = Config::from_figment(base().merge(("hubspot.client_id", "client-abc")))
            .unwrap_err();
        assert!(matches!(err, ConnectorError::Config(msg) if msg.contains("client_secret")));
    }

    #[test]
    fn rejects_empty_client_id() {
        let err = Config::from_figment(
            base()
                .merge(("hubspot.client_id", "  "))
                .merge(("hubspot.client_secret", "secret-xyz")),
        )
        .unwrap_err();
        assert!(matches!(err, ConnectorError::Config(msg) if msg.contains("client_id")));
    }

    #[test]
    fn debug_output_redacts_secret() {
        let mut cfg = HubspotConfig::default();
        cfg.client_secret = "super-secret".to_string();
        let printed = format!("{:?}", cfg);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
