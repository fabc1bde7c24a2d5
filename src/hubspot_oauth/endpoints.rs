use super::state::OAuthState;
use crate::config::HubspotConfig;
use crate::error::ConnectorError;

use oauth2::{
    AuthType, AuthUrl, AuthorizationCode, Client as OAuth2Client, ClientId, ClientSecret,
    CsrfToken, EndpointNotSet, EndpointSet, ExtraTokenFields, RedirectUrl, Scope,
    StandardRevocableToken, StandardTokenResponse, TokenResponse, TokenUrl,
    basic::{
        BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse,
        BasicTokenType,
    },
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};
use url::Url;

/// Stateless HubSpot OAuth endpoints.
pub(super) struct HubspotOauthEndpoints;

impl HubspotOauthEndpoints {
    /// Consent page URL with the identity pair as `state`.
    pub(super) fn build_authorize_url(
        cfg: &HubspotConfig,
        state: &OAuthState,
    ) -> Result<Url, ConnectorError> {
        let client = build_oauth2_client(cfg)?;
        let state_value = state.to_string();
        let (auth_url, _csrf) = client
            .authorize_url(|| CsrfToken::new(state_value))
            .add_scopes(cfg.scopes.iter().cloned().map(Scope::new))
            .url();
        Ok(auth_url)
    }

    /// Exchange an authorization code for tokens.
    pub(super) async fn exchange_authorization_code(
        cfg: &HubspotConfig,
        code: AuthorizationCode,
        http_client: &reqwest::Client,
    ) -> Result<HubspotTokenResponse, ConnectorError> {
        let client = build_oauth2_client(cfg)?;
        debug!(token_url = %cfg.token_url, "exchanging authorization code");
        let token_result: HubspotTokenResponse = client
            .exchange_code(code)
            .request_async(http_client)
            .await?;
        info!(
            has_refresh_token = token_result.refresh_token().is_some(),
            "authorization code exchanged"
        );
        Ok(token_result)
    }
}

/// Build the HubSpot OAuth2 client from configuration.
///
/// HubSpot expects the client credentials in the form body, not Basic auth.
fn build_oauth2_client(cfg: &HubspotConfig) -> Result<HubspotOauth2Client, ConnectorError> {
    let client = OAuth2Client::new(ClientId::new(cfg.client_id.clone()))
        .set_client_secret(ClientSecret::new(cfg.client_secret.clone()))
        .set_auth_uri(AuthUrl::new(cfg.auth_url.as_str().to_string())?)
        .set_token_uri(TokenUrl::new(cfg.token_url.as_str().to_string())?)
        .set_redirect_uri(RedirectUrl::new(cfg.redirect_uri.as_str().to_string())?)
        .set_auth_type(AuthType::RequestBody);
    Ok(client)
}

/// Provider fields beyond the standard token response, kept so the stored
/// JSON carries everything HubSpot returned.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HubspotTokenFields {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
impl ExtraTokenFields for HubspotTokenFields {}

pub type HubspotTokenResponse = StandardTokenResponse<HubspotTokenFields, BasicTokenType>;

pub(super) type HubspotOauth2Client = OAuth2Client<
    BasicErrorResponse,
    HubspotTokenResponse,
    BasicTokenIntrospectionResponse,
    StandardRevocableToken,
    BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> HubspotConfig {
        HubspotConfig {
            client_id: "client-abc".to_string(),
            client_secret: "secret-xyz".to_string(),
            ..HubspotConfig::default()
        }
    }

    #[test]
    fn authorize_url_carries_client_redirect_scopes_and_state() {
        let url = HubspotOauthEndpoints::build_authorize_url(&cfg(), &OAuthState::new("u1", "o1"))
            .unwrap();

        assert_eq!(url.host_str(), Some("app.hubspot.com"));
        assert_eq!(url.path(), "/oauth/authorize");

        let pairs: std::collections::HashMap<String, String> =
            url.query_pairs().into_owned().collect();
        assert_eq!(pairs["client_id"], "client-abc");
        assert_eq!(
            pairs["redirect_uri"],
            "http://localhost:8000/integrations/hubspot/oauth2callback"
        );
        assert_eq!(pairs["scope"], "contacts companies deals");
        assert_eq!(pairs["state"], "u1:o1");
        assert!(!url.as_str().contains("secret-xyz"));
    }

    #[test]
    fn token_response_keeps_unknown_fields() {
        let body = r#"{
            "access_token": "at-1",
            "refresh_token": "rt-1",
            "expires_in": 1800,
            "token_type": "bearer",
            "hub_id": 4242
        }"#;
        let token: HubspotTokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(token.extra_fields().extra["hub_id"], 4242);

        let value = serde_json::to_value(&token).unwrap();
        assert_eq!(value["access_token"], "at-1");
        assert_eq!(value["refresh_token"], "rt-1");
        assert_eq!(value["expires_in"], 1800);
        assert_eq!(value["hub_id"], 4242);
    }
}
