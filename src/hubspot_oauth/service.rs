use super::endpoints::HubspotOauthEndpoints;
use super::state::OAuthState;
use crate::config::HubspotConfig;
use crate::error::ConnectorError;
use crate::service::credential_store::CredentialStore;
use oauth2::AuthorizationCode;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
pub struct AuthorizeResponse {
    pub auth_url: String,
}

/// Service layer composing the HubSpot OAuth operations with credential
/// persistence.
#[derive(Clone)]
pub struct HubspotOauthService {
    cfg: HubspotConfig,
    http_client: reqwest::Client,
    store: CredentialStore,
}

impl HubspotOauthService {
    pub fn new(cfg: HubspotConfig, http_client: reqwest::Client, store: CredentialStore) -> Self {
        Self {
            cfg,
            http_client,
            store,
        }
    }

    /// Consent URL for the given identity pair.
    pub fn authorize(
        &self,
        user_id: &str,
        org_id: &str,
    ) -> Result<AuthorizeResponse, ConnectorError> {
        let state = OAuthState::for_identity(user_id, org_id)?;
        let url = HubspotOauthEndpoints::build_authorize_url(&self.cfg, &state)?;
        info!(user_id, org_id, "authorization URL issued");
        Ok(AuthorizeResponse {
            auth_url: url.into(),
        })
    }

    /// Handle the provider redirect: exchange `code` and persist the token
    /// JSON under the identity pair decoded from `state`.
    pub async fn oauth_callback(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<OAuthState, ConnectorError> {
        if let Some(error) = params.get("error") {
            warn!(%error, "provider returned an authorization error");
            return Err(ConnectorError::ProviderDenied(error.clone()));
        }

        let Some(code) = params.get("code") else {
            return Err(ConnectorError::MissingCode);
        };

        let state: OAuthState = params
            .get("state")
            .ok_or(ConnectorError::MalformedState)?
            .parse()
            .inspect_err(|_| warn!("callback state is missing or malformed"))?;

        let token = HubspotOauthEndpoints::exchange_authorization_code(
            &self.cfg,
            AuthorizationCode::new(code.clone()),
            &self.http_client,
        )
        .await?;

        let credentials = serde_json::to_string(&token)?;
        self.store
            .store(&state.user_id, &state.org_id, &credentials)
            .await?;

        info!(
            user_id = %state.user_id,
            org_id = %state.org_id,
            "OAuth callback stored credentials"
        );
        Ok(state)
    }
}
