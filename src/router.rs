use crate::api::{HubspotApi, build_http_client};
use crate::config::Config;
use crate::db::KvStore;
use crate::error::ConnectorError;
use crate::handlers::hubspot;
use crate::hubspot_oauth::HubspotOauthService;
use crate::service::{CredentialStore, ItemFetcher};
use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::warn;

/// Shared handler state; every collaborator is injected here.
#[derive(Clone)]
pub struct ConnectorState {
    pub oauth: HubspotOauthService,
    pub store: CredentialStore,
    pub fetcher: ItemFetcher,
}

impl ConnectorState {
    pub fn new(cfg: &Config, kv: Arc<dyn KvStore>) -> Result<Self, ConnectorError> {
        let http_client = build_http_client(cfg)?;
        let store = CredentialStore::new(kv);
        let oauth = HubspotOauthService::new(cfg.hubspot.clone(), http_client.clone(), store.clone());
        let fetcher = ItemFetcher::new(
            HubspotApi::new(http_client, cfg.hubspot.api_base_url.clone()),
            cfg.hubspot.app_base_url.clone(),
        );
        Ok(Self {
            oauth,
            store,
            fetcher,
        })
    }
}

pub fn connector_router(state: ConnectorState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/integrations/hubspot/authorize", post(hubspot::authorize))
        .route(
            "/integrations/hubspot/oauth2callback",
            get(hubspot::oauth2callback),
        )
        .route("/integrations/hubspot/credentials", post(hubspot::credentials))
        .route(
            "/integrations/hubspot/get_hubspot_items",
            post(hubspot::get_items),
        )
        .with_state(state)
}

/// CORS for a browser frontend served from `origin`.
pub fn cors_layer(origin: &str) -> Option<CorsLayer> {
    match HeaderValue::from_str(origin) {
        Ok(value) => Some(
            CorsLayer::new()
                .allow_origin(value)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(tower_http::cors::Any),
        ),
        Err(e) => {
            warn!(%origin, error = %e, "ignoring invalid CORS origin");
            None
        }
    }
}
