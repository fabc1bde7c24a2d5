use crate::hubspot_oauth::AuthorizeResponse;
use crate::service::FetchedItems;
use crate::{ConnectorError, router::ConnectorState};
use axum::{
    Form, Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct IdentityForm {
    pub user_id: String,
    pub org_id: String,
}

#[derive(Debug, Deserialize)]
pub struct LoadItemsForm {
    pub credentials: String,
}

#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct CredentialsResponse {
    pub credentials: String,
}

/// POST /integrations/hubspot/authorize -> `{auth_url}` for the consent page.
pub async fn authorize(
    State(state): State<ConnectorState>,
    Form(form): Form<IdentityForm>,
) -> Result<Json<AuthorizeResponse>, ConnectorError> {
    Ok(Json(state.oauth.authorize(&form.user_id, &form.org_id)?))
}

/// GET /integrations/hubspot/oauth2callback -> exchanges the code and stores
/// the token JSON.
pub async fn oauth2callback(
    State(state): State<ConnectorState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<CallbackResponse>, ConnectorError> {
    state.oauth.oauth_callback(&params).await?;
    Ok(Json(CallbackResponse { success: true }))
}

/// POST /integrations/hubspot/credentials -> `{credentials}` as stored.
pub async fn credentials(
    State(state): State<ConnectorState>,
    Form(form): Form<IdentityForm>,
) -> Result<Json<CredentialsResponse>, ConnectorError> {
    let credentials = state.store.get(&form.user_id, &form.org_id).await?;
    Ok(Json(CredentialsResponse { credentials }))
}

/// POST /integrations/hubspot/get_hubspot_items -> `{items, sections}`.
pub async fn get_items(
    State(state): State<ConnectorState>,
    Form(form): Form<LoadItemsForm>,
) -> Result<Json<FetchedItems>, ConnectorError> {
    Ok(Json(state.fetcher.fetch_items(&form.credentials).await?))
}
