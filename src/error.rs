use axum::{Json, http::StatusCode, response::IntoResponse};
use oauth2::basic::BasicErrorResponseType;
use oauth2::{HttpClientError, RequestTokenError, StandardErrorResponse};
use reqwest::Error as ReqwestClientError;
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum ConnectorError {
    /// The provider redirected back with an `error` parameter; surfaced verbatim.
    #[error("{0}")]
    ProviderDenied(String),

    #[error("No code provided")]
    MissingCode,

    #[error("Invalid state parameter")]
    MalformedState,

    #[error("user_id and org_id must not contain ':'")]
    InvalidIdentity,

    #[error("Failed to get access token")]
    TokenExchange { reason: String },

    #[error("No credentials found")]
    NoCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for ConnectorError {
    fn from(e: figment::Error) -> Self {
        ConnectorError::Config(e.to_string())
    }
}

impl
    From<
        RequestTokenError<
            HttpClientError<ReqwestClientError>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    > for ConnectorError
{
    fn from(
        e: RequestTokenError<
            HttpClientError<ReqwestClientError>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    ) -> Self {
        let reason = match e {
            RequestTokenError::ServerResponse(err) => {
                format!("server rejected code: {}", err.error())
            }
            RequestTokenError::Request(req_e) => format!("request failed: {}", req_e),
            RequestTokenError::Parse(parse_err, _body) => {
                format!("unparseable token response: {}", parse_err)
            }
            RequestTokenError::Other(s) => s,
        };
        ConnectorError::TokenExchange { reason }
    }
}

impl ConnectorError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ConnectorError::ProviderDenied(_)
            | ConnectorError::MissingCode
            | ConnectorError::MalformedState
            | ConnectorError::InvalidIdentity
            | ConnectorError::Json(_) => StatusCode::BAD_REQUEST,
            ConnectorError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ConnectorError::NoCredentials => StatusCode::NOT_FOUND,
            ConnectorError::TokenExchange { .. }
            | ConnectorError::Reqwest(_)
            | ConnectorError::UrlParse(_) => StatusCode::BAD_GATEWAY,
            ConnectorError::DatabaseError(_) | ConnectorError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ConnectorError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let message = match &self {
            ConnectorError::DatabaseError(e) => {
                error!(error = %e, "credential store failure");
                "An internal server error occurred.".to_string()
            }
            ConnectorError::TokenExchange { reason } => {
                error!(%reason, "token exchange failed");
                self.to_string()
            }
            _ => self.to_string(),
        };
        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Error body shape shared by every endpoint: `{"error": "<message>"}`.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
