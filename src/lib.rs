pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod hubspot_oauth;
pub mod router;
pub mod service;
pub mod types;

pub use config::Config;
pub use error::ConnectorError;
pub use hubspot_oauth::HubspotOauthService;
pub use service::{CredentialStore, ItemFetcher};
pub use types::IntegrationItem;
