pub mod http;
pub mod hubspot_api;

pub use http::build_http_client;
pub use hubspot_api::HubspotApi;
