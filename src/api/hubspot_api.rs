use crate::error::ConnectorError;
use crate::types::ObjectType;
use reqwest::StatusCode;
use url::Url;

/// Stateless caller for the CRM v3 object endpoints.
#[derive(Clone)]
pub struct HubspotApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HubspotApi {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn objects_url(&self, object_type: ObjectType) -> Result<Url, ConnectorError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!(
            "{base}/crm/v3/objects/{}",
            object_type.as_str()
        ))?)
    }

    /// `GET /crm/v3/objects/{type}` (first page only).
    ///
    /// Non-2xx statuses are returned to the caller as-is; only transport
    /// failures are errors.
    pub async fn list_objects(
        &self,
        access_token: &str,
        object_type: ObjectType,
    ) -> Result<reqwest::Response, ConnectorError> {
        let resp = self
            .client
            .get(self.objects_url(object_type)?)
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .send()
            .await?;
        Ok(resp)
    }
}

/// Whether a list response carries usable records.
pub fn is_listing_ok(status: StatusCode) -> bool {
    status == StatusCode::OK
}
