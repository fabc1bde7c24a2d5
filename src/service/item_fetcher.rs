use crate::api::HubspotApi;
use crate::api::hubspot_api::is_listing_ok;
use crate::error::ConnectorError;
use crate::types::{IntegrationItem, ListObjectsResponse, ObjectType};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Ok,
    /// Non-200 upstream; the section is returned empty.
    Degraded,
}

/// Outcome of one object-type listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub object_type: ObjectType,
    pub status: SectionStatus,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FetchedItems {
    /// Each folder immediately followed by its children, folders in
    /// `ObjectType::ALL` order.
    pub items: Vec<IntegrationItem>,
    pub sections: Vec<SectionReport>,
}

impl FetchedItems {
    pub fn is_degraded(&self) -> bool {
        self.sections
            .iter()
            .any(|s| s.status == SectionStatus::Degraded)
    }
}

#[derive(Clone)]
pub struct ItemFetcher {
    api: HubspotApi,
    app_base_url: Url,
}

impl ItemFetcher {
    pub fn new(api: HubspotApi, app_base_url: Url) -> Self {
        Self { api, app_base_url }
    }

    /// List contacts, companies and deals (first page each) for the stored
    /// credentials text and flatten them under synthetic folders.
    ///
    /// A non-200 listing degrades to an empty section; transport or parse
    /// failures abort the whole fetch.
    pub async fn fetch_items(&self, credentials: &str) -> Result<FetchedItems, ConnectorError> {
        let access_token = access_token_from(credentials)?;

        let mut items = Vec::new();
        let mut sections = Vec::with_capacity(ObjectType::ALL.len());
        for object_type in ObjectType::ALL {
            let (children, report) = self.fetch_section(&access_token, object_type).await?;
            items.push(IntegrationItem::folder(object_type));
            items.extend(children);
            sections.push(report);
        }

        let fetched = FetchedItems { items, sections };
        info!(
            items = fetched.items.len(),
            degraded = fetched.is_degraded(),
            "CRM items fetched"
        );
        Ok(fetched)
    }

    async fn fetch_section(
        &self,
        access_token: &str,
        object_type: ObjectType,
    ) -> Result<(Vec<IntegrationItem>, SectionReport), ConnectorError> {
        let resp = self.api.list_objects(access_token, object_type).await?;
        let status = resp.status();

        if !is_listing_ok(status) {
            warn!(%object_type, status = status.as_u16(), "listing failed; section left empty");
            return Ok((
                Vec::new(),
                SectionReport {
                    object_type,
                    status: SectionStatus::Degraded,
                    count: 0,
                    http_status: Some(status.as_u16()),
                },
            ));
        }

        let listing: ListObjectsResponse = resp.json().await?;
        let children: Vec<IntegrationItem> = listing
            .results
            .iter()
            .map(|record| IntegrationItem::from_crm_object(record, object_type, &self.app_base_url))
            .collect();
        let count = children.len();
        debug!(%object_type, count, "listing normalized");

        Ok((
            children,
            SectionReport {
                object_type,
                status: SectionStatus::Ok,
                count,
                http_status: None,
            },
        ))
    }
}

/// Extract a usable bearer token from stored credentials text.
pub fn access_token_from(credentials: &str) -> Result<String, ConnectorError> {
    let creds: Value = serde_json::from_str(credentials)?;
    match creds.get("access_token").and_then(Value::as_str) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(ConnectorError::InvalidCredentials),
    }
}
