use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// CRM object collections exposed as folders, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Contacts,
    Companies,
    Deals,
}

impl ObjectType {
    pub const ALL: [ObjectType; 3] = [ObjectType::Contacts, ObjectType::Companies, ObjectType::Deals];

    /// Path segment used by both the CRM v3 API and the web UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Contacts => "contacts",
            ObjectType::Companies => "companies",
            ObjectType::Deals => "deals",
        }
    }

    pub fn folder_name(&self) -> &'static str {
        match self {
            ObjectType::Contacts => "Contacts",
            ObjectType::Companies => "Companies",
            ObjectType::Deals => "Deals",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First page of `GET /crm/v3/objects/{type}`. Paging cursors are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ListObjectsResponse {
    #[serde(default)]
    pub results: Vec<CrmObject>,
}

/// A raw CRM record. Fields stay loosely typed: ids and timestamps arrive as
/// strings or numbers depending on API version, and any property may be null.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmObject {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub updated_at: Option<Value>,
}

impl CrmObject {
    /// Record id as text; `None` when absent or null.
    pub fn id_string(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// String property, treating null and non-string values as absent.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.as_ref()?.get(name)?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_v3_list_payload() {
        let body = r#"{
            "results": [
                {
                    "id": "51",
                    "properties": {"firstname": "Jane", "lastname": null},
                    "createdAt": "2024-03-01T10:00:00.000Z",
                    "updatedAt": "2024-03-02T10:00:00.000Z",
                    "archived": false
                }
            ],
            "paging": {"next": {"after": "52"}}
        }"#;
        let resp: ListObjectsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.results.len(), 1);

        let obj = &resp.results[0];
        assert_eq!(obj.id_string().as_deref(), Some("51"));
        assert_eq!(obj.property("firstname"), Some("Jane"));
        assert_eq!(obj.property("lastname"), None);
    }

    #[test]
    fn missing_results_is_empty() {
        let resp: ListObjectsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.results.is_empty());
    }

    #[test]
    fn numeric_id_is_stringified() {
        let obj: CrmObject = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(obj.id_string().as_deref(), Some("7"));

        let obj: CrmObject = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(obj.id_string(), None);
    }
}
