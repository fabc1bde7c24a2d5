use super::hubspot::{CrmObject, ObjectType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Contacts,
    Companies,
    Deals,
    Folder,
}

impl From<ObjectType> for ItemType {
    fn from(t: ObjectType) -> Self {
        match t {
            ObjectType::Contacts => ItemType::Contacts,
            ObjectType::Companies => ItemType::Companies,
            ObjectType::Deals => ItemType::Deals,
        }
    }
}

/// Uniform directory entry shown by the frontend.
///
/// Folder entries have no backing record; nesting is expressed purely by
/// list order (a folder is followed by its children).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub directory: bool,
    pub name: String,
    pub creation_time: Option<DateTime<Utc>>,
    pub last_modified_time: Option<DateTime<Utc>>,
    pub url: Option<String>,
}

impl IntegrationItem {
    /// Synthetic root folder for one object type.
    pub fn folder(object_type: ObjectType) -> Self {
        Self {
            id: object_type.as_str().to_string(),
            item_type: ItemType::Folder,
            directory: true,
            name: object_type.folder_name().to_string(),
            creation_time: None,
            last_modified_time: None,
            url: None,
        }
    }

    /// Normalize a raw CRM record.
    pub fn from_crm_object(record: &CrmObject, object_type: ObjectType, app_base_url: &Url) -> Self {
        let id = record.id_string();
        let url = id.as_deref().map(|id| {
            format!(
                "{}/{}/{}",
                app_base_url.as_str().trim_end_matches('/'),
                object_type.as_str(),
                id
            )
        });

        Self {
            id: id.unwrap_or_default(),
            item_type: object_type.into(),
            directory: false,
            name: display_name(record),
            creation_time: record.created_at.as_ref().and_then(parse_timestamp),
            last_modified_time: record.updated_at.as_ref().and_then(parse_timestamp),
            url,
        }
    }
}

/// `name` property when present and non-empty, otherwise first and last
/// name joined by a space and trimmed, so a lone part carries no stray space.
pub fn display_name(record: &CrmObject) -> String {
    if let Some(name) = record.property("name").filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    let first = record.property("firstname").unwrap_or("");
    let last = record.property("lastname").unwrap_or("");
    format!("{first} {last}").trim().to_string()
}

/// Accepts epoch milliseconds (number or numeric string) or RFC 3339.
/// Zero, null and unparseable values map to `None`.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let millis = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?,
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(ms) => ms,
            Err(_) => {
                return DateTime::parse_from_rfc3339(s.trim())
                    .ok()
                    .map(|dt| dt.with_timezone(&Utc));
            }
        },
        _ => return None,
    };
    if millis == 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn app_url() -> Url {
        Url::parse("https://app.hubspot.com").unwrap()
    }

    fn record(value: Value) -> CrmObject {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn contact_name_from_first_and_last() {
        let rec = record(json!({
            "id": "1",
            "properties": {"firstname": "Jane", "lastname": "Doe"},
            "createdAt": 1_700_000_000_000i64,
            "updatedAt": 1_700_000_360_000i64
        }));
        let item = IntegrationItem::from_crm_object(&rec, ObjectType::Contacts, &app_url());

        assert_eq!(item.id, "1");
        assert_eq!(item.item_type, ItemType::Contacts);
        assert!(!item.directory);
        assert_eq!(item.name, "Jane Doe");
        assert_eq!(
            item.creation_time,
            DateTime::from_timestamp_millis(1_700_000_000_000)
        );
        assert_eq!(
            item.last_modified_time,
            DateTime::from_timestamp_millis(1_700_000_360_000)
        );
        assert_eq!(item.url.as_deref(), Some("https://app.hubspot.com/contacts/1"));
    }

    #[test]
    fn name_property_wins_over_person_fields() {
        let rec = record(json!({
            "id": "9",
            "properties": {"name": "Acme", "firstname": "Jane"}
        }));
        let item = IntegrationItem::from_crm_object(&rec, ObjectType::Companies, &app_url());
        assert_eq!(item.name, "Acme");
    }

    // Intentional change: the untrimmed join produced "Jane " / " Doe".
    #[test]
    fn name_is_trimmed_when_one_part_missing() {
        let only_first = record(json!({"id": "1", "properties": {"firstname": "Jane"}}));
        assert_eq!(display_name(&only_first), "Jane");

        let only_last = record(json!({"id": "2", "properties": {"lastname": "Doe", "name": ""}}));
        assert_eq!(display_name(&only_last), "Doe");

        let nothing = record(json!({"id": "3", "properties": {}}));
        assert_eq!(display_name(&nothing), "");
    }

    #[test]
    fn missing_id_has_no_url() {
        let rec = record(json!({"properties": {"dealname": "Big"}}));
        let item = IntegrationItem::from_crm_object(&rec, ObjectType::Deals, &app_url());
        assert_eq!(item.id, "");
        assert_eq!(item.url, None);
        assert_eq!(item.creation_time, None);
        assert_eq!(item.last_modified_time, None);
    }

    #[test]
    fn timestamps_accept_several_encodings() {
        let expected = DateTime::from_timestamp_millis(1_709_287_200_000);
        assert_eq!(parse_timestamp(&json!(1_709_287_200_000i64)), expected);
        assert_eq!(parse_timestamp(&json!("1709287200000")), expected);
        assert_eq!(parse_timestamp(&json!("2024-03-01T10:00:00.000Z")), expected);
        assert_eq!(parse_timestamp(&json!(0)), None);
        assert_eq!(parse_timestamp(&json!("yesterday")), None);
        assert_eq!(parse_timestamp(&Value::Null), None);
    }

    #[test]
    fn folder_serializes_with_type_tag() {
        let folder = IntegrationItem::folder(ObjectType::Deals);
        let value = serde_json::to_value(&folder).unwrap();
        assert_eq!(value["id"], "deals");
        assert_eq!(value["type"], "folder");
        assert_eq!(value["directory"], true);
        assert_eq!(value["name"], "Deals");
        assert_eq!(value["url"], Value::Null);
    }

    #[test]
    fn trailing_slash_on_app_url_is_tolerated() {
        let base = Url::parse("https://app.hubspot.com/").unwrap();
        let rec = record(json!({"id": "5"}));
        let item = IntegrationItem::from_crm_object(&rec, ObjectType::Companies, &base);
        assert_eq!(item.url.as_deref(), Some("https://app.hubspot.com/companies/5"));
    }
}
