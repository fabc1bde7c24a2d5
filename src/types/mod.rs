pub mod hubspot;
pub mod integration_item;

pub use hubspot::{CrmObject, ListObjectsResponse, ObjectType};
pub use integration_item::{IntegrationItem, ItemType};
