use crate::db::KvStore;
use crate::error::ConnectorError;
use std::sync::Arc;
use tracing::debug;

const PROVIDER: &str = "hubspot";

/// Per user/org credential persistence over an injected key-value store.
///
/// Stored text is returned verbatim; there is no expiry or encryption.
#[derive(Clone)]
pub struct CredentialStore {
    kv: Arc<dyn KvStore>,
}

impl CredentialStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    pub fn credentials_key(user_id: &str, org_id: &str) -> String {
        format!("{PROVIDER}:credentials:{user_id}:{org_id}")
    }

    /// Write (or overwrite) the credentials for the pair.
    pub async fn store(
        &self,
        user_id: &str,
        org_id: &str,
        credentials: &str,
    ) -> Result<(), ConnectorError> {
        self.kv
            .set(&Self::credentials_key(user_id, org_id), credentials)
            .await
    }

    pub async fn get(&self, user_id: &str, org_id: &str) -> Result<String, ConnectorError> {
        match self.kv.get(&Self::credentials_key(user_id, org_id)).await? {
            Some(credentials) => Ok(credentials),
            None => {
                debug!(user_id, org_id, "no stored credentials");
                Err(ConnectorError::NoCredentials)
            }
        }
    }
}
