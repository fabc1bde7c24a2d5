use crate::error::ConnectorError;
use std::fmt;
use std::str::FromStr;

/// Identity pair round-tripped through the provider's `state` parameter.
///
/// Not signed: whatever comes back is trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthState {
    pub user_id: String,
    pub org_id: String,
}

impl OAuthState {
    pub fn new(user_id: impl Into<String>, org_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            org_id: org_id.into(),
        }
    }

    /// State for an authorization request. Identifiers containing the `:`
    /// separator are rejected since they could never parse back.
    pub fn for_identity(user_id: &str, org_id: &str) -> Result<Self, ConnectorError> {
        if user_id.contains(':') || org_id.contains(':') {
            return Err(ConnectorError::InvalidIdentity);
        }
        Ok(Self::new(user_id, org_id))
    }
}

impl fmt::Display for OAuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.user_id, self.org_id)
    }
}

impl FromStr for OAuthState {
    type Err = ConnectorError;

    /// Exactly one `:` separator is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(user_id), Some(org_id), None) => Ok(Self::new(user_id, org_id)),
            _ => Err(ConnectorError::MalformedState),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_colon_joined() {
        assert_eq!(OAuthState::new("u1", "o1").to_string(), "u1:o1");
    }

    #[test]
    fn identity_with_separator_is_rejected() {
        assert!(matches!(
            OAuthState::for_identity("team:lead", "o1"),
            Err(ConnectorError::InvalidIdentity)
        ));
        assert!(matches!(
            OAuthState::for_identity("u1", "org:eu"),
            Err(ConnectorError::InvalidIdentity)
        ));
        let state = OAuthState::for_identity("u1", "o1").unwrap();
        assert_eq!(state.to_string().parse::<OAuthState>().unwrap(), state);
    }

    #[test]
    fn parses_exactly_two_parts() {
        assert_eq!(
            "u1:o1".parse::<OAuthState>().unwrap(),
            OAuthState::new("u1", "o1")
        );
        assert!(matches!(
            "u1".parse::<OAuthState>(),
            Err(ConnectorError::MalformedState)
        ));
        assert!(matches!(
            "u1:o1:extra".parse::<OAuthState>(),
            Err(ConnectorError::MalformedState)
        ));
    }
}
