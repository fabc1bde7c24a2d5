//! HubSpot OAuth 2.0 authorization-code flow.
//!
//! 1. `authorize` builds the consent URL carrying `state = "{user_id}:{org_id}"`
//! 2. HubSpot redirects back to the callback with `code` and `state`
//! 3. The code is exchanged at the token endpoint and the token JSON is stored
//!    under the user/org pair decoded from `state`

pub mod endpoints;
pub mod service;
pub mod state;

pub use service::{AuthorizeResponse, HubspotOauthService};
pub use state::OAuthState;
