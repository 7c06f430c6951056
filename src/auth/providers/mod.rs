//! Credential providers, one per authentication scheme.

mod api_key;
mod oauth;

pub use api_key::{API_KEY_SCHEME, ApiKeyProvider};
pub use oauth::{OAUTH_SCHEME, OAuthProvider};
