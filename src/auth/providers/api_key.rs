//! API Key authentication provider.

use secrecy::ExposeSecret;

use crate::auth::{ApiKeyModel, AuthParameter, CredentialProvider};

/// Scheme name for API key authentication.
pub const API_KEY_SCHEME: &str = "api_key";

const HEADER_NAME: &str = "api_key";

/// API Key authentication provider.
#[derive(Debug, Clone)]
pub struct ApiKeyProvider {
    model: ApiKeyModel,
}

impl ApiKeyProvider {
    pub fn new(model: ApiKeyModel) -> Self {
        Self { model }
    }

    /// Access the credential model.
    pub fn model(&self) -> &ApiKeyModel {
        &self.model
    }

    /// Check if credentials match.
    pub fn matches(&self, api_key: &str) -> bool {
        self.model.api_key().expose_secret() == api_key
    }
}

impl CredentialProvider for ApiKeyProvider {
    fn scheme(&self) -> &'static str {
        API_KEY_SCHEME
    }

    fn parameters(&self) -> Vec<AuthParameter> {
        vec![
            AuthParameter::header(
                HEADER_NAME,
                Some(self.model.api_key().expose_secret().to_string()),
            )
            .required(),
        ]
    }
}
