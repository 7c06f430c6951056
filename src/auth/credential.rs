//! Credential models.
//!
//! One immutable model per authentication scheme, built through a validating
//! builder. `to_builder()` derives a new model from an existing one.

use secrecy::{ExposeSecret, SecretString};

use super::{OAuthScope, OAuthToken};
use crate::{Error, Result};

/// Credentials for the `api_key` scheme.
#[derive(Clone, Debug)]
pub struct ApiKeyModel {
    api_key: SecretString,
}

impl ApiKeyModel {
    /// Start building API key credentials.
    pub fn builder() -> ApiKeyModelBuilder {
        ApiKeyModelBuilder::default()
    }

    /// The key sent in the `api_key` header.
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Builder pre-populated with this model's values.
    pub fn to_builder(&self) -> ApiKeyModelBuilder {
        ApiKeyModelBuilder {
            api_key: Some(self.api_key.clone()),
        }
    }
}

impl PartialEq for ApiKeyModel {
    fn eq(&self, other: &Self) -> bool {
        self.api_key.expose_secret() == other.api_key.expose_secret()
    }
}

impl Eq for ApiKeyModel {}

/// Builder for ApiKeyModel.
#[derive(Debug, Default)]
pub struct ApiKeyModelBuilder {
    api_key: Option<SecretString>,
}

impl ApiKeyModelBuilder {
    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Fails when the key was never set.
    pub fn build(self) -> Result<ApiKeyModel> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::config("ApiKeyModel requires `api_key`"))?;
        Ok(ApiKeyModel { api_key })
    }
}

/// Credentials for the `petstore_auth` OAuth 2 scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthModel {
    client_id: String,
    redirect_uri: String,
    token: Option<OAuthToken>,
    scopes: Option<Vec<OAuthScope>>,
}

impl OAuthModel {
    /// Start building OAuth credentials.
    pub fn builder() -> OAuthModelBuilder {
        OAuthModelBuilder::default()
    }

    /// OAuth client identifier.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Redirect URI registered for the client.
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// Current access token, if one has been obtained.
    pub fn token(&self) -> Option<&OAuthToken> {
        self.token.as_ref()
    }

    /// Requested scopes. `None` differs from an empty list when matching.
    pub fn scopes(&self) -> Option<&[OAuthScope]> {
        self.scopes.as_deref()
    }

    /// Builder pre-populated with this model's values.
    pub fn to_builder(&self) -> OAuthModelBuilder {
        OAuthModelBuilder {
            client_id: Some(self.client_id.clone()),
            redirect_uri: Some(self.redirect_uri.clone()),
            token: self.token.clone(),
            scopes: self.scopes.clone(),
        }
    }
}

/// Builder for OAuthModel.
#[derive(Debug, Default)]
pub struct OAuthModelBuilder {
    client_id: Option<String>,
    redirect_uri: Option<String>,
    token: Option<OAuthToken>,
    scopes: Option<Vec<OAuthScope>>,
}

impl OAuthModelBuilder {
    /// Set the client identifier (required).
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the redirect URI (required).
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Set the access token.
    pub fn token(mut self, token: OAuthToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Drop any token, e.g. when deriving credentials from a revoked login.
    pub fn clear_token(mut self) -> Self {
        self.token = None;
        self
    }

    /// Set scopes (replaces existing). Duplicates keep their first position.
    pub fn scopes(mut self, scopes: impl IntoIterator<Item = OAuthScope>) -> Self {
        let mut unique = Vec::new();
        for scope in scopes {
            if !unique.contains(&scope) {
                unique.push(scope);
            }
        }
        self.scopes = Some(unique);
        self
    }

    pub fn clear_scopes(mut self) -> Self {
        self.scopes = None;
        self
    }

    /// Fails when `client_id` or `redirect_uri` was never set.
    pub fn build(self) -> Result<OAuthModel> {
        let client_id = self
            .client_id
            .ok_or_else(|| Error::config("OAuthModel requires `client_id`"))?;
        let redirect_uri = self
            .redirect_uri
            .ok_or_else(|| Error::config("OAuthModel requires `redirect_uri`"))?;

        Ok(OAuthModel {
            client_id,
            redirect_uri,
            token: self.token,
            scopes: self.scopes,
        })
    }
}
