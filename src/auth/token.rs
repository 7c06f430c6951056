//! OAuth token type.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::Result;

/// OAuth 2 access token held by the `petstore_auth` credentials.
///
/// Immutable: a refreshed token is a new value.
#[derive(Clone, Debug)]
pub struct OAuthToken {
    access_token: SecretString,
    token_type: Option<String>,
    refresh_token: Option<SecretString>,
    expiry: Option<i64>,
}

/// Token endpoint response body.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expiry: Option<i64>,
    #[serde(default)]
    refresh_token: Option<String>,
}

impl OAuthToken {
    /// Create a token that never expires.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::from(access_token.into()),
            token_type: None,
            refresh_token: None,
            expiry: None,
        }
    }

    /// Parse a token endpoint JSON response.
    ///
    /// An explicit `expiry` wins; otherwise `expires_in` is counted from now.
    pub fn from_response(body: &str) -> Result<Self> {
        let response: TokenResponse = serde_json::from_str(body)?;
        let expiry = response.expiry.or_else(|| {
            response
                .expires_in
                .map(|secs| Utc::now().timestamp().saturating_add(secs))
        });

        Ok(Self {
            access_token: SecretString::from(response.access_token),
            token_type: response.token_type,
            refresh_token: response.refresh_token.map(SecretString::from),
            expiry,
        })
    }

    /// Set the expiry (Unix seconds).
    pub fn with_expiry(mut self, expiry: i64) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Set the token type, e.g. `Bearer`.
    pub fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = Some(token_type.into());
        self
    }

    /// Set the refresh token.
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(SecretString::from(refresh_token.into()));
        self
    }

    /// Access token.
    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    /// Token type, if the token endpoint sent one.
    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    /// Refresh token.
    pub fn refresh_token(&self) -> Option<&SecretString> {
        self.refresh_token.as_ref()
    }

    /// Expiration timestamp (Unix seconds).
    pub fn expiry(&self) -> Option<i64> {
        self.expiry
    }

    /// Get expiration as DateTime.
    pub fn expiry_datetime(&self) -> Option<DateTime<Utc>> {
        self.expiry.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    /// A token without expiry never expires. Expiring exactly now is not yet expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp())
    }

    /// Expiry check against an explicit Unix timestamp.
    pub(crate) fn is_expired_at(&self, now: i64) -> bool {
        self.expiry.map(|exp| exp < now).unwrap_or(false)
    }

    /// `Authorization` header value.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token.expose_secret())
    }
}

impl PartialEq for OAuthToken {
    fn eq(&self, other: &Self) -> bool {
        self.access_token.expose_secret() == other.access_token.expose_secret()
            && self.token_type == other.token_type
            && self.expiry == other.expiry
            && self.refresh_token.as_ref().map(|t| t.expose_secret())
                == other.refresh_token.as_ref().map(|t| t.expose_secret())
    }
}

impl Eq for OAuthToken {}
