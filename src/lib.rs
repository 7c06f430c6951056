//! # petstore-auth
//!
//! Credential management for the Swagger Petstore API client.
//!
//! The crate decides, per outgoing request, which authentication parameters to
//! attach, whether the held credentials are still usable, and how to build the
//! URL for the interactive OAuth2 authorization step. HTTP transport is left to
//! the caller: it receives a finished [`AuthParameters`] set, or an error before
//! any network I/O happens.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use petstore_auth::{ApiKeyModel, ClientConfig};
//!
//! fn main() -> Result<(), petstore_auth::Error> {
//!     let config = ClientConfig::builder()
//!         .api_key_credentials(ApiKeyModel::builder().api_key("special-key").build()?)
//!         .build();
//!
//!     let params = config.auth_registry().authenticate(&["api_key"])?;
//!     for (name, value) in params.headers() {
//!         // hand to the transport layer
//!         let _ = (name, value);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Authorization Code Flow
//!
//! ```rust,no_run
//! use petstore_auth::{ClientConfig, OAuthModel, OAuthScope};
//!
//! fn main() -> Result<(), petstore_auth::Error> {
//!     let config = ClientConfig::builder()
//!         .oauth_credentials(
//!             OAuthModel::builder()
//!                 .client_id("my-client")
//!                 .redirect_uri("https://example.com/callback")
//!                 .scopes([OAuthScope::ReadPets])
//!                 .build()?,
//!         )
//!         .build();
//!
//!     if let Some(oauth) = config.oauth_credentials() {
//!         let url = oauth.build_authorization_url(Some("state-123"), &[]);
//!         println!("Visit: {}", url);
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod auth;
pub mod config;
pub mod prelude;

pub use auth::{
    API_KEY_SCHEME, ApiKeyModel, ApiKeyModelBuilder, ApiKeyProvider, AuthParameter,
    AuthParameters, AuthRegistry, AuthRegistryBuilder, CredentialProvider, OAUTH_SCHEME,
    OAuthModel, OAuthModelBuilder, OAuthProvider, OAuthScope, OAuthToken, ParameterDecorator,
    ParameterLocation,
};
pub use config::{ClientConfig, ClientConfigBuilder, Environment, Server};

/// Error type for petstore-auth operations.
///
/// Every variant is raised synchronously, before any request is sent.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Missing or inconsistent configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Held credentials cannot authorize the call.
    #[error("Authorization failed: {message}")]
    Auth { message: String },

    /// A required authentication parameter resolved to no value.
    #[error("Missing required authentication parameter `{name}`")]
    MissingParameter { name: String },

    /// Operation invoked on a credential that lacks the state it needs.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Token response could not be parsed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Credentials missing or expired.
    Authorization,
    /// Builder or registry misconfiguration.
    Configuration,
    /// The outgoing request could not be completed.
    Request,
    /// Parsing and unexpected states.
    Internal,
}

impl Error {
    pub fn auth(message: impl Into<String>) -> Self {
        Error::Auth {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Error::MissingParameter { name: name.into() }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Auth { .. } => ErrorCategory::Authorization,
            Error::Config(_) => ErrorCategory::Configuration,
            Error::MissingParameter { .. } => ErrorCategory::Request,
            Error::InvalidState(_) | Error::Json(_) => ErrorCategory::Internal,
        }
    }

    pub fn is_authorization_error(&self) -> bool {
        self.category() == ErrorCategory::Authorization
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }
}

/// Result type for petstore-auth operations.
pub type Result<T> = std::result::Result<T, Error>;
