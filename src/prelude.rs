//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits
//! for authenticating Petstore API calls.
//!
//! # Usage
//!
//! ```rust
//! use petstore_auth::prelude::*;
//! ```

// Core types
pub use crate::Error;
pub use crate::Result;

// Configuration
pub use crate::config::{ClientConfig, ClientConfigBuilder, Environment, Server};

// Credentials
pub use crate::auth::{ApiKeyModel, OAuthModel, OAuthScope, OAuthToken};

// Providers and decoration
pub use crate::auth::{
    ApiKeyProvider, AuthParameters, AuthRegistry, CredentialProvider, OAuthProvider,
};
