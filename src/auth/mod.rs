//! Authentication module for the Petstore API.
//!
//! Provides one credential provider per authentication scheme:
//! - **API Key** (`api_key`): static key sent in the `api_key` header
//! - **OAuth 2** (`petstore_auth`): bearer token plus authorization-code URL construction
//!
//! Providers are registered in an [`AuthRegistry`] by scheme name. For each
//! request the registry validates, then decorates, the parameters an endpoint's
//! declared schemes require.

mod credential;
mod params;
mod provider;
mod providers;
mod registry;
mod scope;
mod token;

pub use credential::{ApiKeyModel, ApiKeyModelBuilder, OAuthModel, OAuthModelBuilder};
pub use params::{AuthParameter, AuthParameters, ParameterDecorator, ParameterLocation};
pub use provider::CredentialProvider;
pub use providers::{API_KEY_SCHEME, ApiKeyProvider, OAUTH_SCHEME, OAuthProvider};
pub use registry::{AuthRegistry, AuthRegistryBuilder};
pub use scope::OAuthScope;
pub use token::OAuthToken;
