//! Client configuration.

use std::fmt;
use std::sync::Arc;

use super::{Environment, Server};
use crate::auth::{
    API_KEY_SCHEME, ApiKeyModel, ApiKeyProvider, AuthRegistry, OAUTH_SCHEME, OAuthModel,
    OAuthProvider,
};

/// Immutable configuration of one Petstore client.
///
/// Only schemes with credentials are registered, so an endpoint requiring a
/// scheme that was never configured fails when it is called, not here.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    environment: Environment,
    api_key: Option<Arc<ApiKeyProvider>>,
    oauth: Option<Arc<OAuthProvider>>,
    registry: AuthRegistry,
}

impl ClientConfig {
    /// Start building a configuration for the production environment.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Selected environment.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Base URL for a server alias in the current environment.
    pub fn base_uri(&self, server: Server) -> &'static str {
        self.environment.base_uri(server)
    }

    /// Credentials for the `api_key` scheme, if configured.
    pub fn api_key_credentials(&self) -> Option<&ApiKeyProvider> {
        self.api_key.as_deref()
    }

    /// Model behind the `api_key` credentials.
    pub fn api_key_model(&self) -> Option<&ApiKeyModel> {
        self.api_key.as_deref().map(ApiKeyProvider::model)
    }

    /// Credentials for the `petstore_auth` scheme, if configured.
    pub fn oauth_credentials(&self) -> Option<&OAuthProvider> {
        self.oauth.as_deref()
    }

    /// Model behind the `petstore_auth` credentials.
    pub fn oauth_model(&self) -> Option<&OAuthModel> {
        self.oauth.as_deref().map(OAuthProvider::model)
    }

    /// Registry holding one provider per configured scheme.
    pub fn auth_registry(&self) -> &AuthRegistry {
        &self.registry
    }

    /// Builder pre-populated with this configuration, for deriving a new client.
    pub fn to_builder(&self) -> ClientConfigBuilder {
        ClientConfigBuilder {
            environment: self.environment,
            api_key: self.api_key_model().cloned(),
            oauth: self.oauth_model().cloned(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schemes: Vec<&str> = self.registry.schemes().collect();
        write!(
            f,
            "Environment = {}, Schemes = [{}]",
            self.environment,
            schemes.join(", ")
        )
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    environment: Environment,
    api_key: Option<ApiKeyModel>,
    oauth: Option<OAuthModel>,
}

impl ClientConfigBuilder {
    /// Select the environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set credentials for the `api_key` scheme.
    pub fn api_key_credentials(mut self, model: ApiKeyModel) -> Self {
        self.api_key = Some(model);
        self
    }

    /// Set credentials for the `petstore_auth` scheme.
    pub fn oauth_credentials(mut self, model: OAuthModel) -> Self {
        self.oauth = Some(model);
        self
    }

    /// Build providers for the configured schemes and register them.
    pub fn build(self) -> ClientConfig {
        let api_key = self.api_key.map(|m| Arc::new(ApiKeyProvider::new(m)));
        let oauth = self
            .oauth
            .map(|m| Arc::new(OAuthProvider::with_environment(m, self.environment)));

        let mut registry = AuthRegistry::builder();
        if let Some(provider) = &api_key {
            registry = registry.register(API_KEY_SCHEME, provider.clone());
        }
        if let Some(provider) = &oauth {
            registry = registry.register(OAUTH_SCHEME, provider.clone());
        }
        let registry = registry.build();

        tracing::debug!(
            environment = %self.environment,
            schemes = ?registry.schemes().collect::<Vec<_>>(),
            "Client configuration built"
        );

        ClientConfig {
            environment: self.environment,
            api_key,
            oauth,
            registry,
        }
    }
}
