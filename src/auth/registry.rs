//! Scheme-name registry of credential providers.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{AuthParameters, CredentialProvider, ParameterDecorator};
use crate::{Error, Result};

/// Credential providers keyed by scheme name. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct AuthRegistry {
    providers: BTreeMap<String, Arc<dyn CredentialProvider>>,
}

impl AuthRegistry {
    pub fn builder() -> AuthRegistryBuilder {
        AuthRegistryBuilder::default()
    }

    pub fn get(&self, scheme: &str) -> Option<&dyn CredentialProvider> {
        self.providers.get(scheme).map(|p| p.as_ref())
    }

    pub fn contains(&self, scheme: &str) -> bool {
        self.providers.contains_key(scheme)
    }

    /// Registered scheme names, sorted.
    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Look up the providers for an endpoint's declared schemes, in order.
    ///
    /// Fails on the first scheme with no registered provider.
    pub fn resolve_for(&self, schemes: &[&str]) -> Result<Vec<&dyn CredentialProvider>> {
        schemes
            .iter()
            .map(|&scheme| {
                self.get(scheme).ok_or_else(|| {
                    tracing::debug!(scheme, "No credential provider registered");
                    Error::config(format!(
                        "no credentials configured for authentication scheme `{}`",
                        scheme
                    ))
                })
            })
            .collect()
    }

    /// Validate, then decorate, every declared scheme.
    ///
    /// All-or-nothing: any failure yields no parameters. When two schemes set
    /// the same parameter, the later-declared one wins.
    pub fn authenticate(&self, schemes: &[&str]) -> Result<AuthParameters> {
        let providers = self.resolve_for(schemes)?;

        for provider in &providers {
            provider.validate()?;
        }

        let mut decorator = ParameterDecorator::new();
        for provider in &providers {
            provider.decorate(&mut decorator)?;
        }

        tracing::debug!(
            schemes = ?schemes,
            parameters = decorator.len(),
            "Request authenticated"
        );
        Ok(decorator.finish())
    }

    /// Authenticate with the first declared scheme that succeeds.
    ///
    /// Returns the last failure when none does.
    pub fn authenticate_any(&self, schemes: &[&str]) -> Result<AuthParameters> {
        let mut last_error = None;

        for &scheme in schemes {
            match self.authenticate(&[scheme]) {
                Ok(params) => {
                    tracing::debug!("Authenticated with scheme: {}", scheme);
                    return Ok(params);
                }
                Err(e) => {
                    tracing::debug!("Scheme {} failed: {}", scheme, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| Error::config("no authentication scheme declared")))
    }
}

/// Builder for AuthRegistry.
#[derive(Debug, Default)]
pub struct AuthRegistryBuilder {
    providers: BTreeMap<String, Arc<dyn CredentialProvider>>,
}

impl AuthRegistryBuilder {
    /// Register a provider under an explicit scheme name (replaces existing).
    pub fn register(
        mut self,
        scheme: impl Into<String>,
        provider: Arc<dyn CredentialProvider>,
    ) -> Self {
        self.providers.insert(scheme.into(), provider);
        self
    }

    /// Register a provider under its own scheme name.
    pub fn with<P: CredentialProvider + 'static>(self, provider: P) -> Self {
        let scheme = provider.scheme();
        self.register(scheme, Arc::new(provider))
    }

    pub fn build(self) -> AuthRegistry {
        AuthRegistry {
            providers: self.providers,
        }
    }
}
