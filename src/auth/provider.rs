//! Credential provider trait.

use std::fmt::Debug;

use super::{AuthParameter, ParameterDecorator};
use crate::Result;

/// One authentication scheme bound to one immutable credential model.
///
/// Implementations are pure reads over immutable state and may be shared
/// across concurrent requests.
pub trait CredentialProvider: Send + Sync + Debug {
    /// Scheme name the provider is registered under.
    fn scheme(&self) -> &'static str;

    /// Parameters this scheme attaches to every authenticated request.
    fn parameters(&self) -> Vec<AuthParameter>;

    /// Check that the held credential is usable. Runs before every call.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Merge this scheme's parameters into the request being decorated.
    fn decorate(&self, decorator: &mut ParameterDecorator) -> Result<()> {
        for parameter in self.parameters() {
            decorator.add(parameter)?;
        }
        Ok(())
    }
}
