//! OAuth 2 authentication provider for the `petstore_auth` scheme.

use serde_json::Value;

use crate::auth::{AuthParameter, CredentialProvider, OAuthModel, OAuthScope, OAuthToken};
use crate::config::{Environment, Server};
use crate::{Error, Result};

/// Scheme name for OAuth 2 authentication.
pub const OAUTH_SCHEME: &str = "petstore_auth";

const AUTHORIZATION_PATH: &str = "/authorize";

/// OAuth 2 authentication provider.
///
/// Sends the held access token as a bearer token and builds the URL that
/// starts the authorization-code flow.
#[derive(Debug, Clone)]
pub struct OAuthProvider {
    model: OAuthModel,
    environment: Environment,
}

impl OAuthProvider {
    /// Create against the default environment.
    pub fn new(model: OAuthModel) -> Self {
        Self::with_environment(model, Environment::default())
    }

    /// Create against a specific environment's authorization server.
    pub fn with_environment(model: OAuthModel, environment: Environment) -> Self {
        Self { model, environment }
    }

    /// Access the credential model.
    pub fn model(&self) -> &OAuthModel {
        &self.model
    }

    /// Environment whose authorization server is used.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn client_id(&self) -> &str {
        self.model.client_id()
    }

    pub fn redirect_uri(&self) -> &str {
        self.model.redirect_uri()
    }

    pub fn token(&self) -> Option<&OAuthToken> {
        self.model.token()
    }

    pub fn scopes(&self) -> Option<&[OAuthScope]> {
        self.model.scopes()
    }

    /// Check if credentials match. `None` matches only `None`; scopes compare as sets.
    pub fn matches(
        &self,
        client_id: &str,
        redirect_uri: &str,
        token: Option<&OAuthToken>,
        scopes: Option<&[OAuthScope]>,
    ) -> bool {
        self.model.client_id() == client_id
            && self.model.redirect_uri() == redirect_uri
            && self.model.token() == token
            && same_scopes(self.model.scopes(), scopes)
    }

    /// Check if the held token is expired.
    ///
    /// Fails when no token is held. Reads the wall clock on every call.
    pub fn is_token_expired(&self) -> Result<bool> {
        self.model
            .token()
            .map(OAuthToken::is_expired)
            .ok_or_else(|| Error::InvalidState("OAuth token is missing".into()))
    }

    /// Build the authorization-code flow URL.
    ///
    /// Query order is `response_type`, `client_id`, `redirect_uri`, `scope`,
    /// `state`, then `additional` in the order given. An additional parameter
    /// with an existing name replaces that value, last write wins. A `null`
    /// value removes the named parameter, built-in ones included.
    pub fn build_authorization_url(
        &self,
        state: Option<&str>,
        additional: &[(&str, Value)],
    ) -> String {
        let mut params: Vec<(String, String)> = vec![
            ("response_type".into(), "code".into()),
            ("client_id".into(), self.model.client_id().to_string()),
            ("redirect_uri".into(), self.model.redirect_uri().to_string()),
        ];

        if let Some(scopes) = self.model.scopes()
            && !scopes.is_empty()
        {
            params.push(("scope".into(), OAuthScope::join(scopes)));
        }

        if let Some(state) = state {
            params.push(("state".into(), state.to_string()));
        }

        for (name, value) in additional {
            let position = params.iter().position(|(n, _)| n.as_str() == *name);
            match (query_value(value), position) {
                (Some(value), Some(i)) => params[i].1 = value,
                (Some(value), None) => params.push((name.to_string(), value)),
                (None, Some(i)) => {
                    params.remove(i);
                }
                (None, None) => {}
            }
        }

        let query: Vec<String> = params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();

        format!(
            "{}{}?{}",
            self.environment.base_uri(Server::AuthServer),
            AUTHORIZATION_PATH,
            query.join("&")
        )
    }
}

/// Set comparison of optional scope lists. Order and duplicates do not matter.
fn same_scopes(a: Option<&[OAuthScope]>, b: Option<&[OAuthScope]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.iter().all(|s| b.contains(s)) && b.iter().all(|s| a.contains(s)),
        _ => false,
    }
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

impl CredentialProvider for OAuthProvider {
    fn scheme(&self) -> &'static str {
        OAUTH_SCHEME
    }

    fn parameters(&self) -> Vec<AuthParameter> {
        let value = self.model.token().map(OAuthToken::bearer);
        vec![AuthParameter::header("Authorization", value).required()]
    }

    fn validate(&self) -> Result<()> {
        let Some(token) = self.model.token() else {
            tracing::warn!(scheme = OAUTH_SCHEME, "Rejecting call: no OAuth token held");
            return Err(Error::auth(
                "Client is not authorized: OAuth token is missing. A token is needed to make API calls.",
            ));
        };

        if token.is_expired() {
            tracing::warn!(
                scheme = OAUTH_SCHEME,
                expiry = ?token.expiry(),
                "Rejecting call: OAuth token expired"
            );
            return Err(Error::auth(
                "OAuth token is expired. A valid token is needed to make API calls.",
            ));
        }

        Ok(())
    }
}
