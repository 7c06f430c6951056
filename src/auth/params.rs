//! Request parameter decoration.
//!
//! Providers contribute header and query parameters to a [`ParameterDecorator`].
//! A finished decorator yields [`AuthParameters`] for the transport layer.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Where an authentication parameter is placed on the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Header,
    Query,
}

/// A single parameter contributed by a credential provider.
#[derive(Debug, Clone)]
pub struct AuthParameter {
    location: ParameterLocation,
    name: String,
    value: Option<SecretString>,
    required: bool,
}

impl AuthParameter {
    /// Optional header; `None` values are dropped.
    pub fn header(name: impl Into<String>, value: Option<String>) -> Self {
        Self::new(ParameterLocation::Header, name, value)
    }

    /// Optional query parameter; `None` values are dropped.
    pub fn query(name: impl Into<String>, value: Option<String>) -> Self {
        Self::new(ParameterLocation::Query, name, value)
    }

    fn new(location: ParameterLocation, name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            location,
            name: name.into(),
            value: value.map(SecretString::from),
            required: false,
        }
    }

    /// Mark as required: an unset value fails decoration.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn location(&self) -> ParameterLocation {
        self.location
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

/// Header names are case-insensitive; query names are not.
fn same_slot(a: ParameterLocation, a_name: &str, b: ParameterLocation, b_name: &str) -> bool {
    a == b
        && match a {
            ParameterLocation::Header => a_name.eq_ignore_ascii_case(b_name),
            ParameterLocation::Query => a_name == b_name,
        }
}

/// Accumulates parameters from every provider resolved for one request.
///
/// A later contribution for the same slot replaces the earlier one in place,
/// so the last declared scheme wins.
#[derive(Debug, Default)]
pub struct ParameterDecorator {
    entries: Vec<(ParameterLocation, String, SecretString)>,
}

impl ParameterDecorator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contribution. Required parameters without a value fail immediately.
    pub fn add(&mut self, parameter: AuthParameter) -> Result<()> {
        let AuthParameter {
            location,
            name,
            value,
            required,
        } = parameter;

        let Some(value) = value else {
            if required {
                return Err(Error::missing_parameter(name));
            }
            return Ok(());
        };

        let existing = self
            .entries
            .iter_mut()
            .find(|(loc, n, _)| same_slot(*loc, n, location, &name));

        match existing {
            Some(entry) => {
                tracing::debug!(parameter = %name, "Replacing previously decorated parameter");
                entry.2 = value;
            }
            None => self.entries.push((location, name, value)),
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn finish(self) -> AuthParameters {
        let mut headers = Vec::new();
        let mut query = Vec::new();
        for (location, name, value) in self.entries {
            match location {
                ParameterLocation::Header => headers.push((name, value)),
                ParameterLocation::Query => query.push((name, value)),
            }
        }
        AuthParameters { headers, query }
    }
}

/// Finalized authentication parameters for one request.
#[derive(Clone, Default)]
pub struct AuthParameters {
    headers: Vec<(String, SecretString)>,
    query: Vec<(String, SecretString)>,
}

impl AuthParameters {
    /// Headers as (name, value) in decoration order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.expose_secret()))
    }

    /// Query parameters as (name, value) in decoration order.
    pub fn query(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query
            .iter()
            .map(|(name, value)| (name.as_str(), value.expose_secret()))
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.expose_secret())
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.expose_secret())
    }

    /// Percent-encoded query string (without leading `?`), or `None` when empty.
    pub fn query_string(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }

        let params: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(v.expose_secret())
                )
            })
            .collect();

        Some(params.join("&"))
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.query.is_empty()
    }
}

impl fmt::Debug for AuthParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = |params: &[(String, SecretString)]| {
            params.iter().map(|(n, _)| n.clone()).collect::<Vec<_>>()
        };
        f.debug_struct("AuthParameters")
            .field("headers", &names(&self.headers))
            .field("query", &names(&self.query))
            .finish()
    }
}
