//! Deployment environments and their server URLs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// API deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
}

/// Server alias within an environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Server {
    /// Default API server (HTTPS).
    #[default]
    Server1,
    /// Plain HTTP API server.
    Server2,
    /// OAuth 2 authorization server.
    AuthServer,
}

impl Environment {
    /// Base URL for a server alias in this environment.
    pub fn base_uri(&self, server: Server) -> &'static str {
        match (self, server) {
            (Environment::Production, Server::Server1) => "https://petstore.swagger.io/v2",
            (Environment::Production, Server::Server2) => "http://petstore.swagger.io/v2",
            (Environment::Production, Server::AuthServer) => "https://petstore.swagger.io/oauth",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
