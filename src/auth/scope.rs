//! OAuth scopes for the `petstore_auth` scheme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Permission unit requested during authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OAuthScope {
    /// Read your pets.
    #[serde(rename = "read:pets")]
    ReadPets,
    /// Modify pets in your account.
    #[serde(rename = "write:pets")]
    WritePets,
}

impl OAuthScope {
    pub const ALL: [OAuthScope; 2] = [OAuthScope::ReadPets, OAuthScope::WritePets];

    /// Wire form sent in the `scope` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthScope::ReadPets => "read:pets",
            OAuthScope::WritePets => "write:pets",
        }
    }

    /// Space-separated wire forms, as the `scope` parameter expects.
    pub fn join(scopes: &[OAuthScope]) -> String {
        scopes
            .iter()
            .map(OAuthScope::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for OAuthScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OAuthScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| Error::config(format!("unknown OAuth scope: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form() {
        assert_eq!(OAuthScope::ReadPets.as_str(), "read:pets");
        assert_eq!(OAuthScope::WritePets.to_string(), "write:pets");
    }

    #[test]
    fn test_join() {
        assert_eq!(OAuthScope::join(&OAuthScope::ALL), "read:pets write:pets");
        assert_eq!(OAuthScope::join(&[]), "");
    }

    #[test]
    fn test_parse() {
        assert_eq!("read:pets".parse::<OAuthScope>().unwrap(), OAuthScope::ReadPets);
        assert!("ReadPets".parse::<OAuthScope>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_form() {
        let json = serde_json::to_string(&OAuthScope::WritePets).unwrap();
        assert_eq!(json, "\"write:pets\"");

        let scopes: Vec<OAuthScope> = serde_json::from_str(r#"["read:pets","write:pets"]"#).unwrap();
        assert_eq!(scopes, OAuthScope::ALL);
    }
}
