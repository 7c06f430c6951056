//! SDK Core Tests
//!
//! Tests for credential management: models, providers, the scheme registry,
//! parameter decoration, authorization URLs and client configuration.
//!
//! Run: cargo nextest run --test sdk_core_tests

use petstore_auth::{ApiKeyModel, ClientConfig, OAuthModel, OAuthScope, OAuthToken};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn oauth_model(token: Option<OAuthToken>) -> OAuthModel {
    let builder = OAuthModel::builder()
        .client_id("abc")
        .redirect_uri("https://cb")
        .scopes([OAuthScope::ReadPets, OAuthScope::WritePets]);
    match token {
        Some(token) => builder.token(token).build().unwrap(),
        None => builder.build().unwrap(),
    }
}

// =============================================================================
// API Key
// =============================================================================

mod api_key_tests {
    use petstore_auth::{ApiKeyModel, ApiKeyProvider, CredentialProvider, ParameterDecorator};

    #[test]
    fn test_api_key_decoration_and_matching() {
        for key in ["special-key", "k", "with spaces", "ünïcödé"] {
            let provider = ApiKeyProvider::new(ApiKeyModel::builder().api_key(key).build().unwrap());

            let mut decorator = ParameterDecorator::new();
            provider.decorate(&mut decorator).unwrap();
            let params = decorator.finish();

            assert_eq!(params.header("api_key"), Some(key));
            assert!(provider.matches(key));
            assert!(!provider.matches(&format!("{}-other", key)));
        }
    }

    #[test]
    fn test_api_key_model_round_trip() {
        let model = ApiKeyModel::builder().api_key("special-key").build().unwrap();
        assert_eq!(model.to_builder().build().unwrap(), model);
    }
}

// =============================================================================
// OAuth
// =============================================================================

mod oauth_tests {
    use super::oauth_model;
    use chrono::Utc;
    use petstore_auth::{CredentialProvider, Error, OAuthProvider, OAuthToken};

    #[test]
    fn test_token_expiry_boundaries() {
        let now = Utc::now().timestamp();

        let expired = OAuthProvider::new(oauth_model(Some(OAuthToken::new("t").with_expiry(now - 1))));
        assert!(expired.is_token_expired().unwrap());

        let valid = OAuthProvider::new(oauth_model(Some(OAuthToken::new("t").with_expiry(now + 3600))));
        assert!(!valid.is_token_expired().unwrap());

        let no_expiry = OAuthProvider::new(oauth_model(Some(OAuthToken::new("t"))));
        assert!(!no_expiry.is_token_expired().unwrap());
    }

    #[test]
    fn test_validate_missing_token() {
        let provider = OAuthProvider::new(oauth_model(None));
        let err = provider.validate().unwrap_err();
        assert!(matches!(err, Error::Auth { .. }));
        assert!(err.to_string().contains("token is missing"));
    }

    #[test]
    fn test_validate_expired_token() {
        let provider = OAuthProvider::new(oauth_model(Some(OAuthToken::new("t").with_expiry(0))));
        let err = provider.validate().unwrap_err();
        assert!(matches!(err, Error::Auth { .. }));
        assert!(err.to_string().contains("token is expired"));
    }

    #[test]
    fn test_authorization_url_exact_query() {
        let provider = OAuthProvider::new(oauth_model(None));
        let url = provider.build_authorization_url(Some("xyz"), &[]);

        let (base, query) = url.split_once('?').unwrap();
        assert_eq!(base, "https://petstore.swagger.io/oauth/authorize");
        assert_eq!(
            query,
            "response_type=code&client_id=abc&redirect_uri=https%3A%2F%2Fcb\
             &scope=read%3Apets%20write%3Apets&state=xyz"
        );
    }

    #[test]
    fn test_authorization_url_override() {
        let provider = OAuthProvider::new(oauth_model(None));
        let url = provider.build_authorization_url(
            Some("xyz"),
            &[("client_id", serde_json::json!("other")), ("prompt", serde_json::json!("login"))],
        );

        assert!(url.contains("client_id=other"));
        assert!(!url.contains("client_id=abc"));
        assert!(url.ends_with("&state=xyz&prompt=login"));
    }

    #[test]
    fn test_matches_null_token() {
        let with_none = OAuthProvider::new(oauth_model(None));
        let scopes = with_none.scopes().map(|s| s.to_vec());

        assert!(with_none.matches("abc", "https://cb", None, scopes.as_deref()));
        assert!(!with_none.matches("abc", "https://cb", Some(&OAuthToken::new("t")), scopes.as_deref()));
        assert!(!with_none.matches("abc", "https://cb", None, None));
    }

    #[test]
    fn test_matches_scopes_ignore_order() {
        use petstore_auth::OAuthScope;

        let provider = OAuthProvider::new(oauth_model(None));
        let reordered = [OAuthScope::WritePets, OAuthScope::ReadPets];
        assert!(provider.matches("abc", "https://cb", None, Some(&reordered[..])));
        assert!(!provider.matches("abc", "https://cb", None, Some(&[OAuthScope::WritePets][..])));
    }

    #[test]
    fn test_model_round_trip() {
        let model = oauth_model(Some(OAuthToken::new("t").with_expiry(1_700_000_000)));
        assert_eq!(model.to_builder().build().unwrap(), model);
    }
}

// =============================================================================
// Registry and decoration
// =============================================================================

mod registry_tests {
    use super::{init_tracing, oauth_model};
    use petstore_auth::{
        ApiKeyModel, ApiKeyProvider, AuthRegistry, Error, OAuthProvider, OAuthToken,
    };

    fn registry(token: Option<OAuthToken>) -> AuthRegistry {
        AuthRegistry::builder()
            .with(ApiKeyProvider::new(
                ApiKeyModel::builder().api_key("special-key").build().unwrap(),
            ))
            .with(OAuthProvider::new(oauth_model(token)))
            .build()
    }

    #[test]
    fn test_authenticate_both_schemes() {
        init_tracing();
        let params = registry(Some(OAuthToken::new("access")))
            .authenticate(&["api_key", "petstore_auth"])
            .unwrap();

        let headers: Vec<_> = params.headers().collect();
        assert_eq!(
            headers,
            vec![("api_key", "special-key"), ("Authorization", "Bearer access")]
        );
    }

    #[test]
    fn test_authenticate_is_all_or_nothing() {
        init_tracing();
        let err = registry(Some(OAuthToken::new("t").with_expiry(0)))
            .authenticate(&["api_key", "petstore_auth"])
            .unwrap_err();
        assert!(err.is_authorization_error());
    }

    #[test]
    fn test_unregistered_scheme() {
        let err = AuthRegistry::default()
            .authenticate(&["api_key"])
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_authenticate_any_falls_back() {
        init_tracing();
        let params = registry(None)
            .authenticate_any(&["petstore_auth", "api_key"])
            .unwrap();
        assert_eq!(params.header("api_key"), Some("special-key"));
    }
}

// =============================================================================
// Client configuration
// =============================================================================

mod config_tests {
    use super::*;
    use petstore_auth::{Environment, Server};

    #[test]
    fn test_end_to_end_configuration() {
        init_tracing();
        let config = ClientConfig::builder()
            .environment(Environment::Production)
            .api_key_credentials(ApiKeyModel::builder().api_key("special-key").build().unwrap())
            .oauth_credentials(oauth_model(Some(OAuthToken::new("access"))))
            .build();

        assert_eq!(config.base_uri(Server::Server2), "http://petstore.swagger.io/v2");

        let params = config.auth_registry().authenticate(&["petstore_auth"]).unwrap();
        assert_eq!(params.header("Authorization"), Some("Bearer access"));

        let url = config
            .oauth_credentials()
            .unwrap()
            .build_authorization_url(None, &[]);
        assert!(url.starts_with("https://petstore.swagger.io/oauth/authorize?response_type=code"));
    }

    #[test]
    fn test_unconfigured_scheme_fails_on_call() {
        let config = ClientConfig::builder()
            .api_key_credentials(ApiKeyModel::builder().api_key("special-key").build().unwrap())
            .build();

        assert!(config.oauth_credentials().is_none());
        let err = config
            .auth_registry()
            .authenticate(&["petstore_auth"])
            .unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_derived_config_keeps_credentials() {
        let config = ClientConfig::builder()
            .oauth_credentials(oauth_model(None))
            .build();
        let derived = config.to_builder().build();
        assert_eq!(derived.oauth_model(), config.oauth_model());
        assert!(derived.api_key_model().is_none());
    }
}

// =============================================================================
// Error handling
// =============================================================================

mod error_tests {
    use petstore_auth::{Error, ErrorCategory};

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::missing_parameter("Authorization").to_string(),
            "Missing required authentication parameter `Authorization`"
        );
        assert_eq!(Error::config("bad").to_string(), "Configuration error: bad");
        assert_eq!(
            Error::auth("token is missing").to_string(),
            "Authorization failed: token is missing"
        );
    }

    #[test]
    fn test_error_category() {
        assert_eq!(Error::auth("x").category(), ErrorCategory::Authorization);
        assert_eq!(Error::config("x").category(), ErrorCategory::Configuration);
    }
}
