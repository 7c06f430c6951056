//! Client configuration and the server URL table.
//!
//! ```rust
//! use petstore_auth::config::{ClientConfig, Environment, Server};
//!
//! let config = ClientConfig::builder()
//!     .environment(Environment::Production)
//!     .build();
//! assert_eq!(config.base_uri(Server::Server1), "https://petstore.swagger.io/v2");
//! ```

mod client;
mod environment;

pub use client::{ClientConfig, ClientConfigBuilder};
pub use environment::{Environment, Server};
