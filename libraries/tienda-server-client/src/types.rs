//! Types for Tienda server API requests and responses.

use serde::Deserialize;

/// Configuration for connecting to a Tienda catalog server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the server (e.g., "http://127.0.0.1:3000")
    pub url: String,
    /// Current session token, when the server issued one at login
    pub session_token: Option<String>,
}

impl ServerConfig {
    /// Create a new server config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            session_token: None,
        }
    }

    /// Create a config with an existing session token.
    pub fn with_session_token(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            session_token: Some(token.into()),
        }
    }
}

/// Response from a successful login.
///
/// The server only guarantees a 2xx status; when the body carries a session
/// token it is captured here, otherwise the response is empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}
