//! Main Tienda server client.

use crate::auth::AuthClient;
use crate::catalog::CatalogClient;
use crate::error::{ClientError, Result};
use crate::types::{LoginResponse, ServerConfig};
use reqwest::Client;
use std::sync::Arc;
use tienda_core::{Credentials, Registration};
use tokio::sync::RwLock;
use tracing::info;

/// Main client for interacting with a Tienda catalog server.
///
/// One client is constructed per server and shared by every screen; it owns
/// the single underlying HTTP client and the session state.
///
/// # Example
///
/// ```ignore
/// use tienda_server_client::{ServerConfig, TiendaClient};
///
/// // Create client
/// let config = ServerConfig::new("http://127.0.0.1:3000");
/// let client = TiendaClient::new(config)?;
///
/// // Login
/// client.login(&credentials).await?;
///
/// // Fetch the catalog
/// let products = client.catalog().await.client().list().await?;
/// println!("Found {} products", products.len());
/// ```
pub struct TiendaClient {
    http: Client,
    config: Arc<RwLock<ServerConfig>>,
}

impl TiendaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized_config = ServerConfig {
            url,
            session_token: config.session_token,
        };

        // One HTTP client for every operation. No request timeout is set:
        // a stalled request stays pending until the transport gives up.
        let http = Client::builder()
            .user_agent(format!("Tienda/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized_config)),
        })
    }

    /// Get the server URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Check if the client holds a session token.
    pub async fn has_session(&self) -> bool {
        self.config.read().await.session_token.is_some()
    }

    /// Get the current session token.
    pub async fn session_token(&self) -> Option<String> {
        self.config.read().await.session_token.clone()
    }

    /// Login with email and password.
    ///
    /// When the server's response carries a session token it is stored and
    /// attached to subsequent catalog requests.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let config = self.config.read().await;
        let url = config.url.clone();
        drop(config);

        let auth_client = AuthClient::new(&self.http, &url);
        let response = auth_client.login(credentials).await?;

        if let Some(token) = &response.token {
            let mut config = self.config.write().await;
            config.session_token = Some(token.clone());
        }

        Ok(response)
    }

    /// Register a new account.
    pub async fn register(&self, registration: &Registration) -> Result<()> {
        let config = self.config.read().await;
        let url = config.url.clone();
        drop(config);

        let auth_client = AuthClient::new(&self.http, &url);
        auth_client.register(registration).await
    }

    /// Clear the stored session token (logout).
    pub async fn logout(&self) {
        let mut config = self.config.write().await;
        config.session_token = None;
        info!("Logged out");
    }

    /// Get a catalog client for product operations.
    ///
    /// The catalog surface is not gated on a session; the token is attached
    /// when one is held.
    pub async fn catalog(&self) -> CatalogClientHandle {
        let config = self.config.read().await;

        CatalogClientHandle {
            http: self.http.clone(),
            url: config.url.clone(),
            session_token: config.session_token.clone(),
        }
    }
}

/// Handle for catalog operations.
///
/// Returned by `TiendaClient::catalog()`; holds owned copies of the URL and
/// session token so the borrowing `CatalogClient` has something to point at.
pub struct CatalogClientHandle {
    http: Client,
    url: String,
    session_token: Option<String>,
}

impl CatalogClientHandle {
    /// Get the catalog client.
    pub fn client(&self) -> CatalogClient<'_> {
        CatalogClient::new(&self.http, &self.url, self.session_token.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_validation() {
        // Valid URLs
        assert!(TiendaClient::new(ServerConfig::new("https://example.com")).is_ok());
        assert!(TiendaClient::new(ServerConfig::new("http://localhost:3000")).is_ok());

        // Invalid URLs
        assert!(TiendaClient::new(ServerConfig::new("")).is_err());
        assert!(TiendaClient::new(ServerConfig::new("not-a-url")).is_err());
        assert!(TiendaClient::new(ServerConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn url_normalization() {
        let client =
            TiendaClient::new(ServerConfig::new("http://example.com/")).expect("valid url");

        // URL should have trailing slash removed
        let url = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(client.url());
        assert_eq!(url, "http://example.com");
    }
}
