//! Authentication operations for the Tienda server.

use crate::error::{transport_error, ClientError, Result};
use crate::types::LoginResponse;
use reqwest::Client;
use tienda_core::{Credentials, Registration};
use tracing::{debug, info, warn};

/// Authentication client for the Tienda server.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Login with email and password.
    ///
    /// Any 2xx status is a successful login; a session token is captured
    /// when the body carries one.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let url = format!("{}/api/login", self.base_url);
        debug!(url = %url, email = %credentials.email, "Attempting login");

        let response = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            // The login body is undocumented; tolerate anything, including
            // an empty body, and pick a token out when one is present.
            let body = response.text().await.unwrap_or_default();
            let login: LoginResponse = serde_json::from_str(&body).unwrap_or_default();

            info!(
                email = %credentials.email,
                has_token = login.token.is_some(),
                "Login successful"
            );

            Ok(login)
        } else if status.as_u16() == 401 {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Login failed: invalid credentials");
            Err(ClientError::AuthFailed(
                "Invalid email or password".to_string(),
            ))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Register a new account.
    ///
    /// 201 Created is the only success status the server documents.
    pub async fn register(&self, registration: &Registration) -> Result<()> {
        let url = format!("{}/api/register", self.base_url);
        debug!(url = %url, email = %registration.email, "Registering account");

        let response = self
            .http
            .post(&url)
            .json(registration)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.as_u16() == 201 {
            info!(email = %registration.email, "Account registered");
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Registration failed");
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
