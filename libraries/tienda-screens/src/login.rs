//! Login screen state.

use crate::navigation::Route;
use std::sync::Arc;
use tienda_core::Credentials;
use tienda_server_client::TiendaClient;
use tracing::{debug, warn};

/// State holder for the login screen.
pub struct LoginScreen {
    client: Arc<TiendaClient>,
    email: String,
    password: String,
    submitting: bool,
    error: Option<String>,
}

impl LoginScreen {
    pub fn new(client: Arc<TiendaClient>) -> Self {
        Self {
            client,
            email: String::new(),
            password: String::new(),
            submitting: false,
            error: None,
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Submit the form. Returns the next route on success; on failure the
    /// error message is set and the screen stays put.
    pub async fn submit(&mut self) -> Option<Route> {
        let credentials = Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        };

        if let Err(e) = credentials.validate() {
            self.error = Some(e.to_string());
            return None;
        }

        self.submitting = true;
        let result = self.client.login(&credentials).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                debug!(email = %self.email, "Login succeeded, leaving for home");
                Some(Route::Home)
            }
            Err(e) => {
                warn!(error = %e, "Login failed");
                self.error = Some(format!("Could not log in: {e}"));
                None
            }
        }
    }

    /// The register link under the form.
    pub fn register_route(&self) -> Route {
        Route::Register
    }
}
