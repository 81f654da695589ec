//! Registration screen state.

use crate::navigation::Route;
use std::sync::Arc;
use tienda_core::Registration;
use tienda_server_client::TiendaClient;
use tracing::{debug, warn};

/// State holder for the registration screen.
pub struct RegisterScreen {
    client: Arc<TiendaClient>,
    name: String,
    email: String,
    password: String,
    submitting: bool,
    error: Option<String>,
}

impl RegisterScreen {
    pub fn new(client: Arc<TiendaClient>) -> Self {
        Self {
            client,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            submitting: false,
            error: None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
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

    /// Submit the form. A created account leads back to the login screen.
    pub async fn submit(&mut self) -> Option<Route> {
        let registration = Registration {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        };

        if let Err(e) = registration.validate() {
            self.error = Some(e.to_string());
            return None;
        }

        self.submitting = true;
        let result = self.client.register(&registration).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                debug!(email = %self.email, "Account created, returning to login");
                Some(Route::Login)
            }
            Err(e) => {
                warn!(error = %e, "Registration failed");
                self.error = Some(format!("Could not register: {e}"));
                None
            }
        }
    }
}
