//! Add-product screen state.

use crate::navigation::Route;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tienda_core::CreateProduct;
use tienda_server_client::TiendaClient;
use tracing::{debug, warn};

/// State holder for the add-product form.
pub struct AddProductScreen {
    client: Arc<TiendaClient>,
    name: String,
    description: String,
    price: String,
    image: Option<PathBuf>,
    saving: bool,
    error: Option<String>,
}

impl AddProductScreen {
    pub fn new(client: Arc<TiendaClient>) -> Self {
        Self {
            client,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            image: None,
            saving: false,
            error: None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    /// Attach an image picked by the shell. The picker itself lives outside
    /// this crate; the holder only receives a path.
    pub fn attach_image(&mut self, path: impl Into<PathBuf>) {
        self.image = Some(path.into());
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn image(&self) -> Option<&Path> {
        self.image.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Save the draft. A created product leads straight back home; the form
    /// state dies with the screen.
    pub async fn save(&mut self) -> Option<Route> {
        let draft = CreateProduct {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            image: self.image.clone(),
        };

        if let Err(e) = draft.validate() {
            self.error = Some(e.to_string());
            return None;
        }

        self.saving = true;
        let result = self.client.catalog().await.client().create(&draft).await;
        self.saving = false;

        match result {
            Ok(()) => {
                debug!(name = %self.name, "Product saved, returning home");
                Some(Route::Home)
            }
            Err(e) => {
                warn!(error = %e, "Could not save product");
                self.error = Some(format!("Could not save product: {e}"));
                None
            }
        }
    }
}
