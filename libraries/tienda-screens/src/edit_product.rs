//! Edit-product screen state.

use crate::navigation::Route;
use std::sync::Arc;
use tienda_core::UpdateProduct;
use tienda_server_client::TiendaClient;
use tracing::{debug, warn};

/// State holder for the edit-product form.
///
/// Constructed with the product id carried by the route; `load` fills the
/// fields from the server before the form is usable.
pub struct EditProductScreen {
    client: Arc<TiendaClient>,
    product_id: i64,
    name: String,
    description: String,
    price: String,
    loading: bool,
    saved: bool,
    error: Option<String>,
}

impl EditProductScreen {
    pub fn new(client: Arc<TiendaClient>, product_id: i64) -> Self {
        Self {
            client,
            product_id,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            loading: true,
            saved: false,
            error: None,
        }
    }

    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &str {
        &self.price
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

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the success dialog is showing.
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Fetch the product and populate the form fields.
    pub async fn load(&mut self) {
        debug!(id = self.product_id, "Loading product for edit");

        let result = self.client.catalog().await.client().get(self.product_id).await;
        self.loading = false;

        match result {
            Ok(product) => {
                self.name = product.name;
                self.description = product.description;
                self.price = product.price;
            }
            Err(e) => {
                warn!(error = %e, id = self.product_id, "Could not load product");
                self.error = Some(format!("Could not load product: {e}"));
            }
        }
    }

    /// Save the edited fields. A successful update raises the success
    /// dialog; `acknowledge_saved` then leaves for home.
    pub async fn save(&mut self) {
        let update = UpdateProduct {
            id: self.product_id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
        };

        if let Err(e) = update.validate() {
            self.error = Some(e.to_string());
            return;
        }

        match self.client.catalog().await.client().update(&update).await {
            Ok(()) => {
                debug!(id = self.product_id, "Product updated");
                self.saved = true;
            }
            Err(e) => {
                warn!(error = %e, id = self.product_id, "Could not update product");
                self.error = Some(format!("Could not update product: {e}"));
            }
        }
    }

    /// Dismiss the success dialog and leave for home.
    pub fn acknowledge_saved(&mut self) -> Route {
        self.saved = false;
        Route::Home
    }
}
