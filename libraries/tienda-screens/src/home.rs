//! Home screen state: the product list with search and delete.

use crate::navigation::Route;
use std::sync::Arc;
use tienda_core::Product;
use tienda_server_client::TiendaClient;
use tracing::{debug, warn};

/// State holder for the home screen.
///
/// Owns the displayed product list. The list is rebuilt wholesale on fetch
/// and search, and filtered locally on delete; there is no partial-update
/// merge.
pub struct HomeScreen {
    client: Arc<TiendaClient>,
    products: Vec<Product>,
    search_query: String,
    loading: bool,
    error: Option<String>,
    pending_delete: Option<i64>,
}

impl HomeScreen {
    pub fn new(client: Arc<TiendaClient>) -> Self {
        Self {
            client,
            products: Vec::new(),
            search_query: String::new(),
            loading: false,
            error: None,
            pending_delete: None,
        }
    }

    /// Fetch the full list on screen entry.
    pub async fn enter(&mut self) {
        self.refresh().await;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Apply a search-field edit.
    ///
    /// Every edit fires a request immediately: an empty query fetches the
    /// unfiltered list, anything else searches by name, and the displayed
    /// list is replaced with whatever comes back.
    pub async fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();

        if self.search_query.is_empty() {
            self.refresh().await;
            return;
        }

        self.loading = true;
        let result = self
            .client
            .catalog()
            .await
            .client()
            .search(&self.search_query)
            .await;
        self.loading = false;

        match result {
            Ok(products) => {
                debug!(query = %self.search_query, results = products.len(), "Search applied");
                self.products = products;
            }
            Err(e) => {
                warn!(error = %e, query = %self.search_query, "Search failed");
                self.products.clear();
                self.error = Some(format!("Could not search products: {e}"));
            }
        }
    }

    /// Open the delete-confirmation dialog for a product.
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    /// The product id awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// Dismiss the confirmation dialog without deleting.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete.
    ///
    /// On success the product is removed from the local list without a
    /// re-fetch, leaving the rest in order; on failure the list stays
    /// untouched and the error dialog is set.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };

        match self.client.catalog().await.client().delete(id).await {
            Ok(()) => {
                debug!(id = id, "Product deleted, pruning local list");
                self.products.retain(|p| p.id != id);
            }
            Err(e) => {
                warn!(error = %e, id = id, "Delete failed");
                self.error = Some(format!("Could not delete product: {e}"));
            }
        }
    }

    /// Route to the edit screen for a product.
    pub fn edit_route(&self, product_id: i64) -> Route {
        Route::EditProduct { product_id }
    }

    /// Route to the add-product screen.
    pub fn add_route(&self) -> Route {
        Route::AddProduct
    }

    async fn refresh(&mut self) {
        self.loading = true;
        let result = self.client.catalog().await.client().list().await;
        self.loading = false;

        match result {
            Ok(products) => {
                debug!(count = products.len(), "Product list loaded");
                self.products = products;
            }
            Err(e) => {
                warn!(error = %e, "Could not load product list");
                self.products.clear();
                self.error = Some(format!("Could not load products: {e}"));
            }
        }
    }
}
