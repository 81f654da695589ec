//! Catalog operations for the Tienda server.

use crate::error::{transport_error, ClientError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;
use tienda_core::{CreateProduct, Product, UpdateProduct};
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, error, info};

/// User id sent with every product upload. The server keys uploads to an
/// account; the client has exactly one.
const DEFAULT_USER_ID: &str = "1";

/// Catalog client for the Tienda server.
pub struct CatalogClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    session_token: Option<&'a str>,
}

impl<'a> CatalogClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, session_token: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            session_token,
        }
    }

    /// Attach the session token when one is held.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetch the full product list.
    pub async fn list(&self) -> Result<Vec<Product>> {
        let url = format!("{}/api/products", self.base_url);
        debug!(url = %url, "Fetching product list");

        let response = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            let body = response.text().await.map_err(ClientError::Request)?;
            let products = parse_products(&body);
            debug!(count = products.len(), "Fetched product list");
            Ok(products)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Search products by name.
    ///
    /// An empty query is the unfiltered list. The server reuses the
    /// `/api/products/{value}` path shape for both id lookup and name
    /// search; the query is percent-encoded into the segment.
    pub async fn search(&self, name: &str) -> Result<Vec<Product>> {
        if name.is_empty() {
            return self.list().await;
        }

        let url = format!(
            "{}/api/products/{}",
            self.base_url,
            urlencoding::encode(name)
        );
        debug!(url = %url, query = %name, "Searching products");

        let response = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            let body = response.text().await.map_err(ClientError::Request)?;
            let products = parse_products(&body);
            debug!(results = products.len(), "Search complete");
            Ok(products)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Get a single product by id.
    pub async fn get(&self, id: i64) -> Result<Product> {
        let url = format!("{}/api/products/{}", self.base_url, id);
        debug!(url = %url, id = id, "Fetching product");

        let response = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            let product: Product = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse product response: {}", e))
            })?;

            Ok(product)
        } else if status.as_u16() == 404 {
            Err(ClientError::ServerError {
                status: 404,
                message: format!("Product not found: {}", id),
            })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Create a product, attaching the draft's image file when it has one.
    ///
    /// The server takes a multipart form: `nombre`, `id_usuario`,
    /// `descripcion`, `precio`, and an optional `imagen` file part.
    pub async fn create(&self, draft: &CreateProduct) -> Result<()> {
        let mut form = Form::new()
            .text("nombre", draft.name.clone())
            .text("id_usuario", DEFAULT_USER_ID)
            .text("descripcion", draft.description.clone())
            .text("precio", draft.price.clone());

        if let Some(path) = &draft.image {
            if !path.exists() {
                return Err(ClientError::FileNotFound(path.display().to_string()));
            }

            let mut file = File::open(path).await?;
            let mut contents = Vec::new();
            file.read_to_end(&mut contents).await?;

            let image_part = Part::bytes(contents)
                .file_name("image.jpg")
                .mime_str(mime_type_for_image(path))?;
            form = form.part("imagen", image_part);
        }

        let url = format!("{}/api/products", self.base_url);
        debug!(url = %url, name = %draft.name, has_image = draft.image.is_some(), "Creating product");

        let response = self
            .authorize(self.http.post(&url).multipart(form))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            info!(name = %draft.name, "Product created");
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Update an existing product. The target id travels in the body, not
    /// the path.
    pub async fn update(&self, update: &UpdateProduct) -> Result<()> {
        let url = format!("{}/api/products", self.base_url);
        debug!(url = %url, id = update.id, "Updating product");

        let response = self
            .authorize(self.http.put(&url).json(update))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            info!(id = update.id, "Product updated");
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Delete a product by id.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let url = format!("{}/api/products/{}", self.base_url, id);
        debug!(url = %url, id = id, "Deleting product");

        let response = self
            .authorize(self.http.delete(&url))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            debug!(id = id, "Product deleted");
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

/// Parse a product listing body leniently.
///
/// The server usually sends a JSON array but is known to send a bare object
/// for single results; a body that is neither yields an empty list. Parsing
/// never fails the operation.
fn parse_products(body: &str) -> Vec<Product> {
    match serde_json::from_str::<Vec<Product>>(body) {
        Ok(products) => products,
        Err(array_err) => match serde_json::from_str::<Product>(body) {
            Ok(product) => vec![product],
            Err(object_err) => {
                error!(
                    %array_err,
                    %object_err,
                    "Product body is neither an array nor a single object"
                );
                Vec::new()
            }
        },
    }
}

/// Get MIME type for an image file.
fn mime_type_for_image(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
