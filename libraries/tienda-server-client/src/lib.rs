//! Tienda Server Client
//!
//! HTTP client library for the Tienda catalog server API.
//!
//! # Features
//!
//! - **Authentication**: login with email/password, account registration
//! - **Catalog**: fetch, search by name, create (multipart with optional
//!   image), update, delete
//!
//! One `TiendaClient` is constructed per server and injected into every
//! screen; it owns the single HTTP client and the optional session token.
//!
//! # Example
//!
//! ```ignore
//! use tienda_core::Credentials;
//! use tienda_server_client::{ServerConfig, TiendaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::new("http://127.0.0.1:3000");
//!     let client = TiendaClient::new(config)?;
//!
//!     client
//!         .login(&Credentials {
//!             email: "ana@example.com".into(),
//!             password: "secreto".into(),
//!         })
//!         .await?;
//!
//!     let products = client.catalog().await.client().list().await?;
//!     println!("Found {} products", products.len());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod catalog;
mod client;
mod error;
mod types;

// Re-export main types
pub use client::{CatalogClientHandle, TiendaClient};
pub use error::{ClientError, Result};
pub use types::{LoginResponse, ServerConfig};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use catalog::CatalogClient;
