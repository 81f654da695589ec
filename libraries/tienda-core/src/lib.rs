//! Tienda Core
//!
//! Platform-agnostic domain types, form drafts, and error handling for the
//! Tienda catalog client.
//!
//! The core crate defines:
//! - **Domain Types**: `Product` and the form drafts (`CreateProduct`,
//!   `UpdateProduct`, `Credentials`, `Registration`)
//! - **Validation**: local required-field checks shared by every screen
//! - **Error Handling**: unified `TiendaError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tienda_core::types::CreateProduct;
//!
//! let draft = CreateProduct {
//!     name: "Café de altura".into(),
//!     description: "Tueste medio, 500g".into(),
//!     price: "12.50".into(),
//!     image: None,
//! };
//! assert!(draft.validate().is_ok());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TiendaError};
pub use types::{CreateProduct, Credentials, Product, Registration, UpdateProduct};
