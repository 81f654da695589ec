//! Tienda Screens
//!
//! Per-screen state holders for the Tienda catalog client, plus the route
//! mapping between them.
//!
//! Each screen owns its editable fields, its loading flag, its data, and its
//! dialog state; a rendering shell reads the holder and forwards user input
//! to its methods. Every holder takes the one shared [`TiendaClient`] by
//! `Arc`, and all of them surface failures the same way: `error()` holds the
//! message until `dismiss_error()` is called.
//!
//! Holders are single-writer by construction (`&mut self`); nothing here
//! locks, cancels, or sequences requests. Two racing searches resolve in
//! whatever order the server answers.
//!
//! [`TiendaClient`]: tienda_server_client::TiendaClient

#![forbid(unsafe_code)]

mod add_product;
mod edit_product;
mod home;
mod login;
pub mod navigation;
mod register;

pub use add_product::AddProductScreen;
pub use edit_product::EditProductScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use navigation::{Navigator, Route};
pub use register::RegisterScreen;
