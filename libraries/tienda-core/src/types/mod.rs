mod product;
mod user;

pub use product::{CreateProduct, Product, UpdateProduct};
pub use user::{Credentials, Registration};

use crate::error::{Result, TiendaError};

/// Required-field check shared by the form drafts.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TiendaError::invalid_input(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}
