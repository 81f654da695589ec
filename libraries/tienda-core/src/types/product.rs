/// Product domain type
use crate::error::Result;
use crate::types::require_non_empty;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Catalog product as exchanged with the server.
///
/// The server speaks Spanish field names on the wire; fields carry serde
/// renames so the Rust side stays English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier, unique within a fetched batch
    pub id: i64,

    /// Product name
    #[serde(rename = "nombre")]
    pub name: String,

    /// Free-form description
    #[serde(rename = "descripcion")]
    pub description: String,

    /// Decimal price, kept textual exactly as the server sends it
    #[serde(rename = "precio")]
    pub price: String,

    /// Units in stock
    pub stock: u32,

    /// URL of the product image
    #[serde(rename = "imagenUrl")]
    pub image_url: String,
}

/// Form draft for creating a product.
///
/// Held by the add-product screen for the duration of the form; the image is
/// an optional path to a local file picked by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: Option<PathBuf>,
}

impl CreateProduct {
    /// Check that every required field is filled in.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("name", &self.name)?;
        require_non_empty("description", &self.description)?;
        require_non_empty("price", &self.price)?;
        Ok(())
    }
}

/// Fields sent when updating an existing product.
///
/// The server takes the target id in the body, not the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateProduct {
    pub id: i64,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "precio")]
    pub price: String,
}

impl UpdateProduct {
    /// Check that every required field is filled in.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("name", &self.name)?;
        require_non_empty("description", &self.description)?;
        require_non_empty("price", &self.price)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_wire_names() {
        let json = r#"{"id":1,"nombre":"A","descripcion":"d","precio":"10","stock":2,"imagenUrl":"u"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(
            product,
            Product {
                id: 1,
                name: "A".into(),
                description: "d".into(),
                price: "10".into(),
                stock: 2,
                image_url: "u".into(),
            }
        );
    }

    #[test]
    fn update_serializes_wire_names() {
        let update = UpdateProduct {
            id: 7,
            name: "Mate".into(),
            description: "Calabaza".into(),
            price: "8.00".into(),
        };

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["nombre"], "Mate");
        assert_eq!(value["descripcion"], "Calabaza");
        assert_eq!(value["precio"], "8.00");
    }

    #[test]
    fn create_validation_requires_all_fields() {
        let mut draft = CreateProduct {
            name: "Yerba".into(),
            description: "1kg".into(),
            price: "5".into(),
            image: None,
        };
        assert!(draft.validate().is_ok());

        draft.price.clear();
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let draft = CreateProduct {
            name: "   ".into(),
            description: "d".into(),
            price: "1".into(),
            image: None,
        };
        assert!(draft.validate().is_err());
    }
}
