//! Product records as returned by the store backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product from the store catalog.
///
/// Mirrors the shape of `GET /api/products` items. Only the fields needed
/// for categorization are modelled; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque product identifier.
    pub id: String,
    /// Display name, free text.
    pub name: String,
    /// Free-form attributes attached to the product.
    #[serde(default)]
    pub custom_attributes: Option<Map<String, Value>>,
}

impl Product {
    /// Create a product with an optional brand attribute.
    pub fn new(id: impl Into<String>, name: impl Into<String>, brand: Option<&str>) -> Self {
        let custom_attributes = brand.map(|brand| {
            let mut attrs = Map::new();
            attrs.insert("brand".to_string(), Value::String(brand.to_string()));
            attrs
        });

        Self {
            id: id.into(),
            name: name.into(),
            custom_attributes,
        }
    }

    /// The `brand` custom attribute, if present and a string.
    pub fn brand(&self) -> Option<&str> {
        self.custom_attributes
            .as_ref()?
            .get("brand")
            .and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_from_attributes() {
        let product = Product::new("1", "Kaiak Oceano", Some("Kaiak"));
        assert_eq!(product.brand(), Some("Kaiak"));
    }

    #[test]
    fn test_brand_absent_without_attributes() {
        let product = Product::new("2", "iPhone 15 Pro", None);
        assert!(product.custom_attributes.is_none());
        assert_eq!(product.brand(), None);
    }

    #[test]
    fn test_deserialize_null_attributes() {
        let json = r#"{"id": "688da20eeeee72acc43a2f48", "name": "iPhone 15 Pro", "customAttributes": null}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, "688da20eeeee72acc43a2f48");
        assert_eq!(product.brand(), None);
    }

    #[test]
    fn test_deserialize_missing_attributes() {
        let json = r#"{"id": "1", "name": "Men's T-Shirt"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.brand(), None);
    }

    #[test]
    fn test_non_string_brand_is_ignored() {
        let json = r#"{"id": "1", "name": "Crema", "customAttributes": {"brand": 42}}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.brand(), None);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"{
            "id": "1",
            "name": "Corrector",
            "price": 12.5,
            "isActive": true,
            "customAttributes": {"brand": "Una", "size": "10 ml"}
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.brand(), Some("Una"));
    }
}
