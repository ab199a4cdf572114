//! Static schema registry
//!
//! Maps each schema name to a validator that deserializes a JSON value into
//! the corresponding typed record and runs its declared constraints. Entity
//! schemas with server-generated fields (id, timestamps) validate their
//! creation contract, the shape accepted at the API boundary.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::models::{
    Collection, CreateOrder, CreateProduct, CreateReview, OrderItem, SizeGuide, User,
};

/// Validates a JSON value as a schema record
pub type SchemaValidator = fn(&Value) -> Result<(), String>;

/// One entry of the schema registry
pub struct SchemaEntry {
    pub name: &'static str,
    pub validator: SchemaValidator,
}

fn validate_as<T>(value: &Value) -> Result<(), String>
where
    T: DeserializeOwned + Validate,
{
    let record: T = serde_json::from_value(value.clone()).map_err(|e| e.to_string())?;
    record.validate().map_err(|e| e.to_string())
}

/// All schemas, alphabetical by name
pub const SCHEMA_REGISTRY: &[SchemaEntry] = &[
    SchemaEntry {
        name: "Collection",
        validator: validate_as::<Collection>,
    },
    SchemaEntry {
        name: "Order",
        validator: validate_as::<CreateOrder>,
    },
    SchemaEntry {
        name: "OrderItem",
        validator: validate_as::<OrderItem>,
    },
    SchemaEntry {
        name: "Product",
        validator: validate_as::<CreateProduct>,
    },
    SchemaEntry {
        name: "Review",
        validator: validate_as::<CreateReview>,
    },
    SchemaEntry {
        name: "SizeGuide",
        validator: validate_as::<SizeGuide>,
    },
    SchemaEntry {
        name: "User",
        validator: validate_as::<User>,
    },
];

/// List all registered schema names
pub fn schema_names() -> Vec<&'static str> {
    SCHEMA_REGISTRY.iter().map(|entry| entry.name).collect()
}

/// Validate a JSON value against a named schema
///
/// Returns `None` when no schema with that name is registered.
pub fn validate_schema(name: &str, value: &Value) -> Option<Result<(), String>> {
    SCHEMA_REGISTRY
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| (entry.validator)(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_schema_names_are_alphabetical() {
        let names = schema_names();
        assert_eq!(
            names,
            vec![
                "Collection",
                "Order",
                "OrderItem",
                "Product",
                "Review",
                "SizeGuide",
                "User"
            ]
        );

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_valid_product_passes() {
        let payload = json!({
            "title": "Ripple Tee",
            "slug": "ripple-tee",
            "price": 39.0,
            "category": "Casual",
            "sizes": ["XS", "S", "M", "L"],
            "tags": ["new"]
        });

        let result = validate_schema("Product", &payload).expect("Product schema registered");
        assert!(result.is_ok());
    }

    #[test]
    fn test_review_rating_out_of_range_fails() {
        let payload = json!({
            "product_id": Uuid::now_v7(),
            "user_name": "maya",
            "rating": 6
        });

        let result = validate_schema("Review", &payload).expect("Review schema registered");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_category_fails() {
        let payload = json!({
            "title": "Bad",
            "slug": "bad",
            "price": 1.0,
            "category": "Athleisure"
        });

        let result = validate_schema("Product", &payload).expect("Product schema registered");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_schema_name() {
        assert!(validate_schema("Invoice", &json!({})).is_none());
    }
}
