use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Product category
///
/// Serialized exactly as the variant name; category filters are
/// case-sensitive string equality against these values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum Category {
    Streetwear,
    Casual,
    Essentials,
}

/// Garment size
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum Size {
    XS,
    S,
    M,
    L,
    XL,
}

/// Order status
///
/// Always `created` at creation; no transition logic exists in this service.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Created,
    Paid,
    Shipped,
    Cancelled,
}

/// Curated collection key
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CollectionKey {
    Best,
    New,
    Seasonal,
}

/// Product entity - represents a product stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB, serialized as a string)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product title
    pub title: String,
    /// URL slug (intended-unique, not enforced)
    pub slug: String,
    /// Product description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in the shop currency
    pub price: f64,
    /// Product category
    pub category: Category,
    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,
    /// Available sizes
    #[serde(default)]
    pub sizes: Vec<Size>,
    /// Tags for filtering (e.g. "best", "new", "seasonal")
    #[serde(default)]
    pub tags: Vec<String>,
    /// Average rating, 0 to 5
    pub rating: f64,
    /// Number of ratings behind the average
    pub rating_count: u32,
    /// Whether the product is currently in stock
    pub in_stock: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 200))]
    pub slug: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category: Category,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<Size>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

/// Review entity - create-only, never updated or deleted
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Review {
    /// Unique identifier (stored as _id in MongoDB, serialized as a string)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// The reviewed product
    pub product_id: Uuid,
    /// Display name of the reviewer
    pub user_name: String,
    /// Star rating, 1 to 5
    pub rating: i32,
    /// Free-form comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for submitting a review
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReview {
    pub product_id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub user_name: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    pub comment: Option<String>,
}

/// One line of an order
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItem {
    /// The ordered product
    pub product_id: Uuid,
    /// Product title at order time
    pub title: String,
    /// Chosen size, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// Number of units
    #[validate(range(min = 1))]
    pub quantity: u32,
    /// Unit price at order time
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
    /// unit_price × quantity
    #[validate(range(min = 0.0))]
    pub line_total: f64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Unique identifier (stored as _id in MongoDB, serialized as a string)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Customer email
    pub email: String,
    /// Order lines
    pub items: Vec<OrderItem>,
    /// Sum of line totals, rounded to 2 decimals
    pub total: f64,
    /// Current status (always `created` at creation)
    pub status: OrderStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for persisting a new order (built by the checkout flow)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOrder {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(nested)]
    pub items: Vec<OrderItem>,
    #[validate(range(min = 0.0))]
    pub total: f64,
}

/// One requested line of a checkout
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CheckoutItem {
    pub product_id: Uuid,
    pub size: Option<Size>,
    #[validate(range(min = 1))]
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Checkout request body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CheckoutRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(nested)]
    pub items: Vec<CheckoutItem>,
}

/// Checkout response: the persisted order id and computed total
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub order_id: Uuid,
    pub total: f64,
}

/// Response for a created review
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewCreated {
    #[serde(rename = "_id")]
    pub id: Uuid,
}

/// Outcome of a seed request
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SeedOutcome {
    pub seeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Query filters for listing products
///
/// Filters are equality pairs; a tag filter matches products whose tags
/// array contains the value. Unknown category values simply match nothing.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Filter by tag
    pub tag: Option<String>,
    /// Filter by category (exact, case-sensitive)
    pub category: Option<String>,
}

/// User record (schema-only; no endpoints)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct User {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    pub address: Option<String>,
    #[validate(range(min = 0, max = 120))]
    pub age: Option<i32>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

/// Curated product grouping (schema-only; no endpoints)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct Collection {
    pub key: CollectionKey,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub product_ids: Vec<Uuid>,
}

/// Per-category size guide (schema-only; no endpoints)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SizeGuide {
    pub category: Category,
    /// Free-form measurement rows
    #[serde(default)]
    pub rows: Vec<serde_json::Value>,
}

fn default_rating() -> f64 {
    4.5
}

fn default_in_stock() -> bool {
    true
}

fn default_quantity() -> u32 {
    1
}

fn default_is_active() -> bool {
    true
}

impl Product {
    /// Create a new product from CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            slug: input.slug,
            description: input.description,
            price: input.price,
            category: input.category,
            images: input.images,
            sizes: input.sizes,
            tags: input.tags,
            rating: input.rating,
            rating_count: input.rating_count,
            in_stock: input.in_stock,
            created_at: Utc::now(),
        }
    }
}

impl Review {
    /// Create a new review from CreateReview DTO
    pub fn new(input: CreateReview) -> Self {
        Self {
            id: Uuid::now_v7(),
            product_id: input.product_id,
            user_name: input.user_name,
            rating: input.rating,
            comment: input.comment,
            created_at: Utc::now(),
        }
    }
}

impl Order {
    /// Create a new order from CreateOrder DTO, always in `created` status
    pub fn new(input: CreateOrder) -> Self {
        Self {
            id: Uuid::now_v7(),
            email: input.email,
            items: input.items,
            total: input.total,
            status: OrderStatus::Created,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_exact_case() {
        assert_eq!(
            serde_json::to_string(&Category::Streetwear).unwrap(),
            "\"Streetwear\""
        );
        assert_eq!(
            serde_json::to_string(&Category::Casual).unwrap(),
            "\"Casual\""
        );
        // Lowercase must not parse
        assert!(serde_json::from_str::<Category>("\"casual\"").is_err());
    }

    #[test]
    fn test_order_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Created).unwrap(),
            "\"created\""
        );
        assert_eq!(OrderStatus::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn test_create_product_defaults() {
        let input: CreateProduct = serde_json::from_value(serde_json::json!({
            "title": "Bare Tee",
            "slug": "bare-tee",
            "price": 10.0,
            "category": "Casual"
        }))
        .unwrap();

        assert_eq!(input.rating, 4.5);
        assert_eq!(input.rating_count, 0);
        assert!(input.in_stock);
        assert!(input.images.is_empty());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_product_rejects_negative_price() {
        let input: CreateProduct = serde_json::from_value(serde_json::json!({
            "title": "Bad",
            "slug": "bad",
            "price": -1.0,
            "category": "Casual"
        }))
        .unwrap();

        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_review_rating_bounds() {
        let base = serde_json::json!({
            "product_id": Uuid::now_v7(),
            "user_name": "maya",
            "rating": 5
        });
        let review: CreateReview = serde_json::from_value(base.clone()).unwrap();
        assert!(review.validate().is_ok());

        let mut bad = base;
        bad["rating"] = serde_json::json!(6);
        let review: CreateReview = serde_json::from_value(bad).unwrap();
        assert!(review.validate().is_err());
    }

    #[test]
    fn test_checkout_item_default_quantity() {
        let item: CheckoutItem = serde_json::from_value(serde_json::json!({
            "product_id": Uuid::now_v7()
        }))
        .unwrap();

        assert_eq!(item.quantity, 1);
        assert!(item.size.is_none());
    }

    #[test]
    fn test_product_id_round_trips_as_string() {
        let product = Product::new(CreateProduct {
            title: "Tee".to_string(),
            slug: "tee".to_string(),
            description: None,
            price: 10.0,
            category: Category::Casual,
            images: vec![],
            sizes: vec![Size::M],
            tags: vec![],
            rating: 4.5,
            rating_count: 0,
            in_stock: true,
        });

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["_id"], serde_json::json!(product.id.to_string()));

        let parsed: Product = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.id, product.id);
    }
}
