use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{
    CreateOrder, CreateProduct, CreateReview, Order, Product, ProductFilter, Review,
};

/// Repository trait for catalog persistence
///
/// This trait defines the data access interface for products, reviews, and
/// orders. It is the injected store dependency; implementations can use
/// different backends (MongoDB, in-memory).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Create a new product
    async fn create_product(&self, input: CreateProduct) -> CatalogResult<Product>;

    /// Get a product by ID
    async fn get_product(&self, id: Uuid) -> CatalogResult<Option<Product>>;

    /// List products matching the equality filters
    async fn list_products(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>>;

    /// Count all products
    async fn count_products(&self) -> CatalogResult<u64>;

    /// Create a new review
    async fn create_review(&self, input: CreateReview) -> CatalogResult<Review>;

    /// List reviews for a product
    async fn list_reviews_for_product(&self, product_id: Uuid) -> CatalogResult<Vec<Review>>;

    /// Create a new order
    async fn create_order(&self, input: CreateOrder) -> CatalogResult<Order>;
}

#[derive(Default)]
struct Store {
    products: Vec<Product>,
    reviews: Vec<Review>,
    orders: Vec<Order>,
}

/// In-memory implementation of the CatalogRepository
///
/// Insertion-ordered, used by handler tests and available for local
/// development without a MongoDB instance.
#[derive(Clone, Default)]
pub struct InMemoryCatalogRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products
    pub async fn product_count(&self) -> usize {
        self.store.read().await.products.len()
    }

    /// Number of stored reviews
    pub async fn review_count(&self) -> usize {
        self.store.read().await.reviews.len()
    }

    /// Number of stored orders
    pub async fn order_count(&self) -> usize {
        self.store.read().await.orders.len()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn create_product(&self, input: CreateProduct) -> CatalogResult<Product> {
        let product = Product::new(input);
        self.store.write().await.products.push(product.clone());
        Ok(product)
    }

    async fn get_product(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list_products(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>> {
        let store = self.store.read().await;
        let products = store
            .products
            .iter()
            .filter(|p| {
                filter
                    .tag
                    .as_ref()
                    .is_none_or(|tag| p.tags.iter().any(|t| t == tag))
            })
            .filter(|p| {
                filter
                    .category
                    .as_ref()
                    .is_none_or(|category| &p.category.to_string() == category)
            })
            .cloned()
            .collect();
        Ok(products)
    }

    async fn count_products(&self) -> CatalogResult<u64> {
        Ok(self.store.read().await.products.len() as u64)
    }

    async fn create_review(&self, input: CreateReview) -> CatalogResult<Review> {
        let review = Review::new(input);
        self.store.write().await.reviews.push(review.clone());
        Ok(review)
    }

    async fn list_reviews_for_product(&self, product_id: Uuid) -> CatalogResult<Vec<Review>> {
        let store = self.store.read().await;
        Ok(store
            .reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn create_order(&self, input: CreateOrder) -> CatalogResult<Order> {
        let order = Order::new(input);
        self.store.write().await.orders.push(order.clone());
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn sample_input(title: &str, category: Category, tags: Vec<&str>) -> CreateProduct {
        CreateProduct {
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            description: None,
            price: 10.0,
            category,
            images: vec![],
            sizes: vec![],
            tags: tags.into_iter().map(String::from).collect(),
            rating: 4.5,
            rating_count: 0,
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryCatalogRepository::new();
        repo.create_product(sample_input("First", Category::Casual, vec![]))
            .await
            .unwrap();
        repo.create_product(sample_input("Second", Category::Casual, vec![]))
            .await
            .unwrap();

        let products = repo.list_products(ProductFilter::default()).await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "First");
        assert_eq!(products[1].title, "Second");
    }

    #[tokio::test]
    async fn test_filter_by_tag_and_category() {
        let repo = InMemoryCatalogRepository::new();
        repo.create_product(sample_input("Hoodie", Category::Streetwear, vec!["best"]))
            .await
            .unwrap();
        repo.create_product(sample_input("Tee", Category::Casual, vec!["new"]))
            .await
            .unwrap();

        let by_tag = repo
            .list_products(ProductFilter {
                tag: Some("best".to_string()),
                category: None,
            })
            .await
            .unwrap();
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].title, "Hoodie");

        let both = repo
            .list_products(ProductFilter {
                tag: Some("new".to_string()),
                category: Some("Casual".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].title, "Tee");

        // Unknown category matches nothing
        let none = repo
            .list_products(ProductFilter {
                tag: None,
                category: Some("Athleisure".to_string()),
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_reviews_are_scoped_to_product() {
        let repo = InMemoryCatalogRepository::new();
        let product = repo
            .create_product(sample_input("Hoodie", Category::Streetwear, vec![]))
            .await
            .unwrap();

        repo.create_review(CreateReview {
            product_id: product.id,
            user_name: "maya".to_string(),
            rating: 5,
            comment: None,
        })
        .await
        .unwrap();
        repo.create_review(CreateReview {
            product_id: Uuid::now_v7(),
            user_name: "lee".to_string(),
            rating: 3,
            comment: None,
        })
        .await
        .unwrap();

        let reviews = repo.list_reviews_for_product(product.id).await.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].user_name, "maya");
    }
}
