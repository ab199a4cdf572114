use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CheckoutRequest, CheckoutResponse, CreateOrder, CreateReview, OrderItem, Product,
    ProductFilter, Review, SeedOutcome,
};
use crate::repository::CatalogRepository;
use crate::seed::sample_products;

/// Round a monetary amount to two decimal places.
fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Service layer for catalog business logic
///
/// Owns validation, seeding, checkout totals, and the degraded-read policy:
/// list endpoints return empty results when the store is unavailable, while
/// everything else surfaces the failure.
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List products, optionally filtered by tag and category.
    ///
    /// Empty-string filter values are treated as absent. An unavailable store
    /// degrades to an empty list so storefront pages keep rendering.
    #[instrument(skip(self))]
    pub async fn list_products(&self, mut filter: ProductFilter) -> CatalogResult<Vec<Product>> {
        if filter.tag.as_deref() == Some("") {
            filter.tag = None;
        }
        if filter.category.as_deref() == Some("") {
            filter.category = None;
        }
        match self.repository.list_products(filter).await {
            Err(CatalogError::Unavailable) => {
                warn!("store unavailable, returning empty product list");
                Ok(vec![])
            }
            other => other,
        }
    }

    /// Get a single product by ID.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> CatalogResult<Product> {
        self.repository
            .get_product(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    /// Insert the sample catalog if the product collection is empty.
    #[instrument(skip(self))]
    pub async fn seed(&self) -> CatalogResult<SeedOutcome> {
        let existing = self.repository.count_products().await?;
        if existing > 0 {
            return Ok(SeedOutcome {
                seeded: false,
                count: None,
                message: Some("Products already exist".to_string()),
            });
        }

        let samples = sample_products();
        let count = samples.len() as u64;
        for input in samples {
            self.repository.create_product(input).await?;
        }
        info!(count, "seeded sample products");
        Ok(SeedOutcome {
            seeded: true,
            count: Some(count),
            message: None,
        })
    }

    /// List reviews for a product.
    ///
    /// Degrades to an empty list when the store is unavailable.
    #[instrument(skip(self))]
    pub async fn list_reviews(&self, product_id: Uuid) -> CatalogResult<Vec<Review>> {
        match self.repository.list_reviews_for_product(product_id).await {
            Err(CatalogError::Unavailable) => {
                warn!("store unavailable, returning empty review list");
                Ok(vec![])
            }
            other => other,
        }
    }

    /// Create a review after checking the referenced product exists.
    #[instrument(skip(self, input), fields(product_id = %input.product_id))]
    pub async fn create_review(&self, input: CreateReview) -> CatalogResult<Review> {
        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        if self.repository.get_product(input.product_id).await?.is_none() {
            return Err(CatalogError::InvalidProduct(input.product_id));
        }
        self.repository.create_review(input).await
    }

    /// Price and persist an order.
    ///
    /// Every referenced product is resolved before anything is written, so a
    /// bad product ID rejects the whole checkout with nothing persisted.
    #[instrument(skip(self, request), fields(email = %request.email, items = request.items.len()))]
    pub async fn checkout(&self, request: CheckoutRequest) -> CatalogResult<CheckoutResponse> {
        request
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        let mut items = Vec::with_capacity(request.items.len());
        for item in &request.items {
            let product = self
                .repository
                .get_product(item.product_id)
                .await?
                .ok_or(CatalogError::InvalidProduct(item.product_id))?;
            let line_total = product.price * f64::from(item.quantity);
            items.push(OrderItem {
                product_id: product.id,
                title: product.title,
                size: item.size,
                quantity: item.quantity,
                unit_price: product.price,
                line_total,
            });
        }

        let total = round2(items.iter().map(|i| i.line_total).sum());
        let order = self
            .repository
            .create_order(CreateOrder {
                email: request.email,
                items,
                total,
            })
            .await?;
        info!(order_id = %order.id, total, "checkout completed");
        Ok(CheckoutResponse {
            order_id: order.id,
            total: order.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CheckoutItem, CreateProduct, Order, Size};
    use crate::repository::MockCatalogRepository;
    use mockall::predicate::eq;

    fn product_with_price(id: Uuid, title: &str, price: f64) -> Product {
        let mut product = Product::new(CreateProduct {
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            description: None,
            price,
            category: Category::Casual,
            images: vec![],
            sizes: vec![],
            tags: vec![],
            rating: 4.5,
            rating_count: 0,
            in_stock: true,
        });
        product.id = id;
        product
    }

    #[tokio::test]
    async fn test_checkout_sums_line_totals() {
        let hoodie_id = Uuid::now_v7();
        let tee_id = Uuid::now_v7();

        let mut repo = MockCatalogRepository::new();
        repo.expect_get_product()
            .with(eq(hoodie_id))
            .returning(move |id| Ok(Some(product_with_price(id, "Hoodie", 10.0))));
        repo.expect_get_product()
            .with(eq(tee_id))
            .returning(move |id| Ok(Some(product_with_price(id, "Tee", 5.0))));
        repo.expect_create_order().returning(|input| {
            assert_eq!(input.total, 35.0);
            assert_eq!(input.items.len(), 2);
            assert_eq!(input.items[0].line_total, 20.0);
            assert_eq!(input.items[1].line_total, 15.0);
            Ok(Order::new(input))
        });

        let service = CatalogService::new(Arc::new(repo));
        let response = service
            .checkout(CheckoutRequest {
                email: "shopper@example.com".to_string(),
                items: vec![
                    CheckoutItem {
                        product_id: hoodie_id,
                        size: Some(Size::M),
                        quantity: 2,
                    },
                    CheckoutItem {
                        product_id: tee_id,
                        size: None,
                        quantity: 3,
                    },
                ],
            })
            .await
            .unwrap();

        assert_eq!(response.total, 35.0);
    }

    #[tokio::test]
    async fn test_checkout_with_unknown_product_persists_nothing() {
        let missing = Uuid::now_v7();

        let mut repo = MockCatalogRepository::new();
        repo.expect_get_product()
            .with(eq(missing))
            .returning(|_| Ok(None));
        repo.expect_create_order().times(0);

        let service = CatalogService::new(Arc::new(repo));
        let result = service
            .checkout(CheckoutRequest {
                email: "shopper@example.com".to_string(),
                items: vec![CheckoutItem {
                    product_id: missing,
                    size: None,
                    quantity: 1,
                }],
            })
            .await;

        assert!(matches!(result, Err(CatalogError::InvalidProduct(id)) if id == missing));
    }

    #[tokio::test]
    async fn test_seed_populates_empty_store() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_count_products().returning(|| Ok(0));
        repo.expect_create_product()
            .times(3)
            .returning(|input| Ok(Product::new(input)));

        let service = CatalogService::new(Arc::new(repo));
        let outcome = service.seed().await.unwrap();
        assert!(outcome.seeded);
        assert_eq!(outcome.count, Some(3));
        assert!(outcome.message.is_none());
    }

    #[tokio::test]
    async fn test_seed_skips_populated_store() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_count_products().returning(|| Ok(3));
        repo.expect_create_product().times(0);

        let service = CatalogService::new(Arc::new(repo));
        let outcome = service.seed().await.unwrap();
        assert!(!outcome.seeded);
        assert_eq!(outcome.message.as_deref(), Some("Products already exist"));
    }

    #[tokio::test]
    async fn test_seed_surfaces_unavailable_store() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_count_products()
            .returning(|| Err(CatalogError::Unavailable));

        let service = CatalogService::new(Arc::new(repo));
        assert!(matches!(
            service.seed().await,
            Err(CatalogError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn test_list_products_degrades_when_unavailable() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_list_products()
            .returning(|_| Err(CatalogError::Unavailable));

        let service = CatalogService::new(Arc::new(repo));
        let products = service.list_products(ProductFilter::default()).await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_list_products_normalizes_empty_filters() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_list_products()
            .withf(|filter| filter.tag.is_none() && filter.category.is_none())
            .returning(|_| Ok(vec![]));

        let service = CatalogService::new(Arc::new(repo));
        service
            .list_products(ProductFilter {
                tag: Some(String::new()),
                category: Some(String::new()),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_get_product_maps_missing_to_not_found() {
        let id = Uuid::now_v7();
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_product().with(eq(id)).returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(repo));
        assert!(matches!(
            service.get_product(id).await,
            Err(CatalogError::NotFound(found)) if found == id
        ));
    }

    #[tokio::test]
    async fn test_create_review_rejects_unknown_product() {
        let missing = Uuid::now_v7();
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_product()
            .with(eq(missing))
            .returning(|_| Ok(None));
        repo.expect_create_review().times(0);

        let service = CatalogService::new(Arc::new(repo));
        let result = service
            .create_review(CreateReview {
                product_id: missing,
                user_name: "maya".to_string(),
                rating: 5,
                comment: None,
            })
            .await;

        assert!(matches!(result, Err(CatalogError::InvalidProduct(id)) if id == missing));
    }

    #[tokio::test]
    async fn test_list_reviews_degrades_when_unavailable() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_list_reviews_for_product()
            .returning(|_| Err(CatalogError::Unavailable));

        let service = CatalogService::new(Arc::new(repo));
        let reviews = service.list_reviews(Uuid::now_v7()).await.unwrap();
        assert!(reviews.is_empty());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(35.0), 35.0);
        assert_eq!(round2(10.005), 10.01);
        assert_eq!(round2(19.999), 20.0);
    }
}
