use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, to_bson, Bson, Document};
use mongodb::{Collection, Database};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CreateOrder, CreateProduct, CreateReview, Order, Product, ProductFilter, Review,
};
use crate::repository::CatalogRepository;

const PRODUCT_COLLECTION: &str = "product";
const REVIEW_COLLECTION: &str = "review";
const ORDER_COLLECTION: &str = "order";

/// MongoDB-backed implementation of the CatalogRepository
///
/// The database handle is optional so the API can start without a reachable
/// MongoDB instance. Operations on a detached repository fail with
/// [`CatalogError::Unavailable`]; the service layer decides which of those
/// degrade to empty results.
#[derive(Clone)]
pub struct MongoCatalogRepository {
    db: Option<Database>,
}

impl MongoCatalogRepository {
    pub fn new(db: Option<Database>) -> Self {
        Self { db }
    }

    fn products(&self) -> CatalogResult<Collection<Product>> {
        let db = self.db.as_ref().ok_or(CatalogError::Unavailable)?;
        Ok(db.collection(PRODUCT_COLLECTION))
    }

    fn reviews(&self) -> CatalogResult<Collection<Review>> {
        let db = self.db.as_ref().ok_or(CatalogError::Unavailable)?;
        Ok(db.collection(REVIEW_COLLECTION))
    }

    fn orders(&self) -> CatalogResult<Collection<Order>> {
        let db = self.db.as_ref().ok_or(CatalogError::Unavailable)?;
        Ok(db.collection(ORDER_COLLECTION))
    }
}

fn build_product_filter(filter: &ProductFilter) -> Document {
    let mut query = doc! {};
    if let Some(tag) = &filter.tag {
        query.insert("tags", tag);
    }
    if let Some(category) = &filter.category {
        query.insert("category", category);
    }
    query
}

fn id_filter(id: Uuid) -> Document {
    doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
}

#[async_trait]
impl CatalogRepository for MongoCatalogRepository {
    #[instrument(skip(self, input), fields(slug = %input.slug))]
    async fn create_product(&self, input: CreateProduct) -> CatalogResult<Product> {
        let product = Product::new(input);
        self.products()?.insert_one(&product).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        let product = self.products()?.find_one(id_filter(id)).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list_products(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>> {
        let cursor = self.products()?.find(build_product_filter(&filter)).await?;
        let products = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn count_products(&self) -> CatalogResult<u64> {
        let count = self.products()?.count_documents(doc! {}).await?;
        Ok(count)
    }

    #[instrument(skip(self, input), fields(product_id = %input.product_id))]
    async fn create_review(&self, input: CreateReview) -> CatalogResult<Review> {
        let review = Review::new(input);
        self.reviews()?.insert_one(&review).await?;
        Ok(review)
    }

    #[instrument(skip(self))]
    async fn list_reviews_for_product(&self, product_id: Uuid) -> CatalogResult<Vec<Review>> {
        let filter = doc! { "product_id": to_bson(&product_id).unwrap_or(Bson::Null) };
        let cursor = self.reviews()?.find(filter).await?;
        let reviews = cursor.try_collect().await?;
        Ok(reviews)
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn create_order(&self, input: CreateOrder) -> CatalogResult<Order> {
        let order = Order::new(input);
        self.orders()?.insert_one(&order).await?;
        Ok(order)
    }
}
