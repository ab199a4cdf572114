//! HTTP handlers for the Catalog API

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use serde_json::{json, Value};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{
    Category, CheckoutItem, CheckoutRequest, CheckoutResponse, Collection, CollectionKey,
    CreateProduct, CreateReview, Order, OrderItem, OrderStatus, Product, ProductFilter, Review,
    ReviewCreated, SeedOutcome, Size, SizeGuide, User,
};
use crate::repository::CatalogRepository;
use crate::schema::schema_names;
use crate::service::CatalogService;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        root,
        list_schemas,
        seed,
        list_products,
        get_product,
        list_reviews,
        create_review,
        checkout,
    ),
    components(
        schemas(
            Product, CreateProduct, ProductFilter, Category, Size,
            Review, CreateReview, ReviewCreated,
            Order, OrderItem, OrderStatus,
            CheckoutRequest, CheckoutItem, CheckoutResponse,
            SeedOutcome, User, Collection, CollectionKey, SizeGuide
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Catalog", description = "Product catalog, reviews, and checkout endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R: CatalogRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(root))
        .route("/schema", get(list_schemas))
        .route("/seed", post(seed))
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .route("/reviews", post(create_review))
        .route("/reviews/{product_id}", get(list_reviews))
        .route("/checkout", post(checkout))
        .with_state(shared_service)
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "Catalog",
    responses(
        (status = 200, description = "Service banner", body = Value)
    )
)]
async fn root() -> Json<Value> {
    Json(json!({ "message": "Catalog API running" }))
}

/// List the registered model schemas
#[utoipa::path(
    get,
    path = "/schema",
    tag = "Catalog",
    responses(
        (status = 200, description = "Registered schema names", body = Value)
    )
)]
async fn list_schemas() -> Json<Value> {
    Json(json!({ "schemas": schema_names() }))
}

/// Seed the store with sample products
#[utoipa::path(
    post,
    path = "/seed",
    tag = "Catalog",
    responses(
        (status = 200, description = "Seed outcome", body = SeedOutcome),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn seed<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> CatalogResult<Json<SeedOutcome>> {
    let outcome = service.seed().await?;
    Ok(Json(outcome))
}

/// List products with optional filters
#[utoipa::path(
    get,
    path = "/products",
    tag = "Catalog",
    params(ProductFilter),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(filter): Query<ProductFilter>,
) -> CatalogResult<Json<Vec<Product>>> {
    let products = service.list_products(filter).await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Catalog",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// List reviews for a product
#[utoipa::path(
    get,
    path = "/reviews/{product_id}",
    tag = "Catalog",
    params(
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Reviews for the product", body = Vec<Review>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_reviews<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    UuidPath(product_id): UuidPath,
) -> CatalogResult<Json<Vec<Review>>> {
    let reviews = service.list_reviews(product_id).await?;
    Ok(Json(reviews))
}

/// Create a review for an existing product
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "Catalog",
    request_body = CreateReview,
    responses(
        (status = 200, description = "Review created", body = ReviewCreated),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_review<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateReview>,
) -> CatalogResult<Json<ReviewCreated>> {
    let review = service.create_review(input).await?;
    Ok(Json(ReviewCreated { id: review.id }))
}

/// Price and place an order
#[utoipa::path(
    post,
    path = "/checkout",
    tag = "Catalog",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order placed", body = CheckoutResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn checkout<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedJson(request): ValidatedJson<CheckoutRequest>,
) -> CatalogResult<Json<CheckoutResponse>> {
    let response = service.checkout(request).await?;
    Ok(Json(response))
}
