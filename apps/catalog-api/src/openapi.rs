//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Nest prefix for the domain API doc. The derive macro rejects an empty
/// string literal in `nest(path = ...)`, but accepts an expression; the
/// domain paths are mounted at the router root, so the prefix is empty.
const ROOT_NEST_PATH: &str = "";

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "MongoDB-backed REST API for a small commerce catalog: products, reviews, and mock checkout",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    nest(
        (path = ROOT_NEST_PATH, api = domain_catalog::ApiDoc)
    ),
    tags(
        (name = "Catalog", description = "Product catalog, reviews, and checkout endpoints")
    )
)]
pub struct ApiDoc;
