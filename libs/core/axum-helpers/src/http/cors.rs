use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Allows any origin, method, and header. Suitable for public read-mostly
/// APIs and local development against browser frontends.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
