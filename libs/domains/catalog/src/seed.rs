//! Built-in sample catalog used by the seed endpoint.

use crate::models::{Category, CreateProduct, Size};

/// The sample products inserted by the seed operation.
///
/// Returns owned values so callers can hand them straight to the repository.
pub fn sample_products() -> Vec<CreateProduct> {
    vec![
        CreateProduct {
            title: "Neon Flux Hoodie".to_string(),
            slug: "neon-flux-hoodie".to_string(),
            description: Some("Oversized hoodie with neon gradient print".to_string()),
            price: 89.0,
            category: Category::Streetwear,
            images: vec![
                "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?q=80&w=1400&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1520975922284-7b683db0352b?q=80&w=1400&auto=format&fit=crop".to_string(),
            ],
            sizes: vec![Size::S, Size::M, Size::L, Size::XL],
            tags: vec!["best".to_string(), "seasonal".to_string()],
            rating: 4.7,
            rating_count: 243,
            in_stock: true,
        },
        CreateProduct {
            title: "Ripple Tee".to_string(),
            slug: "ripple-tee".to_string(),
            description: Some("Boxy fit tee with wave puff print".to_string()),
            price: 39.0,
            category: Category::Casual,
            images: vec![
                "https://images.unsplash.com/photo-1520975693416-35a6a199d470?q=80&w=1400&auto=format&fit=crop".to_string(),
            ],
            sizes: vec![Size::XS, Size::S, Size::M, Size::L],
            tags: vec!["new".to_string()],
            rating: 4.4,
            rating_count: 91,
            in_stock: true,
        },
        CreateProduct {
            title: "Core Knit Crew".to_string(),
            slug: "core-knit-crew".to_string(),
            description: Some("Premium heavyweight knit crewneck".to_string()),
            price: 69.0,
            category: Category::Essentials,
            images: vec![
                "https://images.unsplash.com/photo-1521577352947-9bb58764b69a?q=80&w=1400&auto=format&fit=crop".to_string(),
            ],
            sizes: vec![Size::S, Size::M, Size::L, Size::XL],
            tags: vec!["best".to_string()],
            rating: 4.8,
            rating_count: 512,
            in_stock: true,
        },
    ]
}
