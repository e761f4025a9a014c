//! Product catalog storage.
//!
//! # Responsibilities
//! - Hold the fixed product list, seeded once at startup
//! - Serve products in insertion order
//!
//! # Design Decisions
//! - Catalog is immutable for the process lifetime; shared via Arc
//! - No locking: read-only data is safe across concurrent requests

use serde::Serialize;

/// A single product record as served on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable identifier.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Price in the store currency.
    pub price: f64,

    /// URL of the product image.
    pub image_url: String,

    /// Marketing copy.
    pub description: String,
}

/// The in-memory product catalog.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the catalog from the fixed seed list.
    pub fn with_seed_data() -> Self {
        let products = vec![
            Product {
                id: 1,
                name: "Classic 1460 Boot".to_string(),
                price: 169.99,
                image_url: "http://localhost:3000/images/classic-boot.jpg".to_string(),
                description: "The original Mr. Bluejays boot.".to_string(),
            },
            Product {
                id: 2,
                name: "Steel Toe Worker".to_string(),
                price: 199.99,
                image_url: "http://localhost:3000/images/steel-toe.jpg".to_string(),
                description: "Heavy-duty steel toe boot.".to_string(),
            },
            Product {
                id: 3,
                name: "Chelsea Boot".to_string(),
                price: 159.99,
                image_url: "http://localhost:3000/images/chelsea.jpg".to_string(),
                description: "Sleek slip-on design.".to_string(),
            },
        ];

        Self { products }
    }

    /// All products, insertion order preserved.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_seed_data()
    }
}
