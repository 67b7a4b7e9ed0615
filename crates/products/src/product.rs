use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// `id` is unique within the catalog and assigned at construction; records
/// are treated as immutable values after that. `category` is a free-text
/// label, not a separate entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

/// A read-derived copy of a product carrying the computed gross price.
///
/// The original record stays untouched; this is what the tax map produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWithTax {
    #[serde(flatten)]
    pub product: Product,
    pub price_with_tax: f64,
}

/// Price band, ordered cheapest to most expensive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceBand {
    Cheap,
    Medium,
    Expensive,
    Luxury,
}

impl core::fmt::Display for PriceBand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            PriceBand::Cheap => "Cheap",
            PriceBand::Medium => "Medium",
            PriceBand::Expensive => "Expensive",
            PriceBand::Luxury => "Luxury",
        };
        f.write_str(label)
    }
}

/// Map a price to its band via ascending thresholds.
pub fn price_band(price: f64) -> PriceBand {
    if price < 1_000.0 {
        PriceBand::Cheap
    } else if price < 10_000.0 {
        PriceBand::Medium
    } else if price < 50_000.0 {
        PriceBand::Expensive
    } else {
        PriceBand::Luxury
    }
}

/// The fixed ten-product demo catalog.
///
/// Membership is immutable: the demo exposes no add/remove operations, so
/// every query works against this sequence (or a derived copy of it).
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", 45_000.0, "Elektronika"),
        Product::new(2, "Miš", 1_200.0, "Elektronika"),
        Product::new(3, "Tastatura", 2_500.0, "Elektronika"),
        Product::new(4, "Monitor", 15_000.0, "Elektronika"),
        Product::new(5, "Knjiga", 800.0, "Obrazovanje"),
        Product::new(6, "Tablet", 15_000.0, "Elektronika"),
        Product::new(7, "Ranac", 3_000.0, "Obrazovanje"),
        Product::new(8, "Kafa", 200.0, "Hrana"),
        Product::new(9, "Burek", 300.0, "Hrana"),
        Product::new(10, "Voda", 80.0, "Hrana"),
    ]
}
