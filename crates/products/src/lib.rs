//! Products domain module for the catalog demo.
//!
//! This crate contains the catalog's business rules, implemented purely as
//! deterministic domain logic (no IO, no host environment, no storage).
//! Everything here operates on `&[Product]` and never mutates its input.

pub mod logging;
pub mod product;
pub mod query;
pub mod shipping;

pub use logging::with_logging;
pub use product::{demo_catalog, price_band, PriceBand, Product, ProductWithTax};
pub use query::{
    calculate_average, calculate_total, calculate_total_recursive, categories, category_stats,
    cheap_products, count_by_category_recursive, expensive_products, filter_by_price,
    prices_with_tax, product_names, products_by_category, sort_products,
    sort_products_by_key_str, summarize, CatalogSummary, CategoryStats, SortKey,
    DEFAULT_CHEAP_THRESHOLD, DEFAULT_EXPENSIVE_THRESHOLD, DEFAULT_TAX_RATE,
};
pub use shipping::{shipping_cost, DEFAULT_SHIPPING_FEE};
