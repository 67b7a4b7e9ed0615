//! Pure queries and transforms over a product sequence.
//!
//! Every function here returns a fresh value and leaves its input untouched.
//! Sorting returns a sorted copy, so callers keep the original order for free.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use katalog_core::{DomainError, DomainResult};

use crate::product::{Product, ProductWithTax};

/// Default VAT rate applied by the tax map.
pub const DEFAULT_TAX_RATE: f64 = 0.18;

/// Default bound for [`expensive_products`] (strictly above).
pub const DEFAULT_EXPENSIVE_THRESHOLD: f64 = 10_000.0;

/// Default bound for [`cheap_products`] (strictly below).
pub const DEFAULT_CHEAP_THRESHOLD: f64 = 500.0;

/// Sum of prices. Empty input sums to 0.
pub fn calculate_total(items: &[Product]) -> f64 {
    items.iter().map(|item| item.price).sum()
}

/// Mean price, or 0 for an empty sequence (guards the divide-by-zero).
pub fn calculate_average(items: &[Product]) -> f64 {
    if items.is_empty() {
        0.0
    } else {
        calculate_total(items) / items.len() as f64
    }
}

/// Inclusive price-range filter, original order preserved.
///
/// Negative or NaN bounds are rejected rather than silently propagating NaN
/// comparisons.
pub fn filter_by_price(items: &[Product], min: f64, max: f64) -> DomainResult<Vec<Product>> {
    if min.is_nan() || max.is_nan() || min < 0.0 || max < 0.0 {
        return Err(DomainError::InvalidThreshold { min, max });
    }
    Ok(items
        .iter()
        .filter(|item| item.price >= min && item.price <= max)
        .cloned()
        .collect())
}

/// Recognized sort keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
}

impl SortKey {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            _ => None,
        }
    }
}

/// Return a copy of `items` sorted ascending by the given key.
///
/// Name order is lexicographic by Unicode code point; price order is numeric.
/// The sort is stable, so equal keys keep their relative catalog order.
pub fn sort_products(items: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = items.to_vec();
    match key {
        SortKey::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Price => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
    }
    sorted
}

/// String-keyed variant: an unrecognized key means no reordering.
pub fn sort_products_by_key_str(items: &[Product], key: &str) -> Vec<Product> {
    match SortKey::parse(key) {
        Some(parsed) => sort_products(items, parsed),
        None => items.to_vec(),
    }
}

/// Recursive sum of prices, base case 0 at the end of the sequence.
///
/// Equivalent to [`calculate_total`]; kept recursive deliberately (the demo
/// exists to show recursion). Not meant for unbounded input.
pub fn calculate_total_recursive(items: &[Product]) -> f64 {
    fn go(items: &[Product], index: usize) -> f64 {
        if index >= items.len() {
            return 0.0;
        }
        items[index].price + go(items, index + 1)
    }
    go(items, 0)
}

/// Recursive count of items in `category`, same structure as the recursive sum.
pub fn count_by_category_recursive(items: &[Product], category: &str) -> usize {
    fn go(items: &[Product], category: &str, index: usize) -> usize {
        if index >= items.len() {
            return 0;
        }
        let current = usize::from(items[index].category == category);
        current + go(items, category, index + 1)
    }
    go(items, category, 0)
}

/// Names of all products, in catalog order.
pub fn product_names(items: &[Product]) -> Vec<String> {
    items.iter().map(|item| item.name.clone()).collect()
}

/// Map each product to a copy carrying its gross price at the given rate.
///
/// A zero rate is the identity on price.
pub fn prices_with_tax(items: &[Product], rate: f64) -> Vec<ProductWithTax> {
    items
        .iter()
        .map(|item| ProductWithTax {
            product: item.clone(),
            price_with_tax: item.price * (1.0 + rate),
        })
        .collect()
}

/// Products priced strictly above `threshold`.
pub fn expensive_products(items: &[Product], threshold: f64) -> Vec<Product> {
    items
        .iter()
        .filter(|item| item.price > threshold)
        .cloned()
        .collect()
}

/// Products priced strictly below `threshold`.
pub fn cheap_products(items: &[Product], threshold: f64) -> Vec<Product> {
    items
        .iter()
        .filter(|item| item.price < threshold)
        .cloned()
        .collect()
}

/// Products whose category matches `category` exactly.
pub fn products_by_category(items: &[Product], category: &str) -> Vec<Product> {
    items
        .iter()
        .filter(|item| item.category == category)
        .cloned()
        .collect()
}

/// Deduplicated category names in first-seen order.
pub fn categories(items: &[Product]) -> Vec<String> {
    items.iter().fold(Vec::new(), |mut seen, item| {
        if !seen.iter().any(|c| c == &item.category) {
            seen.push(item.category.clone());
        }
        seen
    })
}

/// Per-category aggregate: item count and summed price.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    pub count: usize,
    pub total: f64,
}

/// Reduce the sequence to a category → {count, total} mapping.
pub fn category_stats(items: &[Product]) -> HashMap<String, CategoryStats> {
    items.iter().fold(HashMap::new(), |mut stats, item| {
        let entry = stats.entry(item.category.clone()).or_default();
        entry.count += 1;
        entry.total += item.price;
        stats
    })
}

/// The three headline statistics shown at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub count: usize,
    pub total: f64,
    pub average: f64,
}

/// Compute count, total value, and average price in one pass over the catalog.
pub fn summarize(items: &[Product]) -> CatalogSummary {
    CatalogSummary {
        count: items.len(),
        total: calculate_total(items),
        average: calculate_average(items),
    }
}
