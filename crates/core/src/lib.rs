//! `katalog-core` — shared pure primitives for the catalog demo.
//!
//! This crate contains **pure** building blocks (no I/O, no host concerns):
//! the domain error model and price formatting.

pub mod error;
pub mod format;

pub use error::{DomainError, DomainResult};
pub use format::format_price;
