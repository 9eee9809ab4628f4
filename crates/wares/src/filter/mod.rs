//! Filter engines for the product catalog.
//!
//! This module provides a trait-based specification infrastructure supporting
//! multiple criteria types with composable AND/OR logic, plus the older
//! enumerated filter kept as a baseline for comparison.
//!
//! # Examples
//!
//! ```
//! use wares::filter::{self, AndSpec, ColorSpec, SizeSpec};
//! use wares::product::{Color, Product, Size};
//!
//! let products = vec![
//!     Product::new("Apple", Color::Green, Size::Small),
//!     Product::new("Tree", Color::Green, Size::Large),
//! ];
//!
//! // Create individual specifications
//! let color = ColorSpec::new(Color::Green);
//! let size = SizeSpec::new(Size::Large);
//!
//! // Combine into a conjunction (AND logic)
//! let spec = AndSpec::new()
//!     .with_spec(Box::new(color))
//!     .with_spec(Box::new(size));
//!
//! let matches = filter::apply(&products, &spec);
//! assert_eq!(matches.len(), 1);
//! ```

mod and;
mod color;
mod criterion;
mod enumerated;
mod or;
mod size;

pub use and::AndSpec;
pub use color::ColorSpec;
pub use criterion::Criterion;
pub use enumerated::EnumeratedFilter;
pub use or::OrSpec;
pub use size::SizeSpec;

use tracing::debug;

use crate::product::Product;

/// Trait for testing products against a single filtering condition.
///
/// Implementations decide whether a product belongs in a result set based
/// on one criterion, such as color or size equality. Specifications hold
/// their bound comparison values from construction and evaluation is free
/// of side effects.
///
/// Specifications are composable through the [`AndSpec`] and [`OrSpec`]
/// types. New criteria are added by implementing this trait on a new type;
/// existing specifications and [`apply`] stay untouched.
pub trait Specification: Send + Sync {
    /// Check whether a product satisfies this specification.
    fn is_satisfied(&self, product: &Product) -> bool;

    /// Get a human-readable description of this specification.
    ///
    /// Used for logging and debugging purposes.
    fn description(&self) -> String;
}

/// Filter products against a single specification.
///
/// Returns the products satisfying `spec`, in their original order. One
/// specification can encode any number of underlying criteria, so this is
/// the only filtering operation the engine needs.
///
/// A single pass over `products`; an empty input yields an empty result.
pub fn apply<'a, S: Specification + ?Sized>(
    products: &'a [Product],
    spec: &S,
) -> Vec<&'a Product> {
    let matches: Vec<&Product> = products
        .iter()
        .filter(|product| spec.is_satisfied(product))
        .collect();

    debug!(
        spec = %spec.description(),
        scanned = products.len(),
        matched = matches.len(),
        "specification applied"
    );

    matches
}
