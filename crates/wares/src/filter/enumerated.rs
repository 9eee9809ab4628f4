//! The pre-specification filter: one method per criterion combination.
//!
//! Kept only as a baseline to contrast with the specification engine.
//! Every independent criterion multiplies the method count (k criteria
//! need up to 2^k - 1 methods), so this type must not grow new criteria;
//! new filtering behavior belongs in a new [`Specification`] variant.
//!
//! [`Specification`]: super::Specification

use crate::product::{Color, Product, Size};

/// Filters the catalog through hard-coded per-criterion methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumeratedFilter;

impl EnumeratedFilter {
    /// Create a new enumerated filter.
    pub fn new() -> Self {
        Self
    }

    /// Products whose color equals `color`, in their original order.
    pub fn by_color<'a>(&self, products: &'a [Product], color: Color) -> Vec<&'a Product> {
        products.iter().filter(|p| p.color == color).collect()
    }

    /// Products whose size equals `size`, in their original order.
    pub fn by_size<'a>(&self, products: &'a [Product], size: Size) -> Vec<&'a Product> {
        products.iter().filter(|p| p.size == size).collect()
    }

    /// Products matching both attributes, in their original order.
    pub fn by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| p.size == size && p.color == color)
            .collect()
    }
}
