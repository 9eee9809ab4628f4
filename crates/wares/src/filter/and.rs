//! Conjunction specification for combining multiple specifications.

use super::Specification;
use crate::product::Product;

/// A specification that combines child specifications with AND logic.
///
/// A product satisfies the conjunction only if it satisfies ALL children.
/// Children are evaluated in insertion order and evaluation stops at the
/// first failing child. An empty conjunction is vacuously satisfied by
/// every product.
///
/// # Example
///
/// ```
/// use wares::filter::{AndSpec, ColorSpec, SizeSpec, Specification};
/// use wares::product::{Color, Product, Size};
///
/// // Large green products only
/// let spec = AndSpec::new()
///     .with_spec(Box::new(ColorSpec::new(Color::Green)))
///     .with_spec(Box::new(SizeSpec::new(Size::Large)));
///
/// let tree = Product::new("Tree", Color::Green, Size::Large);
/// let apple = Product::new("Apple", Color::Green, Size::Small);
/// let house = Product::new("House", Color::Blue, Size::Large);
///
/// assert!(spec.is_satisfied(&tree));
/// assert!(!spec.is_satisfied(&apple));  // Wrong size
/// assert!(!spec.is_satisfied(&house));  // Wrong color
/// ```
pub struct AndSpec {
    specs: Vec<Box<dyn Specification>>,
}

impl Default for AndSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl AndSpec {
    /// Create a new empty conjunction.
    ///
    /// An empty conjunction is satisfied by every product.
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Add a child specification (builder pattern).
    pub fn with_spec(mut self, spec: Box<dyn Specification>) -> Self {
        self.specs.push(spec);
        self
    }

    /// Add a child specification.
    pub fn add_spec(&mut self, spec: Box<dyn Specification>) {
        self.specs.push(spec);
    }

    /// Get the number of child specifications.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Check if the conjunction has no children.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Get descriptions of all child specifications.
    pub fn spec_descriptions(&self) -> Vec<String> {
        self.specs.iter().map(|s| s.description()).collect()
    }
}

impl Specification for AndSpec {
    fn is_satisfied(&self, product: &Product) -> bool {
        // all() short-circuits on the first failing child and is
        // vacuously true over an empty child list
        self.specs.iter().all(|s| s.is_satisfied(product))
    }

    fn description(&self) -> String {
        if self.specs.is_empty() {
            "and(empty)".to_string()
        } else {
            format!("and({})", self.spec_descriptions().join(" AND "))
        }
    }
}

// Box<dyn Specification> has no Debug, so derive is unavailable
impl std::fmt::Debug for AndSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndSpec")
            .field("specs", &self.spec_descriptions())
            .finish()
    }
}
