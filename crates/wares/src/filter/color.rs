//! Color equality specification.

use super::Specification;
use crate::product::{Color, Product};

/// A specification satisfied when a product's color equals the bound color.
///
/// # Example
///
/// ```
/// use wares::filter::{ColorSpec, Specification};
/// use wares::product::{Color, Product, Size};
///
/// let spec = ColorSpec::new(Color::Green);
///
/// let apple = Product::new("Apple", Color::Green, Size::Small);
/// let house = Product::new("House", Color::Blue, Size::Large);
///
/// assert!(spec.is_satisfied(&apple));
/// assert!(!spec.is_satisfied(&house));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ColorSpec {
    color: Color,
}

impl ColorSpec {
    /// Create a specification bound to one color.
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Get the bound color.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Specification for ColorSpec {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.color == self.color
    }

    fn description(&self) -> String {
        format!("color({})", self.color)
    }
}
