//! wares - composable filtering for a small product catalog.
//!
//! This crate provides a specification-based filtering engine over an
//! in-memory product catalog. It supports:
//!
//! - A [`Specification`] trait for single-condition predicates
//! - Attribute equality specifications ([`ColorSpec`], [`SizeSpec`])
//! - Composable AND/OR combinators ([`AndSpec`], [`OrSpec`])
//! - A single generic filtering operation ([`filter::apply`])
//! - Criterion parsing from `field=value1,value2` strings ([`Criterion`])
//! - The older enumerated filter ([`EnumeratedFilter`]), kept as a
//!   baseline showing the combinatorial growth the specification engine
//!   avoids
//!
//! New criteria are added by implementing [`Specification`] on a new type;
//! no existing component changes.
//!
//! # Example
//!
//! ```
//! use wares::filter::{self, AndSpec, ColorSpec, SizeSpec};
//! use wares::product::{Color, Product, Size};
//!
//! let products = vec![
//!     Product::new("Apple", Color::Green, Size::Small),
//!     Product::new("Tree", Color::Green, Size::Large),
//!     Product::new("House", Color::Blue, Size::Large),
//! ];
//!
//! let spec = AndSpec::new()
//!     .with_spec(Box::new(ColorSpec::new(Color::Green)))
//!     .with_spec(Box::new(SizeSpec::new(Size::Large)));
//!
//! let matches = filter::apply(&products, &spec);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].name, "Tree");
//! ```

pub mod error;
pub mod filter;
pub mod product;

pub use error::{Result, WaresError};
pub use filter::{
    AndSpec, ColorSpec, Criterion, EnumeratedFilter, OrSpec, SizeSpec, Specification,
};
pub use product::{Color, Product, Size};
