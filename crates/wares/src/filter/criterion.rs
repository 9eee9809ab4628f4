//! Criterion parsing for CLI-style filter arguments.
//!
//! Parses the `field=value1,value2` form into concrete specifications.

use super::{ColorSpec, OrSpec, SizeSpec, Specification};
use crate::error::{Result, WaresError};
use crate::product::{Color, Size};

/// One parsed filtering criterion.
///
/// Multiple values for a field have OR logic - a product matches the
/// criterion if its attribute equals any listed value. Value order is
/// preserved from the input.
///
/// # Example
///
/// ```
/// use wares::filter::Criterion;
///
/// let criterion = Criterion::parse("color=green,blue").unwrap();
/// let spec = criterion.into_spec();
/// assert_eq!(spec.description(), "or(color(green) OR color(blue))");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Match any of the listed colors.
    Color(Vec<Color>),
    /// Match any of the listed sizes.
    Size(Vec<Size>),
}

impl Criterion {
    /// Parse a criterion from string format.
    ///
    /// Expected format: `field=value1,value2` where field is `color` or
    /// `size`.
    ///
    /// # Arguments
    ///
    /// * `input` - The criterion string to parse
    ///
    /// # Returns
    ///
    /// A parsed `Criterion` or an error if the format is invalid or a
    /// value is not a known attribute.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        let Some((field, values_str)) = input.split_once('=') else {
            return Err(WaresError::Criterion(format!(
                "Invalid criterion format: '{input}'. Expected 'field=value1,value2'"
            )));
        };

        let field = field.trim();
        if field.is_empty() {
            return Err(WaresError::Criterion(format!(
                "Empty field name in criterion: '{input}'"
            )));
        }

        let values: Vec<&str> = values_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if values.is_empty() {
            return Err(WaresError::Criterion(format!(
                "No values specified in criterion: '{input}'"
            )));
        }

        match field {
            "color" => {
                let colors = values
                    .iter()
                    .map(|v| v.parse::<Color>())
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Color(colors))
            }
            "size" => {
                let sizes = values
                    .iter()
                    .map(|v| v.parse::<Size>())
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Size(sizes))
            }
            other => Err(WaresError::Criterion(format!(
                "Unknown criterion field: '{other}'. Expected 'color' or 'size'"
            ))),
        }
    }

    /// Lower the criterion to a specification.
    ///
    /// A single value becomes a plain equality specification; multiple
    /// values become an [`OrSpec`] over equality specifications.
    pub fn into_spec(self) -> Box<dyn Specification> {
        match self {
            Self::Color(colors) => lower(colors, |c| Box::new(ColorSpec::new(c))),
            Self::Size(sizes) => lower(sizes, |s| Box::new(SizeSpec::new(s))),
        }
    }
}

fn lower<T: Copy>(
    values: Vec<T>,
    make: impl Fn(T) -> Box<dyn Specification>,
) -> Box<dyn Specification> {
    if values.len() == 1 {
        make(values[0])
    } else {
        let mut or = OrSpec::new();
        for value in values {
            or.add_spec(make(value));
        }
        Box::new(or)
    }
}
