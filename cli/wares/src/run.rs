//! Main execution logic for the wares CLI.

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::fmt;
use wares::filter::{self, AndSpec, Criterion, EnumeratedFilter, Specification};
use wares::product::{Color, Product, Size};

use crate::args::{Cli, Engine, LogLevel, OutputFormat};

/// Counters reported after a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub scanned: usize,
    pub matched: usize,
    pub output: usize,
}

/// Initialize logging.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let level: Level = level.into();

    let subscriber = fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr); // Log to stderr so stdout is clean for output

    subscriber.init();

    Ok(())
}

/// Execute a filtering run with the provided arguments.
pub fn execute(args: &Cli) -> Result<RunSummary> {
    let products = sample_catalog();

    let criteria = parse_criteria(&args.filters)?;

    let mut matches = match args.engine {
        Engine::Spec => {
            let spec = build_spec(criteria);
            info!(spec = %spec.description(), "filtering with specification engine");
            filter::apply(&products, &spec)
        }
        Engine::Legacy => {
            info!("filtering with enumerated engine");
            enumerated_filter(&products, &criteria)?
        }
    };

    let matched = matches.len();
    if args.max_items > 0 {
        matches.truncate(args.max_items);
    }

    write_matches(&matches, args.output_format)?;

    Ok(RunSummary {
        scanned: products.len(),
        matched,
        output: matches.len(),
    })
}

/// The built-in sample catalog.
fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ]
}

/// Parse the raw `-f` arguments.
fn parse_criteria(raw: &[String]) -> Result<Vec<Criterion>> {
    raw.iter()
        .map(|input| {
            Criterion::parse(input).map_err(|e| anyhow::anyhow!("Invalid --filter: {}", e))
        })
        .collect()
}

/// Build the conjunction specification from parsed criteria.
///
/// No criteria produce an empty conjunction, which matches the whole
/// catalog.
fn build_spec(criteria: Vec<Criterion>) -> AndSpec {
    let mut spec = AndSpec::new();
    for criterion in criteria {
        spec.add_spec(criterion.into_spec());
    }
    spec
}

/// Route criteria through the enumerated filter.
///
/// Only single-value color and size criteria have a corresponding method;
/// anything else is rejected. The specification engine has no such limits,
/// which is the point of keeping this path around.
fn enumerated_filter<'a>(
    products: &'a [Product],
    criteria: &[Criterion],
) -> Result<Vec<&'a Product>> {
    let mut color: Option<Color> = None;
    let mut size: Option<Size> = None;

    for criterion in criteria {
        match criterion {
            Criterion::Color(values) => match (color, values.as_slice()) {
                (None, [value]) => color = Some(*value),
                (Some(_), _) => {
                    anyhow::bail!("the legacy engine accepts at most one color criterion")
                }
                _ => anyhow::bail!(
                    "the legacy engine has no method for multi-value criteria; use --engine spec"
                ),
            },
            Criterion::Size(values) => match (size, values.as_slice()) {
                (None, [value]) => size = Some(*value),
                (Some(_), _) => {
                    anyhow::bail!("the legacy engine accepts at most one size criterion")
                }
                _ => anyhow::bail!(
                    "the legacy engine has no method for multi-value criteria; use --engine spec"
                ),
            },
        }
    }

    let legacy = EnumeratedFilter::new();
    let matches = match (size, color) {
        (None, Some(color)) => legacy.by_color(products, color),
        (Some(size), None) => legacy.by_size(products, size),
        (Some(size), Some(color)) => legacy.by_size_and_color(products, size, color),
        (None, None) => {
            anyhow::bail!("the legacy engine requires at least one criterion; use --engine spec")
        }
    };

    Ok(matches)
}

/// Write matched products to stdout in the requested format.
fn write_matches(matches: &[&Product], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for product in matches {
                println!(" * {} ({}, {})", product.name, product.color, product.size);
            }
        }
        OutputFormat::Jsonl => {
            for product in matches {
                println!("{}", serde_json::to_string(product)?);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(raw: &[&str]) -> Vec<Criterion> {
        raw.iter().map(|r| Criterion::parse(r).unwrap()).collect()
    }

    fn names<'a>(matches: &'a [&'a Product]) -> Vec<&'a str> {
        matches.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_build_spec_description() {
        let spec = build_spec(criteria(&["color=green", "size=large"]));
        assert_eq!(spec.description(), "and(color(green) AND size(large))");
    }

    #[test]
    fn test_build_spec_no_criteria_matches_all() {
        let products = sample_catalog();
        let spec = build_spec(Vec::new());

        assert_eq!(filter::apply(&products, &spec).len(), products.len());
    }

    #[test]
    fn test_enumerated_filter_agrees_with_spec_engine() {
        let products = sample_catalog();
        let parsed = criteria(&["color=green", "size=large"]);

        let enumerated = enumerated_filter(&products, &parsed).unwrap();
        let spec_based = filter::apply(&products, &build_spec(parsed.clone()));

        assert_eq!(names(&enumerated), names(&spec_based));
        assert_eq!(names(&enumerated), ["Tree"]);
    }

    #[test]
    fn test_enumerated_filter_rejects_multi_value() {
        let products = sample_catalog();
        let parsed = criteria(&["color=green,blue"]);

        let err = enumerated_filter(&products, &parsed).unwrap_err();
        assert!(err.to_string().contains("multi-value"));
    }

    #[test]
    fn test_enumerated_filter_rejects_repeated_field() {
        let products = sample_catalog();
        let parsed = criteria(&["color=green", "color=blue"]);

        let err = enumerated_filter(&products, &parsed).unwrap_err();
        assert!(err.to_string().contains("at most one color"));
    }

    #[test]
    fn test_enumerated_filter_requires_criteria() {
        let products = sample_catalog();

        let err = enumerated_filter(&products, &[]).unwrap_err();
        assert!(err.to_string().contains("at least one criterion"));
    }

    #[test]
    fn test_parse_criteria_error_is_contextualized() {
        let err = parse_criteria(&["color".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid --filter"));
    }
}
