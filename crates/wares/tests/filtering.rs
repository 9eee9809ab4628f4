//! Cross-component filtering laws.
//!
//! These tests verify properties that span both engines: set laws of the
//! specification combinators and agreement between the enumerated filter
//! and the specification engine on equivalent queries.

use wares::filter::{self, AndSpec, ColorSpec, Criterion, EnumeratedFilter, SizeSpec};
use wares::product::{Color, Product, Size};

fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ]
}

fn names(matches: &[&Product]) -> Vec<String> {
    matches.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn conjunction_equals_intersection() {
    let products = sample_products();
    let by_color = ColorSpec::new(Color::Green);
    let by_size = SizeSpec::new(Size::Large);

    let both = AndSpec::new()
        .with_spec(Box::new(by_color))
        .with_spec(Box::new(by_size));
    let conjoined = filter::apply(&products, &both);

    // Order-preserving intersection of the two single-criterion results
    let color_matches = filter::apply(&products, &by_color);
    let intersection: Vec<&Product> = color_matches
        .into_iter()
        .filter(|p| filter::apply(&products, &by_size).contains(p))
        .collect();

    assert_eq!(names(&conjoined), names(&intersection));
    assert_eq!(names(&conjoined), ["Tree"]);
}

#[test]
fn filtering_is_idempotent() {
    let products = sample_products();
    let spec = ColorSpec::new(Color::Green);

    let once: Vec<Product> = filter::apply(&products, &spec)
        .into_iter()
        .cloned()
        .collect();
    let twice = filter::apply(&once, &spec);

    assert_eq!(names(&twice), ["Apple", "Tree"]);
    assert_eq!(twice.len(), once.len());
}

#[test]
fn engines_agree_on_single_criterion() {
    let products = sample_products();

    let enumerated = EnumeratedFilter::new().by_color(&products, Color::Green);
    let spec_based = filter::apply(&products, &ColorSpec::new(Color::Green));

    assert_eq!(names(&enumerated), names(&spec_based));
    assert_eq!(names(&spec_based), ["Apple", "Tree"]);
}

#[test]
fn engines_agree_on_two_criteria() {
    let products = sample_products();

    let enumerated = EnumeratedFilter::new().by_size_and_color(&products, Size::Large, Color::Green);
    let both = AndSpec::new()
        .with_spec(Box::new(SizeSpec::new(Size::Large)))
        .with_spec(Box::new(ColorSpec::new(Color::Green)));
    let spec_based = filter::apply(&products, &both);

    assert_eq!(names(&enumerated), names(&spec_based));
    assert_eq!(names(&spec_based), ["Tree"]);
}

#[test]
fn criteria_compose_end_to_end() {
    let products = sample_products();

    // The same query a CLI invocation would build from
    // `-f color=green -f size=large`
    let mut spec = AndSpec::new();
    for raw in ["color=green", "size=large"] {
        spec.add_spec(Criterion::parse(raw).unwrap().into_spec());
    }

    assert_eq!(names(&filter::apply(&products, &spec)), ["Tree"]);
}

#[test]
fn multi_value_criterion_widens_the_match() {
    let products = sample_products();

    let spec = Criterion::parse("color=green,blue").unwrap().into_spec();
    let matches = filter::apply(&products, spec.as_ref());

    assert_eq!(names(&matches), ["Apple", "Tree", "House"]);
}

#[test]
fn empty_input_yields_empty_output() {
    let spec = AndSpec::new().with_spec(Box::new(ColorSpec::new(Color::Green)));
    assert!(filter::apply(&[], &spec).is_empty());
}
