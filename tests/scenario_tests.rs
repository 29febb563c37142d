//! End-to-end scenarios mixing every kind of optic.

use optica::control::Either;
use optica::lens;
use optica::optics::{
    Each, Lens, Optional, Prism, Traversal, filter_optional, first_lens, left_prism, some_prism,
    zero_or_more,
};
use optica::prism;
use optica::typeclass::{EitherEffect, Sum};
use optica::{Lenses, Prisms};
use rstest::rstest;

// =============================================================================
// Nested records
// =============================================================================

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Street {
    number: u32,
    name: String,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Address {
    city: String,
    street: Street,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Company {
    name: String,
    address: Address,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Employee {
    name: String,
    company: Company,
}

fn employee() -> Employee {
    Employee {
        name: "john".to_string(),
        company: Company {
            name: "awesome inc".to_string(),
            address: Address {
                city: "london".to_string(),
                street: Street {
                    number: 42,
                    name: "lambda street".to_string(),
                },
            },
        },
    }
}

#[rstest]
fn test_four_composed_lenses_change_only_the_focus() {
    let street_name = Employee::company_lens()
        .compose(Company::address_lens())
        .compose(Address::street_lens())
        .compose(Street::name_lens());

    let updated = street_name.modify(employee(), |name| name.to_uppercase());

    let mut expected = employee();
    expected.company.address.street.name = "LAMBDA STREET".to_string();
    assert_eq!(updated, expected);
}

// =============================================================================
// Optional elements
// =============================================================================

#[rstest]
fn test_each_then_some_skips_absent_elements() {
    let present = Vec::<Option<i32>>::each().compose_prism(some_prism::<i32>());
    assert_eq!(
        present.modify(vec![Some(2), None, Some(3)], |x| x * 3),
        vec![Some(6), None, Some(9)]
    );
    assert_eq!(present.length(vec![Some(2), None, Some(3)]), 2);
}

// =============================================================================
// Sum types
// =============================================================================

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Sample {
    A(i32),
    B(String),
}

#[rstest]
#[case(Sample::A(5), Either::Right(5))]
#[case(Sample::B("hi".to_string()), Either::Left(Sample::B("hi".to_string())))]
fn test_prism_returns_the_original_on_mismatch(
    #[case] sample: Sample,
    #[case] expected: Either<Sample, i32>,
) {
    assert_eq!(Sample::a_prism().get_or_modify(sample), expected);
}

#[rstest]
fn test_prism_macro_matches_derived_prism() {
    let by_macro = prism!(Sample, B);
    let derived = Sample::b_prism();
    let sample = Sample::B("x".to_string());
    assert_eq!(by_macro.preview(sample.clone()), derived.preview(sample));
}

// =============================================================================
// Filtered optionals
// =============================================================================

#[rstest]
#[case((2, String::new()), (6, String::new()))]
#[case((3, String::new()), (3, String::new()))]
fn test_even_first_component(#[case] pair: (i32, String), #[case] expected: (i32, String)) {
    let even_first = first_lens::<i32, String>().compose_optional(filter_optional(|x: &i32| x % 2 == 0));
    assert_eq!(even_first.modify(pair, |x| x * 3), expected);
}

#[rstest]
fn test_filtered_traversal_leaves_other_elements() {
    let even = Vec::<i32>::each().filtered(|x: &i32| x % 2 == 0);
    assert_eq!(even.modify(vec![1, 2, 3, 4], |x| x * 10), vec![1, 20, 3, 40]);
    assert_eq!(even.fold_map(vec![1, 2, 3, 4], Sum), Sum(6));
}

// =============================================================================
// Repetition
// =============================================================================

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Nested {
    Wrapped(Box<Nested>),
    Value(i32),
}

#[rstest]
fn test_zero_or_more_on_a_terminating_structure_is_identity() {
    let unwrap = Nested::wrapped_prism()
        .compose_iso(optica::iso!(|boxed: Box<Nested>| *boxed, |nested: Nested| Box::new(nested)))
        .to_traversal();
    let innermost = zero_or_more(unwrap);

    assert_eq!(innermost.modify(Nested::Value(1), |n| n), Nested::Value(1));
    assert_eq!(Nested::value_prism().preview(Nested::Value(1)), Some(1));
    assert_eq!(
        innermost.modify(Nested::Wrapped(Box::new(Nested::Wrapped(Box::new(Nested::Value(1))))), |_| {
            Nested::Value(9)
        }),
        Nested::Wrapped(Box::new(Nested::Wrapped(Box::new(Nested::Value(9)))))
    );
}

// =============================================================================
// Effects
// =============================================================================

#[rstest]
fn test_either_effect_stops_at_the_first_left() {
    let names = lens!(Company, name).to_traversal();
    let validated = names.traverse::<EitherEffect<String>, _>(employee().company, |name| {
        if name.is_empty() {
            Either::Left("empty name".to_string())
        } else {
            Either::Right(name)
        }
    });
    assert!(validated.is_right());

    let inputs: Vec<Either<&str, i32>> = vec![Either::Right(1), Either::Left("x"), Either::Left("y")];
    let lefts = Vec::<Either<&str, i32>>::each().compose_prism(left_prism::<&str, i32>());
    assert_eq!(lefts.head_option(inputs), Some("x"));
}

#[rstest]
fn test_traverse_result_reports_the_leftmost_error() {
    let parsed = Vec::<String>::each().traverse_result(
        vec!["1".to_string(), "x".to_string(), "y".to_string()],
        |text| text.parse::<i32>().map(|n| (n * 2).to_string()).map_err(|_| text),
    );
    assert_eq!(parsed, Err("x".to_string()));
}
