//! Property-based tests for Iso laws.
//!
//! - **Round trip**: `iso.reverse_get(iso.get(s)) == s`
//! - **Reverse round trip**: `iso.get(iso.reverse_get(a)) == a`
//! - **Reverse**: `iso.reverse()` swaps both directions
//! - **Generic**: `generic_iso` is an isomorphism for every derived type

use optica::Generic;
use optica::generic::generic_iso;
use optica::iso;
use optica::optics::{Iso, Lens, identity_iso, swap_iso};
use proptest::prelude::*;

// =============================================================================
// Test data types
// =============================================================================

#[derive(Clone, PartialEq, Debug, Generic)]
struct Celsius(i32);

#[derive(Clone, PartialEq, Debug, Generic)]
struct Reading {
    sensor: String,
    value: Celsius,
}

#[derive(Clone, PartialEq, Debug, Generic)]
enum Status {
    Idle,
    Busy { job: u32, retries: u8 },
    Failed(String),
}

fn status_strategy() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Idle),
        (any::<u32>(), any::<u8>()).prop_map(|(job, retries)| Status::Busy { job, retries }),
        "[a-z]{0,6}".prop_map(Status::Failed),
    ]
}

// =============================================================================
// Hand-written isos
// =============================================================================

proptest! {
    #[test]
    fn prop_macro_iso_round_trips(value in any::<i32>()) {
        let wrapped = iso!(|celsius: Celsius| celsius.0, Celsius);
        prop_assert_eq!(wrapped.get(wrapped.reverse_get(value)), value);
        prop_assert_eq!(wrapped.reverse_get(wrapped.get(Celsius(value))), Celsius(value));
    }

    #[test]
    fn prop_swap_iso_round_trips(pair in (any::<i8>(), "[a-z]{0,4}")) {
        let swap = swap_iso::<i8, String>();
        prop_assert_eq!(swap.reverse_get(swap.get(pair.clone())), pair);
    }

    #[test]
    fn prop_reverse_swaps_directions(pair in (any::<i8>(), any::<bool>())) {
        let swap = swap_iso::<i8, bool>();
        let reversed = swap.clone().reverse();
        prop_assert_eq!(reversed.get((pair.1, pair.0)), swap.reverse_get((pair.1, pair.0)));
        prop_assert_eq!(reversed.reverse_get(pair), swap.get(pair));
    }

    #[test]
    fn prop_compose_with_identity(pair in (any::<i8>(), any::<bool>())) {
        let swap = swap_iso::<i8, bool>();
        let composed = identity_iso::<(i8, bool)>().compose(swap.clone());
        prop_assert_eq!(composed.get(pair), swap.get(pair));
    }

    #[test]
    fn prop_iso_as_lens_obeys_set_get(value in any::<i32>(), start in any::<i32>()) {
        let lens = iso!(|celsius: Celsius| celsius.0, Celsius).to_lens();
        prop_assert_eq!(lens.get(&lens.set(Celsius(start), value)), value);
    }
}

// =============================================================================
// Generic isos
// =============================================================================

proptest! {
    #[test]
    fn prop_generic_product_round_trips(sensor in "[a-z]{0,6}", value in any::<i32>()) {
        let reading = Reading { sensor, value: Celsius(value) };
        let iso = generic_iso::<Reading>();
        prop_assert_eq!(iso.reverse_get(iso.get(reading.clone())), reading);
    }

    #[test]
    fn prop_generic_sum_round_trips(status in status_strategy()) {
        let iso = generic_iso::<Status>();
        prop_assert_eq!(iso.reverse_get(iso.get(status.clone())), status);
    }

    #[test]
    fn prop_generic_representation_round_trips(status in status_strategy()) {
        let iso = generic_iso::<Status>();
        let repr = iso.get(status);
        prop_assert_eq!(iso.get(iso.reverse_get(repr.clone())), repr);
    }
}
