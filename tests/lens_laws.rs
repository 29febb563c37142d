//! Property-based tests for Lens laws.
//!
//! - **GetSet**: `lens.set(source, lens.get(&source)) == source`
//! - **SetGet**: `lens.get(&lens.set(source, value)) == value`
//! - **SetSet**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//! - **Modify identity**: `lens.modify(source, |a| a) == source`
//! - **Modify composition**: `modify(modify(s, f), g) == modify(s, |a| g(f(a)))`
//!
//! Composed lenses, derived lenses and container lenses are checked the same
//! way as hand-written ones.

use optica::lens;
use optica::optics::{At, Lens, first_lens, identity_lens};
use proptest::prelude::*;
use std::collections::BTreeMap;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Address {
    street: String,
    zip: u32,
}

#[derive(Clone, PartialEq, Debug)]
struct Person {
    name: String,
    address: Address,
}

fn person_strategy() -> impl Strategy<Value = Person> {
    ("[a-z]{0,8}", "[a-z ]{0,12}", any::<u32>()).prop_map(|(name, street, zip)| Person {
        name,
        address: Address { street, zip },
    })
}

// =============================================================================
// Field lens
// =============================================================================

proptest! {
    #[test]
    fn prop_field_get_set_law(person in person_strategy()) {
        let name = lens!(Person, name);
        let value = name.get(&person);
        prop_assert_eq!(name.set(person.clone(), value), person);
    }

    #[test]
    fn prop_field_set_get_law(person in person_strategy(), value in "[a-z]{0,8}") {
        let name = lens!(Person, name);
        prop_assert_eq!(name.get(&name.set(person, value.clone())), value);
    }

    #[test]
    fn prop_field_set_set_law(
        person in person_strategy(),
        first in "[a-z]{0,8}",
        second in "[a-z]{0,8}",
    ) {
        let name = lens!(Person, name);
        let left = name.set(name.set(person.clone(), first), second.clone());
        prop_assert_eq!(left, name.set(person, second));
    }
}

// =============================================================================
// Composed lens
// =============================================================================

proptest! {
    #[test]
    fn prop_composed_get_set_law(person in person_strategy()) {
        let zip = lens!(Person, address).compose(lens!(Address, zip));
        let value = zip.get(&person);
        prop_assert_eq!(zip.set(person.clone(), value), person);
    }

    #[test]
    fn prop_composed_set_get_law(person in person_strategy(), value in any::<u32>()) {
        let zip = lens!(Person, address).compose(lens!(Address, zip));
        let updated = zip.set(person.clone(), value);
        prop_assert_eq!(zip.get(&updated), value);
        prop_assert_eq!(updated.name, person.name);
        prop_assert_eq!(updated.address.street, person.address.street);
    }

    #[test]
    fn prop_composed_set_set_law(person in person_strategy(), first in any::<u32>(), second in any::<u32>()) {
        let zip = lens!(Person, address).compose(lens!(Address, zip));
        let left = zip.set(zip.set(person.clone(), first), second);
        prop_assert_eq!(left, zip.set(person, second));
    }

    #[test]
    fn prop_composed_modify_composition_law(person in person_strategy()) {
        let zip = lens!(Person, address).compose(lens!(Address, zip));
        let f = |zip: u32| zip.wrapping_add(7);
        let g = |zip: u32| zip.wrapping_mul(3);
        let left = zip.modify(zip.modify(person.clone(), f), g);
        prop_assert_eq!(left, zip.modify(person, |value| g(f(value))));
    }

    #[test]
    fn prop_composed_modify_identity_law(person in person_strategy()) {
        let street = lens!(Person, address).compose(lens!(Address, street));
        prop_assert_eq!(street.modify(person.clone(), |value| value), person);
    }

    /// Composition is associative.
    #[test]
    fn prop_compose_associativity(person in person_strategy(), value in any::<u32>()) {
        let left = lens!(Person, address)
            .compose(lens!(Address, zip))
            .compose(identity_lens::<u32>());
        let right = lens!(Person, address)
            .compose(lens!(Address, zip).compose(identity_lens::<u32>()));
        prop_assert_eq!(left.get(&person), right.get(&person));
        prop_assert_eq!(left.set(person.clone(), value), right.set(person, value));
    }

    /// The identity lens is a unit for composition.
    #[test]
    fn prop_compose_identity(person in person_strategy(), value in any::<u32>()) {
        let zip = lens!(Person, address).compose(lens!(Address, zip));
        let with_identity = identity_lens::<Person>().compose(zip.clone());
        prop_assert_eq!(with_identity.get(&person), zip.get(&person));
        prop_assert_eq!(with_identity.set(person.clone(), value), zip.set(person, value));
    }
}

// =============================================================================
// Standard and container lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_first_lens_laws(pair in (any::<i16>(), "[a-z]{0,4}"), value in any::<i16>()) {
        let first = first_lens::<i16, String>();
        prop_assert_eq!(first.set(pair.clone(), first.get(&pair)), pair.clone());
        prop_assert_eq!(first.get(&first.set(pair, value)), value);
    }

    #[test]
    fn prop_map_at_laws(
        map in prop::collection::btree_map(0u8..16, any::<i32>(), 0..8),
        key in 0u8..16,
        value in prop::option::of(any::<i32>()),
    ) {
        let at = BTreeMap::<u8, i32>::at(key);
        prop_assert_eq!(at.set(map.clone(), at.get(&map)), map.clone());
        prop_assert_eq!(at.get(&at.set(map.clone(), value)), value);
        let twice = at.set(at.set(map.clone(), Some(1)), value);
        prop_assert_eq!(twice, at.set(map, value));
    }
}
