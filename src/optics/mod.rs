//! Optics for immutable data manipulation.
//!
//! Optics are composable, law-abiding accessor/mutator pairs that focus on a
//! part of a larger structure. Every optic here is an immutable value: using
//! one never mutates its source, it hands back a rebuilt copy.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Iso <: Lens <: Optional <: Traversal
//! Iso <: Prism <: Optional
//! ```
//!
//! - [`Iso`]: Lossless conversion between two types
//! - [`Lens`]: Mandatory single focus
//! - [`Prism`]: One case of a sum type, rebuildable from the focus
//! - [`Optional`]: Focus that may be absent
//! - [`Traversal`]: Zero or more foci, visited in structural order
//!
//! Composing two optics yields the weakest of the two kinds:
//!
//! | `compose` | Iso | Lens | Prism | Optional | Traversal |
//! |---|---|---|---|---|---|
//! | **Iso** | Iso | Lens | Prism | Optional | Traversal |
//! | **Lens** | Lens | Lens | Optional | Optional | Traversal |
//! | **Prism** | Prism | Optional | Prism | Optional | Traversal |
//! | **Optional** | Optional | Optional | Optional | Optional | Traversal |
//! | **Traversal** | Traversal | Traversal | Traversal | Traversal | Traversal |
//!
//! # Example
//!
//! ```
//! use optica::optics::{Each, Lens, Traversal};
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, addresses: Vec<Address> }
//!
//! let cities = lens!(Person, addresses)
//!     .compose_traversal(Vec::<Address>::each())
//!     .compose_lens(lens!(Address, city));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     addresses: vec![
//!         Address { street: "Main St".to_string(), city: "Tokyo".to_string() },
//!         Address { street: "Oak Ave".to_string(), city: "Osaka".to_string() },
//!     ],
//! };
//!
//! assert_eq!(cities.get_all(person.clone()), vec!["Tokyo", "Osaka"]);
//!
//! let shouting = cities.modify(person, |city| city.to_uppercase());
//! assert_eq!(shouting.addresses[1].city, "OSAKA");
//! assert_eq!(shouting.addresses[1].street, "Oak Ave");
//! ```

/// Declares a stateless optic: a unit-like struct that only carries type
/// parameters.
macro_rules! stateless_optic {
    ($(#[$meta:meta])* $name:ident<$($parameter:ident),+>) => {
        $(#[$meta])*
        pub struct $name<$($parameter),+> {
            _marker: ::std::marker::PhantomData<fn() -> ($($parameter,)+)>,
        }

        impl<$($parameter),+> $name<$($parameter),+> {
            #[doc = concat!("Creates a new `", stringify!($name), "`.")]
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    _marker: ::std::marker::PhantomData,
                }
            }
        }

        impl<$($parameter),+> Default for $name<$($parameter),+> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$($parameter),+> Clone for $name<$($parameter),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($parameter),+> Copy for $name<$($parameter),+> {}

        impl<$($parameter),+> ::std::fmt::Debug for $name<$($parameter),+> {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter.write_str(stringify!($name))
            }
        }
    };
}

/// Declares an optic parameterised by a single runtime value (an index, a key
/// or a predicate) plus phantom type parameters.
macro_rules! keyed_optic {
    (
        $(#[$meta:meta])*
        $name:ident<$($parameter:ident),+> { $field:ident: $field_type:ty }
    ) => {
        $(#[$meta])*
        pub struct $name<$($parameter),+> {
            $field: $field_type,
            _marker: ::std::marker::PhantomData<fn() -> ($($parameter,)+)>,
        }

        impl<$($parameter),+> $name<$($parameter),+> {
            #[doc = concat!("Creates a new `", stringify!($name), "`.")]
            #[must_use]
            pub const fn new($field: $field_type) -> Self {
                Self {
                    $field,
                    _marker: ::std::marker::PhantomData,
                }
            }
        }

        impl<$($parameter),+> Clone for $name<$($parameter),+>
        where
            $field_type: Clone,
        {
            fn clone(&self) -> Self {
                Self::new(self.$field.clone())
            }
        }

        impl<$($parameter),+> ::std::fmt::Debug for $name<$($parameter),+>
        where
            $field_type: ::std::fmt::Debug,
        {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    .field(stringify!($field), &self.$field)
                    .finish()
            }
        }
    };
}

mod at;
mod cons;
mod each;
mod filter_index;
mod index;
mod iso;
mod lens;
mod optional;
mod prism;
mod regex;
mod snoc;
mod standard_optics;
mod traversal;

pub use at::{At, BTreeMapAt, BTreeSetAt, HashMapAt, HashSetAt, at};
pub use cons::{Cons, StringCons, VecCons};
pub use each::{
    BTreeMapEach, Each, EitherEach, HashMapEach, OptionEach, ResultEach, StringEach, VecEach, each,
};
pub use filter_index::{
    BTreeMapFilterIndex, FilterIndex, HashMapFilterIndex, StringFilterIndex, VecFilterIndex,
    filter_index,
};
pub use index::{BTreeMapIndex, HashMapIndex, Index, StringIndex, VecIndex, index};
pub use iso::{ComposedIso, FunctionIso, Iso, IsoAsLens, IsoAsPrism, ReversedIso};
pub use lens::{ChoiceLens, ComposedLens, FunctionLens, Lens, LensFirst, LensSecond, SplitLens};
pub use optional::{
    ChoiceOptional, ComposedOptional, FunctionOptional, LensAsOptional, Optional, OptionalFirst,
    OptionalSecond, PrismAsOptional,
};
pub use prism::{
    ComposedPrism, FunctionPrism, Prism, PrismFirst, PrismLeft, PrismRight, PrismSecond,
};
pub use regex::{OnceOrMore, ZeroOrMore, once_or_more, zero_or_more};
pub use snoc::{Snoc, StringSnoc, VecSnoc};
pub use standard_optics::{
    both, codiagonal, codiagonal_traversal, err_prism, filter_optional, first_lens,
    from_lenses, identity_iso, identity_lens, identity_traversal, left_prism, ok_prism, only,
    right_prism, second_lens, some_prism, swap_iso, void_optional, void_traversal,
};
pub use traversal::{
    ChoiceTraversal, ComposedTraversal, FilteredTraversal, LensAsTraversal, OptionalAsTraversal,
    PrismAsTraversal, Traversal,
};
