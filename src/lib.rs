//! # optica
//!
//! Composable, law-abiding optics for immutable data.
//!
//! ## Overview
//!
//! An optic is a first-class value that focuses on a part of a larger
//! structure, so the part can be read or rebuilt without hand-written
//! destructuring. This crate provides:
//!
//! - **Optics**: [`Iso`](optics::Iso), [`Lens`](optics::Lens),
//!   [`Prism`](optics::Prism), [`Optional`](optics::Optional) and
//!   [`Traversal`](optics::Traversal), with cross-kind composition
//! - **Container instances**: `Cons`, `Snoc`, `Index`, `At`, `Each` and
//!   `FilterIndex` for the standard collections
//! - **Regex-style combinators**: `zero_or_more` and `once_or_more` over
//!   recursive structures
//! - **Effects**: the applicative brands that `Traversal::traverse` runs in
//! - **Generic representation**: a sum-of-products encoding of user types,
//!   with `#[derive(Generic)]`, `#[derive(Lenses)]` and `#[derive(Prisms)]`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Effect brands and algebraic structures
//! - `control`: The `Either` type
//! - `optics`: Optics and container instances
//! - `generic`: The generic representation
//! - `derive`: Derive macros (re-exported from `optica-derive`)
//! - `serde`: `Serialize`/`Deserialize` for the value types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optica::prelude::*;
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Order { lines: Vec<Line> }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Line { sku: String, quantity: u32 }
//!
//! let quantities = lens!(Order, lines)
//!     .compose_traversal(Vec::<Line>::each())
//!     .compose_lens(lens!(Line, quantity));
//!
//! let order = Order {
//!     lines: vec![
//!         Line { sku: "a".to_string(), quantity: 1 },
//!         Line { sku: "b".to_string(), quantity: 2 },
//!     ],
//! };
//!
//! assert_eq!(quantities.fold_map(order.clone(), Sum), Sum(3));
//! assert_eq!(quantities.modify(order, |q| q * 2).lines[1].quantity, 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the optic traits, the container instances, the standard optics
/// and the effect brands.
///
/// # Usage
///
/// ```rust
/// use optica::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "generic")]
    pub use crate::generic::{Generic, generic_iso};

    #[cfg(feature = "derive")]
    pub use optica_derive::{Generic, Lenses, Prisms};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "generic")]
pub mod generic;

#[cfg(feature = "derive")]
pub use optica_derive::{Generic, Lenses, Prisms};

#[cfg(feature = "optics")]
mod thread_safety {
    use static_assertions::assert_impl_all;
    use std::collections::hash_map::RandomState;

    use crate::optics::{
        BTreeMapAt, BTreeMapEach, HashMapIndex, OptionEach, StringCons, StringEach, VecEach,
        VecIndex, VecSnoc, ZeroOrMore,
    };

    assert_impl_all!(VecEach<String>: Send, Sync, Copy);
    assert_impl_all!(OptionEach<String>: Send, Sync, Copy);
    assert_impl_all!(StringEach: Send, Sync, Copy);
    assert_impl_all!(BTreeMapEach<String, Vec<u8>>: Send, Sync);
    assert_impl_all!(VecIndex<String>: Send, Sync, Clone);
    assert_impl_all!(HashMapIndex<String, u8, RandomState>: Send, Sync);
    assert_impl_all!(BTreeMapAt<String, u8>: Send, Sync, Clone);
    assert_impl_all!(StringCons: Send, Sync);
    assert_impl_all!(VecSnoc<String>: Send, Sync);
    assert_impl_all!(ZeroOrMore<VecEach<String>>: Send, Sync, Clone);

    // The phantom markers never make an optic thread-bound.
    assert_impl_all!(VecEach<std::rc::Rc<u8>>: Send, Sync);
}
