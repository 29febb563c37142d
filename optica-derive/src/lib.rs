//! Derive macros for optica.
//!
//! This crate generates the boilerplate that ties a user type to the optics
//! and the generic representation of the `optica` crate.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates lens methods for struct fields
//! - [`Prisms`]: Generates prism methods for enum variants
//! - [`Generic`]: Implements `optica::generic::Generic`
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use optica::Lenses;
//! use optica::optics::Lens;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> impl Lens<Point, i32>
//! // - Point::y_lens() -> impl Lens<Point, i32>
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(Point::x_lens().get(&point), 10);
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use optica::Prisms;
//! use optica::optics::Prism;
//!
//! #[derive(Clone, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_prism() -> impl Prism<Shape, f64>
//! // - Shape::rectangle_prism() -> impl Prism<Shape, (f64, f64)>
//!
//! assert_eq!(Shape::circle_prism().preview(Shape::Circle(5.0)), Some(5.0));
//! ```
//!
//! # Example: Generic
//!
//! ```rust,ignore
//! use optica::Generic;
//! use optica::generic::{And, Done, Generic as _};
//!
//! #[derive(Generic)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated:
//! // type Repr = And<i32, And<i32, Done>>;
//! // const SHAPE: Shape = Shape::product("Point", &["x", "y"]);
//!
//! let repr = Point { x: 1, y: 2 }.to_generic();
//! assert_eq!(repr.rest.value, 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod generic;
mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derive macro for generating Lens constructors for struct fields.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// Tuple structs get `field0_lens()`, `field1_lens()` and so on. A lens is
/// only callable when its field type implements `Clone`, because `get`
/// returns an owned value.
///
/// # Generics
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let lens = Container::<i32>::value_lens();
/// assert_eq!(lens.get(&Container { value: 42 }), 42);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro for generating Prism constructors for enum variants.
///
/// For each variant `FooBar`, generates `foo_bar_prism()`. Unit variants
/// focus on `()`, single-field variants on the field, and variants with
/// several fields on a tuple of them in declaration order.
///
/// # Example
///
/// ```rust,ignore
/// use optica::Prisms;
/// use optica::optics::Prism;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Event {
///     KeyPress(char),
///     Click { x: i32, y: i32 },
///     Quit,
/// }
///
/// let click = Event::click_prism();
/// assert_eq!(click.preview(Event::Click { x: 1, y: 2 }), Some((1, 2)));
/// assert_eq!(click.reverse_get((3, 4)), Event::Click { x: 3, y: 4 });
/// assert!(Event::quit_prism().is_match(&Event::Quit));
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}

/// Derive macro implementing `optica::generic::Generic`.
///
/// Named, tuple and unit structs become `And` chains of their fields; enums
/// become `Sum` chains of their variants in declaration order. The declared
/// field and case names are recorded in `SHAPE`.
///
/// # Example
///
/// ```rust,ignore
/// use optica::Generic;
/// use optica::generic::{Coproduct, Generic as _};
///
/// #[derive(Generic)]
/// enum Light {
///     Red,
///     Blinking(u8),
/// }
///
/// assert_eq!(Light::Blinking(2).to_generic().case_name(), "Blinking");
/// ```
#[proc_macro_derive(Generic)]
pub fn derive_generic(input: TokenStream) -> TokenStream {
    generic::derive_generic_impl(input)
}
