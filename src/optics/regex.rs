//! Regex-style repetition over recursive structures.
//!
//! [`zero_or_more`] and [`once_or_more`] turn a traversal `inner: A -> A` that
//! steps one level down a recursive structure into a traversal that keeps
//! stepping down until `inner` finds nothing more, focusing the nodes where
//! the descent stops. They behave like the `*` and `+` operators of a regular
//! expression, applied to structural depth.
//!
//! # Termination
//!
//! Each step must strictly decrease the structural depth of the value it is
//! applied to. A traversal that can focus a value at least as deep as its
//! source (for example [`identity_traversal`](super::identity_traversal))
//! never bottoms out, and the descent does not terminate. This is not checked
//! at runtime.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{zero_or_more, Each, Traversal};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Tree {
//!     Leaf(i32),
//!     Node(Vec<Tree>),
//! }
//!
//! // One level down: the children of a node.
//! let children = optica::optics::FunctionOptional::new(
//!     |tree: &Tree| match tree {
//!         Tree::Node(children) => Some(children.clone()),
//!         Tree::Leaf(_) => None,
//!     },
//!     |tree: Tree, children: Vec<Tree>| match tree {
//!         Tree::Node(_) => Tree::Node(children),
//!         leaf => leaf,
//!     },
//! );
//! let step = optica::optics::Optional::compose_traversal(children, Vec::<Tree>::each());
//!
//! let leaves = zero_or_more(step);
//! let tree = Tree::Node(vec![Tree::Leaf(1), Tree::Node(vec![Tree::Leaf(2), Tree::Leaf(3)])]);
//!
//! assert_eq!(
//!     leaves.get_all(tree),
//!     vec![Tree::Leaf(1), Tree::Leaf(2), Tree::Leaf(3)]
//! );
//! ```

use std::marker::PhantomData;

use super::traversal::Traversal;
use crate::typeclass::{Applicative, Functor, TypeConstructor};

/// Repeats `inner` until it finds no focus, focusing every node where the
/// descent stops. A value on which `inner` finds nothing is focused itself.
#[must_use]
pub const fn zero_or_more<T>(inner: T) -> ZeroOrMore<T> {
    ZeroOrMore { inner }
}

/// Like [`zero_or_more`], but `inner` must find at least one focus at the top
/// level. When it does not, the traversal is empty and leaves the source
/// unchanged.
#[must_use]
pub const fn once_or_more<T>(inner: T) -> OnceOrMore<T> {
    OnceOrMore { inner }
}

/// The traversal returned by [`zero_or_more`].
#[derive(Debug, Clone)]
pub struct ZeroOrMore<T> {
    inner: T,
}

/// The traversal returned by [`once_or_more`].
#[derive(Debug, Clone)]
pub struct OnceOrMore<T> {
    inner: T,
}

impl<A, T> Traversal<A, A> for ZeroOrMore<T>
where
    T: Traversal<A, A>,
{
    fn traverse<F, Function>(&self, source: A, mut function: Function) -> F::WithType<A>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>,
    {
        descend::<A, T, F>(&self.inner, source, &mut function, 0)
    }
}

impl<A, T> Traversal<A, A> for OnceOrMore<T>
where
    T: Traversal<A, A>,
{
    fn traverse<F, Function>(&self, source: A, mut function: Function) -> F::WithType<A>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>,
    {
        let stepped = self.inner.traverse::<Deferred<F>, _>(source, |child| {
            Step::Visited(descend::<A, T, F>(&self.inner, child, &mut function, 1))
        });
        match stepped {
            Step::Unvisited(source) => {
                tracing::trace!("once_or_more: no match at the top level");
                F::pure(source)
            }
            Step::Visited(rebuilt) => rebuilt,
        }
    }
}

/// Applies `function` where `inner` bottoms out, below `source`.
///
/// Each level is traversed once: `inner` runs under [`Deferred`], so a node
/// without children comes back untouched and is handed to `function`.
///
/// `function` is a trait object so that the recursion instantiates a single
/// copy of this function per effect.
fn descend<A, T, F>(
    inner: &T,
    source: A,
    function: &mut dyn FnMut(A) -> F::WithType<A>,
    depth: usize,
) -> F::WithType<A>
where
    T: Traversal<A, A>,
    F: Applicative,
{
    let stepped = inner.traverse::<Deferred<F>, _>(source, |child| {
        Step::Visited(descend::<A, T, F>(inner, child, &mut *function, depth + 1))
    });
    match stepped {
        Step::Unvisited(source) => {
            tracing::trace!(depth, "descent stopped");
            function(source)
        }
        Step::Visited(rebuilt) => rebuilt,
    }
}

/// The carrier of [`Deferred`]: a value no focus has touched yet, or the
/// effect of `F` once one has.
enum Step<A, E> {
    Unvisited(A),
    Visited(E),
}

/// Brand that postpones `F` until the first focus.
///
/// `pure` stays [`Step::Unvisited`], so a traversal that finds nothing returns
/// its source without running any effect of `F`.
struct Deferred<F>(PhantomData<fn() -> F>);

impl<F: TypeConstructor> TypeConstructor for Deferred<F> {
    type WithType<A> = Step<A, F::WithType<A>>;
}

impl<F: Functor> Functor for Deferred<F> {
    fn fmap<A, B, G>(fa: Step<A, F::WithType<A>>, function: G) -> Step<B, F::WithType<B>>
    where
        G: FnOnce(A) -> B,
    {
        match fa {
            Step::Unvisited(value) => Step::Unvisited(function(value)),
            Step::Visited(effect) => Step::Visited(F::fmap(effect, function)),
        }
    }
}

impl<F: Applicative> Applicative for Deferred<F> {
    fn pure<A>(value: A) -> Step<A, F::WithType<A>> {
        Step::Unvisited(value)
    }

    fn map2<A, B, C, G>(
        fa: Step<A, F::WithType<A>>,
        fb: Step<B, F::WithType<B>>,
        function: G,
    ) -> Step<C, F::WithType<C>>
    where
        G: FnOnce(A, B) -> C,
    {
        match (fa, fb) {
            (Step::Unvisited(a), Step::Unvisited(b)) => Step::Unvisited(function(a, b)),
            (Step::Unvisited(a), Step::Visited(fb)) => {
                Step::Visited(F::fmap(fb, move |b| function(a, b)))
            }
            (Step::Visited(fa), Step::Unvisited(b)) => {
                Step::Visited(F::fmap(fa, move |a| function(a, b)))
            }
            (Step::Visited(fa), Step::Visited(fb)) => Step::Visited(F::map2(fa, fb, function)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{Each, FunctionOptional, Optional, void_traversal};
    use crate::typeclass::{OptionEffect, WriterEffect};
    use rstest::rstest;
    use std::cell::Cell;

    #[derive(Clone, PartialEq, Debug)]
    enum Node {
        More(Vec<Node>),
        Value(i32),
    }

    fn more() -> impl Traversal<Node, Node> + Clone {
        FunctionOptional::new(
            |node: &Node| match node {
                Node::More(children) => Some(children.clone()),
                Node::Value(_) => None,
            },
            |node: Node, children: Vec<Node>| match node {
                Node::More(_) => Node::More(children),
                value @ Node::Value(_) => value,
            },
        )
        .compose_traversal(Vec::<Node>::each())
    }

    fn sample() -> Node {
        Node::More(vec![
            Node::Value(1),
            Node::More(vec![Node::More(vec![Node::Value(2)]), Node::Value(3)]),
        ])
    }

    #[test]
    fn zero_or_more_focuses_the_bottom_nodes_in_order() {
        let values: Vec<Node> = zero_or_more(more()).get_all(sample());
        assert_eq!(
            values,
            vec![Node::Value(1), Node::Value(2), Node::Value(3)]
        );
    }

    #[test]
    fn zero_or_more_modifies_in_place() {
        let doubled = zero_or_more(more()).modify(sample(), |node| match node {
            Node::Value(value) => Node::Value(value * 2),
            other => other,
        });
        assert_eq!(
            zero_or_more(more()).get_all(doubled),
            vec![Node::Value(2), Node::Value(4), Node::Value(6)]
        );
    }

    #[test]
    fn zero_or_more_without_match_is_identity() {
        let leaf = Node::Value(5);
        assert_eq!(zero_or_more(more()).get_all(leaf.clone()), vec![leaf]);
    }

    #[test]
    fn zero_or_more_with_empty_children_focuses_the_empty_node() {
        let empty = Node::More(vec![]);
        assert_eq!(zero_or_more(more()).get_all(empty.clone()), vec![empty]);
    }

    #[rstest]
    #[case(Node::Value(5), 0)]
    #[case(sample(), 3)]
    fn once_or_more_requires_a_top_level_match(#[case] input: Node, #[case] expected: usize) {
        assert_eq!(once_or_more(more()).length(input), expected);
    }

    #[test]
    fn once_or_more_without_match_leaves_source_unchanged() {
        let leaf = Node::Value(5);
        assert_eq!(
            once_or_more(more()).modify(leaf.clone(), |_| Node::Value(0)),
            leaf
        );
    }

    #[test]
    fn void_inner_behaves_like_identity_and_empty() {
        assert_eq!(zero_or_more(void_traversal::<i32, i32>()).get_all(4), vec![4]);
        assert!(once_or_more(void_traversal::<i32, i32>()).is_empty(4));
    }

    #[test]
    fn effects_follow_structural_order() {
        let (log, _) = zero_or_more(more()).traverse::<WriterEffect<Vec<i32>>, _>(
            sample(),
            |node| {
                let value = match &node {
                    Node::Value(value) => *value,
                    Node::More(_) => -1,
                };
                (vec![value], node)
            },
        );
        assert_eq!(log, vec![1, 2, 3]);
    }

    #[test]
    fn composes_behind_an_outer_traversal() {
        let forest = Vec::<Node>::each().compose(zero_or_more(more()));
        assert_eq!(
            forest.get_all(vec![Node::Value(0), sample()]),
            vec![
                Node::Value(0),
                Node::Value(1),
                Node::Value(2),
                Node::Value(3)
            ]
        );
    }

    thread_local! {
        static CLONES: Cell<usize> = const { Cell::new(0) };
        static STEPS: Cell<usize> = const { Cell::new(0) };
    }

    fn reset_counters() {
        CLONES.with(|clones| clones.set(0));
        STEPS.with(|steps| steps.set(0));
    }

    fn counters() -> (usize, usize) {
        (CLONES.with(Cell::get), STEPS.with(Cell::get))
    }

    #[derive(PartialEq, Debug)]
    enum Chain {
        Link(Box<Chain>),
        End(i32),
    }

    impl Clone for Chain {
        fn clone(&self) -> Self {
            CLONES.with(|clones| clones.set(clones.get() + 1));
            match self {
                Self::Link(next) => Self::Link(next.clone()),
                Self::End(value) => Self::End(*value),
            }
        }
    }

    fn chain(depth: usize) -> Chain {
        (0..depth).fold(Chain::End(0), |next, _| Chain::Link(Box::new(next)))
    }

    /// One link down, moving the tail instead of copying it.
    struct Unlink;

    impl Traversal<Chain, Chain> for Unlink {
        fn traverse<F, Function>(&self, source: Chain, mut function: Function) -> F::WithType<Chain>
        where
            F: Applicative,
            Function: FnMut(Chain) -> F::WithType<Chain>,
        {
            STEPS.with(|steps| steps.set(steps.get() + 1));
            match source {
                Chain::Link(next) => F::fmap(function(*next), |next| Chain::Link(Box::new(next))),
                end @ Chain::End(_) => F::pure(end),
            }
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(200)]
    fn zero_or_more_steps_through_each_level_once(#[case] depth: usize) {
        reset_counters();
        let bumped = zero_or_more(Unlink).modify(chain(depth), |end| match end {
            Chain::End(value) => Chain::End(value + 1),
            link => link,
        });

        assert_eq!(counters(), (0, depth + 1));
        assert_eq!(Unlink.get_all(bumped.clone()).len(), usize::from(depth > 0));
        assert_eq!(zero_or_more(Unlink).get_all(bumped), vec![Chain::End(1)]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(200, 1)]
    fn once_or_more_steps_through_each_level_once(#[case] depth: usize, #[case] foci: usize) {
        reset_counters();
        let found = once_or_more(Unlink).length(chain(depth));

        assert_eq!(found, foci);
        assert_eq!(counters(), (0, depth + 1));
    }

    #[test]
    fn failing_effect_at_the_bottom_fails_the_whole_descent() {
        let failed = zero_or_more(more()).traverse::<OptionEffect, _>(sample(), |node| match node {
            Node::Value(2) => None,
            other => Some(other),
        });
        assert_eq!(failed, None);

        let kept = zero_or_more(more()).traverse::<OptionEffect, _>(sample(), Some);
        assert_eq!(kept, Some(sample()));
    }
}
