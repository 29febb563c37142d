//! Integration tests for the container instances.
//!
//! `Cons`, `Snoc`, `Index`, `At`, `Each` and `FilterIndex` are exercised on
//! their own and composed behind field lenses, the way application code uses
//! them.

use optica::control::Either;
use optica::lens;
use optica::optics::{
    At, Cons, Each, FilterIndex, Index, Lens, Optional, Prism, Snoc, Traversal, at, each,
    filter_index, index,
};
use rstest::rstest;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Inventory {
    stock: BTreeMap<String, u32>,
    tags: BTreeSet<String>,
}

fn inventory() -> Inventory {
    Inventory {
        stock: BTreeMap::from([("apple".to_string(), 3), ("pear".to_string(), 0)]),
        tags: BTreeSet::from(["fruit".to_string()]),
    }
}

#[derive(Clone, PartialEq, Debug)]
struct Playlist {
    title: String,
    tracks: Vec<String>,
}

fn playlist() -> Playlist {
    Playlist {
        title: "mix".to_string(),
        tracks: vec!["intro".to_string(), "song".to_string(), "outro".to_string()],
    }
}

// =============================================================================
// Cons / Snoc
// =============================================================================

#[rstest]
#[case(vec![1, 2, 3], Some(1), Some(vec![2, 3]))]
#[case(vec![7], Some(7), Some(vec![]))]
#[case(vec![], None, None)]
fn test_cons_splits_head(
    #[case] input: Vec<i32>,
    #[case] head: Option<i32>,
    #[case] tail: Option<Vec<i32>>,
) {
    assert_eq!(input.clone().first_option(), head);
    assert_eq!(input.tail_option(), tail);
}

#[rstest]
fn test_cons_prism_prepends_and_modifies() {
    let cons = Vec::<i32>::cons();
    assert_eq!(cons.reverse_get((0, vec![1, 2])), vec![0, 1, 2]);
    assert_eq!(
        cons.modify(vec![1, 2], |(head, tail)| (head * 10, tail)),
        vec![10, 2]
    );
    assert_eq!(cons.get_or_modify(Vec::new()), Either::Left(Vec::new()));
}

#[rstest]
#[case("abc", Some("ab".to_string()), Some('c'))]
#[case("", None, None)]
fn test_snoc_splits_last_char(
    #[case] input: &str,
    #[case] init: Option<String>,
    #[case] last: Option<char>,
) {
    assert_eq!(input.to_string().init_option(), init);
    assert_eq!(input.to_string().last_option(), last);
}

#[rstest]
fn test_snoc_composed_behind_a_lens() {
    let last_track = lens!(Playlist, tracks).compose_prism(Vec::<String>::snoc());
    let updated = last_track.modify(playlist(), |(init, _)| (init, "encore".to_string()));
    assert_eq!(updated.tracks, vec!["intro", "song", "encore"]);
}

// =============================================================================
// Index / At
// =============================================================================

#[rstest]
#[case(0, Some("intro"))]
#[case(2, Some("outro"))]
#[case(3, None)]
fn test_index_behind_a_lens(#[case] position: usize, #[case] expected: Option<&str>) {
    let track = lens!(Playlist, tracks).compose_optional(Vec::<String>::index(position));
    assert_eq!(track.get_option(&playlist()).as_deref(), expected);
}

#[rstest]
fn test_index_set_out_of_range_is_identity() {
    let track = lens!(Playlist, tracks).compose_optional(index::<Vec<String>, _>(9));
    assert_eq!(track.set(playlist(), "ghost".to_string()), playlist());
}

#[rstest]
fn test_index_on_string_uses_char_positions() {
    let second = String::index(1);
    assert_eq!(second.get_option(&"héllo".to_string()), Some('é'));
    assert_eq!(second.set("héllo".to_string(), 'a'), "hallo");
}

#[rstest]
fn test_index_on_map_never_inserts() {
    let pear = BTreeMap::<String, u32>::index("pear".to_string());
    let plum = BTreeMap::<String, u32>::index("plum".to_string());
    let stock = inventory().stock;

    assert_eq!(pear.modify(stock.clone(), |count| count + 5)["pear"], 5);
    assert_eq!(plum.set(stock.clone(), 1), stock);
}

#[rstest]
#[case(Some(9), Some(9))]
#[case(None, None)]
fn test_at_inserts_and_removes(#[case] value: Option<u32>, #[case] expected: Option<u32>) {
    let apple = lens!(Inventory, stock).compose(BTreeMap::<String, u32>::at("apple".to_string()));
    let updated = apple.set(inventory(), value);
    assert_eq!(updated.stock.get("apple").copied(), expected);
    assert_eq!(updated.stock.get("pear"), Some(&0));
}

#[rstest]
fn test_at_on_sets_toggles_membership() {
    let seasonal = lens!(Inventory, tags).compose(at::<BTreeSet<String>, _>("seasonal".to_string()));
    let tagged = seasonal.set(inventory(), true);
    assert!(seasonal.get(&tagged));
    assert_eq!(tagged.tags.len(), 2);
    assert_eq!(seasonal.set(tagged, false), inventory());
}

#[rstest]
fn test_at_on_hash_collections() {
    let key = HashMap::<u8, &str>::at(1);
    let map = key.set(HashMap::new(), Some("one"));
    assert_eq!(key.get(&map), Some("one"));
    assert!(key.set(map, None).is_empty());

    let member = HashSet::<u8>::at(4);
    assert!(member.get(&member.set(HashSet::new(), true)));
}

// =============================================================================
// Each / FilterIndex
// =============================================================================

#[rstest]
fn test_each_behind_a_lens() {
    let tracks = lens!(Playlist, tracks).compose_traversal(Vec::<String>::each());
    let shouted = tracks.modify(playlist(), |track| track.to_uppercase());
    assert_eq!(shouted.tracks, vec!["INTRO", "SONG", "OUTRO"]);
    assert_eq!(shouted.title, "mix");
}

#[rstest]
fn test_each_on_map_visits_values_in_key_order() {
    let counts = lens!(Inventory, stock).compose_traversal(each::<BTreeMap<String, u32>>());
    assert_eq!(counts.get_all(inventory()), vec![3, 0]);
    assert!(counts.exists(inventory(), |count| *count == 0));
}

#[rstest]
#[case(Ok(2), Ok(4))]
#[case(Err("bad"), Err("bad"))]
fn test_each_on_result_focuses_the_success(
    #[case] input: Result<i32, &'static str>,
    #[case] expected: Result<i32, &'static str>,
) {
    assert_eq!(Result::<i32, &str>::each().modify(input, |x| x * 2), expected);
}

#[rstest]
fn test_each_on_either_and_option() {
    let right: Either<&str, i32> = Either::Right(1);
    assert_eq!(Either::<&str, i32>::each().get_all(right), vec![1]);
    assert_eq!(Option::<i32>::each().length(None), 0);
}

#[rstest]
fn test_each_on_string_visits_chars() {
    assert_eq!(String::each().modify("abc".to_string(), |c| c.to_ascii_uppercase()), "ABC");
}

#[rstest]
fn test_filter_index_on_map_keys() {
    let fruit = filter_index::<BTreeMap<String, u32>, _, _>(|key: &String| key.starts_with('a'));
    let restocked = fruit.modify(inventory().stock, |count| count + 10);
    assert_eq!(restocked["apple"], 13);
    assert_eq!(restocked["pear"], 0);
}

#[rstest]
fn test_filter_index_on_string_positions() {
    let odd = String::filter_index(|position: &usize| position % 2 == 1);
    assert_eq!(odd.get_all("abcd".to_string()), vec!['b', 'd']);
}

#[rstest]
fn test_filter_index_on_hash_map() {
    let large = HashMap::<u32, &str>::filter_index(|key: &u32| *key > 10);
    let map = HashMap::from([(1, "small"), (20, "large")]);
    assert_eq!(large.get_all(map), vec!["large"]);
}
