use std::collections::BTreeMap;
use std::fmt::Display;

use orderly::{Comparator, EmptyFoldError, OrderedMap, Rank};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of entries to build each proptest map from.
const TEST_SIZE: usize = 1_000;

fn key_strategy() -> impl Strategy<Value = i64> {
    // Narrower than TEST_SIZE so that duplicate keys show up.
    -500i64..500i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    -50i64..50i64
}

/// Concatenates key and value onto the accumulator, like `"" + "a" + 1`.
fn compress<K: Display, V: Display>(previous: String, value: &V, key: &K) -> String {
    format!("{previous}{key}{value}")
}

fn pairs<K: Ord + Clone, V: Clone>(map: &OrderedMap<K, V>) -> Vec<(K, V)> {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

// ─── Construction ────────────────────────────────────────────────────────────

#[test]
fn preserves_original_data() {
    let start = BTreeMap::from([("fruit", "apple"), ("vegetable", "carrot")]);
    let end = OrderedMap::from(start.clone());

    for (key, value) in &start {
        assert_eq!(end.get(key), Some(value));
    }
    assert_eq!(end.len(), start.len());
}

#[test]
fn empty_construction() {
    let map: OrderedMap<String, i32> = OrderedMap::new();
    assert!(map.is_empty());
    assert_eq!(map.iter().next(), None);
    assert_eq!(map, OrderedMap::<String, i32>::default());
    assert_eq!(map, std::iter::empty::<(String, i32)>().collect::<OrderedMap<_, _>>());
}

#[test]
fn operations_are_methods_not_entries() {
    let mut map = OrderedMap::from([("test", true)]);

    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, ["test"]);
    for name in [
        "sort",
        "index_of",
        "last_index_of",
        "some",
        "every",
        "map",
        "filter",
        "fold",
        "fold_right",
        "reduce",
        "reduce_right",
        "for_each",
    ] {
        assert!(!map.contains_key(name), "{name} must not be an entry");
    }

    // The operations belong to the type itself.
    let sort: for<'m> fn(&'m mut OrderedMap<&'static str, bool>) -> &'m mut OrderedMap<&'static str, bool> =
        OrderedMap::sort;
    assert_eq!(sort(&mut map).len(), 1);
}

// ─── Sorting ─────────────────────────────────────────────────────────────────

#[test]
fn defaults_to_lexicographic() {
    let mut map = OrderedMap::from([("a", 1), ("c", 3), ("b", 2), ("d", 4)]);

    let mut digits = String::new();
    map.sort().for_each(|value, _, _| digits.push_str(&value.to_string()));
    assert_eq!(digits, "1234");

    let packed = map.fold(String::new(), |acc, value, key, _| compress(acc, value, key));
    assert_eq!(packed, "a1b2c3d4");
    assert!(matches!(map.comparator(), Comparator::Lexicographic));
}

#[test]
fn accepts_a_comparator() {
    let mut map = OrderedMap::from([("a", "1"), ("b", "2")]);

    map.sort_by(|a, b| b.cmp(a));
    let first = map.fold(String::new(), |acc, value, key, _| compress(acc, value, key));
    map.sort_by(|a, b| a.cmp(b));
    let second = map.fold(String::new(), |acc, value, key, _| compress(acc, value, key));

    assert_eq!(first, "b2a1");
    assert_eq!(second, "a1b2");
}

#[test]
fn sorting_is_independent_for_each_instance() {
    let mut first = OrderedMap::from([("a", 1), ("b", 2)]);
    let mut second = first.clone();

    first.sort_by(|a, b| a.cmp(b));
    second.sort_by(|a, b| b.cmp(a));

    assert_eq!(pairs(&first), [("a", 1), ("b", 2)]);
    assert_eq!(pairs(&second), [("b", 2), ("a", 1)]);
}

#[test]
fn resorting_a_derived_map_leaves_the_source_alone() {
    let mut source = OrderedMap::from([("a", 3), ("b", 1), ("c", 2), ("d", 4)]);
    source.sort_by_entry(|(_, x), (_, y)| y.cmp(x));
    assert_eq!(pairs(&source), [("d", 4), ("a", 3), ("c", 2), ("b", 1)]);

    let mut filtered = source.filter(|value, _, _| *value > 1);
    let mut mapped = source.map(|value, _, _| value * 10);
    assert_eq!(pairs(&filtered), [("d", 4), ("a", 3), ("c", 2)]);
    assert_eq!(pairs(&mapped), [("d", 40), ("a", 30), ("c", 20), ("b", 10)]);

    filtered.sort_by(|a, b| a.cmp(b));
    mapped.sort_by(|a, b| a.cmp(b));
    assert_eq!(pairs(&filtered), [("a", 3), ("c", 2), ("d", 4)]);
    assert_eq!(pairs(&mapped), [("a", 30), ("b", 10), ("c", 20), ("d", 40)]);

    // The source keeps both its order and its entry comparator.
    assert_eq!(pairs(&source), [("d", 4), ("a", 3), ("c", 2), ("b", 1)]);
    assert!(matches!(source.comparator(), Comparator::Entries(_)));
    assert_eq!(pairs(source.sort()), [("d", 4), ("a", 3), ("c", 2), ("b", 1)]);
}

#[test]
fn chained_derivations_keep_an_entry_order() {
    let mut source = OrderedMap::from([("a", 3), ("b", 1), ("c", 2), ("d", 4)]);
    source.sort_by_entry(|(_, x), (_, y)| y.cmp(x));

    let mut derived = source
        .filter(|value, _, _| value % 2 == 0 || *value == 3)
        .map(|value, key, _| format!("{key}{value}"))
        .filter(|value, _, _| !value.starts_with('c'));

    assert!(matches!(derived.comparator(), Comparator::Positional(_)));
    let keys: Vec<_> = derived.sort().keys().copied().collect();
    assert_eq!(keys, ["d", "a"]);
    assert_eq!(pairs(&source), [("d", 4), ("a", 3), ("c", 2), ("b", 1)]);
}

#[test]
fn sort_persists_until_later_calls() {
    let mut map = OrderedMap::from([("x", 1), ("y", 2), ("z", 3)]);
    map.sort_by(|a, b| b.cmp(a));

    let packed = map.fold(String::new(), |acc, value, key, _| compress(acc, value, key));
    assert_eq!(packed, "z3y2x1");

    // Re-sorting without a comparator keeps the installed one.
    let packed = map.sort().fold(String::new(), |acc, value, key, _| compress(acc, value, key));
    assert_eq!(packed, "z3y2x1");
}

#[test]
fn sort_persists_between_chained_calls() {
    let mut map = OrderedMap::from([("x", 1), ("y", 2), ("z", 3)]);
    map.sort_by(|a, b| b.cmp(a));

    let mut first_order = String::new();
    let mut second_order = String::new();
    let _ = map
        .map_with(&mut first_order, |seen, value, key, _| {
            seen.push_str(&format!("{value}{key}"));
            *value
        })
        .map_with(&mut second_order, |seen, value, key, _| {
            seen.push_str(&format!("{value}{key}"));
            *value
        });

    assert_eq!(first_order, "3z2y1x");
    assert_eq!(first_order, second_order);
}

#[test]
fn sort_can_be_chained_directly() {
    let result = OrderedMap::from([("x", 1), ("y", 2), ("z", 3)])
        .sort_by(|a, b| b.cmp(a))
        .filter(|_, key, _| *key != "y")
        .map(|value, _, _| value + 1)
        .fold(String::new(), |acc, value, key, _| compress(acc, value, key));

    assert_eq!(result, "z4x2");
}

#[test]
fn entry_sort_survives_map_and_resort() {
    let mut map = OrderedMap::from([("a", 3), ("b", 1), ("c", 2)]);
    map.sort_by_entry(|(_, x), (_, y)| x.cmp(y));

    let mut labels = map.map(|value, key, _| format!("{key}={value}"));
    assert!(matches!(labels.comparator(), Comparator::Positional(_)));

    let before: Vec<_> = labels.keys().copied().collect();
    labels.sort();
    let after: Vec<_> = labels.keys().copied().collect();

    assert_eq!(before, ["b", "c", "a"]);
    assert_eq!(after, before);
}

#[test]
fn entry_comparator_carries_through_filter() {
    let mut map = OrderedMap::from([("a", 3), ("b", 1), ("c", 2), ("d", 0)]);
    map.sort_by_entry(|(_, x), (_, y)| y.cmp(x));

    let mut kept = map.filter(|value, _, _| *value > 0);
    assert!(matches!(kept.comparator(), Comparator::Entries(_)));
    assert_eq!(pairs(kept.sort()), [("a", 3), ("c", 2), ("b", 1)]);
}

// ─── Indices ─────────────────────────────────────────────────────────────────

#[test]
fn finds_the_first_index_with_index_of() {
    let map = OrderedMap::from([("a", "apple"), ("b", "pear"), ("c", "apple")]);
    assert_eq!(map.index_of(&"apple"), Some(&"a"));
}

#[test]
fn finds_the_last_index_with_last_index_of() {
    let map = OrderedMap::from([("a", "apple"), ("b", "pear"), ("c", "apple")]);
    assert_eq!(map.last_index_of(&"apple"), Some(&"c"));
}

#[test]
fn index_miss_is_none() {
    let map = OrderedMap::from([("a", "apple")]);
    assert_eq!(map.index_of(&"pear"), None);
    assert_eq!(map.last_index_of(&"pear"), None);
}

// ─── some / every ────────────────────────────────────────────────────────────

#[test]
fn some_finds_matches() {
    let map = OrderedMap::from([("test", true)]);
    assert!(map.some(|value, _, _| *value));
    assert!(!map.some(|value, _, _| !*value));
}

#[test]
fn some_sets_the_context() {
    let map = OrderedMap::from([("a", "y"), ("b", "z")]);
    let mut context: Vec<&str> = Vec::new();
    let found = map.some_with(&mut context, |context, value, _, original| {
        assert!(std::ptr::eq(original, &map));
        context.push(*value);
        *value == "z"
    });
    assert!(found);
    assert_eq!(context, ["y", "z"]);
}

#[test]
fn some_exactly_matches_slice_any() {
    let callback = |item: &&str| *item == "c";
    let map = OrderedMap::from([("0", "a"), ("1", "b")]);
    let array = ["a", "b"];
    assert_eq!(map.some(|value, _, _| callback(value)), array.iter().any(callback));
}

#[test]
fn every_finds_all_matches() {
    let first = OrderedMap::from([("a", "apple"), ("b", "apple")]);
    assert!(first.every(|value, _, _| *value == "apple"));
    let second = OrderedMap::from([("a", "apple"), ("b", "banana")]);
    assert!(!second.every(|value, _, _| *value == "apple"));
}

#[test]
fn every_sets_the_context() {
    let map = OrderedMap::from([("a", "y"), ("b", "z")]);
    let mut calls = 0usize;
    let all = map.every_with(&mut calls, |calls, _, _, original| {
        assert!(std::ptr::eq(original, &map));
        *calls += 1;
        true
    });
    assert!(all);
    assert_eq!(calls, 2);
}

// ─── map / filter ────────────────────────────────────────────────────────────

#[test]
fn map_transforms_the_input() {
    let start = OrderedMap::from([("a", "y"), ("b", "z")]);
    let end = start.map(|value, _, _| format!("{value}{value}"));
    let packed = end.fold(String::new(), |acc, value, key, _| compress(acc, value, key));
    assert_eq!(packed, "ayybzz");
}

#[test]
fn map_sets_the_context() {
    let map = OrderedMap::from([("a", "y"), ("b", "z")]);
    let mut keys = Vec::new();
    let copy = map.map_with(&mut keys, |keys, value, key, original| {
        assert!(std::ptr::eq(original, &map));
        keys.push(*key);
        *value
    });
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(copy, map);
}

#[test]
fn filter_exactly_matches_slice_filter() {
    let keep = |value: &&str| *value != "b";
    let map = OrderedMap::from([("0", "a"), ("1", "b")]);
    let array = ["a", "b"];

    let from_map = map
        .filter(|value, _, _| keep(value))
        .fold(String::new(), |acc, value, key, _| compress(acc, value, key));
    let from_array = array
        .iter()
        .enumerate()
        .filter(|(_, value)| keep(*value))
        .fold(String::new(), |acc, (index, value)| compress(acc, value, &index));

    assert_eq!(from_map, from_array);
}

#[test]
fn filter_sets_the_context() {
    let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    let mut threshold = 2;
    let kept = map.filter_with(&mut threshold, |threshold, value, _, original| {
        assert!(std::ptr::eq(original, &map));
        *value >= *threshold
    });
    assert_eq!(pairs(&kept), [("b", 2), ("c", 3)]);
}

// ─── for_each ────────────────────────────────────────────────────────────────

#[test]
fn for_each_iterates_across_all_items() {
    let map = OrderedMap::from([("a", "y"), ("b", "z")]);
    let mut result = String::new();
    map.for_each(|value, key, original| {
        assert!(std::ptr::eq(original, &map));
        result.push_str(value);
        result.push_str(key);
    });
    assert_eq!(result, "yazb");
}

#[test]
fn for_each_exactly_matches_slice_iteration() {
    let map = OrderedMap::from([("0", "a"), ("1", "b")]);
    let array = ["a", "b"];

    let mut from_map = String::new();
    map.for_each_with(&mut from_map, |out, value, key, _| out.push_str(&format!("{value}{key}-")));
    let mut from_array = String::new();
    for (index, value) in array.iter().enumerate() {
        from_array.push_str(&format!("{value}{index}-"));
    }

    assert_eq!(from_map, from_array);
}

// ─── Folds ───────────────────────────────────────────────────────────────────

#[test]
fn fold_reduces_to_a_single_value() {
    let map = OrderedMap::from([("a", 1), ("b", 2)]);
    assert_eq!(map.fold("z".to_string(), |acc, value, key, _| compress(acc, value, key)), "za1b2");
    assert_eq!(map.fold("0".to_string(), |acc, value, key, _| compress(acc, value, key)), "0a1b2");
}

#[test]
fn fold_right_reduces_in_reverse_order() {
    let map = OrderedMap::from([("a", 1), ("b", 2)]);
    assert_eq!(map.fold_right("z".to_string(), |acc, value, key, _| compress(acc, value, key)), "zb2a1");
    assert_eq!(map.fold_right("0".to_string(), |acc, value, key, _| compress(acc, value, key)), "0b2a1");
}

#[test]
fn folds_pass_the_original_map() {
    let map = OrderedMap::from([("a", 1), ("b", 2)]);
    let _ = map.reduce(|acc, _, _, original| {
        assert!(std::ptr::eq(original, &map));
        acc
    });
    map.fold_right((), |(), _, _, original| assert!(std::ptr::eq(original, &map)));
}

#[test]
fn folds_exactly_match_slice_folds() {
    let map = OrderedMap::from([("0", "a"), ("1", "b")]);
    let array = ["a", "b"];

    let forward = array
        .iter()
        .enumerate()
        .fold(String::new(), |acc, (index, value)| compress(acc, value, &index));
    let backward = array
        .iter()
        .enumerate()
        .rfold(String::new(), |acc, (index, value)| compress(acc, value, &index));

    assert_eq!(map.fold(String::new(), |acc, value, key, _| compress(acc, value, key)), forward);
    assert_eq!(map.fold_right(String::new(), |acc, value, key, _| compress(acc, value, key)), backward);
}

#[test]
fn reduce_without_seed_on_empty_map_fails() {
    let map: OrderedMap<&str, String> = OrderedMap::new();
    assert_eq!(map.reduce(|acc, _, _, _| acc), Err(EmptyFoldError));
    assert_eq!(map.reduce_right(|acc, _, _, _| acc), Err(EmptyFoldError));
}

#[test]
fn reduce_without_seed_starts_from_first_value() {
    let map = OrderedMap::from([("a", "1".to_string()), ("b", "2".to_string()), ("c", "3".to_string())]);
    let forward = map.reduce(|acc, value, key, _| compress(acc, value, key));
    let backward = map.reduce_right(|acc, value, key, _| compress(acc, value, key));
    assert_eq!(forward, Ok("1b2c3".to_string()));
    assert_eq!(backward, Ok("3b2a1".to_string()));
}

// ─── Fluent chaining ─────────────────────────────────────────────────────────

#[test]
fn allows_fluent_chaining() {
    let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    let result = map
        .filter(|value, _, _| value % 2 == 0)
        .map(|value, _, _| value + 1)
        .fold(String::new(), |acc, value, key, _| compress(acc, value, key));
    assert_eq!(result, "b3d5");
}

// ─── Keyed access and iterators ──────────────────────────────────────────────

#[test]
fn iterators_follow_the_current_order() {
    let mut map = OrderedMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    map.sort_by(|a, b| b.cmp(a));

    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
    assert_eq!(map.values().copied().collect::<Vec<_>>(), ['c', 'b', 'a']);
    assert_eq!(map.iter().rev().map(|(k, _)| *k).collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(map.first_key_value(), Some((&3, &'c')));
    assert_eq!(map.last_key_value(), Some((&1, &'a')));
    assert_eq!(map.iter().len(), 3);

    for value in map.values_mut() {
        *value = value.to_ascii_uppercase();
    }
    assert_eq!(map.clone().into_values().collect::<String>(), "CBA");
    assert_eq!(map.clone().into_keys().collect::<Vec<_>>(), [3, 2, 1]);
    assert_eq!(map.into_iter().collect::<Vec<_>>(), [(3, 'C'), (2, 'B'), (1, 'A')]);
}

#[test]
fn rank_follows_the_current_order() {
    let mut map = OrderedMap::from([("a", 10), ("b", 20), ("c", 30)]);
    map.sort_by_entry(|(_, x), (_, y)| y.cmp(x));

    assert_eq!(map[Rank(0)], 30);
    assert_eq!(map.get_by_rank(2), Some((&"a", &10)));
    assert_eq!(map.rank_of("b"), Some(1));
    assert_eq!(map.rank_of("z"), None);
}

/// Tests that Index<Rank> panics for out-of-bounds rank.
#[test]
#[should_panic(expected = "index out of bounds")]
fn index_rank_out_of_bounds_panics() {
    let map = OrderedMap::from([(1, 1), (2, 2), (3, 3)]);
    let _ = map[Rank(3)];
}

/// Tests that Index<&Q> panics for a missing key.
#[test]
#[should_panic(expected = "no entry found for key")]
fn index_missing_key_panics() {
    let map = OrderedMap::from([(1, 1)]);
    let _ = map[&2];
}

/// A panicking callback propagates and leaves the map usable.
#[test]
fn callback_panic_propagates() {
    let map = OrderedMap::from([(1, 1), (2, 2)]);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        map.for_each(|value, _, _| assert_ne!(*value, 2, "boom"));
    }));
    assert!(result.is_err());
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2]);
}

// ─── Randomized comparisons against a Vec model ──────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Construction keeps every pair (last duplicate wins) in key order.
    #[test]
    fn construction_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE)) {
        let map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        let model: Vec<(i64, i64)> = entries.iter().copied().collect::<BTreeMap<_, _>>().into_iter().collect();

        prop_assert_eq!(pairs(&map), model);
    }

    /// Sorting by value (ties by key) matches a stably sorted Vec, and survives map/filter.
    #[test]
    fn entry_sort_matches_vec(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE)) {
        let mut map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        map.sort_by_entry(|(ka, va), (kb, vb)| vb.cmp(va).then(ka.cmp(kb)));

        let mut model: Vec<(i64, i64)> = entries.iter().copied().collect::<BTreeMap<_, _>>().into_iter().collect();
        model.sort_by(|(ka, va), (kb, vb)| vb.cmp(va).then(ka.cmp(kb)));
        prop_assert_eq!(pairs(&map), model.clone());

        let mut mapped = map.map(|value, _, _| value.to_string());
        mapped.sort();
        let mapped_keys: Vec<i64> = mapped.keys().copied().collect();
        let model_keys: Vec<i64> = model.iter().map(|(k, _)| *k).collect();
        prop_assert_eq!(mapped_keys, model_keys);

        let mut kept = map.filter(|value, _, _| value % 3 == 0);
        kept.sort();
        let model_kept: Vec<(i64, i64)> = model.iter().copied().filter(|(_, v)| v % 3 == 0).collect();
        prop_assert_eq!(pairs(&kept), model_kept);
    }

    /// Folds, searches and ranks agree with the same operations on a Vec.
    #[test]
    fn traversals_match_vec(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE), probe in value_strategy()) {
        let mut map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        map.sort_by(|a, b| b.cmp(a));

        let mut model: Vec<(i64, i64)> = entries.iter().copied().collect::<BTreeMap<_, _>>().into_iter().collect();
        model.reverse();

        let forward: Vec<i64> = map.fold(Vec::new(), |mut acc, _, key, _| { acc.push(*key); acc });
        let backward: Vec<i64> = map.fold_right(Vec::new(), |mut acc, _, key, _| { acc.push(*key); acc });
        let model_forward: Vec<i64> = model.iter().map(|(k, _)| *k).collect();
        let model_backward: Vec<i64> = model.iter().rev().map(|(k, _)| *k).collect();
        prop_assert_eq!(forward, model_forward);
        prop_assert_eq!(backward, model_backward);

        let first = model.iter().find(|(_, v)| *v == probe).map(|(k, _)| k);
        let last = model.iter().rev().find(|(_, v)| *v == probe).map(|(k, _)| k);
        prop_assert_eq!(map.index_of(&probe), first);
        prop_assert_eq!(map.last_index_of(&probe), last);

        prop_assert_eq!(map.some(|v, _, _| *v == probe), first.is_some());
        prop_assert_eq!(map.every(|v, _, _| *v != probe), first.is_none());

        for (rank, (key, value)) in model.iter().enumerate() {
            prop_assert_eq!(map.get_by_rank(rank), Some((key, value)));
            prop_assert_eq!(map.rank_of(key), Some(rank));
        }
        prop_assert_eq!(map.get_by_rank(model.len()), None);

        let sum: i64 = model.iter().map(|(_, v)| *v).sum();
        prop_assert_eq!(map.reduce(|acc, v, _, _| acc + v).unwrap_or(0), sum);
    }
}
