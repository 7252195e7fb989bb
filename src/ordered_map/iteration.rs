use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use log::trace;

use super::OrderedMap;

/// Sequence-style traversal.
///
/// Every callback receives the value, its key, and the map being traversed, in that
/// order, once per entry in the map's current order. The `_with` variants additionally
/// thread a caller-supplied context through as the callback's first argument; the plain
/// variants bind no context at all.
impl<K: Ord + Clone, V> OrderedMap<K, V> {
    /// Calls `f` on every entry, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", "y"), ("b", "z")]);
    /// let mut visited = String::new();
    /// map.for_each(|value, key, _| {
    ///     visited.push_str(value);
    ///     visited.push_str(key);
    /// });
    /// assert_eq!(visited, "yazb");
    /// ```
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &K, &Self),
    {
        self.for_each_with(&mut (), |(), value, key, map| f(value, key, map));
    }

    /// Calls `f` on every entry, in order, passing `context` along.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// let mut seen = Vec::new();
    /// map.for_each_with(&mut seen, |seen, value, key, _| seen.push((*key, *value)));
    /// assert_eq!(seen, [("a", 1), ("b", 2)]);
    /// ```
    pub fn for_each_with<C, F>(&self, context: &mut C, mut f: F)
    where
        F: FnMut(&mut C, &V, &K, &Self),
    {
        for (key, value) in self {
            f(context, value, key, self);
        }
    }

    /// Builds a new map pairing every key with the result of `f`.
    ///
    /// The new map iterates in this map's order and inherits its comparator, so a later
    /// [`sort`](Self::sort) on it reproduces the same order. If this map was sorted by
    /// entry, the new map ranks its keys by their position here instead, because the
    /// entry comparator does not apply to the new value type.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("x", 1), ("y", 2), ("z", 3)]);
    /// map.sort_by(|a, b| b.cmp(a));
    ///
    /// let doubled = map.map(|value, _, _| value * 2);
    /// let pairs: Vec<_> = doubled.iter().map(|(k, v)| (*k, *v)).collect();
    /// assert_eq!(pairs, [("z", 6), ("y", 4), ("x", 2)]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, mut f: F) -> OrderedMap<K, U>
    where
        F: FnMut(&V, &K, &Self) -> U,
    {
        self.map_with(&mut (), |(), value, key, map| f(value, key, map))
    }

    /// Like [`map`](Self::map), passing `context` along to `f`.
    #[must_use]
    pub fn map_with<C, U, F>(&self, context: &mut C, mut f: F) -> OrderedMap<K, U>
    where
        F: FnMut(&mut C, &V, &K, &Self) -> U,
    {
        let mut entries = BTreeMap::new();
        for (key, value) in self {
            entries.insert(key.clone(), f(context, value, key, self));
        }

        trace!("mapped {} entries", entries.len());
        OrderedMap::from_parts(entries, self.order.clone(), self.comparator_for())
    }

    /// Builds a new map holding only the entries for which `f` returns `true`.
    ///
    /// The survivors keep their relative order and the new map inherits this map's
    /// comparator unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    /// let result = map
    ///     .filter(|value, _, _| value % 2 == 0)
    ///     .map(|value, _, _| value + 1);
    ///
    /// let pairs: Vec<_> = result.iter().map(|(k, v)| (*k, *v)).collect();
    /// assert_eq!(pairs, [("b", 3), ("d", 5)]);
    /// ```
    #[must_use]
    pub fn filter<F>(&self, mut f: F) -> OrderedMap<K, V>
    where
        V: Clone,
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.filter_with(&mut (), |(), value, key, map| f(value, key, map))
    }

    /// Like [`filter`](Self::filter), passing `context` along to `f`.
    #[must_use]
    pub fn filter_with<C, F>(&self, context: &mut C, mut f: F) -> OrderedMap<K, V>
    where
        V: Clone,
        F: FnMut(&mut C, &V, &K, &Self) -> bool,
    {
        let mut entries = BTreeMap::new();
        let mut order = Vec::new();
        for (key, value) in self {
            if f(context, value, key, self) {
                entries.insert(key.clone(), value.clone());
                order.push(key.clone());
            }
        }

        trace!("filtered {} entries down to {}", self.len(), order.len());
        OrderedMap::from_parts(entries, order, self.comparator.clone())
    }

    /// Returns `true` if `f` holds for at least one entry.
    ///
    /// Stops at the first entry for which `f` returns `true`. An empty map returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map = OrderedMap::from([("test", true)]);
    /// assert!(map.some(|value, _, _| *value));
    /// assert!(!map.some(|value, _, _| !*value));
    /// ```
    pub fn some<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.some_with(&mut (), |(), value, key, map| f(value, key, map))
    }

    /// Like [`some`](Self::some), passing `context` along to `f`.
    pub fn some_with<C, F>(&self, context: &mut C, mut f: F) -> bool
    where
        F: FnMut(&mut C, &V, &K, &Self) -> bool,
    {
        self.iter().any(|(key, value)| f(context, value, key, self))
    }

    /// Returns `true` if `f` holds for every entry.
    ///
    /// Stops at the first entry for which `f` returns `false`. An empty map returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let fruit = OrderedMap::from([("a", "apple"), ("b", "apple")]);
    /// assert!(fruit.every(|value, _, _| *value == "apple"));
    ///
    /// let mixed = OrderedMap::from([("a", "apple"), ("b", "banana")]);
    /// assert!(!mixed.every(|value, _, _| *value == "apple"));
    /// ```
    pub fn every<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.every_with(&mut (), |(), value, key, map| f(value, key, map))
    }

    /// Like [`every`](Self::every), passing `context` along to `f`.
    pub fn every_with<C, F>(&self, context: &mut C, mut f: F) -> bool
    where
        F: FnMut(&mut C, &V, &K, &Self) -> bool,
    {
        self.iter().all(|(key, value)| f(context, value, key, self))
    }
}
