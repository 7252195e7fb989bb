use core::cmp::Ordering;
use core::fmt;

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec::Vec;

use log::trace;

use super::OrderedMap;

/// The rule an [`OrderedMap`] uses to (re)compute its iteration order.
///
/// Every comparator is three-way: it answers with an [`Ordering`], never with a
/// boolean. The rule is kept alongside the order so that [`OrderedMap::sort`] can
/// re-apply it and so that derived maps (from [`map`] and [`filter`]) can carry it on.
///
/// [`map`]: OrderedMap::map
/// [`filter`]: OrderedMap::filter
#[derive(Default)]
pub enum Comparator<K, V> {
    /// The key type's natural [`Ord`] order. This is the default.
    #[default]
    Lexicographic,
    /// A caller-supplied comparison of keys, installed by [`OrderedMap::sort_by`].
    Keys(Rc<dyn Fn(&K, &K) -> Ordering>),
    /// A caller-supplied comparison of whole entries, installed by
    /// [`OrderedMap::sort_by_entry`].
    Entries(Rc<dyn Fn((&K, &V), (&K, &V)) -> Ordering>),
    /// Keys ranked by their position in the order of the map this one was mapped
    /// from.
    ///
    /// [`OrderedMap::map`] produces this when the source was sorted by entry, since an
    /// entry comparator cannot be applied to the new value type.
    Positional(Rc<BTreeMap<K, usize>>),
}

impl<K: Ord, V> Comparator<K, V> {
    pub(crate) fn compare(&self, a: (&K, &V), b: (&K, &V)) -> Ordering {
        match self {
            Comparator::Lexicographic => a.0.cmp(b.0),
            Comparator::Keys(compare) => compare(a.0, b.0),
            Comparator::Entries(compare) => compare(a, b),
            Comparator::Positional(ranks) => ranks.get(a.0).cmp(&ranks.get(b.0)),
        }
    }
}

impl<K, V> Clone for Comparator<K, V> {
    fn clone(&self) -> Self {
        match self {
            Comparator::Lexicographic => Comparator::Lexicographic,
            Comparator::Keys(compare) => Comparator::Keys(Rc::clone(compare)),
            Comparator::Entries(compare) => Comparator::Entries(Rc::clone(compare)),
            Comparator::Positional(ranks) => Comparator::Positional(Rc::clone(ranks)),
        }
    }
}

impl<K, V> fmt::Debug for Comparator<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Lexicographic => f.write_str("Lexicographic"),
            Comparator::Keys(_) => f.write_str("Keys(..)"),
            Comparator::Entries(_) => f.write_str("Entries(..)"),
            Comparator::Positional(ranks) => write!(f, "Positional({} keys)", ranks.len()),
        }
    }
}

impl<K: Ord + Clone, V> OrderedMap<K, V> {
    /// Re-sorts the map with its current comparator and returns it for chaining.
    ///
    /// No comparator is supplied here, so nothing is replaced: a map sorted with
    /// [`sort_by`](Self::sort_by) stays sorted the same way, and a freshly built map stays in
    /// key order. Calling it never fails.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("a", 1), ("c", 3), ("b", 2), ("d", 4)]);
    /// let digits = map.sort().fold(String::new(), |acc, value, _, _| acc + &value.to_string());
    /// assert_eq!(digits, "1234");
    /// ```
    pub fn sort(&mut self) -> &mut Self {
        self.reorder();
        self
    }

    /// Replaces the comparator with `compare`, re-sorts the keys with it, and returns the
    /// map for chaining.
    ///
    /// The sort is stable: keys that compare equal keep their current relative order.
    /// The comparator stays in effect for later calls to [`sort`](Self::sort) and is
    /// inherited by maps derived with [`map`](Self::map) and [`filter`](Self::filter).
    ///
    /// # Complexity
    ///
    /// O(n log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("x", 1), ("y", 2), ("z", 3)]);
    /// map.sort_by(|a, b| b.cmp(a));
    ///
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, ["z", "y", "x"]);
    /// ```
    pub fn sort_by<F>(&mut self, compare: F) -> &mut Self
    where
        F: Fn(&K, &K) -> Ordering + 'static,
    {
        self.comparator = Comparator::Keys(Rc::new(compare));
        self.reorder();
        self
    }

    /// Replaces the comparator with one that sees both key and value of each entry,
    /// re-sorts with it, and returns the map for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("a", 30), ("b", 10), ("c", 20)]);
    /// map.sort_by_entry(|(_, x), (_, y)| x.cmp(y));
    ///
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, ["b", "c", "a"]);
    /// ```
    pub fn sort_by_entry<F>(&mut self, compare: F) -> &mut Self
    where
        F: Fn((&K, &V), (&K, &V)) -> Ordering + 'static,
    {
        self.comparator = Comparator::Entries(Rc::new(compare));
        self.reorder();
        self
    }

    /// Returns the comparator that produced the current order.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::{Comparator, OrderedMap};
    ///
    /// let mut map = OrderedMap::from([(1, "a")]);
    /// assert!(matches!(map.comparator(), Comparator::Lexicographic));
    ///
    /// map.sort_by(|a, b| b.cmp(a));
    /// assert!(matches!(map.comparator(), Comparator::Keys(_)));
    /// ```
    #[must_use]
    pub fn comparator(&self) -> &Comparator<K, V> {
        &self.comparator
    }

    /// The comparator a map with a different value type inherits from this one.
    pub(crate) fn comparator_for<U>(&self) -> Comparator<K, U> {
        match &self.comparator {
            Comparator::Lexicographic => Comparator::Lexicographic,
            Comparator::Keys(compare) => Comparator::Keys(Rc::clone(compare)),
            Comparator::Positional(ranks) => Comparator::Positional(Rc::clone(ranks)),
            Comparator::Entries(_) => {
                let ranks = self.order.iter().enumerate().map(|(rank, key)| (key.clone(), rank)).collect();
                Comparator::Positional(Rc::new(ranks))
            }
        }
    }

    fn reorder(&mut self) {
        trace!("sorting {} entries with {:?}", self.order.len(), self.comparator);

        let mut pairs: Vec<(&K, &V)> = self.order.iter().filter_map(|key| self.entries.get_key_value(key)).collect();
        pairs.sort_by(|a, b| self.comparator.compare(*a, *b));

        let order = pairs.into_iter().map(|(key, _)| key.clone()).collect();
        self.order = order;
    }
}
