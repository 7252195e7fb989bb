use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

mod comparator;
mod fold;
mod iteration;
mod order_statistic;
mod search;

pub use crate::Rank;
pub use comparator::Comparator;

/// A map with a fixed key set and an explicit, re-sortable iteration order.
///
/// An `OrderedMap` is built once from a collection of key/value pairs. From then on its keys
/// never change, but the order in which they are visited does: every iterator and every
/// sequence-style operation ([`for_each`], [`map`], [`filter`], [`some`], [`every`],
/// [`fold`], [`reduce`], [`index_of`], ...) walks the keys in the map's current *order*,
/// which starts out as the keys' natural [`Ord`] order and is changed with [`sort_by`] or
/// [`sort_by_entry`].
///
/// [`map`] and [`filter`] return new `OrderedMap`s. These keep the order of the map they were
/// derived from, together with the comparator that produced it, so chains of operations
/// see one consistent order from start to finish.
///
/// Values may be modified in place through [`get_mut`], [`iter_mut`] or [`values_mut`].
/// Neither changes the key set or the order.
///
/// # Examples
///
/// ```
/// use orderly::OrderedMap;
///
/// let mut scores = OrderedMap::from([("carol", 92), ("alice", 100), ("bob", 85)]);
///
/// // Natural key order.
/// let names: Vec<_> = scores.keys().copied().collect();
/// assert_eq!(names, ["alice", "bob", "carol"]);
///
/// // Lowest score first.
/// scores.sort_by_entry(|(_, a), (_, b)| a.cmp(b));
/// let names: Vec<_> = scores.keys().copied().collect();
/// assert_eq!(names, ["bob", "carol", "alice"]);
///
/// // Derived maps keep that order.
/// let passed = scores.filter(|score, _, _| *score >= 90);
/// let names: Vec<_> = passed.keys().copied().collect();
/// assert_eq!(names, ["carol", "alice"]);
/// ```
///
/// [`for_each`]: OrderedMap::for_each
/// [`map`]: OrderedMap::map
/// [`filter`]: OrderedMap::filter
/// [`some`]: OrderedMap::some
/// [`every`]: OrderedMap::every
/// [`fold`]: OrderedMap::fold
/// [`reduce`]: OrderedMap::reduce
/// [`index_of`]: OrderedMap::index_of
/// [`sort_by`]: OrderedMap::sort_by
/// [`sort_by_entry`]: OrderedMap::sort_by_entry
/// [`get_mut`]: OrderedMap::get_mut
/// [`iter_mut`]: OrderedMap::iter_mut
/// [`values_mut`]: OrderedMap::values_mut
pub struct OrderedMap<K, V> {
    entries: BTreeMap<K, V>,
    // A permutation of the keys of `entries`.
    order: Vec<K>,
    comparator: Comparator<K, V>,
}

/// An iterator over the entries of an `OrderedMap`, in order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedMap`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use orderly::OrderedMap;
///
/// let map = OrderedMap::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OrderedMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    order: core::slice::Iter<'a, K>,
    entries: &'a BTreeMap<K, V>,
}

/// A mutable iterator over the entries of an `OrderedMap`, in order.
///
/// This `struct` is created by the [`iter_mut`] method on [`OrderedMap`].
///
/// [`iter_mut`]: OrderedMap::iter_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, K, V> {
    inner: alloc::vec::IntoIter<(&'a K, &'a mut V)>,
}

/// An owning iterator over the entries of an `OrderedMap`, in order.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of an `OrderedMap`, in order.
///
/// This `struct` is created by the [`keys`] method on [`OrderedMap`].
///
/// [`keys`]: OrderedMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K> {
    inner: core::slice::Iter<'a, K>,
}

/// An iterator over the values of an `OrderedMap`, in order.
///
/// This `struct` is created by the [`values`] method on [`OrderedMap`].
///
/// [`values`]: OrderedMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// A mutable iterator over the values of an `OrderedMap`, in order.
///
/// This `struct` is created by the [`values_mut`] method on [`OrderedMap`].
///
/// [`values_mut`]: OrderedMap::values_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

/// An owning iterator over the keys of an `OrderedMap`, in order.
///
/// This `struct` is created by the [`into_keys`] method on [`OrderedMap`].
///
/// [`into_keys`]: OrderedMap::into_keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoKeys<K, V> {
    inner: IntoIter<K, V>,
}

/// An owning iterator over the values of an `OrderedMap`, in order.
///
/// This `struct` is created by the [`into_values`] method on [`OrderedMap`].
///
/// [`into_values`]: OrderedMap::into_values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoValues<K, V> {
    inner: IntoIter<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Makes a new, empty `OrderedMap`.
    ///
    /// Does not allocate anything on its own. Since the key set of an `OrderedMap` is fixed
    /// at construction, an empty map stays empty; it is mostly useful as a neutral value.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map: OrderedMap<&str, i32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> OrderedMap<K, V> {
        OrderedMap {
            entries: BTreeMap::new(),
            order: Vec::new(),
            comparator: Comparator::Lexicographic,
        }
    }

    /// Assembles a map from parts that already satisfy the order invariant.
    pub(crate) fn from_parts(entries: BTreeMap<K, V>, order: Vec<K>, comparator: Comparator<K, V>) -> Self {
        debug_assert_eq!(entries.len(), order.len(), "order must cover every entry exactly once");
        OrderedMap {
            entries,
            order,
            comparator,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// assert_eq!(map.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Gets an iterator over the keys of the map, in order.
    ///
    /// Only data keys are ever produced; the map's operations are methods, not entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K> {
        Keys {
            inner: self.order.iter(),
        }
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Gets an iterator over the entries of the map, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("b", 2), ("a", 1), ("c", 3)]);
    /// map.sort_by(|a, b| b.cmp(a));
    ///
    /// let pairs: Vec<_> = map.iter().collect();
    /// assert_eq!(pairs, [(&"c", &3), (&"b", &2), (&"a", &1)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            order: self.order.iter(),
            entries: &self.entries,
        }
    }

    /// Gets an iterator over the values of the map, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map = OrderedMap::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<&str> = map.values().copied().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map = OrderedMap::from([(1, "a")]);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.entries.get(key)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map = OrderedMap::from([(1, "a")]);
    /// assert_eq!(map.get_key_value(&1), Some((&1, &"a")));
    /// assert_eq!(map.get_key_value(&2), None);
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.entries.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(1, "a")]);
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.entries.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map = OrderedMap::from([(1, "a")]);
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.entries.contains_key(key)
    }

    /// Returns the first entry in the map's current order.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(1, "b"), (2, "a")]);
    /// assert_eq!(map.first_key_value(), Some((&1, &"b")));
    ///
    /// map.sort_by_entry(|(_, a), (_, b)| a.cmp(b));
    /// assert_eq!(map.first_key_value(), Some((&2, &"a")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.iter().next()
    }

    /// Returns the last entry in the map's current order.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.iter().next_back()
    }

    /// Gets a mutable iterator over the entries of the map, in order.
    ///
    /// # Complexity
    ///
    /// O(n log n) to set up, O(1) per item.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// map.sort_by(|a, b| b.cmp(a));
    ///
    /// let mut seen = Vec::new();
    /// for (key, value) in map.iter_mut() {
    ///     seen.push(*key);
    ///     *value *= 10;
    /// }
    /// assert_eq!(seen, ["c", "b", "a"]);
    /// assert_eq!(map[&"b"], 20);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let ranks: BTreeMap<&K, usize> = self.order.iter().enumerate().map(|(rank, key)| (key, rank)).collect();
        let mut ranked: Vec<(usize, &K, &mut V)> = self
            .entries
            .iter_mut()
            .filter_map(|(key, value)| ranks.get(key).map(|&rank| (rank, key, value)))
            .collect();
        ranked.sort_unstable_by_key(|&(rank, _, _)| rank);

        let pairs: Vec<(&K, &mut V)> = ranked.into_iter().map(|(_, key, value)| (key, value)).collect();
        IterMut {
            inner: pairs.into_iter(),
        }
    }

    /// Gets a mutable iterator over the values of the map, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// for value in map.values_mut() {
    ///     *value += 10;
    /// }
    /// let values: Vec<_> = map.values().copied().collect();
    /// assert_eq!(values, [11, 12]);
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut { inner: self.iter_mut() }
    }

    /// Creates a consuming iterator visiting all the keys, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// map.sort_by(|a, b| b.cmp(a));
    /// let keys: Vec<i32> = map.into_keys().collect();
    /// assert_eq!(keys, [2, 1]);
    /// ```
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys {
            inner: self.into_iter(),
        }
    }

    /// Creates a consuming iterator visiting all the values, in order.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            inner: self.into_iter(),
        }
    }
}

impl<K: Clone, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        OrderedMap {
            entries: self.entries.clone(),
            order: self.order.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<K: Ord + Hash, V: Hash> Hash for OrderedMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

/// Two maps are equal when they hold the same entries in the same order.
///
/// How the order came about (the comparator) is not compared.
impl<K: Ord, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Ord, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        OrderedMap::new()
    }
}

impl<K: Ord + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    /// Copies the pairs into a new map ordered by key. When a key repeats, the last
    /// value wins.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter().collect::<BTreeMap<K, V>>().into()
    }
}

impl<K: Ord + Clone, V> From<BTreeMap<K, V>> for OrderedMap<K, V> {
    fn from(entries: BTreeMap<K, V>) -> Self {
        // BTreeMap already yields its keys in lexicographic order.
        let order = entries.keys().cloned().collect();
        OrderedMap::from_parts(entries, order, Comparator::Lexicographic)
    }
}

impl<K: Ord + Clone, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a mut OrderedMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K: Ord, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(self) -> IntoIter<K, V> {
        let OrderedMap { mut entries, order, .. } = self;
        let pairs: Vec<(K, V)> = order.into_iter().filter_map(|key| entries.remove_entry(&key)).collect();
        IntoIter {
            inner: pairs.into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for OrderedMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K: Ord, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.order.next()?;
        self.entries.get_key_value(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K: Ord, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.order.next_back()?;
        self.entries.get_key_value(key)
    }
}

impl<K: Ord, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.order.len()
    }
}

impl<K: Ord, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            order: self.order.clone(),
            entries: self.entries,
        }
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for Keys<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for Keys<'_, K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K> FusedIterator for Keys<'_, K> {}

impl<K> Clone for Keys<'_, K> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Keys<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K: Ord, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Ord, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K: Ord, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K: Ord, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<&'a mut V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoKeys<K, V> {
    fn next_back(&mut self) -> Option<K> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoValues<K, V> {
    fn next_back(&mut self) -> Option<V> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoValues<K, V> {}
