use core::borrow::Borrow;
use core::ops::Index;

use super::OrderedMap;
use crate::Rank;

impl<K: Ord, V> OrderedMap<K, V> {
    /// Returns the key-value pair at position `rank` in the current order.
    ///
    /// The rank is zero-based. Returns `None` if `rank` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("a", 10), ("b", 20), ("c", 30)]);
    /// assert_eq!(map.get_by_rank(1), Some((&"b", &20)));
    ///
    /// map.sort_by(|x, y| y.cmp(x));
    /// assert_eq!(map.get_by_rank(0), Some((&"c", &30)));
    /// assert!(map.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        let key = self.order.get(rank)?;
        self.entries.get_key_value(key)
    }

    /// Returns the zero-based position of `key` in the current order, or `None` if the
    /// key is not present.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(10, "a"), (20, "b")]);
    /// assert_eq!(map.rank_of(&10), Some(0));
    ///
    /// map.sort_by(|x, y| y.cmp(x));
    /// assert_eq!(map.rank_of(&10), Some(1));
    /// assert_eq!(map.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if !self.entries.contains_key(key) {
            return None;
        }
        self.order.iter().position(|candidate| <K as Borrow<Q>>::borrow(candidate) == key)
    }
}

/// Indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use orderly::{OrderedMap, Rank};
///
/// let map = OrderedMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(map[Rank(1)], 2);
/// ```
impl<K: Ord, V> Index<Rank> for OrderedMap<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).map(|(_, v)| v).expect("index out of bounds")
    }
}
