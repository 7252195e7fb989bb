use super::OrderedMap;

impl<K: Ord, V> OrderedMap<K, V> {
    /// Returns the key of the first entry, in order, whose value equals `target`.
    ///
    /// Values are compared with [`PartialEq`]; the comparator plays no part.
    /// Returns `None` if no value matches.
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
    /// let map = OrderedMap::from([("a", "apple"), ("b", "pear"), ("c", "apple")]);
    /// assert_eq!(map.index_of(&"apple"), Some(&"a"));
    /// assert_eq!(map.index_of(&"plum"), None);
    /// ```
    #[must_use]
    pub fn index_of<Q>(&self, target: &Q) -> Option<&K>
    where
        Q: ?Sized,
        V: PartialEq<Q>,
    {
        self.iter().find_map(|(key, value)| (value == target).then_some(key))
    }

    /// Returns the key of the last entry, in order, whose value equals `target`.
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
    /// let map = OrderedMap::from([("a", "apple"), ("b", "pear"), ("c", "apple")]);
    /// assert_eq!(map.last_index_of(&"apple"), Some(&"c"));
    /// ```
    #[must_use]
    pub fn last_index_of<Q>(&self, target: &Q) -> Option<&K>
    where
        Q: ?Sized,
        V: PartialEq<Q>,
    {
        self.iter().rev().find_map(|(key, value)| (value == target).then_some(key))
    }
}
