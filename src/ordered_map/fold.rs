use super::OrderedMap;
use crate::EmptyFoldError;

impl<K: Ord, V> OrderedMap<K, V> {
    /// Folds every entry into an accumulator, front to back.
    ///
    /// `f` receives the accumulator so far, then the value, key and map.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// let packed = map.fold(String::from("0"), |acc, value, key, _| format!("{acc}{key}{value}"));
    /// assert_eq!(packed, "0a1b2");
    /// ```
    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &V, &K, &Self) -> A,
    {
        self.iter().fold(init, |acc, (key, value)| f(acc, value, key, self))
    }

    /// Folds every entry into an accumulator, back to front.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// let packed = map.fold_right(String::from("0"), |acc, value, key, _| format!("{acc}{key}{value}"));
    /// assert_eq!(packed, "0b2a1");
    /// ```
    pub fn fold_right<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &V, &K, &Self) -> A,
    {
        self.iter().rfold(init, |acc, (key, value)| f(acc, value, key, self))
    }

    /// Folds the entries front to back, seeding with the first value.
    ///
    /// Accumulation starts at the second entry, so `f` never sees the first key.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyFoldError`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::{EmptyFoldError, OrderedMap};
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.reduce(|acc, value, _, _| acc * 10 + value), Ok(123));
    ///
    /// let empty: OrderedMap<&str, i32> = OrderedMap::new();
    /// assert_eq!(empty.reduce(|acc, value, _, _| acc + value), Err(EmptyFoldError));
    /// ```
    pub fn reduce<F>(&self, mut f: F) -> Result<V, EmptyFoldError>
    where
        V: Clone,
        F: FnMut(V, &V, &K, &Self) -> V,
    {
        let mut iter = self.iter();
        let (_, first) = iter.next().ok_or(EmptyFoldError)?;
        Ok(iter.fold(first.clone(), |acc, (key, value)| f(acc, value, key, self)))
    }

    /// Folds the entries back to front, seeding with the last value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyFoldError`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.reduce_right(|acc, value, _, _| acc * 10 + value), Ok(321));
    /// ```
    pub fn reduce_right<F>(&self, mut f: F) -> Result<V, EmptyFoldError>
    where
        V: Clone,
        F: FnMut(V, &V, &K, &Self) -> V,
    {
        let mut iter = self.iter();
        let (_, last) = iter.next_back().ok_or(EmptyFoldError)?;
        Ok(iter.rfold(last.clone(), |acc, (key, value)| f(acc, value, key, self)))
    }
}
