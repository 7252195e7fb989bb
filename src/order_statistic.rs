/// A zero-based position in the iteration order of an [`OrderedMap`].
///
/// Unlike a key, a rank depends on how the map is currently sorted.
///
/// # Examples
///
/// ```
/// use orderly::{OrderedMap, Rank};
///
/// let mut map = OrderedMap::from([("a", 10), ("b", 20)]);
/// assert_eq!(map[Rank(0)], 10);
///
/// map.sort_by(|a, b| b.cmp(a));
/// assert_eq!(map[Rank(0)], 20);
/// ```
///
/// [`OrderedMap`]: crate::OrderedMap
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
