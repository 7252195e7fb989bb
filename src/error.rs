use core::error::Error;
use core::fmt;

/// The error returned by [`reduce`] and [`reduce_right`] on an empty map.
///
/// Without an initial value there is nothing to seed the fold with, so the
/// failure is reported instead of inventing a result. Use [`fold`] or
/// [`fold_right`] when an initial value is available.
///
/// [`reduce`]: crate::OrderedMap::reduce
/// [`reduce_right`]: crate::OrderedMap::reduce_right
/// [`fold`]: crate::OrderedMap::fold
/// [`fold_right`]: crate::OrderedMap::fold_right
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct EmptyFoldError;

impl fmt::Display for EmptyFoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("reduce of empty OrderedMap with no initial value")
    }
}

impl Error for EmptyFoldError {}
