use std::{error, fmt};

/// Error enumerates over all possible errors that this package
/// shall return.
#[derive(Debug, PartialEq)]
pub enum Error<K>
where
    K: Clone + Ord,
{
    /// Key is not present in the index, or rank is out of range.
    NotFound,
    /// Query needs at least one entry, but the index is empty.
    EmptyTree,
    /// Fatal case, root of the tree is not black.
    RedRoot,
    /// Fatal case, breaking one of the two LLRB rules.
    ConsecutiveReds,
    /// Fatal case, a red link is leaning right.
    RightLeaningRed,
    /// Fatal case, breaking one of the two LLRB rules. The String
    /// component of this variant can be used for debugging.
    UnbalancedBlacks(String),
    /// Fatal case, index entries are not in sort-order.
    SortError(K, K),
    /// Fatal case, subtree size stored in node does not match the
    /// count of its descendants, as (key, stored, counted).
    SizeMismatch(K, usize, usize),
}

impl<K> fmt::Display for Error<K>
where
    K: Clone + Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "key not found"),
            Error::EmptyTree => write!(f, "empty tree"),
            Error::RedRoot => write!(f, "root is red"),
            Error::ConsecutiveReds => write!(f, "consecutive reds"),
            Error::RightLeaningRed => write!(f, "right leaning red link"),
            Error::UnbalancedBlacks(msg) => write!(f, "unbalanced blacks, {}", msg),
            Error::SortError(a, b) => write!(f, "sort error, {:?} vs {:?}", a, b),
            Error::SizeMismatch(key, stored, counted) => write!(
                f,
                "size mismatch at {:?}, stored: {} counted: {}",
                key, stored, counted
            ),
        }
    }
}

impl<K> error::Error for Error<K> where K: Clone + Ord + fmt::Debug {}
