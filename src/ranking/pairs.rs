//! Unordered index pair enumeration

/// Every index pair `(i, j)` with `0 <= i < j < n`, in row-major order
///
/// Yields `n * (n - 1) / 2` pairs, and nothing for `n < 2`.
///
/// # Examples
/// ```
/// use anagram_rank::ranking::index_pairs;
///
/// let pairs: Vec<_> = index_pairs(3).collect();
/// assert_eq!(pairs, [(0, 1), (0, 2), (1, 2)]);
/// ```
pub fn index_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}
