//! Longest common subsequence computation.
//!
//! * time: `O(MN)`
//! * space: `O(MN)`
//!
//! This is the classic dynamic programming formulation: a full prefix length
//! table over the cross product of both sequences followed by a backtrack
//! from the bottom-right cell.  It is intentionally simple and exact; the
//! quadratic table bounds the practical size of diffable inputs, and the
//! deadline support exists so callers can cap the cost of hostile ones.
use crate::abstraction::Comparable;
use crate::deadline_support::{deadline_exceeded, Instant};

/// Computes the longest common subsequence of `x` and `y`.
///
/// The result is one valid LCS: an ordered sequence of references into `x`
/// whose elements also appear, in the same relative order, in `y`.  For
/// fixed inputs the result is identical on every call.
///
/// ```rust
/// use difftok::lcs::lcs;
/// use difftok::split_words;
///
/// let xs = split_words("the quick brown fox");
/// let ys = split_words("the slow brown cat");
/// let common: Vec<_> = lcs(&xs, &ys).iter().map(|w| w.as_str()).collect();
/// assert_eq!(common, ["the", "brown"]);
/// ```
pub fn lcs<'s, T: Comparable>(x: &'s [T], y: &'s [T]) -> Vec<&'s T> {
    lcs_deadline(x, y, None)
}

/// Computes the longest common subsequence of `x` and `y` with a deadline.
///
/// The table is filled row by row and the deadline is checked once per row.
/// When it is exceeded the computation gives up and returns an empty
/// sequence.  Callers treat a shorter LCS as a quality degradation, not an
/// error: the merge walk then classifies more elements as deleted and added
/// instead of unchanged.
pub fn lcs_deadline<'s, T: Comparable>(
    x: &'s [T],
    y: &'s [T],
    deadline: Option<Instant>,
) -> Vec<&'s T> {
    let table = match make_table(x, y, deadline) {
        Some(table) => table,
        None => return Vec::new(),
    };

    let width = y.len() + 1;
    let mut rv = Vec::new();
    let mut i = x.len();
    let mut j = y.len();

    while i > 0 && j > 0 {
        if x[i - 1].matches(&y[j - 1]) {
            rv.push(&x[i - 1]);
            i -= 1;
            j -= 1;
        } else if table[(i - 1) * width + j] >= table[i * width + j - 1] {
            // on a tie prefer stepping along x
            i -= 1;
        } else {
            j -= 1;
        }
    }

    rv.reverse();
    rv
}

/// Fills the prefix length table, one row per element of `x`.
///
/// `table[i * width + j]` is the LCS length of `x[..i]` and `y[..j]`.
fn make_table<T: Comparable>(x: &[T], y: &[T], deadline: Option<Instant>) -> Option<Vec<u32>> {
    let width = y.len() + 1;
    let mut table = vec![0u32; (x.len() + 1) * width];

    for i in 1..=x.len() {
        // are we running for too long?  give up on the table
        if deadline_exceeded(deadline) {
            return None;
        }
        for j in 1..=y.len() {
            table[i * width + j] = if x[i - 1].matches(&y[j - 1]) {
                table[(i - 1) * width + (j - 1)] + 1
            } else {
                table[(i - 1) * width + j].max(table[i * width + j - 1])
            };
        }
    }

    Some(table)
}

#[cfg(test)]
fn lcs_strs(x: &str, y: &str) -> Vec<String> {
    let xs = crate::split_words(x);
    let ys = crate::split_words(y);
    lcs(&xs, &ys).iter().map(|w| w.as_str().to_string()).collect()
}

#[cfg(test)]
fn is_subsequence(needle: &[String], haystack: &str) -> bool {
    let words = crate::split_words(haystack);
    let mut it = words.iter().map(|w| w.as_str());
    needle.iter().all(|n| it.any(|w| w == n.as_str()))
}

#[test]
fn test_basic() {
    assert_eq!(lcs_strs("a b c d", "b d e"), ["b", "d"]);
    assert_eq!(lcs_strs("a b c", "a b c"), ["a", "b", "c"]);
    assert_eq!(lcs_strs("a b c", "x y z"), Vec::<String>::new());
}

#[test]
fn test_empty() {
    assert_eq!(lcs_strs("", ""), Vec::<String>::new());
    assert_eq!(lcs_strs("a b", ""), Vec::<String>::new());
    assert_eq!(lcs_strs("", "a b"), Vec::<String>::new());
}

#[test]
fn test_classic() {
    // the textbook pair with LCS length 4
    let x = "A B C B D A B";
    let y = "B D C A B A";
    let result = lcs_strs(x, y);
    assert_eq!(result.len(), 4);
    assert!(is_subsequence(&result, x));
    assert!(is_subsequence(&result, y));
}

#[test]
fn test_length_symmetry() {
    let pairs = [
        ("a b c d e", "c d e a b"),
        ("x", "x y"),
        ("1 2 3", "3 2 1"),
        ("", "a"),
    ];
    for &(x, y) in pairs.iter() {
        assert_eq!(lcs_strs(x, y).len(), lcs_strs(y, x).len());
    }
}

#[test]
fn test_deterministic() {
    let first = lcs_strs("a x b y c", "a q b r c");
    let second = lcs_strs("a x b y c", "a q b r c");
    assert_eq!(first, second);
    assert_eq!(first, ["a", "b", "c"]);
}

#[test]
fn test_deadline_gives_up() {
    let xs = crate::split_words("a b c");
    let ys = crate::split_words("a x c");
    let deadline = Instant::now();
    std::thread::sleep(std::time::Duration::from_millis(5));
    assert_eq!(lcs_deadline(&xs, &ys, Some(deadline)).len(), 0);
}
