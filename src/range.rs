//! Key ranges over an ordered key domain.
//!
//! `KeyRange` is a closed algebraic object: union, intersection, and
//! complement are total and always return a valid range, trading precision
//! for that totality. Every operation preserves the superset guarantee the
//! scan layer relies on: a derived range may admit keys the predicate
//! rejects, never the other way around.

use std::{cmp::Ordering, fmt, ops::Bound};

/// A contiguous key range, or the canonical empty range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyRange<K> {
    /// Matches no keys. Every operation that would produce an inverted span
    /// normalizes to this single value, so empty ranges compare equal.
    Empty,
    /// Contiguous interval between two bounds. Both bounds unbounded is the
    /// open range covering the whole key domain.
    Span {
        /// Lower bound (inclusive/exclusive/unbounded).
        low: Bound<K>,
        /// Upper bound (inclusive/exclusive/unbounded).
        high: Bound<K>,
    },
}

impl<K> KeyRange<K> {
    /// The open range covering the entire key domain.
    #[must_use]
    pub fn all() -> Self {
        KeyRange::Span {
            low: Bound::Unbounded,
            high: Bound::Unbounded,
        }
    }

    /// Whether this is the canonical empty range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, KeyRange::Empty)
    }

    /// Whether this range covers the entire key domain.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(
            self,
            KeyRange::Span {
                low: Bound::Unbounded,
                high: Bound::Unbounded,
            }
        )
    }

    /// Borrowed view of the bounds, shaped for `BTreeMap::range`-style seek
    /// calls. Returns `None` for the empty range, which has nothing to scan.
    pub fn bounds(&self) -> Option<(Bound<&K>, Bound<&K>)> {
        match self {
            KeyRange::Empty => None,
            KeyRange::Span { low, high } => Some((low.as_ref(), high.as_ref())),
        }
    }
}

impl<K: Ord> KeyRange<K> {
    /// Create a range from explicit bounds, normalizing inverted spans to
    /// the canonical empty range.
    #[must_use]
    pub fn new(low: Bound<K>, high: Bound<K>) -> Self {
        if is_empty_span(&low, &high) {
            KeyRange::Empty
        } else {
            KeyRange::Span { low, high }
        }
    }

    /// The single-point range `[key, key]`.
    #[must_use]
    pub fn point(key: K) -> Self
    where
        K: Clone,
    {
        KeyRange::Span {
            low: Bound::Included(key.clone()),
            high: Bound::Included(key),
        }
    }

    /// The range `(-inf, key)`.
    #[must_use]
    pub fn less_than(key: K) -> Self {
        KeyRange::Span {
            low: Bound::Unbounded,
            high: Bound::Excluded(key),
        }
    }

    /// The range `(-inf, key]`.
    #[must_use]
    pub fn at_most(key: K) -> Self {
        KeyRange::Span {
            low: Bound::Unbounded,
            high: Bound::Included(key),
        }
    }

    /// The range `(key, +inf)`.
    #[must_use]
    pub fn greater_than(key: K) -> Self {
        KeyRange::Span {
            low: Bound::Excluded(key),
            high: Bound::Unbounded,
        }
    }

    /// The range `[key, +inf)`.
    #[must_use]
    pub fn at_least(key: K) -> Self {
        KeyRange::Span {
            low: Bound::Included(key),
            high: Bound::Unbounded,
        }
    }

    /// Whether this range contains `key`.
    pub fn contains(&self, key: &K) -> bool {
        let KeyRange::Span { low, high } = self else {
            return false;
        };
        let low_ok = match low {
            Bound::Unbounded => true,
            Bound::Included(bound) => key >= bound,
            Bound::Excluded(bound) => key > bound,
        };
        if !low_ok {
            return false;
        }
        match high {
            Bound::Unbounded => true,
            Bound::Included(bound) => key <= bound,
            Bound::Excluded(bound) => key < bound,
        }
    }

    /// Intersection of two ranges: the tighter bound wins on each side, and
    /// an inverted result normalizes to empty. Commutative and associative,
    /// with `all()` as the identity.
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        match (self, other) {
            (KeyRange::Empty, _) | (_, KeyRange::Empty) => KeyRange::Empty,
            (
                KeyRange::Span { low: al, high: ah },
                KeyRange::Span { low: bl, high: bh },
            ) => KeyRange::new(max_lower(al, bl), min_upper(ah, bh)),
        }
    }

    /// Convex-hull union of two ranges: the looser bound wins on each side.
    ///
    /// This is not an exact set union: unioning disjoint ranges also covers
    /// the gap between them. The result is always a superset of both inputs,
    /// which is the only guarantee the scan layer needs; the predicate is
    /// re-applied to every yielded row downstream.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        match (self, other) {
            (KeyRange::Empty, range) | (range, KeyRange::Empty) => range,
            (
                KeyRange::Span { low: al, high: ah },
                KeyRange::Span { low: bl, high: bh },
            ) => KeyRange::Span {
                low: min_lower(al, bl),
                high: max_upper(ah, bh),
            },
        }
    }

    /// Complement over the full key domain.
    ///
    /// Exact when exactly one bound is set: that bound flips side and
    /// inclusivity. A span with both bounds set has no single-range
    /// complement, and the complement of the open range is the empty set;
    /// both fall back to `all()`, which stays superset-safe at the cost of
    /// precision. Consequently `complement` is not an involution on
    /// two-sided spans.
    #[must_use]
    pub fn complement(self) -> Self {
        match self {
            KeyRange::Empty => KeyRange::all(),
            KeyRange::Span {
                low: Bound::Unbounded,
                high: Bound::Unbounded,
            } => KeyRange::all(),
            KeyRange::Span {
                low: Bound::Unbounded,
                high,
            } => KeyRange::Span {
                low: flip(high),
                high: Bound::Unbounded,
            },
            KeyRange::Span {
                low,
                high: Bound::Unbounded,
            } => KeyRange::Span {
                low: Bound::Unbounded,
                high: flip(low),
            },
            KeyRange::Span { .. } => KeyRange::all(),
        }
    }
}

impl<K: fmt::Display> fmt::Display for KeyRange<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRange::Empty => f.write_str("(empty)"),
            KeyRange::Span { low, high } => {
                match low {
                    Bound::Unbounded => f.write_str("(-inf")?,
                    Bound::Included(key) => write!(f, "[{key}")?,
                    Bound::Excluded(key) => write!(f, "({key}")?,
                }
                match high {
                    Bound::Unbounded => f.write_str(", +inf)"),
                    Bound::Included(key) => write!(f, ", {key}]"),
                    Bound::Excluded(key) => write!(f, ", {key})"),
                }
            }
        }
    }
}

// Flip a bound's inclusivity, keeping the key.
fn flip<K>(bound: Bound<K>) -> Bound<K> {
    match bound {
        Bound::Included(key) => Bound::Excluded(key),
        Bound::Excluded(key) => Bound::Included(key),
        Bound::Unbounded => Bound::Unbounded,
    }
}

// Lower-bound order: Unbounded is least; at equal keys an inclusive bound
// admits more, so Included(x) < Excluded(x).
fn cmp_lower<K: Ord>(a: &Bound<K>, b: &Bound<K>) -> Ordering {
    use Bound as B;
    match (a, b) {
        (B::Unbounded, B::Unbounded) => Ordering::Equal,
        (B::Unbounded, _) => Ordering::Less,
        (_, B::Unbounded) => Ordering::Greater,
        (B::Included(x), B::Included(y)) | (B::Excluded(x), B::Excluded(y)) => x.cmp(y),
        (B::Included(x), B::Excluded(y)) => x.cmp(y).then(Ordering::Less),
        (B::Excluded(x), B::Included(y)) => x.cmp(y).then(Ordering::Greater),
    }
}

// Upper-bound order: Unbounded is greatest; at equal keys Excluded(x) < Included(x).
fn cmp_upper<K: Ord>(a: &Bound<K>, b: &Bound<K>) -> Ordering {
    use Bound as B;
    match (a, b) {
        (B::Unbounded, B::Unbounded) => Ordering::Equal,
        (B::Unbounded, _) => Ordering::Greater,
        (_, B::Unbounded) => Ordering::Less,
        (B::Included(x), B::Included(y)) | (B::Excluded(x), B::Excluded(y)) => x.cmp(y),
        (B::Included(x), B::Excluded(y)) => x.cmp(y).then(Ordering::Greater),
        (B::Excluded(x), B::Included(y)) => x.cmp(y).then(Ordering::Less),
    }
}

fn min_lower<K: Ord>(a: Bound<K>, b: Bound<K>) -> Bound<K> {
    if cmp_lower(&a, &b) == Ordering::Greater {
        b
    } else {
        a
    }
}

fn max_lower<K: Ord>(a: Bound<K>, b: Bound<K>) -> Bound<K> {
    if cmp_lower(&a, &b) == Ordering::Less {
        b
    } else {
        a
    }
}

fn min_upper<K: Ord>(a: Bound<K>, b: Bound<K>) -> Bound<K> {
    if cmp_upper(&a, &b) == Ordering::Greater {
        b
    } else {
        a
    }
}

fn max_upper<K: Ord>(a: Bound<K>, b: Bound<K>) -> Bound<K> {
    if cmp_upper(&a, &b) == Ordering::Less {
        b
    } else {
        a
    }
}

fn is_empty_span<K: Ord>(low: &Bound<K>, high: &Bound<K>) -> bool {
    use Bound as B;
    match (low, high) {
        (B::Unbounded, _) | (_, B::Unbounded) => false,
        (B::Included(a), B::Included(b)) => a > b,
        (B::Included(a), B::Excluded(b)) | (B::Excluded(a), B::Included(b)) => a >= b,
        (B::Excluded(a), B::Excluded(b)) => a >= b,
    }
}
