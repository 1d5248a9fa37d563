//! Key-mapped three-way comparison
//!
//! Items are never compared directly. A caller-supplied key map projects each
//! item to an orderable key, and only the two keys are compared. The result is
//! always one of the sentinels `-1`, `0` or `1`.
//!
//! # Incomparable keys
//!
//! [`compare`] requires a total order (`Ord`), so every pair of keys has an
//! answer. [`try_compare`] accepts a partial order (`PartialOrd`) and returns
//! [`Error::Incomparable`] when the keys have no ordering, for example a
//! `NaN` key. [`KeyComparator`] can be configured to treat such pairs as equal
//! instead via [`IncomparablePolicy::TreatAsEqual`].
//!
//! # Example
//!
//! ```rust
//! use docfixture::compare::compare;
//!
//! assert_eq!(compare(|x: &i32| *x, &3, &5), -1);
//! assert_eq!(compare(|s: &&str| s.len(), &"cat", &"dog"), 0);
//! ```

mod comparator;

pub use comparator::{IncomparablePolicy, KeyComparator};

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Outcome of a three-way comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    /// First key orders strictly before the second
    Less = -1,
    /// Keys are equal under the ordering
    Equal = 0,
    /// First key orders strictly after the second
    Greater = 1,
}

impl Comparison {
    /// Integer sentinel for this outcome
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Outcome with the operands swapped
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Equal => Self::Equal,
            Self::Greater => Self::Less,
        }
    }

    /// Equivalent `std::cmp::Ordering`
    #[must_use]
    pub const fn to_ordering(self) -> Ordering {
        match self {
            Self::Less => Ordering::Less,
            Self::Equal => Ordering::Equal,
            Self::Greater => Ordering::Greater,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl From<Comparison> for i32 {
    fn from(comparison: Comparison) -> Self {
        comparison.as_i32()
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

/// Compare two items through their derived keys
///
/// Returns `-1` if `key_map(item1) < key_map(item2)`, `1` if it is greater,
/// and `0` if the keys are equal. The key map is called once per item.
pub fn compare<T, K, F>(key_map: F, item1: &T, item2: &T) -> i32
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    let val1 = key_map(item1);
    let val2 = key_map(item2);
    Comparison::from(val1.cmp(&val2)).as_i32()
}

/// Compare two items through keys that may only be partially ordered
///
/// # Errors
///
/// Returns [`Error::Incomparable`] when the two keys have no ordering.
pub fn try_compare<T, K, F>(key_map: F, item1: &T, item2: &T) -> Result<i32>
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    compare_keys(&key_map(item1), &key_map(item2)).map(Comparison::as_i32)
}

/// Three-way comparison of two already-derived keys
///
/// # Errors
///
/// Returns [`Error::Incomparable`] when the keys have no ordering.
pub fn compare_keys<K>(val1: &K, val2: &K) -> Result<Comparison>
where
    K: PartialOrd + ?Sized,
{
    if val1 < val2 {
        Ok(Comparison::Less)
    } else if val1 > val2 {
        Ok(Comparison::Greater)
    } else if val1 == val2 {
        Ok(Comparison::Equal)
    } else {
        Err(Error::Incomparable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_less() {
        assert_eq!(compare(|x: &i32| *x, &3, &5), -1);
    }

    #[test]
    fn test_identity_greater_strings() {
        assert_eq!(compare(|s: &&str| s.to_string(), &"b", &"a"), 1);
    }

    #[test]
    fn test_length_equal_for_different_strings() {
        assert_eq!(compare(|s: &&str| s.len(), &"cat", &"dog"), 0);
    }

    #[test]
    fn test_unsized_items() {
        assert_eq!(compare(str::len, "abc", "de"), 1);
        assert_eq!(compare(<[u8]>::len, &[1u8][..], &[1u8, 2][..]), -1);
    }

    #[test]
    fn test_key_map_ignores_item_structure() {
        #[derive(Debug)]
        struct Person {
            name: &'static str,
            age: u32,
        }

        let alice = Person { name: "alice", age: 30 };
        let bob = Person { name: "bob", age: 30 };
        assert_eq!(compare(|p: &Person| p.age, &alice, &bob), 0);
        assert_eq!(compare(|p: &Person| p.name, &alice, &bob), -1);
    }

    #[test]
    fn test_key_map_called_once_per_item() {
        let calls = std::cell::Cell::new(0);
        let result = compare(
            |x: &i32| {
                calls.set(calls.get() + 1);
                *x
            },
            &1,
            &2,
        );
        assert_eq!(result, -1);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_try_compare_floats() {
        assert_eq!(try_compare(|x: &f64| *x, &1.5, &2.5).unwrap(), -1);
        assert_eq!(try_compare(|x: &f64| *x, &2.5, &1.5).unwrap(), 1);
        assert_eq!(try_compare(|x: &f64| *x, &0.0, &-0.0).unwrap(), 0);
    }

    #[test]
    fn test_try_compare_nan_is_incomparable() {
        let result = try_compare(|x: &f64| *x, &f64::NAN, &1.0);
        assert!(matches!(result, Err(Error::Incomparable)));

        let result = try_compare(|x: &f64| *x, &f64::NAN, &f64::NAN);
        assert!(matches!(result, Err(Error::Incomparable)));
    }

    #[test]
    fn test_compare_keys_direct() {
        assert_eq!(compare_keys(&1, &1).unwrap(), Comparison::Equal);
        assert_eq!(compare_keys("a", "b").unwrap(), Comparison::Less);
    }

    #[test]
    fn test_comparison_sentinels() {
        assert_eq!(Comparison::Less.as_i32(), -1);
        assert_eq!(Comparison::Equal.as_i32(), 0);
        assert_eq!(Comparison::Greater.as_i32(), 1);
        assert_eq!(i32::from(Comparison::Greater), 1);
    }

    #[test]
    fn test_comparison_reverse() {
        assert_eq!(Comparison::Less.reverse(), Comparison::Greater);
        assert_eq!(Comparison::Equal.reverse(), Comparison::Equal);
        assert_eq!(Comparison::Greater.reverse(), Comparison::Less);
    }

    #[test]
    fn test_comparison_ordering_conversion() {
        for ordering in [Ordering::Less, Ordering::Equal, Ordering::Greater] {
            assert_eq!(Comparison::from(ordering).to_ordering(), ordering);
        }
    }

    #[test]
    fn test_comparison_display() {
        assert_eq!(Comparison::Less.to_string(), "-1");
        assert_eq!(Comparison::Greater.to_string(), "1");
    }

    #[test]
    fn test_comparison_serde() {
        let json = serde_json::to_string(&Comparison::Less).unwrap();
        assert_eq!(json, "\"Less\"");
        let back: Comparison = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Comparison::Less);
    }
}
