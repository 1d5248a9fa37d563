//! Reusable comparator value
//!
//! [`KeyComparator`] binds a key map once so the same projection can be used
//! for repeated comparisons and for sorting.

use std::cmp::Ordering;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use super::{compare_keys, Comparison};
use crate::{Error, Result};

/// What to do when two derived keys have no ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomparablePolicy {
    /// Report [`Error::Incomparable`]
    #[default]
    Error,
    /// Report the pair as equal (`0`)
    TreatAsEqual,
}

/// Comparator that orders items by a derived key
///
/// # Example
///
/// ```rust
/// use docfixture::compare::KeyComparator;
///
/// let by_len = KeyComparator::new(|s: &&str| s.len());
/// assert_eq!(by_len.compare(&"cat", &"horse").unwrap(), -1);
///
/// let mut words = vec!["horse", "ox", "cat"];
/// by_len.sort(&mut words);
/// assert_eq!(words, vec!["ox", "cat", "horse"]);
/// ```
pub struct KeyComparator<T: ?Sized, K, F> {
    key_map: F,
    policy: IncomparablePolicy,
    _marker: PhantomData<fn(&T) -> K>,
}

impl<T, K, F> std::fmt::Debug for KeyComparator<T, K, F>
where
    T: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyComparator")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<T, K, F> Clone for KeyComparator<T, K, F>
where
    T: ?Sized,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            key_map: self.key_map.clone(),
            policy: self.policy,
            _marker: PhantomData,
        }
    }
}

impl<T, K, F> KeyComparator<T, K, F>
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    /// Create a comparator with the default [`IncomparablePolicy::Error`]
    pub fn new(key_map: F) -> Self {
        Self {
            key_map,
            policy: IncomparablePolicy::default(),
            _marker: PhantomData,
        }
    }

    /// Set the incomparable-key policy
    #[must_use]
    pub fn with_policy(mut self, policy: IncomparablePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current policy
    pub fn policy(&self) -> IncomparablePolicy {
        self.policy
    }

    /// Derive the key for a single item
    pub fn key(&self, item: &T) -> K {
        (self.key_map)(item)
    }

    /// Three-way comparison as an enum
    ///
    /// # Errors
    ///
    /// Returns [`Error::Incomparable`] for unordered keys under
    /// [`IncomparablePolicy::Error`].
    pub fn comparison(&self, item1: &T, item2: &T) -> Result<Comparison> {
        match compare_keys(&self.key(item1), &self.key(item2)) {
            Err(Error::Incomparable) if self.policy == IncomparablePolicy::TreatAsEqual => {
                Ok(Comparison::Equal)
            }
            other => other,
        }
    }

    /// Three-way comparison as a `-1`/`0`/`1` sentinel
    ///
    /// # Errors
    ///
    /// Returns [`Error::Incomparable`] for unordered keys under
    /// [`IncomparablePolicy::Error`].
    pub fn compare(&self, item1: &T, item2: &T) -> Result<i32> {
        self.comparison(item1, item2).map(Comparison::as_i32)
    }

    /// Ordering suitable for `slice::sort_by`
    ///
    /// Unordered keys are reported as `Ordering::Equal` regardless of policy,
    /// since a sort cannot surface an error.
    pub fn ordering(&self, item1: &T, item2: &T) -> Ordering {
        self.comparison(item1, item2)
            .map_or(Ordering::Equal, Comparison::to_ordering)
    }
}

impl<T, K, F> KeyComparator<T, K, F>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    /// Stable sort of `items` by derived key
    pub fn sort(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.ordering(a, b));
    }

    /// Position of the greatest item, first one wins on ties
    pub fn max_index(&self, items: &[T]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (idx, item) in items.iter().enumerate() {
            match best {
                Some(b) if self.ordering(item, &items[b]) != Ordering::Greater => {}
                _ => best = Some(idx),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_default_policy() {
        let cmp = KeyComparator::new(|x: &i32| *x);
        assert_eq!(cmp.policy(), IncomparablePolicy::Error);
    }

    #[test]
    fn test_compare_sentinels() {
        let cmp = KeyComparator::new(|x: &i32| *x);
        assert_eq!(cmp.compare(&3, &5).unwrap(), -1);
        assert_eq!(cmp.compare(&5, &3).unwrap(), 1);
        assert_eq!(cmp.compare(&4, &4).unwrap(), 0);
    }

    #[test]
    fn test_nan_errors_by_default() {
        let cmp = KeyComparator::new(|x: &f64| *x);
        assert!(matches!(cmp.compare(&f64::NAN, &1.0), Err(Error::Incomparable)));
    }

    #[test]
    fn test_nan_treat_as_equal() {
        let cmp = KeyComparator::new(|x: &f64| *x).with_policy(IncomparablePolicy::TreatAsEqual);
        assert_eq!(cmp.compare(&f64::NAN, &1.0).unwrap(), 0);
        assert_eq!(cmp.compare(&1.0, &2.0).unwrap(), -1);
    }

    #[test]
    fn test_sort_by_length_is_stable() {
        let cmp = KeyComparator::new(|s: &&str| s.len());
        let mut words = vec!["dog", "a", "cat", "bb"];
        cmp.sort(&mut words);
        assert_eq!(words, vec!["a", "bb", "dog", "cat"]);
    }

    #[test]
    fn test_sort_with_nan_does_not_panic() {
        let cmp = KeyComparator::new(|x: &f64| *x);
        let mut values = vec![3.0, f64::NAN, 1.0];
        cmp.sort(&mut values);
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_max_index() {
        let cmp = KeyComparator::new(|s: &String| s.len());
        let items = vec!["ab".to_string(), "abcd".to_string(), "wxyz".to_string()];
        assert_eq!(cmp.max_index(&items), Some(1));
        assert_eq!(cmp.max_index(&[]), None);
    }

    #[test]
    fn test_key() {
        let cmp = KeyComparator::new(|s: &String| s.to_uppercase());
        assert_eq!(cmp.key(&"abc".to_string()), "ABC");
    }

    #[test]
    fn test_clone_and_debug() {
        let cmp = KeyComparator::new(|x: &u8| *x).with_policy(IncomparablePolicy::TreatAsEqual);
        let cloned = cmp.clone();
        assert_eq!(cloned.policy(), IncomparablePolicy::TreatAsEqual);
        let debug = format!("{cmp:?}");
        assert!(debug.contains("KeyComparator"));
        assert!(debug.contains("TreatAsEqual"));
    }
}
