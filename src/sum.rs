//! Two-value summation fixture
//!
//! `a_plus_b` is the simplest fixture: it adds two values of the same type.

use std::ops::Add;

use crate::{Error, Result};

/// Sum of two values of the same type
///
/// Integer overflow follows the type's `Add` implementation.
pub fn a_plus_b<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Integer types with an overflow-checked addition
pub trait CheckedSum: Sized {
    /// `Some(a + b)`, or `None` on overflow
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_checked_sum {
    ($($t:ty),*) => {
        $(
            impl CheckedSum for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

impl_checked_sum!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Sum of two integers, reporting overflow as an error
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the sum does not fit in `T`.
pub fn checked_a_plus_b<T: CheckedSum>(a: T, b: T) -> Result<T> {
    a.checked_sum(b).ok_or(Error::Overflow("a_plus_b"))
}
