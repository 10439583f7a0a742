//! Scalar bounds for array elements.

use num_traits::{Num, NumCast};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Numeric element types storable in an [`Array`](crate::Array).
///
/// Arithmetic, ordering and lossy `f64` round-trips come from the `num-traits`
/// bounds. `hash_key` gives every value an equality-preserving 64-bit key so the
/// uniqueness queries can use hashed lookups for floats as well as integers.
/// `total_order` sorts every value, NaN included, and the `checked_*` hooks
/// report integer overflow as `None` (float arithmetic never fails).
pub trait Element: Copy + Debug + PartialOrd + Num + NumCast + Send + Sync + 'static {
    /// True for integer types.
    const INTEGRAL: bool;

    /// Key with `a == b` implying `a.hash_key() == b.hash_key()`.
    fn hash_key(self) -> u64;

    /// Total order: ascending, with NaNs after every number.
    fn total_order(&self, other: &Self) -> Ordering;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    /// `None` on integer division by zero or `MIN / -1`.
    fn checked_div(self, rhs: Self) -> Option<Self>;

    /// Convert from `f64`, truncating toward zero for integer types.
    #[inline]
    fn from_f64(value: f64) -> Option<Self> {
        <Self as NumCast>::from(value)
    }
}

macro_rules! impl_element_int {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const INTEGRAL: bool = true;

                #[inline]
                fn hash_key(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_div(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_element_float {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const INTEGRAL: bool = false;

                #[inline]
                fn hash_key(self) -> u64 {
                    // -0.0 == 0.0
                    if self == 0.0 {
                        0
                    } else {
                        self.to_bits() as u64
                    }
                }

                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (false, true) => Ordering::Less,
                        (true, false) => Ordering::Greater,
                        _ => self.total_cmp(other),
                    }
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }

                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }
            }
        )*
    };
}

impl_element_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_element_float!(f32, f64);
