//! Elementwise transcendental and rounding functions.
//!
//! Every function computes in `f64` and casts back to the element type
//! (truncating toward zero for integers), keeping the input shape. A result
//! that does not fit the element type, such as `sqrt(-1)` for an integer
//! array, is reported as [`NumcError::CastFailed`].
//!
//! # Example
//!
//! ```rust
//! use numc::{array, math};
//!
//! let a = array![[1.0, 4.0], [9.0, 16.0]];
//! let r = math::sqrt(&a)?;
//! assert_eq!(r.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
//! # Ok::<(), numc::NumcError>(())
//! ```

use crate::array::Array;
use crate::element::Element;
use crate::{NumcError, Result};
use num_traits::ToPrimitive;

#[inline]
fn lift<T: Element>(v: T) -> Result<f64> {
    v.to_f64().ok_or(NumcError::CastFailed)
}

#[inline]
fn lower<T: Element>(x: f64) -> Result<T> {
    T::from_f64(x).ok_or(NumcError::CastFailed)
}

/// Apply a scalar `f64` function to every element.
pub fn apply_unary<T: Element>(a: &Array<T>, f: fn(f64) -> f64) -> Result<Array<T>> {
    a.try_map(|v| lower(f(lift(v)?)))
}

/// Apply a scalar `f64` function to every aligned pair of elements.
pub fn apply_binary<T: Element>(
    a: &Array<T>,
    b: &Array<T>,
    f: fn(f64, f64) -> f64,
) -> Result<Array<T>> {
    a.zip_map(b, |x, y| lower(f(lift(x)?, lift(y)?)))?
        .into_result()
}

impl<T> Array<Result<T>> {
    /// Hoist the first error out of an array of results.
    fn into_result(self) -> Result<Array<T>> {
        let shape = self.shape().to_vec();
        let data = self.into_vec().into_iter().collect::<Result<Vec<T>>>()?;
        Ok(Array::from_parts(shape, data))
    }
}

macro_rules! unary_math {
    ($($(#[$doc:meta])* $name:ident => $f:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<T: Element>(a: &Array<T>) -> Result<Array<T>> {
                apply_unary(a, $f)
            }
        )*

        /// Names of the single-argument functions in this module.
        pub const UNARY: &[&str] = &[$(stringify!($name)),*];
    };
}

macro_rules! binary_math {
    ($($(#[$doc:meta])* $name:ident => $f:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<T: Element>(a: &Array<T>, b: &Array<T>) -> Result<Array<T>> {
                apply_binary(a, b, $f)
            }
        )*

        /// Names of the two-argument functions in this module.
        pub const BINARY: &[&str] = &[$(stringify!($name)),*];
    };
}

unary_math! {
    sqrt => f64::sqrt;
    cbrt => f64::cbrt;
    exp => f64::exp;
    exp2 => f64::exp2;
    /// Natural logarithm.
    log => f64::ln;
    log10 => f64::log10;
    log2 => f64::log2;
    sin => f64::sin;
    cos => f64::cos;
    tan => f64::tan;
    asin => f64::asin;
    acos => f64::acos;
    atan => f64::atan;
    sinh => f64::sinh;
    cosh => f64::cosh;
    tanh => f64::tanh;
    floor => f64::floor;
    ceil => f64::ceil;
    /// Round half away from zero.
    round => f64::round;
    trunc => f64::trunc;
    abs => f64::abs;
}

binary_math! {
    /// `a[i]` raised to `b[i]`.
    pow => f64::powf;
    atan2 => f64::atan2;
    hypot => f64::hypot;
}

/// Every element raised to the scalar power `exp`.
pub fn pow_scalar<T: Element>(a: &Array<T>, exp: f64) -> Result<Array<T>> {
    a.try_map(|v| lower(lift(v)?.powf(exp)))
}
