//! Dense linear algebra: determinant and flat inner product.
//!
//! # Key functions
//!
//! - [`det`]: Determinant of a square 2-axis array
//! - [`dot`]: Sum of position-wise products over the whole buffer

use crate::array::Array;
use crate::element::Element;
use crate::{NumcError, Result, SINGULAR_EPSILON};
use log::debug;
use num_traits::ToPrimitive;

// ============================================================================
// Determinant
// ============================================================================

/// Determinant by Gaussian elimination with partial pivoting.
///
/// Works in `f64` whatever the element type. A pivot smaller than
/// [`SINGULAR_EPSILON`] in magnitude makes the matrix singular and the result
/// zero. Integral results are rounded before the cast back.
pub fn det<T: Element>(a: &Array<T>) -> Result<T> {
    let n = match *a.shape() {
        [rows, cols] if rows == cols => rows,
        [rows, cols] => return Err(NumcError::NotSquare { rows, cols }),
        _ => return Err(NumcError::NotMatrix { ndim: a.ndim() }),
    };

    let mut m = a
        .iter()
        .map(|v| v.to_f64().ok_or(NumcError::CastFailed))
        .collect::<Result<Vec<f64>>>()?;

    let mut result = 1.0;
    for col in 0..n {
        // first row wins ties
        let pivot_row = (col + 1..n).fold(col, |best, row| {
            if m[row * n + col].abs() > m[best * n + col].abs() {
                row
            } else {
                best
            }
        });
        let pivot = m[pivot_row * n + col];
        if pivot.abs() < SINGULAR_EPSILON {
            debug!("det: singular at column {col} (pivot {pivot:e})");
            return Ok(T::zero());
        }
        if pivot_row != col {
            for k in 0..n {
                m.swap(col * n + k, pivot_row * n + k);
            }
            result = -result;
        }
        result *= pivot;

        for row in col + 1..n {
            let factor = m[row * n + col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                m[row * n + k] -= factor * m[col * n + k];
            }
        }
    }

    let result = if T::INTEGRAL { result.round() } else { result };
    T::from_f64(result).ok_or(NumcError::CastFailed)
}

/// Flat inner product: the sum of position-wise products over both buffers.
///
/// Only the element counts must agree; shapes are ignored.
pub fn dot<T: Element>(x: &Array<T>, y: &Array<T>) -> Result<T> {
    if x.len() != y.len() {
        return Err(NumcError::SizeMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    x.iter()
        .zip(y.iter())
        .try_fold(T::zero(), |acc, (&a, &b)| acc.checked_add(a.checked_mul(b)?))
        .ok_or(NumcError::Overflow("dot"))
}

impl<T: Element> Array<T> {
    /// See [`det`].
    pub fn det(&self) -> Result<T> {
        det(self)
    }

    /// See [`dot`].
    pub fn dot(&self, other: &Array<T>) -> Result<T> {
        dot(self, other)
    }
}
