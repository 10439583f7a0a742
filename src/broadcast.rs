//! Broadcast expansion and the elementwise engine.
//!
//! Binary arithmetic runs in three steps:
//!
//! 1. [`can_broadcast`](crate::can_broadcast) classifies the two shapes
//! 2. [`broadcast_to`] replicates whichever side needs it into the common shape
//! 3. [`calculate`] applies a [`BinaryOp`] position-wise
//!
//! # Example
//!
//! ```rust
//! use numc::{broadcast_to, Array};
//!
//! let row = Array::from_vec(vec![1, 2, 3]);
//! let grid = broadcast_to(&row, &[2, 3])?;
//! assert_eq!(grid.as_slice(), &[1, 2, 3, 1, 2, 3]);
//! # Ok::<(), numc::NumcError>(())
//! ```

use crate::array::Array;
use crate::element::Element;
use crate::shape::{advance, broadcast_shape, can_broadcast, row_major_strides, shape_len, Broadcast};
use crate::{NumcError, Result};
use log::trace;
use num_traits::Zero;

/// Scalar operator applied by [`calculate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Apply the operator to one pair of elements.
    ///
    /// Integral overflow and division by zero are reported; float
    /// arithmetic follows IEEE.
    #[inline]
    pub fn apply<T: Element>(self, a: T, b: T) -> Result<T> {
        match self {
            BinaryOp::Add => a.checked_add(b).ok_or(NumcError::Overflow("add")),
            BinaryOp::Sub => a.checked_sub(b).ok_or(NumcError::Overflow("sub")),
            BinaryOp::Mul => a.checked_mul(b).ok_or(NumcError::Overflow("mul")),
            BinaryOp::Div => {
                if T::INTEGRAL && b.is_zero() {
                    return Err(NumcError::DivisionByZero);
                }
                a.checked_div(b).ok_or(NumcError::Overflow("div"))
            }
        }
    }
}

/// Replicate `src` into `target` shape.
///
/// Shapes are right-aligned. Every source axis of extent 1 maps all target
/// coordinates back to coordinate 0 (stride 0); any other axis must match the
/// target exactly. Missing leading source axes behave like extent 1.
pub fn broadcast_to<T: Copy>(src: &Array<T>, target: &[usize]) -> Result<Array<T>> {
    let mismatch = || NumcError::ShapeMismatch(src.shape().to_vec(), target.to_vec());
    let src_shape = src.shape();
    if src_shape.len() > target.len() {
        return Err(mismatch());
    }

    let lead = target.len() - src_shape.len();
    let src_strides = row_major_strides(src_shape);
    let mut strides = vec![0usize; target.len()];
    for (i, (&dim, &stride)) in src_shape.iter().zip(&src_strides).enumerate() {
        let want = target[lead + i];
        if dim == want {
            strides[lead + i] = stride;
        } else if dim != 1 {
            return Err(mismatch());
        }
    }

    let total = shape_len(target);
    trace!("broadcast {:?} -> {:?}", src_shape, target);
    let data = src.as_slice();
    let mut out = Vec::with_capacity(total);
    let mut coord = vec![0usize; target.len()];
    for _ in 0..total {
        let offset: usize = coord.iter().zip(&strides).map(|(c, s)| c * s).sum();
        out.push(data[offset]);
        advance(&mut coord, target);
    }
    Ok(Array::from_parts(target.to_vec(), out))
}

/// Apply `op` position-wise to two arrays holding the same number of elements.
///
/// The result takes the first operand's shape.
pub fn calculate<T: Element>(a: &Array<T>, b: &Array<T>, op: BinaryOp) -> Result<Array<T>> {
    if a.len() != b.len() {
        return Err(NumcError::SizeMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let data = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| op.apply(x, y))
        .collect::<Result<Vec<T>>>()?;
    Ok(Array::from_parts(a.shape().to_vec(), data))
}

/// Classify, expand and apply: the full broadcasting binary operation.
///
/// The result has the common broadcast shape; operand order is preserved.
pub(crate) fn broadcast_binary<T: Element>(
    a: &Array<T>,
    b: &Array<T>,
    op: BinaryOp,
) -> Result<Array<T>> {
    let mismatch = || NumcError::ShapeMismatch(a.shape().to_vec(), b.shape().to_vec());
    let class = can_broadcast(a.shape(), b.shape());
    if class == Broadcast::Invalid {
        return Err(mismatch());
    }
    let target = broadcast_shape(a.shape(), b.shape()).ok_or_else(mismatch)?;

    let mut out = match class {
        Broadcast::First => calculate(&broadcast_to(a, &target)?, b, op)?,
        Broadcast::Second => calculate(a, &broadcast_to(b, &target)?, op)?,
        Broadcast::Both => calculate(&broadcast_to(a, &target)?, &broadcast_to(b, &target)?, op)?,
        Broadcast::None | Broadcast::Invalid => calculate(a, b, op)?,
    };
    out.reshape(&target)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_row() {
        let row = Array::from_shape_vec(&[1, 3], vec![1, 2, 3]).unwrap();
        let out = broadcast_to(&row, &[2, 3]).unwrap();
        assert_eq!(out.shape(), &[2, 3]);
        assert_eq!(out.as_slice(), &[1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_broadcast_column() {
        let col = Array::from_shape_vec(&[2, 1], vec![1, 2]).unwrap();
        let out = broadcast_to(&col, &[2, 3]).unwrap();
        assert_eq!(out.as_slice(), &[1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_broadcast_rank_promotion() {
        let v = Array::from_vec(vec![5, 6]);
        let out = broadcast_to(&v, &[2, 2, 2]).unwrap();
        assert_eq!(out.shape(), &[2, 2, 2]);
        assert_eq!(out.as_slice(), &[5, 6, 5, 6, 5, 6, 5, 6]);
    }

    #[test]
    fn test_broadcast_incompatible() {
        let v = Array::from_vec(vec![1, 2, 3]);
        assert!(broadcast_to(&v, &[2, 2]).is_err());
        assert!(broadcast_to(&v, &[]).is_err());
    }

    #[test]
    fn test_calculate_ops() {
        let a = Array::from_vec(vec![6, 8, 10]);
        let b = Array::from_vec(vec![3, 2, 5]);
        assert_eq!(calculate(&a, &b, BinaryOp::Add).unwrap().as_slice(), &[9, 10, 15]);
        assert_eq!(calculate(&a, &b, BinaryOp::Sub).unwrap().as_slice(), &[3, 6, 5]);
        assert_eq!(calculate(&a, &b, BinaryOp::Mul).unwrap().as_slice(), &[18, 16, 50]);
        assert_eq!(calculate(&a, &b, BinaryOp::Div).unwrap().as_slice(), &[2, 4, 2]);
    }

    #[test]
    fn test_calculate_size_mismatch() {
        let a = Array::from_vec(vec![1, 2, 3]);
        let b = Array::from_vec(vec![1, 2]);
        assert_eq!(
            calculate(&a, &b, BinaryOp::Add),
            Err(NumcError::SizeMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_integer_division_by_zero() {
        let a = Array::from_vec(vec![1, 2]);
        let b = Array::from_vec(vec![1, 0]);
        assert_eq!(
            calculate(&a, &b, BinaryOp::Div),
            Err(NumcError::DivisionByZero)
        );
        let x = Array::from_vec(vec![1.0f64]);
        let y = Array::from_vec(vec![0.0f64]);
        assert!(calculate(&x, &y, BinaryOp::Div).unwrap().as_slice()[0].is_infinite());
    }

    #[test]
    fn test_integer_overflow_reported() {
        let a = Array::from_vec(vec![100i8, -128]);
        let b = Array::from_vec(vec![27i8, -1]);
        assert_eq!(calculate(&a, &b, BinaryOp::Add), Err(NumcError::Overflow("add")));
        assert_eq!(calculate(&a, &b, BinaryOp::Mul), Err(NumcError::Overflow("mul")));
        assert_eq!(
            calculate(&Array::from_vec(vec![i8::MIN]), &Array::from_vec(vec![-1i8]), BinaryOp::Div),
            Err(NumcError::Overflow("div"))
        );
        let small = Array::from_vec(vec![1u8]);
        assert_eq!(calculate(&small, &Array::from_vec(vec![2u8]), BinaryOp::Sub), Err(NumcError::Overflow("sub")));
        assert_eq!(calculate(&a, &b, BinaryOp::Sub).unwrap().as_slice(), &[73, -127]);
    }

    #[test]
    fn test_broadcast_both_sides() {
        let col = Array::from_shape_vec(&[2, 1], vec![10, 20]).unwrap();
        let row = Array::from_shape_vec(&[1, 3], vec![1, 2, 3]).unwrap();
        let out = broadcast_binary(&col, &row, BinaryOp::Sub).unwrap();
        assert_eq!(out.shape(), &[2, 3]);
        assert_eq!(out.as_slice(), &[9, 8, 7, 19, 18, 17]);
    }

    #[test]
    fn test_broadcast_keeps_operand_order() {
        let m = Array::from_shape_vec(&[2, 2], vec![10, 20, 30, 40]).unwrap();
        let v = Array::from_vec(vec![1, 2]);
        let out = broadcast_binary(&v, &m, BinaryOp::Sub).unwrap();
        assert_eq!(out.as_slice(), &[-9, -18, -29, -38]);
    }

    #[test]
    fn test_broadcast_invalid() {
        let a = Array::from_vec(vec![1, 2, 3]);
        let b = Array::from_vec(vec![1, 2]);
        assert_eq!(
            broadcast_binary(&a, &b, BinaryOp::Add),
            Err(NumcError::ShapeMismatch(vec![3], vec![2]))
        );
    }
}
