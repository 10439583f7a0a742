//! Array factories.

use crate::array::Array;
use crate::element::Element;
use crate::shape::shape_len;
use crate::{NumcError, Result};
use num_traits::{NumCast, ToPrimitive};

/// Array of `shape` with every element set to `value`.
pub fn full<T: Copy>(shape: &[usize], value: T) -> Array<T> {
    Array::from_parts(shape.to_vec(), vec![value; shape_len(shape)])
}

pub fn zeros<T: Element>(shape: &[usize]) -> Array<T> {
    full(shape, T::zero())
}

pub fn zeros_like<T: Element>(a: &Array<T>) -> Array<T> {
    zeros(a.shape())
}

pub fn ones<T: Element>(shape: &[usize]) -> Array<T> {
    full(shape, T::one())
}

pub fn ones_like<T: Element>(a: &Array<T>) -> Array<T> {
    ones(a.shape())
}

/// `n x n` identity matrix.
pub fn identity<T: Element>(n: usize) -> Array<T> {
    eye(n, n, 0)
}

/// `n x m` matrix with ones on diagonal `k` and zeros elsewhere.
///
/// `k > 0` selects a diagonal above the main one, `k < 0` one below. A
/// diagonal entirely outside the matrix leaves it all zeros.
pub fn eye<T: Element>(n: usize, m: usize, k: isize) -> Array<T> {
    let mut out = zeros(&[n, m]);
    let data = out.as_mut_slice();
    for row in 0..n {
        let col = row as isize + k;
        if (0..m as isize).contains(&col) {
            data[row * m + col as usize] = T::one();
        }
    }
    out
}

/// 1-D array `start, start + step, ...` stopping before `stop`.
pub fn arange<T: Element>(start: T, stop: T, step: T) -> Result<Array<T>> {
    if step.is_zero() {
        return Err(NumcError::ZeroStep);
    }
    let (s, e, d) = (
        start.to_f64().ok_or(NumcError::CastFailed)?,
        stop.to_f64().ok_or(NumcError::CastFailed)?,
        step.to_f64().ok_or(NumcError::CastFailed)?,
    );
    let count = ((e - s) / d).ceil().max(0.0) as usize;
    if !T::INTEGRAL {
        return (0..count)
            .map(|i| <T as NumCast>::from(i).map(|i| start + i * step).ok_or(NumcError::CastFailed))
            .collect::<Result<Vec<T>>>()
            .map(Array::from_vec);
    }
    // every term stays within [start, stop)
    let mut values = Vec::with_capacity(count);
    let mut next = start;
    for k in 0..count {
        if k > 0 {
            next = next.checked_add(step).ok_or(NumcError::Overflow("arange"))?;
        }
        values.push(next);
    }
    Ok(Array::from_vec(values))
}

/// Join two arrays along `axis`.
///
/// The lower-rank operand is promoted by prepending extent-1 axes. All other
/// extents must agree.
///
/// # Example
///
/// ```rust
/// use numc::{array, concatenate};
///
/// let row = array![1, 2, 3];
/// let block = array![[4, 5, 6], [7, 8, 9]];
/// let joined = concatenate(&row, &block, 0)?;
/// assert_eq!(joined.shape(), &[3, 3]);
/// # Ok::<(), numc::NumcError>(())
/// ```
pub fn concatenate<T: Copy>(a: &Array<T>, b: &Array<T>, axis: usize) -> Result<Array<T>> {
    let rank = a.ndim().max(b.ndim());
    let promote = |dims: &[usize]| {
        let mut out = vec![1; rank - dims.len()];
        out.extend_from_slice(dims);
        out
    };
    let (a_dims, b_dims) = (promote(a.shape()), promote(b.shape()));
    if axis >= rank {
        return Err(NumcError::InvalidAxis { axis, rank });
    }
    let compatible = a_dims
        .iter()
        .zip(&b_dims)
        .enumerate()
        .all(|(i, (x, y))| i == axis || x == y);
    if !compatible {
        return Err(NumcError::ShapeMismatch(a_dims, b_dims));
    }

    let outer = shape_len(&a_dims[..axis]);
    let a_block = shape_len(&a_dims[axis..]);
    let b_block = shape_len(&b_dims[axis..]);
    let mut data = Vec::with_capacity(a.len() + b.len());
    for i in 0..outer {
        data.extend_from_slice(&a.as_slice()[i * a_block..(i + 1) * a_block]);
        data.extend_from_slice(&b.as_slice()[i * b_block..(i + 1) * b_block]);
    }

    let mut shape = a_dims;
    shape[axis] += b_dims[axis];
    Ok(Array::from_parts(shape, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_ones_full() {
        let z: Array<i32> = zeros(&[2, 3]);
        assert_eq!(z.shape(), &[2, 3]);
        assert!(z.iter().all(|&v| v == 0));
        let o = ones_like(&z);
        assert_eq!(o.sum().unwrap(), 6);
        assert_eq!(zeros_like(&o), z);
        let f = full(&[2], 7u8);
        assert_eq!(f.as_slice(), &[7, 7]);
        assert_eq!(ones::<f64>(&[0, 4]).len(), 0);
    }

    #[test]
    fn test_identity() {
        let i: Array<i32> = identity(3);
        assert_eq!(i.as_slice(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_eye_offsets() {
        let upper: Array<i32> = eye(3, 4, 1);
        assert_eq!(upper.as_slice(), &[0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1]);
        let lower: Array<i32> = eye(3, 3, -1);
        assert_eq!(lower.as_slice(), &[0, 0, 0, 1, 0, 0, 0, 1, 0]);
        let outside: Array<i32> = eye(4, 8, 8);
        assert_eq!(outside.sum().unwrap(), 0);
    }

    #[test]
    fn test_arange() {
        assert_eq!(arange(0, 5, 1).unwrap().as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(arange(1, 8, 3).unwrap().as_slice(), &[1, 4, 7]);
        assert_eq!(arange(5, 0, -2).unwrap().as_slice(), &[5, 3, 1]);
        assert_eq!(arange(0.0, 1.0, 0.25).unwrap().len(), 4);
        assert!(arange(3, 1, 1).unwrap().is_empty());
        assert_eq!(arange(0, 1, 0), Err(NumcError::ZeroStep));
    }

    #[test]
    fn test_arange_full_integer_range() {
        let a = arange(-128i8, 127, 2).unwrap();
        assert_eq!(a.len(), 128);
        assert_eq!(a.as_slice()[127], 126);
        let down = arange(127i8, -128, -1).unwrap();
        assert_eq!(down.len(), 255);
        assert_eq!(down.as_slice()[254], -127);
    }

    #[test]
    fn test_concatenate_axis0_promotes_rank() {
        let row = Array::from_vec(vec![1, 2, 3]);
        let block = Array::from_shape_vec(&[3, 3], (10..19).collect()).unwrap();
        let out = concatenate(&row, &block, 0).unwrap();
        assert_eq!(out.shape(), &[4, 3]);
        assert_eq!(&out.as_slice()[..4], &[1, 2, 3, 10]);
    }

    #[test]
    fn test_concatenate_axis1() {
        let col = Array::from_shape_vec(&[2, 1], vec![1, 2]).unwrap();
        let block = Array::from_shape_vec(&[2, 2], vec![3, 4, 5, 6]).unwrap();
        let out = concatenate(&col, &block, 1).unwrap();
        assert_eq!(out.shape(), &[2, 3]);
        assert_eq!(out.as_slice(), &[1, 3, 4, 2, 5, 6]);
    }

    #[test]
    fn test_concatenate_errors() {
        let a = Array::from_shape_vec(&[2, 2], vec![0; 4]).unwrap();
        let b = Array::from_shape_vec(&[3, 3], vec![0; 9]).unwrap();
        assert!(matches!(
            concatenate(&a, &b, 0),
            Err(NumcError::ShapeMismatch(..))
        ));
        assert_eq!(
            concatenate(&a, &a, 2),
            Err(NumcError::InvalidAxis { axis: 2, rank: 2 })
        );
    }
}
