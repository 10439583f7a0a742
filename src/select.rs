//! Mask-driven choice between two operands (`where`).

use crate::array::Array;
use crate::element::Element;
use crate::mask::Mask;
use crate::{NumcError, Result};

/// One operand of [`select`]: either a scalar repeated at every position or an
/// array read position by position.
pub trait Choice {
    type Elem: Element;

    /// Value at flat position `i`.
    fn at(&self, i: usize) -> Self::Elem;

    /// Shape of an array operand; `None` for a scalar.
    fn shape(&self) -> Option<&[usize]>;

    /// Element count of an array operand; `None` for a scalar.
    fn count(&self) -> Option<usize>;
}

impl<T: Element> Choice for T {
    type Elem = T;

    #[inline]
    fn at(&self, _i: usize) -> T {
        *self
    }

    fn shape(&self) -> Option<&[usize]> {
        None
    }

    fn count(&self) -> Option<usize> {
        None
    }
}

impl<T: Element> Choice for &Array<T> {
    type Elem = T;

    #[inline]
    fn at(&self, i: usize) -> T {
        self.as_slice()[i]
    }

    fn shape(&self) -> Option<&[usize]> {
        Some(Array::shape(self))
    }

    fn count(&self) -> Option<usize> {
        Some(Array::len(self))
    }
}

/// Pick `x` where `cond` is true and `y` elsewhere.
///
/// Array operands must hold exactly `cond.len()` elements. The result takes
/// the shape of the first array operand, or is 1-D when both are scalars.
///
/// # Example
///
/// ```rust
/// use numc::{select, Array};
///
/// let c = Array::from_vec(vec![1, -1, 2, -2]);
/// let out = select(&c.greater_scalar(0), 0, &c)?;
/// assert_eq!(out.as_slice(), &[0, -1, 0, -2]);
/// # Ok::<(), numc::NumcError>(())
/// ```
pub fn select<X, Y>(cond: &Mask, x: X, y: Y) -> Result<Array<X::Elem>>
where
    X: Choice,
    Y: Choice<Elem = X::Elem>,
{
    for len in [x.count(), y.count()].into_iter().flatten() {
        if len != cond.len() {
            return Err(NumcError::SizeMismatch {
                expected: cond.len(),
                actual: len,
            });
        }
    }
    let shape = x
        .shape()
        .or_else(|| y.shape())
        .map_or_else(|| vec![cond.len()], <[usize]>::to_vec);
    let data = cond
        .iter()
        .enumerate()
        .map(|(i, take_x)| if take_x { x.at(i) } else { y.at(i) })
        .collect();
    Ok(Array::from_parts(shape, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_scalar() {
        let cond = Mask::from(vec![true, false, true]);
        assert_eq!(select(&cond, 1, 2).unwrap().as_slice(), &[1, 2, 1]);
    }

    #[test]
    fn test_array_scalar() {
        let a = Array::from_shape_vec(&[2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let cond = a.greater_scalar(2.0);
        let out = select(&cond, &a, -1.0).unwrap();
        assert_eq!(out.shape(), &[2, 2]);
        assert_eq!(out.as_slice(), &[-1.0, -1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_array_array() {
        let a = Array::from_vec(vec![1, 2, 3]);
        let b = Array::from_vec(vec![10, 20, 30]);
        let cond = Mask::from(vec![false, true, false]);
        assert_eq!(select(&cond, &a, &b).unwrap().as_slice(), &[10, 2, 30]);
    }

    #[test]
    fn test_length_mismatch() {
        let a = Array::from_vec(vec![1, 2]);
        let cond = Mask::new(3);
        assert_eq!(
            select(&cond, &a, 0),
            Err(NumcError::SizeMismatch {
                expected: 3,
                actual: 2
            })
        );
    }
}
