//! Integral bitwise helpers over arrays and masks.
//!
//! [`Bitwise`] is implemented for integer arrays and for [`Mask`]. Binary
//! operations require equal sizes, and arrays must also agree in shape.

use crate::array::Array;
use crate::element::Element;
use crate::mask::Mask;
use crate::{NumcError, Result};
use num_traits::PrimInt;

/// Position-wise bit operations.
pub trait Bitwise: Sized {
    fn bitwise_and(&self, other: &Self) -> Result<Self>;
    fn bitwise_or(&self, other: &Self) -> Result<Self>;
    fn bitwise_xor(&self, other: &Self) -> Result<Self>;
    fn bitwise_not(&self) -> Self;

    /// Alias of [`bitwise_not`](Self::bitwise_not).
    fn invert(&self) -> Self {
        self.bitwise_not()
    }
}

fn check_sizes(a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(NumcError::SizeMismatch {
            expected: a,
            actual: b,
        });
    }
    Ok(())
}

impl<T: Element + PrimInt> Array<T> {
    fn zip_bits(&self, other: &Array<T>, f: impl Fn(T, T) -> T) -> Result<Array<T>> {
        check_sizes(self.len(), other.len())?;
        self.zip_map(other, f)
    }
}

impl<T: Element + PrimInt> Bitwise for Array<T> {
    fn bitwise_and(&self, other: &Self) -> Result<Self> {
        self.zip_bits(other, |a, b| a & b)
    }

    fn bitwise_or(&self, other: &Self) -> Result<Self> {
        self.zip_bits(other, |a, b| a | b)
    }

    fn bitwise_xor(&self, other: &Self) -> Result<Self> {
        self.zip_bits(other, |a, b| a ^ b)
    }

    fn bitwise_not(&self) -> Self {
        self.map(|a| !a)
    }
}

impl Bitwise for Mask {
    fn bitwise_and(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a & b)
    }

    fn bitwise_or(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a | b)
    }

    fn bitwise_xor(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a ^ b)
    }

    fn bitwise_not(&self) -> Self {
        !self
    }
}

pub fn bitwise_and<B: Bitwise>(a: &B, b: &B) -> Result<B> {
    a.bitwise_and(b)
}

pub fn bitwise_or<B: Bitwise>(a: &B, b: &B) -> Result<B> {
    a.bitwise_or(b)
}

pub fn bitwise_xor<B: Bitwise>(a: &B, b: &B) -> Result<B> {
    a.bitwise_xor(b)
}

pub fn bitwise_not<B: Bitwise>(a: &B) -> B {
    a.bitwise_not()
}

pub fn invert<B: Bitwise>(a: &B) -> B {
    a.invert()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_bits() {
        let a = Array::from_vec(vec![0b1100u8, 0b1010]);
        let b = Array::from_vec(vec![0b1010u8, 0b0110]);
        assert_eq!(bitwise_and(&a, &b).unwrap().as_slice(), &[0b1000, 0b0010]);
        assert_eq!(bitwise_or(&a, &b).unwrap().as_slice(), &[0b1110, 0b1110]);
        assert_eq!(bitwise_xor(&a, &b).unwrap().as_slice(), &[0b0110, 0b1100]);
        assert_eq!(bitwise_not(&a).as_slice(), &[0b1111_0011, 0b1111_0101]);
        assert_eq!(invert(&Array::from_vec(vec![0i32])).as_slice(), &[-1]);
    }

    #[test]
    fn test_array_size_and_shape_checked() {
        let a = Array::from_shape_vec(&[2, 2], vec![1, 2, 3, 4]).unwrap();
        let flat = Array::from_vec(vec![1, 2, 3, 4]);
        let short = Array::from_vec(vec![1, 2]);
        assert_eq!(
            bitwise_and(&a, &short),
            Err(NumcError::SizeMismatch {
                expected: 4,
                actual: 2
            })
        );
        assert_eq!(
            bitwise_or(&a, &flat),
            Err(NumcError::ShapeMismatch(vec![2, 2], vec![4]))
        );
    }

    #[test]
    fn test_mask_bits() {
        let a = Mask::from(vec![true, true, false]);
        let b = Mask::from(vec![true, false, false]);
        assert_eq!(bitwise_xor(&a, &b).unwrap().as_slice(), &[false, true, false]);
        assert_eq!(invert(&a).as_slice(), &[false, false, true]);
        assert!(bitwise_and(&a, &Mask::new(2)).is_err());
    }
}
