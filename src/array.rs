//! Owned n-dimensional array.

use crate::element::Element;
use crate::mask::Mask;
use crate::shape::shape_len;
use crate::{NumcError, Result};
use log::debug;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Owned n-dimensional array: one contiguous row-major buffer plus a shape.
///
/// `data.len() == shape.iter().product()` holds after every operation. The
/// last axis varies fastest in the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Array<T> {
    data: Vec<T>,
    shape: Vec<usize>,
}

// ============================================================================
// Construction and layout
// ============================================================================

impl<T> Array<T> {
    /// 1-D array owning `data`.
    pub fn from_vec(data: Vec<T>) -> Self {
        let shape = vec![data.len()];
        Self { data, shape }
    }

    /// Array with the given shape owning `data` in row-major order.
    pub fn from_shape_vec(shape: &[usize], data: Vec<T>) -> Result<Self> {
        let expected = shape_len(shape);
        if data.len() != expected {
            return Err(NumcError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            shape: shape.to_vec(),
        })
    }

    /// Build an array from its parts without checking the length invariant.
    pub(crate) fn from_parts(shape: Vec<usize>, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), shape_len(&shape));
        Self { data, shape }
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Replace the shape, keeping buffer contents and order.
    ///
    /// Fails without touching `self` when `dims` holds a different number of
    /// elements.
    pub fn reshape(&mut self, dims: &[usize]) -> Result<()> {
        if shape_len(dims) != self.data.len() {
            return Err(NumcError::ReshapeMismatch {
                from: self.shape.clone(),
                to: dims.to_vec(),
            });
        }
        debug!("reshape {:?} -> {:?}", self.shape, dims);
        self.shape = dims.to_vec();
        Ok(())
    }

    /// Consuming variant of [`reshape`](Self::reshape).
    pub fn into_shape(mut self, dims: &[usize]) -> Result<Self> {
        self.reshape(dims)?;
        Ok(self)
    }

    /// Append one element. The array becomes 1-D.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.shape = vec![self.data.len()];
    }

    /// Remove the last element. The array becomes 1-D.
    pub fn pop(&mut self) -> Option<T> {
        let value = self.data.pop()?;
        self.shape = vec![self.data.len()];
        Some(value)
    }

    /// Human-readable shape dump, e.g. `(2, 3)`.
    pub fn display_shape(&self) -> ShapeDisplay<'_> {
        ShapeDisplay(&self.shape)
    }

    fn wrap_index(&self, idx: isize) -> Result<usize> {
        let len = self.data.len();
        let wrapped = if idx < 0 { idx + len as isize } else { idx };
        if wrapped < 0 || wrapped as usize >= len {
            return Err(NumcError::OutOfRange { index: idx, len });
        }
        Ok(wrapped as usize)
    }

    /// Buffer offset of the block addressed by the leading coordinates.
    ///
    /// Fewer coordinates than axes address a whole sub-block: the missing
    /// trailing axes contribute their full extent as a multiplier.
    pub fn offset_of(&self, coord: &[usize]) -> Result<usize> {
        if coord.len() > self.shape.len() {
            return Err(NumcError::TooManyCoordinates {
                given: coord.len(),
                ndim: self.shape.len(),
            });
        }
        let mut offset = 0;
        for (axis, &c) in coord.iter().enumerate() {
            let extent = self.shape[axis];
            if c >= extent {
                return Err(NumcError::OutOfRange {
                    index: c as isize,
                    len: extent,
                });
            }
            offset += c * shape_len(&self.shape[axis + 1..]);
        }
        Ok(offset)
    }

    /// Contiguous sub-block addressed by the leading coordinates.
    pub fn sub_block(&self, coord: &[usize]) -> Result<&[T]> {
        let start = self.offset_of(coord)?;
        let block = shape_len(&self.shape[coord.len()..]);
        Ok(&self.data[start..start + block])
    }

    /// First element of the block addressed by `coord`. With one coordinate
    /// per axis this is the addressed scalar.
    pub fn get_value(&self, coord: &[usize]) -> Result<&T> {
        let offset = self.offset_of(coord)?;
        let len = self.data.len();
        self.data.get(offset).ok_or(NumcError::OutOfRange {
            index: offset as isize,
            len,
        })
    }

    pub fn get_value_mut(&mut self, coord: &[usize]) -> Result<&mut T> {
        let offset = self.offset_of(coord)?;
        let len = self.data.len();
        self.data.get_mut(offset).ok_or(NumcError::OutOfRange {
            index: offset as isize,
            len,
        })
    }

    /// Checked linear access over the flat buffer. Negative indices count from
    /// the end.
    pub fn get_mut(&mut self, idx: isize) -> Result<&mut T> {
        let i = self.wrap_index(idx)?;
        Ok(&mut self.data[i])
    }
}

impl<T: Copy> Array<T> {
    /// 1-D array of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        Self::from_vec(vec![value; len])
    }

    /// 1-D copy of `data`.
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Checked linear read. Negative indices count from the end.
    pub fn get(&self, idx: isize) -> Result<T> {
        let i = self.wrap_index(idx)?;
        Ok(self.data[i])
    }

    /// Checked linear write. Negative indices count from the end.
    pub fn set(&mut self, idx: isize, value: T) -> Result<()> {
        *self.get_mut(idx)? = value;
        Ok(())
    }

    /// Stack equally shaped arrays along a new leading axis.
    ///
    /// An empty list yields an empty 1-D array.
    pub fn from_nested(parts: Vec<Array<T>>) -> Result<Self> {
        let Some(first) = parts.first() else {
            return Ok(Self::from_vec(Vec::new()));
        };
        let inner = first.shape.clone();
        let mut data = Vec::with_capacity(parts.len() * first.len());
        for part in &parts {
            if part.shape != inner {
                return Err(NumcError::ShapeMismatch(inner, part.shape.clone()));
            }
            data.extend_from_slice(&part.data);
        }
        let mut shape = Vec::with_capacity(inner.len() + 1);
        shape.push(parts.len());
        shape.extend_from_slice(&inner);
        Ok(Self { data, shape })
    }

    /// Apply `f` to every element, keeping the shape.
    pub fn map<U>(&self, f: impl FnMut(T) -> U) -> Array<U> {
        Array {
            data: self.data.iter().copied().map(f).collect(),
            shape: self.shape.clone(),
        }
    }

    /// Fallible [`map`](Self::map); stops at the first error.
    pub fn try_map<U>(&self, f: impl FnMut(T) -> Result<U>) -> Result<Array<U>> {
        Ok(Array {
            data: self.data.iter().copied().map(f).collect::<Result<_>>()?,
            shape: self.shape.clone(),
        })
    }

    /// Combine two equally shaped arrays position-wise.
    pub fn zip_map<U: Copy, V>(
        &self,
        other: &Array<U>,
        mut f: impl FnMut(T, U) -> V,
    ) -> Result<Array<V>> {
        if self.shape != other.shape {
            return Err(NumcError::ShapeMismatch(
                self.shape.clone(),
                other.shape.clone(),
            ));
        }
        Ok(Array {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            shape: self.shape.clone(),
        })
    }

    /// 1-D copy of the elements whose mask position is true.
    pub fn compress(&self, mask: &Mask) -> Result<Array<T>> {
        self.compress_bools(mask.as_slice())
    }

    /// [`compress`](Self::compress) over a plain boolean slice.
    pub fn compress_bools(&self, mask: &[bool]) -> Result<Array<T>> {
        if mask.len() != self.data.len() {
            return Err(NumcError::SizeMismatch {
                expected: self.data.len(),
                actual: mask.len(),
            });
        }
        Ok(self
            .data
            .iter()
            .zip(mask)
            .filter_map(|(&v, &keep)| keep.then_some(v))
            .collect())
    }
}

// ============================================================================
// Comparison, clip, cast
// ============================================================================

impl<T: Element> Array<T> {
    fn compare(&self, other: &Array<T>, f: impl Fn(&T, &T) -> bool) -> Result<Mask> {
        if self.data.len() != other.data.len() {
            return Err(NumcError::SizeMismatch {
                expected: self.data.len(),
                actual: other.data.len(),
            });
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| f(a, b))
            .collect())
    }

    fn compare_scalar(&self, value: T, f: impl Fn(&T, &T) -> bool) -> Mask {
        self.data.iter().map(|a| f(a, &value)).collect()
    }

    pub fn greater(&self, other: &Array<T>) -> Result<Mask> {
        self.compare(other, T::gt)
    }

    pub fn less(&self, other: &Array<T>) -> Result<Mask> {
        self.compare(other, T::lt)
    }

    pub fn greater_equal(&self, other: &Array<T>) -> Result<Mask> {
        self.compare(other, T::ge)
    }

    pub fn less_equal(&self, other: &Array<T>) -> Result<Mask> {
        self.compare(other, T::le)
    }

    pub fn equal(&self, other: &Array<T>) -> Result<Mask> {
        self.compare(other, T::eq)
    }

    pub fn not_equal(&self, other: &Array<T>) -> Result<Mask> {
        self.compare(other, T::ne)
    }

    pub fn greater_scalar(&self, value: T) -> Mask {
        self.compare_scalar(value, T::gt)
    }

    pub fn less_scalar(&self, value: T) -> Mask {
        self.compare_scalar(value, T::lt)
    }

    pub fn greater_equal_scalar(&self, value: T) -> Mask {
        self.compare_scalar(value, T::ge)
    }

    pub fn less_equal_scalar(&self, value: T) -> Mask {
        self.compare_scalar(value, T::le)
    }

    pub fn equal_scalar(&self, value: T) -> Mask {
        self.compare_scalar(value, T::eq)
    }

    pub fn not_equal_scalar(&self, value: T) -> Mask {
        self.compare_scalar(value, T::ne)
    }

    /// Clamp every element into `[min, max]`.
    pub fn clip(&self, min: T, max: T) -> Result<Array<T>> {
        if min > max {
            return Err(NumcError::InvalidBounds);
        }
        Ok(self.map(|v| {
            if v < min {
                min
            } else if v > max {
                max
            } else {
                v
            }
        }))
    }

    /// Convert every element to `U`.
    ///
    /// The result is always 1-D; the source shape is not carried over.
    pub fn cast<U: Element>(&self) -> Result<Array<U>> {
        self.data
            .iter()
            .map(|&v| num_traits::cast::<T, U>(v).ok_or(NumcError::CastFailed))
            .collect::<Result<Vec<U>>>()
            .map(Array::from_vec)
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl<T> From<Vec<T>> for Array<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Unchecked-style linear indexing; panics when out of range after the
/// negative wrap. Use [`Array::get`] for a checked read.
impl<T> Index<isize> for Array<T> {
    type Output = T;

    fn index(&self, idx: isize) -> &T {
        match self.wrap_index(idx) {
            Ok(i) => &self.data[i],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<isize> for Array<T> {
    fn index_mut(&mut self, idx: isize) -> &mut T {
        match self.wrap_index(idx) {
            Ok(i) => &mut self.data[i],
            Err(e) => panic!("{e}"),
        }
    }
}

/// Shape dump returned by [`Array::display_shape`].
#[derive(Debug, Clone, Copy)]
pub struct ShapeDisplay<'a>(&'a [usize]);

impl fmt::Display for ShapeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

fn fmt_block<T: fmt::Display>(f: &mut fmt::Formatter<'_>, data: &[T], shape: &[usize]) -> fmt::Result {
    let Some((&outer, inner)) = shape.split_first() else {
        return match data.first() {
            Some(v) => write!(f, "{v}"),
            None => Ok(()),
        };
    };
    let block = shape_len(inner);
    write!(f, "[")?;
    for i in 0..outer {
        if i > 0 {
            write!(f, ", ")?;
        }
        fmt_block(f, &data[i * block..(i + 1) * block], inner)?;
    }
    write!(f, "]")
}

/// Nested-bracket data dump, e.g. `[[1, 2], [3, 4]]`.
impl<T: fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_block(f, &self.data, &self.shape)
    }
}
