//! Strided windows into an [`Array`]'s buffer.
//!
//! A view is an [`Array`] buffer seen through one [`Slice`] per axis. Nothing
//! is copied: [`Viewer`] reads the owner's buffer, [`ViewerMut`] reads and
//! writes it in place. Both borrow the owner, so the owner cannot be
//! reshaped, resized or dropped while a view is alive.
//!
//! Key features:
//! - Offsets resolved through the owner's own row-major strides
//! - Logical shape is the per-axis slice sizes
//! - Bulk and scalar writes visit positions in row-major order
//! - Materialization into an owned [`Array`] via [`Viewer::to_array`]

use crate::array::Array;
use crate::shape::{advance, row_major_strides, shape_len};
use crate::slice::Slice;
use crate::{NumcError, Result};
use log::trace;

/// Owner strides plus one normalized slice per owner axis.
#[derive(Debug, Clone)]
struct Layout {
    strides: Vec<usize>,
    slices: Vec<Slice>,
    shape: Vec<usize>,
}

impl Layout {
    fn new(owner_shape: &[usize], slices: &[Slice]) -> Result<Self> {
        let ndim = owner_shape.len();
        if slices.len() > ndim {
            return Err(NumcError::TooManyCoordinates {
                given: slices.len(),
                ndim,
            });
        }
        let slices: Vec<Slice> = owner_shape
            .iter()
            .enumerate()
            .map(|(axis, &len)| {
                let mut s = slices.get(axis).copied().unwrap_or_default();
                s.normalize(len);
                s
            })
            .collect();
        let shape = slices.iter().map(Slice::size).collect();
        Ok(Self {
            strides: row_major_strides(owner_shape),
            slices,
            shape,
        })
    }

    #[inline]
    fn len(&self) -> usize {
        shape_len(&self.shape)
    }

    /// Owner buffer offset of a view coordinate.
    fn offset(&self, coord: &[usize]) -> Result<usize> {
        if coord.len() != self.slices.len() {
            return Err(NumcError::CoordinateCountMismatch {
                given: coord.len(),
                expected: self.slices.len(),
            });
        }
        let mut offset = 0;
        for ((&c, slice), &stride) in coord.iter().zip(&self.slices).zip(&self.strides) {
            offset += slice.get(c)? * stride;
        }
        Ok(offset)
    }

    /// Owner offsets of every view position in row-major order.
    fn offsets(&self) -> Offsets<'_> {
        Offsets {
            layout: self,
            coord: vec![0; self.shape.len()],
            remaining: self.len(),
        }
    }
}

struct Offsets<'l> {
    layout: &'l Layout,
    coord: Vec<usize>,
    remaining: usize,
}

impl Iterator for Offsets<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let offset = self
            .coord
            .iter()
            .zip(&self.layout.slices)
            .zip(&self.layout.strides)
            .map(|((&c, s), &stride)| (s.begin() + c as isize * s.step()) as usize * stride)
            .sum();
        advance(&mut self.coord, &self.layout.shape);
        self.remaining -= 1;
        Some(offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Offsets<'_> {}

// ============================================================================
// Viewer
// ============================================================================

/// Read-only strided window into an [`Array`].
#[derive(Debug, Clone)]
pub struct Viewer<'a, T> {
    data: &'a [T],
    layout: Layout,
}

impl<'a, T: Copy> Viewer<'a, T> {
    /// Logical shape: the size of each axis slice.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.layout.shape
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.shape.len()
    }

    /// Number of addressed elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalized slice bound to each owner axis.
    pub fn slices(&self) -> &[Slice] {
        &self.layout.slices
    }

    /// Element at a view coordinate (one per axis).
    pub fn get(&self, coord: &[usize]) -> Result<T> {
        Ok(self.data[self.layout.offset(coord)?])
    }

    /// Addressed elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.layout.offsets().map(move |o| self.data[o])
    }

    /// Copy the addressed elements into a new array shaped like the view.
    pub fn to_array(&self) -> Array<T> {
        Array::from_parts(self.layout.shape.clone(), self.iter().collect())
    }
}

impl<T: Copy> From<Viewer<'_, T>> for Array<T> {
    fn from(view: Viewer<'_, T>) -> Self {
        view.to_array()
    }
}

impl<T: Copy> From<&Viewer<'_, T>> for Array<T> {
    fn from(view: &Viewer<'_, T>) -> Self {
        view.to_array()
    }
}

// ============================================================================
// ViewerMut
// ============================================================================

/// Read/write strided window into an [`Array`].
#[derive(Debug)]
pub struct ViewerMut<'a, T> {
    data: &'a mut [T],
    layout: Layout,
}

impl<'a, T: Copy> ViewerMut<'a, T> {
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.layout.shape
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.shape.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> Viewer<'_, T> {
        Viewer {
            data: &*self.data,
            layout: self.layout.clone(),
        }
    }

    pub fn get(&self, coord: &[usize]) -> Result<T> {
        Ok(self.data[self.layout.offset(coord)?])
    }

    /// Writable reference into the owner's buffer.
    pub fn get_mut(&mut self, coord: &[usize]) -> Result<&mut T> {
        let offset = self.layout.offset(coord)?;
        Ok(&mut self.data[offset])
    }

    pub fn set(&mut self, coord: &[usize], value: T) -> Result<()> {
        *self.get_mut(coord)? = value;
        Ok(())
    }

    /// Write `values` into the addressed positions in row-major order.
    ///
    /// The length is checked before anything is written.
    pub fn assign(&mut self, values: &[T]) -> Result<()> {
        let total = self.layout.len();
        if values.len() != total {
            return Err(NumcError::SizeMismatch {
                expected: total,
                actual: values.len(),
            });
        }
        trace!("view assign: {} elements, shape {:?}", total, self.layout.shape);
        for (offset, &v) in self.layout.offsets().zip(values) {
            self.data[offset] = v;
        }
        Ok(())
    }

    /// Write `value` into every addressed position.
    pub fn fill(&mut self, value: T) {
        trace!("view fill: {} elements", self.layout.len());
        for offset in self.layout.offsets() {
            self.data[offset] = value;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.layout.offsets().map(move |o| self.data[o])
    }

    pub fn to_array(&self) -> Array<T> {
        Array::from_parts(self.layout.shape.clone(), self.iter().collect())
    }
}

impl<T: Copy> From<ViewerMut<'_, T>> for Array<T> {
    fn from(view: ViewerMut<'_, T>) -> Self {
        view.to_array()
    }
}

// ============================================================================
// Array entry points
// ============================================================================

impl<T: Copy> Array<T> {
    /// Read-only view through one slice per leading axis.
    ///
    /// Axes without a slice are taken whole. More slices than axes is an error.
    pub fn view(&self, slices: &[Slice]) -> Result<Viewer<'_, T>> {
        let layout = Layout::new(self.shape(), slices)?;
        Ok(Viewer {
            data: self.as_slice(),
            layout,
        })
    }

    /// Writable view through one slice per leading axis.
    pub fn view_mut(&mut self, slices: &[Slice]) -> Result<ViewerMut<'_, T>> {
        let layout = Layout::new(self.shape(), slices)?;
        Ok(ViewerMut {
            data: self.as_mut_slice(),
            layout,
        })
    }

    /// Materialized copy of the sliced region.
    pub fn slice(&self, slices: &[Slice]) -> Result<Array<T>> {
        Ok(self.view(slices)?.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(begin: isize, end: isize) -> Slice {
        Slice::new(begin, end).unwrap()
    }

    fn matrix() -> Array<i32> {
        Array::from_shape_vec(&[3, 3], vec![10, 20, 30, 40, 50, 60, 70, 80, 90]).unwrap()
    }

    #[test]
    fn test_view_shape_and_read() {
        let m = matrix();
        let v = m.view(&[s(1, 3), s(0, 2)]).unwrap();
        assert_eq!(v.shape(), &[2, 2]);
        assert_eq!(v.get(&[0, 0]).unwrap(), 40);
        assert_eq!(v.get(&[1, 1]).unwrap(), 80);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![40, 50, 70, 80]);
    }

    #[test]
    fn test_missing_axes_are_full() {
        let m = matrix();
        let v = m.view(&[s(2, 3)]).unwrap();
        assert_eq!(v.shape(), &[1, 3]);
        assert_eq!(v.to_array().as_slice(), &[70, 80, 90]);
    }

    #[test]
    fn test_too_many_slices() {
        let m = matrix();
        assert_eq!(
            m.view(&[s(0, 1), s(0, 1), s(0, 1)]).unwrap_err(),
            NumcError::TooManyCoordinates { given: 3, ndim: 2 }
        );
    }

    #[test]
    fn test_reverse_step_view() {
        let a = Array::from_vec(vec![1, 2, 3, 4, 5, 6, 7]);
        let rev = a.slice(&[Slice::with_step(-1, -4, -1).unwrap()]).unwrap();
        assert_eq!(rev.as_slice(), &[7, 6, 5]);
        let every_other = a.slice(&[Slice::with_step(0, 7, 2).unwrap()]).unwrap();
        assert_eq!(every_other.as_slice(), &[1, 3, 5, 7]);
    }

    #[test]
    fn test_coordinate_count_mismatch() {
        let m = matrix();
        let v = m.view(&[]).unwrap();
        assert_eq!(
            v.get(&[0]),
            Err(NumcError::CoordinateCountMismatch {
                given: 1,
                expected: 2
            })
        );
        assert!(v.get(&[3, 0]).is_err());
    }

    #[test]
    fn test_assign_and_fill() {
        let mut m = matrix();
        m.view_mut(&[s(0, 2), s(0, 2)])
            .unwrap()
            .assign(&[100, 200, 400, 500])
            .unwrap();
        assert_eq!(m.as_slice(), &[100, 200, 30, 400, 500, 60, 70, 80, 90]);

        m.view_mut(&[s(0, 3), s(2, 3)]).unwrap().fill(0);
        assert_eq!(m.as_slice(), &[100, 200, 0, 400, 500, 0, 70, 80, 0]);
    }

    #[test]
    fn test_assign_length_mismatch_writes_nothing() {
        let mut m = matrix();
        let err = m
            .view_mut(&[s(0, 2), s(0, 2)])
            .unwrap()
            .assign(&[1, 2, 3])
            .unwrap_err();
        assert_eq!(
            err,
            NumcError::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(m, matrix());
    }

    #[test]
    fn test_empty_view() {
        let mut m = matrix();
        let mut v = m.view_mut(&[s(1, 1)]).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.shape(), &[0, 3]);
        v.assign(&[]).unwrap();
        v.fill(7);
        let materialized = v.to_array();
        assert_eq!(materialized.shape(), &[0, 3]);
        assert!(materialized.is_empty());
        assert_eq!(m, matrix());
    }

    #[test]
    fn test_scalar_write_through_get_mut() {
        let mut m = matrix();
        {
            let mut v = m.view_mut(&[s(1, 3), s(1, 3)]).unwrap();
            *v.get_mut(&[1, 0]).unwrap() = -8;
            v.set(&[0, 1], -6).unwrap();
            assert_eq!(v.as_view().get(&[0, 1]).unwrap(), -6);
        }
        assert_eq!(m.as_slice(), &[10, 20, 30, 40, 50, -6, 70, -8, 90]);
    }
}
