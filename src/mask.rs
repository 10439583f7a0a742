//! Boolean masks and logical combination.

use crate::{NumcError, Result};
use std::ops::{BitAnd, BitOr, Index, IndexMut, Not};

/// Ordered boolean sequence.
///
/// Produced by array comparisons, combined with [`logical_and`] /
/// [`logical_or`] / [`logical_not`], and consumed by
/// [`Array::compress`](crate::Array::compress) and [`select`](crate::select).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Mask {
    data: Vec<bool>,
}

impl Mask {
    /// All-false mask of `len` positions.
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![false; len],
        }
    }

    /// Mask of `len` positions all set to `value`.
    pub fn filled(len: usize, value: bool) -> Self {
        Self {
            data: vec![value; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<bool> {
        self.data.get(idx).copied()
    }

    pub fn set(&mut self, idx: usize, value: bool) -> Result<()> {
        let len = self.data.len();
        let slot = self.data.get_mut(idx).ok_or(NumcError::OutOfRange {
            index: idx as isize,
            len,
        })?;
        *slot = value;
        Ok(())
    }

    pub fn push(&mut self, value: bool) {
        self.data.push(value);
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.data.iter().copied()
    }

    /// Number of `true` positions.
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }

    pub fn any(&self) -> bool {
        self.data.iter().any(|&b| b)
    }

    pub fn all(&self) -> bool {
        self.data.iter().all(|&b| b)
    }

    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<bool> {
        self.data
    }

    pub(crate) fn zip_with(&self, other: &Mask, f: impl Fn(bool, bool) -> bool) -> Result<Mask> {
        if self.len() != other.len() {
            return Err(NumcError::SizeMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect())
    }
}

impl From<Vec<bool>> for Mask {
    fn from(data: Vec<bool>) -> Self {
        Self { data }
    }
}

impl From<&[bool]> for Mask {
    fn from(data: &[bool]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl FromIterator<bool> for Mask {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Mask {
    type Output = bool;

    fn index(&self, idx: usize) -> &bool {
        &self.data[idx]
    }
}

impl IndexMut<usize> for Mask {
    fn index_mut(&mut self, idx: usize) -> &mut bool {
        &mut self.data[idx]
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, b) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{b}")?;
        }
        write!(f, "]")
    }
}

/// Position-wise AND. Lengths must agree.
pub fn logical_and(a: &Mask, b: &Mask) -> Result<Mask> {
    a.zip_with(b, |x, y| x && y)
}

/// Position-wise OR. Lengths must agree.
pub fn logical_or(a: &Mask, b: &Mask) -> Result<Mask> {
    a.zip_with(b, |x, y| x || y)
}

/// Position-wise negation.
pub fn logical_not(a: &Mask) -> Mask {
    a.iter().map(|b| !b).collect()
}

impl Not for &Mask {
    type Output = Mask;

    fn not(self) -> Mask {
        logical_not(self)
    }
}

impl Not for Mask {
    type Output = Mask;

    fn not(mut self) -> Mask {
        self.data.iter_mut().for_each(|b| *b = !*b);
        self
    }
}

impl BitAnd for &Mask {
    type Output = Result<Mask>;

    fn bitand(self, rhs: &Mask) -> Result<Mask> {
        logical_and(self, rhs)
    }
}

impl BitOr for &Mask {
    type Output = Result<Mask>;

    fn bitor(self, rhs: &Mask) -> Result<Mask> {
        logical_or(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_ops() {
        let a = Mask::from(vec![true, true, false, false]);
        let b = Mask::from(vec![true, false, true, false]);
        assert_eq!(
            logical_and(&a, &b).unwrap().as_slice(),
            &[true, false, false, false]
        );
        assert_eq!(
            logical_or(&a, &b).unwrap().as_slice(),
            &[true, true, true, false]
        );
        assert_eq!(logical_not(&a).as_slice(), &[false, false, true, true]);
        assert_eq!((!&a).as_slice(), logical_not(&a).as_slice());
        assert_eq!((&a & &b).unwrap(), logical_and(&a, &b).unwrap());
        assert_eq!((&a | &b).unwrap(), logical_or(&a, &b).unwrap());
    }

    #[test]
    fn test_length_mismatch() {
        let a = Mask::new(3);
        let b = Mask::new(4);
        assert_eq!(
            logical_and(&a, &b),
            Err(NumcError::SizeMismatch {
                expected: 3,
                actual: 4
            })
        );
        assert!(logical_or(&a, &b).is_err());
    }

    #[test]
    fn test_set_and_count() {
        let mut m = Mask::new(5);
        m.set(1, true).unwrap();
        m[3] = true;
        m.push(true);
        assert_eq!(m.len(), 6);
        assert_eq!(m.count_true(), 3);
        assert!(m.any());
        assert!(!m.all());
        assert!(m.set(6, true).is_err());
        assert_eq!(m.get(6), None);
    }

    #[test]
    fn test_display() {
        let m = Mask::from(vec![true, false]);
        assert_eq!(m.to_string(), "[true, false]");
    }
}
