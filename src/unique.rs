//! Set-like queries over the flattened buffer.
//!
//! All results are 1-D. "First-occurrence order" means values appear in the
//! order their first copy appears in the buffer.

use crate::array::Array;
use crate::element::Element;
use std::collections::{HashMap, HashSet};

impl<T: Element> Array<T> {
    /// Distinct values in first-occurrence order.
    pub fn unique(&self) -> Array<T> {
        let mut seen = HashSet::with_capacity(self.len());
        self.iter()
            .copied()
            .filter(|v| seen.insert(v.hash_key()))
            .collect()
    }

    /// Distinct values in ascending order, NaNs last.
    pub fn unique_sorted(&self) -> Array<T> {
        let mut values = self.as_slice().to_vec();
        values.sort_by(T::total_order);
        values.dedup_by_key(|v| v.hash_key());
        Array::from_vec(values)
    }

    /// Flat positions of each value's first occurrence, in buffer order.
    pub fn unique_indices(&self) -> Array<usize> {
        let mut seen = HashSet::with_capacity(self.len());
        self.iter()
            .enumerate()
            .filter_map(|(i, v)| seen.insert(v.hash_key()).then_some(i))
            .collect()
    }

    /// For every element, its index within [`unique`](Self::unique).
    pub fn unique_inverse(&self) -> Array<usize> {
        let mut slots: HashMap<u64, usize> = HashMap::with_capacity(self.len());
        self.iter()
            .map(|v| {
                let next = slots.len();
                *slots.entry(v.hash_key()).or_insert(next)
            })
            .collect()
    }

    /// Occurrence count of each value, aligned with [`unique`](Self::unique).
    pub fn unique_counts(&self) -> Array<usize> {
        let mut slots: HashMap<u64, usize> = HashMap::with_capacity(self.len());
        let mut counts = Vec::new();
        for v in self.iter() {
            let next = slots.len();
            let slot = *slots.entry(v.hash_key()).or_insert(next);
            if slot == counts.len() {
                counts.push(0);
            }
            counts[slot] += 1;
        }
        Array::from_vec(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Array<i32> {
        Array::from_shape_vec(&[2, 4], vec![3, 1, 3, 2, 1, 1, 5, 2]).unwrap()
    }

    #[test]
    fn test_unique_first_occurrence() {
        assert_eq!(sample().unique().as_slice(), &[3, 1, 2, 5]);
    }

    #[test]
    fn test_unique_sorted() {
        assert_eq!(sample().unique_sorted().as_slice(), &[1, 2, 3, 5]);
    }

    #[test]
    fn test_unique_indices() {
        assert_eq!(sample().unique_indices().as_slice(), &[0, 1, 3, 6]);
    }

    #[test]
    fn test_unique_inverse_reconstructs() {
        let a = sample();
        let uniq = a.unique();
        let inv = a.unique_inverse();
        assert_eq!(inv.as_slice(), &[0, 1, 0, 2, 1, 1, 3, 2]);
        for (i, &slot) in inv.iter().enumerate() {
            assert_eq!(uniq.as_slice()[slot], a.as_slice()[i]);
        }
    }

    #[test]
    fn test_unique_counts() {
        assert_eq!(sample().unique_counts().as_slice(), &[2, 3, 2, 1]);
    }

    #[test]
    fn test_unique_float_signed_zero() {
        let a = Array::from_vec(vec![0.0f64, -0.0, 1.5, 1.5]);
        assert_eq!(a.unique().len(), 2);
        assert_eq!(a.unique_counts().as_slice(), &[2, 2]);
    }

    #[test]
    fn test_unique_sorted_with_nan() {
        let a: Array<f64> = (0..200)
            .map(|i| if i % 3 == 0 { f64::NAN } else { ((i * 37) % 101) as f64 - 50.0 })
            .collect();
        let out = a.unique_sorted();
        let (numbers, nans): (Vec<f64>, Vec<f64>) = out.iter().partition(|v| !v.is_nan());
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(nans.len(), 1);
        assert!(out.as_slice()[out.len() - 1].is_nan());
        assert_eq!(numbers.len(), a.unique().len() - 1);
    }

    #[test]
    fn test_unique_empty() {
        let a = Array::<u8>::from_vec(vec![]);
        assert!(a.unique().is_empty());
        assert!(a.unique_counts().is_empty());
    }
}
