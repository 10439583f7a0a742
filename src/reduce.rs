//! Full-buffer reductions.
//!
//! Every reduction walks the whole flattened buffer; there is no per-axis
//! variant. Reductions that have no value on empty input report
//! [`NumcError::EmptyArray`].

use crate::array::Array;
use crate::element::Element;
use crate::{NumcError, Result};
use num_traits::ToPrimitive;

impl<T: Element> Array<T> {
    /// Fold every element through `map_fn` and `reduce_fn` starting at `init`.
    pub fn reduce<U, M, R>(&self, map_fn: M, reduce_fn: R, init: U) -> U
    where
        M: Fn(T) -> U,
        R: Fn(U, U) -> U,
    {
        self.iter()
            .fold(init, |acc, &v| reduce_fn(acc, map_fn(v)))
    }

    /// Sum of every element; integer overflow is reported.
    pub fn sum(&self) -> Result<T> {
        self.iter()
            .try_fold(T::zero(), |acc, &v| acc.checked_add(v))
            .ok_or(NumcError::Overflow("sum"))
    }

    /// Product of every element; integer overflow is reported.
    pub fn prod(&self) -> Result<T> {
        self.iter()
            .try_fold(T::one(), |acc, &v| acc.checked_mul(v))
            .ok_or(NumcError::Overflow("prod"))
    }

    /// Element count and the elements as `f64`, rejecting empty input.
    fn lifted(&self, what: &'static str) -> Result<(f64, impl Iterator<Item = Result<f64>> + '_)> {
        if self.is_empty() {
            return Err(NumcError::EmptyArray(what));
        }
        let values = self.iter().map(|v| v.to_f64().ok_or(NumcError::CastFailed));
        Ok((self.len() as f64, values))
    }

    /// Arithmetic mean, accumulated in `f64` (integer means truncate).
    pub fn mean(&self) -> Result<T> {
        let (n, values) = self.lifted("mean")?;
        let total = values.sum::<Result<f64>>()?;
        T::from_f64(total / n).ok_or(NumcError::CastFailed)
    }

    /// Population variance: mean squared deviation from [`mean`](Self::mean),
    /// accumulated in `f64` and cast back.
    pub fn var(&self) -> Result<T> {
        let (n, values) = self.lifted("var")?;
        let mean = self.mean()?.to_f64().ok_or(NumcError::CastFailed)?;
        let squares = values
            .map(|v| v.map(|v| (v - mean) * (v - mean)))
            .sum::<Result<f64>>()?;
        T::from_f64(squares / n).ok_or(NumcError::CastFailed)
    }

    /// Square root of [`var`](Self::var), computed in `f64`.
    pub fn std(&self) -> Result<T> {
        let var = self.var()?.to_f64().ok_or(NumcError::CastFailed)?;
        T::from_f64(var.sqrt()).ok_or(NumcError::CastFailed)
    }

    /// Position and value of the first element that wins `better` against
    /// every other.
    fn extreme(&self, what: &'static str, better: impl Fn(&T, &T) -> bool) -> Result<(usize, T)> {
        let mut iter = self.iter().copied().enumerate();
        let first = iter.next().ok_or(NumcError::EmptyArray(what))?;
        Ok(iter.fold(first, |best, (i, v)| {
            if better(&v, &best.1) {
                (i, v)
            } else {
                best
            }
        }))
    }

    pub fn min(&self) -> Result<T> {
        Ok(self.extreme("min", T::lt)?.1)
    }

    pub fn max(&self) -> Result<T> {
        Ok(self.extreme("max", T::gt)?.1)
    }

    /// Flat index of the first minimum.
    pub fn argmin(&self) -> Result<usize> {
        Ok(self.extreme("argmin", T::lt)?.0)
    }

    /// Flat index of the first maximum.
    pub fn argmax(&self) -> Result<usize> {
        Ok(self.extreme("argmax", T::gt)?.0)
    }
}
