//! Per-axis range selection.

use crate::{NumcError, Result};

/// Selected range of one axis: `begin..end` walked with `step`.
///
/// Bounds follow Python slicing: negative values count from the end of the
/// axis. A slice is only meaningful in absolute terms after
/// [`normalize`](Slice::normalize) has resolved it against a concrete axis
/// length; [`Array::view`](crate::Array::view) and friends do that for you.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    begin: isize,
    end: isize,
    step: isize,
}

impl Slice {
    /// Slice `begin..end` with step 1.
    pub fn new(begin: isize, end: isize) -> Result<Self> {
        Self::with_step(begin, end, 1)
    }

    /// Slice `begin..end` walked with `step`. Fails if `step == 0`.
    pub fn with_step(begin: isize, end: isize, step: isize) -> Result<Self> {
        if step == 0 {
            return Err(NumcError::ZeroStep);
        }
        Ok(Self { begin, end, step })
    }

    /// The whole axis, whatever its length.
    pub fn full() -> Self {
        Self {
            begin: 0,
            end: isize::MAX,
            step: 1,
        }
    }

    #[inline]
    pub fn begin(&self) -> isize {
        self.begin
    }

    #[inline]
    pub fn end(&self) -> isize {
        self.end
    }

    #[inline]
    pub fn step(&self) -> isize {
        self.step
    }

    /// Resolve negative bounds against `axis_len` and clamp into the axis.
    ///
    /// Negative `begin`/`end` get `axis_len` added, then both are clamped to
    /// `[0, axis_len]`. A negative step additionally pulls `begin` down to the
    /// last addressable position, so a reverse walk never starts past the end.
    /// Calling this again with the same length changes nothing.
    pub fn normalize(&mut self, axis_len: usize) {
        let len = axis_len as isize;
        if self.begin < 0 {
            self.begin += len;
        }
        if self.end < 0 {
            self.end += len;
        }
        self.begin = self.begin.clamp(0, len);
        self.end = self.end.clamp(0, len);
        if self.step < 0 && len > 0 && self.begin == len {
            self.begin = len - 1;
        }
    }

    /// Number of selected positions.
    pub fn size(&self) -> usize {
        if self.step > 0 {
            if self.begin >= self.end {
                return 0;
            }
            ((self.end - self.begin) as usize).div_ceil(self.step as usize)
        } else {
            if self.begin <= self.end {
                return 0;
            }
            ((self.begin - self.end) as usize).div_ceil(self.step.unsigned_abs())
        }
    }

    /// Source-axis coordinate of logical position `idx`.
    pub fn get(&self, idx: usize) -> Result<usize> {
        let len = self.size();
        if idx >= len {
            return Err(NumcError::OutOfRange {
                index: idx as isize,
                len,
            });
        }
        Ok((self.begin + idx as isize * self.step) as usize)
    }

    /// Iterate over the selected source-axis coordinates.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        let Slice { begin, step, .. } = *self;
        (0..self.size()).map(move |i| (begin + i as isize * step) as usize)
    }
}

impl Default for Slice {
    fn default() -> Self {
        Self::full()
    }
}

impl From<std::ops::Range<isize>> for Slice {
    fn from(range: std::ops::Range<isize>) -> Self {
        Self {
            begin: range.start,
            end: range.end,
            step: 1,
        }
    }
}

impl From<std::ops::RangeFull> for Slice {
    fn from(_: std::ops::RangeFull) -> Self {
        Self::full()
    }
}
