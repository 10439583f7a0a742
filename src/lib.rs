//! NumPy-like n-dimensional arrays for Rust.
//!
//! `numc` keeps every array as one contiguous row-major buffer plus a shape,
//! and layers NumPy semantics on top of it: broadcasting arithmetic, zero-copy
//! strided windows, boolean masking, full-buffer reductions, uniqueness
//! queries and a small dense determinant.
//!
//! # Core Types
//!
//! - [`Array`]: Owned buffer + shape (last axis varies fastest)
//! - [`Slice`]: Per-axis `(begin, end, step)` selection with NumPy-style negative bounds
//! - [`Viewer`] / [`ViewerMut`]: Borrowed strided windows into an [`Array`]
//! - [`Mask`]: Boolean sequence used as predicate and as compaction key
//!
//! # Primary API
//!
//! ## Arithmetic
//!
//! - `&a + &b`, `&a - &b`, `&a * &b`, `&a / &b`: broadcasting elementwise
//!   operators returning [`Result`]
//! - [`add`], [`sub`], [`mul`], [`div`]: the same as free functions
//! - [`can_broadcast`], [`broadcast_to`], [`broadcast_shape`]: the broadcast engine
//!
//! ## Reductions and queries
//!
//! - [`Array::sum`], [`Array::prod`], [`Array::mean`], [`Array::var`], [`Array::std`]
//! - [`Array::min`], [`Array::max`], [`Array::argmin`], [`Array::argmax`]
//! - [`Array::unique`] and friends, [`dot`], [`det`], [`select`]
//!
//! # Example
//!
//! ```rust
//! use numc::{Array, Slice};
//!
//! let a = Array::from_vec(vec![1, 2, 3, 4, 5, 6, 7]);
//! let left = a.slice(&[Slice::new(1, 3)?])?;
//! let right = a.slice(&[Slice::new(2, 4)?])?;
//! let sum = (&left + &right)?;
//! assert_eq!(sum.as_slice(), &[5, 7]);
//! # Ok::<(), numc::NumcError>(())
//! ```
//!
//! # Writing through a view
//!
//! ```rust
//! use numc::{array, Slice};
//!
//! let mut m = array![[10, 20, 30], [40, 50, 60], [70, 80, 90]];
//! m.view_mut(&[Slice::new(0, 2)?, Slice::new(0, 2)?])?
//!     .assign(&[100, 200, 400, 500])?;
//! assert_eq!(m.as_slice(), &[100, 200, 30, 400, 500, 60, 70, 80, 90]);
//! # Ok::<(), numc::NumcError>(())
//! ```

#[macro_use]
mod macros;

mod array;
pub mod bitwise;
pub mod broadcast;
mod creation;
mod element;
mod linalg;
mod mask;
pub mod math;
mod ops;
pub mod random;
mod reduce;
mod select;
mod shape;
mod slice;
mod unique;
pub mod view;

// ============================================================================
// Core types
// ============================================================================
pub use array::{Array, ShapeDisplay};
pub use element::Element;
pub use mask::{logical_and, logical_not, logical_or, Mask};
pub use slice::Slice;
pub use view::{Viewer, ViewerMut};

// ============================================================================
// Broadcasting and arithmetic
// ============================================================================
pub use broadcast::{broadcast_to, calculate, BinaryOp};
pub use ops::{add, div, mul, sub};
pub use shape::{broadcast_shape, can_broadcast, row_major_strides, Broadcast};

// ============================================================================
// Free functions
// ============================================================================
pub use creation::{
    arange, concatenate, eye, full, identity, ones, ones_like, zeros, zeros_like,
};
pub use linalg::{det, dot};
pub use select::{select, Choice};

// ============================================================================
// Constants
// ============================================================================

/// Pivot magnitude below which [`det`] treats a matrix as singular.
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// Euler's number.
pub const E: f64 = std::f64::consts::E;

/// Archimedes' constant.
pub const PI: f64 = std::f64::consts::PI;

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur during array operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumcError {
    /// Array shapes are incompatible for the operation.
    #[error("shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),

    /// Element counts differ where they must agree.
    #[error("size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A slice was built with step 0.
    #[error("slice step cannot be 0")]
    ZeroStep,

    /// Reshape target does not hold the same number of elements.
    #[error("cannot reshape {from:?} into {to:?}")]
    ReshapeMismatch { from: Vec<usize>, to: Vec<usize> },

    /// Matrix is not square when a square matrix was required.
    #[error("non-square matrix: rows={rows}, cols={cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Operation needs exactly two axes.
    #[error("expected a 2-axis array, got {ndim} axes")]
    NotMatrix { ndim: usize },

    /// More coordinates than the array has axes.
    #[error("{given} coordinates supplied for {ndim} axes")]
    TooManyCoordinates { given: usize, ndim: usize },

    /// A view was addressed with the wrong number of coordinates.
    #[error("expected {expected} coordinates, got {given}")]
    CoordinateCountMismatch { given: usize, expected: usize },

    /// Invalid axis index for the given array rank.
    #[error("invalid axis {axis} for rank {rank}")]
    InvalidAxis { axis: usize, rank: usize },

    /// Index beyond the addressable range.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: isize, len: usize },

    /// Operation requires a non-empty array.
    #[error("{0} of an empty array")]
    EmptyArray(&'static str),

    /// Lower clip bound is above the upper one.
    #[error("clip bounds are inverted")]
    InvalidBounds,

    /// Integral division by zero.
    #[error("integer division by zero")]
    DivisionByZero,

    /// Integer arithmetic left the range of the element type.
    #[error("integer overflow in {0}")]
    Overflow(&'static str),

    /// Value is not representable in the target element type.
    #[error("value not representable in the target element type")]
    CastFailed,

    /// Distribution parameters rejected by the sampler.
    #[error("invalid distribution parameters: {0}")]
    InvalidDistribution(String),
}

/// Result type for array operations.
pub type Result<T> = std::result::Result<T, NumcError>;
