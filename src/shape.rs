//! Shape arithmetic: strides, row-major traversal and broadcast rules.

/// Number of elements held by `dims`. The empty shape holds one scalar.
#[inline]
pub(crate) fn shape_len(dims: &[usize]) -> usize {
    dims.iter().product()
}

/// Compute row-major strides (last axis has stride 1).
pub fn row_major_strides(dims: &[usize]) -> Vec<usize> {
    let rank = dims.len();
    if rank == 0 {
        return vec![];
    }
    let mut strides = vec![1usize; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * dims[i + 1];
    }
    strides
}

/// Advance `coord` to the next position in row-major order over `dims`.
///
/// The last axis increments fastest and carries into earlier axes on
/// overflow. Returns `false` once every position has been visited (the
/// coordinate wraps back to all zeros).
#[inline]
pub(crate) fn advance(coord: &mut [usize], dims: &[usize]) -> bool {
    for axis in (0..coord.len()).rev() {
        coord[axis] += 1;
        if coord[axis] < dims[axis] {
            return true;
        }
        coord[axis] = 0;
    }
    false
}

/// Which operand of a binary operation must be expanded to a common shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Broadcast {
    /// Shapes already agree axis-by-axis.
    None,
    /// The first operand has extent-1 axes that must be replicated.
    First,
    /// The second operand has extent-1 axes that must be replicated.
    Second,
    /// Both operands need replication.
    Both,
    /// Some aligned pair of extents differs and neither is 1.
    Invalid,
}

/// Extent of `dims` at `i` axes from the right, with missing leading axes
/// read as extent 1.
#[inline]
fn aligned(dims: &[usize], i: usize) -> usize {
    if i < dims.len() {
        dims[dims.len() - 1 - i]
    } else {
        1
    }
}

/// Classify how two shapes broadcast against each other.
///
/// Shapes are right-aligned. Per axis, equal extents are fine; if exactly one
/// side has extent 1, that side is marked; otherwise the pair is invalid.
pub fn can_broadcast(a: &[usize], b: &[usize]) -> Broadcast {
    let rank = a.len().max(b.len());
    let mut first = false;
    let mut second = false;

    for i in 0..rank {
        let a_dim = aligned(a, i);
        let b_dim = aligned(b, i);
        if a_dim == b_dim {
            continue;
        }
        if a_dim == 1 {
            first = true;
        } else if b_dim == 1 {
            second = true;
        } else {
            return Broadcast::Invalid;
        }
    }

    match (first, second) {
        (false, false) => Broadcast::None,
        (true, false) => Broadcast::First,
        (false, true) => Broadcast::Second,
        (true, true) => Broadcast::Both,
    }
}

/// Compute the broadcast shape for two shapes.
///
/// Returns `None` if the shapes are incompatible.
pub fn broadcast_shape(a: &[usize], b: &[usize]) -> Option<Vec<usize>> {
    let rank = a.len().max(b.len());
    let mut result = vec![0usize; rank];

    for i in 0..rank {
        let a_dim = aligned(a, i);
        let b_dim = aligned(b, i);

        result[rank - 1 - i] = if a_dim == b_dim || b_dim == 1 {
            a_dim
        } else if a_dim == 1 {
            b_dim
        } else {
            return None;
        };
    }

    Some(result)
}
