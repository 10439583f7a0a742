use numc::{Array, NumcError, Slice, Viewer};

fn cube() -> Array<i32> {
    Array::from_shape_vec(&[3, 4, 5], (0..60).collect()).unwrap()
}

fn sl(begin: isize, end: isize, step: isize) -> Slice {
    Slice::with_step(begin, end, step).unwrap()
}

/// Expected view contents, computed by direct coordinate addressing.
fn by_indexing(a: &Array<i32>, slices: &[Slice]) -> Vec<i32> {
    let normalized: Vec<Slice> = a
        .shape()
        .iter()
        .enumerate()
        .map(|(axis, &len)| {
            let mut s = slices.get(axis).copied().unwrap_or_default();
            s.normalize(len);
            s
        })
        .collect();
    let mut out = Vec::new();
    for i in normalized[0].indices() {
        for j in normalized[1].indices() {
            for k in normalized[2].indices() {
                out.push(*a.get_value(&[i, j, k]).unwrap());
            }
        }
    }
    out
}

#[test]
fn test_materialize_matches_indexing() {
    let a = cube();
    let combos: Vec<Vec<Slice>> = vec![
        vec![],
        vec![Slice::full(), Slice::full(), Slice::full()],
        vec![sl(1, 3, 1)],
        vec![sl(0, 3, 2), sl(1, -1, 1)],
        vec![Slice::full(), sl(-1, -5, -1), sl(0, 5, 2)],
        vec![sl(2, 0, -1), sl(3, 4, 1), sl(-2, 100, 1)],
        vec![sl(1, 1, 1), Slice::full(), Slice::full()],
    ];
    for slices in &combos {
        let view = a.view(slices).unwrap();
        let materialized = view.to_array();
        let expected_shape: Vec<usize> = view.slices().iter().map(Slice::size).collect();
        assert_eq!(materialized.shape(), expected_shape.as_slice());
        assert_eq!(materialized.as_slice(), by_indexing(&a, slices).as_slice());
    }
}

#[test]
fn test_view_conversion_into_array() {
    let a = cube();
    let view: Viewer<'_, i32> = a.view(&[sl(2, 3, 1), sl(0, 1, 1)]).unwrap();
    let owned: Array<i32> = view.into();
    assert_eq!(owned.shape(), &[1, 1, 5]);
    assert_eq!(owned.as_slice(), &[40, 41, 42, 43, 44]);
}

#[test]
fn test_bulk_write_row_major_order() {
    let mut a = cube();
    let values: Vec<i32> = (0..8).map(|v| -v).collect();
    a.view_mut(&[sl(0, 2, 1), sl(0, 4, 2), sl(3, 1, -1)])
        .unwrap()
        .assign(&values)
        .unwrap();
    // last axis walks 3, 2; middle axis 0, 2; first axis 0, 1
    let touched = [
        ([0, 0, 3], 0),
        ([0, 0, 2], -1),
        ([0, 2, 3], -2),
        ([0, 2, 2], -3),
        ([1, 0, 3], -4),
        ([1, 0, 2], -5),
        ([1, 2, 3], -6),
        ([1, 2, 2], -7),
    ];
    for (coord, v) in touched {
        assert_eq!(*a.get_value(&coord).unwrap(), v);
    }
    assert_eq!(*a.get_value(&[0, 1, 3]).unwrap(), 8);
    assert_eq!(*a.get_value(&[2, 0, 3]).unwrap(), 43);
}

#[test]
fn test_scalar_write() {
    let mut a = cube();
    a.view_mut(&[sl(-1, 3, 1)]).unwrap().fill(0);
    assert!(a.sub_block(&[2]).unwrap().iter().all(|&v| v == 0));
    assert_eq!(a.sum().unwrap(), (0..40).sum::<i32>());
}

#[test]
fn test_length_mismatch_leaves_owner_untouched() {
    let mut a = cube();
    let err = a
        .view_mut(&[sl(0, 2, 1), sl(0, 2, 1), sl(0, 2, 1)])
        .unwrap()
        .assign(&[1; 7])
        .unwrap_err();
    assert_eq!(
        err,
        NumcError::SizeMismatch {
            expected: 8,
            actual: 7
        }
    );
    assert_eq!(a, cube());
}

#[test]
fn test_coordinate_count_errors() {
    let a = cube();
    let view = a.view(&[sl(0, 2, 1)]).unwrap();
    assert_eq!(
        view.get(&[0, 0]),
        Err(NumcError::CoordinateCountMismatch {
            given: 2,
            expected: 3
        })
    );
    assert!(matches!(
        a.view(&[Slice::full(); 4]),
        Err(NumcError::TooManyCoordinates { given: 4, ndim: 3 })
    ));
    assert!(matches!(
        view.get(&[2, 0, 0]),
        Err(NumcError::OutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn test_view_reads_after_write() {
    let mut a = cube();
    {
        let mut v = a.view_mut(&[sl(1, 2, 1), sl(1, 3, 1), sl(1, 3, 1)]).unwrap();
        v.set(&[0, 1, 1], 999).unwrap();
        assert_eq!(v.get(&[0, 1, 1]).unwrap(), 999);
        assert_eq!(v.to_array().shape(), &[1, 2, 2]);
    }
    assert_eq!(*a.get_value(&[1, 2, 2]).unwrap(), 999);
}
