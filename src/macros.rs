/// Build an [`Array`](crate::Array) from a (possibly nested) literal.
///
/// Each bracket level adds a leading axis. Rows must agree in shape; a ragged
/// literal panics, like an out-of-bounds `vec!` index would. Use
/// [`Array::from_nested`](crate::Array::from_nested) for a fallible build.
///
/// ```rust
/// use numc::array;
///
/// let v = array![1, 2, 3];
/// assert_eq!(v.shape(), &[3]);
///
/// let m = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
/// assert_eq!(m.shape(), &[3, 2]);
///
/// let t = array![[[1, 2]], [[3, 4]]];
/// assert_eq!(t.shape(), &[2, 1, 2]);
/// ```
#[macro_export]
macro_rules! array {
    ($([$($inner:tt)*]),+ $(,)?) => {
        match $crate::Array::from_nested(vec![$($crate::array![$($inner)*]),+]) {
            Ok(a) => a,
            Err(e) => panic!("array!: ragged literal: {}", e),
        }
    };
    ($($x:expr),* $(,)?) => {
        $crate::Array::from_vec(vec![$($x),*])
    };
}
