//! Random sampling into freshly allocated arrays.
//!
//! Every sampler takes the generator explicitly, so seeding is up to the
//! caller:
//!
//! ```rust
//! use numc::random;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let a = random::normal(&mut rng, 0.0, 1.0, &[2, 3])?;
//! assert_eq!(a.shape(), &[2, 3]);
//! # Ok::<(), numc::NumcError>(())
//! ```
//!
//! The `*_each` variants take one parameter slice per distribution parameter
//! and cycle through each slice position by position (`params[i % len]`), so
//! a one-element slice acts like a scalar.

use crate::array::Array;
use crate::shape::shape_len;
use crate::{NumcError, Result};
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Beta, Binomial, Exp, Geometric, Normal, Poisson, Triangular};
use std::fmt::Display;

// ============================================================================
// Helpers
// ============================================================================

fn invalid(e: impl Display) -> NumcError {
    NumcError::InvalidDistribution(e.to_string())
}

/// Fill an array of `shape` by calling `sample` once per flat position.
fn generate<T, F>(shape: &[usize], mut sample: F) -> Result<Array<T>>
where
    F: FnMut(usize) -> Result<T>,
{
    let data = (0..shape_len(shape))
        .map(&mut sample)
        .collect::<Result<Vec<T>>>()?;
    Ok(Array::from_parts(shape.to_vec(), data))
}

fn require_params<P>(name: &str, params: &[P]) -> Result<()> {
    if params.is_empty() {
        return Err(invalid(format_args!("empty `{name}` parameter list")));
    }
    Ok(())
}

#[inline]
fn cycle<P: Copy>(params: &[P], i: usize) -> P {
    params[i % params.len()]
}

fn count_to_i32(v: u64) -> Result<i32> {
    i32::try_from(v).map_err(|_| NumcError::CastFailed)
}

fn int_range(low: i32, high: i32, endpoint: bool) -> Result<Uniform<i32>> {
    let top = if endpoint {
        high
    } else {
        high.checked_sub(1).ok_or(NumcError::CastFailed)?
    };
    if low > top {
        return Err(invalid(format_args!("empty integer range [{low}, {high})")));
    }
    Ok(Uniform::new_inclusive(low, top))
}

fn float_range(low: f64, high: f64) -> Result<Uniform<f64>> {
    if !(low < high) || !low.is_finite() || !high.is_finite() {
        return Err(invalid(format_args!("uniform bounds [{low}, {high})")));
    }
    Ok(Uniform::new(low, high))
}

fn normal_dist(mean: f64, std: f64) -> Result<Normal<f64>> {
    if !(std >= 0.0 && std.is_finite()) {
        return Err(invalid(format_args!("normal std {std} must be finite and non-negative")));
    }
    Normal::new(mean, std).map_err(invalid)
}

fn exp_dist(scale: f64) -> Result<Exp<f64>> {
    if !(scale > 0.0) {
        return Err(invalid(format_args!("exponential scale {scale} must be positive")));
    }
    Exp::new(1.0 / scale).map_err(invalid)
}

// ============================================================================
// Integers
// ============================================================================

/// Uniform integers from `[low, high)`, or `[low, high]` with `endpoint`.
pub fn randint<R: Rng + ?Sized>(
    rng: &mut R,
    low: i32,
    high: i32,
    shape: &[usize],
    endpoint: bool,
) -> Result<Array<i32>> {
    let dist = int_range(low, high, endpoint)?;
    generate(shape, |_| Ok(dist.sample(rng)))
}

pub fn randint_each<R: Rng + ?Sized>(
    rng: &mut R,
    low: &[i32],
    high: &[i32],
    shape: &[usize],
    endpoint: bool,
) -> Result<Array<i32>> {
    require_params("low", low)?;
    require_params("high", high)?;
    generate(shape, |i| {
        Ok(int_range(cycle(low, i), cycle(high, i), endpoint)?.sample(rng))
    })
}

/// Successes in `n` Bernoulli trials with probability `p`.
pub fn binomial<R: Rng + ?Sized>(rng: &mut R, n: u64, p: f64, shape: &[usize]) -> Result<Array<i32>> {
    let dist = Binomial::new(n, p).map_err(invalid)?;
    generate(shape, |_| count_to_i32(dist.sample(rng)))
}

pub fn binomial_each<R: Rng + ?Sized>(
    rng: &mut R,
    n: &[u64],
    p: &[f64],
    shape: &[usize],
) -> Result<Array<i32>> {
    require_params("n", n)?;
    require_params("p", p)?;
    generate(shape, |i| {
        let dist = Binomial::new(cycle(n, i), cycle(p, i)).map_err(invalid)?;
        count_to_i32(dist.sample(rng))
    })
}

pub fn poisson<R: Rng + ?Sized>(rng: &mut R, lam: f64, shape: &[usize]) -> Result<Array<i32>> {
    let dist = Poisson::new(lam).map_err(invalid)?;
    generate(shape, |_| count_to_i32(dist.sample(rng) as u64))
}

pub fn poisson_each<R: Rng + ?Sized>(rng: &mut R, lam: &[f64], shape: &[usize]) -> Result<Array<i32>> {
    require_params("lam", lam)?;
    generate(shape, |i| {
        let dist = Poisson::new(cycle(lam, i)).map_err(invalid)?;
        count_to_i32(dist.sample(rng) as u64)
    })
}

/// Failures before the first success, success probability `p`.
pub fn geometric<R: Rng + ?Sized>(rng: &mut R, p: f64, shape: &[usize]) -> Result<Array<i32>> {
    let dist = Geometric::new(p).map_err(invalid)?;
    generate(shape, |_| count_to_i32(dist.sample(rng)))
}

pub fn geometric_each<R: Rng + ?Sized>(rng: &mut R, p: &[f64], shape: &[usize]) -> Result<Array<i32>> {
    require_params("p", p)?;
    generate(shape, |i| {
        let dist = Geometric::new(cycle(p, i)).map_err(invalid)?;
        count_to_i32(dist.sample(rng))
    })
}

// ============================================================================
// Floats
// ============================================================================

/// One sample from `[0, 1)`.
pub fn random_scalar<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen()
}

/// Samples from `[0, 1)`.
pub fn random<R: Rng + ?Sized>(rng: &mut R, shape: &[usize]) -> Array<f64> {
    let data = (0..shape_len(shape)).map(|_| rng.gen()).collect();
    Array::from_parts(shape.to_vec(), data)
}

/// Samples from `[low, high)`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64, shape: &[usize]) -> Result<Array<f64>> {
    let dist = float_range(low, high)?;
    generate(shape, |_| Ok(dist.sample(rng)))
}

pub fn uniform_each<R: Rng + ?Sized>(
    rng: &mut R,
    low: &[f64],
    high: &[f64],
    shape: &[usize],
) -> Result<Array<f64>> {
    require_params("low", low)?;
    require_params("high", high)?;
    generate(shape, |i| Ok(float_range(cycle(low, i), cycle(high, i))?.sample(rng)))
}

pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std: f64, shape: &[usize]) -> Result<Array<f64>> {
    let dist = normal_dist(mean, std)?;
    generate(shape, |_| Ok(dist.sample(rng)))
}

pub fn normal_each<R: Rng + ?Sized>(
    rng: &mut R,
    mean: &[f64],
    std: &[f64],
    shape: &[usize],
) -> Result<Array<f64>> {
    require_params("mean", mean)?;
    require_params("std", std)?;
    generate(shape, |i| {
        let dist = normal_dist(cycle(mean, i), cycle(std, i))?;
        Ok(dist.sample(rng))
    })
}

pub fn beta<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64, shape: &[usize]) -> Result<Array<f64>> {
    let dist = Beta::new(a, b).map_err(invalid)?;
    generate(shape, |_| Ok(dist.sample(rng)))
}

pub fn beta_each<R: Rng + ?Sized>(rng: &mut R, a: &[f64], b: &[f64], shape: &[usize]) -> Result<Array<f64>> {
    require_params("a", a)?;
    require_params("b", b)?;
    generate(shape, |i| {
        let dist = Beta::new(cycle(a, i), cycle(b, i)).map_err(invalid)?;
        Ok(dist.sample(rng))
    })
}

/// Triangular distribution on `[left, right]` peaking at `mode`.
pub fn triangular<R: Rng + ?Sized>(
    rng: &mut R,
    left: f64,
    mode: f64,
    right: f64,
    shape: &[usize],
) -> Result<Array<f64>> {
    let dist = Triangular::new(left, right, mode).map_err(invalid)?;
    generate(shape, |_| Ok(dist.sample(rng)))
}

pub fn triangular_each<R: Rng + ?Sized>(
    rng: &mut R,
    left: &[f64],
    mode: &[f64],
    right: &[f64],
    shape: &[usize],
) -> Result<Array<f64>> {
    require_params("left", left)?;
    require_params("mode", mode)?;
    require_params("right", right)?;
    generate(shape, |i| {
        let dist = Triangular::new(cycle(left, i), cycle(right, i), cycle(mode, i)).map_err(invalid)?;
        Ok(dist.sample(rng))
    })
}

/// Exponential distribution with mean `scale`.
pub fn exponential<R: Rng + ?Sized>(rng: &mut R, scale: f64, shape: &[usize]) -> Result<Array<f64>> {
    let dist = exp_dist(scale)?;
    generate(shape, |_| Ok(dist.sample(rng)))
}

pub fn exponential_each<R: Rng + ?Sized>(rng: &mut R, scale: &[f64], shape: &[usize]) -> Result<Array<f64>> {
    require_params("scale", scale)?;
    generate(shape, |i| Ok(exp_dist(cycle(scale, i))?.sample(rng)))
}

// ============================================================================
// Choice and permutation
// ============================================================================

/// Draw elements of `pool` into an array of `shape`.
///
/// With `replace`, each position is an independent uniform draw. Without it,
/// the pool is shuffled once and read in order; once exhausted, reading
/// wraps to the start of the shuffled pool.
pub fn choice<T: Copy, R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[T],
    shape: &[usize],
    replace: bool,
) -> Result<Array<T>> {
    require_params("pool", pool)?;
    if replace {
        let dist = Uniform::new(0, pool.len());
        return generate(shape, |_| Ok(pool[dist.sample(rng)]));
    }
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    generate(shape, |i| Ok(cycle(&shuffled, i)))
}

/// Shuffle the flat buffer in place (Fisher-Yates). The shape is unchanged.
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, a: &mut Array<T>) {
    a.as_mut_slice().shuffle(rng);
}

/// Shuffled copy of `a`.
pub fn permutation<T: Copy, R: Rng + ?Sized>(rng: &mut R, a: &Array<T>) -> Array<T> {
    let mut out = a.clone();
    shuffle(rng, &mut out);
    out
}
