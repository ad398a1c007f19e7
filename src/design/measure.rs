#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::float::RootFloat;
use crate::core::magic::{Degree, RootDegree};
use crate::core::roots::approx_root;

/// Relative error of a root approximation over a sample set, measured
/// against an `f64` `powf` reference.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorStats {
    pub max_rel_error: f64,
    pub mean_rel_error: f64,
    /// Input at which `max_rel_error` was reached.
    pub worst_x: f64,
    pub samples: usize,
}

impl ErrorStats {
    pub const EMPTY: Self = Self {
        max_rel_error: 0.0,
        mean_rel_error: 0.0,
        worst_x: f64::NAN,
        samples: 0,
    };
}

/// `x in [1, 2^n)`, midpoint-sampled in log space.
///
/// Scaling `x` by `2^n` scales the bit guess and every Halley intermediate by
/// an exact power of two, so this one period covers the whole normal range.
pub fn period_grid<T: RootFloat>(n: u32, samples: usize) -> impl Iterator<Item = T> {
    let n = n as f64;
    (0..samples).map(move |i| T::narrow(((i as f64 + 0.5) / samples as f64 * n).exp2()))
}

/// `samples + 1` points from `lo` to `hi`, evenly spaced in log space.
pub fn geometric_grid<T: RootFloat>(lo: f64, hi: f64, samples: usize) -> impl Iterator<Item = T> {
    let ratio = hi / lo;
    let steps = samples.max(1) as f64;
    (0..=samples).map(move |i| T::narrow(lo * ratio.powf(i as f64 / steps)))
}

/// Error stats of `root` as a degree-`n` root over `xs`.
///
/// Non-finite outputs count as an infinite error.
pub fn measure<T, F, I>(root: F, n: u32, xs: I) -> ErrorStats
where
    T: RootFloat,
    F: Fn(T) -> T,
    I: IntoIterator<Item = T>,
{
    let inv_n = 1.0 / n as f64;
    let mut stats = ErrorStats::EMPTY;
    let mut sum = 0.0_f64;

    for x in xs {
        let xf = x.widen();
        let want = xf.powf(inv_n);
        let got = root(x).widen();
        let e = if got.is_finite() {
            ((got - want) / want).abs()
        } else {
            f64::INFINITY
        };

        if stats.samples == 0 || e > stats.max_rel_error {
            stats.max_rel_error = e;
            stats.worst_x = xf;
        }
        sum += e;
        stats.samples += 1;
    }

    if stats.samples > 0 {
        stats.mean_rel_error = sum / stats.samples as f64;
    }
    stats
}

/// Error stats of [`approx_root`] on a geometric grid over `[lo, hi]`.
pub fn measure_root_error<const N: u32, T: RootFloat>(lo: f64, hi: f64, samples: usize) -> ErrorStats
where
    Degree<N>: RootDegree,
{
    measure(approx_root::<N, T>, N, geometric_grid::<T>(lo, hi, samples))
}
