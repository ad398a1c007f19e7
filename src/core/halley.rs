use crate::core::float::RootFloat;
use crate::core::magic::{Degree, RootDegree};
use crate::core::pow::ConstPow;

/// One Halley iteration on `f(t) = t^N - value`, starting from `x0`.
///
/// ```text
/// fx   = x0^n - value
/// fpx  = n * x0^(n-1)
/// fppx = n * (n-1) * x0^(n-2)
/// x1   = x0 - (2*fx*fpx) / (2*fpx^2 - fx*fppx)
/// ```
///
/// No convergence check. A zero denominator gives inf/NaN.
#[inline(always)]
pub fn halley_step<const N: u32, T: RootFloat>(x0: T, value: T) -> T
where
    Degree<N>: RootDegree,
{
    let two = T::from_degree(2);
    let fx = <Degree<N> as RootDegree>::Pow::pow(x0) - value;
    let fpx = T::from_degree(N) * <Degree<N> as RootDegree>::PowLess1::pow(x0);
    let fppx = T::from_degree(N * (N - 1)) * <Degree<N> as RootDegree>::PowLess2::pow(x0);

    let numer = two * fx * fpx;
    let denom = two * fpx * fpx - fx * fppx;
    x0 - numer / denom
}
