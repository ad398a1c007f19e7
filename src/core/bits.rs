use num_traits::WrappingAdd;

use crate::core::float::RootFloat;
use crate::core::magic::{Degree, RootDegree};

/// Coarse `x^(1/N)` from the bit pattern alone, using the published magic
/// constant for `(T, N)`.
///
/// Dividing the raw bits by `N` roughly divides `log2(x)` by `N`; the magic
/// constant restores the exponent bias. Within a few percent for positive
/// normal `x`, meaningless (but never a panic) otherwise.
#[inline(always)]
pub fn bit_guess<const N: u32, T: RootFloat>(x: T) -> T
where
    Degree<N>: RootDegree,
{
    bit_guess_with::<N, T>(x, T::MAGIC[<Degree<N> as RootDegree>::INDEX])
}

/// [`bit_guess`] with an explicit magic constant.
#[inline(always)]
pub fn bit_guess_with<const N: u32, T: RootFloat>(x: T, magic: T::Bits) -> T
where
    Degree<N>: RootDegree,
{
    let n = T::bits_from_u64(N as u64);
    // wraps like plain unsigned arithmetic; published constants never do
    T::from_bit_pattern(WrappingAdd::wrapping_add(&magic, &(x.to_bit_pattern() / n)))
}
