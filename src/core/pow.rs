use num_traits::Float;

/// Exponent as a type. [`ConstPow`] is implemented for `Exp<0>` to `Exp<10>`.
pub struct Exp<const K: u32>;

/// `x^K` as a fixed multiply chain, one impl per exponent.
///
/// Exponentiation by squaring unrolled at the type level:
/// `pow(0) = 1`, `pow(1) = x`, `pow(2k) = p * p`, `pow(2k + 1) = x * p * p`
/// with `p = pow(k)`. No loops, no branches.
pub trait ConstPow {
    const EXP: u32;

    fn pow<T: Float>(x: T) -> T;
}

impl ConstPow for Exp<0> {
    const EXP: u32 = 0;

    #[inline(always)]
    fn pow<T: Float>(_: T) -> T {
        T::one()
    }
}

impl ConstPow for Exp<1> {
    const EXP: u32 = 1;

    #[inline(always)]
    fn pow<T: Float>(x: T) -> T {
        x
    }
}

macro_rules! const_pow {
    ($($k:literal = $half:literal $parity:ident;)*) => {
        $(
            impl ConstPow for Exp<$k> {
                const EXP: u32 = $k;

                #[inline(always)]
                fn pow<T: Float>(x: T) -> T {
                    let p = <Exp<$half> as ConstPow>::pow(x);
                    const_pow!(@$parity x, p)
                }
            }
        )*
    };
    (@even $x:ident, $p:ident) => { $p * $p };
    (@odd $x:ident, $p:ident) => { $x * $p * $p };
}

const_pow! {
    2 = 1 even;
    3 = 1 odd;
    4 = 2 even;
    5 = 2 odd;
    6 = 3 even;
    7 = 3 odd;
    8 = 4 even;
    9 = 4 odd;
    10 = 5 even;
}

/// `x^N` for a compile-time exponent `N` in `0..=10`.
#[inline(always)]
pub fn ct_pow<const N: u32, T: Float>(x: T) -> T
where
    Exp<N>: ConstPow,
{
    <Exp<N> as ConstPow>::pow(x)
}
