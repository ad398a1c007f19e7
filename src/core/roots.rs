use crate::core::bits::bit_guess;
use crate::core::float::RootFloat;
use crate::core::halley::halley_step;
use crate::core::magic::{Degree, RootDegree};

/// Approximate `x^(1/N)`: bit-trick guess, then one Halley step.
///
/// `N` must lie in `2..=10`; other degrees do not implement [`RootDegree`].
/// `x` should be positive, finite and normal; anything else yields NaN, inf
/// or an unrelated finite value without any signal.
#[inline]
pub fn approx_root<const N: u32, T: RootFloat>(x: T) -> T
where
    Degree<N>: RootDegree,
{
    halley_step::<N, T>(bit_guess::<N, T>(x), x)
}

macro_rules! root_family {
    ($($(#[$doc:meta])* $name:ident => $n:literal;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<T: RootFloat>(x: T) -> T {
                approx_root::<$n, T>(x)
            }
        )*

        /// Method-call form of the root family, for `f32` and `f64`.
        ///
        /// ```
        /// use approx_roots::ApproxRoots;
        /// let r = 27.0_f64.approx_cbrt();
        /// assert!((r - 3.0).abs() < 1e-3);
        /// ```
        pub trait ApproxRoots: RootFloat {
            $(
                #[inline]
                fn $name(self) -> Self {
                    $name(self)
                }
            )*
        }

        impl<T: RootFloat> ApproxRoots for T {}
    };
}

root_family! {
    /// Approximate square root.
    ///
    /// ```
    /// let r = approx_roots::approx_sqrt(9.0_f32);
    /// assert!((r - 3.0).abs() < 1e-3);
    /// ```
    approx_sqrt => 2;
    /// Approximate cube root.
    approx_cbrt => 3;
    approx_forth_root => 4;
    approx_fifth_root => 5;
    approx_sixth_root => 6;
    approx_seventh_root => 7;
    approx_eighth_root => 8;
    approx_ninth_root => 9;
    approx_tenth_root => 10;
}

pub use self::approx_forth_root as approx_fourth_root;
