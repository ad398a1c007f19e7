use crate::core::float::FloatWidth;
use crate::core::pow::{ConstPow, Exp};

pub const MIN_DEGREE: u32 = 2;
pub const MAX_DEGREE: u32 = 10;
pub const DEGREE_COUNT: usize = (MAX_DEGREE - MIN_DEGREE + 1) as usize;

/// Bit-trick bias per (width, degree).
///
/// Entry `n - 2` sits a little below `bits(1.0) * (1 - 1/n)`; the exact
/// values were tuned empirically (see `design::search` to re-derive them).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MagicTable {
    pub single: [u32; DEGREE_COUNT],
    pub double: [u64; DEGREE_COUNT],
}

impl MagicTable {
    /// Magic constant for `degree` at `width`, widened to `u64`.
    #[inline]
    pub const fn lookup(&self, width: FloatWidth, degree: u32) -> Option<u64> {
        if degree < MIN_DEGREE || degree > MAX_DEGREE {
            return None;
        }
        let i = (degree - MIN_DEGREE) as usize;
        Some(match width {
            FloatWidth::Single => self.single[i] as u64,
            FloatWidth::Double => self.double[i],
        })
    }
}

#[rustfmt::skip]
pub const MAGIC: MagicTable = MagicTable {
    single: [
        0x1fbb67ad, // 2
        0x2a511949, // 3
        0x2f9b5088, // 4
        0x32c82ec7, // 5
        0x34e5e317, // 6
        0x3668ef49, // 7
        0x378b0a48, // 8
        0x38714eaf, // 9
        0x391cabf0, // 10
    ],
    double: [
        0x1ff76cf48689feb3, // 2
        0x2a9f77a7a61a7e7a, // 3
        0x2ff36a476a29c002, // 4
        0x3325d3e38d3b8000, // 5
        0x3547679b9fb94000, // 6
        0x36cd1e16377a0000, // 7
        0x37f16397f5297fd4, // 8
        0x38d4b87bc4113ff5, // 9
        0x398a9464ab857fdf, // 10
    ],
};

/// Compile-time degree. Only `Degree<2>` to `Degree<10>` implement
/// [`RootDegree`], so any other `N` fails the trait bound at compile time.
pub struct Degree<const N: u32>;

/// What a root of degree `N` needs at compile time: its table slot and the
/// exponents `N`, `N - 1`, `N - 2` of the Halley step.
pub trait RootDegree {
    const DEGREE: u32;
    const INDEX: usize;

    type Pow: ConstPow;
    type PowLess1: ConstPow;
    type PowLess2: ConstPow;
}

macro_rules! root_degree {
    ($($n:literal => $m1:literal, $m2:literal;)*) => {
        $(
            impl RootDegree for Degree<$n> {
                const DEGREE: u32 = $n;
                const INDEX: usize = ($n - MIN_DEGREE) as usize;

                type Pow = Exp<$n>;
                type PowLess1 = Exp<$m1>;
                type PowLess2 = Exp<$m2>;
            }
        )*
    };
}

root_degree! {
    2 => 1, 0;
    3 => 2, 1;
    4 => 3, 2;
    5 => 4, 3;
    6 => 5, 4;
    7 => 6, 5;
    8 => 7, 6;
    9 => 8, 7;
    10 => 9, 8;
}
