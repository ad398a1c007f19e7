use core::fmt;
use core::fmt::Debug;

use num_traits::{Float, PrimInt, WrappingAdd};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::magic::{DEGREE_COUNT, MAGIC as PUBLISHED};

/// IEEE-754 storage width of a root type. Keys the magic table together
/// with the degree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FloatWidth {
    Single,
    Double,
}

impl FloatWidth {
    /// Width of the bit pattern.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            FloatWidth::Single => 32,
            FloatWidth::Double => 64,
        }
    }

    /// Stored mantissa bits (without the implicit leading one).
    #[inline]
    pub const fn mantissa_bits(self) -> u32 {
        match self {
            FloatWidth::Single => 23,
            FloatWidth::Double => 52,
        }
    }
}

impl fmt::Display for FloatWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatWidth::Single => write!(f, "f32"),
            FloatWidth::Double => write!(f, "f64"),
        }
    }
}

/// A float type the root family is defined for.
///
/// `Bits` is the unsigned integer of identical width that the bit trick
/// works on. Conversions to and from `f64`/`u64` are only used by the design
/// tooling and the checked layer, never by the fast path.
pub trait RootFloat: Float + Debug {
    type Bits: PrimInt + WrappingAdd + Debug;

    const WIDTH: FloatWidth;
    /// Published magic constants, index `n - 2`.
    const MAGIC: [Self::Bits; DEGREE_COUNT];

    fn to_bit_pattern(self) -> Self::Bits;
    fn from_bit_pattern(bits: Self::Bits) -> Self;

    /// `n` as a float; exact for every degree and degree product we use.
    fn from_degree(n: u32) -> Self;

    fn bits_from_u64(v: u64) -> Self::Bits;
    fn bits_to_u64(bits: Self::Bits) -> u64;

    fn widen(self) -> f64;
    fn narrow(x: f64) -> Self;
}

impl RootFloat for f32 {
    type Bits = u32;

    const WIDTH: FloatWidth = FloatWidth::Single;
    const MAGIC: [u32; DEGREE_COUNT] = PUBLISHED.single;

    #[inline(always)]
    fn to_bit_pattern(self) -> u32 {
        f32::to_bits(self)
    }
    #[inline(always)]
    fn from_bit_pattern(bits: u32) -> Self {
        f32::from_bits(bits)
    }
    #[inline(always)]
    fn from_degree(n: u32) -> Self {
        n as f32
    }
    #[inline]
    fn bits_from_u64(v: u64) -> u32 {
        v as u32
    }
    #[inline]
    fn bits_to_u64(bits: u32) -> u64 {
        bits as u64
    }
    #[inline]
    fn widen(self) -> f64 {
        self as f64
    }
    #[inline]
    fn narrow(x: f64) -> Self {
        x as f32
    }
}

impl RootFloat for f64 {
    type Bits = u64;

    const WIDTH: FloatWidth = FloatWidth::Double;
    const MAGIC: [u64; DEGREE_COUNT] = PUBLISHED.double;

    #[inline(always)]
    fn to_bit_pattern(self) -> u64 {
        f64::to_bits(self)
    }
    #[inline(always)]
    fn from_bit_pattern(bits: u64) -> Self {
        f64::from_bits(bits)
    }
    #[inline(always)]
    fn from_degree(n: u32) -> Self {
        n as f64
    }
    #[inline]
    fn bits_from_u64(v: u64) -> u64 {
        v
    }
    #[inline]
    fn bits_to_u64(bits: u64) -> u64 {
        bits
    }
    #[inline]
    fn widen(self) -> f64 {
        self
    }
    #[inline]
    fn narrow(x: f64) -> Self {
        x
    }
}
