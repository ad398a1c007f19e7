//! Guarded roots. Classifies the input before handing it to the fast path,
//! so none of these checks cost anything for callers of [`approx_root`].

use thiserror::Error;

use crate::core::float::RootFloat;
use crate::core::magic::{Degree, RootDegree};
use crate::core::roots::approx_root;

/// Inputs the fast path has no meaningful answer for.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RootError {
    #[error("root of degree {degree} of NaN")]
    NotANumber { degree: u32 },

    #[error("root of degree {degree} of infinite value {value}")]
    Infinite { value: f64, degree: u32 },

    /// Below the normal range, where the bit pattern no longer tracks log2.
    #[error("subnormal input {value:e} to root of degree {degree}")]
    Subnormal { value: f64, degree: u32 },

    #[error("even root of degree {degree} of negative value {value}")]
    NegativeEvenRoot { value: f64, degree: u32 },
}

impl RootError {
    pub fn degree(&self) -> u32 {
        match *self {
            RootError::NotANumber { degree }
            | RootError::Infinite { degree, .. }
            | RootError::Subnormal { degree, .. }
            | RootError::NegativeEvenRoot { degree, .. } => degree,
        }
    }
}

pub type RootResult<T> = Result<T, RootError>;

/// [`approx_root`] with the input classified first.
///
/// Zero maps to itself (sign kept). Negative inputs to odd roots go through
/// `-root(-x)`; to even roots they are an error.
pub fn checked_root<const N: u32, T: RootFloat>(x: T) -> RootResult<T>
where
    Degree<N>: RootDegree,
{
    if x.is_nan() {
        return Err(RootError::NotANumber { degree: N });
    }
    if x.is_infinite() {
        return Err(RootError::Infinite { value: x.widen(), degree: N });
    }
    if x == T::zero() {
        return Ok(x);
    }
    if !x.is_normal() {
        return Err(RootError::Subnormal { value: x.widen(), degree: N });
    }
    if x.is_sign_negative() {
        if N % 2 == 0 {
            return Err(RootError::NegativeEvenRoot { value: x.widen(), degree: N });
        }
        return Ok(-approx_root::<N, T>(-x));
    }
    Ok(approx_root::<N, T>(x))
}

macro_rules! checked_family {
    ($($name:ident => $n:literal;)*) => {
        $(
            #[inline]
            pub fn $name<T: RootFloat>(x: T) -> RootResult<T> {
                checked_root::<$n, T>(x)
            }
        )*
    };
}

checked_family! {
    checked_sqrt => 2;
    checked_cbrt => 3;
    checked_forth_root => 4;
    checked_fifth_root => 5;
    checked_sixth_root => 6;
    checked_seventh_root => 7;
    checked_eighth_root => 8;
    checked_ninth_root => 9;
    checked_tenth_root => 10;
}

pub use self::checked_forth_root as checked_fourth_root;
