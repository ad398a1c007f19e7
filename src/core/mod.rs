pub mod float;
pub use float::*;
pub mod magic;
pub use magic::*;
pub mod pow;
pub use pow::*;
pub mod halley;
pub use halley::*;
pub mod bits;
pub use bits::*;
pub mod roots;
pub use roots::*;
pub mod checked;
pub use checked::*;

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;

// Macros
/// `approx_root!(3, x)` expands to `approx_root::<3, _>(x)`.
#[macro_export]
macro_rules! approx_root {
    ($n:literal, $x:expr) => {
        $crate::core::roots::approx_root::<$n, _>($x)
    };
}
