use crate::core::float::{FloatWidth, RootFloat};

/// Regression bounds on `|r - x^(1/n)| / x^(1/n)`, index `n - 2`.
/// Measured worst cases over one full period of n binades, ~1.5-2x headroom.
pub const F32_ROOT_TOL: [f64; 9] = [2e-5, 4e-5, 1e-4, 1.5e-4, 2e-4, 3e-4, 4e-4, 2.5e-3, 3e-3];
pub const F64_ROOT_TOL: [f64; 9] = [2e-5, 4e-5, 1e-4, 1.5e-4, 2e-4, 3e-4, 4e-4, 5e-4, 6e-4];

/// Same for `|r^n - x| / x`.
pub const F32_POW_TOL: [f64; 9] = [5e-5, 1.5e-4, 4e-4, 8e-4, 1.5e-3, 2.5e-3, 4e-3, 2.5e-2, 3e-2];
pub const F64_POW_TOL: [f64; 9] = [5e-5, 1.5e-4, 4e-4, 8e-4, 1.5e-3, 2.5e-3, 4e-3, 5e-3, 6e-3];

pub fn root_tol<T: RootFloat>(n: u32) -> f64 {
    let i = (n - 2) as usize;
    match T::WIDTH {
        FloatWidth::Single => F32_ROOT_TOL[i],
        FloatWidth::Double => F64_ROOT_TOL[i],
    }
}

pub fn pow_tol<T: RootFloat>(n: u32) -> f64 {
    let i = (n - 2) as usize;
    match T::WIDTH {
        FloatWidth::Single => F32_POW_TOL[i],
        FloatWidth::Double => F64_POW_TOL[i],
    }
}

#[inline]
pub fn rel_err(got: f64, want: f64) -> f64 {
    ((got - want) / want).abs()
}

/// `samples + 1` points, geometric from `lo` to `hi`, rounded to `T`.
pub fn geometric_grid<T: RootFloat>(lo: f64, hi: f64, samples: usize) -> Vec<T> {
    let ratio = hi / lo;
    (0..=samples)
        .map(|i| T::narrow(lo * ratio.powf(i as f64 / samples as f64)))
        .collect()
}

/// Worst root error and worst power error of `f` as a degree-`n` root.
pub fn sweep<T: RootFloat>(f: fn(T) -> T, n: u32, xs: &[T]) -> (f64, f64, f64) {
    let mut max_root = 0.0_f64;
    let mut max_pow = 0.0_f64;
    let mut worst_x = 0.0_f64;
    for &x in xs {
        let xf = x.widen();
        let r = f(x).widen();
        let e_root = rel_err(r, xf.powf(1.0 / n as f64));
        let e_pow = rel_err(r.powi(n as i32), xf);
        if e_root > max_root {
            max_root = e_root;
            worst_x = xf;
        }
        max_pow = max_pow.max(e_pow);
    }
    (max_root, max_pow, worst_x)
}
