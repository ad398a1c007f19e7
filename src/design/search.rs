#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::bits::bit_guess_with;
use crate::core::float::{FloatWidth, RootFloat};
use crate::core::halley::halley_step;
use crate::core::magic::{Degree, RootDegree};
use crate::design::measure::period_grid;

/// What a candidate magic constant is scored on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Objective {
    /// The raw bit guess.
    Guess,
    /// The guess after one Halley step.
    Refined,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Points sampled over one period `[1, 2^n)`.
    pub samples: usize,
    /// Candidates on each side of the current best, per round (at least 4).
    pub candidates: u32,
    pub objective: Objective,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            samples: 512,
            candidates: 16,
            objective: Objective::Refined,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MagicReport {
    pub width: FloatWidth,
    pub degree: u32,
    pub objective: Objective,
    pub magic: u64,
    pub max_rel_error: f64,
    /// The table constant, scored on the same samples.
    pub published: u64,
    pub published_error: f64,
    pub rounds: u32,
    pub evaluations: u64,
}

impl MagicReport {
    /// `published_error / max_rel_error`; above one means the search won.
    pub fn improvement(&self) -> f64 {
        self.published_error / self.max_rel_error
    }
}

/// Reports as pretty-printed JSON.
#[cfg(feature = "serde")]
pub fn reports_to_json(reports: &[MagicReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}

/// Worst relative error of `magic` over `xs`, against precomputed roots.
fn worst_error<const N: u32, T: RootFloat>(
    magic: T::Bits,
    xs: &[T],
    want: &[f64],
    objective: Objective,
) -> f64
where
    Degree<N>: RootDegree,
{
    let mut worst = 0.0_f64;
    for (&x, &w) in xs.iter().zip(want) {
        let guess = bit_guess_with::<N, T>(x, magic);
        let y = match objective {
            Objective::Guess => guess,
            Objective::Refined => halley_step::<N, T>(guess, x),
        }
        .widen();
        if !y.is_finite() {
            return f64::INFINITY;
        }
        worst = worst.max(((y - w) / w).abs());
    }
    worst
}

/// Re-derive the magic constant for `(T, N)` by minimizing worst-case
/// relative error.
///
/// Coarse-to-fine scan starting at the ideal bias `bits(1) - bits(1)/N`: each
/// round scores `2 * candidates` constants spaced `step` apart around the
/// current best, then shrinks the spacing by `candidates / 2`. Stops after the
/// round at unit spacing.
pub fn search_magic<const N: u32, T: RootFloat>(config: &SearchConfig) -> MagicReport
where
    Degree<N>: RootDegree,
{
    let published = T::MAGIC[<Degree<N> as RootDegree>::INDEX];
    let xs: Vec<T> = period_grid::<T>(N, config.samples.max(1)).collect();
    let want: Vec<f64> = xs.iter().map(|x| x.widen().powf(1.0 / N as f64)).collect();
    let score = |magic: u64| worst_error::<N, T>(T::bits_from_u64(magic), &xs, &want, config.objective);

    let one = T::bits_to_u64(T::one().to_bit_pattern());
    let center = one - one / N as u64;
    let k = config.candidates.max(4) as u64;

    let mut best = (center, score(center));
    let mut evaluations = 1u64;
    let mut rounds = 0u32;
    let mut span = 1u64 << (T::WIDTH.mantissa_bits() - 2);

    loop {
        let step = (span / k).max(1);
        let base = best.0;
        for i in 1..=k {
            for candidate in [base.checked_sub(i * step), base.checked_add(i * step)]
                .into_iter()
                .flatten()
            {
                let e = score(candidate);
                evaluations += 1;
                if e < best.1 {
                    best = (candidate, e);
                }
            }
        }
        rounds += 1;
        debug!(
            width = %T::WIDTH,
            degree = N,
            round = rounds,
            step,
            best = format_args!("{:#x}", best.0),
            error = best.1,
            "magic search round"
        );
        if step == 1 {
            break;
        }
        span = step * 2;
    }

    let published = T::bits_to_u64(published);
    let report = MagicReport {
        width: T::WIDTH,
        degree: N,
        objective: config.objective,
        magic: best.0,
        max_rel_error: best.1,
        published,
        published_error: score(published),
        rounds,
        evaluations,
    };
    info!(
        width = %report.width,
        degree = N,
        magic = format_args!("{:#x}", report.magic),
        error = report.max_rel_error,
        published_error = report.published_error,
        "magic search done"
    );
    report
}
