use plotters::prelude::*;

use crate::core::float::RootFloat;
use crate::core::magic::{Degree, RootDegree};
use crate::core::roots::approx_root;
use crate::design::measure::geometric_grid;

/// Relative error of `approx_root::<N, T>` against log10(x), as an SVG.
pub fn plot_error_curve<const N: u32, T: RootFloat>(
    path: &str,
    lo: f64,
    hi: f64,
    samples: usize,
) -> Result<(), Box<dyn std::error::Error>>
where
    Degree<N>: RootDegree,
{
    let inv_n = 1.0 / N as f64;
    let points: Vec<(f64, f64)> = geometric_grid::<T>(lo, hi, samples)
        .map(|x| {
            let xf = x.widen();
            let want = xf.powf(inv_n);
            let got = approx_root::<N, T>(x).widen();
            (xf.log10(), ((got - want) / want).abs())
        })
        .collect();
    let y_max = points.iter().map(|p| p.1).fold(0.0, f64::max).max(1e-12) * 1.1;

    let root = SVGBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .caption(
            format!("approx root, n = {N} ({}), one Halley step", T::WIDTH),
            ("sans-serif", 22),
        )
        .x_label_area_size(30)
        .y_label_area_size(70)
        .build_cartesian_2d(lo.log10()..hi.log10(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("log10(x)")
        .y_desc("relative error")
        .label_style(("sans-serif", 12))
        .draw()?;

    chart.draw_series(LineSeries::new(points, RGBColor(220, 20, 60).stroke_width(1)))?;

    root.present()?;
    Ok(())
}
