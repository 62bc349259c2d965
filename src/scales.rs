//! Scale calculation for stacked bars.
//!
//! Bar totals, the padded axis ceiling and the average line value are derived
//! from the raw rows on every render; nothing here is cached.

use d3rs::scale::{LinearScale, Scale as D3Scale};

/// Headroom applied above the tallest bar before rounding.
pub const AXIS_HEADROOM: f64 = 1.2;
/// The axis ceiling is rounded up to a multiple of this step and never goes below it.
pub const AXIS_STEP: f64 = 10.0;

pub fn bar_total(bar: &[f64]) -> f64 {
    bar.iter().sum()
}

/// Largest bar total, or 0 when there are no bars.
pub fn max_value(bars: &[Vec<f64>]) -> f64 {
    if bars.is_empty() {
        return 0.0;
    }
    bars.iter()
        .map(|bar| bar_total(bar))
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Axis ceiling: 20% above `max_value`, rounded up to the next multiple of 10,
/// with a floor of 10.
pub fn padded_max(max_value: f64) -> f64 {
    let padded = (max_value * AXIS_HEADROOM / AXIS_STEP).ceil() * AXIS_STEP;
    if padded.is_finite() {
        padded.max(AXIS_STEP)
    } else {
        AXIS_STEP
    }
}

/// Mean of the bar totals, or 0 when there are no bars.
pub fn average(bars: &[Vec<f64>]) -> f64 {
    if bars.is_empty() {
        return 0.0;
    }
    let sum: f64 = bars.iter().map(|bar| bar_total(bar)).sum();
    sum / bars.len() as f64
}

/// Default text for a bar value.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 || value.abs() > 1000.0 {
        format!("{:.0}", value)
    } else if value.abs() < 0.001 {
        format!("{:.4}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Linear mapping from data values to pixel offsets.
#[derive(Clone)]
pub struct ChartScale {
    inner: LinearScale,
    domain: (f64, f64),
    range: (f32, f32),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        let inner = LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0 as f64, range.1 as f64);
        Self {
            inner,
            domain: (d_min, d_max),
            range,
        }
    }

    /// Scale for bar heights inside a plot of `height` pixels: 0 maps to the
    /// bottom edge and `ceiling` to the top edge.
    pub fn vertical(ceiling: f64, height: f32) -> Self {
        Self::new_linear((0.0, ceiling), (height, 0.0))
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = self.inner.scale(value) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }
}
