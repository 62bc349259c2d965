//! Proportional color segments for a single stacked bar.
//!
//! Fractions are cumulative shares of the bar total in `[0, 1]`, with 0 at the
//! bar baseline.

use crate::data_types::Category;
use crate::scales::bar_total;
use gpui::Hsla;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// `None` for the placeholder segment of an empty bar.
    pub category_index: Option<usize>,
    pub color: Hsla,
    pub start: f64,
    pub end: f64,
}

impl Segment {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub color: Hsla,
    pub location: f64,
}

pub fn compose_segments(values: &[f64], categories: &[Category]) -> Vec<Segment> {
    let values = &values[..values.len().min(categories.len())];
    let total = bar_total(values);
    if !(total.is_finite() && total > 0.0) {
        return vec![Segment {
            category_index: None,
            color: gpui::transparent_black(),
            start: 0.0,
            end: 1.0,
        }];
    }

    let mut segments = Vec::with_capacity(categories.len().min(values.len()));
    let mut cumulative = 0.0;
    for (idx, (category, value)) in categories.iter().zip(values).enumerate() {
        let start = cumulative / total;
        cumulative += value;
        segments.push(Segment {
            category_index: Some(idx),
            color: category.color(),
            start,
            end: cumulative / total,
        });
    }
    segments
}

/// Two coincident stops per boundary so a continuous gradient renders hard
/// color bands.
pub fn gradient_stops(segments: &[Segment]) -> Vec<GradientStop> {
    segments
        .iter()
        .flat_map(|s| {
            [
                GradientStop {
                    color: s.color,
                    location: s.start,
                },
                GradientStop {
                    color: s.color,
                    location: s.end,
                },
            ]
        })
        .collect()
}
