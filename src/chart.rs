//! Chart Model
//!
//! `StackedBarChart` pairs validated [`ChartData`] with the [`ChartStyle`] it is
//! drawn with. It holds no GPUI state and can be built and inspected outside a
//! window; [`crate::StackedBarChartView`] owns one for rendering.

use gpui::{Hsla, SharedString};
use std::rc::Rc;
use tracing::warn;

use crate::data_types::{
    default_total_formatter, default_value_formatter, Category, ChartData, TotalFormatter,
    ValueFormatter,
};
use crate::error::{ChartError, Result, ShapeMismatch};
use crate::style::ChartStyle;

#[derive(Clone, Debug)]
pub struct StackedBarChart {
    pub data: ChartData,
    pub style: ChartStyle,
}

impl StackedBarChart {
    /// Categorized chart: one row of values per bar, one value per category.
    pub fn builder(bars: Vec<Vec<f64>>, categories: Vec<Category>) -> ChartBuilder {
        ChartBuilder::new(BuilderKind::Categorized { bars, categories })
    }

    /// Single-series chart. The bars share one unnamed category and the
    /// legend is always hidden.
    pub fn simple(values: Vec<f64>) -> ChartBuilder {
        ChartBuilder::new(BuilderKind::Simple {
            values,
            color: None,
        })
    }

    pub fn is_simple(&self) -> bool {
        self.data.categories.len() == 1 && !self.data.categories[0].has_name()
    }
}

enum BuilderKind {
    Categorized {
        bars: Vec<Vec<f64>>,
        categories: Vec<Category>,
    },
    Simple {
        values: Vec<f64>,
        color: Option<Hsla>,
    },
}

#[must_use]
pub struct ChartBuilder {
    kind: BuilderKind,
    labels: Option<Vec<SharedString>>,
    expanded_labels: Option<Vec<SharedString>>,
    value_formatter: Option<ValueFormatter>,
    total_formatter: Option<TotalFormatter>,
    style: ChartStyle,
}

impl ChartBuilder {
    fn new(kind: BuilderKind) -> Self {
        Self {
            kind,
            labels: None,
            expanded_labels: None,
            value_formatter: None,
            total_formatter: None,
            style: ChartStyle::default(),
        }
    }

    pub fn labels<S: Into<SharedString>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn expanded_labels<S: Into<SharedString>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.expanded_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn value_formatter(
        mut self,
        formatter: impl Fn(f64, usize, usize) -> String + 'static,
    ) -> Self {
        self.value_formatter = Some(Rc::new(formatter));
        self
    }

    /// Text of the detail panel's total row, given `(total, bar_index)`.
    pub fn total_formatter(mut self, formatter: impl Fn(f64, usize) -> String + 'static) -> Self {
        self.total_formatter = Some(Rc::new(formatter));
        self
    }

    pub fn style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Bar color of a simple chart. Ignored for categorized charts.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        if let BuilderKind::Simple { color: c, .. } = &mut self.kind {
            *c = Some(color.into());
        }
        self
    }

    pub fn build(self) -> Result<StackedBarChart> {
        let mut style = self.style;
        style.validate()?;

        let (bars, categories) = match self.kind {
            BuilderKind::Categorized { bars, categories } => (bars, categories),
            BuilderKind::Simple { values, color } => {
                style.show_legend = false;
                let color = color.unwrap_or(style.theme.accent);
                let bars = values.into_iter().map(|v| vec![v]).collect();
                (bars, vec![Category::unnamed(color)])
            }
        };

        let bar_count = bars.len();
        check_label_count("labels", self.labels.as_deref(), bar_count)?;
        check_label_count("expanded_labels", self.expanded_labels.as_deref(), bar_count)?;

        let (bars, shape_mismatches) = normalize_rows(bars, categories.len());

        Ok(StackedBarChart {
            data: ChartData {
                bars,
                categories,
                labels: self.labels,
                expanded_labels: self.expanded_labels,
                value_formatter: self.value_formatter.unwrap_or_else(default_value_formatter),
                total_formatter: self.total_formatter.unwrap_or_else(default_total_formatter),
                shape_mismatches,
            },
            style,
        })
    }
}

fn check_label_count(
    field: &'static str,
    labels: Option<&[SharedString]>,
    bar_count: usize,
) -> Result<()> {
    match labels {
        Some(labels) if labels.len() != bar_count => Err(ChartError::LabelCount {
            field,
            expected: bar_count,
            actual: labels.len(),
        }),
        _ => Ok(()),
    }
}

/// Truncates long rows and zero-pads short ones, recording each mismatch.
fn normalize_rows(
    mut bars: Vec<Vec<f64>>,
    category_count: usize,
) -> (Vec<Vec<f64>>, Vec<ShapeMismatch>) {
    let mut mismatches = Vec::new();
    for (idx, bar) in bars.iter_mut().enumerate() {
        if bar.len() != category_count {
            let mismatch = ShapeMismatch {
                bar: idx,
                expected: category_count,
                actual: bar.len(),
            };
            warn!(?mismatch, "bar value count differs from category count");
            mismatches.push(mismatch);
            bar.resize(category_count, 0.0);
        }
    }
    (bars, mismatches)
}
