use gpui::SharedString;
use std::fmt;
use std::rc::Rc;

use super::Category;
use crate::error::ShapeMismatch;
use crate::scales::format_value;

/// Formats `(value, category_index, bar_index)` for the detail panel.
pub type ValueFormatter = Rc<dyn Fn(f64, usize, usize) -> String>;

pub fn default_value_formatter() -> ValueFormatter {
    Rc::new(|value, _, _| format_value(value))
}

/// Formats `(total, bar_index)` for the total row of the detail panel.
pub type TotalFormatter = Rc<dyn Fn(f64, usize) -> String>;

pub fn default_total_formatter() -> TotalFormatter {
    Rc::new(|total, _| format_value(total))
}

/// Validated chart input.
///
/// Every row holds exactly one value per category: rows recorded in
/// `shape_mismatches` were truncated or zero-padded at construction.
#[derive(Clone)]
pub struct ChartData {
    pub(crate) bars: Vec<Vec<f64>>,
    pub(crate) categories: Vec<Category>,
    pub(crate) labels: Option<Vec<SharedString>>,
    pub(crate) expanded_labels: Option<Vec<SharedString>>,
    pub(crate) value_formatter: ValueFormatter,
    pub(crate) total_formatter: TotalFormatter,
    pub(crate) shape_mismatches: Vec<ShapeMismatch>,
}

impl ChartData {
    pub fn bars(&self) -> &[Vec<f64>] {
        &self.bars
    }

    pub fn bar(&self, index: usize) -> Option<&[f64]> {
        self.bars.get(index).map(Vec::as_slice)
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn labels(&self) -> Option<&[SharedString]> {
        self.labels.as_deref()
    }

    pub fn expanded_labels(&self) -> Option<&[SharedString]> {
        self.expanded_labels.as_deref()
    }

    pub fn shape_mismatches(&self) -> &[ShapeMismatch] {
        &self.shape_mismatches
    }

    /// Label under bar `index` on the x axis.
    pub fn axis_label(&self, index: usize) -> SharedString {
        self.labels
            .as_ref()
            .and_then(|l| l.get(index).cloned())
            .unwrap_or_else(|| SharedString::new_static(""))
    }

    /// Title of the detail panel: the expanded label, then the axis label,
    /// then an empty string. An empty label is a resolved label.
    pub fn detail_label(&self, index: usize) -> SharedString {
        self.expanded_labels
            .as_ref()
            .and_then(|l| l.get(index).cloned())
            .or_else(|| self.labels.as_ref().and_then(|l| l.get(index).cloned()))
            .unwrap_or_else(|| SharedString::new_static(""))
    }

    pub fn format_value(&self, value: f64, category_index: usize, bar_index: usize) -> String {
        (self.value_formatter)(value, category_index, bar_index)
    }

    pub fn format_total(&self, total: f64, bar_index: usize) -> String {
        (self.total_formatter)(total, bar_index)
    }
}

impl fmt::Debug for ChartData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartData")
            .field("bars", &self.bars)
            .field("categories", &self.categories)
            .field("labels", &self.labels)
            .field("expanded_labels", &self.expanded_labels)
            .field("shape_mismatches", &self.shape_mismatches)
            .finish_non_exhaustive()
    }
}
