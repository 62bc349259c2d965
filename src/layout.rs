//! Frame composition.
//!
//! [`compose`] turns chart data, style and selection into a [`ChartFrame`]: the
//! geometry and text of everything the view draws for one plot area. It is a
//! pure function and is re-run on every render and paint.

use gpui::{point, px, size, Bounds, Hsla, Pixels, Point, SharedString};

use crate::data_types::ChartData;
use crate::scales::{average, bar_total, format_value, max_value, padded_max, ChartScale};
use crate::segments::{compose_segments, Segment};
use crate::selection::{SelectionMode, SelectionState};
use crate::style::ChartStyle;

/// Minimum distance in pixels between the average line and the top or bottom
/// edge of the plot, keeping it clear of the 0 and max axis labels.
pub const AVERAGE_LINE_CLEARANCE: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    YAxis,
    Bars,
    AverageLine,
    DetailPanel,
    XAxis,
    Legend,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SegmentRect {
    pub category_index: Option<usize>,
    pub color: Hsla,
    pub bounds: Bounds<Pixels>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub index: usize,
    pub total: f64,
    /// Full-height column the bar stands in; also its hit area.
    pub column: Bounds<Pixels>,
    /// Part of the column covered by the bar.
    pub filled: Bounds<Pixels>,
    pub segments: Vec<Segment>,
    pub rects: Vec<SegmentRect>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub label: SharedString,
    /// Distance from the top of the plot.
    pub offset: Pixels,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelSlot {
    pub index: usize,
    pub text: SharedString,
    pub x: Pixels,
    pub width: Pixels,
    /// Hidden slots still take up their column.
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub category_index: usize,
    pub name: SharedString,
    pub color: Hsla,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AverageLine {
    pub value: f64,
    pub label: SharedString,
    /// Distance from the top of the plot.
    pub offset: Pixels,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailRow {
    pub category_index: usize,
    pub name: SharedString,
    pub color: Hsla,
    pub value: f64,
    pub text: SharedString,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailPanel {
    pub bar_index: usize,
    pub label: SharedString,
    pub bounds: Bounds<Pixels>,
    pub rows: Vec<DetailRow>,
    /// Formatted with the chart's total formatter. Only set when the bar has
    /// more than one category.
    pub total: Option<SharedString>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
    pub mode: SelectionMode,
    pub plot: Bounds<Pixels>,
    pub padded_max: f64,
    pub average: f64,
    pub bar_width: Pixels,
    pub bars: Vec<BarGeometry>,
    pub y_axis: Option<Vec<AxisTick>>,
    pub x_axis: Option<Vec<LabelSlot>>,
    pub legend: Option<Vec<LegendEntry>>,
    pub average_line: Option<AverageLine>,
    pub detail: Option<DetailPanel>,
}

impl ChartFrame {
    fn empty(plot: Bounds<Pixels>) -> Self {
        Self {
            mode: SelectionMode::Aggregate,
            plot,
            padded_max: padded_max(0.0),
            average: 0.0,
            bar_width: px(0.0),
            bars: Vec::new(),
            y_axis: None,
            x_axis: None,
            legend: None,
            average_line: None,
            detail: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.visible_elements().is_empty()
    }

    /// Element kinds present in this frame, in drawing order.
    pub fn visible_elements(&self) -> Vec<ElementKind> {
        let mut kinds = Vec::new();
        if self.y_axis.is_some() {
            kinds.push(ElementKind::YAxis);
        }
        if !self.bars.is_empty() {
            kinds.push(ElementKind::Bars);
        }
        if self.average_line.is_some() {
            kinds.push(ElementKind::AverageLine);
        }
        if self.detail.is_some() {
            kinds.push(ElementKind::DetailPanel);
        }
        if self.x_axis.is_some() {
            kinds.push(ElementKind::XAxis);
        }
        if self.legend.is_some() {
            kinds.push(ElementKind::Legend);
        }
        kinds
    }

    /// Bar whose column contains `position`. Only bars of the aggregate row
    /// are selectable.
    pub fn bar_at(&self, position: Point<Pixels>) -> Option<usize> {
        if self.mode != SelectionMode::Aggregate {
            return None;
        }
        self.bars
            .iter()
            .find(|bar| bar.column.contains(&position))
            .map(|bar| bar.index)
    }
}

pub fn compose(
    data: &ChartData,
    style: &ChartStyle,
    selection: &SelectionState,
    plot: Bounds<Pixels>,
) -> ChartFrame {
    if data.is_empty() {
        return ChartFrame::empty(plot);
    }

    let bars = data.bars();
    let bar_count = bars.len();
    let ceiling = padded_max(max_value(bars));
    let mean = average(bars);

    let origin_x = f32::from(plot.origin.x);
    let origin_y = f32::from(plot.origin.y);
    let width = f32::from(plot.size.width);
    let height = f32::from(plot.size.height);
    let spacing = style.spacing;
    let bar_width = column_width(width, spacing, bar_count);
    let column_x = |idx: usize| origin_x + idx as f32 * (bar_width + spacing);

    let mode = match selection.mode() {
        SelectionMode::Expanded(idx) if idx < bar_count => SelectionMode::Expanded(idx),
        _ => SelectionMode::Aggregate,
    };

    let scale = ChartScale::vertical(ceiling, height);
    let bar_geometry = |index: usize, x: f32| -> BarGeometry {
        let values = &bars[index];
        let total = bar_total(values);
        let top = scale.map(total.max(0.0)).clamp(0.0, height);
        let bar_height = height - top;
        let column = Bounds::new(
            point(px(x), px(origin_y)),
            size(px(bar_width), px(height)),
        );
        let filled = Bounds::new(
            point(px(x), px(origin_y + top)),
            size(px(bar_width), px(bar_height)),
        );
        let segments = compose_segments(values, data.categories());
        let bottom = origin_y + height;
        let rects = segments
            .iter()
            .filter(|s| s.category_index.is_some())
            .map(|s| {
                let seg_top = bottom - bar_height * s.end as f32;
                let seg_bottom = bottom - bar_height * s.start as f32;
                SegmentRect {
                    category_index: s.category_index,
                    color: s.color,
                    bounds: Bounds::new(
                        point(px(x), px(seg_top)),
                        size(px(bar_width), px(seg_bottom - seg_top)),
                    ),
                }
            })
            .collect();
        BarGeometry {
            index,
            total,
            column,
            filled,
            segments,
            rects,
        }
    };

    let (bar_row, detail) = match mode {
        SelectionMode::Aggregate => (
            (0..bar_count)
                .map(|idx| bar_geometry(idx, column_x(idx)))
                .collect(),
            None,
        ),
        SelectionMode::Expanded(idx) => {
            let detail_x = column_x(1).min(origin_x + width);
            let detail_bounds = Bounds::new(
                point(px(detail_x), px(origin_y)),
                size(px((origin_x + width - detail_x).max(0.0)), px(height)),
            );
            (
                vec![bar_geometry(idx, column_x(0))],
                Some(detail_panel(data, idx, detail_bounds)),
            )
        }
    };

    let y_axis = style.show_y_axis.then(|| {
        [0.0, ceiling]
            .into_iter()
            .map(|value| AxisTick {
                value,
                label: format_value(value).into(),
                offset: px(scale.map(value)),
            })
            .collect()
    });

    let selected = match mode {
        SelectionMode::Expanded(idx) => Some(idx),
        SelectionMode::Aggregate => None,
    };
    let x_axis = style.show_x_axis.then(|| {
        (0..bar_count)
            .map(|idx| LabelSlot {
                index: idx,
                text: data.axis_label(idx),
                x: px(column_x(idx)),
                width: px(bar_width),
                visible: selected.map_or(true, |s| s == idx),
            })
            .collect()
    });

    let legend = if style.show_legend {
        let entries: Vec<LegendEntry> = data
            .categories()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.has_name())
            .map(|(idx, c)| LegendEntry {
                category_index: idx,
                name: c.name().clone(),
                color: c.color(),
            })
            .collect();
        (!entries.is_empty()).then_some(entries)
    } else {
        None
    };

    let average_line = if style.show_average_line && mode == SelectionMode::Aggregate {
        let offset = scale.map(mean);
        (offset > AVERAGE_LINE_CLEARANCE && offset < height - AVERAGE_LINE_CLEARANCE).then(|| {
            AverageLine {
                value: mean,
                label: format_value(mean).into(),
                offset: px(offset),
            }
        })
    } else {
        None
    };

    ChartFrame {
        mode,
        plot,
        padded_max: ceiling,
        average: mean,
        bar_width: px(bar_width),
        bars: bar_row,
        y_axis,
        x_axis,
        legend,
        average_line,
        detail,
    }
}

/// Width of one bar column: `(width - spacing * (n - 1)) / n`.
pub fn column_width(width: f32, spacing: f32, bar_count: usize) -> f32 {
    if bar_count == 0 {
        return 0.0;
    }
    let gaps = spacing * (bar_count - 1) as f32;
    ((width - gaps) / bar_count as f32).max(0.0)
}

fn detail_panel(data: &ChartData, bar_index: usize, bounds: Bounds<Pixels>) -> DetailPanel {
    let values = data.bar(bar_index).unwrap_or_default();
    let rows = data
        .categories()
        .iter()
        .zip(values)
        .enumerate()
        .map(|(idx, (category, &value))| DetailRow {
            category_index: idx,
            name: category.name().clone(),
            color: category.color(),
            value,
            text: data.format_value(value, idx, bar_index).into(),
        })
        .collect();
    let total = (data.categories().len() > 1)
        .then(|| data.format_total(bar_total(values), bar_index).into());
    DetailPanel {
        bar_index,
        label: data.detail_label(bar_index),
        bounds,
        rows,
        total,
    }
}
