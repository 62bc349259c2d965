use gpui::{point, px, size, Bounds, Pixels};
use gpui_stacked_bar::layout::{column_width, compose, ElementKind, AVERAGE_LINE_CLEARANCE};
use gpui_stacked_bar::{Category, ChartStyle, SelectionMode, SelectionState, StackedBarChart};

fn plot(width: f32, height: f32) -> Bounds<Pixels> {
    Bounds::new(point(px(10.0), px(20.0)), size(px(width), px(height)))
}

fn chart(bars: Vec<Vec<f64>>, style: ChartStyle) -> StackedBarChart {
    let categories = vec![
        Category::new("A", gpui::red()),
        Category::new("B", gpui::blue()),
    ];
    let labels: Vec<String> = (0..bars.len()).map(|i| format!("L{i}")).collect();
    StackedBarChart::builder(bars, categories)
        .labels(labels)
        .style(style)
        .build()
        .unwrap()
}

fn expanded(index: usize, bar_count: usize) -> SelectionState {
    let mut state = SelectionState::new();
    let t = state.select(index, bar_count, true).unwrap();
    state.finish_transition(t.generation);
    state
}

#[test]
fn test_column_width() {
    assert_eq!(column_width(100.0, 10.0, 4), 17.5);
    assert_eq!(column_width(100.0, 10.0, 1), 100.0);
    assert_eq!(column_width(100.0, 10.0, 0), 0.0);
    assert_eq!(column_width(10.0, 10.0, 5), 0.0);
}

#[test]
fn test_aggregate_frame() {
    let c = chart(
        vec![vec![100.0, 50.0], vec![80.0, 30.0], vec![0.0, 0.0]],
        ChartStyle {
            spacing: 10.0,
            ..ChartStyle::default()
        },
    );
    let frame = compose(&c.data, &c.style, &SelectionState::new(), plot(320.0, 180.0));

    assert_eq!(frame.mode, SelectionMode::Aggregate);
    assert_eq!(frame.padded_max, 180.0);
    assert_eq!(frame.bar_width, px(100.0));
    assert_eq!(frame.bars.len(), 3);
    assert_eq!(
        frame.visible_elements(),
        vec![
            ElementKind::YAxis,
            ElementKind::Bars,
            ElementKind::XAxis,
            ElementKind::Legend
        ]
    );

    let xs: Vec<Pixels> = frame.bars.iter().map(|b| b.column.origin.x).collect();
    assert_eq!(xs, vec![px(10.0), px(120.0), px(230.0)]);

    // 150 of 180 fills 150 px of a 180 px plot
    let first = &frame.bars[0];
    assert_eq!(first.filled.size.height, px(150.0));
    assert_eq!(first.filled.origin.y, px(50.0));
    assert_eq!(first.rects.len(), 2);
    // First category sits on the baseline.
    assert_eq!(first.rects[0].bounds.origin.y + first.rects[0].bounds.size.height, px(200.0));
    assert_eq!(first.rects[0].bounds.size.height, px(100.0));
    assert_eq!(first.rects[1].bounds.size.height, px(50.0));

    // The empty bar has no painted rects.
    assert!(frame.bars[2].rects.is_empty());
    assert_eq!(frame.bars[2].segments[0].category_index, None);

    let slots = frame.x_axis.as_ref().unwrap();
    assert!(slots.iter().all(|s| s.visible));
    assert_eq!(slots[1].text.as_ref(), "L1");

    let ticks = frame.y_axis.as_ref().unwrap();
    assert_eq!(ticks[0].label.as_ref(), "0");
    assert_eq!(ticks[0].offset, px(180.0));
    assert_eq!(ticks[1].label.as_ref(), "180");
    assert_eq!(ticks[1].offset, px(0.0));

    assert_eq!(frame.legend.as_ref().unwrap().len(), 2);
    assert!(frame.detail.is_none());
}

#[test]
fn test_expanded_frame() {
    let c = chart(
        vec![vec![100.0, 50.0], vec![80.0, 30.0], vec![10.0, 10.0]],
        ChartStyle {
            spacing: 10.0,
            show_average_line: true,
            ..ChartStyle::default()
        },
    );
    let frame = compose(&c.data, &c.style, &expanded(1, 3), plot(320.0, 180.0));

    assert_eq!(frame.mode, SelectionMode::Expanded(1));
    assert_eq!(frame.bars.len(), 1);
    let bar = &frame.bars[0];
    assert_eq!(bar.index, 1);
    assert_eq!(bar.column.origin.x, px(10.0));
    assert_eq!(bar.column.size.width, px(100.0));

    let detail = frame.detail.as_ref().unwrap();
    assert_eq!(detail.bar_index, 1);
    assert_eq!(detail.label.as_ref(), "L1");
    assert_eq!(detail.bounds.origin.x, px(120.0));
    assert_eq!(detail.bounds.size.width, px(210.0));
    assert_eq!(detail.rows.len(), 2);
    assert_eq!(detail.rows[0].name.as_ref(), "A");
    assert_eq!(detail.rows[0].text.as_ref(), "80");
    assert_eq!(detail.total.as_ref().map(|t| t.as_ref()), Some("110"));

    // All slots stay in place, only the selected one is visible.
    let slots = frame.x_axis.as_ref().unwrap();
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[2].x, px(230.0));
    let visible: Vec<bool> = slots.iter().map(|s| s.visible).collect();
    assert_eq!(visible, vec![false, true, false]);

    assert!(frame.average_line.is_none());
    assert_eq!(frame.bar_at(point(px(50.0), px(100.0))), None);
    assert!(frame.visible_elements().contains(&ElementKind::DetailPanel));
}

#[test]
fn test_detail_total_uses_total_formatter() {
    let c = StackedBarChart::builder(
        vec![vec![100.0, 23.0], vec![1.0, 2.0]],
        vec![
            Category::new("A", gpui::red()),
            Category::new("B", gpui::blue()),
        ],
    )
    .value_formatter(|value, _, _| format!("${value:.0}"))
    .total_formatter(|total, _| format!("${total:.0}"))
    .build()
    .unwrap();
    let frame = compose(&c.data, &c.style, &expanded(0, 2), plot(200.0, 100.0));

    let detail = frame.detail.as_ref().unwrap();
    assert_eq!(detail.rows[0].text.as_ref(), "$100");
    assert_eq!(detail.total.as_ref().map(|t| t.as_ref()), Some("$123"));
}

#[test]
fn test_average_line_eligibility() {
    let style = ChartStyle {
        show_average_line: true,
        ..ChartStyle::default()
    };

    // average 75, ceiling 120: offset 100 * (1 - 75/120) = 37.5
    let c = chart(vec![vec![50.0, 50.0], vec![25.0, 25.0]], style.clone());
    let frame = compose(&c.data, &c.style, &SelectionState::new(), plot(200.0, 100.0));
    let line = frame.average_line.as_ref().unwrap();
    assert_eq!(line.value, 75.0);
    assert_eq!(line.offset, px(37.5));

    // average 0 sits on the baseline
    let c = chart(vec![vec![0.0, 0.0]], style.clone());
    let frame = compose(&c.data, &c.style, &SelectionState::new(), plot(200.0, 100.0));
    assert!(frame.average_line.is_none());

    // average 1, ceiling 10: offset 90, exactly at the clearance limit
    let c = chart(vec![vec![1.0, 0.0]], style.clone());
    let frame = compose(&c.data, &c.style, &SelectionState::new(), plot(200.0, 100.0));
    assert_eq!(100.0 - AVERAGE_LINE_CLEARANCE, 90.0);
    assert!(frame.average_line.is_none());

    let c = chart(vec![vec![50.0, 50.0], vec![25.0, 25.0]], ChartStyle::default());
    let frame = compose(&c.data, &c.style, &SelectionState::new(), plot(200.0, 100.0));
    assert!(frame.average_line.is_none());
}

#[test]
fn test_hit_testing() {
    let c = chart(
        vec![vec![1.0, 1.0], vec![2.0, 2.0]],
        ChartStyle {
            spacing: 20.0,
            ..ChartStyle::default()
        },
    );
    let frame = compose(&c.data, &c.style, &SelectionState::new(), plot(220.0, 100.0));

    assert_eq!(frame.bar_at(point(px(15.0), px(110.0))), Some(0));
    assert_eq!(frame.bar_at(point(px(200.0), px(30.0))), Some(1));
    // The gap between columns
    assert_eq!(frame.bar_at(point(px(120.0), px(50.0))), None);
    // Outside of the plot
    assert_eq!(frame.bar_at(point(px(15.0), px(5.0))), None);
}

#[test]
fn test_x_axis_slots_follow_bar_columns() {
    let style = ChartStyle {
        spacing: 30.0,
        ..ChartStyle::default()
    };
    // Wide enough for real columns, then narrower than the total spacing.
    for width in [200.0, 50.0] {
        let c = chart(vec![vec![1.0, 1.0]; 3], style.clone());
        let frame = compose(&c.data, &c.style, &SelectionState::new(), plot(width, 100.0));
        let slots = frame.x_axis.as_ref().unwrap();
        for (slot, bar) in slots.iter().zip(&frame.bars) {
            assert_eq!(slot.x, bar.column.origin.x);
            assert_eq!(slot.width, bar.column.size.width);
        }
    }
    assert_eq!(column_width(50.0, 30.0, 3), 0.0);
}

#[test]
fn test_style_toggles() {
    let style = ChartStyle {
        show_y_axis: false,
        show_x_axis: false,
        show_legend: false,
        ..ChartStyle::default()
    };
    let c = chart(vec![vec![1.0, 2.0]], style);
    let frame = compose(&c.data, &c.style, &SelectionState::new(), plot(100.0, 100.0));
    assert_eq!(frame.visible_elements(), vec![ElementKind::Bars]);
}

#[test]
fn test_simple_chart_has_no_legend_or_total() {
    let c = StackedBarChart::simple(vec![4.0, 6.0])
        .labels(["a", "b"])
        .build()
        .unwrap();
    let frame = compose(&c.data, &c.style, &expanded(0, 2), plot(100.0, 100.0));
    assert!(frame.legend.is_none());
    let detail = frame.detail.as_ref().unwrap();
    assert_eq!(detail.rows.len(), 1);
    assert!(detail.total.is_none());
}

#[test]
fn test_empty_data_renders_nothing() {
    let c = chart(vec![], ChartStyle::default());
    let frame = compose(&c.data, &c.style, &SelectionState::new(), plot(100.0, 100.0));
    assert!(frame.is_empty());
    assert!(frame.bars.is_empty());
    assert_eq!(frame.padded_max, 10.0);
}

#[test]
fn test_stale_selection_renders_aggregate() {
    let c = chart(vec![vec![1.0, 1.0]], ChartStyle::default());
    let frame = compose(&c.data, &c.style, &expanded(3, 5), plot(100.0, 100.0));
    assert_eq!(frame.mode, SelectionMode::Aggregate);
    assert!(frame.detail.is_none());
}
