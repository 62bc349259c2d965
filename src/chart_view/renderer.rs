use super::{StackedBarChartView, KEY_CONTEXT};
use crate::layout::{compose, AxisTick, ChartFrame, DetailPanel, LabelSlot, LegendEntry};
use crate::style::ChartStyle;
use crate::theme::ChartTheme;
use gpui::prelude::*;
use gpui::*;

// Labels are vertically centered on their tick.
const LABEL_HALF_HEIGHT: f32 = 8.0;

pub(super) fn render_chart(
    view: &StackedBarChartView,
    frame: &ChartFrame,
    cx: &mut Context<StackedBarChartView>,
) -> Div {
    let style = &view.chart.style;
    let theme = &style.theme;

    let root = div()
        .key_context(KEY_CONTEXT)
        .track_focus(&view.focus_handle)
        .on_action(cx.listener(StackedBarChartView::handle_close_detail))
        .flex()
        .flex_col()
        .w_full()
        .bg(theme.background)
        .when_some(style.font_family(), |d, family| d.font_family(family));

    if frame.is_empty() {
        return root;
    }

    let y_axis_width = if frame.y_axis.is_some() {
        style.y_axis_width
    } else {
        0.0
    };

    root.child(
        div()
            .flex()
            .flex_row()
            .w_full()
            .h(px(style.chart_height))
            .when_some(frame.y_axis.as_ref(), |d, ticks| {
                d.child(render_y_axis(ticks, frame.padded_max, style))
            })
            .child(render_plot_area(view, frame, cx)),
    )
    .when_some(frame.x_axis.as_ref(), |d, slots| {
        d.child(render_x_axis(slots, frame.plot, y_axis_width, style))
    })
    .when_some(frame.legend.as_ref(), |d, entries| {
        d.child(render_legend(entries, y_axis_width, style))
    })
}

fn render_plot_area(
    view: &StackedBarChartView,
    frame: &ChartFrame,
    cx: &mut Context<StackedBarChartView>,
) -> impl IntoElement {
    let style = &view.chart.style;
    let accepts_input = view.selection.accepts_input(style.is_interactive);

    let bounds_rc = view.plot_bounds.clone();
    let chart = view.chart.clone();
    let selection = view.selection.clone();

    div()
        .relative()
        .flex_1()
        .h_full()
        .when(accepts_input, |d| d.cursor_pointer())
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(StackedBarChartView::handle_plot_mouse_down),
        )
        .child(
            canvas(
                |_, _, _| {},
                move |bounds, (), window, _cx| {
                    let changed = *bounds_rc.borrow() != bounds;
                    *bounds_rc.borrow_mut() = bounds;
                    let frame = compose(&chart.data, &chart.style, &selection, bounds);
                    paint_frame(window, &frame, &chart.style);
                    if changed {
                        // Text overlays were laid out with the previous bounds.
                        window.request_animation_frame();
                    }
                },
            )
            .absolute()
            .size_full(),
        )
        .when_some(frame.average_line.as_ref(), |d, line| {
            let fraction = 1.0 - (line.value / frame.padded_max) as f32;
            d.child(
                div()
                    .absolute()
                    .right(px(2.0))
                    .top(DefiniteLength::Fraction(fraction))
                    .mt(px(-2.0 * LABEL_HALF_HEIGHT))
                    .text_size(px(style.axis_font_size))
                    .text_color(style.theme.average_line)
                    .child(line.label.clone()),
            )
        })
        .when_some(frame.detail.as_ref(), |d, panel| {
            d.child(render_detail_panel(view, panel, frame.plot, cx))
        })
}

/// Paints bar segments, the baseline and the average line.
fn paint_frame(window: &mut Window, frame: &ChartFrame, style: &ChartStyle) {
    let theme = &style.theme;
    let plot = frame.plot;

    for bar in &frame.bars {
        for rect in &bar.rects {
            if rect.bounds.size.height > px(0.0) {
                window.paint_quad(fill(rect.bounds, rect.color));
            }
        }
    }

    if style.show_x_axis {
        let baseline = Bounds::new(
            point(plot.origin.x, plot.origin.y + plot.size.height - px(1.0)),
            size(plot.size.width, px(1.0)),
        );
        window.paint_quad(fill(baseline, theme.axis_line));
    }

    if let Some(line) = &frame.average_line {
        let rule = Bounds::new(
            point(plot.origin.x, plot.origin.y + line.offset),
            size(plot.size.width, px(1.0)),
        );
        window.paint_quad(fill(rule, theme.average_line));
    }
}

fn render_y_axis(ticks: &[AxisTick], padded_max: f64, style: &ChartStyle) -> impl IntoElement {
    let theme = &style.theme;
    div()
        .relative()
        .h_full()
        .w(px(style.y_axis_width))
        .flex_none()
        .children(ticks.iter().map(|tick| {
            let fraction = 1.0 - (tick.value / padded_max) as f32;
            div()
                .absolute()
                .left(px(0.0))
                .top(DefiniteLength::Fraction(fraction))
                .mt(px(-LABEL_HALF_HEIGHT))
                .h(px(2.0 * LABEL_HALF_HEIGHT))
                .w(px(style.y_axis_width - 4.0).max(px(0.0)))
                .flex()
                .items_center()
                .justify_end()
                .text_size(px(style.axis_font_size))
                .text_color(theme.axis_label)
                .child(tick.label.clone())
        }))
}

/// Slots sit at the x offsets of their bar columns, relative to the plot.
fn render_x_axis(
    slots: &[LabelSlot],
    plot: Bounds<Pixels>,
    inset: f32,
    style: &ChartStyle,
) -> impl IntoElement {
    let theme = &style.theme;
    div()
        .relative()
        .w_full()
        .h(px(style.x_axis_height))
        .children(slots.iter().map(|slot| {
            div()
                .absolute()
                .top(px(0.0))
                .left(px(inset) + slot.x - plot.origin.x)
                .w(slot.width)
                .h_full()
                .overflow_hidden()
                .flex()
                .items_center()
                .justify_center()
                .text_size(px(style.axis_font_size))
                .text_color(theme.axis_label)
                .when(!slot.visible, |d| d.opacity(0.0))
                .child(slot.text.clone())
        }))
}

fn render_legend(entries: &[LegendEntry], inset: f32, style: &ChartStyle) -> impl IntoElement {
    let theme = &style.theme;
    let swatch = px(style.legend_swatch_size);
    div()
        .flex()
        .flex_row()
        .flex_wrap()
        .w_full()
        .pl(px(inset))
        .pt(px(4.0))
        .gap_3()
        .children(entries.iter().map(|entry| {
            div()
                .flex()
                .items_center()
                .gap_1()
                .child(div().w(swatch).h(swatch).rounded_sm().bg(entry.color))
                .child(
                    div()
                        .text_size(px(style.legend_font_size))
                        .text_color(theme.legend_text)
                        .child(entry.name.clone()),
                )
        }))
}

fn render_detail_panel(
    view: &StackedBarChartView,
    panel: &DetailPanel,
    plot: Bounds<Pixels>,
    cx: &mut Context<StackedBarChartView>,
) -> AnyElement {
    let style = &view.chart.style;
    let theme = &style.theme;
    let can_close = !view.selection.is_animating();

    let content = div()
        .absolute()
        .left(panel.bounds.origin.x - plot.origin.x)
        .top(px(0.0))
        .w(panel.bounds.size.width)
        .h_full()
        .p(px(style.detail_panel_padding))
        .flex()
        .flex_col()
        .gap_1()
        .rounded_md()
        .bg(theme.detail_background)
        .child(
            div()
                .flex()
                .flex_row()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .text_size(px(style.detail_title_font_size))
                        .text_color(theme.detail_text)
                        .child(panel.label.clone()),
                )
                .child(render_close_button(can_close, theme, cx)),
        )
        .children(panel.rows.iter().map(|row| {
            div()
                .flex()
                .flex_row()
                .items_center()
                .gap_2()
                .text_size(px(style.detail_value_font_size))
                .child(
                    div()
                        .w(px(style.legend_swatch_size))
                        .h(px(style.legend_swatch_size))
                        .rounded_sm()
                        .bg(row.color),
                )
                .child(
                    div()
                        .flex_1()
                        .text_color(theme.detail_secondary_text)
                        .child(row.name.clone()),
                )
                .child(div().text_color(theme.detail_text).child(row.text.clone()))
        }))
        .when_some(panel.total.clone(), |d, total| {
            d.child(
                div()
                    .flex()
                    .flex_row()
                    .justify_end()
                    .border_t_1()
                    .border_color(theme.axis_line)
                    .pt_1()
                    .text_size(px(style.detail_value_font_size))
                    .text_color(theme.detail_text)
                    .child(total),
            )
        });

    let animation = &style.animation;
    if animation.is_enabled() {
        content
            .with_animation(
                ("detail-panel", view.selection.generation() as usize),
                animation.animation(),
                |el, delta| el.opacity(delta),
            )
            .into_any_element()
    } else {
        content.into_any_element()
    }
}

fn render_close_button(
    enabled: bool,
    theme: &ChartTheme,
    cx: &mut Context<StackedBarChartView>,
) -> impl IntoElement {
    div()
        .w(px(20.0))
        .h(px(20.0))
        .flex()
        .items_center()
        .justify_center()
        .rounded_sm()
        .text_size(px(12.0))
        .when(enabled, |d| {
            d.text_color(theme.detail_text)
                .hover(|s| s.bg(theme.detail_text.opacity(0.1)))
                .cursor_pointer()
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|view, _, _, cx| {
                        cx.stop_propagation();
                        view.close_detail(cx);
                    }),
                )
        })
        .when(!enabled, |d| d.text_color(theme.detail_text.opacity(0.3)))
        .child("✕")
}
