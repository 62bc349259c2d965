pub mod actions;
pub mod renderer;

use crate::chart::StackedBarChart;
use crate::layout::compose;
use crate::selection::{SelectionState, Transition};
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

pub use actions::CloseDetail;

/// Key context of the chart view, for binding [`CloseDetail`].
pub const KEY_CONTEXT: &str = "StackedBarChart";

pub struct StackedBarChartView {
    chart: StackedBarChart,
    selection: SelectionState,

    // Plot area bounds from the last paint, used for hit-testing and for
    // placing the detail panel.
    plot_bounds: Rc<RefCell<Bounds<Pixels>>>,
    transition_task: Option<Task<()>>,

    focus_handle: FocusHandle,
}

impl Focusable for StackedBarChartView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl StackedBarChartView {
    pub fn new(chart: StackedBarChart, cx: &mut Context<Self>) -> Self {
        info!(
            bars = chart.data.bar_count(),
            categories = chart.data.categories().len(),
            "StackedBarChartView created"
        );
        Self {
            chart,
            selection: SelectionState::new(),
            plot_bounds: Rc::new(RefCell::new(Bounds::default())),
            transition_task: None,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn chart(&self) -> &StackedBarChart {
        &self.chart
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn plot_bounds(&self) -> Bounds<Pixels> {
        *self.plot_bounds.borrow()
    }

    /// Replaces the chart, dropping the selection if its bar is gone.
    pub fn set_chart(&mut self, chart: StackedBarChart, cx: &mut Context<Self>) {
        self.chart = chart;
        self.selection.reconcile(self.chart.data.bar_count());
        if !self.selection.is_animating() {
            self.transition_task = None;
        }
        cx.notify();
    }

    /// Expands bar `index`. Returns false when the request was ignored.
    pub fn select_bar(&mut self, index: usize, cx: &mut Context<Self>) -> bool {
        let transition = self.selection.select(
            index,
            self.chart.data.bar_count(),
            self.chart.style.is_interactive,
        );
        match transition {
            Some(t) => {
                self.start_transition(t, cx);
                true
            }
            None => false,
        }
    }

    /// Returns to the aggregate row. Returns false when the request was ignored.
    pub fn close_detail(&mut self, cx: &mut Context<Self>) -> bool {
        match self.selection.close() {
            Some(t) => {
                self.start_transition(t, cx);
                true
            }
            None => false,
        }
    }

    fn start_transition(&mut self, transition: Transition, cx: &mut Context<Self>) {
        let animation = &self.chart.style.animation;
        let generation = transition.generation;
        if !animation.is_enabled() {
            self.selection.finish_transition(generation);
            cx.notify();
            return;
        }

        let duration = animation.duration();
        self.transition_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(duration).await;
            this.update(cx, |view, cx| view.finish_transition(generation, cx))
                .ok();
        }));
        cx.notify();
    }

    fn finish_transition(&mut self, generation: u64, cx: &mut Context<Self>) {
        if self.selection.finish_transition(generation) {
            self.transition_task = None;
            cx.notify();
        }
    }

    fn handle_plot_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        // Focus puts KEY_CONTEXT on the dispatch path for CloseDetail bindings.
        window.focus(&self.focus_handle);
        if !self.selection.accepts_input(self.chart.style.is_interactive) {
            debug!("click ignored while a transition runs or the chart is static");
            return;
        }
        let frame = compose(
            &self.chart.data,
            &self.chart.style,
            &self.selection,
            self.plot_bounds(),
        );
        match frame.bar_at(event.position) {
            Some(index) => {
                self.select_bar(index, cx);
            }
            None => debug!(position = ?event.position, "click outside of any bar"),
        }
    }
}

impl Render for StackedBarChartView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let frame = compose(
            &self.chart.data,
            &self.chart.style,
            &self.selection,
            self.plot_bounds(),
        );
        renderer::render_chart(self, &frame, cx)
    }
}
