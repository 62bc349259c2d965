use super::StackedBarChartView;
use gpui::*;

actions!(stacked_bar_chart, [CloseDetail]);

impl StackedBarChartView {
    pub(super) fn handle_close_detail(
        &mut self,
        _: &CloseDetail,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.close_detail(cx);
    }
}
