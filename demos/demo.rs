use eyre::WrapErr;
use gpui::prelude::*;
use gpui::*;
use gpui_stacked_bar::{Category, ChartStyle, CloseDetail, StackedBarChart, StackedBarChartView};
use rand::Rng;
use tracing_subscriber::EnvFilter;

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

struct DemoApp {
    expenses: Entity<StackedBarChartView>,
    visits: Entity<StackedBarChartView>,
}

impl DemoApp {
    fn new(expenses: StackedBarChart, visits: StackedBarChart, cx: &mut Context<Self>) -> Self {
        Self {
            expenses: cx.new(|cx| StackedBarChartView::new(expenses, cx)),
            visits: cx.new(|cx| StackedBarChartView::new(visits, cx)),
        }
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .bg(gpui::black())
            .p_4()
            .flex()
            .flex_col()
            .gap_6()
            .child(self.expenses.clone())
            .child(self.visits.clone())
    }
}

fn expenses_chart(rng: &mut impl Rng) -> eyre::Result<StackedBarChart> {
    let categories = vec![
        Category::new("Rent", gpui::blue()),
        Category::new("Food", gpui::green()),
        Category::new("Travel", gpui::yellow()),
    ];
    let bars = MONTHS
        .iter()
        .map(|_| {
            categories
                .iter()
                .map(|_| rng.random_range(0.0..400.0_f64).round())
                .collect()
        })
        .collect();

    let style = ChartStyle {
        show_average_line: true,
        ..ChartStyle::default()
    };

    StackedBarChart::builder(bars, categories)
        .labels(MONTHS)
        .expanded_labels(MONTHS.iter().map(|m| format!("{m} 2025")))
        .value_formatter(|value, _, _| format!("${value:.0}"))
        .total_formatter(|total, _| format!("Total ${total:.0}"))
        .style(style)
        .build()
        .wrap_err("failed to build expenses chart")
}

fn visits_chart(rng: &mut impl Rng) -> eyre::Result<StackedBarChart> {
    let style = ChartStyle::from_json(r##"{ "spacing": 4.0, "chart_height": 140.0 }"##)
        .wrap_err("failed to parse visits chart style")?;
    let values = MONTHS
        .iter()
        .map(|_| rng.random_range(0..120) as f64)
        .collect();

    StackedBarChart::simple(values)
        .labels(MONTHS)
        .color(gpui::red())
        .style(style)
        .build()
        .wrap_err("failed to build visits chart")
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = rand::rng();
    let expenses = expenses_chart(&mut rng)?;
    let visits = visits_chart(&mut rng)?;

    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([KeyBinding::new(
            "escape",
            CloseDetail,
            Some(gpui_stacked_bar::KEY_CONTEXT),
        )]);

        if let Err(err) = cx.open_window(WindowOptions::default(), |_window, cx| {
            cx.new(|cx| DemoApp::new(expenses, visits, cx))
        }) {
            tracing::error!(?err, "failed to open window");
            cx.quit();
        }
    });
    Ok(())
}
