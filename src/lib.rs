//! gpui_stacked_bar: interactive stacked bar charts for GPUI

pub mod chart;
pub mod chart_view;
pub mod data_types;
pub mod error;
pub mod layout;
pub mod scales;
pub mod segments;
pub mod selection;
pub mod style;
pub mod theme;

pub use chart::{ChartBuilder, StackedBarChart};
pub use chart_view::{CloseDetail, StackedBarChartView, KEY_CONTEXT};
pub use data_types::{Category, CategoryId, ChartData, TotalFormatter, ValueFormatter};
pub use error::{ChartError, ShapeMismatch};
pub use layout::{compose, ChartFrame};
pub use selection::{SelectionMode, SelectionState};
pub use style::{AnimationConfig, AnimationEasing, ChartStyle};
pub use theme::ChartTheme;
