//! Visual options for a stacked bar chart.

use gpui::{Animation, SharedString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ChartError, Result};
use crate::theme::ChartTheme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationEasing {
    Linear,
    #[default]
    EaseInOut,
    Quadratic,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// 0 disables animation; transitions then complete immediately.
    pub duration_ms: u64,
    pub easing: AnimationEasing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 300,
            easing: AnimationEasing::EaseInOut,
        }
    }
}

impl AnimationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn is_enabled(&self) -> bool {
        self.duration_ms > 0
    }

    pub fn animation(&self) -> Animation {
        let animation = Animation::new(self.duration());
        match self.easing {
            AnimationEasing::Linear => animation,
            AnimationEasing::EaseInOut => animation.with_easing(gpui::ease_in_out),
            AnimationEasing::Quadratic => animation.with_easing(gpui::quadratic),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Horizontal gap between bars.
    pub spacing: f32,
    pub chart_height: f32,
    pub y_axis_width: f32,
    pub x_axis_height: f32,
    pub legend_swatch_size: f32,
    pub detail_panel_padding: f32,

    pub font_family: Option<String>,
    pub axis_font_size: f32,
    pub legend_font_size: f32,
    pub detail_title_font_size: f32,
    pub detail_value_font_size: f32,

    pub show_y_axis: bool,
    pub show_x_axis: bool,
    pub show_legend: bool,
    pub show_average_line: bool,
    pub is_interactive: bool,

    pub theme: ChartTheme,
    pub animation: AnimationConfig,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            spacing: 8.0,
            chart_height: 220.0,
            y_axis_width: 40.0,
            x_axis_height: 20.0,
            legend_swatch_size: 10.0,
            detail_panel_padding: 12.0,
            font_family: None,
            axis_font_size: 11.0,
            legend_font_size: 11.0,
            detail_title_font_size: 14.0,
            detail_value_font_size: 12.0,
            show_y_axis: true,
            show_x_axis: true,
            show_legend: true,
            show_average_line: false,
            is_interactive: true,
            theme: ChartTheme::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl ChartStyle {
    pub fn from_json(json: &str) -> Result<Self> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects negative or non-finite dimensions and font sizes.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("spacing", self.spacing),
            ("chart_height", self.chart_height),
            ("y_axis_width", self.y_axis_width),
            ("x_axis_height", self.x_axis_height),
            ("legend_swatch_size", self.legend_swatch_size),
            ("detail_panel_padding", self.detail_panel_padding),
            ("axis_font_size", self.axis_font_size),
            ("legend_font_size", self.legend_font_size),
            ("detail_title_font_size", self.detail_title_font_size),
            ("detail_value_font_size", self.detail_value_font_size),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidStyle { field, value });
            }
        }
        Ok(())
    }

    pub fn font_family(&self) -> Option<SharedString> {
        self.font_family.clone().map(SharedString::from)
    }
}
