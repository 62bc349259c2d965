use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("{field} has {actual} entries but the chart has {expected} bars")]
    LabelCount {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid style value for {field}: {value}")]
    InvalidStyle { field: &'static str, value: f32 },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Style JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;

/// A bar whose value count differs from the category count.
///
/// Not fatal: extra values are ignored and missing ones count as zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeMismatch {
    pub bar: usize,
    pub expected: usize,
    pub actual: usize,
}
