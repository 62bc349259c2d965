use gpui::{Hsla, SharedString};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CATEGORY_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(u64);

impl CategoryId {
    fn next() -> Self {
        Self(NEXT_CATEGORY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One data series of a stacked bar chart.
///
/// Identity is the generated id: two categories built with the same name and
/// color are still distinct.
#[derive(Clone, Debug)]
pub struct Category {
    id: CategoryId,
    name: SharedString,
    color: Hsla,
}

impl Category {
    pub fn new(name: impl Into<SharedString>, color: impl Into<Hsla>) -> Self {
        Self {
            id: CategoryId::next(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Category with an empty name, used by single-series charts.
    pub fn unnamed(color: impl Into<Hsla>) -> Self {
        Self::new(SharedString::new_static(""), color)
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &SharedString {
        &self.name
    }

    pub fn color(&self) -> Hsla {
        self.color
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
