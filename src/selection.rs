//! Which bar, if any, is expanded into the detail panel.
//!
//! The state is owned by one chart view and handed to [`crate::layout::compose`]
//! explicitly. A transition flips `animating` on synchronously; the view clears
//! it once the animation duration has elapsed. Requests made while a
//! transition is running are dropped.

use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionMode {
    #[default]
    Aggregate,
    Expanded(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: SelectionMode,
    pub to: SelectionMode,
    pub generation: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<usize>,
    animating: bool,
    generation: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn mode(&self) -> SelectionMode {
        match self.selected {
            Some(idx) => SelectionMode::Expanded(idx),
            None => SelectionMode::Aggregate,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Identifies the most recent transition.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether bars should react to clicks right now.
    pub fn accepts_input(&self, interactive: bool) -> bool {
        interactive && !self.animating && self.selected.is_none()
    }

    pub fn select(
        &mut self,
        index: usize,
        bar_count: usize,
        interactive: bool,
    ) -> Option<Transition> {
        if !self.accepts_input(interactive) {
            debug!(index, animating = self.animating, "selection ignored");
            return None;
        }
        if index >= bar_count {
            warn!(index, bar_count, "selection outside of the bar range");
            return None;
        }
        self.selected = Some(index);
        Some(self.begin_transition(SelectionMode::Aggregate))
    }

    pub fn close(&mut self) -> Option<Transition> {
        if self.animating {
            debug!("close ignored while animating");
            return None;
        }
        let from = self.mode();
        self.selected.take()?;
        Some(self.begin_transition(from))
    }

    /// Ends the transition identified by `generation`. Completions belonging
    /// to an older transition are ignored.
    pub fn finish_transition(&mut self, generation: u64) -> bool {
        if !self.animating || generation != self.generation {
            return false;
        }
        self.animating = false;
        debug!(generation, mode = ?self.mode(), "transition finished");
        true
    }

    /// Drops a selection that no longer points at an existing bar.
    pub fn reconcile(&mut self, bar_count: usize) {
        if let Some(idx) = self.selected {
            if idx >= bar_count {
                debug!(idx, bar_count, "selected bar vanished, back to aggregate");
                self.selected = None;
                self.animating = false;
                self.generation += 1;
            }
        }
    }

    fn begin_transition(&mut self, from: SelectionMode) -> Transition {
        self.animating = true;
        self.generation += 1;
        let transition = Transition {
            from,
            to: self.mode(),
            generation: self.generation,
        };
        debug!(?transition, "transition started");
        transition
    }
}
