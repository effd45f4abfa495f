//! Registry holding one carousel window state per breakpoint

use std::collections::HashMap;
use std::time::{Duration, Instant};

use glowcard_model::Breakpoint;

use super::drag::DragStep;
use super::state::WindowState;

/// Window states for every breakpoint class, kept in lockstep for item
/// counts and resets but navigated independently.
#[derive(Debug, Clone)]
pub struct CarouselRegistry {
    states: HashMap<Breakpoint, WindowState>,
    transition_lock: Duration,
}

impl CarouselRegistry {
    pub fn new(transition_lock: Duration) -> Self {
        let states = Breakpoint::ALL
            .into_iter()
            .map(|bp| (bp, WindowState::for_breakpoint(bp, transition_lock)))
            .collect();
        Self {
            states,
            transition_lock,
        }
    }

    pub fn get(&self, breakpoint: &Breakpoint) -> Option<&WindowState> {
        self.states.get(breakpoint)
    }

    /// Get a mutable reference, creating the state when absent.
    pub fn get_or_insert(&mut self, breakpoint: Breakpoint) -> &mut WindowState {
        let lock = self.transition_lock;
        self.states
            .entry(breakpoint)
            .or_insert_with(|| WindowState::for_breakpoint(breakpoint, lock))
    }

    pub fn transition_lock(&self) -> Duration {
        self.transition_lock
    }

    pub fn set_transition_lock(&mut self, lock: Duration) {
        self.transition_lock = lock;
        for state in self.states.values_mut() {
            state.set_transition_lock(lock);
        }
    }

    /// Focus and group offset back to zero on every breakpoint.
    pub fn reset_navigation(&mut self) {
        for state in self.states.values_mut() {
            state.reset();
        }
    }

    /// Propagate the current page's card count to every breakpoint.
    pub fn set_item_count(&mut self, item_count: usize) {
        for state in self.states.values_mut() {
            state.set_item_count(item_count);
        }
    }

    pub fn advance(&mut self, breakpoint: Breakpoint) -> bool {
        self.advance_at(breakpoint, Instant::now())
    }

    pub fn advance_at(&mut self, breakpoint: Breakpoint, now: Instant) -> bool {
        self.get_or_insert(breakpoint).advance_at(now)
    }

    pub fn retreat(&mut self, breakpoint: Breakpoint) -> bool {
        self.retreat_at(breakpoint, Instant::now())
    }

    pub fn retreat_at(&mut self, breakpoint: Breakpoint, now: Instant) -> bool {
        self.get_or_insert(breakpoint).retreat_at(now)
    }

    /// Apply a discrete step produced by a [`super::DragTracker`].
    pub fn apply_drag(&mut self, breakpoint: Breakpoint, step: DragStep) -> bool {
        match step {
            DragStep::Advance => self.advance(breakpoint),
            DragStep::Retreat => self.retreat(breakpoint),
        }
    }
}

impl Default for CarouselRegistry {
    fn default() -> Self {
        Self::new(super::DEFAULT_TRANSITION_LOCK)
    }
}
