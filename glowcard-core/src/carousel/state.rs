//! WindowState: focus and visible-group tracking for one viewport class

use std::ops::Range;
use std::time::{Duration, Instant};

use glowcard_model::Breakpoint;
use tracing::debug;

/// How long navigation stays locked after a step while the slide animates.
pub const DEFAULT_TRANSITION_LOCK: Duration = Duration::from_millis(500);

/// Focused card plus the index of the visible group of `window_size` cards.
///
/// The group offset only moves when focus crosses a window boundary, so
/// stepping inside the visible group never shifts the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    focused_index: usize,
    group_offset: usize,
    window_size: usize,
    item_count: usize,
    transition_lock: Duration,
    locked_until: Option<Instant>,
}

impl WindowState {
    /// A `window_size` of zero is treated as one.
    pub fn new(window_size: usize, transition_lock: Duration) -> Self {
        Self {
            focused_index: 0,
            group_offset: 0,
            window_size: window_size.max(1),
            item_count: 0,
            transition_lock,
            locked_until: None,
        }
    }

    pub fn for_breakpoint(breakpoint: Breakpoint, transition_lock: Duration) -> Self {
        Self::new(breakpoint.window_size(), transition_lock)
    }

    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    pub fn group_offset(&self) -> usize {
        self.group_offset
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn can_go_next(&self) -> bool {
        self.item_count > 0 && self.focused_index < self.item_count - 1
    }

    pub fn can_go_previous(&self) -> bool {
        self.item_count > 0 && self.focused_index > 0
    }

    /// Indices of the cards currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self
            .group_offset
            .saturating_mul(self.window_size)
            .min(self.item_count);
        let end = start.saturating_add(self.window_size).min(self.item_count);
        start..end
    }

    pub fn is_transitioning_at(&self, now: Instant) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning_at(Instant::now())
    }

    pub fn set_transition_lock(&mut self, lock: Duration) {
        self.transition_lock = lock;
    }

    /// Clear the lock early, e.g. when the slide animation reports completion.
    pub fn release_transition(&mut self) {
        self.locked_until = None;
    }

    fn begin_transition(&mut self, now: Instant) {
        self.locked_until = if self.transition_lock.is_zero() {
            None
        } else {
            now.checked_add(self.transition_lock)
        };
    }

    pub fn advance(&mut self) -> bool {
        self.advance_at(Instant::now())
    }

    /// Step focus one card forward. Returns whether anything moved.
    pub fn advance_at(&mut self, now: Instant) -> bool {
        if self.is_transitioning_at(now) || !self.can_go_next() {
            return false;
        }
        let next = self.focused_index + 1;
        if next % self.window_size == 0 {
            self.group_offset = next / self.window_size;
        }
        self.focused_index = next;
        self.begin_transition(now);
        debug!(
            focused = self.focused_index,
            group = self.group_offset,
            window = self.window_size,
            "carousel advanced"
        );
        true
    }

    pub fn retreat(&mut self) -> bool {
        self.retreat_at(Instant::now())
    }

    /// Step focus one card back. Returns whether anything moved.
    pub fn retreat_at(&mut self, now: Instant) -> bool {
        if self.is_transitioning_at(now) || !self.can_go_previous() {
            return false;
        }
        let current = self.focused_index;
        if current % self.window_size == 0 {
            self.group_offset = (current - 1) / self.window_size;
        }
        self.focused_index = current - 1;
        self.begin_transition(now);
        debug!(
            focused = self.focused_index,
            group = self.group_offset,
            window = self.window_size,
            "carousel retreated"
        );
        true
    }

    /// Jump straight to `index` (clamped), aligning the group to it.
    pub fn focus(&mut self, index: usize) {
        self.focused_index = index.min(self.item_count.saturating_sub(1));
        self.group_offset = self.focused_index / self.window_size;
    }

    /// Back to the first card; also drops any pending transition lock.
    pub fn reset(&mut self) {
        self.focused_index = 0;
        self.group_offset = 0;
        self.locked_until = None;
    }

    /// Follow a change in the number of cards. Focus beyond the new end is
    /// pulled back to the last card.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        if item_count == 0 {
            self.focused_index = 0;
            self.group_offset = 0;
            return;
        }
        if self.focused_index >= item_count {
            self.focused_index = item_count - 1;
            self.group_offset = self.focused_index / self.window_size;
        }
        if self.group_offset.saturating_mul(self.window_size) >= item_count {
            self.group_offset = self.focused_index / self.window_size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocked(window_size: usize, items: usize) -> WindowState {
        let mut state = WindowState::new(window_size, Duration::ZERO);
        state.set_item_count(items);
        state
    }

    #[test]
    fn advancing_across_a_boundary_moves_the_group() {
        let mut state = unlocked(3, 7);
        state.focus(2);
        assert_eq!(state.group_offset(), 0);

        assert!(state.advance());
        assert_eq!((state.focused_index(), state.group_offset()), (3, 1));

        assert!(state.advance());
        assert_eq!((state.focused_index(), state.group_offset()), (4, 1));
        assert_eq!(state.visible_range(), 3..6);
    }

    #[test]
    fn retreating_across_a_boundary_moves_the_group_back() {
        let mut state = unlocked(2, 5);
        state.focus(2);
        assert_eq!(state.group_offset(), 1);

        assert!(state.retreat());
        assert_eq!((state.focused_index(), state.group_offset()), (1, 0));
        assert!(state.retreat());
        assert_eq!((state.focused_index(), state.group_offset()), (0, 0));
        assert!(!state.retreat());
    }

    #[test]
    fn ends_are_no_ops() {
        let mut state = unlocked(3, 3);
        assert!(!state.can_go_previous());
        assert!(!state.retreat());
        state.focus(2);
        let before = state.clone();
        assert!(!state.can_go_next());
        assert!(!state.advance());
        assert_eq!(state, before);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut state = unlocked(1, 0);
        assert!(!state.can_go_next());
        assert!(!state.can_go_previous());
        assert!(!state.advance());
        assert!(!state.retreat());
        assert_eq!(state.visible_range(), 0..0);
    }

    #[test]
    fn transition_lock_swallows_rapid_steps() {
        let mut state = WindowState::new(3, Duration::from_millis(500));
        state.set_item_count(6);
        let t0 = Instant::now();

        assert!(state.advance_at(t0));
        assert!(state.is_transitioning_at(t0 + Duration::from_millis(100)));
        assert!(!state.advance_at(t0 + Duration::from_millis(100)));
        assert!(!state.retreat_at(t0 + Duration::from_millis(499)));
        assert_eq!(state.focused_index(), 1);

        assert!(state.advance_at(t0 + Duration::from_millis(500)));
        assert_eq!(state.focused_index(), 2);

        state.release_transition();
        assert!(state.retreat_at(t0 + Duration::from_millis(501)));
    }

    #[test]
    fn shrinking_item_count_clamps_focus() {
        let mut state = unlocked(3, 9);
        state.focus(8);
        assert_eq!(state.group_offset(), 2);

        state.set_item_count(4);
        assert_eq!((state.focused_index(), state.group_offset()), (3, 1));
        assert!(state.visible_range().contains(&state.focused_index()));

        state.set_item_count(0);
        assert_eq!((state.focused_index(), state.group_offset()), (0, 0));
    }

    #[test]
    fn reset_returns_to_start() {
        let mut state = WindowState::new(2, Duration::from_secs(10));
        state.set_item_count(4);
        assert!(state.advance());
        state.reset();
        assert_eq!((state.focused_index(), state.group_offset()), (0, 0));
        assert!(!state.is_transitioning());
        assert!(state.advance());
    }
}
