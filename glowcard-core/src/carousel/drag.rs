//! Pointer drags turned into discrete carousel steps.

/// One discrete navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStep {
    /// Dragged toward the start of the strip: reveal the next card.
    Advance,
    /// Dragged toward the end of the strip: reveal the previous card.
    Retreat,
}

/// Horizontal drag state. Each time the pointer travels `threshold` pixels
/// from the origin a step is emitted and the origin moves to the pointer,
/// so a long drag yields repeated steps rather than continuous scrolling.
#[derive(Debug, Clone, PartialEq)]
pub struct DragTracker {
    threshold: f32,
    origin: Option<f32>,
}

impl DragTracker {
    /// Non-finite or negative thresholds fall back to one pixel.
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_finite() && threshold > 0.0 {
            threshold
        } else {
            1.0
        };
        Self {
            threshold,
            origin: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    pub fn begin(&mut self, x: f32) {
        self.origin = Some(x);
    }

    /// Feed the current pointer position. Returns a step when the threshold
    /// is crossed.
    pub fn update(&mut self, x: f32) -> Option<DragStep> {
        let origin = self.origin?;
        let delta = x - origin;
        let step = if delta <= -self.threshold {
            DragStep::Advance
        } else if delta >= self.threshold {
            DragStep::Retreat
        } else {
            return None;
        };
        self.origin = Some(x);
        Some(step)
    }

    pub fn end(&mut self) {
        self.origin = None;
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(50.0)
    }
}
