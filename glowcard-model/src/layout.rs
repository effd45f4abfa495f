//! Viewport classes the carousel keeps independent navigation state for.

/// Breakpoint class of the viewport. Each class shows a fixed number of
/// cards at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Breakpoint {
    Narrow,
    Medium,
    Wide,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] =
        [Breakpoint::Wide, Breakpoint::Medium, Breakpoint::Narrow];

    /// Cards visible at once for this class.
    pub const fn window_size(self) -> usize {
        match self {
            Breakpoint::Wide => 3,
            Breakpoint::Medium => 2,
            Breakpoint::Narrow => 1,
        }
    }

    pub fn from_viewport_width(
        width: f32,
        thresholds: BreakpointThresholds,
    ) -> Self {
        if width >= thresholds.wide_min_width {
            Breakpoint::Wide
        } else if width >= thresholds.medium_min_width {
            Breakpoint::Medium
        } else {
            Breakpoint::Narrow
        }
    }
}

/// Minimum viewport widths (logical pixels) for the wider classes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BreakpointThresholds {
    pub medium_min_width: f32,
    pub wide_min_width: f32,
}

impl Default for BreakpointThresholds {
    fn default() -> Self {
        Self {
            medium_min_width: 768.0,
            wide_min_width: 1024.0,
        }
    }
}
