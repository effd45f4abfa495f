//! Carousel windowing over the cards of the current page.
//!
//! Each viewport class keeps its own [`WindowState`]; the
//! [`CarouselRegistry`] holds one per [`glowcard_model::Breakpoint`] and
//! applies resets to all of them at once.

pub mod drag;
pub mod registry;
pub mod state;

pub use drag::{DragStep, DragTracker};
pub use registry::CarouselRegistry;
pub use state::{DEFAULT_TRANSITION_LOCK, WindowState};
