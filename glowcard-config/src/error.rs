use thiserror::Error;

/// A configuration that parsed but cannot drive a session.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigLoadError {
    #[error("page_size must be greater than zero")]
    ZeroPageSize,

    #[error("drag_threshold_px must be a positive finite number, got {0}")]
    InvalidDragThreshold(f32),

    #[error(
        "breakpoints.medium_min_width ({medium}) must be below breakpoints.wide_min_width ({wide})"
    )]
    InvalidBreakpoints { medium: f32, wide: f32 },

    #[error("invalid catalog base_url '{url}'")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("catalog.timeout_ms must be greater than zero")]
    ZeroTimeout,
}
