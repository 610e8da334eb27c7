use thiserror::Error;

/// Failures surfaced by the core and by rendering backends.
///
/// None of these propagate to the host page or window: the driver logs them
/// and falls back to rendering nothing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LavaError {
    #[error("invalid hex color {0:?}")]
    InvalidColor(String),
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("GPU device request failed: {0}")]
    Device(String),
    #[error("surface creation failed: {0}")]
    Surface(String),
    #[error("adapter cannot present to this surface")]
    SurfaceUnsupported,
    #[error("rendering context lost")]
    ContextLost,
    #[error("host environment unavailable: {0}")]
    Host(String),
}
