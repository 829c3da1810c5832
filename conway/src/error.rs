use thiserror::Error;

/// Errors raised while setting up a grid. Per-generation work has no error path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Either dimension was zero.
    #[error("grid dimensions must be positive, got {height}x{width}")]
    ZeroDimension { height: usize, width: usize },

    /// A pattern's bounding box does not fit inside the grid.
    #[error("pattern '{pattern}' does not fit in a {height}x{width} grid")]
    PatternTooLarge {
        pattern: &'static str,
        height: usize,
        width: usize,
    },

    /// No pattern with this name is known.
    #[error("unknown pattern '{name}'")]
    UnknownPattern { name: String },
}
