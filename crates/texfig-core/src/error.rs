// File: crates/texfig-core/src/error.rs
// Summary: Error type shared by sizing, configuration, layout and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FigureError {
    /// Length unit other than `pt`, `cm` or `in`.
    #[error("unsupported length unit {0:?}; you must specify a unit for your lengths (pt, in, cm)")]
    InvalidUnit(String),
    #[error("axis value table is empty")]
    EmptyAxisTable,
    #[error("scalar field has no cells")]
    EmptyGrid,
    #[error("scalar field shape mismatch: expected {expected:?}, got {actual:?}")]
    GridShape { expected: (usize, usize), actual: (usize, usize) },
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
    #[error("unsupported output format {0:?} (only png is rendered)")]
    UnsupportedFormat(String),
    #[error("invalid style value {0:?}")]
    InvalidStyle(String),
    #[error("failed to create raster surface")]
    Surface,
    #[error("encode PNG failed")]
    Encode,
    #[error("invalid figure config: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FigureError>;
