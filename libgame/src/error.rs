use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell spacing must be non-zero")]
    ZeroSpacing,

    #[error("canvas {width_px}x{height_px} is too small for a cell spacing of {spacing}")]
    CanvasTooSmall {
        width_px: u32,
        height_px: u32,
        spacing: u32,
    },

    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },

    #[error("expected {expected} tiles, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },

    #[error("position ({row}, {col}) is outside of a {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
