use rand::Rng;

use crate::{
    board::{GameBoard, TileState},
    error::BoardError,
};

/// Counts every cell index `i` with `(i + 1) * spacing < len_px`.
///
/// Cell `i` is drawn at `(i + 1) * spacing`, so the last cell never touches the canvas edge.
fn cells_along(len_px: u32, spacing: u32) -> usize {
    (len_px.saturating_sub(1) / spacing) as usize
}

/// Derives the `(rows, cols)` of a board drawn on a `width_px` x `height_px` canvas.
pub fn grid_dimensions(
    width_px: u32,
    height_px: u32,
    spacing: u32,
) -> Result<(usize, usize), BoardError> {
    if spacing == 0 {
        return Err(BoardError::ZeroSpacing);
    }

    let rows = cells_along(height_px, spacing);
    let cols = cells_along(width_px, spacing);

    if rows == 0 || cols == 0 {
        return Err(BoardError::CanvasTooSmall {
            width_px,
            height_px,
            spacing,
        });
    }

    Ok((rows, cols))
}

/// Builds a randomly seeded board for the given canvas using the thread-local generator.
pub fn initialize(width_px: u32, height_px: u32, spacing: u32) -> Result<GameBoard, BoardError> {
    initialize_with_rng(width_px, height_px, spacing, &mut rand::rng())
}

/// Builds a board where every cell is an independent fair coin flip drawn from `rng`.
pub fn initialize_with_rng<R>(
    width_px: u32,
    height_px: u32,
    spacing: u32,
    rng: &mut R,
) -> Result<GameBoard, BoardError>
where
    R: Rng + ?Sized,
{
    let (rows, cols) = grid_dimensions(width_px, height_px, spacing)?;

    log::debug!("Seeding a {rows}x{cols} board for a {width_px}x{height_px} canvas");

    let tiles = (0..rows * cols)
        .map(|_| TileState::from(rng.random_bool(0.5)))
        .collect();

    GameBoard::with_tiles(rows, cols, tiles)
}
