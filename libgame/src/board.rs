use crate::error::BoardError;

use super::pos::Position;

/// A fixed-size grid of cells stored row-major.
///
/// A board always has at least one row and one column and is always fully populated,
/// so the dimensions are only readable once the board exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    rows: usize,
    cols: usize,
    tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let tiles = vec![TileState::default(); rows * cols];
        Self::with_tiles(rows, cols, tiles)
    }

    pub fn with_tiles(rows: usize, cols: usize, tiles: Vec<TileState>) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::ZeroDimension { rows, cols });
        }

        let expected = rows * cols;
        if tiles.len() != expected {
            return Err(BoardError::TileCountMismatch {
                expected,
                actual: tiles.len(),
            });
        }

        Ok(Self { rows, cols, tiles })
    }

    /// Builds an all-dead board and brings the given positions to life.
    pub fn with_alive_cells(
        rows: usize,
        cols: usize,
        cells: &[(usize, usize)],
    ) -> Result<Self, BoardError> {
        let mut board = Self::new(rows, cols)?;

        for &(row, col) in cells {
            let tile = board.tile_mut(Position { row, col }).ok_or(BoardError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            })?;
            *tile = TileState::Alive;
        }

        Ok(board)
    }

    /// A board with this board's dimensions and the given tiles.
    pub(crate) fn with_same_shape(&self, tiles: Vec<TileState>) -> Self {
        debug_assert_eq!(tiles.len(), self.tiles.len());

        Self {
            rows: self.rows,
            cols: self.cols,
            tiles,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    pub fn tiles(&self) -> &[TileState] {
        &self.tiles
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn alive_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_alive()).count()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.rows {
            return None;
        }

        if col >= self.cols {
            return None;
        }

        Some(col + (row * self.cols))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.cols;
        let col = index % self.cols;
        Position { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }
}

impl From<bool> for TileState {
    fn from(alive: bool) -> Self {
        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}

impl From<TileState> for bool {
    fn from(value: TileState) -> Self {
        value.is_alive()
    }
}
