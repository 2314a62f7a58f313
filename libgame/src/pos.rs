#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Applies a signed offset, yielding `None` when either coordinate would go negative.
    pub fn offset(self, row_delta: isize, col_delta: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(row_delta)?,
            col: self.col.checked_add_signed(col_delta)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (usize, usize) {
    fn from(value: Position) -> Self {
        (value.row, value.col)
    }
}
