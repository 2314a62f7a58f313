//! Positional classification of cells into neighborhood shapes.
//!
//! Every cell falls into exactly one of nine placements (first row, last row or interior row,
//! crossed with first column, last column or interior column). Each placement owns a fixed
//! table of row and column deltas, so neighbor lookups never need bounds checks.

use itertools::Itertools;

use crate::pos::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisPlacement {
    First,
    Last,
    Interior,
}

impl AxisPlacement {
    /// `First` wins on an axis of length 1, where index 0 is both first and last.
    pub fn classify(index: usize, len: usize) -> Self {
        debug_assert!(index < len, "index {index} outside of axis length {len}");

        if index == 0 {
            AxisPlacement::First
        } else if index + 1 == len {
            AxisPlacement::Last
        } else {
            AxisPlacement::Interior
        }
    }

    fn deltas(self, len: usize) -> &'static [isize] {
        match self {
            AxisPlacement::First if len == 1 => &[0],
            AxisPlacement::First => &[0, 1],
            AxisPlacement::Last => &[-1, 0],
            AxisPlacement::Interior => &[-1, 0, 1],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeighborhoodShape {
    /// Three neighbors.
    Corner,
    /// Five neighbors.
    Edge,
    /// The full Moore neighborhood of eight.
    Interior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: AxisPlacement,
    pub col: AxisPlacement,
}

impl Placement {
    pub fn classify(pos: Position, rows: usize, cols: usize) -> Self {
        Self {
            row: AxisPlacement::classify(pos.row, rows),
            col: AxisPlacement::classify(pos.col, cols),
        }
    }

    pub fn shape(self) -> NeighborhoodShape {
        match (self.row, self.col) {
            (AxisPlacement::Interior, AxisPlacement::Interior) => NeighborhoodShape::Interior,
            (AxisPlacement::Interior, _) | (_, AxisPlacement::Interior) => NeighborhoodShape::Edge,
            _ => NeighborhoodShape::Corner,
        }
    }

    /// Relative `(row, col)` offsets of every neighbor that stays on a `rows` x `cols` board.
    pub fn offsets(self, rows: usize, cols: usize) -> impl Iterator<Item = (isize, isize)> {
        let row_deltas = self.row.deltas(rows).iter().copied();
        let col_deltas = self.col.deltas(cols).iter().copied();

        row_deltas
            .cartesian_product(col_deltas)
            .filter(|&offset| offset != (0, 0))
    }
}

/// Positions of the in-bounds neighbors of `pos` on a `rows` x `cols` board.
pub fn neighbors(pos: Position, rows: usize, cols: usize) -> impl Iterator<Item = Position> {
    Placement::classify(pos, rows, cols)
        .offsets(rows, cols)
        .filter_map(move |(row_delta, col_delta)| pos.offset(row_delta, col_delta))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn neighbor_count(row: usize, col: usize, rows: usize, cols: usize) -> usize {
        neighbors(Position::new(row, col), rows, cols).count()
    }

    #[test]
    fn shape_sizes_match_neighbor_counts() {
        let (rows, cols) = (4, 6);

        for (row, col) in (0..rows).cartesian_product(0..cols) {
            let pos = Position::new(row, col);
            let expected = match Placement::classify(pos, rows, cols).shape() {
                NeighborhoodShape::Corner => 3,
                NeighborhoodShape::Edge => 5,
                NeighborhoodShape::Interior => 8,
            };

            assert_eq!(neighbor_count(row, col, rows, cols), expected, "at {pos:?}");
        }
    }

    #[test]
    fn corners_edges_and_interior_are_classified_by_position() {
        let shape = |row, col| Placement::classify(Position::new(row, col), 5, 5).shape();

        for (row, col) in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(shape(row, col), NeighborhoodShape::Corner);
        }

        for (row, col) in [(0, 2), (4, 2), (2, 0), (2, 4)] {
            assert_eq!(shape(row, col), NeighborhoodShape::Edge);
        }

        assert_eq!(shape(2, 2), NeighborhoodShape::Interior);
    }

    #[test]
    fn nine_placements_are_distinct_on_a_three_by_three_board() {
        let placements: HashSet<_> = (0..3)
            .cartesian_product(0..3)
            .map(|(row, col)| Placement::classify(Position::new(row, col), 3, 3))
            .collect();

        assert_eq!(placements.len(), 9);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(neighbor_count(0, 0, 1, 1), 0);
    }

    #[test]
    fn single_row_and_single_column_boards_shrink_the_neighborhood() {
        assert_eq!(neighbor_count(0, 0, 1, 4), 1);
        assert_eq!(neighbor_count(0, 1, 1, 4), 2);
        assert_eq!(neighbor_count(0, 3, 1, 4), 1);

        assert_eq!(neighbor_count(0, 0, 4, 1), 1);
        assert_eq!(neighbor_count(2, 0, 4, 1), 2);
        assert_eq!(neighbor_count(3, 0, 4, 1), 1);
    }

    #[test]
    fn neighbors_stay_in_bounds_and_are_distinct() {
        for (rows, cols) in (1..=5).cartesian_product(1..=5) {
            for (row, col) in (0..rows).cartesian_product(0..cols) {
                let pos = Position::new(row, col);
                let found: Vec<_> = neighbors(pos, rows, cols).collect();
                let unique: HashSet<_> = found.iter().copied().collect();

                assert_eq!(found.len(), unique.len());
                assert!(!unique.contains(&pos));

                for neighbor in found {
                    assert!(neighbor.row < rows && neighbor.col < cols);
                    assert!(neighbor.row.abs_diff(row) <= 1 && neighbor.col.abs_diff(col) <= 1);
                }
            }
        }
    }
}
