use crate::{
    board::{GameBoard, TileState},
    neighborhood,
    pos::Position,
};

/// Computes the next generation of `board`.
///
/// Every next state is derived from the untouched input and collected into a fresh board,
/// so no cell ever observes a neighbor that was already updated in the same pass.
pub fn step(board: &GameBoard) -> GameBoard {
    let next_tiles = board
        .enumerate_tiles()
        .map(|(tile_pos, tile)| next_state(*tile, alive_neighbor_count(board, tile_pos)))
        .collect();

    board.with_same_shape(next_tiles)
}

/// Conway's transition: birth on exactly three, survival on two or three.
pub fn next_state(tile: TileState, alive_neighbors: usize) -> TileState {
    match (tile, alive_neighbors) {
        (TileState::Alive, 2..=3) => TileState::Alive,
        (TileState::Dead, 3) => TileState::Alive,
        _ => TileState::Dead,
    }
}

pub fn alive_neighbor_count(board: &GameBoard, tile_pos: Position) -> usize {
    neighborhood::neighbors(tile_pos, board.rows(), board.cols())
        .filter_map(|neighbor| board.tile(neighbor))
        .filter(|neighbor| neighbor.is_alive())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_cell_is_born_with_exactly_three_neighbors() {
        for count in 0..=8 {
            let expected = if count == 3 {
                TileState::Alive
            } else {
                TileState::Dead
            };
            assert_eq!(next_state(TileState::Dead, count), expected, "count {count}");
        }
    }

    #[test]
    fn live_cell_survives_with_two_or_three_neighbors() {
        for count in 0..=8 {
            let expected = if count == 2 || count == 3 {
                TileState::Alive
            } else {
                TileState::Dead
            };
            assert_eq!(next_state(TileState::Alive, count), expected, "count {count}");
        }
    }

    #[test]
    fn neighbor_count_respects_corners() {
        let board = GameBoard::with_alive_cells(3, 3, &[(0, 1), (1, 0), (1, 1), (2, 2)]).unwrap();

        assert_eq!(alive_neighbor_count(&board, Position::new(0, 0)), 3);
        assert_eq!(alive_neighbor_count(&board, Position::new(2, 2)), 1);
        assert_eq!(alive_neighbor_count(&board, Position::new(1, 1)), 3);
    }

    #[test]
    fn step_reads_from_a_frozen_snapshot() {
        // Updated in place, (0, 1) would see (0, 0) already dead and die as well.
        let board = GameBoard::with_alive_cells(1, 3, &[(0, 0), (0, 1), (0, 2)]).unwrap();
        let next = step(&board);

        assert_eq!(next, GameBoard::with_alive_cells(1, 3, &[(0, 1)]).unwrap());
        assert_eq!(board.alive_count(), 3);
    }

    #[test]
    fn single_cell_always_dies() {
        let alive = GameBoard::with_alive_cells(1, 1, &[(0, 0)]).unwrap();
        let next = step(&alive);

        assert_eq!(next.alive_count(), 0);
        assert_eq!(step(&next).alive_count(), 0);
    }
}
