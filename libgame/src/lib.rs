use board::GameBoard;

pub mod board;
pub mod engine;
pub mod error;
pub mod init;
pub mod neighborhood;
pub mod pos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: GameBoard,
    pub generation: u64,
}

impl Game {
    pub fn new(board: GameBoard) -> Self {
        Self {
            board,
            generation: 0,
        }
    }

    pub fn tick(&mut self) {
        self.board = engine::step(&self.board);
        self.generation += 1;
    }
}
