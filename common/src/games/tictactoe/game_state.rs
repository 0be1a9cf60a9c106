use std::fmt;

use super::board::{create_empty_board, get_available_moves};
use super::types::{BoardSize, GameStatus, Mark};
use super::win_detector::evaluate_outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    OutOfBounds { index: usize, cell_count: usize },
    CellOccupied(usize),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::OutOfBounds { index, cell_count } => {
                write!(f, "Cell {} is out of bounds (0..{})", index, cell_count)
            }
            MoveError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Vec<Mark>,
    pub size: BoardSize,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub move_count: usize,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(size: BoardSize, first_mark: Mark) -> Self {
        debug_assert!(first_mark != Mark::Empty);
        Self {
            board: create_empty_board(size),
            size,
            current_mark: first_mark,
            status: GameStatus::InProgress,
            move_count: 0,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<&GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let cell_count = self.size.cell_count();
        if index >= cell_count {
            return Err(MoveError::OutOfBounds { index, cell_count });
        }

        if !self.board[index].is_empty() {
            return Err(MoveError::CellOccupied(index));
        }

        self.board[index] = self.current_mark;
        self.move_count += 1;
        self.last_move = Some(index);
        self.status = evaluate_outcome(&self.board, self.size);

        if !self.status.is_over() {
            self.switch_turn();
        }

        Ok(&self.status)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    pub fn reset(&mut self, first_mark: Mark) {
        *self = Self::new(self.size, first_mark);
    }

    pub fn available_moves(&self) -> Vec<usize> {
        get_available_moves(&self.board)
    }

    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }
}
