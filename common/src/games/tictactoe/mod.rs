mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{create_empty_board, get_available_moves, is_board_full};
pub use bot_controller::{
    BotInput, calculate_move, find_best_move, find_blocking_move, find_winning_move, minimax,
};
pub use game_state::{MoveError, TicTacToeGameState};
pub use types::{
    BoardSize, BoardSizeError, Difficulty, GameMode, GameStatus, Line, LineDirection, Mark,
    WinningLine,
};
pub use win_detector::{check_winner, evaluate_outcome, generate_lines};
