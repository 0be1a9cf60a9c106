use crate::games::RandomSource;
use super::board::{get_available_moves, is_board_full};
use super::types::{BoardSize, Difficulty, Line, Mark};
use super::win_detector::{generate_lines, winning_mark};

const EASY_RANDOM_PROBABILITY: f64 = 0.7;
const MEDIUM_RANDOM_PROBABILITY: f64 = 0.3;
const WIN_SCORE: i32 = 10;
/// On boards of size 4 or more, exhaustive search only starts once at most
/// this many cells are empty.
const EXHAUSTIVE_SEARCH_MAX_EMPTY: usize = 12;

pub struct BotInput<'a> {
    pub board: &'a [Mark],
    pub ai_mark: Mark,
    pub human_mark: Mark,
    pub difficulty: Difficulty,
    pub size: BoardSize,
}

pub fn calculate_move(input: BotInput<'_>, rng: &mut dyn RandomSource) -> Option<usize> {
    find_best_move(
        input.board,
        input.ai_mark,
        input.human_mark,
        input.difficulty,
        input.size,
        rng,
    )
}

/// Picks the cell the bot plays next, or `None` on a full board.
///
/// The caller's board is never modified; searches run on a private copy.
pub fn find_best_move(
    board: &[Mark],
    ai_mark: Mark,
    human_mark: Mark,
    difficulty: Difficulty,
    size: BoardSize,
    rng: &mut dyn RandomSource,
) -> Option<usize> {
    debug_assert_eq!(board.len(), size.cell_count());
    debug_assert!(ai_mark != Mark::Empty && human_mark != Mark::Empty);
    debug_assert_ne!(ai_mark, human_mark);

    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }

    let lines = generate_lines(size.dimension());

    let chosen = match difficulty {
        Difficulty::Easy => calculate_easy_move(board, human_mark, &lines, &available_moves, rng),
        Difficulty::Medium => calculate_heuristic_move(
            board,
            ai_mark,
            human_mark,
            size,
            &lines,
            &available_moves,
            true,
            rng,
        ),
        Difficulty::Hard if uses_heuristic_fallback(size, available_moves.len()) => {
            calculate_heuristic_move(
                board,
                ai_mark,
                human_mark,
                size,
                &lines,
                &available_moves,
                false,
                rng,
            )
        }
        Difficulty::Hard => {
            calculate_minimax_move(board, ai_mark, human_mark, &lines, &available_moves)
        }
    };

    Some(chosen)
}

fn uses_heuristic_fallback(size: BoardSize, empty_cells: usize) -> bool {
    size.dimension() >= 4 && empty_cells > EXHAUSTIVE_SEARCH_MAX_EMPTY
}

fn random_move(available_moves: &[usize], rng: &mut dyn RandomSource) -> usize {
    available_moves[rng.random_index(available_moves.len())]
}

fn calculate_easy_move(
    board: &[Mark],
    human_mark: Mark,
    lines: &[Line],
    available_moves: &[usize],
    rng: &mut dyn RandomSource,
) -> usize {
    if rng.chance(EASY_RANDOM_PROBABILITY) {
        return random_move(available_moves, rng);
    }

    find_completing_cell(board, human_mark, lines)
        .unwrap_or_else(|| random_move(available_moves, rng))
}

/// Win, block, centre, optional random override, corner, random.
fn calculate_heuristic_move(
    board: &[Mark],
    ai_mark: Mark,
    human_mark: Mark,
    size: BoardSize,
    lines: &[Line],
    available_moves: &[usize],
    random_override: bool,
    rng: &mut dyn RandomSource,
) -> usize {
    if let Some(index) = find_completing_cell(board, ai_mark, lines) {
        return index;
    }

    if let Some(index) = find_completing_cell(board, human_mark, lines) {
        return index;
    }

    if let Some(center) = size.center()
        && board[center].is_empty()
    {
        return center;
    }

    if random_override && rng.chance(MEDIUM_RANDOM_PROBABILITY) {
        return random_move(available_moves, rng);
    }

    let free_corners: Vec<usize> = size
        .corners()
        .into_iter()
        .filter(|&corner| board[corner].is_empty())
        .collect();
    if !free_corners.is_empty() {
        return free_corners[rng.random_index(free_corners.len())];
    }

    random_move(available_moves, rng)
}

fn calculate_minimax_move(
    board: &[Mark],
    ai_mark: Mark,
    human_mark: Mark,
    lines: &[Line],
    available_moves: &[usize],
) -> usize {
    let mut board = board.to_vec();
    let mut best_move = available_moves[0];
    let mut best_score = i32::MIN;

    for &index in available_moves {
        board[index] = ai_mark;
        let score = search(
            &mut board,
            lines,
            0,
            false,
            ai_mark,
            human_mark,
            i32::MIN,
            i32::MAX,
        );
        board[index] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = index;
        }
    }

    best_move
}

/// The empty cell of the first line holding `n - 1` of `mark` and one empty
/// cell, i.e. where `mark` wins on its next move.
pub fn find_winning_move(board: &[Mark], mark: Mark, size: BoardSize) -> Option<usize> {
    debug_assert_eq!(board.len(), size.cell_count());
    find_completing_cell(board, mark, &generate_lines(size.dimension()))
}

/// Where `opponent_mark` would win next, which is where it must be blocked.
pub fn find_blocking_move(board: &[Mark], opponent_mark: Mark, size: BoardSize) -> Option<usize> {
    find_winning_move(board, opponent_mark, size)
}

fn find_completing_cell(board: &[Mark], mark: Mark, lines: &[Line]) -> Option<usize> {
    lines.iter().find_map(|line| {
        let mut mark_count = 0;
        let mut empty_cell = None;
        let mut empty_count = 0;
        for &index in &line.cells {
            match board[index] {
                Mark::Empty => {
                    empty_count += 1;
                    empty_cell = Some(index);
                }
                m if m == mark => mark_count += 1,
                _ => {}
            }
        }
        if mark_count == line.cells.len() - 1 && empty_count == 1 {
            empty_cell
        } else {
            None
        }
    })
}

/// Alpha-beta minimax over the full game tree below `board`.
///
/// Scores are `10 - depth` for an AI win, `depth - 10` for an opponent win
/// and `0` for a draw. `board` is restored before returning.
pub fn minimax(
    board: &mut [Mark],
    depth: i32,
    is_maximizing: bool,
    ai_mark: Mark,
    human_mark: Mark,
    size: BoardSize,
    alpha: i32,
    beta: i32,
) -> i32 {
    debug_assert_eq!(board.len(), size.cell_count());
    let lines = generate_lines(size.dimension());
    search(
        board,
        &lines,
        depth,
        is_maximizing,
        ai_mark,
        human_mark,
        alpha,
        beta,
    )
}

fn search(
    board: &mut [Mark],
    lines: &[Line],
    depth: i32,
    is_maximizing: bool,
    ai_mark: Mark,
    human_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = winning_mark(board, lines) {
        return if winner == ai_mark {
            WIN_SCORE - depth
        } else {
            -WIN_SCORE + depth
        };
    }

    if is_board_full(board) {
        return 0;
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        for index in get_available_moves(board) {
            board[index] = ai_mark;
            let score = search(
                board,
                lines,
                depth + 1,
                false,
                ai_mark,
                human_mark,
                alpha,
                beta,
            );
            board[index] = Mark::Empty;

            best_score = best_score.max(score);
            alpha = alpha.max(best_score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for index in get_available_moves(board) {
            board[index] = human_mark;
            let score = search(
                board,
                lines,
                depth + 1,
                true,
                ai_mark,
                human_mark,
                alpha,
                beta,
            );
            board[index] = Mark::Empty;

            best_score = best_score.min(score);
            beta = beta.min(best_score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    }
}
