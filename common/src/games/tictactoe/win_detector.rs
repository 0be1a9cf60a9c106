use super::board::is_board_full;
use super::types::{BoardSize, GameStatus, Line, LineDirection, Mark, WinningLine};

/// Every candidate winning line of an `n`×`n` board: for each index `i` the
/// row `i` followed by the column `i`, then the main diagonal, then the
/// anti-diagonal. Always `2n + 2` lines.
pub fn generate_lines(n: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2 * n + 2);

    for i in 0..n {
        lines.push(Line::new(
            (0..n).map(|j| i * n + j).collect(),
            LineDirection::Horizontal,
        ));
        lines.push(Line::new(
            (0..n).map(|j| j * n + i).collect(),
            LineDirection::Vertical,
        ));
    }

    lines.push(Line::new(
        (0..n).map(|i| i * n + i).collect(),
        LineDirection::DiagonalDown,
    ));
    lines.push(Line::new(
        (0..n).map(|i| i * n + (n - 1 - i)).collect(),
        LineDirection::DiagonalUp,
    ));

    lines
}

pub fn check_winner(board: &[Mark], size: BoardSize) -> Option<WinningLine> {
    debug_assert_eq!(board.len(), size.cell_count());
    check_winner_on_lines(board, &generate_lines(size.dimension()))
}

pub(crate) fn check_winner_on_lines(board: &[Mark], lines: &[Line]) -> Option<WinningLine> {
    lines
        .iter()
        .find_map(|line| line_owner(board, line).map(|mark| WinningLine::new(mark, line)))
}

pub(crate) fn winning_mark(board: &[Mark], lines: &[Line]) -> Option<Mark> {
    lines.iter().find_map(|line| line_owner(board, line))
}

fn line_owner(board: &[Mark], line: &Line) -> Option<Mark> {
    let first = board[line.cells[0]];
    if first.is_empty() {
        return None;
    }
    line.cells[1..]
        .iter()
        .all(|&index| board[index] == first)
        .then_some(first)
}

/// Win is checked before fullness, so a move that fills the board and
/// completes a line is a win.
pub fn evaluate_outcome(board: &[Mark], size: BoardSize) -> GameStatus {
    if let Some(line) = check_winner(board, size) {
        return GameStatus::Won(line);
    }
    if is_board_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

#[cfg(test)]
mod tests {
    use crate::games::tictactoe::board::{board_from_str, create_empty_board};
    use super::*;

    #[test]
    fn test_line_count_is_two_n_plus_two() {
        for n in 1..=7 {
            assert_eq!(generate_lines(n).len(), 2 * n + 2);
        }
    }

    #[test]
    fn test_lines_have_size_cells_within_bounds() {
        for size in BoardSize::ALL {
            let n = size.dimension();
            for line in generate_lines(n) {
                assert_eq!(line.cells.len(), n);
                assert!(line.cells.iter().all(|&index| index < n * n));
            }
        }
    }

    #[test]
    fn test_line_order_and_directions() {
        let lines = generate_lines(3);
        assert_eq!(lines[0], Line::new(vec![0, 1, 2], LineDirection::Horizontal));
        assert_eq!(lines[1], Line::new(vec![0, 3, 6], LineDirection::Vertical));
        assert_eq!(lines[4], Line::new(vec![6, 7, 8], LineDirection::Horizontal));
        assert_eq!(lines[5], Line::new(vec![2, 5, 8], LineDirection::Vertical));
        assert_eq!(lines[6], Line::new(vec![0, 4, 8], LineDirection::DiagonalDown));
        assert_eq!(lines[7], Line::new(vec![2, 4, 6], LineDirection::DiagonalUp));
    }

    #[test]
    fn test_five_by_five_diagonals() {
        let lines = generate_lines(5);
        assert_eq!(lines[10].cells, vec![0, 6, 12, 18, 24]);
        assert_eq!(lines[11].cells, vec![4, 8, 12, 16, 20]);
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = create_empty_board(BoardSize::Three);
        assert_eq!(check_winner(&board, BoardSize::Three), None);
        assert!(!is_board_full(&board));
    }

    #[test]
    fn test_top_row_win() {
        let board = board_from_str("XXX ... ...");
        let winner = check_winner(&board, BoardSize::Three).unwrap();
        assert_eq!(winner.mark, Mark::X);
        assert_eq!(winner.cells, vec![0, 1, 2]);
        assert_eq!(winner.direction, LineDirection::Horizontal);
    }

    #[test]
    fn test_column_win_on_four_by_four() {
        let board = board_from_str("..O. ..O. X.O. X.OX");
        let winner = check_winner(&board, BoardSize::Four).unwrap();
        assert_eq!(winner.mark, Mark::O);
        assert_eq!(winner.cells, vec![2, 6, 10, 14]);
        assert_eq!(winner.direction, LineDirection::Vertical);
    }

    #[test]
    fn test_anti_diagonal_win_on_five_by_five() {
        let board = board_from_str("....X ...X. ..X.. .X... X....");
        let winner = check_winner(&board, BoardSize::Five).unwrap();
        assert_eq!(winner.cells, vec![4, 8, 12, 16, 20]);
        assert_eq!(winner.direction, LineDirection::DiagonalUp);
    }

    #[test]
    fn test_incomplete_line_is_not_a_win() {
        let board = board_from_str("XX.. .... .... ....");
        assert_eq!(check_winner(&board, BoardSize::Four), None);
    }

    #[test]
    fn test_simultaneous_lines_pick_first_in_order() {
        // X completes row 0 and column 0 with the same move
        let board = board_from_str("XXX XOO XO.");
        let winner = check_winner(&board, BoardSize::Three).unwrap();
        assert_eq!(winner.cells, vec![0, 1, 2]);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from_str("XOX XOO OXX");
        assert_eq!(check_winner(&board, BoardSize::Three), None);
        assert_eq!(evaluate_outcome(&board, BoardSize::Three), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let board = board_from_str("XOX OXO OXX");
        assert_eq!(
            evaluate_outcome(&board, BoardSize::Three).winner(),
            Some(Mark::X)
        );
    }

    #[test]
    fn test_in_progress_board() {
        let board = board_from_str("X.. .O. ...");
        assert_eq!(
            evaluate_outcome(&board, BoardSize::Three),
            GameStatus::InProgress
        );
    }
}
