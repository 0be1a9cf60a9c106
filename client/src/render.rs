use common::games::tictactoe::{BoardSize, GameStatus, Mark, MoveError};

/// Draws the board with marks in taken cells and 1-based cell numbers in
/// free ones.
pub fn render_board(board: &[Mark], size: BoardSize) -> String {
    let n = size.dimension();
    let width = size.cell_count().to_string().len();
    let separator = vec!["-".repeat(width + 2); n].join("+");

    let rows: Vec<String> = board
        .chunks(n)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, mark)| {
                    let label = match mark {
                        Mark::Empty => (row * n + col + 1).to_string(),
                        taken => taken.to_string(),
                    };
                    format!(" {:>width$} ", label, width = width)
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join(&format!("\n{}\n", separator))
}

pub fn describe_status(status: &GameStatus, current: Mark) -> String {
    match status {
        GameStatus::InProgress => format!("{} to move", current),
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::Won(line) => {
            let cells: Vec<String> = line
                .cells
                .iter()
                .map(|index| (index + 1).to_string())
                .collect();
            format!("{} wins! ({} line: {})", line.mark, line.direction, cells.join(", "))
        }
    }
}

pub fn describe_move_error(error: MoveError) -> String {
    match error {
        MoveError::GameOver => "Round is over, press n for a new round or q to quit".to_string(),
        MoveError::OutOfBounds { index, cell_count } => {
            format!("Cell {} does not exist (choose 1-{})", index + 1, cell_count)
        }
        MoveError::CellOccupied(index) => format!("Cell {} is already taken", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use common::games::tictactoe::{LineDirection, WinningLine, create_empty_board};
    use super::*;

    #[test]
    fn test_render_three_by_three() {
        let mut board = create_empty_board(BoardSize::Three);
        board[0] = Mark::X;
        board[4] = Mark::O;
        let expected = " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(render_board(&board, BoardSize::Three), expected);
    }

    #[test]
    fn test_render_pads_two_digit_labels() {
        let board = create_empty_board(BoardSize::Four);
        let rendered = render_board(&board, BoardSize::Four);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "  1 |  2 |  3 |  4 ");
        assert_eq!(lines[1], "----+----+----+----");
        assert_eq!(lines[6], " 13 | 14 | 15 | 16 ");
    }

    #[test]
    fn test_describe_win_uses_one_based_cells() {
        let status = GameStatus::Won(WinningLine {
            mark: Mark::O,
            cells: vec![2, 4, 6],
            direction: LineDirection::DiagonalUp,
        });
        assert_eq!(
            describe_status(&status, Mark::O),
            "O wins! (diagonal-up line: 3, 5, 7)"
        );
        assert_eq!(describe_status(&GameStatus::InProgress, Mark::X), "X to move");
    }

    #[test]
    fn test_move_errors_use_one_based_cells() {
        assert_eq!(describe_move_error(MoveError::CellOccupied(0)), "Cell 1 is already taken");
        assert_eq!(
            describe_move_error(MoveError::OutOfBounds { index: 9, cell_count: 9 }),
            "Cell 10 does not exist (choose 1-9)"
        );
    }
}
