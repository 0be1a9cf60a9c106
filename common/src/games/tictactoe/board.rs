use super::types::{BoardSize, Mark};

pub fn create_empty_board(size: BoardSize) -> Vec<Mark> {
    vec![Mark::Empty; size.cell_count()]
}

pub fn get_available_moves(board: &[Mark]) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_board_full(board: &[Mark]) -> bool {
    board.iter().all(|cell| !cell.is_empty())
}

#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Vec<Mark> {
    layout
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'X' => Mark::X,
            'O' => Mark::O,
            _ => Mark::Empty,
        })
        .collect()
}
