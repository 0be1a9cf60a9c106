use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Mark {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Mark::X),
            "o" => Ok(Mark::O),
            other => Err(format!("Unknown mark '{}', expected X or O", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSizeError(pub usize);

impl fmt::Display for BoardSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board size must be between 3 and 5, got {}", self.0)
    }
}

impl std::error::Error for BoardSizeError {}

/// Side length of a square board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    Three,
    Four,
    Five,
}

impl BoardSize {
    #[cfg(test)]
    pub(crate) const ALL: [BoardSize; 3] = [BoardSize::Three, BoardSize::Four, BoardSize::Five];

    pub fn dimension(&self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.dimension() * self.dimension()
    }

    /// The exact centre cell, which only exists on odd-sized boards.
    pub fn center(&self) -> Option<usize> {
        let n = self.dimension();
        if n % 2 == 1 {
            Some((n / 2) * n + n / 2)
        } else {
            None
        }
    }

    pub fn corners(&self) -> [usize; 4] {
        let n = self.dimension();
        [0, n - 1, n * (n - 1), n * n - 1]
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(BoardSize::Three),
            4 => Ok(BoardSize::Four),
            5 => Ok(BoardSize::Five),
            other => Err(BoardSizeError(other)),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.dimension()
    }
}

impl FromStr for BoardSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // accept both "4" and "4x4"
        let side = trimmed.split(['x', 'X']).next().unwrap_or(trimmed);
        let value: usize = side
            .parse()
            .map_err(|_| format!("Invalid board size '{}'", trimmed))?;
        BoardSize::try_from(value).map_err(|e| e.to_string())
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension();
        write!(f, "{}x{}", n, n)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty '{}'", other)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    VsAi,
    TwoPlayer,
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ai" | "vs-ai" => Ok(GameMode::VsAi),
            "two-player" | "pvp" => Ok(GameMode::TwoPlayer),
            other => Err(format!("Unknown game mode '{}'", other)),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::VsAi => "vs-ai",
            GameMode::TwoPlayer => "two-player",
        };
        write!(f, "{}", name)
    }
}

/// Rendering hint only; evaluation never looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineDirection {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl fmt::Display for LineDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineDirection::Horizontal => "horizontal",
            LineDirection::Vertical => "vertical",
            LineDirection::DiagonalDown => "diagonal-down",
            LineDirection::DiagonalUp => "diagonal-up",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub cells: Vec<usize>,
    pub direction: LineDirection,
}

impl Line {
    pub fn new(cells: Vec<usize>, direction: LineDirection) -> Self {
        Self { cells, direction }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: Vec<usize>,
    pub direction: LineDirection,
}

impl WinningLine {
    pub fn new(mark: Mark, line: &Line) -> Self {
        Self {
            mark,
            cells: line.cells.clone(),
            direction: line.direction,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(WinningLine),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(line) => Some(line.mark),
            _ => None,
        }
    }
}
