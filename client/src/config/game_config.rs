use common::config::Validate;
use common::games::tictactoe::{BoardSize, Difficulty, GameMode, Mark};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GameConfig {
    pub board_size: BoardSize,
    pub difficulty: Difficulty,
    pub mode: GameMode,
    pub first_player: Mark,
}

impl GameConfig {
    /// In vs-AI rounds the human always plays X.
    pub fn human_mark(&self) -> Mark {
        Mark::X
    }

    pub fn ai_mark(&self) -> Option<Mark> {
        match self.mode {
            GameMode::VsAi => Some(Mark::O),
            GameMode::TwoPlayer => None,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.first_player == Mark::Empty {
            return Err("first_player must be X or O".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::Three,
            difficulty: Difficulty::Medium,
            mode: GameMode::VsAi,
            first_player: Mark::X,
        }
    }
}
