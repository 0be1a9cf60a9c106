use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::games::tictactoe::{GameStatus, Mark};

pub type StatsStore = ConfigManager<FileContentConfigProvider, GameStats, YamlConfigSerializer>;

pub fn stats_store(file_path: &str) -> StatsStore {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Win,
    Loss,
    Draw,
}

impl RoundResult {
    /// Result from `player`'s point of view, or `None` while the round runs.
    pub fn for_player(status: &GameStatus, player: Mark) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some(RoundResult::Draw),
            GameStatus::Won(line) if line.mark == player => Some(RoundResult::Win),
            GameStatus::Won(_) => Some(RoundResult::Loss),
        }
    }
}

/// Aggregate human-vs-AI counters, kept from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl GameStats {
    pub fn record(&mut self, result: RoundResult) {
        // counters can come from a hand-edited file, so they saturate
        self.games_played = self.games_played.saturating_add(1);
        match result {
            RoundResult::Win => {
                self.wins = self.wins.saturating_add(1);
                self.current_streak = self.current_streak.saturating_add(1);
                self.best_streak = self.best_streak.max(self.current_streak);
            }
            RoundResult::Loss => {
                self.losses = self.losses.saturating_add(1);
                self.current_streak = 0;
            }
            RoundResult::Draw => self.draws = self.draws.saturating_add(1),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.wins) * 100.0 / f64::from(self.games_played)
    }
}

impl Validate for GameStats {
    fn validate(&self) -> Result<(), String> {
        let decided = self
            .wins
            .checked_add(self.losses)
            .and_then(|sum| sum.checked_add(self.draws))
            .ok_or_else(|| "wins + losses + draws overflows".to_string())?;
        if decided != self.games_played {
            return Err(format!(
                "wins + losses + draws ({}) must equal games_played ({})",
                decided, self.games_played
            ));
        }
        if self.current_streak > self.best_streak {
            return Err(format!(
                "current_streak ({}) cannot exceed best_streak ({})",
                self.current_streak, self.best_streak
            ));
        }
        Ok(())
    }
}

impl fmt::Display for GameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Played {} | Wins {} | Losses {} | Draws {} | Win rate {:.0}% | Streak {} (best {})",
            self.games_played,
            self.wins,
            self.losses,
            self.draws,
            self.win_rate(),
            self.current_streak,
            self.best_streak
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigContentProvider, ConfigError};
    use crate::games::tictactoe::{LineDirection, WinningLine};
    use super::*;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_stats_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    fn won_by(mark: Mark) -> GameStatus {
        GameStatus::Won(WinningLine {
            mark,
            cells: vec![0, 4, 8],
            direction: LineDirection::DiagonalDown,
        })
    }

    #[test]
    fn test_win_extends_streak_and_best() {
        let mut stats = GameStats::default();
        stats.record(RoundResult::Win);
        stats.record(RoundResult::Win);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.best_streak, 2);
    }

    #[test]
    fn test_loss_resets_streak_but_keeps_best() {
        let mut stats = GameStats::default();
        stats.record(RoundResult::Win);
        stats.record(RoundResult::Win);
        stats.record(RoundResult::Loss);
        stats.record(RoundResult::Win);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.games_played, 4);
    }

    #[test]
    fn test_draw_keeps_streak() {
        let mut stats = GameStats::default();
        stats.record(RoundResult::Win);
        stats.record(RoundResult::Draw);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.draws, 1);
        assert!(stats.validate().is_ok());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut stats = GameStats::default();
        stats.record(RoundResult::Win);
        stats.record(RoundResult::Loss);
        stats.reset();
        assert_eq!(stats, GameStats::default());
    }

    #[test]
    fn test_win_rate() {
        let mut stats = GameStats::default();
        assert_eq!(stats.win_rate(), 0.0);
        stats.record(RoundResult::Win);
        stats.record(RoundResult::Loss);
        stats.record(RoundResult::Draw);
        stats.record(RoundResult::Win);
        assert_eq!(stats.win_rate(), 50.0);
    }

    #[test]
    fn test_round_result_from_status() {
        assert_eq!(RoundResult::for_player(&GameStatus::InProgress, Mark::X), None);
        assert_eq!(RoundResult::for_player(&GameStatus::Draw, Mark::X), Some(RoundResult::Draw));
        assert_eq!(RoundResult::for_player(&won_by(Mark::X), Mark::X), Some(RoundResult::Win));
        assert_eq!(RoundResult::for_player(&won_by(Mark::O), Mark::X), Some(RoundResult::Loss));
    }

    #[test]
    fn test_inconsistent_counters_fail_validation() {
        let stats = GameStats {
            games_played: 3,
            wins: 1,
            ..GameStats::default()
        };
        assert!(stats.validate().is_err());

        let stats = GameStats {
            current_streak: 2,
            best_streak: 1,
            games_played: 2,
            wins: 2,
            ..GameStats::default()
        };
        assert!(stats.validate().is_err());
    }

    #[test]
    fn test_huge_hand_edited_counters_fail_validation() {
        let stats = GameStats {
            games_played: u32::MAX,
            wins: u32::MAX,
            losses: 1,
            ..GameStats::default()
        };
        assert!(stats.validate().is_err());

        let mut stats = GameStats {
            games_played: u32::MAX,
            wins: u32::MAX,
            current_streak: u32::MAX,
            best_streak: u32::MAX,
            ..GameStats::default()
        };
        stats.record(RoundResult::Win);
        assert_eq!(stats.games_played, u32::MAX);
        assert_eq!(stats.best_streak, u32::MAX);

        let file_path = get_temp_file_path();
        let content = format!(
            "games_played: 1\nwins: {}\nlosses: {}\ndraws: 0\ncurrent_streak: 0\nbest_streak: 0\n",
            u32::MAX,
            u32::MAX
        );
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content(&content)
            .unwrap();

        let result = stats_store(&file_path).get_config();
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_stats_survive_file_round_trip() {
        let file_path = get_temp_file_path();
        let store = stats_store(&file_path);
        assert_eq!(store.get_config().unwrap(), GameStats::default());

        store.update(|stats| stats.record(RoundResult::Win)).unwrap();
        store.update(|stats| stats.record(RoundResult::Draw)).unwrap();

        let reloaded = stats_store(&file_path).get_config().unwrap();
        assert_eq!(reloaded.games_played, 2);
        assert_eq!(reloaded.wins, 1);
        assert_eq!(reloaded.draws, 1);
        assert_eq!(reloaded.best_streak, 1);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_corrupt_stats_file_is_rejected() {
        let file_path = get_temp_file_path();
        let content = "games_played: 5\nwins: 1\nlosses: 0\ndraws: 0\n\
                       current_streak: 0\nbest_streak: 0\n";
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content(content)
            .unwrap();

        let result = stats_store(&file_path).get_config();
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        let _ = std::fs::remove_file(file_path);
    }
}
