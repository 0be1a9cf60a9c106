use std::io::{self, BufRead, Write};
use std::time::Duration;

use common::config::{ConfigContentProvider, ConfigManager, YamlConfigSerializer};
use common::games::SessionRng;
use common::games::tictactoe::{BotInput, Difficulty, TicTacToeGameState, calculate_move};
use common::log;
use common::stats::{GameStats, RoundResult};

use crate::config::GameConfig;
use crate::render::{describe_move_error, describe_status, render_board};

pub fn thinking_delay(difficulty: Difficulty) -> Duration {
    match difficulty {
        Difficulty::Easy => Duration::from_millis(400),
        Difficulty::Medium => Duration::from_millis(600),
        Difficulty::Hard => Duration::from_millis(800),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum UserCommand {
    Place(usize),
    NewRound,
    ShowStats,
    Quit,
    Invalid(String),
}

fn parse_command(input: &str) -> UserCommand {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => UserCommand::Quit,
        "n" | "new" => UserCommand::NewRound,
        "s" | "stats" => UserCommand::ShowStats,
        // cell numbers are shown 1-based
        other => match other.parse::<usize>() {
            Ok(cell) if cell > 0 => UserCommand::Place(cell - 1),
            _ => UserCommand::Invalid(input.to_string()),
        },
    }
}

pub struct TicTacToeRunner<R, W, P>
where
    R: BufRead,
    W: Write,
    P: ConfigContentProvider,
{
    settings: GameConfig,
    state: TicTacToeGameState,
    rng: SessionRng,
    stats: ConfigManager<P, GameStats, YamlConfigSerializer>,
    use_thinking_delay: bool,
    input: R,
    output: W,
}

impl<R, W, P> TicTacToeRunner<R, W, P>
where
    R: BufRead,
    W: Write,
    P: ConfigContentProvider,
{
    pub fn new(
        settings: GameConfig,
        rng: SessionRng,
        stats: ConfigManager<P, GameStats, YamlConfigSerializer>,
        use_thinking_delay: bool,
        input: R,
        output: W,
    ) -> Self {
        Self {
            state: TicTacToeGameState::new(settings.board_size, settings.first_player),
            settings,
            rng,
            stats,
            use_thinking_delay,
            input,
            output,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub async fn run(&mut self) -> io::Result<()> {
        log!(
            "Starting {} round on {} ({} difficulty, {} moves first, seed {})",
            self.settings.mode,
            self.settings.board_size,
            self.settings.difficulty,
            self.settings.first_player,
            self.rng.seed()
        );
        self.print_board()?;

        loop {
            if self.is_ai_turn() {
                self.play_ai_turn().await?;
                continue;
            }

            self.print_prompt()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match parse_command(&line) {
                UserCommand::Quit => break,
                UserCommand::NewRound => self.start_new_round()?,
                UserCommand::ShowStats => self.print_stats()?,
                UserCommand::Place(index) => self.apply_move(index)?,
                UserCommand::Invalid(text) => {
                    writeln!(self.output, "Unrecognized input '{}'", text)?;
                }
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()
    }

    fn is_ai_turn(&self) -> bool {
        !self.state.status.is_over() && self.settings.ai_mark() == Some(self.state.current_mark)
    }

    async fn play_ai_turn(&mut self) -> io::Result<()> {
        let Some(ai_mark) = self.settings.ai_mark() else {
            return Ok(());
        };
        writeln!(self.output, "AI is thinking...")?;
        self.output.flush()?;

        if self.use_thinking_delay {
            tokio::time::sleep(thinking_delay(self.settings.difficulty)).await;
        }

        let input = BotInput {
            board: &self.state.board,
            ai_mark,
            human_mark: self.settings.human_mark(),
            difficulty: self.settings.difficulty,
            size: self.state.size,
        };
        let chosen = calculate_move(input, &mut self.rng);

        match chosen {
            Some(index) => {
                log!("AI ({}) plays cell {}", self.settings.difficulty, index + 1);
                self.apply_move(index)
            }
            None => {
                log!("AI asked to move on a full board");
                Ok(())
            }
        }
    }

    fn apply_move(&mut self, index: usize) -> io::Result<()> {
        if let Err(e) = self.state.place_mark(index) {
            return writeln!(self.output, "{}", describe_move_error(e));
        }

        self.print_board()?;
        if self.state.status.is_over() {
            self.finish_round()?;
        }
        Ok(())
    }

    fn finish_round(&mut self) -> io::Result<()> {
        log!(
            "Round over after {} moves: {}",
            self.state.move_count,
            describe_status(&self.state.status, self.state.current_mark)
        );

        if self.settings.ai_mark().is_none() {
            return Ok(());
        }

        let Some(result) = RoundResult::for_player(&self.state.status, self.settings.human_mark())
        else {
            return Ok(());
        };

        match self.stats.update(|stats| stats.record(result)) {
            Ok(stats) => writeln!(self.output, "{}", stats)?,
            Err(e) => log!("Failed to save statistics: {}", e),
        }
        Ok(())
    }

    fn start_new_round(&mut self) -> io::Result<()> {
        self.state.reset(self.settings.first_player);
        writeln!(self.output, "New round!")?;
        self.print_board()
    }

    fn print_stats(&mut self) -> io::Result<()> {
        match self.stats.get_config() {
            Ok(stats) => writeln!(self.output, "{}", stats),
            Err(e) => writeln!(self.output, "Statistics unavailable: {}", e),
        }
    }

    fn print_board(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", render_board(&self.state.board, self.state.size))?;
        writeln!(
            self.output,
            "{}",
            describe_status(&self.state.status, self.state.current_mark)
        )
    }

    fn print_prompt(&mut self) -> io::Result<()> {
        if self.state.status.is_over() {
            write!(self.output, "[n]ew round, [s]tats, [q]uit > ")?;
        } else {
            let n = self.state.size.cell_count();
            write!(
                self.output,
                "{}: cell 1-{}, [n]ew round, [s]tats, [q]uit > ",
                self.state.current_mark, n
            )?;
        }
        self.output.flush()
    }
}
