mod config;
mod offline;
mod render;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{BoardSize, Difficulty, GameMode, Mark};
use common::stats::{GameStats, stats_store};
use common::{log, logger};

use config::{Config, get_config_manager};
use offline::TicTacToeRunner;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Terminal tic-tac-toe against a bot or a friend")]
struct Args {
    /// Board side length: 3, 4 or 5
    #[arg(long)]
    size: Option<BoardSize>,
    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// vs-ai or two-player
    #[arg(long)]
    mode: Option<GameMode>,
    /// Mark that moves first: X or O
    #[arg(long)]
    first: Option<Mark>,
    #[arg(long)]
    seed: Option<u64>,
    /// Settings file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<String>,
    /// Write the effective settings back to the settings file
    #[arg(long)]
    save: bool,
    #[arg(long)]
    reset_stats: bool,
    #[arg(long)]
    no_delay: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

fn apply_args(config: &mut Config, args: &Args) {
    if let Some(size) = args.size {
        config.game.board_size = size;
    }
    if let Some(difficulty) = args.difficulty {
        config.game.difficulty = difficulty;
    }
    if let Some(mode) = args.mode {
        config.game.mode = mode;
    }
    if let Some(first) = args.first {
        config.game.first_player = first;
    }
    if args.no_delay {
        config.thinking_delay = false;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    apply_args(&mut config, &args);

    if args.save {
        config_manager.set_config(&config)?;
        log!("Settings saved to {}", config_manager.file_path());
    }

    let stats = stats_store(&config.stats_file);
    if args.reset_stats {
        stats.set_config(&GameStats::default())?;
        log!("Statistics in {} reset", config.stats_file);
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let stdin = std::io::stdin();
    let mut runner = TicTacToeRunner::new(
        config.game,
        rng,
        stats,
        config.thinking_delay,
        stdin.lock(),
        std::io::stdout(),
    );
    runner.run().await?;

    Ok(())
}
