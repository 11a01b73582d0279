mod config;
mod offline;
mod ui;

use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{BotType, TicTacToeSessionSettings};
use tictactoe_common::{log, logger};

use config::get_config_manager;
use offline::{RunnerOptions, TicTacToeRunner};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Difficulty {
    Optimal,
    Imperfect,
}

impl From<Difficulty> for BotType {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Optimal => BotType::Optimal,
            Difficulty::Imperfect => BotType::Imperfect,
        }
    }
}

#[derive(Parser)]
#[command(name = "dracula_tictactoe", about = "Tic-tac-toe against Dracula")]
struct Args {
    /// Config file; defaults to one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    skip_intro: bool,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config).get_or_create_config()?;

    let prefix = if args.use_log_prefix || config.use_log_prefix {
        Some("Dracula".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose || config.verbose);

    let tictactoe = config.tictactoe;
    let bot_type = args.difficulty.map(BotType::from).unwrap_or(tictactoe.bot_type);
    let rng = match args.seed.or(tictactoe.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();
    if !args.skip_intro {
        writeln!(output, "{}", ui::INTRO)?;
    }
    writeln!(output, "{}", ui::HELP)?;

    let options = RunnerOptions {
        settings: TicTacToeSessionSettings {
            bot_type,
            rules: tictactoe.rules,
        },
        round_pause: Duration::from_millis(tictactoe.round_pause_ms),
        success_code: tictactoe.success_code,
    };

    let summary = TicTacToeRunner::new(options, rng, io::stdin().lock(), output).run()?;
    log!(
        "Final score: you {} - Dracula {}",
        summary.stats.player_wins,
        summary.stats.opponent_wins
    );

    Ok(())
}
