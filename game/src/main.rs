mod config;
mod console_sink;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{GameOutcome, GameSettings, Mark, run_game};
use common::{log, logger};
use config::{CONFIG_FILE, GameConfig, get_config_manager};
use console_sink::ConsoleSink;

#[derive(Parser)]
#[command(name = "mutex_tictactoe", about = "Two threads race for a tic-tac-toe board behind one mutex")]
struct Args {
    /// YAML config file; missing file means defaults
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Seed for reproducible move choices
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between a player's turns, in milliseconds
    #[arg(long)]
    pause_ms: Option<u64>,

    /// Write the effective config back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Game".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    let config = config_manager
        .get_config()?
        .with_overrides(args.seed, args.pause_ms)?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config to {}", args.config);
    }

    let seed = config.seed.unwrap_or_else(SessionRng::random_seed);
    let settings = GameSettings::new(seed, Duration::from_millis(config.pause_ms));

    let outcome = run_game(&settings, Arc::new(ConsoleSink))?;
    print_outcome(&outcome, &config);

    Ok(())
}

fn print_outcome(outcome: &GameOutcome, config: &GameConfig) {
    println!("\n=== GAME OVER ===");
    println!("{}", outcome.result_line());
    if config.show_winning_line
        && let Some(line) = outcome.winning_line
    {
        println!("Winning line: {}", line);
    }
    log!(
        "Seed {}: {} moves total, X made {}, O made {}",
        outcome.seed,
        outcome.total_moves,
        outcome.moves_by(Mark::X),
        outcome.moves_by(Mark::O)
    );
}
