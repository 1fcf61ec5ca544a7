mod command;
mod config;
mod game_loop;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use puzzle2048_common::{Board, SessionRng, log, logger};

use config::{CONFIG_FILE, Overrides, apply_overrides, get_config_manager};
use game_loop::run_session;

#[derive(Parser)]
#[command(name = "puzzle2048", about = "Sliding-tile 2048 puzzle in the terminal")]
struct Args {
    /// YAML settings file; defaults are used when it does not exist.
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Puzzle2048".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let settings = get_config_manager(&args.config).get_config()?;
    let settings = apply_overrides(
        settings,
        Overrides {
            width: args.width,
            height: args.height,
            seed: args.seed,
        },
    )?;

    let mut rng = SessionRng::from_optional_seed(settings.seed);
    log!(
        "Starting {}x{} game, seed {}",
        settings.field_width,
        settings.field_height,
        rng.seed()
    );

    let mut board = Board::new(&settings, &mut rng)?;
    let summary = run_session(&mut board, &mut rng, io::stdin().lock(), &mut io::stdout().lock())?;

    log!(
        "Session ended after {} moves, score {}, highest tile {}",
        summary.moves_made,
        summary.final_score,
        board.highest_tile()
    );
    Ok(())
}
