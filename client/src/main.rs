mod config;
mod reporter;
mod runner;
mod script;

use std::path::PathBuf;

use clap::Parser;
use mnk_common::games::SessionRng;
use mnk_common::{log, logger};

use config::get_config_manager;
use reporter::{ConsoleReporter, format_scoreboard};
use script::MoveScript;

#[derive(Parser)]
#[command(name = "mnk_client", about = "Plays scripted or random tic-tac-toe rounds on an n x n board")]
struct Args {
    /// Config file, defaults to mnk_client_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// YAML move script; the built-in demonstration games are played otherwise
    #[arg(long, conflicts_with = "random")]
    script: Option<PathBuf>,

    /// Play random rounds instead of a script
    #[arg(long)]
    random: bool,

    /// Board side for random play
    #[arg(long)]
    board_size: Option<usize>,

    /// Number of random rounds to play
    #[arg(long)]
    rounds: Option<u32>,

    /// Seed for reproducible random play
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(args.config).get_config()?;
    let board_size = args.board_size.unwrap_or(config.game.board_size);
    let mut reporter = ConsoleReporter::new(config.display.clone());

    if args.random {
        let rounds = args.rounds.unwrap_or(config.random.rounds);
        let mut rng = match args.seed.or(config.random.seed) {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        let summary = runner::run_random(board_size, rounds, &mut rng, &mut reporter)?;
        println!("{}", format_scoreboard(&summary.scores));
        return Ok(());
    }

    let script = match args.script {
        Some(path) => {
            log!("Loading move script from {}", path.display());
            MoveScript::load(&path)?
        }
        None => MoveScript::demo(),
    };

    let summaries = runner::run_script(&script, &mut reporter)?;
    for (index, summary) in summaries.iter().enumerate() {
        log!(
            "Game {} ({}x{}): {} round(s), {} rejected move(s), {}",
            index + 1,
            summary.board_size,
            summary.board_size,
            summary.rounds_completed,
            summary.rejected_moves,
            match summary.scores.leader() {
                Some(player) => format!("{} leads", player),
                None => "level".to_string(),
            }
        );
    }

    Ok(())
}
