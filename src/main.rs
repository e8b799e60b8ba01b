//! Fyshy entry point
//!
//! Native headless demo: the autopilot plays the real simulation with
//! headless collaborators. Every option can also come from the environment
//! (`FYSHY_SEED`, `FYSHY_TICKS`, `FYSHY_TUNING`, `FYSHY_FAST`, `FYSHY_DUMP`).
//!
//! Example:
//!   cargo run -- --seed 7 --ticks 900 --fast
//!   FYSHY_TUNING='{"max_enemy_fish": 8}' cargo run

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::FalseyValueParser;

use fyshy::platform::{LogRenderer, NullPacer, Pacer, ScriptedInput, SleepPacer};
use fyshy::sim::PcgSpawner;
use fyshy::{Game, RunSummary, Tuning};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless Fyshy demo driven by the autopilot", long_about = None)]
struct Args {
    /// Spawn seed (default: clock-derived)
    #[arg(long, env = "FYSHY_SEED")]
    seed: Option<u64>,
    /// Ticks to run before quitting (default: one minute of play)
    #[arg(long, env = "FYSHY_TICKS")]
    ticks: Option<u64>,
    /// Inline JSON overriding any tuning field
    #[arg(long, env = "FYSHY_TUNING")]
    tuning: Option<String>,
    /// Do not sleep between ticks or during splashes
    #[arg(long, env = "FYSHY_FAST", value_parser = FalseyValueParser::new())]
    fast: bool,
    /// Print every frame to stdout as a JSON line
    #[arg(long, env = "FYSHY_DUMP", value_parser = FalseyValueParser::new())]
    dump: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn play<P: Pacer>(tuning: Tuning, seed: u64, ticks: u64, dump: bool, pacer: P) -> Result<RunSummary> {
    let mut renderer = LogRenderer::new();
    if dump {
        renderer = renderer.with_dump(Box::new(std::io::stdout()));
    }
    let mut game = Game::new(
        tuning,
        PcgSpawner::new(seed),
        ScriptedInput::quit_after(ticks),
        renderer,
        pacer,
    )
    .context("starting session")?
    .with_autopilot(true);
    let summary = game.run();
    log::info!("Built {} sprite variants", game.renderer().sprite_variants());
    Ok(summary)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Fyshy (headless) starting...");

    let tuning = match args.tuning.as_deref() {
        Some(json) => Tuning::from_json(json).context("--tuning / FYSHY_TUNING")?,
        None => Tuning::default(),
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    let ticks = args.ticks.unwrap_or(60 * tuning.fps as u64);
    log::info!("Seed {}, {} ticks at {} fps", seed, ticks, tuning.fps);

    let summary = if args.fast {
        play(tuning, seed, ticks, args.dump, NullPacer::default())?
    } else {
        play(tuning, seed, ticks, args.dump, SleepPacer::new())?
    };

    log::info!(
        "Done: {} ticks, {} rounds ({} won, {} lost), best score {}, final score {}",
        summary.ticks,
        summary.rounds,
        summary.wins,
        summary.losses,
        summary.best_score,
        summary.final_score
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args =
            Args::try_parse_from(["fyshy", "--seed", "7", "--ticks", "90", "--fast"]).unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.ticks, Some(90));
        assert!(args.fast);
    }

    #[test]
    fn test_rejects_negative_ticks() {
        assert!(Args::try_parse_from(["fyshy", "--ticks", "-3"]).is_err());
    }

    #[test]
    fn test_fast_run_summary() {
        let summary = play(Tuning::default(), 11, 45, false, NullPacer::default()).unwrap();
        assert_eq!(summary.ticks, 45);
    }

    #[test]
    fn test_invalid_tuning_fails_to_start() {
        let tuning = Tuning {
            enemy_tiers: Vec::new(),
            ..Tuning::default()
        };
        assert!(play(tuning, 1, 10, false, NullPacer::default()).is_err());
    }
}
