mod cli;
mod game;
mod logging;
mod terminal_ui;

use crate::cli::{CliArgs, GameModeArg};
use crate::game::{Game, GameMode};
use anyhow::bail;
use clap::Parser;
use gomoku_heuristic::ai::AIEngine;
use gomoku_heuristic::game_logger::GameLogger;
use gomoku_heuristic::scores::AiConfig;
use log::info;

fn main() -> anyhow::Result<()> {
  let args = CliArgs::parse();
  logging::init(&args)?;

  let mode = match args.mode {
    GameModeArg::HumanHuman => GameMode::HumanvHuman,
    GameModeArg::HumanAi => GameMode::AIvHuman,
    GameModeArg::AiAi => GameMode::AIvAI,
  };
  if args.headless && mode != GameMode::AIvAI {
    bail!("--headless requires --mode ai-ai");
  }

  let config = AiConfig::merged(&args.ai_overrides());
  info!("AI config: {:?}", config);
  let mut game = Game::new(mode, args.ai_role.into(), AIEngine::new(config));

  if args.headless {
    let mut logger = GameLogger::create(&args.transcript)?;
    game.run_headless(&mut logger)?;
    println!("See {} for the full transcript.", args.transcript.display());
  } else {
    game.run()?;
  }
  Ok(())
}
