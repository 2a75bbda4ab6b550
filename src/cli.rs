use clap::{Parser, ValueEnum};
use gomoku_heuristic::player::Role;
use gomoku_heuristic::scores::{AiConfigOverrides, AiWeightsOverrides};
use log::LevelFilter;
use std::path::PathBuf;

/// Game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameModeArg {
  /// Human vs Human
  HumanHuman,
  /// Human vs AI
  HumanAi,
  /// AI vs AI
  AiAi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
  Black,
  White,
}

impl From<RoleArg> for Role {
  fn from(arg: RoleArg) -> Self {
    match arg {
      RoleArg::Black => Role::Black,
      RoleArg::White => Role::White,
    }
  }
}

/// Gomoku with a one-ply heuristic AI
#[derive(Parser, Debug)]
#[command(name = "gomoku_heuristic", version)]
pub struct CliArgs {
  /// Game mode
  #[arg(long, value_enum, default_value_t = GameModeArg::HumanAi)]
  pub mode: GameModeArg,

  /// Side played by the AI in human-ai mode
  #[arg(long, value_enum, default_value_t = RoleArg::White)]
  pub ai_role: RoleArg,

  /// Pause before each AI move, in milliseconds
  #[arg(long)]
  pub think_time_ms: Option<u64>,

  /// Multiplier on the opponent's threat at a cell
  #[arg(long, allow_negative_numbers = true)]
  pub defend_weight: Option<f64>,

  /// Multiplier on the pull towards the centre
  #[arg(long, allow_negative_numbers = true)]
  pub center_weight: Option<f64>,

  #[arg(long, allow_negative_numbers = true)]
  pub win_weight: Option<i32>,

  #[arg(long, allow_negative_numbers = true)]
  pub four_open_weight: Option<i32>,

  #[arg(long, allow_negative_numbers = true)]
  pub three_open_weight: Option<i32>,

  #[arg(long, allow_negative_numbers = true)]
  pub three_closed_weight: Option<i32>,

  #[arg(long, allow_negative_numbers = true)]
  pub two_open_weight: Option<i32>,

  #[arg(long, allow_negative_numbers = true)]
  pub two_closed_weight: Option<i32>,

  #[arg(long, allow_negative_numbers = true)]
  pub one_open_weight: Option<i32>,

  /// Play AI vs AI without the terminal UI and write a transcript
  #[arg(long)]
  pub headless: bool,

  /// Transcript file for headless games
  #[arg(long, default_value = "gomoku_game.log")]
  pub transcript: PathBuf,

  /// Write log records to this file during interactive games
  #[arg(long)]
  pub log_file: Option<PathBuf>,

  /// Log level (off, error, warn, info, debug, trace)
  #[arg(long, default_value_t = LevelFilter::Info)]
  pub log_level: LevelFilter,
}

impl CliArgs {
  pub fn ai_overrides(&self) -> AiConfigOverrides {
    AiConfigOverrides {
      think_time_ms: self.think_time_ms,
      defend_weight: self.defend_weight,
      center_weight: self.center_weight,
      weights: AiWeightsOverrides {
        win: self.win_weight,
        four_open: self.four_open_weight,
        three_open: self.three_open_weight,
        three_closed: self.three_closed_weight,
        two_open: self.two_open_weight,
        two_closed: self.two_closed_weight,
        one_open: self.one_open_weight,
      },
    }
  }
}
