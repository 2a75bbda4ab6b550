//! Gomoku on a fixed 15x15 board: an immutable board model with a win
//! detector, a one-ply heuristic move picker, and a move history with undo.

pub mod ai;
pub mod board;
pub mod error;
pub mod game_logger;
pub mod player;
pub mod scores;
pub mod session;
pub mod shapes;

pub use ai::{AIEngine, Decision, Reason};
pub use board::{Axis, Board, Cell, Pos, WinningLine, BOARD_SIZE};
pub use error::MoveError;
pub use player::Role;
pub use scores::{AiConfig, AiConfigOverrides, AiWeights, AiWeightsOverrides};
pub use session::Session;
