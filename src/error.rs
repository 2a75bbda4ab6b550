use thiserror::Error;

/// Reasons a stone cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
  #[error("({row}, {col}) is outside the board")]
  OutOfBounds { row: usize, col: usize },

  #[error("({row}, {col}) is already occupied")]
  Occupied { row: usize, col: usize },

  #[error("the game is already over")]
  GameOver,
}
