use crate::board::{Axis, Board, Pos};
use crate::player::Role;
use crate::scores::AiConfig;
use crate::shapes::Shape;
use rand::seq::IteratorRandom;
use tracing::debug;

/// Why a move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
  /// Completes five for the mover.
  Win,
  /// Takes the cell where the opponent would complete five.
  Block,
  /// Best attack + defence + centre score.
  Heuristic,
  /// No cell produced a comparable score; picked at random.
  Random,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
  pub pos: Pos,
  pub reason: Reason,
  /// Heuristic total for `Heuristic` decisions, 0 otherwise.
  pub score: f64,
}

/// One-ply greedy move picker. Holds no board state of its own.
pub struct AIEngine {
  pub config: AiConfig,
}

impl AIEngine {
  pub fn new(config: AiConfig) -> Self {
    Self { config }
  }

  /// Best cell for `role`, or `None` on a full board.
  pub fn find_best_move(&self, board: &Board, role: Role) -> Option<Pos> {
    self.decide(board, role).map(|d| d.pos)
  }

  pub fn decide(&self, board: &Board, role: Role) -> Option<Decision> {
    if board.is_full() {
      debug!(?role, "board full, no move");
      return None;
    }

    if let Some(pos) = Self::winning_cell(board, role) {
      debug!(?role, row = pos.row, col = pos.col, "immediate win");
      return Some(Decision { pos, reason: Reason::Win, score: 0.0 });
    }

    if let Some(pos) = Self::winning_cell(board, role.opponent()) {
      debug!(?role, row = pos.row, col = pos.col, "blocking opponent five");
      return Some(Decision { pos, reason: Reason::Block, score: 0.0 });
    }

    if let Some((pos, score)) = self.best_scored_cell(board, role) {
      debug!(?role, row = pos.row, col = pos.col, score, "heuristic move");
      return Some(Decision { pos, reason: Reason::Heuristic, score });
    }

    let pos = board.empty_cells().choose(&mut rand::thread_rng())?;
    debug!(?role, row = pos.row, col = pos.col, "no comparable score, random move");
    Some(Decision { pos, reason: Reason::Random, score: 0.0 })
  }

  /// Pattern score of `role` playing at `pos`, summed over the four axes.
  /// A five on any axis returns the win weight alone.
  pub fn score_cell(&self, board: &Board, role: Role, pos: Pos) -> i32 {
    let weights = &self.config.weights;
    let mut score = 0;
    for axis in Axis::ALL {
      let shape = Shape::from(board.line_shape(pos, role, axis));
      if shape == Shape::Five {
        return weights.win;
      }
      score += weights.get(shape);
    }
    score
  }

  /// Heuristic total for one empty cell.
  pub fn evaluate_cell(&self, board: &Board, role: Role, pos: Pos) -> f64 {
    let attack = self.score_cell(board, role, pos) as f64;
    let defend = self.score_cell(board, role.opponent(), pos) as f64;
    let center_bias = -(pos.center_distance() as f64);
    attack + defend * self.config.defend_weight + center_bias * self.config.center_weight
  }

  // First empty cell (row-major) where `role` would complete five
  fn winning_cell(board: &Board, role: Role) -> Option<Pos> {
    board
      .empty_cells()
      .find(|pos| board.check_winner(pos.row, pos.col, role).is_some())
  }

  // Strict `>` keeps the earliest cell on ties; NaN totals never win
  fn best_scored_cell(&self, board: &Board, role: Role) -> Option<(Pos, f64)> {
    let mut best: Option<(Pos, f64)> = None;
    let mut best_score = f64::NEG_INFINITY;
    for pos in board.empty_cells() {
      let total = self.evaluate_cell(board, role, pos);
      if total > best_score {
        best_score = total;
        best = Some((pos, total));
      }
    }
    best
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::board::tests::board_with;
  use crate::board::{BOARD_SIZE, CENTER};
  use crate::player::Role::{Black, White};
  use crate::scores::{AiConfigOverrides, AiWeightsOverrides};

  fn engine() -> AIEngine {
    AIEngine::new(AiConfig::default())
  }

  #[test]
  fn test_empty_board_plays_center() {
    let decision = engine().decide(&Board::new(), Black).unwrap();
    assert_eq!(decision.pos, Pos::new(CENTER, CENTER));
    assert_eq!(decision.pos, Pos::new(7, 7));
    assert_eq!(decision.reason, Reason::Heuristic);
  }

  #[test]
  fn test_blocks_open_four_at_first_end() {
    let board = board_with(&[(7, 5, Black), (7, 6, Black), (7, 7, Black), (7, 8, Black)]);
    let decision = engine().decide(&board, White).unwrap();
    assert_eq!(decision.pos, Pos::new(7, 4));
    assert_eq!(decision.reason, Reason::Block);
  }

  #[test]
  fn test_win_preempts_block() {
    // White threatens (3,5) or (3,0); Black can finish at (10,4) or (10,9).
    let board = board_with(&[
      (3, 1, White),
      (3, 2, White),
      (3, 3, White),
      (3, 4, White),
      (10, 5, Black),
      (10, 6, Black),
      (10, 7, Black),
      (10, 8, Black),
    ]);
    let decision = engine().decide(&board, Black).unwrap();
    assert_eq!(decision.reason, Reason::Win);
    assert_eq!(decision.pos, Pos::new(10, 4));
  }

  #[test]
  fn test_block_preempts_heuristic() {
    // Black's vertical four is capped at the top, so only (6,12) completes it.
    // With defence switched off the scorer prefers extending White's own three.
    let board = board_with(&[
      (1, 12, White),
      (2, 12, Black),
      (3, 12, Black),
      (4, 12, Black),
      (5, 12, Black),
      (7, 6, White),
      (7, 7, White),
      (7, 8, White),
    ]);
    let overrides = AiConfigOverrides {
      defend_weight: Some(0.0),
      ..Default::default()
    };
    let engine = AIEngine::new(AiConfig::merged(&overrides));
    let decision = engine.decide(&board, White).unwrap();
    assert_eq!(decision.reason, Reason::Block);
    assert_eq!(decision.pos, Pos::new(6, 12));
    assert!(engine.evaluate_cell(&board, White, Pos::new(7, 5)) > engine.evaluate_cell(&board, White, Pos::new(6, 12)));
  }

  #[test]
  fn test_decision_is_deterministic() {
    let board = board_with(&[(7, 7, Black), (7, 8, White), (8, 8, Black), (6, 6, White)]);
    let engine = engine();
    let first = engine.find_best_move(&board, Black);
    let second = engine.find_best_move(&board, Black);
    assert!(first.is_some());
    assert_eq!(first, second);
  }

  #[test]
  fn test_score_cell_does_not_mutate_board() {
    let board = board_with(&[(7, 7, Black), (7, 8, Black)]);
    let snapshot = board;
    let score = engine().score_cell(&board, Black, Pos::new(7, 9));
    assert_eq!(board, snapshot);
    assert!(board.is_empty_at(Pos::new(7, 9)));
    // Open three horizontally plus an open one on the other three axes.
    assert_eq!(score, 2_000 + 3 * 10);
  }

  #[test]
  fn test_five_short_circuits_other_axes() {
    let board = board_with(&[
      (7, 3, Black),
      (7, 4, Black),
      (7, 5, Black),
      (7, 6, Black),
      (6, 7, Black),
      (5, 7, Black),
    ]);
    assert_eq!(engine().score_cell(&board, Black, Pos::new(7, 7)), 100_000);
  }

  #[test]
  fn test_ties_keep_first_cell_in_row_major_order() {
    // With no centre pull every empty cell on a fresh board scores the same.
    let overrides = AiConfigOverrides {
      center_weight: Some(0.0),
      weights: AiWeightsOverrides {
        one_open: Some(0),
        ..Default::default()
      },
      ..Default::default()
    };
    let engine = AIEngine::new(AiConfig::merged(&overrides));
    assert_eq!(engine.find_best_move(&Board::new(), White), Some(Pos::new(0, 0)));
  }

  #[test]
  fn test_nan_config_falls_back_to_random_empty_cell() {
    let overrides = AiConfigOverrides {
      center_weight: Some(f64::NAN),
      ..Default::default()
    };
    let engine = AIEngine::new(AiConfig::merged(&overrides));
    let board = board_with(&[(7, 7, Black), (0, 0, White)]);
    for _ in 0..20 {
      let decision = engine.decide(&board, White).unwrap();
      assert_eq!(decision.reason, Reason::Random);
      assert!(board.is_empty_at(decision.pos));
    }
  }

  #[test]
  fn test_full_board_has_no_move() {
    // Fill in a pattern that never contains five in a row.
    let mut board = Board::new();
    for row in 0..BOARD_SIZE {
      for col in 0..BOARD_SIZE {
        let role = if (col + 2 * row) % 4 < 2 { Black } else { White };
        board = board.apply_move(row, col, role).unwrap();
      }
    }
    assert!(board.is_full());
    assert_eq!(engine().decide(&board, Black), None);
    assert_eq!(engine().find_best_move(&board, White), None);
  }
}
