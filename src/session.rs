use crate::board::{Board, Pos, WinningLine};
use crate::error::MoveError;
use crate::player::Role;
use log::{debug, info};

/// One game: board snapshots per ply, a cursor into them and the winner, if any.
///
/// Undo only moves the cursor. Playing a move from an earlier ply drops every
/// later snapshot, so redo is lost at that point.
pub struct Session {
  history: Vec<Board>,
  ply: usize,
  winner: Option<WinningLine>,
}

impl Default for Session {
  fn default() -> Self {
    Self::new()
  }
}

impl Session {
  pub fn new() -> Self {
    Self {
      history: vec![Board::new()],
      ply: 0,
      winner: None,
    }
  }

  pub fn current(&self) -> &Board {
    &self.history[self.ply]
  }

  pub fn ply(&self) -> usize {
    self.ply
  }

  pub fn history(&self) -> &[Board] {
    &self.history
  }

  pub fn side_to_move(&self) -> Role {
    Role::for_ply(self.ply)
  }

  pub fn winner(&self) -> Option<&WinningLine> {
    self.winner.as_ref()
  }

  pub fn is_draw(&self) -> bool {
    self.winner.is_none() && self.current().is_full()
  }

  pub fn is_over(&self) -> bool {
    self.winner.is_some() || self.current().is_full()
  }

  /// Place a stone for the side to move.
  pub fn play(&mut self, row: usize, col: usize) -> Result<Option<WinningLine>, MoveError> {
    if self.winner.is_some() {
      return Err(MoveError::GameOver);
    }
    let role = self.side_to_move();
    let next = self.current().apply_move(row, col, role)?;

    let dropped = self.history.len() - (self.ply + 1);
    if dropped > 0 {
      debug!("Discarding {} redo snapshot(s)", dropped);
    }
    self.history.truncate(self.ply + 1);
    self.history.push(next);
    self.ply += 1;

    self.winner = next.check_winner(row, col, role);
    if let Some(line) = &self.winner {
      info!("{:?} wins with {} stones on {:?}", role, line.cells.len(), line.axis);
    }
    Ok(self.winner.clone())
  }

  /// Step back one ply. Refused at the start and once someone has won.
  pub fn undo(&mut self) -> bool {
    if self.ply == 0 || self.winner.is_some() {
      return false;
    }
    self.ply -= 1;
    true
  }

  /// Step forward onto a snapshot kept since the last undo.
  pub fn redo(&mut self) -> bool {
    if self.ply + 1 >= self.history.len() {
      return false;
    }
    self.ply += 1;
    self.winner = self.last_move().and_then(|pos| {
      let role = Role::for_ply(self.ply - 1);
      self.current().check_winner(pos.row, pos.col, role)
    });
    true
  }

  pub fn reset(&mut self) {
    self.history = vec![Board::new()];
    self.ply = 0;
    self.winner = None;
  }

  /// Cell filled by the move that produced the current snapshot.
  pub fn last_move(&self) -> Option<Pos> {
    let prev = self.history.get(self.ply.checked_sub(1)?)?;
    let cur = self.current();
    Board::positions().find(|&pos| prev.get(pos) != cur.get(pos))
  }
}
