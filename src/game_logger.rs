use crate::ai::{AIEngine, Decision, Reason};
use crate::board::{Board, Pos, BOARD_SIZE};
use crate::player::Role;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Plain-text transcript of a game: boards, decisions and the result.
pub struct GameLogger<W: Write = File> {
  out: W,
}

impl GameLogger<File> {
  pub fn create(path: impl AsRef<Path>) -> std::io::Result<Self> {
    Ok(Self::new(File::create(path)?))
  }
}

impl<W: Write> GameLogger<W> {
  pub fn new(out: W) -> Self {
    Self { out }
  }

  pub fn into_inner(self) -> W {
    self.out
  }

  pub fn log_move_start(&mut self, role: Role, ply: usize) -> std::io::Result<()> {
    writeln!(
      self.out,
      "\n{}\nMove #{} - Player: {:?} ({})\n{}",
      "=".repeat(60),
      ply + 1,
      role,
      role.symbol(),
      "=".repeat(60)
    )
  }

  pub fn log_board_state(&mut self, board: &Board, last_move: Option<Pos>) -> std::io::Result<()> {
    writeln!(self.out, "\nCurrent board state:")?;
    writeln!(
      self.out,
      "   {}",
      (0..BOARD_SIZE).map(|c| format!("{:2}", c)).collect::<Vec<_>>().join(" ")
    )?;

    for row in 0..BOARD_SIZE {
      write!(self.out, "{:2} ", row)?;
      for col in 0..BOARD_SIZE {
        let pos = Pos::new(row, col);
        let ch = board.get(pos).role().map_or(".", |r| r.symbol());
        if last_move == Some(pos) {
          write!(self.out, "[{}]", ch)?;
        } else {
          write!(self.out, " {} ", ch)?;
        }
      }
      writeln!(self.out)?;
    }
    Ok(())
  }

  /// Record the chosen move together with both sides' pattern scores there.
  pub fn log_decision(&mut self, engine: &AIEngine, board: &Board, role: Role, decision: &Decision) -> std::io::Result<()> {
    let pos = decision.pos;
    let reason = match decision.reason {
      Reason::Win => "Winning move (FIVE)",
      Reason::Block => "Blocking opponent FIVE",
      Reason::Heuristic => "Best heuristic score",
      Reason::Random => "Random fallback",
    };

    writeln!(self.out, "\n*** DECISION ***")?;
    writeln!(self.out, "  Chosen move: ({}, {})", pos.row, pos.col)?;
    writeln!(self.out, "  Reason: {}", reason)?;
    if decision.reason == Reason::Heuristic {
      writeln!(self.out, "  Total score: {:.1}", decision.score)?;
    }
    writeln!(self.out, "  Attack score: {}", engine.score_cell(board, role, pos))?;
    writeln!(self.out, "  Defend score: {}", engine.score_cell(board, role.opponent(), pos))?;
    self.out.flush()
  }

  pub fn log_game_end(&mut self, winner: Option<Role>, total_moves: usize) -> std::io::Result<()> {
    writeln!(self.out, "\n\n{}", "=".repeat(60))?;
    writeln!(self.out, "GAME OVER")?;
    writeln!(self.out, "{}", "=".repeat(60))?;

    match winner {
      None => writeln!(self.out, "Result: DRAW")?,
      Some(role) => writeln!(self.out, "Result: {:?} ({}) WINS!", role, role.symbol())?,
    }

    writeln!(self.out, "Total moves: {}", total_moves)?;
    self.out.flush()
  }
}
