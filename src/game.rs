use crate::terminal_ui::{GameAction, TerminalUI};
use gomoku_heuristic::ai::AIEngine;
use gomoku_heuristic::board::{Pos, BOARD_SIZE, CENTER};
use gomoku_heuristic::game_logger::GameLogger;
use gomoku_heuristic::player::{Player, PlayerType, Role};
use gomoku_heuristic::session::Session;
use log::{info, warn};
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
  AIvAI,
  AIvHuman,
  HumanvHuman,
}

pub struct Game {
  pub session: Session,
  pub mode: GameMode,

  /// Plays Black.
  pub player1: Player,
  /// Plays White.
  pub player2: Player,

  pub ai: AIEngine,

  // Current position "cursor" for human move
  pub cursor: Pos,
}

impl Game {
  pub fn new(mode: GameMode, ai_role: Role, ai: AIEngine) -> Self {
    let controller = |role: Role| match mode {
      GameMode::AIvAI => PlayerType::AI,
      GameMode::HumanvHuman => PlayerType::Human,
      GameMode::AIvHuman if role == ai_role => PlayerType::AI,
      GameMode::AIvHuman => PlayerType::Human,
    };

    Self {
      session: Session::new(),
      mode,
      player1: Player::new(controller(Role::Black), Role::Black),
      player2: Player::new(controller(Role::White), Role::White),
      ai,
      cursor: Pos::new(CENTER, CENTER),
    }
  }

  fn player_for(&self, role: Role) -> &Player {
    if role == self.player1.role {
      &self.player1
    } else {
      &self.player2
    }
  }

  fn is_ai(&self, role: Role) -> bool {
    self.player_for(role).player_type == PlayerType::AI
  }

  pub fn run(&mut self) -> std::io::Result<()> {
    let mut ui = TerminalUI::new();
    ui.init_screen()?;
    let result = self.event_loop(&mut ui);
    ui.restore_terminal()?;
    result
  }

  fn event_loop(&mut self, ui: &mut TerminalUI) -> std::io::Result<()> {
    let mut paused = false;

    loop {
      ui.draw_board(&self.session, self.cursor);
      ui.show_message(&self.status(paused));

      let role = self.session.side_to_move();
      let waiting = paused || self.session.is_over();

      let action = if !waiting && self.is_ai(role) {
        // Thinking delay is presentation only; a key press cuts it short.
        let delay = Duration::from_millis(self.ai.config.think_time_ms);
        match ui.poll_input(delay)? {
          GameAction::None => {
            self.ai_turn(role);
            continue;
          }
          other => other,
        }
      } else {
        ui.read_input()?
      };

      match action {
        GameAction::Quit => break,
        GameAction::TogglePause => paused = !paused,
        GameAction::Reset => {
          info!("Starting a new game");
          self.session.reset();
          paused = false;
        }
        GameAction::Undo => {
          if !self.undo() {
            ui.show_message("Nothing to undo.");
          }
        }
        GameAction::Redo => {
          if !self.redo() {
            ui.show_message("Nothing to redo.");
          }
        }
        GameAction::MoveLeft => self.cursor.col = self.cursor.col.saturating_sub(1),
        GameAction::MoveRight => self.cursor.col = (self.cursor.col + 1).min(BOARD_SIZE - 1),
        GameAction::MoveUp => self.cursor.row = self.cursor.row.saturating_sub(1),
        GameAction::MoveDown => self.cursor.row = (self.cursor.row + 1).min(BOARD_SIZE - 1),
        GameAction::PlaceStone => {
          if !waiting && !self.is_ai(role) {
            self.human_turn(role);
          }
        }
        GameAction::None => {}
      }
    }
    Ok(())
  }

  fn status(&self, paused: bool) -> String {
    if let Some(line) = self.session.winner() {
      return format!("{:?} ({}) wins! [r] new game, [q] quit", line.role, line.role.symbol());
    }
    if self.session.is_draw() {
      return "Board full: draw. [r] new game, [q] quit".to_string();
    }
    let role = self.session.side_to_move();
    let who = if self.is_ai(role) { "AI thinking" } else { "your move" };
    let pause = if paused { " (paused)" } else { "" };
    format!("Move #{} - {:?} ({}): {}{}", self.session.ply() + 1, role, role.symbol(), who, pause)
  }

  fn human_turn(&mut self, role: Role) {
    let Pos { row, col } = self.cursor;
    if !self.session.current().is_legal_move(row, col) {
      return;
    }
    info!("{:?} (human) plays ({}, {})", role, row, col);
    if let Err(e) = self.session.play(row, col) {
      warn!("Rejected human move: {}", e);
    }
  }

  fn ai_turn(&mut self, role: Role) {
    let Some(decision) = self.ai.decide(self.session.current(), role) else {
      warn!("AI ({:?}) found no move", role);
      return;
    };
    let Pos { row, col } = decision.pos;
    info!("AI ({:?}) plays ({}, {}): {:?}", role, row, col, decision.reason);
    if let Err(e) = self.session.play(row, col) {
      warn!("Rejected AI move: {}", e);
    }
  }

  // In human vs AI, rewind past the AI's reply as well
  fn undo(&mut self) -> bool {
    if !self.session.undo() {
      return false;
    }
    while self.is_ai(self.session.side_to_move()) && self.session.ply() > 0 && self.mode == GameMode::AIvHuman {
      self.session.undo();
    }
    true
  }

  fn redo(&mut self) -> bool {
    if !self.session.redo() {
      return false;
    }
    if self.mode == GameMode::AIvHuman && self.is_ai(self.session.side_to_move()) {
      self.session.redo();
    }
    true
  }

  /// AI vs AI without the terminal UI. Returns the winner, `None` on a draw.
  pub fn run_headless<W: Write>(&mut self, logger: &mut GameLogger<W>) -> std::io::Result<Option<Role>> {
    debug_assert_eq!(self.mode, GameMode::AIvAI);

    println!("Starting AI vs AI game...");
    println!(
      "Defend weight: {}, center weight: {}",
      self.ai.config.defend_weight, self.ai.config.center_weight
    );
    println!();

    while !self.session.is_over() {
      let role = self.session.side_to_move();
      let board = *self.session.current();
      logger.log_move_start(role, self.session.ply())?;
      logger.log_board_state(&board, self.session.last_move())?;

      let Some(decision) = self.ai.decide(&board, role) else {
        break;
      };
      logger.log_decision(&self.ai, &board, role, &decision)?;

      let Pos { row, col } = decision.pos;
      println!(
        "Move #{} - {:?} -> ({}, {}) [{:?}]",
        self.session.ply() + 1,
        role,
        row,
        col,
        decision.reason
      );
      if let Err(e) = self.session.play(row, col) {
        warn!("Rejected AI move: {}", e);
        break;
      }
    }

    let winner = self.session.winner().map(|line| line.role);
    logger.log_board_state(self.session.current(), self.session.last_move())?;
    logger.log_game_end(winner, self.session.ply())?;

    println!("\nGame Over!");
    match winner {
      None => println!("Result: DRAW"),
      Some(role) => println!("Result: {:?} ({}) WINS!", role, role.symbol()),
    }
    println!("Total moves: {}", self.session.ply());
    Ok(winner)
  }
}
