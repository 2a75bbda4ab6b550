use crossterm::{
  cursor::{Hide, MoveTo, Show},
  event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind},
  execute,
  style::{Color, Print, ResetColor, SetForegroundColor},
  terminal::{disable_raw_mode, enable_raw_mode, size, EnterAlternateScreen, LeaveAlternateScreen},
};

use gomoku_heuristic::board::{Pos, BOARD_SIZE, STAR_POINTS};
use gomoku_heuristic::session::Session;
use std::io::{stdout, Result as IoResult};
use std::time::Duration;

// Actions the player can trigger from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
  None,
  Quit,
  TogglePause,
  Undo,
  Redo,
  Reset,
  MoveLeft,
  MoveRight,
  MoveUp,
  MoveDown,
  PlaceStone,
}

pub struct TerminalUI {
  /// Last message, redrawn on the bottom line after every board refresh.
  last_message: String,
}

impl TerminalUI {
  const CURSOR_COLOR: Color = Color::Rgb { r: 120, g: 255, b: 120 };
  const LAST_STONE_COLOR: Color = Color::Rgb { r: 255, g: 140, b: 140 };
  const WIN_LINE_COLOR: Color = Color::Rgb { r: 255, g: 215, b: 0 };

  pub fn new() -> Self {
    Self {
      last_message: String::new(),
    }
  }

  pub fn init_screen(&mut self) -> IoResult<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;
    Ok(())
  }

  pub fn restore_terminal(&mut self) -> IoResult<()> {
    execute!(stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
  }

  /// Block until a key is pressed.
  pub fn read_input(&mut self) -> IoResult<GameAction> {
    Ok(Self::map_event(read()?))
  }

  /// Wait up to `timeout` for a key; `GameAction::None` if nothing arrives.
  pub fn poll_input(&mut self, timeout: Duration) -> IoResult<GameAction> {
    if poll(timeout)? {
      self.read_input()
    } else {
      Ok(GameAction::None)
    }
  }

  fn map_event(ev: Event) -> GameAction {
    // Windows reports releases as well as presses
    let Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }) = ev else {
      return GameAction::None;
    };
    match code {
      KeyCode::Esc | KeyCode::Char('q') => GameAction::Quit,
      KeyCode::Char('p') => GameAction::TogglePause,
      KeyCode::Char('r') => GameAction::Reset,
      KeyCode::Backspace => GameAction::Undo,
      KeyCode::Tab => GameAction::Redo,
      KeyCode::Left => GameAction::MoveLeft,
      KeyCode::Right => GameAction::MoveRight,
      KeyCode::Up => GameAction::MoveUp,
      KeyCode::Down => GameAction::MoveDown,
      KeyCode::Enter | KeyCode::Char(' ') => GameAction::PlaceStone,
      _ => GameAction::None,
    }
  }

  /// Set (and immediately draw) a new message
  pub fn show_message(&mut self, msg: &str) {
    self.last_message = msg.to_string();
    self.draw_message();
  }

  fn draw_message(&mut self) {
    let (cols, rows) = size().unwrap_or((80, 24));
    let y = rows.saturating_sub(2);

    let msg_len = self.last_message.chars().count() as u16;
    let x = cols.saturating_sub(msg_len) / 2;

    execute!(stdout(), MoveTo(0, y), Print(" ".repeat(cols as usize))).ok();
    execute!(stdout(), MoveTo(x, y), Print(&self.last_message)).ok();
  }

  pub fn draw_board(&mut self, session: &Session, cursor: Pos) {
    let (cols, rows) = size().unwrap_or((80, 24));

    let board = session.current();
    let last_move = session.last_move();
    let winner = session.winner();

    let bsize = BOARD_SIZE as u16;
    let cell_width: u16 = 3;
    let used_width = bsize * cell_width - 1;
    let used_height = bsize;

    // Leave a row above for the top border
    let offset_x = cols.saturating_sub(used_width) / 2;
    let offset_y = (rows.saturating_sub(used_height) / 2).max(1);

    let mut stdout_ = stdout();

    for row in 0..rows {
      execute!(stdout_, MoveTo(0, row), Print(" ".repeat(cols as usize))).ok();
    }

    execute!(stdout_, MoveTo(offset_x, offset_y - 1), Print("╔")).ok();
    execute!(stdout_, Print("═".repeat(used_width as usize)), Print("╗")).ok();

    for row in 0..BOARD_SIZE {
      let sy = offset_y + row as u16;
      execute!(stdout_, MoveTo(offset_x, sy), Print("║")).ok();
      for col in 0..BOARD_SIZE {
        let pos = Pos::new(row, col);
        let sx = offset_x + (col as u16) * cell_width + 1;
        let is_cursor = pos == cursor;

        let (symbol, color) = match board.get(pos).role() {
          Some(role) => {
            let color = if is_cursor {
              Some(Self::CURSOR_COLOR)
            } else if winner.is_some_and(|w| w.contains(pos)) {
              Some(Self::WIN_LINE_COLOR)
            } else if last_move == Some(pos) && winner.is_none() {
              Some(Self::LAST_STONE_COLOR)
            } else {
              None
            };
            (role.symbol(), color)
          }
          None if is_cursor => ("+", Some(Self::CURSOR_COLOR)),
          None if STAR_POINTS.contains(&pos) => ("*", None),
          None => (".", None),
        };

        if let Some(col) = color {
          execute!(stdout_, MoveTo(sx, sy), SetForegroundColor(col), Print(symbol), ResetColor).ok();
        } else {
          execute!(stdout_, MoveTo(sx, sy), Print(symbol)).ok();
        }
        execute!(stdout_, Print(" ")).ok();
      }
      execute!(stdout_, Print("║")).ok();
    }

    execute!(stdout_, MoveTo(offset_x, offset_y + used_height), Print("╚")).ok();
    execute!(stdout_, Print("═".repeat(used_width as usize)), Print("╝")).ok();

    self.draw_message();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crossterm::event::KeyModifiers;

  #[test]
  fn test_key_mapping() {
    let press = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
    assert_eq!(TerminalUI::map_event(press(KeyCode::Backspace)), GameAction::Undo);
    assert_eq!(TerminalUI::map_event(press(KeyCode::Tab)), GameAction::Redo);
    assert_eq!(TerminalUI::map_event(press(KeyCode::Char('r'))), GameAction::Reset);
    assert_eq!(TerminalUI::map_event(press(KeyCode::Char(' '))), GameAction::PlaceStone);
    assert_eq!(TerminalUI::map_event(press(KeyCode::Char('z'))), GameAction::None);
  }
}
