#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
  Human,
  AI,
}

// Side to move. Black always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
  Black,
  White,
}

impl Role {
  // Get the opponent's role
  pub fn opponent(&self) -> Role {
    match self {
      Role::Black => Role::White,
      Role::White => Role::Black,
    }
  }

  /// Side to move at a given ply: even plies are Black, odd plies are White.
  pub fn for_ply(ply: usize) -> Role {
    if ply % 2 == 0 {
      Role::Black
    } else {
      Role::White
    }
  }

  // Single-character symbol used by the terminal and the transcript
  pub fn symbol(&self) -> &'static str {
    match self {
      Role::Black => "X",
      Role::White => "O",
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub struct Player {
  pub player_type: PlayerType,
  pub role: Role,
}

impl Player {
  pub fn new(player_type: PlayerType, role: Role) -> Self {
    Self { player_type, role }
  }
}
