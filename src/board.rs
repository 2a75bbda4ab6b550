use crate::error::MoveError;
use crate::player::Role;

pub const BOARD_SIZE: usize = 15;
pub const CENTER: usize = BOARD_SIZE / 2;

/// Length of a winning run.
pub const WIN_LENGTH: usize = 5;

/// Traditional marker points, drawn on empty intersections only.
pub const STAR_POINTS: [Pos; 5] = [
  Pos::new(3, 3),
  Pos::new(3, 11),
  Pos::new(CENTER, CENTER),
  Pos::new(11, 3),
  Pos::new(11, 11),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
  pub row: usize,
  pub col: usize,
}

impl Pos {
  pub const fn new(row: usize, col: usize) -> Self {
    Self { row, col }
  }

  /// `Some` only for coordinates inside the board.
  pub fn checked(row: usize, col: usize) -> Option<Self> {
    if row < BOARD_SIZE && col < BOARD_SIZE {
      Some(Self { row, col })
    } else {
      None
    }
  }

  // Neighbour `dr`/`dc` steps away, or None past an edge (no wraparound)
  fn offset(self, dr: isize, dc: isize) -> Option<Self> {
    let row = self.row.checked_add_signed(dr)?;
    let col = self.col.checked_add_signed(dc)?;
    Self::checked(row, col)
  }

  /// Manhattan distance to the centre intersection.
  pub fn center_distance(self) -> usize {
    self.row.abs_diff(CENTER) + self.col.abs_diff(CENTER)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
  #[default]
  Empty,
  Black,
  White,
}

impl From<Role> for Cell {
  fn from(role: Role) -> Self {
    match role {
      Role::Black => Cell::Black,
      Role::White => Cell::White,
    }
  }
}

impl Cell {
  pub fn role(self) -> Option<Role> {
    match self {
      Cell::Empty => None,
      Cell::Black => Some(Role::Black),
      Cell::White => Some(Role::White),
    }
  }
}

/// The four line directions, in the order the win check visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
  Horizontal,
  Vertical,
  /// Top-left to bottom-right.
  DiagonalDown,
  /// Bottom-left to top-right.
  DiagonalUp,
}

impl Axis {
  pub const ALL: [Axis; 4] = [Axis::Horizontal, Axis::Vertical, Axis::DiagonalDown, Axis::DiagonalUp];

  // (row step, col step) of the forward direction
  fn delta(self) -> (isize, isize) {
    match self {
      Axis::Horizontal => (0, 1),
      Axis::Vertical => (1, 0),
      Axis::DiagonalDown => (1, 1),
      Axis::DiagonalUp => (-1, 1),
    }
  }
}

/// A completed line of five or more, kept for highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
  pub role: Role,
  pub axis: Axis,
  /// Run members from the backward end of the axis to the forward end.
  pub cells: Vec<Pos>,
}

impl WinningLine {
  pub fn contains(&self, pos: Pos) -> bool {
    self.cells.contains(&pos)
  }
}

/// Run through a cell along one axis, as if a stone were placed there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
  pub run: usize,
  /// Empty cells immediately beyond the two ends of the run (0..=2).
  pub open_ends: usize,
}

/// Immutable 15x15 snapshot. Moves produce new boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
  cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
  fn default() -> Self {
    Self::new()
  }
}

impl Board {
  pub fn new() -> Self {
    Self {
      cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
    }
  }

  pub fn get(&self, pos: Pos) -> Cell {
    self.cells[pos.row][pos.col]
  }

  pub fn is_empty_at(&self, pos: Pos) -> bool {
    self.get(pos) == Cell::Empty
  }

  pub fn is_legal_move(&self, row: usize, col: usize) -> bool {
    Pos::checked(row, col).is_some_and(|pos| self.is_empty_at(pos))
  }

  /// Return a copy of the board with `role` placed at `(row, col)`.
  ///
  /// `self` is left untouched so earlier snapshots stay valid for undo.
  pub fn apply_move(&self, row: usize, col: usize, role: Role) -> Result<Board, MoveError> {
    let pos = Pos::checked(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
    if !self.is_empty_at(pos) {
      return Err(MoveError::Occupied { row, col });
    }
    let mut next = *self;
    next.cells[row][col] = Cell::from(role);
    Ok(next)
  }

  /// All intersections in row-major order.
  pub fn positions() -> impl Iterator<Item = Pos> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Pos::new(row, col)))
  }

  /// Empty intersections in row-major order.
  pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
    Self::positions().filter(move |&pos| self.is_empty_at(pos))
  }

  pub fn is_full(&self) -> bool {
    self.empty_cells().next().is_none()
  }

  pub fn stone_count(&self) -> usize {
    Self::positions().filter(|&pos| !self.is_empty_at(pos)).count()
  }

  /// Look for a run of five or more `role` stones through `(row, col)`.
  ///
  /// The anchor is counted as `role` whatever it currently holds, so the same
  /// call answers both "did this move win" and "would a move here win".
  /// Axes are tried in `Axis::ALL` order and the first winning one is reported.
  pub fn check_winner(&self, row: usize, col: usize, role: Role) -> Option<WinningLine> {
    let anchor = Pos::checked(row, col)?;
    let cell = Cell::from(role);

    for axis in Axis::ALL {
      let (dr, dc) = axis.delta();
      let forward = self.count_run(anchor, dr, dc, cell);
      let backward = self.count_run(anchor, -dr, -dc, cell);
      if forward + backward + 1 < WIN_LENGTH {
        continue;
      }

      let cells = (1..=backward)
        .rev()
        .map(|k| step(anchor, -dr, -dc, k))
        .chain(std::iter::once(anchor))
        .chain((1..=forward).map(|k| step(anchor, dr, dc, k)))
        .collect();
      return Some(WinningLine { role, axis, cells });
    }
    None
  }

  /// Shape of the line through `pos` along `axis` if `role` played there.
  pub fn line_shape(&self, pos: Pos, role: Role, axis: Axis) -> LineShape {
    let cell = Cell::from(role);
    let (dr, dc) = axis.delta();
    let forward = self.count_run(pos, dr, dc, cell);
    let backward = self.count_run(pos, -dr, -dc, cell);

    let open_ends = [(forward, dr, dc), (backward, -dr, -dc)]
      .into_iter()
      .filter(|&(len, dr, dc)| {
        pos
          .offset(dr * (len as isize + 1), dc * (len as isize + 1))
          .is_some_and(|beyond| self.is_empty_at(beyond))
      })
      .count();

    LineShape {
      run: forward + backward + 1,
      open_ends,
    }
  }

  // Consecutive `cell` stones starting one step from `from`, anchor excluded
  fn count_run(&self, from: Pos, dr: isize, dc: isize, cell: Cell) -> usize {
    let mut count = 0;
    let mut cur = from;
    while let Some(next) = cur.offset(dr, dc) {
      if self.get(next) != cell {
        break;
      }
      count += 1;
      cur = next;
    }
    count
  }
}

// Only called for distances already walked by `count_run`
fn step(from: Pos, dr: isize, dc: isize, k: usize) -> Pos {
  let k = k as isize;
  Pos::new((from.row as isize + dr * k) as usize, (from.col as isize + dc * k) as usize)
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;

  pub(crate) fn board_with(stones: &[(usize, usize, Role)]) -> Board {
    stones
      .iter()
      .fold(Board::new(), |b, &(r, c, role)| b.apply_move(r, c, role).unwrap())
  }

  fn run_of(start: Pos, dr: isize, dc: isize, len: usize) -> Vec<Pos> {
    (0..len).map(|k| step(start, dr, dc, k)).collect()
  }

  fn place_all(board: Board, cells: &[Pos], role: Role) -> Board {
    cells
      .iter()
      .fold(board, |b, p| b.apply_move(p.row, p.col, role).unwrap())
  }

  #[test]
  fn test_legal_move_bounds_and_occupancy() {
    let board = board_with(&[(7, 7, Role::Black)]);
    assert!(board.is_legal_move(0, 0));
    assert!(board.is_legal_move(14, 14));
    assert!(!board.is_legal_move(7, 7));
    assert!(!board.is_legal_move(15, 0));
    assert!(!board.is_legal_move(0, 15));
  }

  #[test]
  fn test_apply_move_does_not_mutate_input() {
    let before = Board::new();
    let after = before.apply_move(3, 4, Role::White).unwrap();
    assert_eq!(before, Board::new());
    assert_eq!(before.get(Pos::new(3, 4)), Cell::Empty);
    assert_eq!(after.get(Pos::new(3, 4)), Cell::White);
    assert_eq!(after.stone_count(), 1);
  }

  #[test]
  fn test_apply_move_rejects_illegal() {
    let board = board_with(&[(2, 2, Role::Black)]);
    assert_eq!(
      board.apply_move(2, 2, Role::White),
      Err(MoveError::Occupied { row: 2, col: 2 })
    );
    assert_eq!(
      board.apply_move(15, 2, Role::White),
      Err(MoveError::OutOfBounds { row: 15, col: 2 })
    );
  }

  #[test]
  fn test_win_reports_exact_cells_on_every_axis() {
    let cases = [
      (Axis::Horizontal, Pos::new(6, 3), 0, 1),
      (Axis::Vertical, Pos::new(3, 6), 1, 0),
      (Axis::DiagonalDown, Pos::new(3, 3), 1, 1),
      (Axis::DiagonalUp, Pos::new(9, 3), -1, 1),
    ];
    for (axis, start, dr, dc) in cases {
      let line = run_of(start, dr, dc, 5);
      let mut board = place_all(Board::new(), &line, Role::Black);
      // Block both ends so the run is exactly five.
      let before = step(start, -dr, -dc, 1);
      let after = step(start, dr, dc, 5);
      board = place_all(board, &[before, after], Role::White);

      for &anchor in &line {
        let win = board.check_winner(anchor.row, anchor.col, Role::Black).unwrap();
        assert_eq!(win.axis, axis);
        assert_eq!(win.role, Role::Black);
        assert_eq!(win.cells, line, "anchor {:?} on {:?}", anchor, axis);
      }
    }
  }

  #[test]
  fn test_six_in_row_also_wins() {
    let line = run_of(Pos::new(0, 0), 0, 1, 6);
    let board = place_all(Board::new(), &line, Role::White);
    let win = board.check_winner(0, 2, Role::White).unwrap();
    assert_eq!(win.cells.len(), 6);
    assert_eq!(win.cells, line);
  }

  #[test]
  fn test_blocked_four_is_not_a_win() {
    let line = run_of(Pos::new(4, 0), 0, 1, 4);
    let board = place_all(Board::new(), &line, Role::Black);
    let board = board.apply_move(4, 4, Role::White).unwrap();
    for p in &line {
      assert!(board.check_winner(p.row, p.col, Role::Black).is_none());
    }
  }

  #[test]
  fn test_check_winner_treats_anchor_as_hypothetical() {
    let board = board_with(&[
      (7, 5, Role::Black),
      (7, 6, Role::Black),
      (7, 7, Role::Black),
      (7, 8, Role::Black),
    ]);
    assert!(board.check_winner(7, 4, Role::Black).is_some());
    assert!(board.check_winner(7, 9, Role::Black).is_some());
    assert!(board.check_winner(7, 4, Role::White).is_none());
    assert!(board.is_empty_at(Pos::new(7, 4)));
  }

  #[test]
  fn test_first_axis_wins_when_two_complete() {
    // Playing (7,7) finishes both a row and a column.
    let mut stones = Vec::new();
    for k in [3, 4, 5, 6] {
      stones.push((7, k, Role::Black));
      stones.push((k, 7, Role::Black));
    }
    let board = board_with(&stones);
    let win = board.check_winner(7, 7, Role::Black).unwrap();
    assert_eq!(win.axis, Axis::Horizontal);
  }

  #[test]
  fn test_walk_stops_at_edges() {
    let line = run_of(Pos::new(14, 10), 0, 1, 5);
    let board = place_all(Board::new(), &line, Role::Black);
    let win = board.check_winner(14, 14, Role::Black).unwrap();
    assert_eq!(win.cells, line);
    assert!(board.check_winner(15, 14, Role::Black).is_none());
  }

  #[test]
  fn test_line_shape_counts_open_ends() {
    let board = board_with(&[(7, 6, Role::Black), (7, 8, Role::Black), (7, 9, Role::White)]);
    let shape = board.line_shape(Pos::new(7, 7), Role::Black, Axis::Horizontal);
    assert_eq!(shape, LineShape { run: 3, open_ends: 1 });

    let corner = board.line_shape(Pos::new(0, 0), Role::Black, Axis::Horizontal);
    assert_eq!(corner, LineShape { run: 1, open_ends: 1 });

    let lone = board.line_shape(Pos::new(3, 3), Role::White, Axis::DiagonalUp);
    assert_eq!(lone, LineShape { run: 1, open_ends: 2 });
  }

  #[test]
  fn test_empty_cells_row_major() {
    let board = board_with(&[(0, 0, Role::Black)]);
    let mut cells = board.empty_cells();
    assert_eq!(cells.next(), Some(Pos::new(0, 1)));
    assert_eq!(board.empty_cells().count(), BOARD_SIZE * BOARD_SIZE - 1);
    assert!(!board.is_full());
  }
}
