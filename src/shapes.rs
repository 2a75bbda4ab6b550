use crate::board::{LineShape, WIN_LENGTH};

/// Pattern a single line forms through a candidate cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
  Five,
  /// Four with at least one open end.
  FourOpen,
  ThreeOpen,
  ThreeClosed,
  TwoOpen,
  TwoClosed,
  OneOpen,
  None,
}

impl Shape {
  #[rustfmt::skip]
  pub fn classify(run: usize, open_ends: usize) -> Shape {
    match (run, open_ends) {
      (r, _) if r >= WIN_LENGTH => Shape::Five,
      (4, o) if o >= 1          => Shape::FourOpen,
      (3, 2)                    => Shape::ThreeOpen,
      (3, 1)                    => Shape::ThreeClosed,
      (2, 2)                    => Shape::TwoOpen,
      (2, 1)                    => Shape::TwoClosed,
      (1, 2)                    => Shape::OneOpen,
      _                         => Shape::None,
    }
  }
}

impl From<LineShape> for Shape {
  fn from(line: LineShape) -> Self {
    Shape::classify(line.run, line.open_ends)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_classify_table() {
    assert_eq!(Shape::classify(5, 0), Shape::Five);
    assert_eq!(Shape::classify(7, 2), Shape::Five);
    assert_eq!(Shape::classify(4, 1), Shape::FourOpen);
    assert_eq!(Shape::classify(4, 2), Shape::FourOpen);
    assert_eq!(Shape::classify(4, 0), Shape::None);
    assert_eq!(Shape::classify(3, 2), Shape::ThreeOpen);
    assert_eq!(Shape::classify(3, 1), Shape::ThreeClosed);
    assert_eq!(Shape::classify(3, 0), Shape::None);
    assert_eq!(Shape::classify(2, 2), Shape::TwoOpen);
    assert_eq!(Shape::classify(2, 1), Shape::TwoClosed);
    assert_eq!(Shape::classify(1, 2), Shape::OneOpen);
    assert_eq!(Shape::classify(1, 1), Shape::None);
  }
}
