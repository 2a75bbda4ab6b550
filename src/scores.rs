use crate::shapes::Shape;

/// Score for each line pattern a move would create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiWeights {
  pub win: i32,
  pub four_open: i32,
  pub three_open: i32,
  pub three_closed: i32,
  pub two_open: i32,
  pub two_closed: i32,
  pub one_open: i32,
}

impl Default for AiWeights {
  #[rustfmt::skip]
  fn default() -> Self {
    Self {
      win:          100_000,
      four_open:     10_000,
      three_open:     2_000,
      three_closed:     500,
      two_open:         200,
      two_closed:        60,
      one_open:          10,
    }
  }
}

impl AiWeights {
  pub fn get(&self, shape: Shape) -> i32 {
    match shape {
      Shape::Five => self.win,
      Shape::FourOpen => self.four_open,
      Shape::ThreeOpen => self.three_open,
      Shape::ThreeClosed => self.three_closed,
      Shape::TwoOpen => self.two_open,
      Shape::TwoClosed => self.two_closed,
      Shape::OneOpen => self.one_open,
      Shape::None => 0,
    }
  }

  fn merged(mut self, overrides: &AiWeightsOverrides) -> Self {
    let fields = [
      (&mut self.win, overrides.win),
      (&mut self.four_open, overrides.four_open),
      (&mut self.three_open, overrides.three_open),
      (&mut self.three_closed, overrides.three_closed),
      (&mut self.two_open, overrides.two_open),
      (&mut self.two_closed, overrides.two_closed),
      (&mut self.one_open, overrides.one_open),
    ];
    for (slot, value) in fields {
      if let Some(v) = value {
        *slot = v;
      }
    }
    self
  }
}

/// Evaluator configuration. Built once via [`AiConfig::merged`] and never changed.
///
/// Values are not validated: negative or NaN weights are the caller's business.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiConfig {
  /// Pause before an AI move is shown. Only the front-end reads this.
  pub think_time_ms: u64,
  /// Multiplier on the opponent's pattern score at a cell.
  pub defend_weight: f64,
  /// Multiplier on the (negative) distance from the centre.
  pub center_weight: f64,
  pub weights: AiWeights,
}

impl Default for AiConfig {
  fn default() -> Self {
    Self {
      think_time_ms: 1000,
      defend_weight: 0.9,
      center_weight: 1.0,
      weights: AiWeights::default(),
    }
  }
}

/// Partial weight table; `None` keeps the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AiWeightsOverrides {
  pub win: Option<i32>,
  pub four_open: Option<i32>,
  pub three_open: Option<i32>,
  pub three_closed: Option<i32>,
  pub two_open: Option<i32>,
  pub two_closed: Option<i32>,
  pub one_open: Option<i32>,
}

/// Partial configuration; `None` keeps the default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AiConfigOverrides {
  pub think_time_ms: Option<u64>,
  pub defend_weight: Option<f64>,
  pub center_weight: Option<f64>,
  pub weights: AiWeightsOverrides,
}

impl AiConfig {
  /// Defaults with every `Some` field of `overrides` applied.
  /// Top-level fields replace outright; the weight table merges field by field.
  pub fn merged(overrides: &AiConfigOverrides) -> Self {
    let defaults = Self::default();
    Self {
      think_time_ms: overrides.think_time_ms.unwrap_or(defaults.think_time_ms),
      defend_weight: overrides.defend_weight.unwrap_or(defaults.defend_weight),
      center_weight: overrides.center_weight.unwrap_or(defaults.center_weight),
      weights: defaults.weights.merged(&overrides.weights),
    }
  }
}
