use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;

pub const HOLES_IN_ROUND: usize = 18;
pub const HOLES_PER_NINE: usize = 9;

pub const ALL_HOLES: [Hole; HOLES_IN_ROUND] = {
    let mut holes = [Hole(1); HOLES_IN_ROUND];
    let mut i = 0;
    while i < HOLES_IN_ROUND {
        holes[i] = Hole(i as u8 + 1);
        i += 1;
    }
    holes
};

/// A hole number, always in `1..=18`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "u8")]
pub struct Hole(u8);

impl Hole {
    /// # Errors
    ///
    /// Will return `Err` if `n` is outside `1..=18`
    pub fn new(n: u8) -> Result<Self, AppError> {
        Self::try_from(i64::from(n))
    }

    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_front_nine(self) -> bool {
        self.0 <= 9
    }

    /// Id of the input field bound to this hole, e.g. `"14h"`.
    #[must_use]
    pub fn field_id(self) -> String {
        format!("{}h", self.0)
    }

    /// Parses a field id (`"7h"`) or a bare number (`"7"`).
    ///
    /// # Errors
    ///
    /// Will return `Err` if the value is not a hole number in `1..=18`
    pub fn from_field_id(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_suffix('h').unwrap_or(trimmed);
        let n: i64 = digits
            .parse()
            .map_err(|_| AppError::Validation(format!("not a hole: '{raw}'")))?;
        Self::try_from(n)
    }

    pub fn all() -> impl Iterator<Item = Hole> {
        ALL_HOLES.into_iter()
    }
}

impl TryFrom<i64> for Hole {
    type Error = AppError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match u8::try_from(n) {
            Ok(h @ 1..=18) => Ok(Hole(h)),
            _ => Err(AppError::Validation(format!("hole {n} is outside 1-18"))),
        }
    }
}

impl From<Hole> for u8 {
    fn from(h: Hole) -> Self {
        h.0
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reads the starting hole typed into the start dialog.
///
/// # Errors
///
/// Will return `Err` if the text is not an integer in `1..=18`
pub fn parse_start_hole(raw: &str) -> Result<Hole, AppError> {
    let n: i64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("'{raw}' is not a number")))?;
    Hole::try_from(n)
}
