use serde::{Deserialize, Serialize};

use crate::model::hole::Hole;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub hole: Hole,
    pub score: u32,
}

/// Body posted to the score sink: `{"golfer": .., "scores": [{"hole": .., "score": ..}]}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreBatch {
    pub golfer: String,
    pub scores: Vec<ScoreEntry>,
}

impl ScoreBatch {
    #[must_use]
    pub fn new(golfer: impl Into<String>, scores: Vec<ScoreEntry>) -> Self {
        Self {
            golfer: golfer.into(),
            scores,
        }
    }
}

/// Highest stroke count a hole field accepts.
pub const MAX_STROKES: u32 = 99;

/// Reads a stroke count typed into a hole field. Blank, non-numeric or
/// out-of-range text is `None`.
#[must_use]
pub fn parse_strokes(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|strokes| *strokes <= MAX_STROKES)
}
