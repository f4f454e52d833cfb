use crate::model::hole::{HOLES_IN_ROUND, HOLES_PER_NINE, Hole};
use crate::model::score::ScoreEntry;
use crate::model::sequence::{PlaySequence, play_sequence};

/// Pending entries are flushed to the sink once this many accumulate.
pub const BATCH_SIZE: usize = 4;

/// Everything that changes while one golfer plays one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundState {
    sequence: PlaySequence,
    cursor: usize,
    strokes: [Option<u32>; HOLES_IN_ROUND],
    front_total: u32,
    back_total: u32,
    pending: Vec<ScoreEntry>,
}

/// What happened when a score landed on the hole at the cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recorded {
    pub flush: Option<Vec<ScoreEntry>>,
    pub round_complete: bool,
}

impl RoundState {
    #[must_use]
    pub fn new(start: Hole) -> Self {
        Self {
            sequence: play_sequence(start),
            cursor: 0,
            strokes: [None; HOLES_IN_ROUND],
            front_total: 0,
            back_total: 0,
            pending: Vec::with_capacity(BATCH_SIZE),
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &PlaySequence {
        &self.sequence
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn current_hole(&self) -> Option<Hole> {
        self.sequence.get(self.cursor)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cursor >= HOLES_IN_ROUND
    }

    #[must_use]
    pub fn front_total(&self) -> u32 {
        self.front_total
    }

    #[must_use]
    pub fn back_total(&self) -> u32 {
        self.back_total
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.front_total.saturating_add(self.back_total)
    }

    #[must_use]
    pub fn pending(&self) -> &[ScoreEntry] {
        &self.pending
    }

    #[must_use]
    pub fn strokes_for(&self, hole: Hole) -> Option<u32> {
        self.strokes[slot(hole)]
    }

    /// Records `score` on `hole` if it is the hole at the cursor.
    ///
    /// Returns `None` (and changes nothing) for any other hole.
    pub fn record(&mut self, hole: Hole, score: u32) -> Option<Recorded> {
        if self.current_hole() != Some(hole) {
            return None;
        }

        self.strokes[slot(hole)] = Some(score);
        self.pending.push(ScoreEntry { hole, score });
        if hole.is_front_nine() {
            self.front_total = self.front_total.saturating_add(score);
        } else {
            self.back_total = self.back_total.saturating_add(score);
        }
        self.cursor += 1;

        let flush = if self.pending.len() == BATCH_SIZE
            || self.cursor == HOLES_PER_NINE
            || self.cursor == HOLES_IN_ROUND
        {
            Some(std::mem::take(&mut self.pending))
        } else {
            None
        };

        Some(Recorded {
            flush,
            round_complete: self.is_complete(),
        })
    }

    /// Overwrites one hole during the fix step; `None` blanks the field.
    pub fn amend(&mut self, hole: Hole, score: Option<u32>) {
        self.strokes[slot(hole)] = score;
        self.recompute_totals();
    }

    /// Rebuilds both nine totals from every recorded field.
    pub fn recompute_totals(&mut self) {
        let (front, back): (Vec<Hole>, Vec<Hole>) = Hole::all().partition(|h| h.is_front_nine());
        self.front_total = self.sum_of(&front);
        self.back_total = self.sum_of(&back);
    }

    fn sum_of(&self, holes: &[Hole]) -> u32 {
        holes
            .iter()
            .filter_map(|h| self.strokes_for(*h))
            .fold(0, u32::saturating_add)
    }

    /// The whole card in play order; blank fields are sent as 0.
    #[must_use]
    pub fn all_entries(&self) -> Vec<ScoreEntry> {
        self.sequence
            .holes()
            .iter()
            .map(|&hole| ScoreEntry {
                hole,
                score: self.strokes_for(hole).unwrap_or(0),
            })
            .collect()
    }
}

fn slot(hole: Hole) -> usize {
    usize::from(hole.number()) - 1
}
