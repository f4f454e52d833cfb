use tracing::debug;

use crate::error::AppError;
use crate::model::{
    GolferList, Hole, NO_GOLFER, RoundState, ScoreBatch, ScoreEntry, parse_start_hole,
    parse_strokes,
};

mod scorecard_decode;
mod scorecard_effects;

pub use scorecard_decode::*;
pub use scorecard_effects::{Deps, SharedCard, run_effect};

pub const START_HOLE_ALERT: &str = "Please enter a valid starting hole number (1-18).";
pub const SUBMITTED_NOTICE: &str = "Round complete and scores submitted!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingGolfer,
    AwaitingConfirmation,
    AwaitingStartHole,
    InRound,
    ReviewPending,
    Fixing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewChoice {
    Fix,
    Ok,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorecardModel {
    pub phase: Phase,
    pub golfers: GolferList,
    pub selected_golfer: Option<String>,
    pub round: Option<RoundState>,
    pub alert: Option<String>,
    pub notice: Option<String>,
    pub syncs_dispatched: usize,
    pub syncs_delivered: usize,
    pub syncs_failed: usize,
}

impl Default for ScorecardModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ScorecardModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingGolfer,
            golfers: GolferList::Loading,
            selected_golfer: None,
            round: None,
            alert: None,
            notice: None,
            syncs_dispatched: 0,
            syncs_delivered: 0,
            syncs_failed: 0,
        }
    }

    /// Whether the input bound to `hole` accepts typing right now.
    #[must_use]
    pub fn field_enabled(&self, hole: Hole) -> bool {
        match (self.phase, &self.round) {
            (Phase::InRound, Some(round)) => round.current_hole() == Some(hole),
            (Phase::Fixing, Some(_)) => true,
            _ => false,
        }
    }

    #[must_use]
    pub fn golfer_locked(&self) -> bool {
        !matches!(
            self.phase,
            Phase::AwaitingGolfer | Phase::AwaitingConfirmation
        )
    }

    fn full_card_batch(&mut self) -> Option<ScoreBatch> {
        let golfer = self.selected_golfer.clone().unwrap_or_default();
        let round = self.round.as_mut()?;
        round.recompute_totals();
        Some(ScoreBatch::new(golfer, round.all_entries()))
    }

    fn batch(&self, scores: Vec<ScoreEntry>) -> ScoreBatch {
        ScoreBatch::new(self.selected_golfer.clone().unwrap_or_default(), scores)
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    GolfersLoaded(Vec<String>),
    GolfersUnavailable,
    GolferSelected(String),
    IdentityConfirmed(bool),
    StartHoleEntered(String),
    ScoreEntered { hole: Hole, raw: String },
    ReviewChosen(ReviewChoice),
    DoneFixing,
    SyncDispatched(usize),
    SyncSucceeded,
    SyncFailed(AppError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadGolfers,
    SyncBatch(ScoreBatch),
}

pub fn update(model: &mut ScorecardModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => {
            model.golfers = GolferList::Loading;
            vec![Effect::LoadGolfers]
        }
        Msg::GolfersLoaded(names) => {
            model.golfers = GolferList::Loaded(names);
            vec![]
        }
        Msg::GolfersUnavailable => {
            model.golfers = GolferList::Unavailable;
            vec![]
        }
        Msg::GolferSelected(name) => {
            if model.phase != Phase::AwaitingGolfer {
                debug!(phase = ?model.phase, "golfer change ignored");
                return vec![];
            }
            let name = name.trim();
            if name.is_empty() || name == NO_GOLFER {
                model.selected_golfer = None;
            } else {
                model.selected_golfer = Some(name.to_string());
                model.notice = None;
                model.phase = Phase::AwaitingConfirmation;
            }
            vec![]
        }
        Msg::IdentityConfirmed(yes) => {
            if model.phase != Phase::AwaitingConfirmation {
                return vec![];
            }
            if yes {
                model.phase = Phase::AwaitingStartHole;
            } else {
                model.selected_golfer = None;
                model.phase = Phase::AwaitingGolfer;
            }
            vec![]
        }
        Msg::StartHoleEntered(raw) => {
            if model.phase != Phase::AwaitingStartHole {
                return vec![];
            }
            match parse_start_hole(&raw) {
                Ok(start) => {
                    model.round = Some(RoundState::new(start));
                    model.alert = None;
                    model.phase = Phase::InRound;
                }
                Err(e) => {
                    debug!(error = %e, "start hole rejected");
                    model.alert = Some(START_HOLE_ALERT.to_string());
                }
            }
            vec![]
        }
        Msg::ScoreEntered { hole, raw } => match model.phase {
            Phase::InRound => enter_score(model, hole, &raw),
            Phase::Fixing => {
                if let Some(round) = model.round.as_mut() {
                    round.amend(hole, parse_strokes(&raw));
                }
                vec![]
            }
            _ => vec![],
        },
        Msg::ReviewChosen(choice) => {
            if model.phase != Phase::ReviewPending {
                return vec![];
            }
            match choice {
                ReviewChoice::Fix => {
                    model.phase = Phase::Fixing;
                    vec![]
                }
                ReviewChoice::Ok => submit(model),
            }
        }
        Msg::DoneFixing => {
            if model.phase != Phase::Fixing {
                return vec![];
            }
            model.phase = Phase::ReviewPending;
            model
                .full_card_batch()
                .map(Effect::SyncBatch)
                .into_iter()
                .collect()
        }
        Msg::SyncDispatched(holes) => {
            debug!(holes, "sync dispatched");
            model.syncs_dispatched += 1;
            vec![]
        }
        Msg::SyncSucceeded => {
            model.syncs_delivered += 1;
            vec![]
        }
        Msg::SyncFailed(e) => {
            debug!(error = %e, "sync failure recorded");
            model.syncs_failed += 1;
            vec![]
        }
    }
}

fn enter_score(model: &mut ScorecardModel, hole: Hole, raw: &str) -> Vec<Effect> {
    let Some(strokes) = parse_strokes(raw) else {
        debug!(%hole, raw, "score ignored, not a stroke count");
        return vec![];
    };
    let Some(round) = model.round.as_mut() else {
        return vec![];
    };
    let Some(recorded) = round.record(hole, strokes) else {
        debug!(%hole, "score ignored, not the current hole");
        return vec![];
    };

    if recorded.round_complete {
        model.phase = Phase::ReviewPending;
    }
    recorded
        .flush
        .map(|scores| Effect::SyncBatch(model.batch(scores)))
        .into_iter()
        .collect()
}

/// Final resync of the whole card, then a fresh card for the next golfer.
fn submit(model: &mut ScorecardModel) -> Vec<Effect> {
    let batch = model.full_card_batch();
    *model = ScorecardModel {
        notice: Some(SUBMITTED_NOTICE.to_string()),
        syncs_dispatched: model.syncs_dispatched,
        syncs_delivered: model.syncs_delivered,
        syncs_failed: model.syncs_failed,
        ..ScorecardModel::new()
    };

    let mut effects = vec![Effect::LoadGolfers];
    effects.extend(batch.map(Effect::SyncBatch));
    effects
}
