use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, warn};

use crate::controller::sink::ScoreSink;
use crate::model::GolferCache;
use crate::mvu::scorecard::{Effect, Msg, ScorecardModel, update};

pub type SharedCard = Arc<Mutex<ScorecardModel>>;

#[derive(Clone)]
pub struct Deps {
    pub sink: Arc<dyn ScoreSink>,
    pub golfer_cache: GolferCache,
    /// The card the effects belong to; background syncs report back here.
    pub card: SharedCard,
}

pub async fn run_effect(effect: Effect, deps: &Deps) -> Msg {
    match effect {
        Effect::LoadGolfers => match deps.sink.fetch_golfer_names().await {
            Ok(names) => {
                deps.golfer_cache.remember(&names).await;
                Msg::GolfersLoaded(names)
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch golfer list");
                match deps.golfer_cache.fallback().await {
                    Some(names) => Msg::GolfersLoaded(names),
                    None => Msg::GolfersUnavailable,
                }
            }
        },
        Effect::SyncBatch(batch) => {
            let holes = batch.scores.len();
            let sink = Arc::clone(&deps.sink);
            let card = Arc::clone(&deps.card);
            tokio::spawn(async move {
                let outcome = match sink.sync_batch(&batch).await {
                    Ok(()) => Msg::SyncSucceeded,
                    Err(e) => {
                        error!(golfer = %batch.golfer, holes = batch.scores.len(), error = %e, "batch sync failed");
                        Msg::SyncFailed(e)
                    }
                };
                let mut model = card.lock().await;
                update(&mut model, outcome);
            });
            Msg::SyncDispatched(holes)
        }
    }
}
