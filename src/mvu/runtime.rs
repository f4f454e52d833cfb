use crate::mvu::scorecard::{Deps, Msg, ScorecardModel, run_effect, update};

/// Runs the MVU loop for one card: seeds with `init_msg` and drains effects.
///
/// Batch syncs are handed to the runtime in the background, so this only
/// waits on effects that feed the page (the golfer list).
pub async fn run_scorecard(model: &mut ScorecardModel, init_msg: Msg, deps: &Deps) {
    let mut effects = update(model, init_msg);
    while let Some(effect) = effects.pop() {
        let msg = run_effect(effect, deps).await;
        effects.extend(update(model, msg));
    }
}
