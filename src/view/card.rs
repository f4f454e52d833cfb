use maud::{Markup, html};

use crate::controller::card::CardId;
use crate::model::{
    CONNECTION_ERROR_LABEL, GolferList, HOLES_PER_NINE, Hole, MAX_STROKES, NO_GOLFER,
};
use crate::mvu::scorecard::{Phase, ScorecardModel};

fn action(id: CardId, path: &str) -> String {
    format!("/card/{id}/{path}")
}

/// The swappable part of the page; every form posts back and replaces `#card`.
#[must_use]
pub fn render_card(model: &ScorecardModel, id: CardId) -> Markup {
    let (front, back) = model
        .round
        .as_ref()
        .map_or((0, 0), |r| (r.front_total(), r.back_total()));

    html! {
        div id="card" {
            @if let Some(notice) = &model.notice {
                p class="notice" role="status" { (notice) }
            }
            (render_golfer_select(model, id))
            (render_confirm_dialog(model, id))
            (render_start_dialog(model, id))
            div id="score-inputs" {
                (render_nine(model, id, Hole::all().take(HOLES_PER_NINE), "Out", "frontTotalDisplay", front))
                (render_nine(model, id, Hole::all().skip(HOLES_PER_NINE), "In", "backTotalDisplay", back))
            }
            p class="grand-total" {
                "Total: "
                span id="grandTotalDisplay" { (front.saturating_add(back)) }
            }
            @if model.phase == Phase::Fixing {
                button id="doneFixingBtn" type="button"
                    hx-post=(action(id, "done-fixing")) hx-target="#card" hx-swap="outerHTML" {
                    "Done Fixing"
                }
            }
            (render_final_dialog(model, id, front, back))
            p class="sync-status" {
                (model.syncs_dispatched) " dispatched, "
                (model.syncs_delivered) " sent ok, "
                (model.syncs_failed) " failed"
            }
        }
    }
}

fn render_golfer_select(model: &ScorecardModel, id: CardId) -> Markup {
    let chosen = model.selected_golfer.as_deref();
    let listed = chosen.is_some_and(|name| model.golfers.contains(name));

    html! {
        form hx-post=(action(id, "golfer")) hx-trigger="change" hx-target="#card" hx-swap="outerHTML" {
            label for="golfer" { "Golfer" }
            select id="golfer" name="golfer" disabled[model.golfer_locked()] {
                @match &model.golfers {
                    GolferList::Loading => {
                        option value=(NO_GOLFER) { "Loading..." }
                    }
                    GolferList::Unavailable => {
                        option value=(NO_GOLFER) { (CONNECTION_ERROR_LABEL) }
                    }
                    GolferList::Loaded(names) => {
                        option value=(NO_GOLFER) selected[chosen.is_none()] { "Select Golfer" }
                        @for name in names {
                            option value=(name) selected[chosen == Some(name.as_str())] { (name) }
                        }
                    }
                }
                @if let (Some(name), false) = (chosen, listed) {
                    option value=(name) selected { (name) }
                }
            }
        }
    }
}

fn render_confirm_dialog(model: &ScorecardModel, id: CardId) -> Markup {
    html! {
        dialog id="confirmDialog" open[model.phase == Phase::AwaitingConfirmation] {
            form hx-post=(action(id, "confirm")) hx-target="#card" hx-swap="outerHTML" {
                p {
                    "Are you "
                    span id="namePlaceholder" { (model.selected_golfer.as_deref().unwrap_or("")) }
                    "?"
                }
                button type="submit" name="answer" value="yes" { "Yes" }
                button type="submit" name="answer" value="no" { "No" }
            }
        }
    }
}

fn render_start_dialog(model: &ScorecardModel, id: CardId) -> Markup {
    html! {
        dialog id="startHoleDialog" open[model.phase == Phase::AwaitingStartHole] {
            form hx-post=(action(id, "start")) hx-target="#card" hx-swap="outerHTML" {
                @if let Some(alert) = &model.alert {
                    p class="alert" role="alert" { (alert) }
                }
                label for="startHoleInput" { "Starting hole" }
                input id="startHoleInput" name="start_hole" type="number" min="1" max="18" inputmode="numeric";
                button type="submit" { "Start" }
            }
        }
    }
}

fn render_nine(
    model: &ScorecardModel,
    id: CardId,
    holes: impl Iterator<Item = Hole>,
    label: &str,
    total_id: &str,
    total: u32,
) -> Markup {
    let holes: Vec<Hole> = holes.collect();
    html! {
        table class="styled-table" {
            thead {
                tr {
                    th { "Hole" }
                    @for hole in &holes {
                        th { (hole.number()) }
                    }
                    th { (label) }
                }
            }
            tbody {
                tr {
                    td { "Score" }
                    @for hole in &holes {
                        td { (render_hole_input(model, id, *hole)) }
                    }
                    td id=(total_id) { (total) }
                }
            }
        }
    }
}

fn render_hole_input(model: &ScorecardModel, id: CardId, hole: Hole) -> Markup {
    let strokes = model.round.as_ref().and_then(|r| r.strokes_for(hole));
    let enabled = model.field_enabled(hole);
    let class = match (enabled, strokes.is_some()) {
        (true, _) => "hole-input open",
        (false, true) => "hole-input played",
        (false, false) => "hole-input locked",
    };
    let field_id = hole.field_id();

    html! {
        input id=(field_id) hole-data=(field_id) class=(class) name="strokes"
            type="number" min="0" max=(MAX_STROKES) inputmode="numeric"
            value=[strokes] disabled[!enabled]
            hx-post=(action(id, "score")) hx-trigger="change"
            hx-vals=(format!(r#"{{"hole": "{field_id}"}}"#))
            hx-target="#card" hx-swap="outerHTML";
    }
}

fn render_final_dialog(model: &ScorecardModel, id: CardId, front: u32, back: u32) -> Markup {
    html! {
        dialog id="finalScoreDialog" open[model.phase == Phase::ReviewPending] {
            h3 { "Final Score" }
            p { "Front: " span id="finalFront" { (front) } }
            p { "Back: " span id="finalBack" { (back) } }
            p { "Total: " span id="finalTotal" { (front.saturating_add(back)) } }
            form hx-post=(action(id, "review")) hx-target="#card" hx-swap="outerHTML" {
                button type="submit" name="choice" value="fix" { "Fix" }
                button type="submit" name="choice" value="ok" { "OK" }
            }
        }
    }
}
