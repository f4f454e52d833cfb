use actix_files::NamedFile;
use actix_web::http::header;
use actix_web::web::{self, Data, Form, Path};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use super::store::{CardId, CardStore};
use crate::controller::sink::ScoreSink;
use crate::error::AppError;
use crate::model::{GolferCache, GolferList};
use crate::mvu::runtime::run_scorecard;
use crate::mvu::scorecard::{
    ConfirmForm, Deps, GolferForm, Msg, ReviewForm, ScoreForm, SharedCard, StartHoleForm,
};
use crate::view::card::render_card;
use crate::view::index::render_index_page;

pub const PAGE_TITLE: &str = "Scorecard";

/// Shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub store: CardStore,
    pub sink: Arc<dyn ScoreSink>,
    pub golfer_cache: GolferCache,
    pub static_dir: String,
}

impl AppState {
    fn deps(&self, card: SharedCard) -> Deps {
        Deps {
            sink: Arc::clone(&self.sink),
            golfer_cache: self.golfer_cache.clone(),
            card,
        }
    }
}

fn error_response(e: &AppError) -> HttpResponse {
    match e {
        AppError::NotFound(_) => HttpResponse::NotFound().json(json!({"error": e.to_string()})),
        AppError::Validation(_) => {
            HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
        }
        _ => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn index(state: Data<AppState>) -> impl Responder {
    let id = state.store.create().await;
    info!(card = id, "new scorecard");
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/card/{id}")))
        .finish()
}

pub async fn card_page(state: Data<AppState>, id: Path<CardId>) -> HttpResponse {
    let id = id.into_inner();
    let card = match state.store.get(id).await {
        Ok(card) => card,
        Err(e) => return error_response(&e),
    };

    let mut model = card.lock().await;
    if model.golfers == GolferList::Loading {
        let deps = state.deps(Arc::clone(&card));
        run_scorecard(&mut model, Msg::PageLoad, &deps).await;
    }
    let markup = render_index_page(PAGE_TITLE, &model, id);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// Applies one message to a card and answers with the re-rendered fragment.
async fn dispatch(state: &AppState, id: CardId, msg: Result<Msg, AppError>) -> HttpResponse {
    let msg = match msg {
        Ok(msg) => msg,
        Err(e) => return error_response(&e),
    };
    let card = match state.store.get(id).await {
        Ok(card) => card,
        Err(e) => return error_response(&e),
    };

    let mut model = card.lock().await;
    let deps = state.deps(Arc::clone(&card));
    run_scorecard(&mut model, msg, &deps).await;
    HttpResponse::Ok()
        .content_type("text/html")
        .body(render_card(&model, id).into_string())
}

pub async fn select_golfer(
    state: Data<AppState>,
    id: Path<CardId>,
    form: Form<GolferForm>,
) -> HttpResponse {
    dispatch(&state, id.into_inner(), Ok(form.into_inner().into())).await
}

pub async fn confirm_golfer(
    state: Data<AppState>,
    id: Path<CardId>,
    form: Form<ConfirmForm>,
) -> HttpResponse {
    dispatch(&state, id.into_inner(), Ok(form.into_inner().into())).await
}

pub async fn start_round(
    state: Data<AppState>,
    id: Path<CardId>,
    form: Form<StartHoleForm>,
) -> HttpResponse {
    dispatch(&state, id.into_inner(), Ok(form.into_inner().into())).await
}

pub async fn enter_score(
    state: Data<AppState>,
    id: Path<CardId>,
    form: Form<ScoreForm>,
) -> HttpResponse {
    dispatch(&state, id.into_inner(), Msg::try_from(form.into_inner())).await
}

pub async fn review(
    state: Data<AppState>,
    id: Path<CardId>,
    form: Form<ReviewForm>,
) -> HttpResponse {
    dispatch(&state, id.into_inner(), Msg::try_from(form.into_inner())).await
}

pub async fn done_fixing(state: Data<AppState>, id: Path<CardId>) -> HttpResponse {
    dispatch(&state, id.into_inner(), Ok(Msg::DoneFixing)).await
}

/// Served from the root so the worker's scope covers the whole site.
pub async fn service_worker(state: Data<AppState>) -> actix_web::Result<NamedFile> {
    let path = std::path::Path::new(&state.static_dir).join("service-worker.js");
    Ok(NamedFile::open(path)?)
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(HttpResponse::Ok))
        .route("/service-worker.js", web::get().to(service_worker))
        .route("/card/{id}", web::get().to(card_page))
        .route("/card/{id}/golfer", web::post().to(select_golfer))
        .route("/card/{id}/confirm", web::post().to(confirm_golfer))
        .route("/card/{id}/start", web::post().to(start_round))
        .route("/card/{id}/score", web::post().to(enter_score))
        .route("/card/{id}/review", web::post().to(review))
        .route("/card/{id}/done-fixing", web::post().to(done_fixing));
}
