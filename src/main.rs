use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rusty_scorecard::args;
use rusty_scorecard::controller::card::{AppState, CardStore, routes};
use rusty_scorecard::controller::sink::HttpSink;
use rusty_scorecard::model::GolferCache;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let sink = HttpSink::new(
        args.sink_url.clone(),
        args.http_timeout,
        args.sync_retries,
        args.retry_backoff,
    )?;
    info!(sink = %sink.url(), bind = %args.bind, retries = args.sync_retries, "starting scorecard");

    let state = AppState {
        store: CardStore::new(args.card_idle_max_age),
        sink: Arc::new(sink),
        golfer_cache: GolferCache::new(args.golfer_cache_max_age),
        static_dir: args.static_dir.clone(),
    };
    let static_dir = args.static_dir.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .configure(routes)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(args.bind)?
    .run()
    .await?;
    Ok(())
}
