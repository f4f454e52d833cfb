use actix_web::http::header;
use actix_web::web::{self, Data};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rusty_scorecard::AppError;
use rusty_scorecard::controller::sink::{HttpSink, ScoreSink};
use rusty_scorecard::model::{Hole, ScoreBatch, ScoreEntry};

type Seen = Arc<Mutex<Vec<(String, serde_json::Value)>>>;

async fn record(req: HttpRequest, body: String, seen: Data<Seen>) -> HttpResponse {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let json = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    seen.lock().unwrap().push((content_type, json));
    HttpResponse::Ok().body("ok")
}

/// Starts a throwaway sink on a random local port and returns its url.
fn spawn_sink(get: fn() -> HttpResponse, seen: Seen) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(seen.clone()))
            .route("/exec", web::get().to(move || async move { get() }))
            .route("/exec", web::post().to(record))
    })
    .listen(listener)
    .unwrap()
    .workers(1)
    .run();
    actix_web::rt::spawn(server);
    format!("http://127.0.0.1:{port}/exec")
}

/// Reads one request off the socket: headers, then `content-length` body bytes.
fn drain_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).unwrap_or(0);
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(end) = text.find("\r\n\r\n") {
            let body_len = text[..end]
                .lines()
                .find_map(|l| {
                    let (name, value) = l.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                return;
            }
        }
    }
}

/// A sink that hangs up without answering the first `drops` connections,
/// then answers 200. Returns its url and the number of connections seen.
fn spawn_flaky_sink(drops: usize) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let attempts = Arc::new(AtomicUsize::new(0));
    let seen = attempts.clone();
    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            drain_request(&mut stream);
            let n = seen.fetch_add(1, Ordering::SeqCst) + 1;
            if n > drops {
                let _ = stream.write_all(
                    b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\nok",
                );
            }
        }
    });
    (format!("http://127.0.0.1:{port}/exec"), attempts)
}

fn sink_for(url: &str, retries: u32) -> HttpSink {
    HttpSink::new(
        url.parse().unwrap(),
        Duration::from_secs(5),
        retries,
        Duration::from_millis(10),
    )
    .unwrap()
}

#[actix_web::test]
async fn test2_fetches_golfer_names() {
    let url = spawn_sink(|| HttpResponse::Ok().json(["Ann", "Bo"]), Seen::default());
    let names = sink_for(&url, 0).fetch_golfer_names().await.unwrap();
    assert_eq!(names, vec!["Ann", "Bo"]);
}

#[actix_web::test]
async fn test2_golfer_errors() {
    let url = spawn_sink(|| HttpResponse::Ok().json(serde_json::json!({"oops": 1})), Seen::default());
    assert!(matches!(
        sink_for(&url, 0).fetch_golfer_names().await,
        Err(AppError::Parse(_))
    ));

    let url = spawn_sink(|| HttpResponse::InternalServerError().finish(), Seen::default());
    assert!(matches!(
        sink_for(&url, 0).fetch_golfer_names().await,
        Err(AppError::Network(_))
    ));
}

#[actix_web::test]
async fn test2_posts_batch_as_plain_text_json() {
    let seen = Seen::default();
    let url = spawn_sink(|| HttpResponse::Ok().finish(), seen.clone());
    let batch = ScoreBatch::new(
        "Ann",
        vec![
            ScoreEntry { hole: Hole::new(1).unwrap(), score: 4 },
            ScoreEntry { hole: Hole::new(2).unwrap(), score: 5 },
        ],
    );

    sink_for(&url, 0).sync_batch(&batch).await.unwrap();

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "text/plain;charset=utf-8");
    assert_eq!(
        seen[0].1,
        serde_json::json!({"golfer": "Ann", "scores": [{"hole": 1, "score": 4}, {"hole": 2, "score": 5}]})
    );
}

#[actix_web::test]
async fn test2_unreachable_sink_fails_after_retries() {
    // grab a free port, then close it so nothing answers
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let sink = sink_for(&format!("http://127.0.0.1:{port}/exec"), 2);
    let batch = ScoreBatch::new("Ann", vec![]);
    assert!(matches!(sink.sync_batch(&batch).await, Err(AppError::Network(_))));
}

#[actix_web::test]
async fn test2_retries_until_the_sink_answers() {
    let (url, attempts) = spawn_flaky_sink(2);
    let batch = ScoreBatch::new("Ann", vec![ScoreEntry { hole: Hole::new(1).unwrap(), score: 4 }]);

    sink_for(&url, 2).sync_batch(&batch).await.unwrap();
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[actix_web::test]
async fn test2_gives_up_after_the_configured_retries() {
    let (url, attempts) = spawn_flaky_sink(usize::MAX);
    let batch = ScoreBatch::new("Ann", vec![ScoreEntry { hole: Hole::new(1).unwrap(), score: 4 }]);

    let result = sink_for(&url, 2).sync_batch(&batch).await;
    assert!(matches!(result, Err(AppError::Network(_))));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);

    let (url, attempts) = spawn_flaky_sink(usize::MAX);
    assert!(sink_for(&url, 0).sync_batch(&batch).await.is_err());
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}
