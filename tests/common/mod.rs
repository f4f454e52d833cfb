#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rusty_scorecard::AppError;
use rusty_scorecard::controller::card::{AppState, CardStore};
use rusty_scorecard::controller::sink::ScoreSink;
use rusty_scorecard::model::{GolferCache, ScoreBatch};

/// In-memory stand-in for the spreadsheet endpoint.
pub struct RecordingSink {
    golfers: Mutex<Result<Vec<String>, AppError>>,
    batches: Mutex<Vec<ScoreBatch>>,
    fail_syncs: bool,
}

impl RecordingSink {
    pub fn with_golfers(names: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            golfers: Mutex::new(Ok(names.iter().map(ToString::to_string).collect())),
            batches: Mutex::new(vec![]),
            fail_syncs: false,
        })
    }

    pub fn offline() -> Arc<Self> {
        Arc::new(Self {
            golfers: Mutex::new(Err(AppError::Network("connection refused".into()))),
            batches: Mutex::new(vec![]),
            fail_syncs: true,
        })
    }

    pub fn go_offline(&self) {
        *self.golfers.lock().unwrap() = Err(AppError::Network("connection refused".into()));
    }

    pub fn batches(&self) -> Vec<ScoreBatch> {
        self.batches.lock().unwrap().clone()
    }

    /// Syncs run in the background; poll until `n` have landed.
    pub async fn wait_for_batches(&self, n: usize) -> Vec<ScoreBatch> {
        for _ in 0..200 {
            let seen = self.batches();
            if seen.len() >= n {
                return seen;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("expected {n} batches, saw {}", self.batches().len());
    }
}

#[async_trait]
impl ScoreSink for RecordingSink {
    async fn fetch_golfer_names(&self) -> Result<Vec<String>, AppError> {
        self.golfers.lock().unwrap().clone()
    }

    async fn sync_batch(&self, batch: &ScoreBatch) -> Result<(), AppError> {
        if self.fail_syncs {
            return Err(AppError::Network("connection refused".into()));
        }
        self.batches.lock().unwrap().push(batch.clone());
        Ok(())
    }
}

pub fn app_state(sink: Arc<RecordingSink>) -> AppState {
    AppState {
        store: CardStore::new(chrono::Duration::hours(6)),
        sink,
        golfer_cache: GolferCache::new(chrono::Duration::minutes(60)),
        static_dir: "./static".to_string(),
    }
}
