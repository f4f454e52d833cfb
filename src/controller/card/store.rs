use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::error::AppError;
use crate::mvu::scorecard::{ScorecardModel, SharedCard};

pub type CardId = u64;

#[derive(Clone)]
struct StoredCard {
    card: SharedCard,
    last_touched: DateTime<Utc>,
}

impl StoredCard {
    fn is_idle(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now - self.last_touched >= max_age
    }
}

/// Every open scorecard, one per browser page.
///
/// Cards nobody has touched for `idle_max_age` are dropped the next time a
/// card is created. A submitted card is reset in place and keeps its id.
#[derive(Clone)]
pub struct CardStore {
    cards: Arc<RwLock<HashMap<CardId, StoredCard>>>,
    next_id: Arc<AtomicU64>,
    idle_max_age: Duration,
}

impl CardStore {
    #[must_use]
    pub fn new(idle_max_age: Duration) -> Self {
        Self {
            cards: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(0)),
            idle_max_age,
        }
    }

    pub async fn create(&self) -> CardId {
        self.create_at(Utc::now()).await
    }

    /// # Errors
    ///
    /// Will return `Err` if no card has this id
    pub async fn get(&self, id: CardId) -> Result<SharedCard, AppError> {
        self.get_at(id, Utc::now()).await
    }

    pub async fn len(&self) -> usize {
        self.cards.read().await.len()
    }

    async fn create_at(&self, now: DateTime<Utc>) -> CardId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let card = Arc::new(Mutex::new(ScorecardModel::new()));

        let mut cards = self.cards.write().await;
        let before = cards.len();
        cards.retain(|_, stored| !stored.is_idle(now, self.idle_max_age));
        if cards.len() < before {
            debug!(evicted = before - cards.len(), "idle scorecards dropped");
        }
        cards.insert(
            id,
            StoredCard {
                card,
                last_touched: now,
            },
        );
        id
    }

    async fn get_at(&self, id: CardId, now: DateTime<Utc>) -> Result<SharedCard, AppError> {
        let mut cards = self.cards.write().await;
        let stored = cards
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("scorecard {id}")))?;
        stored.last_touched = now;
        Ok(Arc::clone(&stored.card))
    }
}
