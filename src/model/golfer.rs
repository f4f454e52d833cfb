use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Select value meaning "no golfer chosen yet".
pub const NO_GOLFER: &str = "none";
/// Only option shown when the golfer list could not be fetched.
pub const CONNECTION_ERROR_LABEL: &str = "Error: Check Connection";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GolferList {
    Loading,
    Loaded(Vec<String>),
    Unavailable,
}

impl GolferList {
    #[must_use]
    pub fn names(&self) -> &[String] {
        match self {
            GolferList::Loaded(names) => names,
            GolferList::Loading | GolferList::Unavailable => &[],
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names().iter().any(|n| n == name)
    }
}

#[derive(Clone, Debug)]
struct CachedGolfers {
    names: Vec<String>,
    cached_time: DateTime<Utc>,
}

impl CachedGolfers {
    fn if_fresh(&self, now: DateTime<Utc>, max_age: Duration) -> Option<Vec<String>> {
        if now - self.cached_time < max_age {
            Some(self.names.clone())
        } else {
            None
        }
    }
}

/// Last golfer list the sink returned, used when a later fetch fails.
#[derive(Clone, Debug)]
pub struct GolferCache {
    inner: Arc<RwLock<Option<CachedGolfers>>>,
    max_age: Duration,
}

impl GolferCache {
    #[must_use]
    pub fn new(max_age: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
            max_age,
        }
    }

    pub async fn remember(&self, names: &[String]) {
        self.remember_at(names, Utc::now()).await;
    }

    pub async fn fallback(&self) -> Option<Vec<String>> {
        self.fallback_at(Utc::now()).await
    }

    async fn remember_at(&self, names: &[String], now: DateTime<Utc>) {
        let mut slot = self.inner.write().await;
        *slot = Some(CachedGolfers {
            names: names.to_vec(),
            cached_time: now,
        });
    }

    async fn fallback_at(&self, now: DateTime<Utc>) -> Option<Vec<String>> {
        let slot = self.inner.read().await;
        slot.as_ref().and_then(|c| c.if_fresh(now, self.max_age))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_cache_has_no_fallback() {
        let cache = GolferCache::new(Duration::minutes(60));
        assert_eq!(cache.fallback().await, None);
    }

    #[tokio::test]
    async fn fallback_expires() {
        let cache = GolferCache::new(Duration::minutes(60));
        let then = Utc::now();
        let names = vec!["Ann".to_string(), "Bo".to_string()];
        cache.remember_at(&names, then).await;

        assert_eq!(
            cache.fallback_at(then + Duration::minutes(59)).await,
            Some(names)
        );
        assert_eq!(cache.fallback_at(then + Duration::minutes(61)).await, None);
    }

    #[test]
    fn list_lookup() {
        let list = GolferList::Loaded(vec!["Ann".into()]);
        assert!(list.contains("Ann"));
        assert!(!GolferList::Unavailable.contains("Ann"));
        assert!(GolferList::Loading.names().is_empty());
    }
}
