use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::model::ScoreBatch;

/// The remote spreadsheet endpoint scores are written to.
#[async_trait]
pub trait ScoreSink: Send + Sync {
    async fn fetch_golfer_names(&self) -> Result<Vec<String>, AppError>;
    async fn sync_batch(&self, batch: &ScoreBatch) -> Result<(), AppError>;
}

#[derive(Debug, Clone)]
pub struct HttpSink {
    client: Client,
    url: Url,
    retries: u32,
    backoff: Duration,
}

impl HttpSink {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(
        url: Url,
        timeout: Duration,
        retries: u32,
        backoff: Duration,
    ) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url,
            retries,
            backoff,
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ScoreSink for HttpSink {
    async fn fetch_golfer_names(&self) -> Result<Vec<String>, AppError> {
        let resp = self.client.get(self.url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Network(format!("HTTP error! status: {status}")));
        }
        let body = resp.text().await?;
        let names = parse_golfer_names(serde_json::from_str(&body)?)?;
        info!(count = names.len(), "golfers loaded");
        Ok(names)
    }

    /// Posts the batch as plain text JSON. The response is not inspected:
    /// once the request goes out without a transport error it counts as sent.
    async fn sync_batch(&self, batch: &ScoreBatch) -> Result<(), AppError> {
        let body = serde_json::to_string(batch)?;
        let mut attempt = 0;
        loop {
            let sent = self
                .client
                .post(self.url.clone())
                .header(CONTENT_TYPE, "text/plain;charset=utf-8")
                .body(body.clone())
                .send()
                .await;
            match sent {
                Ok(resp) => {
                    debug!(status = %resp.status(), "sink answered");
                    info!(golfer = %batch.golfer, holes = batch.scores.len(), "synced batch");
                    return Ok(());
                }
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    warn!(attempt, error = %e, "batch sync failed, retrying");
                    tokio::time::sleep(self.backoff).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// The sink answers a GET with a JSON array of golfer names.
///
/// # Errors
///
/// Will return `Err` if the value is not an array of strings
pub fn parse_golfer_names(value: Value) -> Result<Vec<String>, AppError> {
    let Value::Array(items) = value else {
        return Err(AppError::Parse("golfer list is not an array".into()));
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::String(name) => Ok(name),
            other => Err(AppError::Parse(format!("golfer name is not a string: {other}"))),
        })
        .collect()
}
