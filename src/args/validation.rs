use reqwest::Url;
use std::time::Duration;
use std::{fs, path::PathBuf};

use super::types::{Args, CleanArgs};

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url
pub fn check_sink_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| format!("The sink url '{value}' is not valid: {e}"))?;
    let scheme = url.scheme().to_string();
    match scheme.as_str() {
        "http" | "https" => Ok(url),
        other => Err(format!("The sink url must be http or https, got '{other}'.")),
    }
}

/// # Errors
///
/// Will return `Err` if the directory is not readable
pub fn check_readable_dir(dir: &str) -> Result<String, String> {
    let path = PathBuf::from(dir);
    if !path.is_dir() || fs::read_dir(&path).is_err() {
        return Err(format!("The static directory '{dir}' is not readable."));
    }
    Ok(dir.to_string())
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if a timing option is out of range
    pub fn validate(self) -> Result<CleanArgs, String> {
        if self.http_timeout_secs == 0 {
            return Err("http timeout must be at least one second".to_string());
        }
        let golfer_cache_max_age = chrono::Duration::try_minutes(self.golfer_cache_minutes)
            .filter(|d| *d >= chrono::Duration::zero())
            .ok_or_else(|| {
                format!(
                    "golfer cache minutes must be zero or more, got {}",
                    self.golfer_cache_minutes
                )
            })?;
        let card_idle_max_age = chrono::Duration::try_minutes(self.card_idle_minutes)
            .filter(|d| *d > chrono::Duration::zero())
            .ok_or_else(|| {
                format!(
                    "card idle minutes must be at least one, got {}",
                    self.card_idle_minutes
                )
            })?;

        Ok(CleanArgs {
            sink_url: self.sink_url,
            bind: self.bind,
            static_dir: self.static_dir,
            sync_retries: self.sync_retries,
            retry_backoff: Duration::from_millis(self.retry_backoff_ms),
            http_timeout: Duration::from_secs(self.http_timeout_secs),
            golfer_cache_max_age,
            card_idle_max_age,
        })
    }
}
