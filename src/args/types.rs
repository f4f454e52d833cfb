use clap::Parser;
use reqwest::Url;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_SINK_URL: &str = "https://script.google.com/macros/s/AKfycbwYxffwZXmYDakQgGjFU0xAVtXegWKz_Ym6ApqsP_xIsDZdQD0ihxIXUbUiv0XtW-yZ3w/exec";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Spreadsheet endpoint: GET returns golfer names, POST receives score batches.
    #[arg(
        short = 's',
        long,
        value_name = "SINK_URL",
        default_value = DEFAULT_SINK_URL,
        value_parser = crate::args::validation::check_sink_url
    )]
    pub sink_url: Url,
    #[arg(short = 'b', long, value_name = "BIND_ADDR", default_value = "0.0.0.0:8081")]
    pub bind: SocketAddr,
    /// Stylesheet and service worker live here.
    #[arg(
        long,
        value_name = "STATIC_DIR",
        default_value = "./static",
        value_parser = crate::args::validation::check_readable_dir
    )]
    pub static_dir: String,
    /// Extra attempts for a batch whose request could not be sent. 0 means fire and forget.
    #[arg(long, value_name = "SYNC_RETRIES", default_value = "0")]
    pub sync_retries: u32,
    #[arg(long, value_name = "RETRY_BACKOFF_MS", default_value = "500")]
    pub retry_backoff_ms: u64,
    #[arg(long, value_name = "HTTP_TIMEOUT_SECS", default_value = "10")]
    pub http_timeout_secs: u64,
    /// How long the last good golfer list stands in when the sink is unreachable.
    #[arg(long, value_name = "GOLFER_CACHE_MINUTES", default_value = "60")]
    pub golfer_cache_minutes: i64,
    /// Scorecards untouched for this long are dropped from memory.
    #[arg(long, value_name = "CARD_IDLE_MINUTES", default_value = "360")]
    pub card_idle_minutes: i64,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub sink_url: Url,
    pub bind: SocketAddr,
    pub static_dir: String,
    pub sync_retries: u32,
    pub retry_backoff: Duration,
    pub http_timeout: Duration,
    pub golfer_cache_max_age: chrono::Duration,
    pub card_idle_max_age: chrono::Duration,
}
