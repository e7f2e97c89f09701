use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScraperConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_list_url")]
    pub list_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Maximum scroll/pause cycles spent revealing lazily rendered cards.
    #[serde(default = "default_reveal_attempts")]
    pub reveal_attempts: u32,
    #[serde(default = "default_scroll_step")]
    pub scroll_step_px: i32,
    #[serde(default = "default_scroll_pause")]
    pub scroll_pause_ms: u64,
    #[serde(default = "default_selector_wait")]
    pub card_wait_timeout_ms: u64,
    #[serde(default = "default_navigation_timeout")]
    pub navigation_timeout_ms: u64,
    #[serde(default = "default_selector_wait")]
    pub price_wait_timeout_ms: u64,
    #[serde(default = "default_show_more_pause")]
    pub show_more_pause_ms: u64,
    #[serde(default)]
    pub engagement_retry: RetryPolicy,
}

impl ScraperConfig {
    pub fn scroll_pause(&self) -> Duration {
        Duration::from_millis(self.scroll_pause_ms)
    }

    pub fn card_wait_timeout(&self) -> Duration {
        Duration::from_millis(self.card_wait_timeout_ms)
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_millis(self.navigation_timeout_ms)
    }

    pub fn price_wait_timeout(&self) -> Duration {
        Duration::from_millis(self.price_wait_timeout_ms)
    }

    pub fn show_more_pause(&self) -> Duration {
        Duration::from_millis(self.show_more_pause_ms)
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            list_url: default_list_url(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
            request_timeout_secs: default_timeout(),
            limit: default_limit(),
            reveal_attempts: default_reveal_attempts(),
            scroll_step_px: default_scroll_step(),
            scroll_pause_ms: default_scroll_pause(),
            card_wait_timeout_ms: default_selector_wait(),
            navigation_timeout_ms: default_navigation_timeout(),
            price_wait_timeout_ms: default_selector_wait(),
            show_more_pause_ms: default_show_more_pause(),
            engagement_retry: RetryPolicy::default(),
        }
    }
}

/// Bounded retry: `retries` extra attempts, each preceded by `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RetryPolicy {
    #[serde(default = "default_engagement_retries")]
    pub retries: u32,
    #[serde(default = "default_engagement_delay")]
    pub delay_ms: u64,
}

impl RetryPolicy {
    pub const fn new(retries: u32, delay_ms: u64) -> Self {
        Self { retries, delay_ms }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(default_engagement_retries(), default_engagement_delay())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_true")]
    pub pretty: bool,
    #[serde(default = "default_true")]
    pub echo_stdout: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            pretty: true,
            echo_stdout: true,
        }
    }
}

fn default_base_url() -> String {
    "https://www.redfin.com".into()
}

fn default_list_url() -> String {
    "https://www.redfin.com/".into()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36".into()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.7".into()
}

fn default_timeout() -> u64 {
    60
}

fn default_limit() -> usize {
    10
}

fn default_reveal_attempts() -> u32 {
    10
}

fn default_scroll_step() -> i32 {
    1600
}

fn default_scroll_pause() -> u64 {
    1000
}

fn default_selector_wait() -> u64 {
    15_000
}

fn default_navigation_timeout() -> u64 {
    60_000
}

fn default_show_more_pause() -> u64 {
    250
}

fn default_engagement_retries() -> u32 {
    1
}

fn default_engagement_delay() -> u64 {
    800
}

fn default_output_path() -> String {
    "redfin_results.json".into()
}

fn default_true() -> bool {
    true
}
