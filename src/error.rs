use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("No home cards loaded on the listing page: {url}")]
    NoCardsFound { url: String },

    #[error("Unable to locate detail URL for home card {card}")]
    MissingDetailLink { card: String },

    #[error("Failed to load detail page ({}): {url}", describe_status(.status))]
    DetailPageLoadFailed { url: String, status: Option<u16> },

    #[error("Invalid CSS selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    #[error("Invalid scrape parameters: {reason}")]
    InvalidParams { reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl ScrapeError {
    /// Fatal errors abort the whole run; nothing inside the pipeline catches them.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::NoCardsFound { .. } | Self::MissingDetailLink { .. } | Self::DetailPageLoadFailed { .. }
        )
    }
}

fn describe_status(status: &Option<u16>) -> String {
    status.map_or_else(|| "no response".to_string(), |code| code.to_string())
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
