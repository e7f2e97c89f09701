use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

use super::page::HttpPage;
use crate::config::types::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::ports::browser::{BrowserSession, PageDriver};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// One HTTP client shared by every page, so cookies set by the listing
/// surface carry over to detail pages.
pub struct HttpBrowser {
    http: Client,
}

impl HttpBrowser {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language).map_err(|e| {
                ScrapeError::Config(format!("invalid accept_language header: {e}"))
            })?,
        );

        let http = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .cookie_store(true)
            .build()?;

        Ok(Self { http })
    }
}

#[async_trait]
impl BrowserSession for HttpBrowser {
    async fn new_page(&self) -> Result<Box<dyn PageDriver>> {
        Ok(Box::new(HttpPage::new(self.http.clone())))
    }
}
