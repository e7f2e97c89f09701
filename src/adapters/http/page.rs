use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::dom::{Document, Locator};
use crate::error::Result;
use crate::ports::browser::{NavigationResponse, PageDriver, WaitOutcome, WaitUntil};

/// A page backed by the markup of its last navigation.
///
/// Nothing renders after the fetch, so scrolling and clicking change nothing
/// and waits succeed or time out immediately.
pub struct HttpPage {
    http: Client,
    url: Option<String>,
    html: String,
}

impl HttpPage {
    pub fn new(http: Client) -> Self {
        Self {
            http,
            url: None,
            html: String::new(),
        }
    }

    fn snapshot(&self) -> Document {
        Document::parse(&self.html)
    }
}

#[async_trait]
impl PageDriver for HttpPage {
    async fn navigate(
        &mut self,
        url: &str,
        _wait_until: WaitUntil,
        timeout: Duration,
    ) -> Result<Option<NavigationResponse>> {
        debug!(url, "Fetching page");
        self.html.clear();
        self.url = None;

        let response = match self.http.get(url).timeout(timeout).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, url, "HTTP request failed");
                return Ok(None);
            }
        };

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        if status >= 400 {
            warn!(status, url, "Page returned an error status");
        }
        // A body cut short is no usable page, same as no response at all
        self.html = match response.text().await {
            Ok(html) => html,
            Err(e) => {
                warn!(error = %e, status, url, "Failed to read page body");
                return Ok(None);
            }
        };
        debug!(status, bytes = self.html.len(), "Page loaded");
        self.url = Some(final_url);

        Ok(Some(NavigationResponse { status }))
    }

    async fn wait_for_selector(
        &mut self,
        locator: &Locator,
        _timeout: Duration,
    ) -> Result<WaitOutcome> {
        if self.snapshot().count(locator)? > 0 {
            Ok(WaitOutcome::Found)
        } else {
            debug!(%locator, "No match in fetched markup");
            Ok(WaitOutcome::TimedOut)
        }
    }

    async fn count(&self, locator: &Locator) -> Result<usize> {
        self.snapshot().count(locator)
    }

    async fn inner_text(&self, locator: &Locator) -> Result<Option<String>> {
        self.snapshot().inner_text(locator)
    }

    async fn get_attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>> {
        self.snapshot().attribute(locator, name)
    }

    async fn all_text_contents(&self, locator: &Locator) -> Result<Vec<String>> {
        self.snapshot().text_contents(locator)
    }

    async fn outer_html(&self, locator: &Locator) -> Result<Option<String>> {
        self.snapshot().outer_html(locator)
    }

    async fn is_enabled(&self, locator: &Locator) -> Result<bool> {
        Ok(self.snapshot().is_enabled(locator)?.unwrap_or(false))
    }

    async fn click(&mut self, locator: &Locator) -> Result<()> {
        debug!(%locator, "Click has no effect on a fetched page");
        Ok(())
    }

    async fn scroll_by(&mut self, _dy: i32) -> Result<()> {
        Ok(())
    }

    async fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }

    async fn page_text(&self) -> Result<String> {
        Ok(self.snapshot().body_text())
    }

    async fn close(self: Box<Self>) {
        debug!(url = self.url.as_deref().unwrap_or("about:blank"), "Page closed");
    }
}
