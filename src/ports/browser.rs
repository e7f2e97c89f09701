use std::time::Duration;

use async_trait::async_trait;

use crate::dom::Locator;
use crate::error::Result;

/// Navigation milestone a driver waits for before `navigate` returns. Both
/// surfaces are read as soon as the DOM is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitUntil {
    #[default]
    DomContentLoaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationResponse {
    pub status: u16,
}

impl NavigationResponse {
    /// 2xx and 3xx count as a loaded page.
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Found,
    TimedOut,
}

/// A browsing context that hands out one page at a time.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    async fn new_page(&self) -> Result<Box<dyn PageDriver>>;
}

/// Operations the extraction pipeline needs from a rendered page.
///
/// Every wait is bounded by the timeout passed in. Reads on a locator that
/// matches nothing return `None`/empty rather than an error; errors are
/// reserved for driver failures and invalid selectors.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// `Ok(None)` when the page produced no response at all.
    async fn navigate(
        &mut self,
        url: &str,
        wait_until: WaitUntil,
        timeout: Duration,
    ) -> Result<Option<NavigationResponse>>;

    async fn wait_for_selector(&mut self, locator: &Locator, timeout: Duration)
    -> Result<WaitOutcome>;

    async fn count(&self, locator: &Locator) -> Result<usize>;

    /// One pinned locator per current match, in document order.
    async fn query_all(&self, locator: &Locator) -> Result<Vec<Locator>> {
        let count = self.count(locator).await?;
        Ok((0..count).map(|i| locator.nth(i)).collect())
    }

    async fn inner_text(&self, locator: &Locator) -> Result<Option<String>>;

    async fn get_attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>>;

    async fn all_text_contents(&self, locator: &Locator) -> Result<Vec<String>>;

    async fn outer_html(&self, locator: &Locator) -> Result<Option<String>>;

    async fn is_enabled(&self, locator: &Locator) -> Result<bool>;

    async fn click(&mut self, locator: &Locator) -> Result<()>;

    async fn scroll_by(&mut self, dy: i32) -> Result<()>;

    async fn pause(&mut self, duration: Duration);

    /// Visible text of the whole page body.
    async fn page_text(&self) -> Result<String>;

    /// Release the page. Called on every exit path, errors included.
    async fn close(self: Box<Self>);
}
