use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::config::types::{RetryPolicy, ScraperConfig};
use crate::dom::{Document, Locator};
use crate::error::{Result, ScrapeError};
use crate::pipeline::ExtractContext;
use crate::ports::browser::{BrowserSession, NavigationResponse, PageDriver, WaitOutcome, WaitUntil};
use crate::ports::reporter::{Reporter, ScrapeEvent};

/// What a scripted page saw, kept after the page itself is closed.
#[derive(Debug, Default)]
pub struct PageLog {
    pub navigations: Vec<String>,
    pub scrolls: usize,
    pub pauses: Vec<Duration>,
    pub clicks: Vec<Locator>,
    pub text_reads: usize,
    pub closed: bool,
}

/// An in-memory page whose markup advances through scripted stages.
pub struct ScriptedPage {
    stages: Vec<String>,
    stage: usize,
    advance_on_scroll: bool,
    advance_on_pause: bool,
    on_click: Option<String>,
    response: Option<u16>,
    fail_outer_html: bool,
    fail_inner_text: bool,
    fail_is_enabled: bool,
    fail_click: bool,
    log: Arc<Mutex<PageLog>>,
}

impl ScriptedPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self::staged(vec![html.into()])
    }

    pub fn staged(stages: Vec<String>) -> Self {
        Self {
            stages,
            stage: 0,
            advance_on_scroll: false,
            advance_on_pause: false,
            on_click: None,
            response: Some(200),
            fail_outer_html: false,
            fail_inner_text: false,
            fail_is_enabled: false,
            fail_click: false,
            log: Arc::new(Mutex::new(PageLog::default())),
        }
    }

    /// Each scroll reveals the next stage.
    #[must_use]
    pub fn reveal_on_scroll(mut self) -> Self {
        self.advance_on_scroll = true;
        self
    }

    /// Each pause moves to the next stage (content streaming in).
    #[must_use]
    pub fn advance_on_pause(mut self) -> Self {
        self.advance_on_pause = true;
        self
    }

    /// Any click swaps the current markup for `html`.
    #[must_use]
    pub fn on_click(mut self, html: impl Into<String>) -> Self {
        self.on_click = Some(html.into());
        self
    }

    /// `None` simulates a navigation without any response.
    #[must_use]
    pub fn with_status(mut self, status: Option<u16>) -> Self {
        self.response = status;
        self
    }

    #[must_use]
    pub fn failing_outer_html(mut self) -> Self {
        self.fail_outer_html = true;
        self
    }

    #[must_use]
    pub fn failing_inner_text(mut self) -> Self {
        self.fail_inner_text = true;
        self
    }

    #[must_use]
    pub fn failing_is_enabled(mut self) -> Self {
        self.fail_is_enabled = true;
        self
    }

    /// Clicks are logged but fail, as when the element detaches mid-click.
    #[must_use]
    pub fn failing_click(mut self) -> Self {
        self.fail_click = true;
        self
    }

    pub fn log(&self) -> Arc<Mutex<PageLog>> {
        Arc::clone(&self.log)
    }

    fn document(&self) -> Document {
        Document::parse(self.stages.get(self.stage).map_or("", String::as_str))
    }

    fn advance(&mut self) {
        if self.stage + 1 < self.stages.len() {
            self.stage += 1;
        }
    }
}

#[async_trait]
impl PageDriver for ScriptedPage {
    async fn navigate(
        &mut self,
        url: &str,
        _wait_until: WaitUntil,
        _timeout: Duration,
    ) -> Result<Option<NavigationResponse>> {
        self.log.lock().unwrap().navigations.push(url.to_string());
        Ok(self.response.map(|status| NavigationResponse { status }))
    }

    async fn wait_for_selector(
        &mut self,
        locator: &Locator,
        _timeout: Duration,
    ) -> Result<WaitOutcome> {
        if self.document().count(locator)? > 0 {
            Ok(WaitOutcome::Found)
        } else {
            Ok(WaitOutcome::TimedOut)
        }
    }

    async fn count(&self, locator: &Locator) -> Result<usize> {
        self.document().count(locator)
    }

    async fn inner_text(&self, locator: &Locator) -> Result<Option<String>> {
        if self.fail_inner_text {
            return Err(ScrapeError::Config("scripted inner_text failure".into()));
        }
        self.document().inner_text(locator)
    }

    async fn get_attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>> {
        self.document().attribute(locator, name)
    }

    async fn all_text_contents(&self, locator: &Locator) -> Result<Vec<String>> {
        self.document().text_contents(locator)
    }

    async fn outer_html(&self, locator: &Locator) -> Result<Option<String>> {
        if self.fail_outer_html {
            return Err(ScrapeError::Config("scripted outer_html failure".into()));
        }
        self.document().outer_html(locator)
    }

    async fn is_enabled(&self, locator: &Locator) -> Result<bool> {
        if self.fail_is_enabled {
            return Err(ScrapeError::Config("scripted is_enabled failure".into()));
        }
        Ok(self.document().is_enabled(locator)?.unwrap_or(false))
    }

    async fn click(&mut self, locator: &Locator) -> Result<()> {
        self.log.lock().unwrap().clicks.push(locator.clone());
        if self.fail_click {
            return Err(ScrapeError::Config("scripted click failure".into()));
        }
        if let Some(html) = self.on_click.take() {
            self.stages[self.stage] = html;
        }
        Ok(())
    }

    async fn scroll_by(&mut self, _dy: i32) -> Result<()> {
        self.log.lock().unwrap().scrolls += 1;
        if self.advance_on_scroll {
            self.advance();
        }
        Ok(())
    }

    async fn pause(&mut self, duration: Duration) {
        self.log.lock().unwrap().pauses.push(duration);
        if self.advance_on_pause {
            self.advance();
        }
    }

    async fn page_text(&self) -> Result<String> {
        self.log.lock().unwrap().text_reads += 1;
        Ok(self.document().body_text())
    }

    async fn close(self: Box<Self>) {
        self.log.lock().unwrap().closed = true;
    }
}

/// Hands out scripted pages in the order they were queued.
#[derive(Default)]
pub struct ScriptedBrowser {
    pages: Mutex<VecDeque<ScriptedPage>>,
}

impl ScriptedBrowser {
    pub fn new(pages: Vec<ScriptedPage>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
        }
    }
}

#[async_trait]
impl BrowserSession for ScriptedBrowser {
    async fn new_page(&self) -> Result<Box<dyn PageDriver>> {
        let page = self
            .pages
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ScrapeError::Config("no scripted page left".into()))?;
        Ok(Box::new(page))
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ScrapeEvent>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<ScrapeEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: ScrapeEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Scraper settings with every pause and wait zeroed.
pub fn fast_config() -> ScraperConfig {
    ScraperConfig {
        scroll_pause_ms: 0,
        card_wait_timeout_ms: 0,
        price_wait_timeout_ms: 0,
        show_more_pause_ms: 0,
        engagement_retry: RetryPolicy::new(1, 0),
        ..ScraperConfig::default()
    }
}

pub fn origin() -> Url {
    Url::parse("https://www.redfin.com").unwrap()
}

pub fn context<'a>(
    config: &'a ScraperConfig,
    origin: &'a Url,
    reporter: &'a RecordingReporter,
) -> ExtractContext<'a> {
    ExtractContext {
        config,
        origin,
        reporter,
    }
}

/// A home card in listing-surface markup.
pub fn card_html(index: usize) -> String {
    format!(
        r#"<div data-rf-test-name="basicNode-homeCard" title="Home {index}">
            <div class="bp-Homecard__Photo"><img src="/photo/{index}.jpg"></div>
            <span class="bp-Homecard__Price--value">${index}00,000</span>
            <span class="bp-Homecard__Stats--beds">{index} beds</span>
            <span class="bp-Homecard__Stats--baths">2 baths</span>
            <span class="bp-Homecard__Stats--sqft">1,{index}00 sq ft</span>
            <a class="bp-Homecard__Address" href="/CA/Oakland/{index}-Elm-St/home/{index}">{index} Elm St, Oakland, CA</a>
        </div>"#
    )
}

pub fn listing_html(cards: usize) -> String {
    let body: String = (1..=cards).map(card_html).collect();
    format!("<html><body><main>{body}</main></body></html>")
}

/// A detail page carrying every field the orchestrator reads.
pub fn detail_html() -> String {
    r##"<html><body>
        <div class="homeStatus"><span class="statusLabel">Active</span></div>
        <div data-rf-test-id="abp-price"><div class="statsValue price">$1,250,000</div></div>
        <div data-rf-test-id="abp-monthly-payment-entry-point-estimate">Est. $7,812/mo</div>
        <div data-rf-test-id="abp-beds"><div>4</div><div>beds</div></div>
        <div data-rf-test-id="abp-baths">3 baths</div>
        <div data-rf-test-id="abp-sqFt">2,400 sq ft</div>
        <div data-rf-test-id="abp-homeinfo-homeaddress">742 Evergreen Ter,
            Springfield, OR 97403</div>
        <div>12 days on Redfin • 1,340 views • 58 favorites</div>
        <div data-rf-test-id="house-info">
            <div id="marketing-remarks-scroll"><p>Bright corner lot.</p><p>New roof.</p></div>
            <div class="KeyDetailsTable">
                <div class="keyDetails-row"><span class="valueType">On Redfin</span><span class="valueText">12 days</span></div>
                <div class="keyDetails-row"><span class="valueType">Property Type</span><span class="valueText">Single-family</span></div>
                <div class="keyDetails-row"><span class="valueType">Year Built</span><span class="valueText">1989</span></div>
            </div>
            <div data-rf-test-id="agentInfoItem-redfinAgentDisplay">
                <div class="agent-basic-details--heading"><a href="/real-estate-agents/jordan-lee">Jordan Lee</a></div>
                <div class="agent-basic-details--broker"><span>Redfin</span></div>
            </div>
            <div class="listingInfoSection">
                <div class="data-quality">Listing updated: <time>Oct 1, 2026 at 9:14am</time> · <a href="#">4 minutes ago</a></div>
                <span class="ListingSource--dataSourceName">RMLS</span>
                <span class="ListingSource--mlsId">#24618873</span>
            </div>
        </div>
    </body></html>"##
        .to_string()
}
