use std::sync::Arc;

use chrono::Utc;
use url::Url;

use super::ExtractContext;
use super::collector;
use super::detail::extract_detail;
use crate::config::types::ScraperConfig;
use crate::domain::card::CardRecord;
use crate::domain::detail::{DetailRecord, ScrapedHome};
use crate::error::{Result, ScrapeError};
use crate::ports::browser::BrowserSession;
use crate::ports::reporter::{Reporter, ScrapeEvent};

/// Runs the listing collector and then one detail extraction per card, each
/// on its own page from the session.
pub struct RedfinScraper {
    session: Box<dyn BrowserSession>,
    config: ScraperConfig,
    origin: Url,
    reporter: Arc<dyn Reporter>,
}

impl RedfinScraper {
    pub fn new(
        session: Box<dyn BrowserSession>,
        config: ScraperConfig,
        reporter: Arc<dyn Reporter>,
    ) -> Result<Self> {
        let origin = Url::parse(&config.base_url)?;
        Ok(Self {
            session,
            config,
            origin,
            reporter,
        })
    }

    fn context(&self) -> ExtractContext<'_> {
        ExtractContext {
            config: &self.config,
            origin: &self.origin,
            reporter: self.reporter.as_ref(),
        }
    }

    /// Collect up to `limit` cards and scrape the detail page behind each.
    ///
    /// Records come back in card order with 1-based ids. The first fatal
    /// error ends the run; nothing collected so far is returned.
    pub async fn scrape(&self, limit: usize) -> Result<Vec<ScrapedHome>> {
        if limit == 0 {
            return Err(ScrapeError::InvalidParams {
                reason: "limit must be positive".into(),
            });
        }

        match self.run(limit).await {
            Ok(homes) => {
                self.reporter
                    .report(ScrapeEvent::RunFinished { records: homes.len() });
                Ok(homes)
            }
            Err(e) => {
                self.reporter.report(ScrapeEvent::RunAborted {
                    reason: e.to_string(),
                    fatal: e.is_fatal(),
                });
                Err(e)
            }
        }
    }

    async fn run(&self, limit: usize) -> Result<Vec<ScrapedHome>> {
        self.reporter.report(ScrapeEvent::CollectingCards {
            limit,
            url: self.config.list_url.clone(),
        });
        let cards = self.collect_cards(limit).await?;

        let total = cards.len();
        let mut homes = Vec::with_capacity(total);
        for (index, card) in cards.into_iter().enumerate() {
            self.reporter.report(ScrapeEvent::DetailStarted {
                index: index + 1,
                total,
                url: card.detail_url.clone(),
            });
            let detail = self.scrape_detail(&card.detail_url).await?;
            homes.push(ScrapedHome {
                id: index + 1,
                card,
                detail,
                scraped_at: Utc::now(),
            });
        }
        Ok(homes)
    }

    /// Collect cards on a fresh page.
    pub async fn collect_cards(&self, limit: usize) -> Result<Vec<CardRecord>> {
        let mut page = self.session.new_page().await?;
        let result = collector::collect_cards(page.as_mut(), &self.context(), limit).await;
        page.close().await;
        result
    }

    /// Extract one detail page on a fresh page.
    pub async fn scrape_detail(&self, url: &str) -> Result<DetailRecord> {
        let mut page = self.session.new_page().await?;
        let result = extract_detail(page.as_mut(), &self.context(), url).await;
        page.close().await;
        result
    }
}
