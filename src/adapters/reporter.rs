use tracing::{debug, error, info, warn};

use crate::ports::reporter::{Reporter, ScrapeEvent};

/// Logs scrape events: aborts at error, soft timeouts and degraded reads at
/// warn, progress at info, engagement diagnostics at debug.
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: ScrapeEvent) {
        match event {
            ScrapeEvent::CollectingCards { limit, url } => {
                info!(limit, %url, "Collecting home cards");
            }
            ScrapeEvent::CardsWaitTimedOut { url } => {
                warn!(%url, "Timed out waiting for home cards");
            }
            ScrapeEvent::CardsRendered { available, using } => {
                info!(available, using, "Home cards rendered");
            }
            ScrapeEvent::DetailStarted { index, total, url } => {
                info!("Scraping detail {index}/{total}: {url}");
            }
            ScrapeEvent::PriceWaitTimedOut { url } => {
                warn!(%url, "Timed out waiting for price block");
            }
            ScrapeEvent::FieldReadFailed { field, url, reason } => {
                warn!(field, %url, %reason, "Field read failed");
            }
            ScrapeEvent::EngagementMissing { url, snippet } => match snippet {
                Some(snippet) => debug!(%url, %snippet, "Engagement stats not found"),
                None => debug!(%url, "Engagement stats not found; no 'on Redfin' text"),
            },
            ScrapeEvent::RunFinished { records } => {
                info!(records, "Scrape finished");
            }
            ScrapeEvent::RunAborted { reason, fatal: true } => {
                error!(%reason, "Scrape aborted; no records kept");
            }
            ScrapeEvent::RunAborted { reason, fatal: false } => {
                error!(%reason, "Scrape stopped by a driver or setup error");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_event_is_accepted() {
        let reporter = TracingReporter;
        reporter.report(ScrapeEvent::CardsRendered {
            available: 3,
            using: 2,
        });
        reporter.report(ScrapeEvent::EngagementMissing {
            url: "https://www.redfin.com/home/1".into(),
            snippet: Some("on Redfin".into()),
        });
        reporter.report(ScrapeEvent::EngagementMissing {
            url: "https://www.redfin.com/home/1".into(),
            snippet: None,
        });
        reporter.report(ScrapeEvent::RunAborted {
            reason: "no property cards found".into(),
            fatal: true,
        });
    }
}
