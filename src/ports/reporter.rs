/// Observable moments of a scrape run. Soft timeouts and degraded reads are
/// reported here instead of failing the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeEvent {
    CollectingCards { limit: usize, url: String },
    CardsWaitTimedOut { url: String },
    CardsRendered { available: usize, using: usize },
    DetailStarted { index: usize, total: usize, url: String },
    PriceWaitTimedOut { url: String },
    FieldReadFailed { field: &'static str, url: String, reason: String },
    EngagementMissing { url: String, snippet: Option<String> },
    RunFinished { records: usize },
    RunAborted { reason: String, fatal: bool },
}

pub trait Reporter: Send + Sync {
    fn report(&self, event: ScrapeEvent);
}

/// Discards every event.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _event: ScrapeEvent) {}
}
