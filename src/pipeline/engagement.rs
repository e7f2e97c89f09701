use super::ExtractContext;
use crate::config::types::RetryPolicy;
use crate::domain::engagement::{EngagementStats, diagnostic_window, match_engagement};
use crate::ports::browser::PageDriver;
use crate::ports::reporter::ScrapeEvent;

/// Match the engagement counters in `body_text`, re-reading the page after a
/// pause for each retry the policy allows. A miss is reported, not raised.
pub async fn extract_engagement(
    page: &mut dyn PageDriver,
    ctx: &ExtractContext<'_>,
    url: &str,
    body_text: String,
    policy: RetryPolicy,
) -> Option<EngagementStats> {
    let mut text = body_text;
    let mut stats = match_engagement(&text);
    let mut retries = 0;

    while stats.is_none() && retries < policy.retries {
        retries += 1;
        page.pause(policy.delay()).await;
        match page.page_text().await {
            Ok(fresh) => text = fresh,
            Err(e) => {
                ctx.reporter.report(ScrapeEvent::FieldReadFailed {
                    field: "engagement",
                    url: url.to_string(),
                    reason: e.to_string(),
                });
                break;
            }
        }
        stats = match_engagement(&text);
    }

    if stats.is_none() {
        ctx.reporter.report(ScrapeEvent::EngagementMissing {
            url: url.to_string(),
            snippet: diagnostic_window(&text),
        });
    }
    stats
}
