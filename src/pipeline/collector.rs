use super::card::extract_card;
use super::{ExtractContext, selectors};
use crate::dom::Locator;
use crate::domain::card::CardRecord;
use crate::error::{Result, ScrapeError};
use crate::ports::browser::{PageDriver, WaitOutcome, WaitUntil};
use crate::ports::reporter::ScrapeEvent;

/// Load the listing surface, scroll until `limit` cards render or the reveal
/// budget runs out, then read the first `limit` cards in document order.
pub async fn collect_cards(
    page: &mut dyn PageDriver,
    ctx: &ExtractContext<'_>,
    limit: usize,
) -> Result<Vec<CardRecord>> {
    let config = ctx.config;
    let url = config.list_url.as_str();
    let cards = Locator::new(selectors::HOME_CARD);

    page.navigate(url, WaitUntil::DomContentLoaded, config.navigation_timeout())
        .await?;

    if page.wait_for_selector(&cards, config.card_wait_timeout()).await? == WaitOutcome::TimedOut {
        ctx.reporter.report(ScrapeEvent::CardsWaitTimedOut {
            url: url.to_string(),
        });
    }

    for _ in 0..config.reveal_attempts {
        if page.count(&cards).await? >= limit {
            break;
        }
        page.scroll_by(config.scroll_step_px).await?;
        page.pause(config.scroll_pause()).await;
    }

    let available = page.count(&cards).await?;
    if available == 0 {
        return Err(ScrapeError::NoCardsFound {
            url: url.to_string(),
        });
    }

    let using = limit.min(available);
    ctx.reporter
        .report(ScrapeEvent::CardsRendered { available, using });

    let mut records = Vec::with_capacity(using);
    for index in 0..using {
        records.push(extract_card(&*page, &cards.nth(index), ctx.origin).await?);
    }
    Ok(records)
}
