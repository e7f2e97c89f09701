use super::engagement::extract_engagement;
use super::house_info::extract_house_info;
use super::{ExtractContext, selectors};
use crate::dom::Locator;
use crate::domain::detail::{DetailRecord, HouseInfo};
use crate::domain::status::classify_status;
use crate::domain::text::{normalize, normalize_opt};
use crate::error::{Result, ScrapeError};
use crate::ports::browser::{PageDriver, WaitOutcome, WaitUntil};
use crate::ports::reporter::ScrapeEvent;

const SHOW_MORE_FIELD: &str = "show_more";

/// Open one detail page and merge every field source into a record.
///
/// Only a failed load is fatal. Each field read that errors is reported and
/// left empty so the rest of the page still comes through.
pub async fn extract_detail(
    page: &mut dyn PageDriver,
    ctx: &ExtractContext<'_>,
    url: &str,
) -> Result<DetailRecord> {
    let config = ctx.config;
    let response = page
        .navigate(url, WaitUntil::DomContentLoaded, config.navigation_timeout())
        .await?;
    match response {
        Some(resp) if resp.is_success() => {}
        other => {
            return Err(ScrapeError::DetailPageLoadFailed {
                url: url.to_string(),
                status: other.map(|r| r.status),
            });
        }
    }

    let price_block = Locator::new(selectors::DETAIL_PRICE_BLOCK);
    if page
        .wait_for_selector(&price_block, config.price_wait_timeout())
        .await?
        == WaitOutcome::TimedOut
    {
        ctx.reporter.report(ScrapeEvent::PriceWaitTimedOut {
            url: url.to_string(),
        });
    }

    expand_description(page, ctx, url).await;

    let body_text = page.page_text().await.unwrap_or_else(|e| {
        report_failure(ctx, "body_text", url, &e);
        String::new()
    });

    let mut record = DetailRecord {
        price: read_text(&*page, ctx, url, "price", selectors::DETAIL_PRICE).await,
        monthly_payment: read_text(
            &*page,
            ctx,
            url,
            "monthly_payment",
            selectors::DETAIL_MONTHLY_PAYMENT,
        )
        .await,
        beds: read_text(&*page, ctx, url, "beds", selectors::DETAIL_BEDS).await,
        baths: read_text(&*page, ctx, url, "baths", selectors::DETAIL_BATHS).await,
        sqft: read_text(&*page, ctx, url, "sqft", selectors::DETAIL_SQFT).await,
        address: read_text(&*page, ctx, url, "address", selectors::DETAIL_ADDRESS).await,
        ..DetailRecord::default()
    };

    record.set_house_info(house_info(&*page, ctx, url).await);

    let candidates = page
        .all_text_contents(&Locator::new(selectors::STATUS_CANDIDATES))
        .await
        .unwrap_or_else(|e| {
            report_failure(ctx, "status_badge", url, &e);
            Vec::new()
        });
    record.status_badge = classify_status(&candidates, &body_text);

    let stats = extract_engagement(page, ctx, url, body_text, config.engagement_retry).await;
    record.set_engagement(stats);

    Ok(record)
}

/// Click the first enabled "show more" button, if any, so the full
/// description is in the page before the house-info snapshot. Failures are
/// reported and otherwise ignored.
async fn expand_description(page: &mut dyn PageDriver, ctx: &ExtractContext<'_>, url: &str) {
    let buttons = Locator::new(selectors::BUTTONS);
    let labels = match page.all_text_contents(&buttons).await {
        Ok(labels) => labels,
        Err(e) => {
            report_failure(ctx, SHOW_MORE_FIELD, url, &e);
            return;
        }
    };
    let Some(index) = labels
        .iter()
        .position(|label| normalize(label).to_lowercase().contains(selectors::SHOW_MORE_LABEL))
    else {
        return;
    };

    let button = buttons.nth(index);
    match page.is_enabled(&button).await {
        Ok(true) => {}
        Ok(false) => return,
        Err(e) => {
            report_failure(ctx, SHOW_MORE_FIELD, url, &e);
            return;
        }
    }
    if let Err(e) = page.click(&button).await {
        report_failure(ctx, SHOW_MORE_FIELD, url, &e);
        return;
    }
    page.pause(ctx.config.show_more_pause()).await;
}

async fn read_text(
    page: &dyn PageDriver,
    ctx: &ExtractContext<'_>,
    url: &str,
    field: &'static str,
    selector: &str,
) -> Option<String> {
    match page.inner_text(&Locator::new(selector).first()).await {
        Ok(text) => normalize_opt(text.as_deref()),
        Err(e) => {
            report_failure(ctx, field, url, &e);
            None
        }
    }
}

async fn house_info(page: &dyn PageDriver, ctx: &ExtractContext<'_>, url: &str) -> HouseInfo {
    let snapshot = match page
        .outer_html(&Locator::new(selectors::HOUSE_INFO).first())
        .await
    {
        Ok(Some(markup)) => markup,
        Ok(None) => return HouseInfo::default(),
        Err(e) => {
            report_failure(ctx, "house_info", url, &e);
            return HouseInfo::default();
        }
    };
    extract_house_info(&snapshot, ctx.origin).unwrap_or_else(|e| {
        report_failure(ctx, "house_info", url, &e);
        HouseInfo::default()
    })
}

fn report_failure(ctx: &ExtractContext<'_>, field: &'static str, url: &str, error: &ScrapeError) {
    ctx.reporter.report(ScrapeEvent::FieldReadFailed {
        field,
        url: url.to_string(),
        reason: error.to_string(),
    });
}
