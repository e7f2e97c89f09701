use url::Url;

use super::{absolute_url, selectors};
use crate::dom::Locator;
use crate::domain::card::CardRecord;
use crate::domain::text::normalize_opt;
use crate::error::{Result, ScrapeError};
use crate::ports::browser::PageDriver;

/// Read one rendered home card. Only the detail link is required.
pub async fn extract_card(page: &dyn PageDriver, card: &Locator, origin: &Url) -> Result<CardRecord> {
    let price = text_within(page, card, selectors::CARD_PRICE).await?;
    let beds = text_within(page, card, selectors::CARD_BEDS).await?;
    let baths = text_within(page, card, selectors::CARD_BATHS).await?;
    let sqft = text_within(page, card, selectors::CARD_SQFT).await?;
    let address = text_within(page, card, selectors::CARD_ADDRESS).await?;
    let title = normalize_opt(page.get_attribute(card, "title").await?.as_deref());

    let detail_url = attribute_within(page, card, selectors::CARD_ADDRESS, "href")
        .await?
        .and_then(|href| absolute_url(origin, &href))
        .ok_or_else(|| ScrapeError::MissingDetailLink {
            card: card.to_string(),
        })?;

    let image_url = attribute_within(page, card, selectors::CARD_IMAGE, "src")
        .await?
        .and_then(|src| absolute_url(origin, &src));

    Ok(CardRecord {
        title: title.or_else(|| address.clone()),
        price,
        beds,
        baths,
        sqft,
        address,
        detail_url,
        image_url,
    })
}

async fn text_within(page: &dyn PageDriver, card: &Locator, selector: &str) -> Result<Option<String>> {
    let text = page.inner_text(&card.locator(selector).first()).await?;
    Ok(normalize_opt(text.as_deref()))
}

async fn attribute_within(
    page: &dyn PageDriver,
    card: &Locator,
    selector: &str,
    name: &str,
) -> Result<Option<String>> {
    page.get_attribute(&card.locator(selector).first(), name).await
}
