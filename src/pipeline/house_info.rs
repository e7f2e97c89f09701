use url::Url;

use super::{absolute_url, selectors};
use crate::dom::{Document, Locator};
use crate::domain::detail::{
    AgentInfo, HouseInfo, KeyDetails, LISTING_UPDATED_LABEL, ListingInfo, MLS_ID_LABEL,
    REDFIN_CHECKED_LABEL, SOURCE_LABEL,
};
use crate::domain::text::normalize_opt;
use crate::error::Result;

/// Parse a captured house-info snapshot on its own and pull the description,
/// key-details table, agent, and listing provenance out of it.
///
/// Each piece is independent: a missing block leaves only that piece empty.
pub fn extract_house_info(markup: &str, origin: &Url) -> Result<HouseInfo> {
    let doc = Document::parse_fragment(markup);
    Ok(HouseInfo {
        description: normalize_opt(
            doc.joined_text(&Locator::new(selectors::DESCRIPTION), " ")?
                .as_deref(),
        ),
        key_details: key_details(&doc)?,
        agent: agent(&doc, origin)?,
        listing: listing_info(&doc)?,
    })
}

fn key_details(doc: &Document) -> Result<KeyDetails> {
    let mut details = KeyDetails::new();
    let rows = Locator::new(selectors::KEY_DETAIL_ROWS);
    for index in 0..doc.count(&rows)? {
        let row = rows.nth(index);
        let label = doc.joined_text(&row.locator(selectors::KEY_DETAIL_LABEL).first(), "")?;
        let value = doc.joined_text(&row.locator(selectors::KEY_DETAIL_VALUE).first(), " ")?;
        let (Some(label), Some(value)) = (normalize_opt(label.as_deref()), value) else {
            continue;
        };
        if label.eq_ignore_ascii_case(selectors::ON_REDFIN_LABEL) {
            continue;
        }
        details.insert(label, normalize_opt(Some(&value)).unwrap_or_default());
    }
    Ok(details)
}

fn agent(doc: &Document, origin: &Url) -> Result<AgentInfo> {
    let block = Locator::new(selectors::AGENT_BLOCK).first();
    if doc.count(&block)? == 0 {
        return Ok(AgentInfo::default());
    }

    let name_link = block.locator(selectors::AGENT_NAME).first();
    let name = normalize_opt(doc.joined_text(&name_link, "")?.as_deref());
    let profile_url = doc
        .attribute(&name_link, "href")?
        .and_then(|href| absolute_url(origin, &href));
    let broker = normalize_opt(
        doc.joined_text(&block.locator(selectors::AGENT_BROKER).first(), " ")?
            .as_deref(),
    );
    Ok(AgentInfo::new(name, profile_url, broker))
}

fn listing_info(doc: &Document) -> Result<ListingInfo> {
    let block = Locator::new(selectors::LISTING_INFO).first();
    if doc.count(&block)? == 0 {
        return Ok(ListingInfo::default());
    }

    let labelled = |selector: &str, label: &str| -> Result<Option<String>> {
        let text = doc.joined_text(&block.locator(selector).first(), "")?;
        Ok(normalize_opt(text.as_deref()).map(|t| format!("{label}{t}")))
    };

    let mls_id = doc
        .joined_text(&block.locator(selectors::MLS_ID).first(), "")?
        .and_then(|raw| normalize_opt(Some(raw.trim().trim_start_matches('#'))))
        .map(|id| format!("{MLS_ID_LABEL}{id}"));

    Ok(ListingInfo {
        updated: labelled(selectors::LISTING_UPDATED, LISTING_UPDATED_LABEL)?,
        checked: labelled(selectors::REDFIN_CHECKED, REDFIN_CHECKED_LABEL)?,
        source: labelled(selectors::LISTING_SOURCE, SOURCE_LABEL)?,
        mls_id,
    })
}
