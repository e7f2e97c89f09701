//! The extraction pipeline: card collection on the listing surface and
//! multi-source field extraction on each detail page.

pub mod card;
pub mod collector;
pub mod detail;
pub mod engagement;
pub mod house_info;
pub mod run;
pub mod selectors;

use url::Url;

use crate::config::types::ScraperConfig;
use crate::ports::reporter::Reporter;

/// Settings and collaborators shared by every pipeline stage.
pub struct ExtractContext<'a> {
    pub config: &'a ScraperConfig,
    pub origin: &'a Url,
    pub reporter: &'a dyn Reporter,
}

/// Resolve `href` against the site origin. Blank or unparseable links are `None`.
pub fn absolute_url(origin: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    origin.join(href).ok().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("https://www.redfin.com").unwrap()
    }

    #[test]
    fn relative_path_joins_origin() {
        assert_eq!(
            absolute_url(&origin(), "/CA/San-Jose/1-Main-St-95112/home/42").as_deref(),
            Some("https://www.redfin.com/CA/San-Jose/1-Main-St-95112/home/42")
        );
    }

    #[test]
    fn absolute_link_kept() {
        assert_eq!(
            absolute_url(&origin(), "https://ssl.cdn-redfin.com/photo/1.jpg").as_deref(),
            Some("https://ssl.cdn-redfin.com/photo/1.jpg")
        );
    }

    #[test]
    fn blank_link_is_none() {
        assert!(absolute_url(&origin(), "   ").is_none());
    }
}
