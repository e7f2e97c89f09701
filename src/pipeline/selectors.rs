// Listing surface
pub const HOME_CARD: &str = "div[data-rf-test-name='basicNode-homeCard']";
pub const CARD_PRICE: &str = ".bp-Homecard__Price--value";
pub const CARD_BEDS: &str = ".bp-Homecard__Stats--beds";
pub const CARD_BATHS: &str = ".bp-Homecard__Stats--baths";
pub const CARD_SQFT: &str = ".bp-Homecard__Stats--sqft";
pub const CARD_ADDRESS: &str = "a.bp-Homecard__Address";
pub const CARD_IMAGE: &str = ".bp-Homecard__Photo img";

// Detail page
pub const DETAIL_PRICE_BLOCK: &str = "[data-rf-test-id='abp-price']";
pub const DETAIL_PRICE: &str = "[data-rf-test-id='abp-price'] .statsValue.price";
pub const DETAIL_MONTHLY_PAYMENT: &str =
    "[data-rf-test-id='abp-monthly-payment-entry-point-estimate']";
pub const DETAIL_BEDS: &str = "[data-rf-test-id='abp-beds']";
pub const DETAIL_BATHS: &str = "[data-rf-test-id='abp-baths']";
pub const DETAIL_SQFT: &str = "[data-rf-test-id='abp-sqFt']";
pub const DETAIL_ADDRESS: &str = "[data-rf-test-id='abp-homeinfo-homeaddress']";
pub const HOUSE_INFO: &str = "[data-rf-test-id='house-info']";
pub const STATUS_CANDIDATES: &str = "[class*='status' i]";
pub const BUTTONS: &str = "button";
pub const SHOW_MORE_LABEL: &str = "show more";

// House-info fragment
pub const DESCRIPTION: &str = "#marketing-remarks-scroll";
pub const KEY_DETAIL_ROWS: &str = ".KeyDetailsTable .keyDetails-row";
pub const KEY_DETAIL_LABEL: &str = ".valueType";
pub const KEY_DETAIL_VALUE: &str = ".valueText";
pub const AGENT_BLOCK: &str = "[data-rf-test-id='agentInfoItem-redfinAgentDisplay']";
pub const AGENT_NAME: &str = ".agent-basic-details--heading a";
pub const AGENT_BROKER: &str = ".agent-basic-details--broker span";
pub const LISTING_INFO: &str = ".listingInfoSection";
pub const LISTING_UPDATED: &str = ".data-quality time";
pub const REDFIN_CHECKED: &str = ".data-quality a";
pub const LISTING_SOURCE: &str = ".ListingSource--dataSourceName";
pub const MLS_ID: &str = ".ListingSource--mlsId";

/// Key-details label that duplicates the engagement counter.
pub const ON_REDFIN_LABEL: &str = "on redfin";
