use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::card::CardRecord;
use super::engagement::EngagementStats;

/// Everything extracted from one detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub status_badge: Option<String>,
    pub price: Option<String>,
    pub monthly_payment: Option<String>,
    pub beds: Option<String>,
    pub baths: Option<String>,
    pub sqft: Option<String>,
    pub address: Option<String>,
    pub on_redfin: Option<String>,
    pub views: Option<String>,
    pub favorites: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub key_details: KeyDetails,
    pub agent_name: Option<String>,
    pub agent_broker: Option<String>,
    pub agent_profile_url: Option<String>,
    pub listing_updated: Option<String>,
    pub redfin_checked: Option<String>,
    pub mls_source: Option<String>,
    pub mls_id: Option<String>,
}

impl DetailRecord {
    /// Copy the three engagement counters in, or clear all three.
    pub fn set_engagement(&mut self, stats: Option<EngagementStats>) {
        let (on_redfin, views, favorites) = match stats {
            Some(s) => (Some(s.on_redfin), Some(s.views), Some(s.favorites)),
            None => (None, None, None),
        };
        self.on_redfin = on_redfin;
        self.views = views;
        self.favorites = favorites;
    }

    /// Copy the fields pulled from the house-info fragment.
    pub fn set_house_info(&mut self, info: HouseInfo) {
        self.description = info.description;
        self.key_details = info.key_details;
        self.agent_name = info.agent.name;
        self.agent_profile_url = info.agent.profile_url;
        self.agent_broker = info.agent.broker;
        self.listing_updated = info.listing.updated;
        self.redfin_checked = info.listing.checked;
        self.mls_source = info.listing.source;
        self.mls_id = info.listing.mls_id;
    }
}

/// Output of the house-info fragment extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseInfo {
    pub description: Option<String>,
    pub key_details: KeyDetails,
    pub agent: AgentInfo,
    pub listing: ListingInfo,
}

/// Listing agent identity. The profile link only exists alongside a name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentInfo {
    pub name: Option<String>,
    pub profile_url: Option<String>,
    pub broker: Option<String>,
}

impl AgentInfo {
    pub fn new(name: Option<String>, profile_url: Option<String>, broker: Option<String>) -> Self {
        let profile_url = if name.is_some() { profile_url } else { None };
        Self {
            name,
            profile_url,
            broker,
        }
    }
}

/// Listing provenance lines, each already carrying its label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingInfo {
    pub updated: Option<String>,
    pub checked: Option<String>,
    pub source: Option<String>,
    pub mls_id: Option<String>,
}

pub const LISTING_UPDATED_LABEL: &str = "Listing updated: ";
pub const REDFIN_CHECKED_LABEL: &str = "Redfin checked: ";
pub const SOURCE_LABEL: &str = "Source: ";
pub const MLS_ID_LABEL: &str = "MLS ID: ";

/// Ordered label → value table with unique labels.
///
/// Re-inserting a label replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDetails(Vec<(String, String)>);

impl KeyDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        if let Some(entry) = self.0.iter_mut().find(|(l, _)| *l == label) {
            entry.1 = value;
        } else {
            self.0.push((label, value));
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }
}

impl Serialize for KeyDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeyDetails {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyDetailsVisitor;

        impl<'de> Visitor<'de> for KeyDetailsVisitor {
            type Value = KeyDetails;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of key detail labels to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<KeyDetails, A::Error> {
                let mut details = KeyDetails::new();
                while let Some((label, value)) = access.next_entry::<String, String>()? {
                    details.insert(label, value);
                }
                Ok(details)
            }
        }

        deserializer.deserialize_map(KeyDetailsVisitor)
    }
}

/// One card paired with its detail record, numbered from 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedHome {
    pub id: usize,
    pub card: CardRecord,
    pub detail: DetailRecord,
    pub scraped_at: DateTime<Utc>,
}
