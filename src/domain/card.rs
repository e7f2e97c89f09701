use serde::{Deserialize, Serialize};

/// Summary fields read from one home card on the listing surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub title: Option<String>,
    pub price: Option<String>,
    pub beds: Option<String>,
    pub baths: Option<String>,
    pub sqft: Option<String>,
    pub address: Option<String>,
    /// Always absolute.
    pub detail_url: String,
    pub image_url: Option<String>,
}

impl std::fmt::Display for CardRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.title.as_deref().or(self.address.as_deref()).unwrap_or("Untitled home")
        )?;
        if let Some(ref price) = self.price {
            write!(f, " - {price}")?;
        }
        let stats: Vec<&str> = [&self.beds, &self.baths, &self.sqft]
            .into_iter()
            .filter_map(Option::as_deref)
            .collect();
        if !stats.is_empty() {
            write!(f, " ({})", stats.join(", "))?;
        }
        write!(f, " <{}>", self.detail_url)
    }
}
