use std::path::Path;

use crate::domain::detail::ScrapedHome;
use crate::error::Result;

/// Serialize the results as a JSON array.
pub fn to_json(homes: &[ScrapedHome], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(homes)?
    } else {
        serde_json::to_string(homes)?
    };
    Ok(json)
}

/// Write the results to `path`, replacing any earlier file, and return the
/// JSON that was written.
pub async fn write_results(path: &Path, homes: &[ScrapedHome], pretty: bool) -> Result<String> {
    let json = to_json(homes, pretty)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, &json).await?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "Results written");
    Ok(json)
}
