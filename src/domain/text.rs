/// Collapse every run of whitespace to one ASCII space and trim both ends.
pub fn normalize(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`normalize`] for optional reads. Text that is empty after normalizing
/// counts as absent.
pub fn normalize_opt(value: Option<&str>) -> Option<String> {
    value.map(normalize).filter(|v| !v.is_empty())
}
