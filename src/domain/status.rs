use super::text::normalize;

/// Lowercase fragments that mark a line as a listing status.
pub const STATUS_KEYWORDS: [&str; 7] = [
    "for sale",
    "pending",
    "sold",
    "contingent",
    "active",
    "off market",
    "new listing",
];

/// Longer class-matched candidates are containers, not badges.
pub const MAX_BADGE_CHARS: usize = 80;

type Predicate = fn(&str) -> bool;

/// A candidate source and the test its normalized entries must pass.
pub struct Tier<'a> {
    pub candidates: Vec<&'a str>,
    pub accept: Predicate,
}

/// Walk tiers in priority order; the first accepted candidate wins.
pub fn first_match<'a>(tiers: impl IntoIterator<Item = Tier<'a>>) -> Option<String> {
    tiers.into_iter().find_map(|tier| {
        tier.candidates
            .into_iter()
            .map(normalize)
            .find(|candidate| !candidate.is_empty() && (tier.accept)(candidate))
    })
}

/// Status label from class-matched element texts, falling back to body lines.
pub fn classify_status(badge_candidates: &[String], body_text: &str) -> Option<String> {
    first_match([
        Tier {
            candidates: badge_candidates.iter().map(String::as_str).collect(),
            accept: is_badge,
        },
        Tier {
            candidates: body_text.lines().collect(),
            accept: mentions_status,
        },
    ])
}

fn is_badge(candidate: &str) -> bool {
    candidate.chars().count() <= MAX_BADGE_CHARS && mentions_status(candidate)
}

fn mentions_status(candidate: &str) -> bool {
    let lowered = candidate.to_lowercase();
    STATUS_KEYWORDS.iter().any(|k| lowered.contains(k))
}
