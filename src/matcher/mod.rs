//! Fuzzy resolution of spoken exercise names against a catalog.
//!
//! The matcher owns no state: the catalog is passed in per request, which
//! keeps it independently testable and free of hidden store coupling.

use tracing::debug;

/// Default acceptance threshold for fuzzy matches.
pub const DEFAULT_ACCEPT_THRESHOLD: f64 = 0.7;

/// Outcome of a catalog lookup. Never an error; an unmatched candidate is a
/// normal result and the caller decides whether to create a custom entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// The winning catalog name, original casing.
    Resolved(String),
    Unmatched,
}

impl MatchResult {
    pub fn resolved(self) -> Option<String> {
        match self {
            Self::Resolved(name) => Some(name),
            Self::Unmatched => None,
        }
    }
}

/// Resolve `candidate` against catalog `names`.
///
/// A case-insensitive exact match always wins and is checked first,
/// independent of the threshold. Otherwise the highest normalized Levenshtein
/// score wins iff it exceeds `threshold`; equal scores break to the first
/// name in iteration order.
pub fn find_best_match<'a, I>(candidate: &str, names: I, threshold: f64) -> MatchResult
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = candidate.trim().to_lowercase();
    if needle.is_empty() {
        return MatchResult::Unmatched;
    }

    let names: Vec<&str> = names.into_iter().collect();

    if let Some(exact) = names.iter().find(|name| name.to_lowercase() == needle) {
        debug!("Exact catalog match for {:?}: {:?}", candidate, exact);
        return MatchResult::Resolved((*exact).to_string());
    }

    let mut best: Option<(&str, f64)> = None;
    for name in &names {
        let score = strsim::normalized_levenshtein(&needle, &name.to_lowercase());
        // Strict comparison keeps the first-encountered name on ties.
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((name, score));
        }
    }

    match best {
        Some((name, score)) if score > threshold => {
            debug!(
                "Fuzzy matched {:?} to {:?} (score {:.3})",
                candidate, name, score
            );
            MatchResult::Resolved(name.to_string())
        }
        Some((name, score)) => {
            debug!(
                "No catalog match for {:?}; best was {:?} at {:.3}",
                candidate, name, score
            );
            MatchResult::Unmatched
        }
        None => MatchResult::Unmatched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: [&str; 3] = ["Bench Press", "Squat", "Deadlift"];

    #[test]
    fn test_exact_match_case_insensitive() {
        let result = find_best_match("bench press", CATALOG, DEFAULT_ACCEPT_THRESHOLD);
        assert_eq!(result, MatchResult::Resolved("Bench Press".to_string()));
    }

    #[test]
    fn test_exact_match_short_circuits_threshold() {
        // Even an unreachable threshold cannot block full equality.
        let result = find_best_match("SQUAT", CATALOG, 1.0);
        assert_eq!(result, MatchResult::Resolved("Squat".to_string()));
    }

    #[test]
    fn test_fuzzy_match_close_misrecognition() {
        let result = find_best_match("bench pres", CATALOG, DEFAULT_ACCEPT_THRESHOLD);
        assert_eq!(result, MatchResult::Resolved("Bench Press".to_string()));
    }

    #[test]
    fn test_no_match_below_threshold() {
        let result = find_best_match("xyz123", CATALOG, DEFAULT_ACCEPT_THRESHOLD);
        assert_eq!(result, MatchResult::Unmatched);
    }

    #[test]
    fn test_empty_candidate_and_empty_catalog() {
        assert_eq!(
            find_best_match("", CATALOG, DEFAULT_ACCEPT_THRESHOLD),
            MatchResult::Unmatched
        );
        assert_eq!(
            find_best_match("Squat", [], DEFAULT_ACCEPT_THRESHOLD),
            MatchResult::Unmatched
        );
    }

    #[test]
    fn test_tie_breaks_to_first_catalog_name() {
        // "cow" is one edit from both names; iteration order decides.
        let result = find_best_match("cow", ["Row", "Bow"], 0.6);
        assert_eq!(result, MatchResult::Resolved("Row".to_string()));

        let result = find_best_match("cow", ["Bow", "Row"], 0.6);
        assert_eq!(result, MatchResult::Resolved("Bow".to_string()));
    }

    #[test]
    fn test_resolved_accessor() {
        assert_eq!(
            MatchResult::Resolved("Squat".to_string()).resolved(),
            Some("Squat".to_string())
        );
        assert_eq!(MatchResult::Unmatched.resolved(), None);
    }
}
