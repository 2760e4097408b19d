//! Incremental option filter: a stable, capped select over an option list.

use crate::catalog::LanguageOption;

/// Which test admitted a label, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchRule {
    Exact,
    Prefix,
    Substring,
    WordPrefix,
}

/// Clamp a signed result cap from an untyped source to a usable limit.
pub fn clamp_max_results(raw: i64) -> usize {
    usize::try_from(raw.max(0)).unwrap_or(usize::MAX)
}

/// Trim and case-fold a raw query. A missing query is empty.
pub fn normalize_query(query: Option<&str>) -> String {
    query.map(str::trim).unwrap_or_default().to_lowercase()
}

/// Report the highest-priority rule by which `label` matches a normalized,
/// non-empty `query`.
///
/// # Returns
/// `None` when the label does not match (or the query is empty).
pub fn match_rule(label: &str, query: &str) -> Option<MatchRule> {
    if query.is_empty() {
        return None;
    }
    let label = label.to_lowercase();
    if label == query {
        return Some(MatchRule::Exact);
    }
    if label.starts_with(query) {
        return Some(MatchRule::Prefix);
    }
    if label.contains(query) {
        return Some(MatchRule::Substring);
    }
    label
        .split_whitespace()
        .any(|word| word.starts_with(query))
        .then_some(MatchRule::WordPrefix)
}

/// Select the options whose labels match `query`, in source order, capped at
/// `max_results`.
///
/// A blank query yields the first `max_results` options unchanged.
pub fn filter_options<'a>(
    options: &'a [LanguageOption],
    query: Option<&str>,
    max_results: usize,
) -> Vec<&'a LanguageOption> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return options.iter().take(max_results).collect();
    }
    options
        .iter()
        .filter(|option| match_rule(&option.label, &needle).is_some())
        .take(max_results)
        .collect()
}
