//! Fuzzy filtering pipeline shared by the selection prompts
//!
//! Candidate lists are searched through [`fuzzy_filter`], which yields a
//! per-element [`FilterResult`]: either the candidate itself (empty query
//! passthrough) or a wrapper carrying it plus match metadata. [`normalize`]
//! collapses both shapes back to the candidate and is the only place that
//! distinction is made.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Reserved value signalling "create a new resource" through the selection
/// channel. Assumed never to collide with a backend-issued identifier.
pub const CREATE_NEW_SENTINEL: &str = "(~~new~~)";

/// Uniform shape handed to the prompt renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: String,
    pub title: String,
    /// Canonical short identifier of the entity, never the full record
    pub value: String,
}

impl Choice {
    pub fn new(label: String, value: String) -> Self {
        Self {
            name: label.clone(),
            title: label,
            value,
        }
    }
}

/// One element of a fuzzy-filter result sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterResult<T> {
    /// Candidate passed through unfiltered (empty query)
    Raw(T),
    /// Candidate matched the query, with match metadata attached
    Match {
        original: T,
        score: i64,
    },
}

/// Extract the original candidate from either arm
pub fn normalize<T>(result: FilterResult<T>) -> T {
    match result {
        FilterResult::Raw(candidate) => candidate,
        FilterResult::Match { original, .. } => original,
    }
}

/// Filter candidates against a query
///
/// An empty query degrades to all candidates in their original order. A
/// non-empty query keeps only matching candidates, best score first; ties
/// keep the input order.
pub fn fuzzy_filter<T, K>(candidates: Vec<T>, query: &str, search_key: K) -> Vec<FilterResult<T>>
where
    K: Fn(&T) -> String,
{
    if query.is_empty() {
        return candidates.into_iter().map(FilterResult::Raw).collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(T, i64)> = candidates
        .into_iter()
        .filter_map(|candidate| {
            matcher
                .fuzzy_match(&search_key(&candidate), query)
                .map(|score| (candidate, score))
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .map(|(original, score)| FilterResult::Match { original, score })
        .collect()
}
