//! Incremental search: filtering, grouping, highlighting and the result
//! cursor.

use std::sync::Arc;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use regex::RegexBuilder;

use crate::navigation::NavDirection;

/// Category used for results without one when grouping.
pub const OTHER_CATEGORY: &str = "Other";

/// Default minimum query length before results are produced.
pub const DEFAULT_MIN_SEARCH_LENGTH: usize = 1;

/// Default cap on the number of results.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// A searchable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl SearchResult {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            category: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Custom filter: receives every result and the query, returns the matches
/// in display order.
pub type FilterFn = Arc<dyn Fn(&[SearchResult], &str) -> Vec<SearchResult> + Send + Sync>;

// =============================================================================
// Filtering
// =============================================================================

/// Case-insensitive substring match on label or description.
pub fn substring_filter(results: &[SearchResult], query: &str) -> Vec<SearchResult> {
    let query = query.to_lowercase();
    results
        .iter()
        .filter(|result| {
            result.label.to_lowercase().contains(&query)
                || result
                    .description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Fuzzy match on the label, best score first. Ties keep input order.
pub fn fuzzy_filter(results: &[SearchResult], query: &str) -> Vec<SearchResult> {
    if query.is_empty() {
        return results.to_vec();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut scored: Vec<(usize, u32)> = results
        .iter()
        .enumerate()
        .filter_map(|(index, result)| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(&result.label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| (index, score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    scored
        .into_iter()
        .map(|(index, _)| results[index].clone())
        .collect()
}

/// Filter `all` by `query`.
///
/// Empty when the query is shorter than `min_length` (or empty). Otherwise
/// the output of `filter` (default: [`substring_filter`]) truncated to
/// `max_results`.
pub fn filter_results(
    all: &[SearchResult],
    query: &str,
    min_length: usize,
    max_results: usize,
    filter: Option<&FilterFn>,
) -> Vec<SearchResult> {
    if query.is_empty() || query.chars().count() < min_length {
        return Vec::new();
    }

    let mut filtered = match filter {
        Some(filter) => filter(all, query),
        None => substring_filter(all, query),
    };
    filtered.truncate(max_results);
    filtered
}

// =============================================================================
// Grouping
// =============================================================================

/// Results sharing a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGroup {
    pub category: String,
    pub results: Vec<SearchResult>,
}

/// Group by category in first-seen order. Results without a category go to
/// [`OTHER_CATEGORY`].
pub fn group_results(results: &[SearchResult]) -> Vec<ResultGroup> {
    group_results_by(results, |result| result.category.as_deref())
}

/// Group by an arbitrary key in first-seen order.
pub fn group_results_by<F>(results: &[SearchResult], category_of: F) -> Vec<ResultGroup>
where
    F: Fn(&SearchResult) -> Option<&str>,
{
    let mut groups: Vec<ResultGroup> = Vec::new();
    for result in results {
        let category = category_of(result).unwrap_or(OTHER_CATEGORY);
        match groups.iter_mut().find(|group| group.category == category) {
            Some(group) => group.results.push(result.clone()),
            None => groups.push(ResultGroup {
                category: category.to_string(),
                results: vec![result.clone()],
            }),
        }
    }
    groups
}

/// Concatenate groups in order. The position in this list is the navigation
/// index of each result.
pub fn flatten_groups(groups: &[ResultGroup]) -> Vec<SearchResult> {
    groups
        .iter()
        .flat_map(|group| group.results.iter().cloned())
        .collect()
}

// =============================================================================
// Highlighting
// =============================================================================

/// Wrap every case-insensitive occurrence of `query` in `[` `]`.
/// The query is matched literally.
pub fn highlight_matches(text: &str, query: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.replace_all(text, "[$0]").into_owned(),
        Err(err) => {
            log::warn!("highlight pattern rejected: {err}");
            text.to_string()
        }
    }
}

// =============================================================================
// Search State
// =============================================================================

/// Filtered results and the result cursor for one query.
///
/// The query itself is owned by the caller; [`SearchState::sync`] is called
/// with the current query after every change and recomputes the results when
/// it differs from the last one seen.
#[derive(Clone)]
pub struct SearchState {
    all: Vec<SearchResult>,
    min_length: usize,
    max_results: usize,
    filter: Option<FilterFn>,
    has_grouping: bool,
    has_instant_results: bool,

    query: String,
    synced: bool,
    filtered: Vec<SearchResult>,
    result_index: usize,
    is_showing_results: bool,
}

impl SearchState {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            all: results,
            min_length: DEFAULT_MIN_SEARCH_LENGTH,
            max_results: DEFAULT_MAX_RESULTS,
            filter: None,
            has_grouping: false,
            has_instant_results: true,
            query: String::new(),
            synced: false,
            filtered: Vec::new(),
            result_index: 0,
            is_showing_results: false,
        }
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self.synced = false;
        self
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self.synced = false;
        self
    }

    pub fn filter(mut self, filter: FilterFn) -> Self {
        self.filter = Some(filter);
        self.synced = false;
        self
    }

    pub fn grouping(mut self, has_grouping: bool) -> Self {
        self.has_grouping = has_grouping;
        self.synced = false;
        self
    }

    pub fn instant_results(mut self, has_instant_results: bool) -> Self {
        self.has_instant_results = has_instant_results;
        self
    }

    /// Recompute for `query` if it changed since the last call.
    ///
    /// A changed query resets the cursor and, with instant results, opens or
    /// closes the result list depending on the query length.
    pub fn sync(&mut self, query: &str) {
        if self.synced && query == self.query {
            return;
        }
        self.synced = true;
        self.query = query.to_string();
        self.recompute();
        self.result_index = 0;
        self.is_showing_results = self.has_instant_results && self.meets_min_length();
        log::trace!(
            "search: query {:?} -> {} results",
            self.query,
            self.filtered.len()
        );
    }

    /// Replace the searchable entries. The cursor resets when the number of
    /// filtered results changes.
    pub fn set_results(&mut self, results: Vec<SearchResult>) {
        self.all = results;
        let before = self.filtered.len();
        self.recompute();
        if self.filtered.len() != before {
            self.result_index = 0;
        }
    }

    fn recompute(&mut self) {
        let filtered = filter_results(
            &self.all,
            &self.query,
            self.min_length,
            self.max_results,
            self.filter.as_ref(),
        );
        self.filtered = if self.has_grouping {
            flatten_groups(&group_results(&filtered))
        } else {
            filtered
        };
        if self.result_index >= self.filtered.len() {
            self.result_index = 0;
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn meets_min_length(&self) -> bool {
        !self.query.is_empty() && self.query.chars().count() >= self.min_length
    }

    /// Filtered results in navigation order.
    pub fn results(&self) -> &[SearchResult] {
        &self.filtered
    }

    /// Filtered results grouped by category, or a single unnamed group when
    /// grouping is off.
    pub fn groups(&self) -> Vec<ResultGroup> {
        if self.has_grouping {
            group_results(&self.filtered)
        } else {
            vec![ResultGroup {
                category: String::new(),
                results: self.filtered.clone(),
            }]
        }
    }

    pub fn has_grouping(&self) -> bool {
        self.has_grouping
    }

    pub fn result_index(&self) -> usize {
        self.result_index
    }

    pub fn is_showing_results(&self) -> bool {
        self.is_showing_results
    }

    /// Showing and non-empty.
    pub fn is_open(&self) -> bool {
        self.is_showing_results && !self.filtered.is_empty()
    }

    pub fn selected(&self) -> Option<&SearchResult> {
        self.filtered.get(self.result_index)
    }

    /// Move the cursor, wrapping at both ends.
    pub fn move_cursor(&mut self, direction: NavDirection) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        self.result_index = match direction {
            NavDirection::Forward => (self.result_index + 1) % len,
            NavDirection::Backward => (self.result_index + len - 1) % len,
        };
    }

    pub fn show_results(&mut self) {
        self.is_showing_results = true;
        self.result_index = 0;
    }

    pub fn hide_results(&mut self) {
        self.is_showing_results = false;
    }
}

impl std::fmt::Debug for SearchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchState")
            .field("query", &self.query)
            .field("results", &self.filtered.len())
            .field("result_index", &self.result_index)
            .field("is_showing_results", &self.is_showing_results)
            .finish_non_exhaustive()
    }
}
