//! Search input: a query line with a filtered, navigable result list.

mod events;
mod render;
pub(crate) mod theme;

use weft::{Element, Key};

use crate::controlled::ControlledValue;
use crate::search::{FilterFn, SearchResult, SearchState};
use crate::theme::Theme;
use crate::widgets::events::{EventResult, Widget};

type SelectHandler = Box<dyn FnMut(&SearchResult) + Send>;

pub struct SearchInput {
    query: ControlledValue<String>,
    search: SearchState,
    placeholder: String,
    label: Option<String>,
    is_disabled: bool,
    has_highlight: bool,
    has_search_icon: bool,
    has_clear_button: bool,
    on_select: Option<SelectHandler>,
}

impl SearchInput {
    pub const THEME: &'static str = "SearchInput";

    pub fn new(results: Vec<SearchResult>) -> Self {
        let mut search = SearchState::new(results);
        search.sync("");
        Self {
            query: ControlledValue::uncontrolled(String::new()),
            search,
            placeholder: "Search...".to_string(),
            label: None,
            is_disabled: false,
            has_highlight: true,
            has_search_icon: true,
            has_clear_button: true,
            on_select: None,
        }
    }

    fn configure(mut self, f: impl FnOnce(SearchState) -> SearchState) -> Self {
        self.search = f(self.search);
        self.resync();
        self
    }

    /// Minimum query length before results appear (default 1).
    pub fn min_search_length(self, min_length: usize) -> Self {
        self.configure(|s| s.min_length(min_length))
    }

    /// Cap on the number of results (default 10).
    pub fn max_results(self, max_results: usize) -> Self {
        self.configure(|s| s.max_results(max_results))
    }

    /// Replace the default substring filter.
    pub fn filter(self, filter: FilterFn) -> Self {
        self.configure(|s| s.filter(filter))
    }

    /// Group results by category.
    pub fn grouping(self, has_grouping: bool) -> Self {
        self.configure(|s| s.grouping(has_grouping))
    }

    /// Open the result list automatically while typing (default on).
    pub fn instant_results(self, has_instant_results: bool) -> Self {
        self.configure(|s| s.instant_results(has_instant_results))
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.query.set_internal(value.into());
        self.resync();
        self
    }

    /// Caller-owned query.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.query.set_controlled(Some(value.into()));
        self.resync();
        self
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.query.set_controlled(value);
        self.search.sync(self.query.value());
    }

    pub fn set_results(&mut self, results: Vec<SearchResult>) {
        self.search.set_results(results);
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    pub fn highlight(mut self, has_highlight: bool) -> Self {
        self.has_highlight = has_highlight;
        self
    }

    pub fn search_icon(mut self, has_search_icon: bool) -> Self {
        self.has_search_icon = has_search_icon;
        self
    }

    pub fn clear_button(mut self, has_clear_button: bool) -> Self {
        self.has_clear_button = has_clear_button;
        self
    }

    /// Called with the requested query on every change.
    pub fn on_search(mut self, mut handler: impl FnMut(&str) + Send + 'static) -> Self {
        self.query.set_on_change(move |query: &String| handler(query.as_str()));
        self
    }

    pub fn on_select(mut self, handler: impl FnMut(&SearchResult) + Send + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    pub fn query(&self) -> &str {
        self.query.value()
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn results(&self) -> &[SearchResult] {
        self.search.results()
    }

    pub fn result_index(&self) -> usize {
        self.search.result_index()
    }

    pub fn is_showing_results(&self) -> bool {
        self.search.is_showing_results()
    }

    fn resync(&mut self) {
        let query = self.query.value().clone();
        self.search.sync(&query);
    }

    fn set_query(&mut self, query: String) {
        self.query.update(query);
        self.resync();
    }
}

impl Widget for SearchInput {
    fn handle_key(&mut self, key: Key) -> EventResult {
        self.on_key(key)
    }

    fn element(&self, theme: &Theme) -> Element {
        self.render(theme)
    }
}
