use std::sync::{Arc, Mutex};

use weft::Key;
use weft_widgets::navigation::NavDirection;
use weft_widgets::search::{
    self, FilterFn, OTHER_CATEGORY, SearchResult, SearchState,
};
use weft_widgets::widgets::SearchInput;
use weft_widgets::{EventResult, Widget};

fn produce() -> Vec<SearchResult> {
    vec![
        SearchResult::new("apple", "Apple").category("Fruit"),
        SearchResult::new("cabbage", "Cabbage").category("Vegetable"),
        SearchResult::new("zebra", "Zebra").description("Striped animal"),
        SearchResult::new("pineapple", "Pineapple").category("Fruit"),
        SearchResult::new("carrot", "Carrot").category("Vegetable"),
    ]
}

fn labels(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.label.as_str()).collect()
}

fn type_str(input: &mut SearchInput, text: &str) {
    for c in text.chars() {
        input.handle_key(Key::Char(c));
    }
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_below_min_length_is_empty() {
    let all = produce();
    assert!(search::filter_results(&all, "", 1, 10, None).is_empty());
    assert!(search::filter_results(&all, "a", 2, 10, None).is_empty());
    assert!(search::filter_results(&all, "ap", 3, 10, None).is_empty());
    assert!(!search::filter_results(&all, "ap", 2, 10, None).is_empty());
}

#[test]
fn test_substring_filter_matches_label_or_description() {
    let all = produce();
    assert_eq!(
        labels(&search::substring_filter(&all, "APP")),
        ["Apple", "Pineapple"]
    );
    assert_eq!(labels(&search::substring_filter(&all, "striped")), ["Zebra"]);
    assert!(search::substring_filter(&all, "xyz").is_empty());
}

#[test]
fn test_max_results_truncates() {
    let all = produce();
    let results = search::filter_results(&all, "a", 1, 2, None);
    assert_eq!(labels(&results), ["Apple", "Cabbage"]);
}

#[test]
fn test_custom_filter_is_used() {
    let all = produce();
    let starts_with: FilterFn = Arc::new(|all: &[SearchResult], query: &str| {
        all.iter()
            .filter(|r| r.label.to_lowercase().starts_with(&query.to_lowercase()))
            .cloned()
            .collect()
    });
    let results = search::filter_results(&all, "c", 1, 10, Some(&starts_with));
    assert_eq!(labels(&results), ["Cabbage", "Carrot"]);
}

#[test]
fn test_fuzzy_filter() {
    let all = produce();
    let results = search::fuzzy_filter(&all, "apl");
    assert!(labels(&results).contains(&"Apple"));
    assert!(labels(&results).contains(&"Pineapple"));
    assert!(!labels(&results).contains(&"Zebra"));
    assert_eq!(results[0].label, "Apple");

    assert_eq!(search::fuzzy_filter(&all, "").len(), all.len());
    assert!(search::fuzzy_filter(&all, "qqq").is_empty());
}

// ============================================================================
// Grouping and highlighting
// ============================================================================

#[test]
fn test_group_results_first_seen_order() {
    let groups = search::group_results(&produce());
    let names: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(names, ["Fruit", "Vegetable", OTHER_CATEGORY]);
    assert_eq!(labels(&groups[0].results), ["Apple", "Pineapple"]);
    assert_eq!(labels(&groups[2].results), ["Zebra"]);

    let flat = search::flatten_groups(&groups);
    assert_eq!(
        labels(&flat),
        ["Apple", "Pineapple", "Cabbage", "Carrot", "Zebra"]
    );
}

#[test]
fn test_highlight_matches() {
    assert_eq!(search::highlight_matches("Pineapple", "APP"), "Pine[app]le");
    assert_eq!(search::highlight_matches("banana", "an"), "b[an][an]a");
    assert_eq!(search::highlight_matches("a.b.c", "."), "a[.]b[.]c");
    assert_eq!(search::highlight_matches("Apple", ""), "Apple");
}

// ============================================================================
// State
// ============================================================================

#[test]
fn test_cursor_stays_in_bounds() {
    let mut state = SearchState::new(produce());
    state.sync("a");
    let len = state.results().len();
    assert!(len > 0);

    for step in 0..(len * 3) {
        let direction = if step % 3 == 0 {
            NavDirection::Backward
        } else {
            NavDirection::Forward
        };
        state.move_cursor(direction);
        assert!(state.result_index() < len);
    }

    state.set_results(vec![SearchResult::new("only", "Alpha")]);
    assert!(state.result_index() < state.results().len());

    state.sync("zzz");
    assert_eq!(state.result_index(), 0);
    assert!(state.results().is_empty());
    state.move_cursor(NavDirection::Forward);
    assert_eq!(state.result_index(), 0);
    assert!(state.selected().is_none());
}

#[test]
fn test_cursor_wraps() {
    let mut state = SearchState::new(produce());
    state.sync("app");
    assert_eq!(state.results().len(), 2);
    state.move_cursor(NavDirection::Backward);
    assert_eq!(state.result_index(), 1);
    state.move_cursor(NavDirection::Forward);
    assert_eq!(state.result_index(), 0);
}

#[test]
fn test_grouping_orders_navigation() {
    let mut state = SearchState::new(produce()).grouping(true);
    state.sync("a");
    assert_eq!(
        labels(state.results()),
        ["Apple", "Pineapple", "Cabbage", "Carrot", "Zebra"]
    );
    state.move_cursor(NavDirection::Forward);
    assert_eq!(state.selected().map(|r| r.id.as_str()), Some("pineapple"));
}

#[test]
fn test_instant_results_off_waits_for_show() {
    let mut state = SearchState::new(produce()).instant_results(false);
    state.sync("app");
    assert!(!state.is_showing_results());
    assert!(!state.is_open());
    state.show_results();
    assert!(state.is_open());
}

// ============================================================================
// SearchInput
// ============================================================================

#[test]
fn test_search_input_min_length() {
    let all = vec![
        SearchResult::new("1", "Apple"),
        SearchResult::new("2", "Cabbage"),
        SearchResult::new("3", "Zebra"),
    ];
    let mut input = SearchInput::new(all).min_search_length(2);

    input.handle_key(Key::Char('a'));
    assert!(input.results().is_empty());
    assert!(!input.is_showing_results());

    input.handle_key(Key::Char('b'));
    assert_eq!(labels(input.results()), ["Cabbage"]);
    assert_eq!(input.result_index(), 0);
    assert!(input.is_showing_results());
}

#[test]
fn test_search_input_select_and_clear() {
    let searches = Arc::new(Mutex::new(Vec::new()));
    let selected = Arc::new(Mutex::new(Vec::new()));
    let (search_log, select_log) = (Arc::clone(&searches), Arc::clone(&selected));
    let mut input = SearchInput::new(produce())
        .on_search(move |q| search_log.lock().unwrap().push(q.to_string()))
        .on_select(move |r| select_log.lock().unwrap().push(r.id.clone()));

    type_str(&mut input, "app");
    assert_eq!(*searches.lock().unwrap(), ["a", "ap", "app"]);

    assert_eq!(input.handle_key(Key::Down), EventResult::Consumed);
    assert_eq!(input.handle_key(Key::Enter), EventResult::Consumed);
    assert_eq!(*selected.lock().unwrap(), ["pineapple"]);
    assert_eq!(input.query(), "Pineapple");
    assert!(!input.is_showing_results());

    // Closed list: Escape clears the query.
    assert_eq!(input.handle_key(Key::Escape), EventResult::Consumed);
    assert_eq!(input.query(), "");

    type_str(&mut input, "ca");
    input.handle_key(Key::Backspace);
    assert_eq!(input.query(), "c");
    input.handle_key(Key::Backspace);
    assert_eq!(input.handle_key(Key::Backspace), EventResult::Ignored);
}

#[test]
fn test_search_input_escape_on_empty_query_does_nothing() {
    let searches = Arc::new(Mutex::new(Vec::new()));
    let search_log = Arc::clone(&searches);
    let mut input = SearchInput::new(produce())
        .on_search(move |q| search_log.lock().unwrap().push(q.to_string()));

    assert_eq!(input.handle_key(Key::Escape), EventResult::Ignored);
    input.clear();
    assert!(searches.lock().unwrap().is_empty());

    type_str(&mut input, "a");
    input.handle_key(Key::Escape);
    input.handle_key(Key::Escape);
    assert_eq!(input.handle_key(Key::Escape), EventResult::Ignored);
    assert_eq!(*searches.lock().unwrap(), ["a", ""]);
}

#[test]
fn test_search_input_escape_hides_then_enter_reopens() {
    let mut input = SearchInput::new(produce());
    type_str(&mut input, "car");
    assert!(input.search().is_open());

    input.handle_key(Key::Escape);
    assert!(!input.is_showing_results());
    assert_eq!(input.query(), "car");

    input.handle_key(Key::Enter);
    assert!(input.search().is_open());
}

#[test]
fn test_search_input_controlled_value() {
    let mut input = SearchInput::new(produce()).value("zeb");
    assert_eq!(labels(input.results()), ["Zebra"]);

    // Typing requests a change but the caller keeps the value.
    input.handle_key(Key::Char('x'));
    assert_eq!(input.query(), "zeb");

    input.set_value(Some("cab".to_string()));
    assert_eq!(labels(input.results()), ["Cabbage"]);
}

#[test]
fn test_search_input_disabled() {
    let mut input = SearchInput::new(produce()).disabled(true);
    assert_eq!(input.handle_key(Key::Char('a')), EventResult::Ignored);
    assert_eq!(input.query(), "");
}

#[test]
fn test_search_input_renders_highlighted_results() {
    let mut input = SearchInput::new(produce()).grouping(true);
    type_str(&mut input, "app");
    let element = input.element(&weft_widgets::default_theme());
    let text = element.plain_text();

    assert!(text.contains("[App]le"), "{text}");
    assert!(text.contains("Fruit"), "{text}");
    assert!(element.find("result-pineapple").is_some());
}
