use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use weft::{Color, Element, Key};
use weft_widgets::widgets::breadcrumb::{self, ELLIPSIS};
use weft_widgets::widgets::separator::{self, DEFAULT_LENGTH};
use weft_widgets::widgets::table::{self, DEFAULT_COLUMN_WIDTH};
use weft_widgets::widgets::*;
use weft_widgets::{Theme, default_theme};

fn theme() -> Theme {
    default_theme()
}

fn counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&count);
    (count, move || {
        sink.fetch_add(1, Ordering::SeqCst);
    })
}

// ============================================================================
// Slider
// ============================================================================

#[test]
fn test_slider_steps_and_clamps() {
    let mut slider = Slider::new();
    assert_eq!(slider.current(), 50.0);

    assert_eq!(slider.handle_key(Key::Right), EventResult::Consumed);
    assert_eq!(slider.current(), 51.0);
    slider.handle_key(Key::Char('h'));
    slider.handle_key(Key::Left);
    assert_eq!(slider.current(), 49.0);

    slider.handle_key(Key::Char('9'));
    assert_eq!(slider.current(), 100.0);
    slider.handle_key(Key::Right);
    assert_eq!(slider.current(), 100.0);

    slider.handle_key(Key::Char('0'));
    assert_eq!(slider.current(), 0.0);
    assert_eq!(slider.handle_key(Key::Char('z')), EventResult::Ignored);
}

#[test]
fn test_slider_normalize_rounds_to_step() {
    let slider = Slider::new().range(0.0, 10.0).step(0.5);
    assert_eq!(slider.current(), 5.0);
    assert_eq!(slider.normalize(3.3), 3.5);
    assert_eq!(slider.normalize(-4.0), 0.0);
    assert_eq!(slider.normalize(12.0), 10.0);
}

#[test]
fn test_slider_step_rounding_stays_in_range() {
    let mut slider = Slider::new().range(0.0, 10.0).step(4.0);
    assert_eq!(slider.normalize(10.0), 10.0);
    assert_eq!(slider.normalize(9.0), 8.0);
    assert_eq!(slider.normalize(1.0), 0.0);

    slider.set(100.0);
    assert_eq!(slider.current(), 10.0);
}

#[test]
fn test_slider_track_thumb_stays_inside() {
    let slider = Slider::new().width(10);
    assert_eq!(slider.track("●", "█", "─"), "█████●────");

    let full = Slider::new().width(10).default_value(100.0);
    assert_eq!(full.track("●", "█", "─"), "█████████●");

    let empty = Slider::new().width(10).default_value(0.0);
    assert_eq!(empty.track("●", "█", "─"), "●─────────");

    assert_eq!(Slider::new().width(0).track("●", "█", "─"), "");
}

#[test]
fn test_slider_controlled_and_disabled() {
    let requested = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&requested);
    let mut slider = Slider::new()
        .value(20.0)
        .on_change(move |v| sink.lock().unwrap().push(v));

    slider.handle_key(Key::Right);
    assert_eq!(slider.current(), 20.0);
    assert_eq!(*requested.lock().unwrap(), vec![21.0]);

    let mut disabled = Slider::new().disabled(true);
    assert_eq!(disabled.handle_key(Key::Right), EventResult::Ignored);
    assert!(!disabled.set(10.0));
    assert_eq!(disabled.current(), 50.0);
}

#[test]
fn test_slider_renders_value() {
    let slider = Slider::new()
        .default_value(30.0)
        .format_value(|v| format!("{v}%"))
        .min_max_labels(true);
    let text = slider.element(&theme()).plain_text();
    assert!(text.contains("30%"), "{text}");
    assert!(text.contains("100%"), "{text}");
}

// ============================================================================
// Switch and Checkbox
// ============================================================================

#[test]
fn test_switch_toggles_on_activate() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let mut switch = Switch::new().on_change(move |v| sink.lock().unwrap().push(v));

    assert!(!switch.is_checked());
    assert_eq!(switch.handle_key(Key::Char(' ')), EventResult::Consumed);
    assert!(switch.is_checked());
    switch.handle_key(Key::Enter);
    assert!(!switch.is_checked());
    assert_eq!(switch.handle_key(Key::Char('a')), EventResult::Ignored);
    assert_eq!(*changes.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_switch_disabled_and_controlled() {
    let mut disabled = Switch::new().default_checked(true).disabled(true);
    assert_eq!(disabled.handle_key(Key::Enter), EventResult::Ignored);
    assert!(!disabled.toggle());
    assert!(disabled.is_checked());

    let mut controlled = Switch::new().checked(false);
    controlled.toggle();
    assert!(!controlled.is_checked());
    controlled.set_checked(Some(true));
    assert!(controlled.is_checked());
}

#[test]
fn test_switch_state_text() {
    let switch = Switch::new()
        .default_checked(true)
        .state_text(true)
        .label("Wi-Fi");
    let text = switch.element(&theme()).plain_text();
    assert!(text.contains("ON"), "{text}");
    assert!(text.contains("Wi-Fi"), "{text}");

    let small = Switch::new().size(Size::Small);
    assert!(small.element(&theme()).plain_text().contains('○'));
}

#[test]
fn test_checkbox_reports_but_does_not_change() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let mut checkbox = Checkbox::new()
        .checked(true)
        .on_change(move |v| sink.lock().unwrap().push(v));

    assert_eq!(checkbox.handle_key(Key::Enter), EventResult::Consumed);
    assert!(checkbox.is_checked());
    assert_eq!(*changes.lock().unwrap(), vec![false]);

    checkbox.set_checked(false);
    checkbox.handle_key(Key::Char(' '));
    assert_eq!(*changes.lock().unwrap(), vec![false, true]);
}

#[test]
fn test_checkbox_disabled_and_icons() {
    let mut checkbox = Checkbox::new().disabled(true).label("Accept");
    assert_eq!(checkbox.handle_key(Key::Enter), EventResult::Ignored);
    assert!(checkbox.element(&theme()).plain_text().contains("◯"));

    let indeterminate = Checkbox::new().checked(true).indeterminate(true);
    assert!(indeterminate.is_indeterminate());
    assert!(indeterminate.element(&theme()).plain_text().contains("─"));
}

// ============================================================================
// Modal and ConfirmDialog
// ============================================================================

#[test]
fn test_modal_escape_closes_once() {
    let (closes, on_close) = counter();
    let mut modal = Modal::new(Element::text("Body"))
        .title("Title")
        .open(true)
        .on_close(on_close);

    let overlay = modal.overlay(&theme()).unwrap();
    assert_eq!(overlay.id, "modal-overlay");
    assert!(overlay.plain_text().contains("Body"));

    assert_eq!(modal.handle_key(Key::Char('a')), EventResult::Ignored);
    assert_eq!(modal.handle_key(Key::Escape), EventResult::Consumed);
    assert!(!modal.is_open());
    assert_eq!(modal.handle_key(Key::Escape), EventResult::Ignored);
    modal.close();
    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert!(modal.overlay(&theme()).is_none());
}

#[test]
fn test_modal_without_escape_close() {
    let mut modal = Modal::new(Element::text("Body")).open(true).escape_close(false);
    assert_eq!(modal.handle_key(Key::Escape), EventResult::Ignored);
    assert!(modal.is_open());
}

#[test]
fn test_confirm_dialog_keys() {
    let (confirms, on_confirm) = counter();
    let (cancels, on_cancel) = counter();
    let mut dialog = ConfirmDialog::new("Delete file?")
        .variant(DialogVariant::Destructive)
        .on_confirm(on_confirm)
        .on_cancel(on_cancel)
        .open(true);

    let text = dialog.element(&theme()).plain_text();
    assert!(text.contains("Delete file?"), "{text}");
    assert!(text.contains("Confirm (Enter)"), "{text}");
    assert!(text.contains("Cancel (Esc)"), "{text}");

    assert_eq!(dialog.handle_key(Key::Char('y')), EventResult::Ignored);
    assert_eq!(dialog.handle_key(Key::Enter), EventResult::Consumed);
    assert!(!dialog.is_open());
    assert_eq!(dialog.handle_key(Key::Escape), EventResult::Ignored);

    dialog.set_open(true);
    dialog.handle_key(Key::Escape);
    assert_eq!(confirms.load(Ordering::SeqCst), 1);
    assert_eq!(cancels.load(Ordering::SeqCst), 1);
}

// ============================================================================
// Menu, RadioGroup, Tabs
// ============================================================================

#[test]
fn test_menu_highlight_is_separate_from_selection() {
    let picked = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&picked);
    let mut menu = Menu::new(vec![
        MenuItem::new("new", "New"),
        MenuItem::separator("sep"),
        MenuItem::new("open", "Open").disabled(true),
        MenuItem::new("quit", "Quit"),
    ])
    .on_select(move |item| sink.lock().unwrap().push(item.key.clone()));

    assert_eq!(menu.highlighted(), Some("new"));
    menu.handle_key(Key::Down);
    assert_eq!(menu.highlighted(), Some("quit"));
    assert_eq!(menu.selected(), None);

    menu.handle_key(Key::Enter);
    assert_eq!(menu.selected(), Some("quit"));
    assert!(!menu.select("sep"));
    assert!(!menu.select("open"));
    assert_eq!(*picked.lock().unwrap(), ["quit"]);

    menu.handle_key(Key::Down);
    assert_eq!(menu.highlighted(), Some("new"));
    assert_eq!(menu.selected(), Some("quit"));
}

#[test]
fn test_radio_arrows_select_and_skip_disabled() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let mut radio = RadioGroup::new(vec![
        RadioOption::new("s", "Small"),
        RadioOption::new("m", "Medium").disabled(true),
        RadioOption::new("l", "Large"),
    ])
    .on_change(move |v| sink.lock().unwrap().push(v.clone()));

    assert_eq!(radio.selected(), None);
    radio.handle_key(Key::Down);
    assert_eq!(radio.selected(), Some("s"));
    radio.handle_key(Key::Right);
    assert_eq!(radio.selected(), Some("l"));
    radio.handle_key(Key::Up);
    assert_eq!(radio.selected(), Some("s"));
    assert!(!radio.select("m"));
    assert_eq!(*changes.lock().unwrap(), ["s", "l", "s"]);

    let element = radio.element(&theme());
    assert!(element.find("radio-l").is_some());
}

#[test]
fn test_disabled_radio_group() {
    let mut radio = RadioGroup::new(vec![RadioOption::new("a", "A")]).disabled(true);
    assert_eq!(radio.handle_key(Key::Down), EventResult::Ignored);
    assert!(!radio.select("a"));
}

#[test]
fn test_tabs_cycle_with_tab_keys() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let mut tabs = Tabs::new(vec![
        TabItem::new("one", "One", Element::text("first")),
        TabItem::new("two", "Two", Element::text("second")).disabled(true),
        TabItem::new("three", "Three", Element::text("third")),
    ])
    .on_change(move |k| sink.lock().unwrap().push(k.to_string()));

    assert_eq!(tabs.active(), Some("one"));
    tabs.handle_key(Key::Tab);
    assert_eq!(tabs.active(), Some("three"));
    tabs.handle_key(Key::Right);
    assert_eq!(tabs.active(), Some("one"));
    tabs.handle_key(Key::BackTab);
    assert_eq!(tabs.active(), Some("three"));
    assert!(!tabs.activate("two"));
    assert_eq!(*changes.lock().unwrap(), ["three", "one", "three"]);

    let text = tabs.element(&theme()).plain_text();
    assert!(text.contains("third"), "{text}");
    assert!(!text.contains("first"), "{text}");
}

// ============================================================================
// Breadcrumb and Separator
// ============================================================================

fn crumbs(labels: &[&str]) -> Vec<BreadcrumbItem> {
    labels.iter().map(|l| BreadcrumbItem::new(*l)).collect()
}

fn crumb_labels(items: &[BreadcrumbItem]) -> Vec<&str> {
    items.iter().map(|i| i.label.as_str()).collect()
}

#[test]
fn test_breadcrumb_collapse() {
    let items = crumbs(&["Home", "A", "B", "C", "D", "E"]);

    let collapsed = breadcrumb::collapse_items(&items, Some(4));
    assert_eq!(crumb_labels(&collapsed), ["Home", ELLIPSIS, "D", "E"]);
    assert!(!collapsed[1].is_clickable);

    let tight = breadcrumb::collapse_items(&items, Some(2));
    assert_eq!(crumb_labels(&tight), ["Home", ELLIPSIS, "E"]);

    assert_eq!(breadcrumb::collapse_items(&items, Some(6)).len(), 6);
    assert_eq!(breadcrumb::collapse_items(&items, Some(0)).len(), 6);
    assert_eq!(breadcrumb::collapse_items(&items, None).len(), 6);
}

#[test]
fn test_breadcrumb_renders_separator() {
    let breadcrumb = Breadcrumb::new(crumbs(&["Home", "Docs", "Guide"]))
        .max_items(3)
        .separator("/");
    assert_eq!(crumb_labels(&breadcrumb.visible_items()), ["Home", "Docs", "Guide"]);
    let text = breadcrumb.element(&theme()).plain_text();
    assert_eq!(text.matches('/').count(), 2, "{text}");
}

#[test]
fn test_line_with_text_positions() {
    assert_eq!(
        separator::line_with_text("─", 10, "Hi", TextPosition::Center),
        "────Hi────"
    );
    assert_eq!(
        separator::line_with_text("─", 9, "Hi", TextPosition::Center),
        "───Hi────"
    );
    assert_eq!(
        separator::line_with_text("-", 6, "ab", TextPosition::Left),
        "ab----"
    );
    assert_eq!(
        separator::line_with_text("-", 6, "ab", TextPosition::Right),
        "----ab"
    );
    assert_eq!(
        separator::line_with_text("-", 3, "long text", TextPosition::Center),
        "lon"
    );
}

#[test]
fn test_separator_line_variants() {
    let config = theme().config(Separator::THEME);
    assert_eq!(Separator::new().line(&config), "─".repeat(DEFAULT_LENGTH));
    assert_eq!(
        Separator::new().variant(LineVariant::Double).length(3).line(&config),
        "═══"
    );
    assert_eq!(
        Separator::new()
            .orientation(Orientation::Vertical)
            .variant(LineVariant::Dashed)
            .line(&config),
        "¦"
    );
    assert_eq!(Separator::new().character("*").length(4).line(&config), "****");
    // Empty text is no text.
    assert_eq!(Separator::new().length(4).text("").line(&config), "────");
}

#[test]
fn test_separator_color_override() {
    let element = Separator::new().length(2).color(Color::RED).element(&theme());
    let line = element
        .texts()
        .into_iter()
        .next()
        .unwrap();
    assert_eq!(line, "──");
}

// ============================================================================
// Table
// ============================================================================

fn record(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_column_widths() {
    let columns: Vec<TableColumn<HashMap<String, String>>> = vec![
        TableColumn::new("id", "ID").width(6),
        TableColumn::new("name", "Name").auto(),
        TableColumn::new("email", "Email").auto(),
        TableColumn::new("role", "Role"),
    ];
    assert_eq!(table::column_widths(&columns, 31), [6, 12, 12, DEFAULT_COLUMN_WIDTH]);
    assert_eq!(table::column_widths(&columns, 4), [6, 0, 0, DEFAULT_COLUMN_WIDTH]);
}

#[test]
fn test_fit_cell() {
    assert_eq!(table::fit_cell("abc", 6, ColumnAlign::Left), "abc   ");
    assert_eq!(table::fit_cell("abc", 6, ColumnAlign::Right), "   abc");
    assert_eq!(table::fit_cell("abc", 6, ColumnAlign::Center), " abc  ");
    assert_eq!(table::fit_cell("abcdefghij", 6, ColumnAlign::Left), "abc...");
    assert_eq!(table::fit_cell("abcdef", 6, ColumnAlign::Right), "abcdef");
}

#[test]
fn test_table_rows_and_renderers() {
    let table = Table::new(
        vec![
            TableColumn::new("name", "Name").width(8),
            TableColumn::new("age", "Age")
                .width(5)
                .align(ColumnAlign::Right)
                .render(|value, _, index| format!("{}#{index}", value.unwrap_or("?"))),
        ],
        vec![
            record(&[("name", "Ada"), ("age", "36")]),
            record(&[("name", "Bartholomew")]),
        ],
    );

    assert_eq!(table.header_cells(), ["Name    ", "  Age"]);
    assert_eq!(table.row_cells(0).unwrap(), ["Ada     ", " 36#0"]);
    assert_eq!(table.row_cells(1).unwrap(), ["Barth...", "  ?#1"]);
    assert!(table.row_cells(2).is_none());
}

#[test]
fn test_table_striping() {
    let rows = vec![record(&[("k", "a")]), record(&[("k", "b")])];
    let columns = || vec![TableColumn::new("k", "K").width(3)];

    let striped = Table::new(columns(), rows.clone()).striped(true).element(&theme());
    let even = striped.find("table-row-0").unwrap();
    let odd = striped.find("table-row-1").unwrap();
    assert_eq!(even.style.background, Some(Color::GRAY));
    assert_eq!(odd.style.background, None);

    let plain = Table::new(columns(), rows).element(&theme());
    assert_eq!(plain.find("table-row-0").unwrap().style.background, None);
    assert!(plain.find("table-header").is_some());
}

#[test]
fn test_table_border_follows_flag() {
    let columns = || vec![TableColumn::<HashMap<String, String>>::new("k", "K")];
    let bordered = Table::new(columns(), vec![]).element(&theme());
    assert_eq!(bordered.style.border, weft::Border::Single);
    let bare = Table::new(columns(), vec![]).bordered(false).element(&theme());
    assert_eq!(bare.style.border, weft::Border::None);
}

// ============================================================================
// CodeBlock
// ============================================================================

use weft_widgets::widgets::code_block::{self, CodeRow, Token, TokenKind};

fn code_row(number: Option<usize>, text: &str) -> CodeRow {
    CodeRow { number, text: text.to_string() }
}

#[test]
fn test_code_block_gutter_width() {
    assert_eq!(code_block::gutter_width(1, 9), 1);
    assert_eq!(code_block::gutter_width(1, 10), 2);
    assert_eq!(code_block::gutter_width(98, 3), 3);
    assert_eq!(code_block::gutter_width(5, 0), 1);

    let block = CodeBlock::new("a\nb\nc").start_line_number(98);
    assert_eq!(block.gutter_width(), 3);

    let element = block.element(&theme());
    assert_eq!(element.find("code-row-0").unwrap().texts(), [" 98", "a"]);
    assert_eq!(element.find("code-row-2").unwrap().texts(), ["100", "c"]);
}

#[test]
fn test_code_block_truncates_long_lines() {
    let block = CodeBlock::new("abcdefghijklmnop\nshort").max_width(10);
    assert_eq!(
        block.rows(),
        [code_row(Some(1), "abcdefg..."), code_row(Some(2), "short")]
    );
}

#[test]
fn test_code_block_word_wrap_continues_without_number() {
    let block = CodeBlock::new("abcdefghij\nxy").max_width(4).word_wrap(true);
    assert_eq!(
        block.rows(),
        [
            code_row(Some(1), "abcd"),
            code_row(None, "efgh"),
            code_row(None, "ij"),
            code_row(Some(2), "xy"),
        ]
    );

    let element = block.element(&theme());
    assert_eq!(element.find("code-row-1").unwrap().texts(), [" ", "efgh"]);
}

#[test]
fn test_code_block_without_line_numbers() {
    let element = CodeBlock::new("let x = 1;").line_numbers(false).element(&theme());
    assert_eq!(element.find("code-row-0").unwrap().texts(), ["let x = 1;"]);
}

#[test]
fn test_code_block_header_and_borders() {
    let block = CodeBlock::new("fn main() {}").title("Example").language("rust");
    let element = block.element(&theme());
    assert_eq!(element.find("code-header").unwrap().texts(), ["Example", "rust"]);
    assert_eq!(element.style.border, weft::Border::Single);

    let bare = CodeBlock::new("x").borders(false).element(&theme());
    assert!(bare.find("code-header").is_none());
    assert_eq!(bare.style.border, weft::Border::None);
}

#[test]
fn test_highlight_line_script() {
    let token = |kind, text: &str| Token { kind, text: text.to_string() };
    assert_eq!(
        code_block::highlight_line("const x = 'hi'; // note", "javascript"),
        [
            token(TokenKind::Keyword, "const"),
            token(TokenKind::Plain, " x = "),
            token(TokenKind::String, "'hi'"),
            token(TokenKind::Plain, "; "),
            token(TokenKind::Comment, "// note"),
        ]
    );
    assert_eq!(
        code_block::highlight_line(r#"{"ok": true}"#, "json"),
        [
            token(TokenKind::Plain, "{"),
            token(TokenKind::String, r#""ok""#),
            token(TokenKind::Plain, ": "),
            token(TokenKind::Keyword, "true"),
            token(TokenKind::Plain, "}"),
        ]
    );
    // Whole words only.
    assert_eq!(
        code_block::highlight_line("constant", "typescript"),
        [token(TokenKind::Plain, "constant")]
    );
    assert_eq!(
        code_block::highlight_line("if x", "text"),
        [token(TokenKind::Plain, "if x")]
    );
}

#[test]
fn test_code_block_highlight_styles_tokens() {
    let element = CodeBlock::new("return 1")
        .language("javascript")
        .syntax_highlight(true)
        .line_numbers(false)
        .element(&theme());
    let row = element.find("code-row-0").unwrap();
    assert_eq!(row.texts(), ["return", " 1"]);
    let children = row.get_children();
    assert_eq!(children[0].style.foreground, Some(Color::MAGENTA));
    assert_eq!(children[1].style.foreground, Some(Color::YELLOW));
}
