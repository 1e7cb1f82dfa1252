use weft::text::{
    display_width, pad_center, pad_end, pad_start, take_width, truncate_to_width, truncate_with,
};

#[test]
fn test_display_width_wide_chars() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("日本"), 4);
}

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
}

#[test]
fn test_truncate_with_three_dots() {
    assert_eq!(truncate_with("hello world", 8, "..."), "hello...");
}

#[test]
fn test_truncate_to_width_ellipsis() {
    assert_eq!(truncate_to_width("hello world", 6), "hello…");
}

#[test]
fn test_truncate_tiny_width() {
    assert_eq!(truncate_with("hello", 2, "..."), "..");
}

#[test]
fn test_take_width_does_not_split_wide_char() {
    assert_eq!(take_width("日本語", 3), "日");
}

#[test]
fn test_padding() {
    assert_eq!(pad_end("ab", 4), "ab  ");
    assert_eq!(pad_start("7", 3), "  7");
    assert_eq!(pad_center("ab", 5), " ab  ");
    assert_eq!(pad_end("toolong", 3), "toolong");
}
