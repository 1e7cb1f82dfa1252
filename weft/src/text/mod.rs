use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` columns, appending `ellipsis` when
/// anything was removed. The ellipsis counts toward the width.
pub fn truncate_with(s: &str, max_width: usize, ellipsis: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let ellipsis_width = display_width(ellipsis);
    if max_width <= ellipsis_width {
        return take_width(ellipsis, max_width);
    }

    let mut result = take_width(s, max_width - ellipsis_width);
    result.push_str(ellipsis);
    result
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    truncate_with(s, max_width, "…")
}

/// Longest prefix of `s` that fits in `max_width` columns.
pub fn take_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result
}

/// Right-pad with spaces to exactly `width` columns (no truncation).
pub fn pad_end(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - current))
}

/// Left-pad with spaces to exactly `width` columns (no truncation).
pub fn pad_start(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    format!("{}{s}", " ".repeat(width - current))
}

/// Center within `width` columns; odd leftover goes to the right.
pub fn pad_center(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let total = width - current;
    let left = total / 2;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(total - left))
}
