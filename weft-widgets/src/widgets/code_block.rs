//! Read-only code listing with a line-number gutter and basic highlighting.

use std::sync::LazyLock;

use regex::Regex;
use weft::text::{display_width, take_width, truncate_with};
use weft::{Border, Color, Edges, Element, Justify, Key};

use crate::props;
use crate::theme::{ComponentTheme, ConfigValue, StyleAttributes, Theme};
use crate::widgets::events::{EventResult, Widget};

/// Widest line before truncation or wrapping kicks in.
pub const DEFAULT_MAX_WIDTH: usize = 80;

// =============================================================================
// Highlighting
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Plain,
    Keyword,
    String,
    Comment,
}

impl TokenKind {
    fn style_name(&self) -> &'static str {
        match self {
            TokenKind::Plain => "code_content",
            TokenKind::Keyword => "keyword",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            log::warn!("code block: highlight pattern rejected: {err}");
            None
        }
    }
}

static SCRIPT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(
        r#"(?P<comment>//.*$)|(?P<string>"[^"]*"|'[^']*'|`[^`]*`)|(?P<keyword>\b(?:function|const|let|var|if|else|return|import|export)\b)"#,
    )
});

static JSON: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r#"(?P<string>"[^"]*")|(?P<keyword>\b(?:true|false|null)\b)"#));

static RUST: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(
        r#"(?P<comment>//.*$)|(?P<string>"[^"]*")|(?P<keyword>\b(?:fn|let|mut|pub|use|mod|impl|struct|enum|match|if|else|return|for|while|loop)\b)"#,
    )
});

fn pattern_for(language: &str) -> Option<&'static Regex> {
    let pattern = match language {
        "javascript" | "typescript" => &SCRIPT,
        "json" => &JSON,
        "rust" => &RUST,
        _ => return None,
    };
    pattern.as_ref()
}

/// Split one line into highlighted tokens. Languages without a pattern
/// come back as a single plain token.
pub fn highlight_line(line: &str, language: &str) -> Vec<Token> {
    let Some(re) = pattern_for(language) else {
        return vec![Token::new(TokenKind::Plain, line)];
    };

    let mut tokens = Vec::new();
    let mut last = 0;
    for caps in re.captures_iter(line) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            tokens.push(Token::new(TokenKind::Plain, &line[last..whole.start()]));
        }
        let kind = if caps.name("comment").is_some() {
            TokenKind::Comment
        } else if caps.name("string").is_some() {
            TokenKind::String
        } else {
            TokenKind::Keyword
        };
        tokens.push(Token::new(kind, whole.as_str()));
        last = whole.end();
    }
    if last < line.len() || tokens.is_empty() {
        tokens.push(Token::new(TokenKind::Plain, &line[last..]));
    }
    tokens
}

// =============================================================================
// Layout
// =============================================================================

/// Width of the line-number gutter: the digit count of the last number.
pub fn gutter_width(start_line: usize, line_count: usize) -> usize {
    let last = start_line + line_count.saturating_sub(1);
    last.to_string().len()
}

/// Cut `line` into `max_width`-wide pieces. Always yields at least one piece.
pub fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || display_width(line) <= max_width {
        return vec![line.to_string()];
    }
    let mut pieces = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        let mut piece = take_width(rest, max_width);
        if piece.is_empty() {
            // A single character wider than the limit still has to go somewhere.
            piece = rest.chars().take(1).collect();
        }
        rest = &rest[piece.len()..];
        pieces.push(piece);
    }
    pieces
}

/// One rendered row: the gutter number (absent on wrapped continuations)
/// and the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRow {
    pub number: Option<usize>,
    pub text: String,
}

pub struct CodeBlock {
    code: String,
    language: String,
    title: Option<String>,
    has_line_numbers: bool,
    has_borders: bool,
    start_line_number: usize,
    has_word_wrap: bool,
    max_width: usize,
    has_syntax_highlight: bool,
}

impl CodeBlock {
    pub const THEME: &'static str = "CodeBlock";

    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: "text".to_string(),
            title: None,
            has_line_numbers: true,
            has_borders: true,
            start_line_number: 1,
            has_word_wrap: false,
            max_width: DEFAULT_MAX_WIDTH,
            has_syntax_highlight: false,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Header line above the code. The language is shown next to it.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into()).filter(|title| !title.is_empty());
        self
    }

    pub fn line_numbers(mut self, has_line_numbers: bool) -> Self {
        self.has_line_numbers = has_line_numbers;
        self
    }

    pub fn borders(mut self, has_borders: bool) -> Self {
        self.has_borders = has_borders;
        self
    }

    pub fn start_line_number(mut self, start: usize) -> Self {
        self.start_line_number = start;
        self
    }

    /// Wrap long lines onto continuation rows instead of cutting them.
    pub fn word_wrap(mut self, has_word_wrap: bool) -> Self {
        self.has_word_wrap = has_word_wrap;
        self
    }

    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn syntax_highlight(mut self, has_syntax_highlight: bool) -> Self {
        self.has_syntax_highlight = has_syntax_highlight;
        self
    }

    pub fn lines(&self) -> Vec<&str> {
        self.code.split('\n').collect()
    }

    pub fn gutter_width(&self) -> usize {
        gutter_width(self.start_line_number, self.lines().len())
    }

    /// Rows after truncation or wrapping, numbered from `start_line_number`.
    pub fn rows(&self) -> Vec<CodeRow> {
        self.lines()
            .into_iter()
            .enumerate()
            .flat_map(|(index, line)| {
                let number = self.start_line_number + index;
                let pieces = if self.has_word_wrap {
                    wrap_line(line, self.max_width)
                } else {
                    vec![truncate_with(line, self.max_width, "...")]
                };
                pieces.into_iter().enumerate().map(move |(piece, text)| CodeRow {
                    number: (piece == 0).then_some(number),
                    text,
                })
            })
            .collect()
    }

    fn tokens(&self, text: &str) -> Vec<Token> {
        if self.has_syntax_highlight {
            highlight_line(text, &self.language)
        } else {
            vec![Token::new(TokenKind::Plain, text)]
        }
    }
}

impl Widget for CodeBlock {
    fn handle_key(&mut self, _key: Key) -> EventResult {
        EventResult::Ignored
    }

    fn element(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);
        let language = props! { language: self.language.as_str() };
        let gutter = self.gutter_width();

        let header = self.title.as_ref().map(|title| {
            styles.apply(
                "header",
                &props! {},
                Element::row()
                    .id("code-header")
                    .child(styles.apply("title", &props! {}, Element::text(title.clone())))
                    .child(styles.apply("language", &props! {}, Element::text(self.language.clone()))),
            )
        });

        let rows = self.rows().into_iter().enumerate().map(|(index, row)| {
            let number = self.has_line_numbers.then(|| {
                let label = row.number.map(|n| n.to_string()).unwrap_or_default();
                styles.apply(
                    "line_number",
                    &props! {},
                    Element::text(format!("{label:>gutter$}")),
                )
            });
            let tokens = self
                .tokens(&row.text)
                .into_iter()
                .map(|token| styles.apply(token.kind.style_name(), &language, Element::text(token.text)));
            styles.apply(
                "code_line",
                &props! {},
                Element::row()
                    .id(format!("code-row-{index}"))
                    .maybe_child(number)
                    .children(tokens),
            )
        });

        let body = styles.apply(
            "code_container",
            &props! { has_borders: self.has_borders },
            Element::col().id("code-body").children(rows),
        );

        styles.apply(
            "container",
            &props! { has_borders: self.has_borders },
            Element::col().maybe_child(header).child(body),
        )
    }
}

fn language_color(language: Option<&str>) -> Color {
    match language {
        Some("javascript") => Color::YELLOW,
        Some("typescript") => Color::BLUE,
        Some("python") => Color::GREEN,
        Some("json") => Color::CYAN,
        Some("css") => Color::MAGENTA,
        Some("html") => Color::RED,
        Some("rust") => Color::RED,
        _ => Color::WHITE,
    }
}

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |p| {
            let attrs = StyleAttributes::new();
            if p.flag("has_borders") {
                attrs.border(Border::Single).border_color(Color::GRAY)
            } else {
                attrs
            }
        })
        .style("header", |_| {
            StyleAttributes::new()
                .justify(Justify::SpaceBetween)
                .padding(Edges::bottom(1))
        })
        .style("title", |_| StyleAttributes::new().color(Color::WHITE).bold(true))
        .style("language", |_| StyleAttributes::new().color(Color::GRAY).italic(true))
        .style("code_container", |p| {
            let attrs = StyleAttributes::new().padding(Edges::all(1));
            if p.flag("has_borders") {
                attrs.border(Border::Single)
            } else {
                attrs
            }
        })
        .style("code_line", |_| StyleAttributes::new())
        .style("line_number", |_| StyleAttributes::new().color(Color::GRAY).margin(Edges::right(2)))
        .style("code_content", |p| StyleAttributes::new().color(language_color(p.str("language"))))
        .style("keyword", |_| StyleAttributes::new().color(Color::MAGENTA).bold(true))
        .style("string", |_| StyleAttributes::new().color(Color::GREEN))
        .style("comment", |_| StyleAttributes::new().color(Color::GRAY).italic(true))
        .config(|| {
            ConfigValue::map([(
                "colors",
                ConfigValue::map([
                    ("javascript", "yellow"),
                    ("typescript", "blue"),
                    ("python", "green"),
                    ("json", "cyan"),
                    ("bash", "white"),
                    ("css", "magenta"),
                    ("html", "red"),
                    ("rust", "red"),
                    ("default", "white"),
                ]),
            )])
        })
}
