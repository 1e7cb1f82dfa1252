//! Static data table with fixed and auto-sized columns.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use weft::text::{pad_center, pad_end, pad_start, truncate_with};
use weft::{Border, Color, Edges, Element, Key};

use crate::props;
use crate::theme::{ComponentTheme, StyleAttributes, Theme};
use crate::widgets::events::{EventResult, Widget};

/// Width the columns share out.
pub const DEFAULT_TABLE_WIDTH: usize = 60;
/// Width of a column that declares none.
pub const DEFAULT_COLUMN_WIDTH: usize = 12;

/// A row the table can read fields from by column key.
pub trait TableRecord {
    fn field(&self, key: &str) -> Option<String>;
}

impl TableRecord for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl TableRecord for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    Fixed(usize),
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Cell formatter: `(field value, record, row index) -> text`.
pub type CellRenderer<R> = Arc<dyn Fn(Option<&str>, &R, usize) -> String + Send + Sync>;

pub struct TableColumn<R> {
    pub key: String,
    pub title: String,
    pub width: Option<ColumnWidth>,
    pub align: ColumnAlign,
    pub render: Option<CellRenderer<R>>,
}

impl<R> TableColumn<R> {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width: None,
            align: ColumnAlign::Left,
            render: None,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(ColumnWidth::Fixed(width));
        self
    }

    pub fn auto(mut self) -> Self {
        self.width = Some(ColumnWidth::Auto);
        self
    }

    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    pub fn render(mut self, render: impl Fn(Option<&str>, &R, usize) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }
}

/// Resolve every column's width. Auto columns split whatever the fixed
/// columns leave of `total_width` evenly (rounding down).
pub fn column_widths<R>(columns: &[TableColumn<R>], total_width: usize) -> Vec<usize> {
    let fixed: usize = columns
        .iter()
        .filter_map(|column| match column.width {
            Some(ColumnWidth::Fixed(width)) => Some(width),
            _ => None,
        })
        .sum();
    let auto_count = columns
        .iter()
        .filter(|column| column.width == Some(ColumnWidth::Auto))
        .count();
    let auto_width = total_width
        .saturating_sub(fixed)
        .checked_div(auto_count)
        .unwrap_or_default();

    columns
        .iter()
        .map(|column| match column.width {
            Some(ColumnWidth::Fixed(width)) => width,
            Some(ColumnWidth::Auto) => auto_width,
            None => DEFAULT_COLUMN_WIDTH,
        })
        .collect()
}

/// Fit `content` into exactly `width` cells: cut with "..." when too wide,
/// then pad per `align`.
pub fn fit_cell(content: &str, width: usize, align: ColumnAlign) -> String {
    let truncated = truncate_with(content, width, "...");
    match align {
        ColumnAlign::Left => pad_end(&truncated, width),
        ColumnAlign::Center => pad_center(&truncated, width),
        ColumnAlign::Right => pad_start(&truncated, width),
    }
}

pub struct Table<R> {
    columns: Vec<TableColumn<R>>,
    data: Vec<R>,
    total_width: usize,
    is_bordered: bool,
    is_striped: bool,
    is_compact: bool,
}

impl<R: TableRecord> Table<R> {
    pub const THEME: &'static str = "Table";

    pub fn new(columns: Vec<TableColumn<R>>, data: Vec<R>) -> Self {
        Self {
            columns,
            data,
            total_width: DEFAULT_TABLE_WIDTH,
            is_bordered: true,
            is_striped: false,
            is_compact: false,
        }
    }

    pub fn total_width(mut self, total_width: usize) -> Self {
        self.total_width = total_width;
        self
    }

    pub fn bordered(mut self, is_bordered: bool) -> Self {
        self.is_bordered = is_bordered;
        self
    }

    /// Zebra-stripe even data rows.
    pub fn striped(mut self, is_striped: bool) -> Self {
        self.is_striped = is_striped;
        self
    }

    pub fn compact(mut self, is_compact: bool) -> Self {
        self.is_compact = is_compact;
        self
    }

    pub fn set_data(&mut self, data: Vec<R>) {
        self.data = data;
    }

    pub fn data(&self) -> &[R] {
        &self.data
    }

    pub fn widths(&self) -> Vec<usize> {
        column_widths(&self.columns, self.total_width)
    }

    /// Cell texts of data row `index`, fitted to their columns.
    pub fn row_cells(&self, index: usize) -> Option<Vec<String>> {
        let record = self.data.get(index)?;
        let widths = self.widths();
        Some(
            self.columns
                .iter()
                .zip(widths)
                .map(|(column, width)| {
                    let value = record.field(&column.key);
                    let content = match &column.render {
                        Some(render) => render(value.as_deref(), record, index),
                        None => value.unwrap_or_default(),
                    };
                    fit_cell(&content, width, column.align)
                })
                .collect(),
        )
    }

    pub fn header_cells(&self) -> Vec<String> {
        self.columns
            .iter()
            .zip(self.widths())
            .map(|(column, width)| fit_cell(&column.title, width, column.align))
            .collect()
    }
}

impl<R: TableRecord> Widget for Table<R> {
    fn handle_key(&mut self, _key: Key) -> EventResult {
        EventResult::Ignored
    }

    fn element(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);

        let header = styles.apply(
            "header_row",
            &props! {},
            Element::row().id("table-header").children(
                self.header_cells()
                    .into_iter()
                    .map(|cell| styles.apply("header_cell", &props! {}, Element::text(cell))),
            ),
        );

        let rows = (0..self.data.len()).filter_map(|index| {
            let cells = self.row_cells(index)?;
            Some(styles.apply(
                "data_row",
                &props! { is_even: index % 2 == 0, is_striped: self.is_striped },
                Element::row()
                    .id(format!("table-row-{index}"))
                    .children(
                        cells
                            .into_iter()
                            .map(|cell| styles.apply("cell", &props! {}, Element::text(cell))),
                    ),
            ))
        });

        styles.apply(
            "container",
            &props! { is_bordered: self.is_bordered, is_compact: self.is_compact },
            Element::col().child(header).children(rows),
        )
    }
}

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |p| {
            let attrs = StyleAttributes::new().padding(Edges::all(u16::from(!p.flag("is_compact"))));
            if p.flag("is_bordered") {
                attrs.border(Border::Single)
            } else {
                attrs
            }
        })
        .style("header_row", |_| {
            StyleAttributes::new()
                .background(Color::BLUE)
                .color(Color::WHITE)
                .bold(true)
        })
        .style("data_row", |p| {
            let striped = p.flag("is_striped") && p.flag("is_even");
            StyleAttributes::new().maybe_background(striped.then_some(Color::GRAY))
        })
        .style("cell", |_| StyleAttributes::new().padding(Edges::horizontal(1)))
        .style("header_cell", |_| {
            StyleAttributes::new()
                .padding(Edges::horizontal(1))
                .background(Color::BLUE)
                .color(Color::WHITE)
                .bold(true)
        })
}
