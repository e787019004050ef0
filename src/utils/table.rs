//! Table rendering utilities for CLI outputs.

use super::colors::RESET;
use super::formatting::rule;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

struct Row {
    cells: Vec<String>,
    colors: Vec<Option<&'static str>>,
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        let colors = vec![None; cells.len()];
        self.rows.push(Row { cells, colors });
    }

    /// Like `add_row`, with an optional ANSI color per cell. Colors are applied
    /// after padding so they never disturb the alignment.
    pub fn add_colored_row(&mut self, cells: Vec<String>, colors: Vec<Option<&'static str>>) {
        self.rows.push(Row { cells, colors });
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.cells.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render header, a rule made of `separator`, and the rows.
    pub fn render(&self, separator: &str) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w, col.align));
            out.push_str("  ");
        }
        out = out.trim_end().to_string();
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&rule(separator, total));
        out.push('\n');

        for row in &self.rows {
            let mut line = String::new();
            for (i, (col, w)) in self.columns.iter().zip(&widths).enumerate() {
                let text = row.cells.get(i).map(String::as_str).unwrap_or("");
                let padded = pad(text, *w, col.align);
                match row.colors.get(i).copied().flatten() {
                    Some(color) => line.push_str(&format!("{color}{padded}{RESET}")),
                    None => line.push_str(&padded),
                }
                line.push_str("  ");
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(s)));
    match align {
        Align::Left => format!("{s}{fill}"),
        Align::Right => format!("{fill}{s}"),
    }
}
