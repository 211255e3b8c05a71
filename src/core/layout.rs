//! Multi-column line layout
//!
//! Renders several text columns side by side. Each column wraps on its own
//! (at embedded newlines, and at a character cap when it has one) and the
//! wrapped lines are interleaved row by row, every column starting at the
//! right edge of the widest line of the column before it plus [`COLUMN_GAP`].
//!
//! ```
//! use rust_log_facade::core::layout::{render_columns, Column, LINE_SEPARATOR};
//!
//! let text = render_columns(&[Column::fixed("main", 6), Column::natural("ready")]);
//! assert_eq!(text, format!("main    ready{}", LINE_SEPARATOR));
//! ```

/// Spaces between adjacent columns.
pub const COLUMN_GAP: usize = 2;

/// Line terminator used between and after rendered rows.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

const ELLIPSIS: &str = "..";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// As wide as the content; only embedded newlines break lines.
    Natural,
    /// Break after this many characters and pad the last line to it.
    Capped(usize),
}

/// One column of text together with its wrap rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    text: String,
    width: ColumnWidth,
}

impl Column {
    pub fn natural(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            width: ColumnWidth::Natural,
        }
    }

    pub fn capped(text: impl Into<String>, cap: usize) -> Self {
        Self {
            text: text.into(),
            width: ColumnWidth::Capped(cap),
        }
    }

    /// A column shortened to exactly `width` characters before wrapping.
    pub fn fixed(text: &str, width: usize) -> Self {
        Self::capped(shorten(text, width), width)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> ColumnWidth {
        self.width
    }

    /// Split this column into trimmed line segments.
    pub fn wrap(&self) -> Vec<String> {
        let cap = match self.width {
            ColumnWidth::Natural => None,
            ColumnWidth::Capped(cap) => Some(cap.max(1)),
        };

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut count = 0;

        for ch in self.text.chars() {
            match ch {
                '\r' => continue,
                '\n' => {
                    lines.push(current.trim().to_string());
                    current.clear();
                    count = 0;
                }
                _ => {
                    current.push(ch);
                    count += 1;
                    if cap == Some(count) {
                        lines.push(current.trim().to_string());
                        current.clear();
                        count = 0;
                    }
                }
            }
        }
        if !current.is_empty() || lines.is_empty() {
            lines.push(current.trim().to_string());
        }

        if let (Some(cap), Some(last)) = (cap, lines.last_mut()) {
            pad_to(last, cap);
        }
        lines
    }
}

/// Fit `text` into exactly `width` characters.
///
/// Longer text keeps its tail behind a `..` prefix; shorter text is padded
/// with spaces. When `width` leaves no room for a tail only the dots that
/// fit are kept.
pub fn shorten(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        let mut out = text.to_string();
        pad_to(&mut out, width);
        return out;
    }
    if width <= ELLIPSIS.len() {
        return ELLIPSIS[..width].to_string();
    }

    let tail: String = text.chars().skip(len - (width - ELLIPSIS.len())).collect();
    format!("{ELLIPSIS}{tail}")
}

/// Render `columns` side by side, one output row per wrapped line.
///
/// Every row, including the last, ends with [`LINE_SEPARATOR`].
pub fn render_columns(columns: &[Column]) -> String {
    let mut rows: Vec<String> = Vec::new();
    let mut offset = 0;

    for column in columns {
        let lines = column.wrap();
        let mut widest = 0;

        for (index, line) in lines.iter().enumerate() {
            if rows.len() <= index {
                rows.push(String::new());
            }
            let row = &mut rows[index];
            pad_to(row, offset);
            row.push_str(line);
            widest = widest.max(line.chars().count());
        }

        offset += widest + COLUMN_GAP;
    }

    let mut out = rows.join(LINE_SEPARATOR);
    out.push_str(LINE_SEPARATOR);
    out
}

fn pad_to(text: &mut String, width: usize) {
    let len = text.chars().count();
    if len < width {
        text.extend(std::iter::repeat(' ').take(width - len));
    }
}
