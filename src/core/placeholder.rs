//! Positional `{}` substitution for message templates

use std::fmt::{Display, Write};

/// Text that replaces the whole message when the template has more `{}`
/// markers than supplied values.
pub const PLACEHOLDER_OVERFLOW: &str = "more placeholders than values were supplied";

const MARKER: &str = "{}";

/// Result of substituting values into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution {
    Complete(String),
    Overflow,
}

impl Substitution {
    pub fn is_overflow(&self) -> bool {
        matches!(self, Substitution::Overflow)
    }

    /// The rendered text, or [`PLACEHOLDER_OVERFLOW`] on overflow.
    pub fn into_text(self) -> String {
        match self {
            Substitution::Complete(text) => text,
            Substitution::Overflow => PLACEHOLDER_OVERFLOW.to_string(),
        }
    }
}

/// Replace each `{}` in `template`, left to right, with the next value.
///
/// Unused trailing values are ignored. There is no escape for a literal `{}`.
pub fn substitute(template: &str, values: &[&dyn Display]) -> Substitution {
    let mut out = String::with_capacity(template.len());
    let mut values = values.iter();
    let mut rest = template;

    while let Some(pos) = rest.find(MARKER) {
        let Some(value) = values.next() else {
            return Substitution::Overflow;
        };
        out.push_str(&rest[..pos]);
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", value);
        rest = &rest[pos + MARKER.len()..];
    }
    out.push_str(rest);

    Substitution::Complete(out)
}

/// Convenience wrapper returning the final message text.
pub fn format_placeholders(template: &str, values: &[&dyn Display]) -> String {
    substitute(template, values).into_text()
}
