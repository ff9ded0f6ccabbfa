//! Formatting utilities used for CLI output.

use ansi_term::Style;
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

/// Remove ANSI escape sequences (colors, bold, ...) from a string.
pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Option<Regex>> = OnceLock::new();
    match ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()) {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Terminal columns taken by `s`, ignoring escape sequences.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Pad on the right to `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Wrap free text to `width` columns; an empty value renders as a dash.
pub fn wrap_value(s: &str, width: usize) -> Vec<String> {
    if s.trim().is_empty() {
        return vec!["-".to_string()];
    }
    textwrap::wrap(s, width.max(8))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}
