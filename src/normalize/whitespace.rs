//! Whitespace and line-break normalization, the final pipeline stage.

use regex::Regex;

/// Final whitespace pass with a precompiled blank-line cap.
pub(crate) struct WhitespaceNormalizer {
    blank_line_cap: Regex,
}

impl WhitespaceNormalizer {
    pub(crate) fn new() -> Self {
        Self {
            blank_line_cap: Regex::new(r"\n{3,}").unwrap(),
        }
    }

    pub(crate) fn normalize(&self, text: &str, keep_line_breaks: bool) -> String {
        if keep_line_breaks {
            self.normalize_lines(text)
        } else {
            collapse_all(text)
        }
    }

    /// Collapse whitespace within each line, trim the lines, and cap runs of
    /// blank lines at one.
    fn normalize_lines(&self, text: &str) -> String {
        let unified = text.replace("\r\n", "\n").replace('\r', "\n");

        let lines: Vec<String> = unified
            .split('\n')
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect();
        let joined = lines.join("\n");

        self.blank_line_cap
            .replace_all(&joined, "\n\n")
            .trim()
            .to_string()
    }
}

/// Collapse all whitespace, including line breaks, to single spaces.
fn collapse_all(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
