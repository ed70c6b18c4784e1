//! Character-level keep/drop pass.

use crate::classify::{is_line_break, PunctClass};

use super::options::NormalizationOptions;

/// Walk the masked string one character at a time and decide keep/drop.
/// First match wins:
///
/// 1. custom keep-list → keep
/// 2. digits, when kept → keep
/// 3. line breaks, when kept → keep
/// 4. whitespace or letters (any script) → keep
/// 5. punctuation → replaced with a single space
/// 6. anything else (symbols, emoji, controls) → keep
///
/// Dropped punctuation leaves a space so adjacent words do not fuse
/// (`"Don't"` with apostrophes disabled becomes `"Don t"`); the whitespace
/// pass collapses the residue. Placeholder tokens are letters, digits, and
/// private-use delimiters, so they pass through untouched.
pub(crate) fn filter_chars(
    text: &str,
    options: &NormalizationOptions,
    punct: &PunctClass,
) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if options.keeps(c) {
            out.push(c);
        } else if options.keep_numbers && c.is_ascii_digit() {
            out.push(c);
        } else if options.keep_line_breaks && is_line_break(c) {
            out.push(c);
        } else if c.is_whitespace() || c.is_alphabetic() {
            out.push(c);
        } else if punct.is_punctuation(c) {
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}
