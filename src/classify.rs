//! Character classification primitives shared by the filter and stats passes.

use regex::Regex;

/// Unicode-aware punctuation test.
///
/// A character counts as punctuation when it falls in Unicode general
/// category P*, or when it is in the fixed ASCII punctuation set
/// (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`). The ASCII set is wider than P* for
/// ASCII input: it also covers `$`, `+`, `<`, `=`, `>`, `^`, `` ` ``, `|`,
/// and `~`, which Unicode classifies as symbols.
pub struct PunctClass {
    unicode_punct: Regex,
}

impl PunctClass {
    /// Compile the Unicode category matcher.
    pub fn new() -> Self {
        Self {
            unicode_punct: Regex::new(r"\p{P}").unwrap(),
        }
    }

    /// Check whether a character is classified as punctuation.
    pub fn is_punctuation(&self, c: char) -> bool {
        if c.is_ascii() {
            // ASCII punctuation is a superset of ASCII \p{P}
            return c.is_ascii_punctuation();
        }
        let mut buf = [0u8; 4];
        self.unicode_punct.is_match(c.encode_utf8(&mut buf))
    }
}

impl Default for PunctClass {
    fn default() -> Self {
        Self::new()
    }
}

/// Line-break characters handled by the line-preserving mode.
pub fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}
