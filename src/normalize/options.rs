//! Normalization options and configuration.

use crate::error::{Error, Result};
use crate::validate::validate_keep_list;

/// Options controlling which content survives punctuation removal.
///
/// Options are read for the duration of one transformation call; the engine
/// keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationOptions {
    /// Preserve contractions and possessives (`don't`, `dogs'`)
    pub keep_apostrophes: bool,

    /// Preserve hyphen/underscore compounds (`state-of-the-art`, `snake_case`)
    pub keep_hyphens: bool,

    /// Preserve email addresses and URLs
    pub keep_email_url: bool,

    /// Preserve decimal digits
    pub keep_numbers: bool,

    /// Preserve line-break structure instead of collapsing to spaces
    pub keep_line_breaks: bool,

    /// Characters always preserved, regardless of classification.
    /// Takes priority over every other rule.
    pub custom_keep_list: String,
}

impl NormalizationOptions {
    /// Create options with the default preservation rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable contraction/possessive preservation.
    pub fn with_apostrophes(mut self, keep: bool) -> Self {
        self.keep_apostrophes = keep;
        self
    }

    /// Enable or disable hyphen/underscore compound preservation.
    pub fn with_hyphens(mut self, keep: bool) -> Self {
        self.keep_hyphens = keep;
        self
    }

    /// Enable or disable email address and URL preservation.
    pub fn with_email_url(mut self, keep: bool) -> Self {
        self.keep_email_url = keep;
        self
    }

    /// Enable or disable digit preservation.
    pub fn with_numbers(mut self, keep: bool) -> Self {
        self.keep_numbers = keep;
        self
    }

    /// Enable or disable line-break preservation.
    pub fn with_line_breaks(mut self, keep: bool) -> Self {
        self.keep_line_breaks = keep;
        self
    }

    /// Set the custom keep-list. The string is stored as-is; use
    /// [`with_checked_keep_list`](Self::with_checked_keep_list) to reject
    /// control characters up front.
    pub fn with_keep_list(mut self, list: impl Into<String>) -> Self {
        self.custom_keep_list = list.into();
        self
    }

    /// Set the custom keep-list, rejecting lists that contain `\n`, `\r`, or
    /// `\t`. These characters interfere with line-based normalization and
    /// must not be whitelisted.
    pub fn with_checked_keep_list(self, list: impl Into<String>) -> Result<Self> {
        let list = list.into();
        let report = validate_keep_list(&list);
        if !report.is_valid {
            return Err(Error::InvalidKeepList(report.invalid_chars.join(", ")));
        }
        Ok(self.with_keep_list(list))
    }

    /// Check whether a character is in the custom keep-list.
    pub fn keeps(&self, c: char) -> bool {
        self.custom_keep_list.contains(c)
    }
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            keep_apostrophes: true,
            keep_hyphens: false,
            keep_email_url: true,
            keep_numbers: true,
            keep_line_breaks: true,
            custom_keep_list: String::new(),
        }
    }
}
