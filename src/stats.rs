//! Punctuation statistics over an (original, result) pair.

use serde::{Deserialize, Serialize};

use crate::classify::PunctClass;
use crate::error::Result;
use crate::normalize::{NormalizationOptions, SpanDetector};

/// Counts of protected elements found in the original text, per category.
/// A category is counted only when its option was enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedCounts {
    /// Email addresses found
    pub emails: usize,
    /// URLs found
    pub urls: usize,
    /// Contractions and possessives found
    pub contractions: usize,
    /// Hyphen/underscore compounds found
    pub hyphenated: usize,
}

/// Statistics describing what a normalization pass removed and protected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PunctuationStats {
    /// Character count of the original text
    pub original_length: usize,

    /// Character count of the result text
    pub result_length: usize,

    /// Characters removed by the transformation
    pub characters_removed: usize,

    /// Removed share of the original, rounded to a whole percent
    /// (0 for empty input)
    pub reduction_percentage: u32,

    /// Distinct punctuation characters present in the original text, sorted.
    /// Reflects the original's punctuation inventory regardless of options.
    pub punctuation_found: Vec<char>,

    /// Protected elements found in the original, gated by the options used
    pub protected: ProtectedCounts,
}

/// JSON output format for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsJsonFormat {
    /// Pretty-printed with indentation
    #[default]
    Pretty,
    /// Single-line compact output
    Compact,
}

impl PunctuationStats {
    /// Serialize the statistics to JSON.
    pub fn to_json(&self, format: StatsJsonFormat) -> Result<String> {
        Ok(match format {
            StatsJsonFormat::Pretty => serde_json::to_string_pretty(self)?,
            StatsJsonFormat::Compact => serde_json::to_string(self)?,
        })
    }
}

/// Compute statistics for an (original, result) pair under the options the
/// transformation was run with.
///
/// Pure over its inputs; it does not re-run the transformation and accepts
/// any pair the caller supplies (passing a consistent pair is the caller's
/// responsibility). Protected-element counts re-run span *detection* on the
/// original text, gated by the same options.
///
/// # Example
///
/// ```
/// use unpunct::{compute_stats, normalize, NormalizationOptions};
///
/// let original = "Don't worry, we'll handle it.";
/// let result = normalize(original);
/// let stats = compute_stats(original, &result, &NormalizationOptions::default());
///
/// assert_eq!(stats.characters_removed, 2);
/// assert_eq!(stats.punctuation_found, vec!['\'', ',', '.']);
/// assert_eq!(stats.protected.contractions, 2);
/// ```
pub fn compute_stats(
    original: &str,
    result: &str,
    options: &NormalizationOptions,
) -> PunctuationStats {
    let original_length = original.chars().count();
    let result_length = result.chars().count();
    let characters_removed = original_length.saturating_sub(result_length);
    let reduction_percentage = if original_length == 0 {
        0
    } else {
        ((characters_removed as f64 / original_length as f64) * 100.0).round() as u32
    };

    let punct = PunctClass::new();
    let mut punctuation_found: Vec<char> = original
        .chars()
        .filter(|c| punct.is_punctuation(*c))
        .collect();
    punctuation_found.sort_unstable();
    punctuation_found.dedup();

    let detector = SpanDetector::new();
    let protected = ProtectedCounts {
        emails: if options.keep_email_url {
            detector.detect_emails(original).len()
        } else {
            0
        },
        urls: if options.keep_email_url {
            detector.detect_urls(original).len()
        } else {
            0
        },
        contractions: if options.keep_apostrophes {
            detector.detect_contractions(original).len()
        } else {
            0
        },
        hyphenated: if options.keep_hyphens {
            detector.detect_compounds(original).len()
        } else {
            0
        },
    };

    PunctuationStats {
        original_length,
        result_length,
        characters_removed,
        reduction_percentage,
        punctuation_found,
        protected,
    }
}
