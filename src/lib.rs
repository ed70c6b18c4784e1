//! # unpunct
//!
//! Selective punctuation removal and text normalization for Rust.
//!
//! This library strips punctuation from text while preserving chosen
//! categories of content verbatim: contractions and possessives,
//! hyphen/underscore compounds, email addresses and URLs, digits,
//! line-break structure, and user-chosen literal characters.
//!
//! ## Quick Start
//!
//! ```
//! use unpunct::normalize;
//!
//! let result = normalize("Don't worry, we'll handle it.");
//! assert_eq!(result, "Don't worry we'll handle it");
//! ```
//!
//! ## Features
//!
//! - **Protected spans**: emails, URLs, contractions, and compounds survive
//!   the filter intact
//! - **Unicode-aware**: letters of any script survive; general-category
//!   punctuation is removed
//! - **Custom keep-list**: literal characters exempt from removal, highest
//!   priority
//! - **Line-break preservation**: per-line whitespace collapse with blank
//!   lines capped at one
//! - **Statistics**: removal counts, punctuation inventory, protected-element
//!   counts
//! - **Parallel batch processing**: uses Rayon for many independent inputs

pub mod classify;
pub mod error;
pub mod normalize;
pub mod stats;
pub mod validate;

// Re-export commonly used types
pub use error::{Error, Result};
pub use normalize::{
    NormalizationOptions, Normalizer, ProtectedSpan, SpanCategory, SpanDetector, URL_TLDS,
};
pub use stats::{compute_stats, ProtectedCounts, PunctuationStats, StatsJsonFormat};
pub use validate::{validate_keep_list, KeepListValidation};

use rayon::prelude::*;

/// Normalize text with the default options.
///
/// Defaults keep apostrophes, emails/URLs, digits, and line breaks; hyphen
/// compounds are split and the custom keep-list is empty.
///
/// # Example
///
/// ```
/// use unpunct::normalize;
///
/// assert_eq!(
///     normalize("Contact team@example.com for support!"),
///     "Contact team@example.com for support"
/// );
/// ```
pub fn normalize(text: &str) -> String {
    Normalizer::with_defaults().normalize(text)
}

/// Normalize text with custom options.
///
/// # Example
///
/// ```
/// use unpunct::{normalize_with_options, NormalizationOptions};
///
/// let options = NormalizationOptions::new().with_apostrophes(false);
/// assert_eq!(
///     normalize_with_options("Don't worry!", &options),
///     "Don t worry"
/// );
/// ```
pub fn normalize_with_options(text: &str, options: &NormalizationOptions) -> String {
    Normalizer::new(options.clone()).normalize(text)
}

/// Normalize many inputs in parallel.
///
/// Each call is independent and stateless, so inputs are processed across
/// threads with no locking; results come back in input order.
///
/// # Example
///
/// ```
/// use unpunct::{normalize_batch, NormalizationOptions};
///
/// let texts = ["First!", "Second?"];
/// let results = normalize_batch(&texts, &NormalizationOptions::default());
/// assert_eq!(results, vec!["First", "Second"]);
/// ```
pub fn normalize_batch<S: AsRef<str> + Sync>(
    texts: &[S],
    options: &NormalizationOptions,
) -> Vec<String> {
    let normalizer = Normalizer::new(options.clone());
    texts
        .par_iter()
        .map(|text| normalizer.normalize(text.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_matches_with_options_on_defaults() {
        let text = "Hello, world! Visit www.example.org today.";
        assert_eq!(
            normalize(text),
            normalize_with_options(text, &NormalizationOptions::default())
        );
    }

    #[test]
    fn test_custom_keep_list_overrides_disabled_rule() {
        let options = NormalizationOptions::new()
            .with_apostrophes(false)
            .with_keep_list("'");
        assert_eq!(
            normalize_with_options("Don't use @ symbol.", &options),
            "Don't use symbol"
        );
    }

    #[test]
    fn test_batch_matches_sequential() {
        let texts = ["Don't stop!", "state-of-the-art", "a@b.com rocks!"];
        let options = NormalizationOptions::default();

        let batch = normalize_batch(&texts, &options);
        let sequential: Vec<String> = texts
            .iter()
            .map(|t| normalize_with_options(t, &options))
            .collect();
        assert_eq!(batch, sequential);
    }

    #[test]
    fn test_batch_preserves_order() {
        let texts: Vec<String> = (0..64).map(|i| format!("item {i}!")).collect();
        let results = normalize_batch(&texts, &NormalizationOptions::default());
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result, &format!("item {i}"));
        }
    }
}
