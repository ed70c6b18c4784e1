//! The selective punctuation-normalization pipeline.

mod filter;
mod options;
mod resolve;
mod spans;
mod whitespace;

pub use options::NormalizationOptions;
pub use spans::{ProtectedSpan, SpanCategory, SpanDetector, URL_TLDS};

use crate::classify::PunctClass;
use filter::filter_chars;
use resolve::{resolve_overlaps, restore, substitute};
use whitespace::WhitespaceNormalizer;

/// Reusable normalization pipeline.
///
/// Compiles the span patterns and character classifier once; each
/// [`normalize`](Self::normalize) call is independent and keeps no state, so
/// one `Normalizer` can be shared freely across threads.
///
/// # Example
///
/// ```
/// use unpunct::{NormalizationOptions, Normalizer};
///
/// let normalizer = Normalizer::with_defaults();
/// assert_eq!(
///     normalizer.normalize("Don't worry, we'll handle it."),
///     "Don't worry we'll handle it"
/// );
/// ```
pub struct Normalizer {
    options: NormalizationOptions,
    detector: SpanDetector,
    punct: PunctClass,
    whitespace: WhitespaceNormalizer,
}

impl Normalizer {
    /// Create a pipeline with the given options.
    pub fn new(options: NormalizationOptions) -> Self {
        Self {
            options,
            detector: SpanDetector::new(),
            punct: PunctClass::new(),
            whitespace: WhitespaceNormalizer::new(),
        }
    }

    /// Create a pipeline with [`NormalizationOptions::default`].
    pub fn with_defaults() -> Self {
        Self::new(NormalizationOptions::default())
    }

    /// The options this pipeline was built with.
    pub fn options(&self) -> &NormalizationOptions {
        &self.options
    }

    /// Run the full transformation: detect protected spans, resolve
    /// overlaps, mask the spans with placeholders, filter punctuation
    /// character by character, restore the spans, and normalize whitespace.
    ///
    /// Total over all inputs; empty input yields an empty string.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let candidates = self.detector.detect(text, &self.options);
        let spans = resolve_overlaps(candidates);
        let (masked, map) = substitute(text, spans);
        let filtered = filter_chars(&masked, &self.options, &self.punct);
        let restored = restore(&filtered, &map);
        self.whitespace
            .normalize(&restored, self.options.keep_line_breaks)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
