//! Protected-span detection.
//!
//! Each category is detected independently against the original text, so
//! categories never see each other's placeholders. Overlap between categories
//! is resolved afterwards by the range resolver.

use regex::Regex;

use super::options::NormalizationOptions;

/// Top-level domains recognized by bare-domain URL detection.
pub const URL_TLDS: [&str; 20] = [
    "com", "net", "org", "edu", "gov", "mil", "io", "co", "ai", "dev", "app", "info", "biz", "us",
    "uk", "de", "fr", "jp", "au", "ca",
];

/// Delimiter for placeholder tokens. Private-use area, so it is neither
/// whitespace nor punctuation and is statistically absent from natural text.
pub(crate) const PLACEHOLDER_DELIM: char = '\u{E000}';

/// Category of content a protected span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanCategory {
    /// Email address (`team@example.com`)
    Email,
    /// URL (`https://...`, `www....`, or bare domain with a known TLD)
    Url,
    /// Contraction or possessive (`don't`, `dogs'`)
    Contraction,
    /// Hyphen/underscore compound (`state-of-the-art`, `snake_case`)
    HyphenCompound,
}

impl SpanCategory {
    /// Priority when spans from different categories overlap; lower wins.
    /// URL/email detection is the most specific, so it outranks word-level
    /// categories.
    pub(crate) fn priority(self) -> u8 {
        match self {
            SpanCategory::Email => 0,
            SpanCategory::Url => 1,
            SpanCategory::Contraction => 2,
            SpanCategory::HyphenCompound => 3,
        }
    }

    /// Tag used in placeholder tokens for this category.
    pub(crate) fn tag(self) -> &'static str {
        match self {
            SpanCategory::Email => "EML",
            SpanCategory::Url => "URL",
            SpanCategory::Contraction => "APO",
            SpanCategory::HyphenCompound => "HYP",
        }
    }
}

/// A contiguous run of the input that must survive the punctuation filter
/// unchanged. Transient; built and discarded within one call.
#[derive(Debug, Clone)]
pub struct ProtectedSpan {
    /// Which detector produced this span
    pub category: SpanCategory,
    /// Start byte offset into the original text (half-open range)
    pub start: usize,
    /// End byte offset into the original text (half-open range)
    pub end: usize,
    /// The exact substring being protected
    pub text: String,
    /// Placeholder token substituted for the span
    pub placeholder: String,
}

impl ProtectedSpan {
    /// Check whether two spans occupy overlapping ranges.
    pub fn overlaps(&self, other: &ProtectedSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Build the placeholder token for a span. The tag and ordinal are letters
/// and digits, so the token passes the character filter untouched; the
/// delimiters on both ends keep any token from being a substring of another.
fn placeholder(category: SpanCategory, index: usize) -> String {
    format!(
        "{delim}{tag}{index}{delim}",
        delim = PLACEHOLDER_DELIM,
        tag = category.tag(),
    )
}

/// Detector for all four protected-span categories.
///
/// Compiles one pattern per category up front; reusable across calls and
/// threads.
pub struct SpanDetector {
    email: Regex,
    url: Regex,
    contraction: Regex,
    compound: Regex,
}

impl SpanDetector {
    /// Compile the category patterns.
    pub fn new() -> Self {
        let tlds = URL_TLDS.join("|");
        Self {
            // Permissive local part, dotted domain labels, final label >= 2 letters
            email: Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}")
                .unwrap(),
            // Scheme-prefixed and www-prefixed tokens run to the next
            // whitespace; bare domains need a known TLD and take any
            // non-whitespace remainder
            url: Regex::new(&format!(
                r"(?i)\bhttps?://\S+|\bwww\.\S+|\b[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.(?:{tlds})\S*"
            ))
            .unwrap(),
            contraction: Regex::new(r"\b\w+'\w+|\b\w+'").unwrap(),
            compound: Regex::new(r"\b\w+(?:[-_]\w+)+\b").unwrap(),
        }
    }

    fn spans_for(&self, re: &Regex, category: SpanCategory, text: &str) -> Vec<ProtectedSpan> {
        re.find_iter(text)
            .enumerate()
            .map(|(index, m)| ProtectedSpan {
                category,
                start: m.start(),
                end: m.end(),
                text: m.as_str().to_string(),
                placeholder: placeholder(category, index),
            })
            .collect()
    }

    /// Detect email addresses.
    pub fn detect_emails(&self, text: &str) -> Vec<ProtectedSpan> {
        self.spans_for(&self.email, SpanCategory::Email, text)
    }

    /// Detect URLs.
    pub fn detect_urls(&self, text: &str) -> Vec<ProtectedSpan> {
        self.spans_for(&self.url, SpanCategory::Url, text)
    }

    /// Detect contractions and possessives.
    pub fn detect_contractions(&self, text: &str) -> Vec<ProtectedSpan> {
        self.spans_for(&self.contraction, SpanCategory::Contraction, text)
    }

    /// Detect hyphen/underscore compounds.
    pub fn detect_compounds(&self, text: &str) -> Vec<ProtectedSpan> {
        self.spans_for(&self.compound, SpanCategory::HyphenCompound, text)
    }

    /// Detect every candidate span enabled by `options`, against the
    /// original text.
    pub fn detect(&self, text: &str, options: &NormalizationOptions) -> Vec<ProtectedSpan> {
        let mut spans = Vec::new();
        if options.keep_email_url {
            spans.extend(self.detect_emails(text));
            spans.extend(self.detect_urls(text));
        }
        if options.keep_apostrophes {
            spans.extend(self.detect_contractions(text));
        }
        if options.keep_hyphens {
            spans.extend(self.detect_compounds(text));
        }
        log::debug!("detected {} candidate spans", spans.len());
        spans
    }
}

impl Default for SpanDetector {
    fn default() -> Self {
        Self::new()
    }
}
