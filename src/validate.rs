//! Keep-list validation.

use serde::{Deserialize, Serialize};

/// Result of checking a candidate custom keep-list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeepListValidation {
    /// Whether the keep-list is usable as-is
    pub is_valid: bool,

    /// Offending characters rendered as escape sequences (`"\\n"`, `"\\t"`),
    /// deduplicated, in first-occurrence order
    pub invalid_chars: Vec<String>,
}

/// Check a candidate keep-list for disallowed control characters.
///
/// `\n`, `\r`, and `\t` interfere with line-based normalization and must not
/// be whitelisted. Every other character is acceptable, including ordinary
/// punctuation and letters.
///
/// # Example
///
/// ```
/// use unpunct::validate_keep_list;
///
/// assert!(validate_keep_list("$@#%&*").is_valid);
///
/// let report = validate_keep_list("$@\n\t");
/// assert!(!report.is_valid);
/// assert_eq!(report.invalid_chars, vec!["\\n", "\\t"]);
/// ```
pub fn validate_keep_list(list: &str) -> KeepListValidation {
    let mut invalid_chars: Vec<String> = Vec::new();
    for c in list.chars() {
        let escaped = match c {
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            _ => continue,
        };
        if !invalid_chars.iter().any(|e| e == escaped) {
            invalid_chars.push(escaped.to_string());
        }
    }

    KeepListValidation {
        is_valid: invalid_chars.is_empty(),
        invalid_chars,
    }
}
