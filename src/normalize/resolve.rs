//! Overlap resolution, placeholder substitution, and restoration.

use std::collections::{BTreeMap, HashMap};

use regex::Regex;

use super::spans::{ProtectedSpan, PLACEHOLDER_DELIM};

/// Placeholder-to-original mapping built during substitution and consumed
/// during restoration. Ordered so substitution stays deterministic.
pub(crate) type PlaceholderMap = Vec<(String, String)>;

/// Resolve overlapping candidate spans down to a non-overlapping set.
///
/// Candidates are ranked by category priority, then start offset, then span
/// length (longer first); a span that overlaps an already-accepted span is
/// discarded whole, never partially merged. Returns the winners ordered by
/// start offset.
pub(crate) fn resolve_overlaps(mut spans: Vec<ProtectedSpan>) -> Vec<ProtectedSpan> {
    spans.sort_by(|a, b| {
        a.category
            .priority()
            .cmp(&b.category.priority())
            .then(a.start.cmp(&b.start))
            .then(b.end.cmp(&a.end))
    });

    // Accepted spans are disjoint, so only the nearest accepted span on each
    // side of a candidate can clash with it.
    let mut accepted: BTreeMap<usize, ProtectedSpan> = BTreeMap::new();
    for span in spans {
        let clash_before = accepted
            .range(..span.start)
            .next_back()
            .is_some_and(|(_, kept)| kept.end > span.start);
        let clash_after = accepted
            .range(span.start..)
            .next()
            .is_some_and(|(_, kept)| kept.start < span.end);
        if clash_before || clash_after {
            log::trace!(
                "dropping overlapped {:?} span {:?}",
                span.category,
                span.text
            );
            continue;
        }
        accepted.insert(span.start, span);
    }
    accepted.into_values().collect()
}

/// Replace each accepted span with its placeholder token.
///
/// Spans are applied in descending start order so earlier replacements never
/// shift the offsets of spans not yet applied.
pub(crate) fn substitute(text: &str, mut spans: Vec<ProtectedSpan>) -> (String, PlaceholderMap) {
    spans.sort_by(|a, b| b.start.cmp(&a.start));

    let mut masked = text.to_string();
    let mut map: PlaceholderMap = Vec::with_capacity(spans.len());
    for span in spans {
        masked.replace_range(span.start..span.end, &span.placeholder);
        map.push((span.placeholder, span.text));
    }
    log::debug!("substituted {} protected spans", map.len());
    (masked, map)
}

/// Replace every placeholder token with its original text.
///
/// One pass over the text: anything shaped like a placeholder is looked up
/// by exact literal comparison against the map; tokens the map does not know
/// are left untouched. No escaping is needed because lookup keys are never
/// treated as patterns.
pub(crate) fn restore(text: &str, map: &PlaceholderMap) -> String {
    if map.is_empty() {
        return text.to_string();
    }

    let lookup: HashMap<&str, &str> = map
        .iter()
        .map(|(token, original)| (token.as_str(), original.as_str()))
        .collect();

    let token_shape =
        Regex::new(&format!("{d}[A-Z]{{3}}[0-9]+{d}", d = PLACEHOLDER_DELIM)).unwrap();
    token_shape
        .replace_all(text, |caps: &regex::Captures| {
            let token = &caps[0];
            lookup.get(token).copied().unwrap_or(token).to_string()
        })
        .into_owned()
}
