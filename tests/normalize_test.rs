//! Integration tests for the normalization pipeline.

use std::time::{Duration, Instant};

use unpunct::{normalize, normalize_batch, normalize_with_options, NormalizationOptions, Normalizer};

#[test]
fn test_empty_input() {
    assert_eq!(normalize(""), "");

    let options = NormalizationOptions::new()
        .with_apostrophes(false)
        .with_email_url(false)
        .with_numbers(false)
        .with_line_breaks(false);
    assert_eq!(normalize_with_options("", &options), "");
}

#[test]
fn test_pure_punctuation_collapses_to_empty() {
    assert_eq!(normalize("!@#$%^&*()"), "");
    assert_eq!(normalize("...,,,;;;"), "");
}

#[test]
fn test_text_without_punctuation_unchanged() {
    assert_eq!(normalize("plain words only"), "plain words only");
}

#[test]
fn test_contractions_preserved_by_default() {
    assert_eq!(
        normalize("Don't worry, we'll handle it."),
        "Don't worry we'll handle it"
    );
}

#[test]
fn test_contractions_split_when_disabled() {
    let options = NormalizationOptions::new().with_apostrophes(false);
    assert_eq!(
        normalize_with_options("Don't worry, we'll handle it.", &options),
        "Don t worry we ll handle it"
    );
}

#[test]
fn test_possessive_preserved() {
    assert_eq!(normalize("the dogs' bowls"), "the dogs' bowls");
}

#[test]
fn test_email_preserved_trailing_punctuation_removed() {
    assert_eq!(
        normalize("Contact team@example.com for support!"),
        "Contact team@example.com for support"
    );
}

#[test]
fn test_email_split_when_disabled() {
    let options = NormalizationOptions::new().with_email_url(false);
    let result = normalize_with_options("Contact team@example.com now", &options);
    assert_eq!(result, "Contact team example com now");
}

#[test]
fn test_urls_preserved() {
    assert_eq!(
        normalize("Read https://example.com/a?b=1 and www.test.org first."),
        "Read https://example.com/a?b=1 and www.test.org first"
    );
}

#[test]
fn test_hyphen_compounds() {
    assert_eq!(
        normalize("a state-of-the-art design"),
        "a state of the art design"
    );

    let options = NormalizationOptions::new().with_hyphens(true);
    assert_eq!(
        normalize_with_options("a state-of-the-art design", &options),
        "a state-of-the-art design"
    );
    assert_eq!(
        normalize_with_options("use snake_case names", &options),
        "use snake_case names"
    );
}

#[test]
fn test_custom_keep_list_has_top_priority() {
    let options = NormalizationOptions::new()
        .with_apostrophes(false)
        .with_keep_list("'");
    assert_eq!(
        normalize_with_options("Don't use @ symbol.", &options),
        "Don't use symbol"
    );
}

#[test]
fn test_digits_survive() {
    assert_eq!(normalize("Call 555-1234 now!"), "Call 555 1234 now");
}

#[test]
fn test_line_break_cap() {
    let options = NormalizationOptions::default();
    assert_eq!(
        normalize_with_options("Para 1.\n\n\n\nPara 2.", &options),
        "Para 1\n\nPara 2"
    );
}

#[test]
fn test_line_breaks_collapsed_when_disabled() {
    let options = NormalizationOptions::new().with_line_breaks(false);
    assert_eq!(
        normalize_with_options("Para 1.\n\n\n\nPara 2.", &options),
        "Para 1 Para 2"
    );
}

#[test]
fn test_intra_line_whitespace_collapsed() {
    assert_eq!(normalize("a   lot\t\tof  gaps"), "a lot of gaps");
}

#[test]
fn test_unicode_punctuation_removed() {
    assert_eq!(normalize("«quoted» — dash"), "quoted dash");
    assert_eq!(normalize("你好。世界！"), "你好 世界");
}

#[test]
fn test_non_punctuation_symbols_survive() {
    assert_eq!(normalize("price €5 ± 2"), "price €5 ± 2");
}

#[test]
fn test_idempotence() {
    let inputs = [
        "Don't worry, we'll handle it.",
        "Contact team@example.com for support!",
        "Para 1.\n\n\n\nPara 2.",
        "state-of-the-art snake_case!",
        "«quoted» — dash… 你好。",
        "!@#$%^&*()",
        "",
    ];
    let option_sets = [
        NormalizationOptions::default(),
        NormalizationOptions::new()
            .with_apostrophes(false)
            .with_hyphens(true),
        NormalizationOptions::new()
            .with_email_url(false)
            .with_line_breaks(false),
        NormalizationOptions::new().with_keep_list("'@."),
    ];

    for options in &option_sets {
        for input in &inputs {
            let once = normalize_with_options(input, options);
            let twice = normalize_with_options(&once, options);
            assert_eq!(
                twice, once,
                "not idempotent for {:?} with {:?}",
                input, options
            );
        }
    }
}

#[test]
fn test_placeholder_shaped_input_is_unsupported() {
    // Documented limitation: input already containing a placeholder-shaped
    // token collides with the token generated for a real protected span and
    // is restored with that span's text.
    let result = normalize("don't \u{E000}APO0\u{E000}");
    assert_eq!(result, "don't don't");
}

#[test]
fn test_batch_matches_sequential_results() {
    let texts = [
        "Don't worry!",
        "Contact team@example.com now.",
        "Para 1.\n\nPara 2.",
    ];
    let options = NormalizationOptions::default();
    let batch = normalize_batch(&texts, &options);
    let sequential: Vec<String> = texts
        .iter()
        .map(|t| normalize_with_options(t, &options))
        .collect();
    assert_eq!(batch, sequential);
}

#[test]
fn test_large_input_within_time_budget() {
    let sentence = "Hello, world! Don't forget to email team@example.com, \
                    or visit https://example.com/docs for the state-of-the-art guide. \
                    It's ready, isn't it?\n";
    let mut input = String::new();
    while input.len() < 140_000 {
        input.push_str(sentence);
    }

    let normalizer = Normalizer::with_defaults();
    let started = Instant::now();
    let result = normalizer.normalize(&input);
    let elapsed = started.elapsed();

    assert!(result.contains("team@example.com"));
    assert!(!result.contains('!'));
    assert!(
        elapsed < Duration::from_secs(1),
        "normalizing {} chars took {:?}",
        input.chars().count(),
        elapsed
    );
}
