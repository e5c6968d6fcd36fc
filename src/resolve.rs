//! Suggestion resolvers
//!
//! A resolver is any pure function `&str -> String` that maps the current
//! input to the suffix that would complete it. An empty suffix means "no
//! suggestion". Resolvers run on every render so they must be cheap and
//! side effect free.
//!
//! The default resolver scans an ordered word list and completes with the
//! first prefix match:
//!
//! ```rust
//! # use ghostfield::prelude::*;
//! let words = vec!["snake".to_string(), "snail".to_string()];
//! let complete = from_words(words, false);
//!
//! let r = complete("sn");
//! // "ake", first match wins over "snail"
//! # assert_eq!(r, "ake");
//!
//! let r = complete("");
//! // ""
//! # assert_eq!(r, "");
//! ```
//!
//! Resolvers compose with [`or_else`], the first non-empty suffix wins:
//!
//! ```rust
//! # use ghostfield::prelude::*;
//! let words = vec!["python".to_string()];
//! let complete = or_else(
//!     |input: &str| if input == "Swift" { "UI".to_string() } else { String::new() },
//!     from_words(words, false),
//! );
//!
//! let r = complete("Swift");
//! // "UI"
//! # assert_eq!(r, "UI");
//!
//! let r = complete("py");
//! // "thon"
//! # assert_eq!(r, "thon");
//! ```

use crate::utils::{grapheme_len, grapheme_suffix, starts_with_fold};

/// Complete `input` against an ordered word list
///
/// Walks `words` in the given order and returns the remaining suffix of the
/// first word that starts with `input` and is longer than it, lengths
/// measured in grapheme clusters. Ties are broken by list order, never by
/// suffix length. Empty `input` never matches.
///
/// With `capitalized` set the prefix test is byte-exact, with a case-folded
/// fallback kept from the original widget. The fallback accepts everything
/// the exact test would reject, so the flag does not change observable
/// behavior. Kept as is, see DESIGN.md.
///
/// # Examples
/// ```rust
/// # use ghostfield::prelude::*;
/// let words = vec!["C".to_string(), "C#".to_string(), "Kotlin".to_string()];
///
/// let r = suffix_from_words("c", &words, false);
/// // "#", "C" itself is too short to complete anything
/// # assert_eq!(r, "#");
///
/// let r = suffix_from_words("Kotlin", &words, false);
/// // "", input already spells the whole word
/// # assert_eq!(r, "");
///
/// let r = suffix_from_words("rust", &words, false);
/// // ""
/// # assert_eq!(r, "");
/// ```
pub fn suffix_from_words(input: &str, words: &[String], capitalized: bool) -> String {
    if input.is_empty() {
        return String::new();
    }
    let input_len = grapheme_len(input);
    for word in words {
        let matched = if capitalized {
            word.starts_with(input) || starts_with_fold(word, input)
        } else {
            starts_with_fold(word, input)
        };
        if matched && grapheme_len(word) > input_len {
            return grapheme_suffix(word, input_len).to_string();
        }
    }
    String::new()
}

/// Build a resolver from an ordered word list
///
/// Closure form of [`suffix_from_words`], the shape
/// [`SuggestionField`][crate::SuggestionField] consumes.
///
/// # Examples
/// ```rust
/// # use ghostfield::prelude::*;
/// let complete = from_words(vec!["banana".to_string()], false);
/// let r = complete("ban");
/// // "ana"
/// # assert_eq!(r, "ana");
/// ```
pub fn from_words(words: Vec<String>, capitalized: bool) -> impl Fn(&str) -> String {
    move |input| suffix_from_words(input, &words, capitalized)
}

/// Chain two resolvers, first non-empty suffix wins
///
/// # Examples
/// ```rust
/// # use ghostfield::prelude::*;
/// let primary = |input: &str| if input == "he" { "llo".to_string() } else { String::new() };
/// let complete = or_else(primary, from_words(vec!["help".to_string()], false));
///
/// let r = complete("he");
/// // "llo", primary shadows the word list
/// # assert_eq!(r, "llo");
///
/// let r = complete("hel");
/// // "p"
/// # assert_eq!(r, "p");
/// ```
pub fn or_else<P, F>(primary: P, fallback: F) -> impl Fn(&str) -> String
where
    P: Fn(&str) -> String,
    F: Fn(&str) -> String,
{
    move |input| {
        let suffix = primary(input);
        if suffix.is_empty() {
            fallback(input)
        } else {
            suffix
        }
    }
}

/// The resolver that never suggests anything
///
/// Default for fields constructed from a word list alone.
pub fn empty() -> impl Fn(&str) -> String {
    |_| String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_input_never_matches() {
        let words = owned(&["", "a", "banana"]);
        assert_eq!(suffix_from_words("", &words, false), "");
        assert_eq!(suffix_from_words("", &words, true), "");
    }

    #[test]
    fn first_match_wins_in_list_order() {
        // "snail" has the shorter remaining suffix but comes second
        let words = owned(&["snake", "snail", "snap"]);
        assert_eq!(suffix_from_words("sn", &words, false), "ake");
        assert_eq!(suffix_from_words("sna", &words, false), "ke");
        assert_eq!(suffix_from_words("snai", &words, false), "l");
    }

    #[test]
    fn exhausted_words_give_no_suggestion() {
        let words = owned(&["snake"]);
        assert_eq!(suffix_from_words("snake", &words, false), "");
        assert_eq!(suffix_from_words("snakes", &words, false), "");
        assert_eq!(suffix_from_words("zebra", &words, false), "");
    }

    #[test]
    fn matching_ignores_case_both_ways() {
        let words = owned(&["JavaScript"]);
        assert_eq!(suffix_from_words("java", &words, false), "Script");
        assert_eq!(suffix_from_words("JAVAs", &words, false), "cript");
    }

    #[test]
    fn capitalized_flag_is_observably_inert() {
        // the case-folded fallback fires whenever the exact test fails
        let words = owned(&["JavaScript", "java beans"]);
        assert_eq!(suffix_from_words("Java", &words, true), "Script");
        assert_eq!(suffix_from_words("java", &words, true), "Script");
        assert_eq!(
            suffix_from_words("java", &words, true),
            suffix_from_words("java", &words, false),
        );
    }

    #[test]
    fn suffix_counts_graphemes_not_bytes() {
        let words = owned(&["héllo"]);
        assert_eq!(suffix_from_words("hé", &words, false), "llo");
        let words = owned(&["口水鸡"]);
        assert_eq!(suffix_from_words("口", &words, false), "水鸡");
    }

    #[test]
    fn or_else_prefers_non_empty_primary() {
        let complete = or_else(
            |input: &str| {
                if input == "py" {
                    " (no ... it's not a snake)".to_string()
                } else {
                    String::new()
                }
            },
            from_words(owned(&["python"]), false),
        );
        assert_eq!(complete("py"), " (no ... it's not a snake)");
        assert_eq!(complete("pyt"), "hon");
        assert_eq!(complete("rb"), "");
    }

    #[test]
    fn empty_resolver_is_silent() {
        let complete = empty();
        assert_eq!(complete("anything"), "");
        assert_eq!(complete(""), "");
    }
}
