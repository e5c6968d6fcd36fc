//! A collection of small pure helpers used by the resolvers

use unicode_segmentation::UnicodeSegmentation;

/// Check if `word` starts with `prefix` ignoring letter case
///
/// Both strings are folded with [`str::to_lowercase`] before the comparison,
/// the same folding the original widget applied to whole words.
///
/// # Examples
/// ```rust
/// # use ghostfield::prelude::*;
/// let r = starts_with_fold("JavaScript", "jAVA");
/// // true
/// # assert_eq!(r, true);
///
/// let r = starts_with_fold("JavaScript", "Kotlin");
/// // false
/// # assert_eq!(r, false);
/// ```
#[inline]
pub fn starts_with_fold(word: &str, prefix: &str) -> bool {
    word.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// Last whitespace-delimited token of a string
///
/// Scans from the end for the first space, the token is everything after it.
/// A string without spaces is its own last word. Splits on `' '` only.
///
/// # Examples
/// ```rust
/// # use ghostfield::prelude::*;
/// let r = last_word("the sn");
/// // "sn"
/// # assert_eq!(r, "sn");
///
/// let r = last_word("snake");
/// // "snake"
/// # assert_eq!(r, "snake");
///
/// let r = last_word("trailing ");
/// // ""
/// # assert_eq!(r, "");
/// ```
#[inline]
pub fn last_word(input: &str) -> &str {
    match input.rfind(' ') {
        Some(ix) => &input[ix + 1..],
        None => input,
    }
}

/// Length of a string in grapheme clusters
///
/// Word lengths are compared in graphemes rather than bytes so that
/// case folding or combining marks can not skew the suffix boundary.
///
/// # Examples
/// ```rust
/// # use ghostfield::prelude::*;
/// let r = grapheme_len("héllo");
/// // 5
/// # assert_eq!(r, 5);
/// ```
#[inline]
pub fn grapheme_len(input: &str) -> usize {
    input.graphemes(true).count()
}

/// Suffix of a string past the first `skip` grapheme clusters
///
/// Returns `""` when the string is `skip` graphemes long or shorter.
///
/// # Examples
/// ```rust
/// # use ghostfield::prelude::*;
/// let r = grapheme_suffix("snake", 2);
/// // "ake"
/// # assert_eq!(r, "ake");
///
/// let r = grapheme_suffix("sn", 2);
/// // ""
/// # assert_eq!(r, "");
/// ```
#[inline]
pub fn grapheme_suffix(word: &str, skip: usize) -> &str {
    match word.grapheme_indices(true).nth(skip) {
        Some((ix, _)) => &word[ix..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_is_symmetric_on_ascii_case() {
        assert!(starts_with_fold("Python", "py"));
        assert!(starts_with_fold("python", "PY"));
        assert!(starts_with_fold("python", ""));
        assert!(!starts_with_fold("", "p"));
    }

    #[test]
    fn last_word_splits_on_final_space_only() {
        assert_eq!(last_word("a b c"), "c");
        assert_eq!(last_word(" lead"), "lead");
        assert_eq!(last_word(""), "");
        assert_eq!(last_word("two  spaces"), "spaces");
    }

    #[test]
    fn grapheme_suffix_respects_clusters() {
        // y̆ is two code points but one grapheme
        assert_eq!(grapheme_len("ay̆c"), 3);
        assert_eq!(grapheme_suffix("ay̆c", 2), "c");
        assert_eq!(grapheme_suffix("口水鸡", 1), "水鸡");
    }
}
