//! The suggestion field itself
//!
//! [`SuggestionField`] owns the resolver configuration and nothing else:
//! the text being edited belongs to the host and is passed in by reference,
//! focus belongs to whatever event loop drives the frontend. The field only
//! answers two questions - "what would complete the current text" and
//! "what does the committed text become on submit".
//!
//! ```rust
//! # use ghostfield::prelude::*;
//! let languages = ["C", "C#", "C++", "CSS", "HTML", "Java", "JavaScript",
//!                  "Kotlin", "Objective-C", "Python", "Ruby", "Swift"];
//! let field = SuggestionField::with_words("Programming Language", languages);
//!
//! let r = field.preview("Sw");
//! // "Swift", what the ghost line shows
//! # assert_eq!(r, "Swift");
//!
//! let mut text = "Sw".to_string();
//! field.submit(&mut text);
//! // text is now "Swift"
//! # assert_eq!(text, "Swift");
//! ```

use crate::resolve::suffix_from_words;
use crate::utils::last_word;

/// A text field configuration with background completion suggestions
///
/// Built either from a custom resolver closure ([`new`][SuggestionField::new]),
/// from a word list ([`with_words`][SuggestionField::with_words]) or from
/// both at once, in which case a non-empty custom suffix shadows the word
/// list. All state here is immutable configuration; per-keystroke state
/// lives with the host.
pub struct SuggestionField {
    placeholder: String,
    auto_complete: Box<dyn Fn(&str) -> String>,
    words: Vec<String>,
    capitalized: bool,
    divide: bool,
}

impl std::fmt::Debug for SuggestionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionField")
            .field("placeholder", &self.placeholder)
            .field("words", &self.words)
            .field("capitalized", &self.capitalized)
            .field("divide", &self.divide)
            .finish_non_exhaustive()
    }
}

impl SuggestionField {
    /// Field with a caller supplied resolver
    ///
    /// The resolver receives the target text (whole input, or its last word
    /// in [`divide`][SuggestionField::divide] mode) and returns the suffix
    /// to suggest, empty for no suggestion. It runs on every render and
    /// must be pure.
    ///
    /// # Examples
    /// ```rust
    /// # use ghostfield::prelude::*;
    /// let field = SuggestionField::new("Programming Language", |input: &str| {
    ///     match input {
    ///         "Swift" => "UI".to_string(),
    ///         "Python" => " (no ... it's not a snake)".to_string(),
    ///         _ => String::new(),
    ///     }
    /// });
    /// let r = field.suggestion("Swift");
    /// // "UI"
    /// # assert_eq!(r, "UI");
    /// ```
    pub fn new<P, F>(placeholder: P, auto_complete: F) -> Self
    where
        P: Into<String>,
        F: Fn(&str) -> String + 'static,
    {
        Self {
            placeholder: placeholder.into(),
            auto_complete: Box::new(auto_complete),
            words: Vec::new(),
            capitalized: false,
            divide: false,
        }
    }

    /// Field completing against an ordered word list
    ///
    /// First prefix match wins, see
    /// [`suffix_from_words`][crate::resolve::suffix_from_words] for the
    /// exact matching rule.
    ///
    /// # Examples
    /// ```rust
    /// # use ghostfield::prelude::*;
    /// let field = SuggestionField::with_words("fruit", ["banana", "blueberry"]);
    /// let r = field.suggestion("b");
    /// // "anana"
    /// # assert_eq!(r, "anana");
    /// ```
    pub fn with_words<P, I, S>(placeholder: P, words: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(placeholder, crate::resolve::empty()).words(words)
    }

    /// Replace the word list, builder style
    ///
    /// Combined with [`new`][SuggestionField::new] this gives the combined
    /// mode: the custom resolver is consulted first and the word list picks
    /// up whenever it stays silent.
    ///
    /// # Examples
    /// ```rust
    /// # use ghostfield::prelude::*;
    /// let field = SuggestionField::new("greeting", |input: &str| {
    ///     if input == "he" { "y".to_string() } else { String::new() }
    /// })
    /// .words(["hello"]);
    ///
    /// let r = field.suggestion("he");
    /// // "y", custom resolver wins
    /// # assert_eq!(r, "y");
    ///
    /// let r = field.suggestion("hel");
    /// // "lo", word list fallback
    /// # assert_eq!(r, "lo");
    /// ```
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the custom resolver, builder style
    pub fn auto_complete<F>(mut self, auto_complete: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.auto_complete = Box::new(auto_complete);
        self
    }

    /// Toggle the nominally case-sensitive word matching branch
    ///
    /// The branch keeps a case-folded fallback inherited from the original
    /// widget, so flipping this does not change which words match. Preserved
    /// rather than fixed, see DESIGN.md.
    pub fn capitalized(mut self, capitalized: bool) -> Self {
        self.capitalized = capitalized;
        self
    }

    /// Match against the last whitespace-delimited word instead of the whole text
    ///
    /// # Examples
    /// ```rust
    /// # use ghostfield::prelude::*;
    /// let field = SuggestionField::with_words("animal", ["snake"]).divide(true);
    /// let r = field.suggestion("the sn");
    /// // "ake", only "sn" is matched
    /// # assert_eq!(r, "ake");
    /// ```
    pub fn divide(mut self, divide: bool) -> Self {
        self.divide = divide;
        self
    }

    /// Placeholder to show while the field is empty
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The part of the text suggestions are matched against
    ///
    /// Whole text normally, last word in divide mode.
    pub fn target<'a>(&self, text: &'a str) -> &'a str {
        if self.divide {
            last_word(text)
        } else {
            text
        }
    }

    /// Suffix that would complete the current text
    ///
    /// Custom resolver first, word list when it returns nothing. Empty text
    /// always resolves to an empty suffix.
    pub fn suggestion(&self, text: &str) -> String {
        let target = self.target(text);
        // empty input resolves to an empty suffix in every mode
        if target.is_empty() {
            return String::new();
        }
        let suffix = (self.auto_complete)(target);
        if suffix.is_empty() {
            suffix_from_words(target, &self.words, self.capitalized)
        } else {
            suffix
        }
    }

    /// The ghost line: current text plus its suggestion
    ///
    /// Recomputed from `text` on every call so the overlay can never drift
    /// from the input it annotates.
    pub fn preview(&self, text: &str) -> String {
        let mut line = text.to_string();
        line.push_str(&self.suggestion(text));
        line
    }

    /// Commit the suggestion into the live text
    ///
    /// Appends exactly one resolved suffix. Calling it again re-resolves
    /// against the updated text, so it settles once the resolver has nothing
    /// left to add.
    pub fn submit(&self, text: &mut String) {
        let suffix = self.suggestion(text);
        text.push_str(&suffix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_field() -> SuggestionField {
        SuggestionField::with_words("animal", ["snake"])
    }

    #[test]
    fn empty_text_suggests_nothing() {
        let field = snake_field();
        assert_eq!(field.suggestion(""), "");
        assert_eq!(field.preview(""), "");
    }

    #[test]
    fn divide_targets_last_word() {
        let field = snake_field().divide(true);
        assert_eq!(field.target("the sn"), "sn");
        assert_eq!(field.suggestion("the sn"), "ake");
        assert_eq!(field.preview("the sn"), "the snake");
    }

    #[test]
    fn whole_text_matching_without_divide() {
        let field = snake_field();
        assert_eq!(field.target("the sn"), "the sn");
        // no word is prefixed by "the sn"
        assert_eq!(field.suggestion("the sn"), "");

        let field = SuggestionField::with_words("phrase", ["the snake"]);
        assert_eq!(field.suggestion("the sn"), "ake");
    }

    #[test]
    fn custom_resolver_shadows_word_list() {
        let field = SuggestionField::new("lang", |input: &str| {
            if input == "sn" {
                "ow".to_string()
            } else {
                String::new()
            }
        })
        .words(["snake"]);
        assert_eq!(field.suggestion("sn"), "ow");
        assert_eq!(field.suggestion("sna"), "ke");
    }

    #[test]
    fn submit_commits_exactly_once() {
        let field = snake_field().divide(true);
        let mut text = "the sn".to_string();
        field.submit(&mut text);
        assert_eq!(text, "the snake");

        // second submit re-resolves against the new text and finds nothing
        field.submit(&mut text);
        assert_eq!(text, "the snake");
    }

    #[test]
    fn repeated_submit_can_keep_extending() {
        // a resolver that always has one more step is applied once per call
        let field = SuggestionField::new("loop", |input: &str| {
            if input.len() < 3 {
                "a".to_string()
            } else {
                String::new()
            }
        });
        let mut text = "a".to_string();
        field.submit(&mut text);
        assert_eq!(text, "aa");
        field.submit(&mut text);
        assert_eq!(text, "aaa");
        field.submit(&mut text);
        assert_eq!(text, "aaa");
    }

    #[test]
    fn submit_on_empty_is_a_noop() {
        let field = snake_field();
        let mut text = String::new();
        field.submit(&mut text);
        assert_eq!(text, "");
    }

    #[test]
    fn typing_never_auto_accepts() {
        // preview shows the ghost but the text itself stays untouched
        let field = snake_field();
        let text = "sn";
        assert_eq!(field.preview(text), "snake");
        assert_eq!(text, "sn");
    }
}
