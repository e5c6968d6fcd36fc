#![allow(clippy::collapsible_else_if)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]

//! # Purpose
//! Ghostfield is a text input widget with completion suggestions shown as
//! greyed-out ghost text behind what the user is typing. Main pieces are:
//! - suggestion resolvers - pure functions from input to completion suffix
//! - a word-list resolver with first-match prefix completion
//! - a field that commits the suggestion on submit, never while typing
//! - a terminal frontend that renders the ghost line and tracks nothing
//!   but what the host hands it
//!
//! You can build the suggestion algorithm yourself:
//!
//! ```rust
//! # use ghostfield::prelude::*;
//! let field = SuggestionField::new("Programming Language", |input: &str| {
//!     if input == "Swift" {
//!         "UI".to_string()
//!     } else if input == "Python" {
//!         " (no ... it's not a snake)".to_string()
//!     } else {
//!         String::new()
//!     }
//! });
//!
//! let r = field.preview("Swift");
//! // "SwiftUI"
//! # assert_eq!(r, "SwiftUI");
//! ```
//!
//! Or pass an ordered list of candidate words:
//!
//! ```rust
//! # use ghostfield::prelude::*;
//! let languages = ["C", "C#", "C++", "CSS", "HTML", "Java", "JavaScript",
//!                  "Kotlin", "Objective-C", "Python", "Ruby", "Swift"];
//! let field = SuggestionField::with_words("Programming Language", languages);
//!
//! let r = field.suggestion("Ja");
//! // "va", "Java" is listed before "JavaScript"
//! # assert_eq!(r, "va");
//! ```
//!
//! The field never owns the text: render paths take `&str`, the submit path
//! takes `&mut String` and appends the resolved suffix exactly once.
//!
//! # Points of interest
//! - [prelude][mod@prelude] reexports all the things
//! - [frontend][mod@frontend] renders the field in a terminal
//! - [editor][mod@editor] is a line editing buffer for hosts without one
//!
//! # Cargo Features
//!
//! ## Frontends
//! - [`frontend_tui`][crate::frontend::tui] (default) - tui + crossterm

pub mod editor;
pub mod field;
pub mod frontend;
pub mod prelude;
pub mod resolve;
pub mod utils;

pub use crate::field::SuggestionField;
pub use crate::resolve::{from_words, or_else, suffix_from_words};
pub use crate::utils::last_word;
