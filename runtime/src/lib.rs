//! A text matching engine assembled from small composable combinators rather
//! than a compiled automaton.
//!
//! Patterns are built programmatically out of [CharClass] predicates and the
//! combinators in [pattern], then handed to the scan driver to test, locate,
//! iterate over or replace occurrences within a text.
//!
//! # Example
//!
//! ```rust
//! use textpat_runtime::pattern::*;
//! use textpat_runtime::{find_first, replace_all, CharClass, Span};
//!
//! // `<(sip|tel):\d{1,16}@`
//! let pat = sequence([
//!     literal("<"),
//!     ordered_alternation([literal("sip"), literal("tel")]),
//!     literal(":"),
//!     class_repeat(1, 16, [CharClass::Digit]),
//!     literal("@"),
//! ]);
//!
//! // Only positions starting with `<` are attempted.
//! let starter = CharClass::set("<");
//! let input = "\"display_name\"<sip:0312341234@10.0.0.1>";
//!
//! assert_eq!(Some(Span::new(14, 30)), find_first(&starter, &pat, input, 0));
//! assert_eq!(
//!     "\"display_name\"10.0.0.1>",
//!     replace_all(&starter, &pat, input, "")
//! );
//! ```

pub mod charclass;
pub mod pattern;
pub mod scan;
pub mod sink;

pub use charclass::{CharClass, UnicodeCategory};
pub use pattern::Pattern;
pub use scan::{
    equals_whole, find_first, find_iter, for_each_match, is_match, replace_all,
    replace_all_with, replace_stream, Matches, Replace, ReplaceError, Span,
};
pub use sink::{IoSink, Sink};
