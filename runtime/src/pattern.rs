//! Provides the combinator algebra used to assemble a [Pattern] out of
//! character classes, literals, anchors and other patterns.
//!
//! Every combinator commits to the first local match it finds within its
//! bounds. There is no backtracking between combinators, so a repetition that
//! greedily consumes text is never revisited to let a later pattern match.
//!
//! ```
//! use textpat_runtime::pattern::*;
//! use textpat_runtime::CharClass;
//!
//! // `\w{1,3}c` never matches "abc", the repetition keeps the `c`.
//! let pat = sequence([class_repeat(1, 3, [CharClass::Word]), literal("c")]);
//! assert_eq!(None, pat.match_at("abc", 0));
//! ```

use crate::charclass::CharClass;
use std::fmt::Display;

/// A matcher over `(text, offset)`, returning the byte offset just past the
/// matched text or `None` if the text at `offset` does not match.
///
/// `None` is distinct from a zero-length match, which returns `Some(offset)`.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Consumes a single code point.
    AnyCodePoint,
    /// Greedily consumes between `min` and `max` code points of a class.
    ClassRepeat {
        min: usize,
        max: usize,
        class: CharClass,
    },
    /// Matches an exact byte sequence.
    Literal(Box<str>),
    /// Matches only at the start of the text.
    Head,
    /// Matches only at the end of the text.
    Tail,
    /// Matches each pattern in order.
    Sequence(Vec<Pattern>),
    /// Applies `body` between `min` and `max` times.
    Repeat {
        min: usize,
        max: usize,
        body: Box<Pattern>,
    },
    /// Returns the first alternative that matches.
    Alternation(Vec<Pattern>),
}

impl Pattern {
    /// Attempts to match the pattern against `text` starting at the byte
    /// offset `offset`.
    ///
    /// Offsets past the end of the text, and offsets that do not fall on a
    /// character boundary for patterns that decode characters, fail rather
    /// than panic.
    pub fn match_at(&self, text: &str, offset: usize) -> Option<usize> {
        if offset > text.len() {
            return None;
        }

        match self {
            Self::AnyCodePoint => {
                let rest = text.get(offset..)?;
                Some(offset + rest.chars().next().map_or(0, char::len_utf8))
            }
            Self::ClassRepeat { min, max, class } => {
                class_repeat_at(class, *min, *max, text, offset)
            }
            Self::Literal(literal) => {
                let end = offset.checked_add(literal.len())?;
                let candidate = text.as_bytes().get(offset..end)?;

                (candidate == literal.as_bytes()).then_some(end)
            }
            Self::Head => (offset == 0).then_some(offset),
            Self::Tail => (offset == text.len()).then_some(offset),
            Self::Sequence(patterns) => patterns
                .iter()
                .try_fold(offset, |next, pattern| pattern.match_at(text, next)),
            Self::Repeat { min, max, body } => repeat_at(body, *min, *max, text, offset),
            Self::Alternation(patterns) => patterns
                .iter()
                .find_map(|pattern| pattern.match_at(text, offset)),
        }
    }
}

fn class_repeat_at(
    class: &CharClass,
    min: usize,
    max: usize,
    text: &str,
    offset: usize,
) -> Option<usize> {
    let rest = text.get(offset..)?;
    let mut end = offset;
    let mut consumed = 0;

    for c in rest.chars() {
        if consumed >= max || !class.matches(c) {
            break;
        }

        end += c.len_utf8();
        consumed += 1;
    }

    (consumed >= min).then_some(end)
}

fn repeat_at(body: &Pattern, min: usize, max: usize, text: &str, offset: usize) -> Option<usize> {
    let mut end = offset;
    let mut applied = 0;

    while applied < max {
        match body.match_at(text, end) {
            // a body that matched without advancing will keep doing so until
            // max is reached.
            Some(next) if next == end => {
                applied = max;
                break;
            }
            Some(next) => {
                end = next;
                applied += 1;
            }
            None => break,
        }
    }

    (applied >= min).then_some(end)
}

fn collapse(patterns: impl IntoIterator<Item = Pattern>) -> Pattern {
    let mut patterns: Vec<Pattern> = patterns.into_iter().collect();

    if patterns.len() == 1 {
        patterns.pop().unwrap_or(Pattern::Sequence(vec![]))
    } else {
        Pattern::Sequence(patterns)
    }
}

/// Matches any single code point.
pub const fn any_code_point() -> Pattern {
    Pattern::AnyCodePoint
}

/// Greedily matches between `min` and `max` code points that belong to any
/// of `classes`.
///
/// `0, 1` is equivalent to `?`, `0, n` to a bounded `*` and `1, n` to a
/// bounded `+`. An empty list of classes matches no code point.
pub fn class_repeat(
    min: usize,
    max: usize,
    classes: impl IntoIterator<Item = CharClass>,
) -> Pattern {
    Pattern::ClassRepeat {
        min,
        max,
        class: CharClass::union(classes.into_iter().collect()),
    }
}

/// Matches `value` byte-for-byte.
pub fn literal(value: &str) -> Pattern {
    Pattern::Literal(value.into())
}

/// Matches only at offset 0.
pub const fn head() -> Pattern {
    Pattern::Head
}

/// Matches only at the end of the text.
pub const fn tail() -> Pattern {
    Pattern::Tail
}

/// Matches each of `patterns` in turn, feeding the end of one match into the
/// next. An empty sequence matches the empty string.
pub fn sequence(patterns: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern::Sequence(patterns.into_iter().collect())
}

/// Applies the sequence `body` between `min` and `max` times.
pub fn bounded_repeat(min: usize, max: usize, body: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern::Repeat {
        min,
        max,
        body: Box::new(collapse(body)),
    }
}

/// Matches the sequence `body` zero or one times.
pub fn optional(body: impl IntoIterator<Item = Pattern>) -> Pattern {
    bounded_repeat(0, 1, body)
}

/// Tries each of `patterns` in order, returning the first match.
pub fn ordered_alternation(patterns: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern::Alternation(patterns.into_iter().collect())
}

fn fmt_quantifier(f: &mut std::fmt::Formatter<'_>, min: usize, max: usize) -> std::fmt::Result {
    match (min, max) {
        (1, 1) => Ok(()),
        (0, 1) => write!(f, "?"),
        (0, usize::MAX) => write!(f, "*"),
        (1, usize::MAX) => write!(f, "+"),
        (min, usize::MAX) => write!(f, "{{{},}}", min),
        (min, max) if min == max => write!(f, "{{{}}}", min),
        (min, max) => write!(f, "{{{},{}}}", min, max),
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnyCodePoint => write!(f, "."),
            Self::ClassRepeat { min, max, class } => {
                Display::fmt(class, f)?;
                fmt_quantifier(f, *min, *max)
            }
            Self::Literal(literal) => {
                for c in literal.chars() {
                    if "\\.^$|?*+()[]{}".contains(c) {
                        write!(f, "\\{}", c)?;
                    } else {
                        write!(f, "{}", c.escape_debug())?;
                    }
                }
                Ok(())
            }
            Self::Head => write!(f, "^"),
            Self::Tail => write!(f, "$"),
            Self::Sequence(patterns) => patterns
                .iter()
                .try_for_each(|pattern| Display::fmt(pattern, f)),
            Self::Repeat { min, max, body } => {
                write!(f, "(?:{})", body)?;
                fmt_quantifier(f, *min, *max)
            }
            Self::Alternation(patterns) => {
                write!(f, "(?:")?;
                for (idx, pattern) in patterns.iter().enumerate() {
                    if idx > 0 {
                        write!(f, "|")?;
                    }
                    Display::fmt(pattern, f)?;
                }
                write!(f, ")")
            }
        }
    }
}
