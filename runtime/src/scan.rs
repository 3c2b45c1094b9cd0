//! Provides the scan driver that locates, iterates and replaces the
//! occurrences of a [Pattern] within a text.
//!
//! Every scanning operation takes a *starter* class alongside the pattern.
//! The pattern is only attempted at positions whose code point matches the
//! starter, which lets a scan skip positions that cannot begin a match.
//! A starter must be a superset of every code point that can begin a match;
//! a narrower starter silently hides those matches. This is not validated.

use crate::charclass::CharClass;
use crate::pattern::Pattern;
use crate::sink::Sink;
use std::convert::Infallible;
use std::fmt::Display;

/// The `[start, end)` byte range of a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Returns the matched text, or `None` if the span does not lie within
    /// `text`.
    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.as_range())
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// The outcome of a replace callback that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replace {
    /// Keep scanning for further matches.
    Continue,
    /// Stop replacing and copy the remainder of the text verbatim.
    CopyRest,
}

/// Represents a failure during [replace_stream].
#[derive(Debug, PartialEq, Eq)]
pub enum ReplaceError<E, S> {
    /// The replace callback returned an error.
    Callback(E),
    /// Writing unmatched text to the sink failed.
    Sink(S),
}

impl<E: Display, S: Display> Display for ReplaceError<E, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Callback(err) => write!(f, "replace callback failed: {}", err),
            Self::Sink(err) => write!(f, "unable to write to sink: {}", err),
        }
    }
}

impl<E, S> std::error::Error for ReplaceError<E, S>
where
    E: std::error::Error + 'static,
    S: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Callback(err) => Some(err),
            Self::Sink(err) => Some(err),
        }
    }
}

/// Returns `true` if `pattern` matches the whole of `text`.
///
/// The pattern doesn't need to be anchored with `head` and `tail`; this is
/// the faster equivalent of doing so.
pub fn equals_whole(pattern: &Pattern, text: &str) -> bool {
    pattern.match_at(text, 0) == Some(text.len())
}

/// Returns `true` if `pattern` matches anywhere in `text`.
pub fn is_match(starter: &CharClass, pattern: &Pattern, text: &str) -> bool {
    find_first(starter, pattern, text, 0).is_some()
}

/// Returns the first match in `text` starting at or after the byte offset
/// `from`.
///
/// The pattern is attempted at each code point in `text[from..]` that
/// matches `starter`. An offset past the end of the text, or inside a code
/// point, finds nothing.
pub fn find_first(starter: &CharClass, pattern: &Pattern, text: &str, from: usize) -> Option<Span> {
    let rest = text.get(from..)?;

    rest.char_indices()
        .filter(|&(_, c)| starter.matches(c))
        .find_map(|(idx, _)| {
            let start = from + idx;
            pattern
                .match_at(text, start)
                .map(|end| Span::new(start, end))
        })
}

/// Returns the offset that a scan resumes from after `span`. Empty matches
/// skip the code point they sit on so that scanning always advances.
fn resume_after(text: &str, span: Span) -> Option<usize> {
    if span.is_empty() {
        text.get(span.end..)?
            .chars()
            .next()
            .map(|c| span.end + c.len_utf8())
    } else {
        Some(span.end)
    }
}

/// An iterator over the non-overlapping matches of a pattern, in increasing
/// offset order.
///
/// Returned by [find_iter].
#[derive(Debug, Clone)]
pub struct Matches<'p, 't> {
    starter: &'p CharClass,
    pattern: &'p Pattern,
    text: &'t str,
    next_offset: Option<usize>,
}

impl<'p, 't> Matches<'p, 't> {
    fn new(starter: &'p CharClass, pattern: &'p Pattern, text: &'t str, from: usize) -> Self {
        Self {
            starter,
            pattern,
            text,
            next_offset: Some(from),
        }
    }
}

impl<'p, 't> Iterator for Matches<'p, 't> {
    type Item = Span;

    fn next(&mut self) -> Option<Self::Item> {
        let from = self.next_offset.take()?;
        let span = find_first(self.starter, self.pattern, self.text, from)?;

        log::trace!("matched {} of {} byte input", span, self.text.len());
        self.next_offset = resume_after(self.text, span);
        Some(span)
    }
}

impl<'p, 't> std::iter::FusedIterator for Matches<'p, 't> {}

/// Returns an iterator over every non-overlapping match of `pattern` in
/// `text`.
pub fn find_iter<'p, 't>(
    starter: &'p CharClass,
    pattern: &'p Pattern,
    text: &'t str,
) -> Matches<'p, 't> {
    Matches::new(starter, pattern, text, 0)
}

/// Passes every non-overlapping match of `pattern` in `text` to `callback`,
/// left to right. The first error returned by `callback` stops the scan and
/// is returned.
pub fn for_each_match<'t, E, F>(
    starter: &CharClass,
    pattern: &Pattern,
    text: &'t str,
    mut callback: F,
) -> Result<(), E>
where
    F: FnMut(&'t str) -> Result<(), E>,
{
    // spans produced by the driver always lie on character boundaries.
    find_iter(starter, pattern, text).try_for_each(|span| callback(&text[span.as_range()]))
}

fn copy_verbatim<W: Sink, E>(sink: &mut W, text: &str) -> Result<(), ReplaceError<E, W::Error>> {
    if text.is_empty() {
        return Ok(());
    }

    sink.write_str(text).map_err(ReplaceError::Sink)
}

/// Streams `text` into `sink`, handing each match found at or after `from` to
/// `decide`.
///
/// Unmatched text, including `text[..from]`, is copied to the sink verbatim.
/// `decide` receives the sink and the matched text and is responsible for
/// writing whatever should replace it. Returning [Replace::CopyRest] copies
/// the rest of the text verbatim and completes successfully. An error from
/// `decide` stops the scan immediately; anything already written stays in
/// the sink.
///
/// # Examples
///
/// ```
/// use textpat_runtime::{replace_stream, CharClass, Replace};
/// use textpat_runtime::pattern::any_code_point;
///
/// let mut out = String::new();
/// let res = replace_stream(
///     &mut out,
///     &CharClass::not_in("aiueo "),
///     &any_code_point(),
///     "seafood fool",
///     0,
///     |sink: &mut String, matched| {
///         sink.push_str(&matched.to_uppercase());
///         Ok::<_, ()>(Replace::CopyRest)
///     },
/// );
///
/// assert!(res.is_ok());
/// assert_eq!("Seafood fool", out);
/// ```
pub fn replace_stream<'t, W, E, F>(
    sink: &mut W,
    starter: &CharClass,
    pattern: &Pattern,
    text: &'t str,
    from: usize,
    mut decide: F,
) -> Result<(), ReplaceError<E, W::Error>>
where
    W: Sink,
    F: FnMut(&mut W, &'t str) -> Result<Replace, E>,
{
    // everything before `copied` has been written to the sink.
    let mut copied = 0;

    for span in Matches::new(starter, pattern, text, from) {
        copy_verbatim(sink, &text[copied..span.start])?;

        match decide(&mut *sink, &text[span.as_range()]) {
            Ok(Replace::Continue) => copied = span.end,
            Ok(Replace::CopyRest) => {
                log::debug!("replacement stopped at {}, copying remainder", span);
                copied = span.end;
                break;
            }
            Err(err) => {
                log::debug!("replacement aborted by callback at {}", span);
                return Err(ReplaceError::Callback(err));
            }
        }
    }

    copy_verbatim(sink, &text[copied..])
}

/// Replaces every match of `pattern` in `text` with `replacement`.
pub fn replace_all(starter: &CharClass, pattern: &Pattern, text: &str, replacement: &str) -> String {
    replace_all_with(starter, pattern, text, |_| replacement)
}

/// Replaces every match of `pattern` in `text` with the value returned by
/// `replacer` for that match.
pub fn replace_all_with<'t, R, F>(
    starter: &CharClass,
    pattern: &Pattern,
    text: &'t str,
    mut replacer: F,
) -> String
where
    R: AsRef<str>,
    F: FnMut(&'t str) -> R,
{
    let mut out = String::with_capacity(text.len());
    let res = replace_stream(&mut out, starter, pattern, text, 0, |sink, matched| {
        sink.push_str(replacer(matched).as_ref());
        Ok::<_, Infallible>(Replace::Continue)
    });

    match res {
        Ok(()) => out,
        Err(ReplaceError::Callback(never)) => match never {},
        Err(ReplaceError::Sink(never)) => match never {},
    }
}
