//! Provides single code point predicates, the atomic unit that every
//! [Pattern](crate::Pattern) is ultimately built from.

use ahash::AHashSet;
use std::fmt::{Debug, Display};
use unicode_categories::UnicodeCategories;

/// The largest explicit set that is stored inline and tested with a fixed
/// equality chain. Larger sets are hashed.
pub const SMALL_SET_MAX: usize = 16;

/// An inline set of at most [SMALL_SET_MAX] code points.
///
/// Unused slots repeat the first member, so a membership test always compares
/// against the full array without a length-dependent loop.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SmallSet {
    members: [char; SMALL_SET_MAX],
    len: u8,
}

impl SmallSet {
    /// Returns `None` if `members` is empty or exceeds [SMALL_SET_MAX].
    fn new(members: &[char]) -> Option<Self> {
        let first = *members.first()?;
        if members.len() > SMALL_SET_MAX {
            return None;
        }

        let mut padded = [first; SMALL_SET_MAX];
        padded[..members.len()].copy_from_slice(members);

        Some(Self {
            members: padded,
            len: members.len() as u8,
        })
    }

    #[inline]
    fn contains(&self, value: char) -> bool {
        self.members
            .iter()
            .fold(false, |found, &member| found | (member == value))
    }

    /// Returns the members in the order they were supplied.
    pub fn members(&self) -> &[char] {
        &self.members[..self.len as usize]
    }
}

impl Debug for SmallSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.members()).finish()
    }
}

/// A subset of the Unicode general categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnicodeCategory {
    Letter,
    LowercaseLetter,
    UppercaseLetter,
    TitlecaseLetter,
    Mark,
    Number,
    DecimalDigitNumber,
    Punctuation,
    Symbol,
    Separator,
    SpaceSeparator,
    Control,
}

impl UnicodeCategory {
    /// Returns `true` if `value` belongs to the category.
    pub fn contains(self, value: char) -> bool {
        match self {
            Self::Letter => value.is_letter(),
            Self::LowercaseLetter => value.is_letter_lowercase(),
            Self::UppercaseLetter => value.is_letter_uppercase(),
            Self::TitlecaseLetter => value.is_letter_titlecase(),
            Self::Mark => value.is_mark(),
            Self::Number => value.is_number(),
            Self::DecimalDigitNumber => value.is_number_decimal_digit(),
            Self::Punctuation => value.is_punctuation(),
            Self::Symbol => value.is_symbol(),
            Self::Separator => value.is_separator(),
            Self::SpaceSeparator => value.is_separator_space(),
            Self::Control => value.is_other_control(),
        }
    }

    /// The short property value alias, i.e. `Lu` for uppercase letters.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Letter => "L",
            Self::LowercaseLetter => "Ll",
            Self::UppercaseLetter => "Lu",
            Self::TitlecaseLetter => "Lt",
            Self::Mark => "M",
            Self::Number => "N",
            Self::DecimalDigitNumber => "Nd",
            Self::Punctuation => "P",
            Self::Symbol => "S",
            Self::Separator => "Z",
            Self::SpaceSeparator => "Zs",
            Self::Control => "Cc",
        }
    }
}

/// A predicate over a single code point.
///
/// Classes are immutable once built and hold no per-call state, so the same
/// value can be shared across any number of concurrent matches.
///
/// # Examples
///
/// ```
/// use textpat_runtime::CharClass;
///
/// let vowels = CharClass::set("aiueo");
/// assert!(vowels.matches('e'));
/// assert!(!vowels.matches('z'));
///
/// let consonants = CharClass::not_in("aiueo");
/// assert!(consonants.matches('z'));
///
/// assert!(CharClass::range('a', 'f').matches('f'));
/// assert!(CharClass::Word.matches('_'));
/// ```
#[derive(Debug, Clone)]
pub enum CharClass {
    /// Matches nothing.
    Empty,
    /// An explicit set of up to [SMALL_SET_MAX] members.
    Small(SmallSet),
    /// An explicit set of more than [SMALL_SET_MAX] members.
    Large(AHashSet<char>),
    /// Inverts the enclosed class.
    Not(Box<CharClass>),
    /// An inclusive range, i.e. `a-z`.
    Range(char, char),
    /// `0-9`
    Digit,
    /// `a-z`
    Lower,
    /// `A-Z`
    Upper,
    /// `A-Z`, `a-z`
    Alphabet,
    /// `0-9`, `A-Z`, `a-z`
    Alnum,
    /// `0-9`, `A-Z`, `a-z`, `_`
    Word,
    /// Space and tab.
    Blank,
    /// Space, tab, newline, carriage return and form feed.
    Space,
    /// Matches every code point.
    Any,
    /// Matches if any of the enclosed classes match, tested left to right.
    Union(Vec<CharClass>),
    /// A Unicode general category.
    Category(UnicodeCategory),
    /// A caller supplied predicate.
    Custom(fn(char) -> bool),
}

impl CharClass {
    /// Builds an explicit set from its members, choosing the inline
    /// representation for small sets and a hash set otherwise. Both
    /// representations have identical membership semantics.
    pub fn from_set<I>(members: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let members: Vec<char> = members.into_iter().collect();

        if members.len() > SMALL_SET_MAX {
            Self::Large(members.into_iter().collect())
        } else {
            SmallSet::new(&members).map_or(Self::Empty, Self::Small)
        }
    }

    /// Builds an explicit set from the characters of `members`.
    pub fn set(members: &str) -> Self {
        Self::from_set(members.chars())
    }

    /// Matches any character that is not in `members`.
    pub fn not_in(members: &str) -> Self {
        Self::set(members).negate()
    }

    /// Inverts the class.
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Matches `lo` through `hi`, both inclusive.
    pub const fn range(lo: char, hi: char) -> Self {
        Self::Range(lo, hi)
    }

    /// Joins a group of classes into a single class matching any of them.
    pub fn union(classes: Vec<Self>) -> Self {
        let mut classes = classes;
        match classes.len() {
            0 => Self::Empty,
            1 => classes.pop().unwrap_or(Self::Empty),
            _ => Self::Union(classes),
        }
    }

    pub const fn category(category: UnicodeCategory) -> Self {
        Self::Category(category)
    }

    pub const fn custom(predicate: fn(char) -> bool) -> Self {
        Self::Custom(predicate)
    }

    /// Returns `true` if `value` is a member of the class.
    #[inline]
    pub fn matches(&self, value: char) -> bool {
        match self {
            Self::Empty => false,
            Self::Small(set) => set.contains(value),
            Self::Large(set) => set.contains(&value),
            Self::Not(inner) => !inner.matches(value),
            Self::Range(lo, hi) => *lo <= value && value <= *hi,
            Self::Digit => matches!(value, '0'..='9'),
            Self::Lower => matches!(value, 'a'..='z'),
            Self::Upper => matches!(value, 'A'..='Z'),
            Self::Alphabet => matches!(value, 'A'..='Z' | 'a'..='z'),
            Self::Alnum => matches!(value, '0'..='9' | 'A'..='Z' | 'a'..='z'),
            Self::Word => matches!(value, '0'..='9' | 'A'..='Z' | 'a'..='z' | '_'),
            Self::Blank => matches!(value, ' ' | '\t'),
            Self::Space => matches!(value, ' ' | '\t' | '\n' | '\r' | '\x0c'),
            Self::Any => true,
            Self::Union(classes) => classes.iter().any(|class| class.matches(value)),
            Self::Category(category) => category.contains(value),
            Self::Custom(predicate) => predicate(value),
        }
    }
}

impl Default for CharClass {
    fn default() -> Self {
        Self::Empty
    }
}

impl std::ops::Not for CharClass {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

fn fmt_member(f: &mut std::fmt::Formatter<'_>, member: char) -> std::fmt::Result {
    match member {
        ']' | '[' | '^' | '-' => write!(f, "\\{}", member),
        _ => write!(f, "{}", member.escape_debug()),
    }
}

fn fmt_members<I>(f: &mut std::fmt::Formatter<'_>, negated: bool, members: I) -> std::fmt::Result
where
    I: IntoIterator<Item = char>,
{
    write!(f, "[{}", if negated { "^" } else { "" })?;
    for member in members {
        fmt_member(f, member)?;
    }
    write!(f, "]")
}

fn sorted(set: &AHashSet<char>) -> Vec<char> {
    let mut members: Vec<char> = set.iter().copied().collect();
    members.sort_unstable();
    members
}

impl Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "[]"),
            Self::Small(set) => fmt_members(f, false, set.members().iter().copied()),
            Self::Large(set) => fmt_members(f, false, sorted(set)),
            Self::Not(inner) => match inner.as_ref() {
                Self::Small(set) => fmt_members(f, true, set.members().iter().copied()),
                Self::Large(set) => fmt_members(f, true, sorted(set)),
                other => write!(f, "[^{}]", other),
            },
            Self::Range(lo, hi) => {
                write!(f, "[")?;
                fmt_member(f, *lo)?;
                write!(f, "-")?;
                fmt_member(f, *hi)?;
                write!(f, "]")
            }
            Self::Digit => write!(f, "\\d"),
            Self::Lower => write!(f, "[[:lower:]]"),
            Self::Upper => write!(f, "[[:upper:]]"),
            Self::Alphabet => write!(f, "[[:alpha:]]"),
            Self::Alnum => write!(f, "[[:alnum:]]"),
            Self::Word => write!(f, "\\w"),
            Self::Blank => write!(f, "[[:blank:]]"),
            Self::Space => write!(f, "\\s"),
            Self::Any => write!(f, "."),
            Self::Union(classes) => {
                write!(f, "[")?;
                for class in classes {
                    Display::fmt(class, f)?;
                }
                write!(f, "]")
            }
            Self::Category(category) => write!(f, "\\p{{{}}}", category.abbreviation()),
            Self::Custom(_) => write!(f, "[:custom:]"),
        }
    }
}
