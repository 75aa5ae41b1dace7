//! The closed set of tree-node variants a caller can compose.
//!
//! Pure data: every variant is immutable once built and carries no
//! behavior. The encoder pattern-matches this enum exhaustively, so adding
//! a variant is a compile-time event, not a runtime surprise.

use std::ops::{RangeFrom, RangeInclusive};

use crate::class::CharacterClass;

/// A single node in a pattern tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Plain text matched verbatim; specials are escaped at encode time.
    Literal(String),
    /// Bracket expression, see [`CharacterClass`].
    Class(CharacterClass),
    /// Zero-width assertion.
    Anchor(Anchor),
    /// Ordered branches, each branch itself a sequence of elements.
    /// Branches are tried left to right by the host engine.
    Alternation(Vec<Vec<Element>>),
    /// A repetition policy applied to a sequence of child elements.
    Quantified {
        children: Vec<Element>,
        kind: QuantifierKind,
        greedy: bool,
    },
    /// A numbered (or named) capturing group around a sequence.
    Capture {
        children: Vec<Element>,
        name: Option<String>,
    },
}

/// Zero-width assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// `^` - start of input (or of line under `multiline`).
    StartOfString,
    /// `$` - end of input (or of line under `multiline`).
    EndOfString,
    /// `\b`
    WordBoundary,
    /// `\B`
    NonWordBoundary,
}

impl Anchor {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Anchor::StartOfString => "^",
            Anchor::EndOfString => "$",
            Anchor::WordBoundary => r"\b",
            Anchor::NonWordBoundary => r"\B",
        }
    }
}

/// Repetition policy of an [`Element::Quantified`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantifierKind {
    /// Exactly one occurrence; encodes the children with no suffix.
    One,
    /// `+`
    OneOrMore,
    /// `?`
    Optional,
    /// `*`
    ZeroOrMore,
    /// Counted repetition: `{n}`, `{min,}`, or `{min,max}`.
    Repeat(Quantity),
}

/// Bounds of a counted repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Exactly(u32),
    AtLeast(u32),
    Between(u32, u32),
}

impl From<u32> for Quantity {
    fn from(count: u32) -> Self {
        Quantity::Exactly(count)
    }
}

impl From<(u32, u32)> for Quantity {
    fn from((min, max): (u32, u32)) -> Self {
        Quantity::Between(min, max)
    }
}

impl From<RangeInclusive<u32>> for Quantity {
    fn from(range: RangeInclusive<u32>) -> Self {
        Quantity::Between(*range.start(), *range.end())
    }
}

impl From<RangeFrom<u32>> for Quantity {
    fn from(range: RangeFrom<u32>) -> Self {
        Quantity::AtLeast(range.start)
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element::Literal(text.to_string())
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Element::Literal(text)
    }
}

impl From<char> for Element {
    fn from(c: char) -> Self {
        Element::Literal(c.to_string())
    }
}

impl From<CharacterClass> for Element {
    fn from(class: CharacterClass) -> Self {
        Element::Class(class)
    }
}

impl From<Anchor> for Element {
    fn from(anchor: Anchor) -> Self {
        Element::Anchor(anchor)
    }
}
