//! Core building blocks for compositional regex patterns.
//!
//! A pattern is a tree of typed [`Element`]s; [`encode`] compiles the tree
//! bottom-up into final pattern text, inserting non-capturing groups exactly
//! where precedence demands them.
//!
//! - `element` - the closed node set callers compose
//! - `class` - bracket-expression construction and normalization
//! - `encode` - the precedence-aware tree-to-pattern compiler
//! - `sequence` - flattening of caller input into element runs
//! - `flags` - canonical flag-string encoding

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod class;
pub mod element;
pub mod encode;
pub mod flags;
pub mod sequence;

#[cfg(test)]
mod encode_tests;
#[cfg(test)]
mod flags_tests;

pub use class::{CharRange, CharacterClass, ClassMember, Shorthand};
pub use element::{Anchor, Element, QuantifierKind, Quantity};
pub use encode::encode;
pub use flags::Flags;
pub use sequence::IntoSequence;

/// Errors signalling a malformed element tree.
///
/// Constructor contracts (`InvalidRangeBounds`, `RangeOutOfOrder`,
/// `EmptyCharacterSet`, `InvertedClassNotAllowed`) are checked when the
/// value is built; the rest are checked at encode time, since a class can
/// still be reshaped through `union`/`invert` after construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// Range bound that is not exactly one character.
    #[error("range bound `{0}` must be a single character")]
    InvalidRangeBounds(String),

    /// Range whose start code point exceeds its end.
    #[error("range start `{start}` must not come after end `{end}`")]
    RangeOutOfOrder { start: char, end: char },

    /// `any_of` received an empty string.
    #[error("`any_of` requires at least one character")]
    EmptyCharacterSet,

    /// A union argument was itself inverted.
    #[error("character class union accepts only non-inverted classes")]
    InvertedClassNotAllowed,

    /// A class with no characters and no ranges reached the encoder.
    #[error("character class must contain at least one character or range")]
    EmptyCharacterClass,

    /// Counted repetition with `min` above `max`.
    #[error("invalid repetition bounds: min {min} exceeds max {max}")]
    InvalidRepeatBounds { min: u32, max: u32 },

    /// Alternation with no branches.
    #[error("alternation requires at least one branch")]
    EmptyAlternation,
}

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;
