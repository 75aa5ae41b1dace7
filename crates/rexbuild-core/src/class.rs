//! Bracket-expression construction and normalization.
//!
//! Constructors validate their own arguments here; escaping and member
//! layout happen in the encoder at render time, because `union`/`invert`
//! can still reshape a class after construction.

use crate::{EncodeError, Result};

/// Single member of a bracket expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassMember {
    /// Literal character, escaped as needed at render time.
    Char(char),
    /// Shorthand escape such as `\d`.
    Shorthand(Shorthand),
}

/// Shorthand classes understood by the host engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shorthand {
    /// `.`
    Any,
    /// `\d`
    Digit,
    /// `\w`
    Word,
    /// `\s`
    Whitespace,
}

impl Shorthand {
    pub(crate) fn pattern(self) -> &'static str {
        match self {
            Shorthand::Any => ".",
            Shorthand::Digit => r"\d",
            Shorthand::Word => r"\w",
            Shorthand::Whitespace => r"\s",
        }
    }
}

/// Inclusive code-point range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRange {
    pub start: char,
    pub end: char,
}

/// Contents of a bracket expression: individual members, ranges, and an
/// inversion flag.
///
/// Duplicate members and overlapping ranges are semantically harmless and
/// normalize silently; emptiness is the only content error, and it is
/// reported at encode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClass {
    pub(crate) members: Vec<ClassMember>,
    pub(crate) ranges: Vec<CharRange>,
    pub(crate) inverted: bool,
}

impl CharacterClass {
    fn new(members: Vec<ClassMember>, ranges: Vec<CharRange>) -> Self {
        CharacterClass {
            members,
            ranges,
            inverted: false,
        }
    }

    /// Class matching `start` through `end`, both bounds inclusive.
    pub fn range(start: &str, end: &str) -> Result<Self> {
        let start = single_char(start)?;
        let end = single_char(end)?;
        if start > end {
            return Err(EncodeError::RangeOutOfOrder { start, end });
        }
        Ok(Self::new(Vec::new(), vec![CharRange { start, end }]))
    }

    /// Class matching any single character of `text`.
    ///
    /// Characters are kept distinct, in first-occurrence order.
    pub fn any_of(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(EncodeError::EmptyCharacterSet);
        }
        let mut members = Vec::new();
        for c in text.chars() {
            let member = ClassMember::Char(c);
            if !members.contains(&member) {
                members.push(member);
            }
        }
        Ok(Self::new(members, Vec::new()))
    }

    /// Merge the members and ranges of several non-inverted classes.
    ///
    /// Inversion does not distribute across a union, so inverted inputs
    /// are rejected with [`EncodeError::InvertedClassNotAllowed`].
    pub fn union<I>(classes: I) -> Result<Self>
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        let mut members = Vec::new();
        let mut ranges = Vec::new();
        for class in classes {
            if class.inverted {
                return Err(EncodeError::InvertedClassNotAllowed);
            }
            for member in class.members {
                if !members.contains(&member) {
                    members.push(member);
                }
            }
            for range in class.ranges {
                if !ranges.contains(&range) {
                    ranges.push(range);
                }
            }
        }
        Ok(Self::new(members, ranges))
    }

    /// Toggle inversion. Inversion state is a plain boolean, so a double
    /// inversion renders identically to the original class.
    pub fn invert(mut self) -> Self {
        self.inverted = !self.inverted;
        self
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// `.` - any character.
    pub fn any() -> Self {
        Self::shorthand(Shorthand::Any)
    }

    /// `\d`
    pub fn digit() -> Self {
        Self::shorthand(Shorthand::Digit)
    }

    /// `\w`
    pub fn word() -> Self {
        Self::shorthand(Shorthand::Word)
    }

    /// `\s`
    pub fn whitespace() -> Self {
        Self::shorthand(Shorthand::Whitespace)
    }

    fn shorthand(shorthand: Shorthand) -> Self {
        Self::new(vec![ClassMember::Shorthand(shorthand)], Vec::new())
    }
}

fn single_char(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(EncodeError::InvalidRangeBounds(text.to_string())),
    }
}
