//! Character-class constructs.

use rexbuild_core::{CharacterClass, Result};

/// Class matching `start` through `end` inclusive, e.g.
/// `char_range("a", "z")` for `[a-z]`.
pub fn char_range(start: &str, end: &str) -> Result<CharacterClass> {
    CharacterClass::range(start, end)
}

/// Class matching any single character of `text`.
pub fn any_of(text: &str) -> Result<CharacterClass> {
    CharacterClass::any_of(text)
}

/// Union of non-inverted classes:
/// `char_class([char_range("a", "z")?, digit()])` for `[a-z\d]`.
pub fn char_class<I>(classes: I) -> Result<CharacterClass>
where
    I: IntoIterator<Item = CharacterClass>,
{
    CharacterClass::union(classes)
}

/// Flip a class's inversion.
pub fn inverted(class: CharacterClass) -> CharacterClass {
    class.invert()
}

/// `.` - any character.
pub fn any() -> CharacterClass {
    CharacterClass::any()
}

/// `\d`
pub fn digit() -> CharacterClass {
    CharacterClass::digit()
}

/// `\w`
pub fn word() -> CharacterClass {
    CharacterClass::word()
}

/// `\s`
pub fn whitespace() -> CharacterClass {
    CharacterClass::whitespace()
}
