//! Zero-width assertion constructs.

use rexbuild_core::{Anchor, Element};

/// `^` - start of input, or start of line under `multiline`.
pub fn start_of_string() -> Element {
    Element::Anchor(Anchor::StartOfString)
}

/// `$` - end of input, or end of line under `multiline`.
pub fn end_of_string() -> Element {
    Element::Anchor(Anchor::EndOfString)
}

/// `\b` - boundary between a word character and a non-word character.
pub fn word_boundary() -> Element {
    Element::Anchor(Anchor::WordBoundary)
}

/// `\B` - negated word boundary.
pub fn non_word_boundary() -> Element {
    Element::Anchor(Anchor::NonWordBoundary)
}
