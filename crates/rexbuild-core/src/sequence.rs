//! Normalization of caller input into a flat, ordered element run.
//!
//! Builders accept "a single element or a nested list of elements"; in
//! Rust that shape is expressed through [`IntoSequence`] plus the [`seq!`]
//! macro, which splices sub-sequences depth-first while preserving
//! left-to-right order. Values that are neither elements nor sequences of
//! elements are rejected at compile time.

use crate::class::CharacterClass;
use crate::element::{Anchor, Element};

/// Anything that can stand for an ordered run of elements.
pub trait IntoSequence {
    fn into_sequence(self) -> Vec<Element>;
}

impl IntoSequence for Element {
    fn into_sequence(self) -> Vec<Element> {
        vec![self]
    }
}

impl IntoSequence for Vec<Element> {
    fn into_sequence(self) -> Vec<Element> {
        self
    }
}

impl IntoSequence for &[Element] {
    fn into_sequence(self) -> Vec<Element> {
        self.to_vec()
    }
}

impl<const N: usize> IntoSequence for [Element; N] {
    fn into_sequence(self) -> Vec<Element> {
        self.into_iter().collect()
    }
}

impl IntoSequence for &str {
    fn into_sequence(self) -> Vec<Element> {
        vec![Element::from(self)]
    }
}

impl IntoSequence for String {
    fn into_sequence(self) -> Vec<Element> {
        vec![Element::from(self)]
    }
}

impl IntoSequence for char {
    fn into_sequence(self) -> Vec<Element> {
        vec![Element::from(self)]
    }
}

impl IntoSequence for CharacterClass {
    fn into_sequence(self) -> Vec<Element> {
        vec![Element::from(self)]
    }
}

impl IntoSequence for Anchor {
    fn into_sequence(self) -> Vec<Element> {
        vec![Element::from(self)]
    }
}

/// Splice parts into one flat sequence, preserving left-to-right,
/// depth-first order. Each part goes through [`IntoSequence`], so a
/// `Vec<Element>` part is spliced inline rather than nested.
#[macro_export]
macro_rules! seq {
    ($($part:expr),* $(,)?) => {{
        let mut elements: ::std::vec::Vec<$crate::Element> = ::std::vec::Vec::new();
        $(elements.extend($crate::IntoSequence::into_sequence($part));)*
        elements
    }};
}

/// Alternation across branches, each branch flattened like [`seq!`].
#[macro_export]
macro_rules! choice {
    ($($branch:expr),+ $(,)?) => {
        $crate::Element::Alternation(::std::vec![
            $($crate::IntoSequence::into_sequence($branch)),+
        ])
    };
}
