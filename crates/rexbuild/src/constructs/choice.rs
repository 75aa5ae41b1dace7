//! Alternation constructs.

use rexbuild_core::Element;

/// Alternation over pre-flattened branches, tried left to right.
///
/// The [`choice!`](rexbuild_core::choice) macro is the ergonomic form;
/// this function suits programmatically assembled branch lists.
pub fn choice_of(branches: Vec<Vec<Element>>) -> Element {
    Element::Alternation(branches)
}
