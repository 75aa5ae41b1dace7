//! Capturing-group constructs.

use rexbuild_core::{Element, IntoSequence};

/// Numbered capturing group.
pub fn capture(sequence: impl IntoSequence) -> Element {
    Element::Capture {
        children: sequence.into_sequence(),
        name: None,
    }
}

/// Named capturing group, `(?<name>...)`.
pub fn capture_named(name: impl Into<String>, sequence: impl IntoSequence) -> Element {
    Element::Capture {
        children: sequence.into_sequence(),
        name: Some(name.into()),
    }
}
