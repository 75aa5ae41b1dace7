//! Quantifier constructs.
//!
//! Each wraps a sequence in a repetition policy. All default to greedy;
//! the `_lazy` variants prefer the shortest match instead.

use rexbuild_core::{Element, IntoSequence, QuantifierKind, Quantity};

fn quantified(sequence: impl IntoSequence, kind: QuantifierKind, greedy: bool) -> Element {
    Element::Quantified {
        children: sequence.into_sequence(),
        kind,
        greedy,
    }
}

/// Exactly one occurrence. Groups a sequence as a unit without emitting
/// any repetition suffix.
pub fn one(sequence: impl IntoSequence) -> Element {
    quantified(sequence, QuantifierKind::One, true)
}

/// `+` - one or more occurrences.
pub fn one_or_more(sequence: impl IntoSequence) -> Element {
    quantified(sequence, QuantifierKind::OneOrMore, true)
}

/// `+?`
pub fn one_or_more_lazy(sequence: impl IntoSequence) -> Element {
    quantified(sequence, QuantifierKind::OneOrMore, false)
}

/// `?` - zero or one occurrence.
pub fn optional(sequence: impl IntoSequence) -> Element {
    quantified(sequence, QuantifierKind::Optional, true)
}

/// `??`
pub fn optional_lazy(sequence: impl IntoSequence) -> Element {
    quantified(sequence, QuantifierKind::Optional, false)
}

/// `*` - zero or more occurrences.
pub fn zero_or_more(sequence: impl IntoSequence) -> Element {
    quantified(sequence, QuantifierKind::ZeroOrMore, true)
}

/// `*?`
pub fn zero_or_more_lazy(sequence: impl IntoSequence) -> Element {
    quantified(sequence, QuantifierKind::ZeroOrMore, false)
}

/// Counted repetition: `repeat(x, 3)` for `{3}`, `repeat(x, 2..)` for
/// `{2,}`, `repeat(x, 1..=5)` for `{1,5}`.
pub fn repeat(sequence: impl IntoSequence, quantity: impl Into<Quantity>) -> Element {
    quantified(sequence, QuantifierKind::Repeat(quantity.into()), true)
}

/// Lazy counted repetition, e.g. `{1,5}?`.
pub fn repeat_lazy(sequence: impl IntoSequence, quantity: impl Into<Quantity>) -> Element {
    quantified(sequence, QuantifierKind::Repeat(quantity.into()), false)
}
