use crate::EncodeError;
use crate::class::CharacterClass;
use crate::element::{Anchor, Element, QuantifierKind, Quantity};
use crate::encode::encode;
use crate::seq;

fn quantified(children: Vec<Element>, kind: QuantifierKind) -> Element {
    Element::Quantified {
        children,
        kind,
        greedy: true,
    }
}

fn lazy(children: Vec<Element>, kind: QuantifierKind) -> Element {
    Element::Quantified {
        children,
        kind,
        greedy: false,
    }
}

#[test]
fn literal_text_passes_through() {
    assert_eq!(encode(&seq!["a"]).unwrap(), "a");
    assert_eq!(encode(&seq!["abc"]).unwrap(), "abc");
    assert_eq!(encode(&seq!["a", "b", "c"]).unwrap(), "abc");
}

#[test]
fn literal_specials_are_escaped() {
    assert_eq!(encode(&seq!["a.b"]).unwrap(), r"a\.b");
    assert_eq!(
        encode(&seq![r".*+?^${}()|[]\"]).unwrap(),
        r"\.\*\+\?\^\$\{\}\(\)\|\[\]\\"
    );
}

#[test]
fn empty_sequence_encodes_to_empty_pattern() {
    assert_eq!(encode(&[]).unwrap(), "");
}

#[test]
fn anchors() {
    assert_eq!(encode(&seq![Anchor::StartOfString]).unwrap(), "^");
    assert_eq!(encode(&seq![Anchor::EndOfString]).unwrap(), "$");
    assert_eq!(encode(&seq![Anchor::WordBoundary]).unwrap(), r"\b");
    assert_eq!(encode(&seq![Anchor::NonWordBoundary]).unwrap(), r"\B");
    assert_eq!(
        encode(&seq![Anchor::StartOfString, "ab", Anchor::EndOfString]).unwrap(),
        "^ab$"
    );
}

#[test]
fn quantifier_suffixes() {
    assert_eq!(
        encode(&[quantified(seq!["a"], QuantifierKind::OneOrMore)]).unwrap(),
        "a+"
    );
    assert_eq!(
        encode(&[quantified(seq!["a"], QuantifierKind::Optional)]).unwrap(),
        "a?"
    );
    assert_eq!(
        encode(&[quantified(seq!["a"], QuantifierKind::ZeroOrMore)]).unwrap(),
        "a*"
    );
}

#[test]
fn lazy_quantifiers_append_marker() {
    assert_eq!(
        encode(&[lazy(seq!["a"], QuantifierKind::OneOrMore)]).unwrap(),
        "a+?"
    );
    assert_eq!(
        encode(&[lazy(seq!["a"], QuantifierKind::Optional)]).unwrap(),
        "a??"
    );
    assert_eq!(
        encode(&[lazy(
            seq!["a"],
            QuantifierKind::Repeat(Quantity::Between(1, 5))
        )])
        .unwrap(),
        "a{1,5}?"
    );
}

#[test]
fn quantifier_forces_multi_character_literal_into_atom() {
    assert_eq!(
        encode(&[quantified(seq!["ab"], QuantifierKind::OneOrMore)]).unwrap(),
        "(?:ab)+"
    );
    assert_eq!(
        encode(&[quantified(seq!["a", "b"], QuantifierKind::Optional)]).unwrap(),
        "(?:ab)?"
    );
}

#[test]
fn quantifier_leaves_atoms_unwrapped() {
    let class = CharacterClass::any_of("abc").unwrap();
    assert_eq!(
        encode(&[quantified(seq![class], QuantifierKind::OneOrMore)]).unwrap(),
        "[abc]+"
    );
}

#[test]
fn quantified_empty_literal_still_forms_valid_repetition() {
    assert_eq!(
        encode(&[quantified(seq![""], QuantifierKind::OneOrMore)]).unwrap(),
        "(?:)+"
    );
}

#[test]
fn one_passes_children_through() {
    assert_eq!(
        encode(&[quantified(seq!["ab"], QuantifierKind::One)]).unwrap(),
        "ab"
    );
    assert_eq!(
        encode(&[quantified(seq!["ab"], QuantifierKind::One), "c".into()]).unwrap(),
        "abc"
    );
}

#[test]
fn counted_repetition() {
    assert_eq!(
        encode(&[quantified(
            seq!["a"],
            QuantifierKind::Repeat(Quantity::Exactly(3))
        )])
        .unwrap(),
        "a{3}"
    );
    assert_eq!(
        encode(&[quantified(
            seq!["a"],
            QuantifierKind::Repeat(Quantity::AtLeast(2))
        )])
        .unwrap(),
        "a{2,}"
    );
    assert_eq!(
        encode(&[quantified(
            seq!["ab"],
            QuantifierKind::Repeat(Quantity::Between(1, 5))
        )])
        .unwrap(),
        "(?:ab){1,5}"
    );
}

#[test]
fn counted_repetition_rejects_inverted_bounds() {
    assert_eq!(
        encode(&[quantified(
            seq!["a"],
            QuantifierKind::Repeat(Quantity::Between(5, 2))
        )])
        .unwrap_err(),
        EncodeError::InvalidRepeatBounds { min: 5, max: 2 }
    );
}

#[test]
fn requantified_atom_gets_its_own_group() {
    let inner = quantified(seq!["a"], QuantifierKind::OneOrMore);
    assert_eq!(
        encode(&[quantified(vec![inner], QuantifierKind::OneOrMore)]).unwrap(),
        "(?:a+)+"
    );

    let inner = quantified(seq!["a"], QuantifierKind::Optional);
    assert_eq!(
        encode(&[quantified(vec![inner], QuantifierKind::ZeroOrMore)]).unwrap(),
        "(?:a?)*"
    );
}

#[test]
fn requantified_atom_is_regrouped_through_pass_through_wrappers() {
    // `One` encodes its child unchanged, but the repetition suffix must
    // not leak through it to a parent quantifier.
    let inner = quantified(seq!["a"], QuantifierKind::OneOrMore);
    let unit = quantified(vec![inner], QuantifierKind::One);
    assert_eq!(
        encode(&[quantified(vec![unit], QuantifierKind::OneOrMore)]).unwrap(),
        "(?:a+)+"
    );

    // Same through a single-branch alternation; without the group the
    // trailing `?` would read as a lazy marker on `{2,3}`.
    let counted = quantified(seq!["a"], QuantifierKind::Repeat(Quantity::Between(2, 3)));
    let branch = crate::choice![counted];
    assert_eq!(
        encode(&[quantified(vec![branch], QuantifierKind::Optional)]).unwrap(),
        "(?:a{2,3})?"
    );
}

#[test]
fn quantified_atom_concatenates_without_grouping() {
    let plus = quantified(seq!["a"], QuantifierKind::OneOrMore);
    assert_eq!(encode(&seq![plus, "b"]).unwrap(), "a+b");
}

#[test]
fn capture_wraps_unconditionally() {
    let capture = Element::Capture {
        children: seq!["a"],
        name: None,
    };
    assert_eq!(encode(&[capture]).unwrap(), "(a)");

    let capture = Element::Capture {
        children: seq!["ab"],
        name: None,
    };
    assert_eq!(encode(&[capture]).unwrap(), "(ab)");
}

#[test]
fn capture_of_alternation_needs_no_extra_group() {
    let capture = Element::Capture {
        children: vec![crate::choice!["a", "b"]],
        name: None,
    };
    assert_eq!(encode(&[capture]).unwrap(), "(a|b)");
}

#[test]
fn named_capture() {
    let capture = Element::Capture {
        children: vec![quantified(
            seq![CharacterClass::digit()],
            QuantifierKind::Repeat(Quantity::Exactly(4)),
        )],
        name: Some("year".to_string()),
    };
    insta::assert_snapshot!(encode(&[capture]).unwrap(), @r"(?<year>\d{4})");
}

#[test]
fn alternation_joins_branches() {
    assert_eq!(encode(&[crate::choice!["a", "b"]]).unwrap(), "a|b");
    assert_eq!(
        encode(&[crate::choice![seq!["ab", "c"], "d"]]).unwrap(),
        "abc|d"
    );
}

#[test]
fn alternation_is_grouped_inside_concatenation() {
    assert_eq!(
        encode(&seq![crate::choice!["a", "b"], "c"]).unwrap(),
        "(?:a|b)c"
    );
    assert_eq!(
        encode(&seq!["c", crate::choice!["a", "b"]]).unwrap(),
        "c(?:a|b)"
    );
}

#[test]
fn alternation_at_root_stays_bare() {
    assert_eq!(encode(&[crate::choice!["ab", "cd"]]).unwrap(), "ab|cd");
}

#[test]
fn quantified_alternation_is_grouped() {
    assert_eq!(
        encode(&[quantified(
            vec![crate::choice!["a", "b"]],
            QuantifierKind::Optional
        )])
        .unwrap(),
        "(?:a|b)?"
    );
}

#[test]
fn single_branch_alternation_passes_through() {
    assert_eq!(encode(&[crate::choice!["ab"]]).unwrap(), "ab");
    // The pass-through keeps the branch's own precedence: a quantifier
    // still sees a sequence and wraps it.
    assert_eq!(
        encode(&[quantified(
            vec![crate::choice!["ab"]],
            QuantifierKind::OneOrMore
        )])
        .unwrap(),
        "(?:ab)+"
    );
}

#[test]
fn empty_alternation_is_rejected() {
    assert_eq!(
        encode(&[Element::Alternation(Vec::new())]).unwrap_err(),
        EncodeError::EmptyAlternation
    );
}

#[test]
fn classes_concatenate_as_atoms() {
    let class = CharacterClass::any_of("ab").unwrap();
    assert_eq!(encode(&seq!["x", class, "x"]).unwrap(), "x[ab]x");
}

#[test]
fn errors_propagate_from_nested_children() {
    let bad = Element::Alternation(vec![vec![Element::Class(
        CharacterClass::union([]).unwrap(),
    )]]);
    assert_eq!(
        encode(&[quantified(vec![bad], QuantifierKind::OneOrMore)]).unwrap_err(),
        EncodeError::EmptyCharacterClass
    );
}
