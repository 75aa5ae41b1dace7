//! The precedence-aware node encoder.
//!
//! Compiles an element tree bottom-up into `(pattern text, precedence
//! class)` pairs, inserting non-capturing groups exactly where a
//! sub-pattern would otherwise bind to its neighbors differently than the
//! tree intends.

use crate::class::{CharRange, CharacterClass, ClassMember};
use crate::element::{Element, QuantifierKind, Quantity};
use crate::{EncodeError, Result};

/// Binding tightness of an encoded fragment, tightest first.
///
/// Atom fragments compose as a unit anywhere. Sequence fragments need
/// grouping only under a quantifier. Alternation binds loosest and must be
/// grouped both under quantifiers and inside concatenations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Atom,
    Sequence,
    Alternation,
}

/// Intermediate working node, produced bottom-up and consumed by parent
/// nodes to decide grouping.
#[derive(Debug, Clone)]
struct Encoded {
    pattern: String,
    precedence: Precedence,
    /// Whether the fragment already ends in a repetition suffix. Set by
    /// quantifiers and preserved through pass-throughs (`One`,
    /// single-branch alternations, lone children), so a parent quantifier
    /// knows to regroup even an atomic fragment.
    quantified: bool,
}

impl Encoded {
    fn atom(pattern: impl Into<String>) -> Self {
        Encoded {
            pattern: pattern.into(),
            precedence: Precedence::Atom,
            quantified: false,
        }
    }

    /// Pattern text that binds as a single unit: wrapped in a
    /// non-capturing group unless already atomic.
    fn into_atom(self) -> String {
        match self.precedence {
            Precedence::Atom => self.pattern,
            _ => format!("(?:{})", self.pattern),
        }
    }
}

/// Compile a sequence of elements into final pattern text.
///
/// The outermost fragment is used verbatim regardless of its precedence
/// class - nothing encloses it, so no protective wrapping applies at the
/// root.
pub fn encode(elements: &[Element]) -> Result<String> {
    Ok(encode_sequence(elements)?.pattern)
}

fn encode_sequence(elements: &[Element]) -> Result<Encoded> {
    let nodes = elements
        .iter()
        .map(encode_element)
        .collect::<Result<Vec<_>>>()?;
    Ok(concat(nodes))
}

/// Concatenate encoded siblings. Children looser than Sequence (i.e.
/// alternations) are grouped; a lone child passes through with its own
/// precedence class and no extra wrapping.
fn concat(mut nodes: Vec<Encoded>) -> Encoded {
    if nodes.len() == 1 {
        return nodes.remove(0);
    }
    let pattern = nodes
        .into_iter()
        .map(|node| match node.precedence {
            Precedence::Alternation => node.into_atom(),
            _ => node.pattern,
        })
        .collect();
    Encoded {
        pattern,
        precedence: Precedence::Sequence,
        quantified: false,
    }
}

fn encode_element(element: &Element) -> Result<Encoded> {
    match element {
        Element::Literal(text) => Ok(encode_literal(text)),
        Element::Class(class) => encode_class(class),
        Element::Anchor(anchor) => Ok(Encoded::atom(anchor.symbol())),
        Element::Alternation(branches) => encode_alternation(branches),
        Element::Quantified {
            children,
            kind,
            greedy,
        } => encode_quantified(children, *kind, *greedy),
        Element::Capture { children, name } => encode_capture(children, name.as_deref()),
    }
}

/// Literal text with every regex-special character escaped.
///
/// A single source character stays an atom even when escaped; anything
/// longer is a sequence, so that a quantifier binds to the whole literal.
/// The empty literal is also a sequence, forcing `(?:)` under a quantifier
/// instead of a dangling operator.
fn encode_literal(text: &str) -> Encoded {
    let pattern: String = text.chars().map(escape_char).collect();
    let precedence = if text.chars().count() == 1 {
        Precedence::Atom
    } else {
        Precedence::Sequence
    };
    Encoded {
        pattern,
        precedence,
        quantified: false,
    }
}

fn escape_char(c: char) -> String {
    match c {
        '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\' => {
            format!(r"\{c}")
        }
        _ => c.to_string(),
    }
}

fn encode_quantified(children: &[Element], kind: QuantifierKind, greedy: bool) -> Result<Encoded> {
    let node = encode_sequence(children)?;
    let suffix = match kind {
        QuantifierKind::One => return Ok(node),
        QuantifierKind::OneOrMore => "+".to_string(),
        QuantifierKind::Optional => "?".to_string(),
        QuantifierKind::ZeroOrMore => "*".to_string(),
        QuantifierKind::Repeat(quantity) => quantity_suffix(quantity)?,
    };
    // A fragment that already ends in a repetition suffix needs its own
    // group even when atomic: the host engine rejects `a++`, and a `?`
    // after `{m,n}` would read as a lazy marker, not an optional.
    let base = if node.quantified {
        format!("(?:{})", node.pattern)
    } else {
        node.into_atom()
    };
    let lazy = if greedy { "" } else { "?" };
    Ok(Encoded {
        pattern: format!("{base}{suffix}{lazy}"),
        precedence: Precedence::Atom,
        quantified: true,
    })
}

fn quantity_suffix(quantity: Quantity) -> Result<String> {
    match quantity {
        Quantity::Exactly(count) => Ok(format!("{{{count}}}")),
        Quantity::AtLeast(min) => Ok(format!("{{{min},}}")),
        Quantity::Between(min, max) => {
            if min > max {
                return Err(EncodeError::InvalidRepeatBounds { min, max });
            }
            Ok(format!("{{{min},{max}}}"))
        }
    }
}

/// Capturing groups always carry their own delimiters, so the child
/// sequence never needs extra wrapping.
fn encode_capture(children: &[Element], name: Option<&str>) -> Result<Encoded> {
    let node = encode_sequence(children)?;
    let pattern = match name {
        Some(name) => format!("(?<{name}>{})", node.pattern),
        None => format!("({})", node.pattern),
    };
    Ok(Encoded::atom(pattern))
}

fn encode_alternation(branches: &[Vec<Element>]) -> Result<Encoded> {
    if branches.is_empty() {
        return Err(EncodeError::EmptyAlternation);
    }
    let mut nodes = branches
        .iter()
        .map(|branch| encode_sequence(branch))
        .collect::<Result<Vec<_>>>()?;
    if nodes.len() == 1 {
        return Ok(nodes.remove(0));
    }
    let pattern = nodes
        .iter()
        .map(|node| node.pattern.as_str())
        .collect::<Vec<_>>()
        .join("|");
    Ok(Encoded {
        pattern,
        precedence: Precedence::Alternation,
        quantified: false,
    })
}

/// Render a bracket expression.
///
/// A lone non-inverted character member collapses to a bare atom.
/// Otherwise members are laid out so that a literal hyphen lands last
/// (it cannot be misread as a range operator there) and a literal caret
/// never sits where it would read as the inversion marker.
fn encode_class(class: &CharacterClass) -> Result<Encoded> {
    if class.members.is_empty() && class.ranges.is_empty() {
        return Err(EncodeError::EmptyCharacterClass);
    }

    if !class.inverted && class.ranges.is_empty() && class.members.len() == 1 {
        let pattern = match class.members[0] {
            ClassMember::Char(c) => escape_char(c),
            ClassMember::Shorthand(shorthand) => shorthand.pattern().to_string(),
        };
        return Ok(Encoded::atom(pattern));
    }

    let mut body = String::new();
    for range in &class.ranges {
        render_range(&mut body, range);
    }
    let mut caret = false;
    let mut hyphen = false;
    for member in &class.members {
        match member {
            ClassMember::Char('^') => caret = true,
            ClassMember::Char('-') => hyphen = true,
            ClassMember::Char(c) => body.push_str(&escape_class_char(*c)),
            ClassMember::Shorthand(shorthand) => body.push_str(shorthand.pattern()),
        }
    }
    if caret {
        if body.is_empty() {
            body.push_str(r"\^");
        } else {
            body.push('^');
        }
    }
    if hyphen {
        body.push('-');
    }

    let marker = if class.inverted { "^" } else { "" };
    Ok(Encoded::atom(format!("[{marker}{body}]")))
}

fn render_range(body: &mut String, range: &CharRange) {
    body.push_str(&escape_class_char(range.start));
    body.push('-');
    body.push_str(&escape_class_char(range.end));
}

/// Escaping inside a bracket expression: `]` and `\` always; `^` and `-`
/// reach here only as range bounds, where both need escaping too.
fn escape_class_char(c: char) -> String {
    match c {
        ']' | '\\' | '^' | '-' => format!(r"\{c}"),
        _ => c.to_string(),
    }
}
