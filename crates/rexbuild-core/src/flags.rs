//! Canonical flag-string encoding.

use std::fmt;

/// Independently settable regex options.
///
/// `ignore_case` and `multiline` change how a pattern compiles;
/// `global`, `has_indices`, and `sticky` describe execution behavior and
/// only travel along in the canonical flag string. Missing options are
/// simply disabled - there is no further validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// `g` - find every match, not just the first.
    pub global: bool,
    /// `i` - case-insensitive matching.
    pub ignore_case: bool,
    /// `m` - `^` and `$` also match at line breaks.
    pub multiline: bool,
    /// `d` - report match indices.
    pub has_indices: bool,
    /// `y` - match only from the current position.
    pub sticky: bool,
}

impl Flags {
    /// Flag string in the fixed canonical order `g i m d y`, independent
    /// of the order the options were set in.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        if self.global {
            out.push('g');
        }
        if self.ignore_case {
            out.push('i');
        }
        if self.multiline {
            out.push('m');
        }
        if self.has_indices {
            out.push('d');
        }
        if self.sticky {
            out.push('y');
        }
        out
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
