//! Top-level pattern and regex builders.

use regex::RegexBuilder;
use rexbuild_core::{Flags, IntoSequence, encode};

use crate::Result;

/// Compile a sequence of elements into pattern text.
pub fn build_pattern(sequence: impl IntoSequence) -> Result<String> {
    Ok(encode(&sequence.into_sequence())?)
}

/// Compile a sequence and bind it to the host engine with no flags set.
pub fn build_regex(sequence: impl IntoSequence) -> Result<CompiledRegex> {
    build_regex_with(Flags::default(), sequence)
}

/// Compile a sequence and bind it to the host engine with the given flags.
///
/// Only `ignore_case` and `multiline` change how the pattern compiles;
/// `global`, `has_indices`, and `sticky` are execution-model flags that
/// travel in the canonical flag string (`global` additionally drives
/// [`CompiledRegex::find_all`]).
pub fn build_regex_with(flags: Flags, sequence: impl IntoSequence) -> Result<CompiledRegex> {
    let pattern = encode(&sequence.into_sequence())?;
    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(flags.ignore_case)
        .multi_line(flags.multiline)
        .build()?;
    Ok(CompiledRegex {
        pattern,
        flags,
        regex,
    })
}

/// A compiled pattern bound to the host regex engine.
#[derive(Debug, Clone)]
pub struct CompiledRegex {
    pattern: String,
    flags: Flags,
    regex: regex::Regex,
}

impl CompiledRegex {
    /// Pattern text exactly as the encoder produced it (no inline flags).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Canonical flag string in `g i m d y` order.
    pub fn flags_str(&self) -> String {
        self.flags.encode()
    }

    /// The underlying host-engine regex.
    pub fn as_regex(&self) -> &regex::Regex {
        &self.regex
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// First match, if any.
    pub fn find<'h>(&self, haystack: &'h str) -> Option<regex::Match<'h>> {
        self.regex.find(haystack)
    }

    /// Matched substrings: all of them under the `global` flag, at most
    /// the first otherwise.
    pub fn find_all<'h>(&self, haystack: &'h str) -> Vec<&'h str> {
        if self.flags.global {
            self.regex.find_iter(haystack).map(|m| m.as_str()).collect()
        } else {
            self.regex
                .find(haystack)
                .map(|m| m.as_str())
                .into_iter()
                .collect()
        }
    }

    /// Capture groups of the first match.
    pub fn captures<'h>(&self, haystack: &'h str) -> Option<regex::Captures<'h>> {
        self.regex.captures(haystack)
    }
}
