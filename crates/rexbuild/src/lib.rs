//! Compose regular expressions from typed building blocks.
//!
//! Patterns are trees of elements - literals, character classes, anchors,
//! alternations, quantifiers, captures - compiled into correctly grouped
//! pattern text and bound to the host engine (the `regex` crate).
//!
//! # Example
//!
//! ```
//! use rexbuild::{Flags, build_regex_with, capture, digit, one_or_more, seq};
//!
//! let regex = build_regex_with(
//!     Flags {
//!         ignore_case: true,
//!         ..Flags::default()
//!     },
//!     seq!["#", capture(one_or_more(digit()))],
//! )?;
//! assert_eq!(regex.pattern(), r"#(\d+)");
//! assert_eq!(regex.flags_str(), "i");
//! assert!(regex.is_match("#42"));
//! # Ok::<(), rexbuild::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builders;
pub mod constructs;
pub mod patterns;


pub use builders::{CompiledRegex, build_pattern, build_regex, build_regex_with};
pub use constructs::anchors::{end_of_string, non_word_boundary, start_of_string, word_boundary};
pub use constructs::capture::{capture, capture_named};
pub use constructs::character_class::{
    any, any_of, char_class, char_range, digit, inverted, whitespace, word,
};
pub use constructs::choice::choice_of;
pub use constructs::quantifiers::{
    one, one_or_more, one_or_more_lazy, optional, optional_lazy, repeat, repeat_lazy, zero_or_more,
    zero_or_more_lazy,
};
pub use rexbuild_core::{
    Anchor, CharacterClass, Element, EncodeError, Flags, IntoSequence, QuantifierKind, Quantity,
};
pub use rexbuild_core::{choice, seq};

/// Errors from building a pattern or binding it to the host engine.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The host engine rejected the compiled pattern.
    #[error("regex engine rejected pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type for builder operations.
pub type Result<T> = std::result::Result<T, Error>;
