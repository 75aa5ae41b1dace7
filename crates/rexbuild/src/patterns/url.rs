//! URL matching per RFC 3986:
//! `URL = scheme ":" ["//" authority] path ["?" query] ["#" fragment]`.
//!
//! Component builders return element sequences that can be embedded in
//! larger patterns; the `*_FINDER` statics search for occurrences in text
//! (case-insensitive, global) and the `*_VALIDATOR` statics check that an
//! entire string is one component (case-insensitive, anchored).
//!
//! Hostname repetition bounds follow the DNS limits (63 characters per
//! label, 127 labels) rather than unbounded repetition, which keeps the
//! compiled automata well inside the host engine's default size limit.

use std::sync::LazyLock;

use rexbuild_core::{CharacterClass, Element, Flags, choice, seq};

use crate::builders::{CompiledRegex, build_regex_with};
use crate::constructs::anchors::{end_of_string, start_of_string};
use crate::constructs::capture::capture;
use crate::constructs::character_class::{any_of, char_class, char_range, digit};
use crate::constructs::quantifiers::{one_or_more, optional, repeat, repeat_lazy};

fn set(text: &str) -> CharacterClass {
    any_of(text).expect("character set is non-empty")
}

fn span(start: &str, end: &str) -> CharacterClass {
    char_range(start, end).expect("range bounds are single ordered characters")
}

fn merge<const N: usize>(classes: [CharacterClass; N]) -> CharacterClass {
    char_class(classes).expect("classes are non-inverted")
}

fn lowercase() -> CharacterClass {
    span("a", "z")
}

fn uppercase() -> CharacterClass {
    span("A", "Z")
}

fn alphabetical() -> CharacterClass {
    merge([lowercase(), uppercase()])
}

/// Scheme: three to six letters (`-` permitted), an optional trailing
/// `s`, and the `:` separator. Covers `http:`, `https:`, `ftp:`, ...
pub fn url_scheme() -> Vec<Element> {
    seq![
        repeat(merge([set("-"), alphabetical()]), 3..=6),
        optional("s"),
        ":",
    ]
}

fn username_chars() -> CharacterClass {
    merge([lowercase(), digit(), set("._%+-")])
}

fn hostname_label() -> Element {
    repeat_lazy(lowercase(), 1..=63)
}

fn hostname() -> Vec<Element> {
    seq![
        hostname_label(),
        optional(repeat(seq![".", hostname_label()], 1..=127)),
    ]
}

/// Authority: `[userinfo "@"] host [":" port]`.
pub fn url_authority() -> Vec<Element> {
    seq![
        optional(seq![one_or_more(username_chars()), "@"]),
        choice![hostname()],
        optional(seq![":", repeat_lazy(digit(), 1..=5)]),
    ]
}

/// Host alone, e.g. `www.example.com`.
pub fn url_host() -> Vec<Element> {
    hostname()
}

fn path_chars() -> CharacterClass {
    merge([lowercase(), uppercase(), digit(), set(":@%._+~#=")])
}

/// Path: one or more `/`-led segments.
pub fn url_path() -> Vec<Element> {
    vec![one_or_more(seq![
        "/",
        optional(one_or_more(path_chars())),
    ])]
}

/// Query: `?` followed by `key=value` pairs separated by `&` or `;`.
pub fn url_query() -> Vec<Element> {
    let kv_chars = merge([lowercase(), uppercase(), digit(), set("_-")]);
    let pair = seq![one_or_more(kv_chars.clone()), "=", one_or_more(kv_chars)];
    seq!["?", one_or_more(seq![pair, optional(set("&;"))])]
}

/// Fragment: `#` plus fragment characters.
pub fn url_fragment() -> Vec<Element> {
    seq!["#", one_or_more(path_chars())]
}

/// Full URL: optional scheme (which carries its own `:`), optional
/// `//`-led authority, a path, and optional query and fragment.
pub fn url() -> Vec<Element> {
    seq![
        optional(url_scheme()),
        optional(seq!["//", choice![url_authority()]]),
        url_path(),
        optional(url_query()),
        optional(url_fragment()),
    ]
}

const FINDER_FLAGS: Flags = Flags {
    global: true,
    ignore_case: true,
    multiline: false,
    has_indices: false,
    sticky: false,
};

const VALIDATOR_FLAGS: Flags = Flags {
    global: false,
    ignore_case: true,
    multiline: false,
    has_indices: false,
    sticky: false,
};

fn finder(sequence: Vec<Element>) -> CompiledRegex {
    build_regex_with(FINDER_FLAGS, sequence).expect("pre-built pattern compiles")
}

fn validator(sequence: Vec<Element>) -> CompiledRegex {
    let anchored = seq![start_of_string(), sequence, end_of_string()];
    build_regex_with(VALIDATOR_FLAGS, anchored).expect("pre-built pattern compiles")
}

/// Finds (and captures) URL schemes such as `https:` in text.
pub static URL_SCHEME_FINDER: LazyLock<CompiledRegex> =
    LazyLock::new(|| finder(vec![capture(url_scheme())]));

/// Checks that an entire string is a URL scheme.
pub static URL_SCHEME_VALIDATOR: LazyLock<CompiledRegex> =
    LazyLock::new(|| validator(vec![capture(url_scheme())]));

/// Finds URL authorities (`user@host:port`) in text.
pub static URL_AUTHORITY_FINDER: LazyLock<CompiledRegex> =
    LazyLock::new(|| finder(url_authority()));

/// Checks that an entire string is a URL authority.
pub static URL_AUTHORITY_VALIDATOR: LazyLock<CompiledRegex> =
    LazyLock::new(|| validator(url_authority()));

/// Finds hostnames in text.
pub static URL_HOST_FINDER: LazyLock<CompiledRegex> = LazyLock::new(|| finder(url_host()));

/// Checks that an entire string is a hostname.
pub static URL_HOST_VALIDATOR: LazyLock<CompiledRegex> = LazyLock::new(|| validator(url_host()));

/// Finds URL paths in text.
pub static URL_PATH_FINDER: LazyLock<CompiledRegex> = LazyLock::new(|| finder(url_path()));

/// Checks that an entire string is a URL path.
pub static URL_PATH_VALIDATOR: LazyLock<CompiledRegex> = LazyLock::new(|| validator(url_path()));

/// Finds URL query strings in text.
pub static URL_QUERY_FINDER: LazyLock<CompiledRegex> = LazyLock::new(|| finder(url_query()));

/// Checks that an entire string is a URL query.
pub static URL_QUERY_VALIDATOR: LazyLock<CompiledRegex> = LazyLock::new(|| validator(url_query()));

/// Finds URL fragments in text.
pub static URL_FRAGMENT_FINDER: LazyLock<CompiledRegex> = LazyLock::new(|| finder(url_fragment()));

/// Checks that an entire string is a URL fragment.
pub static URL_FRAGMENT_VALIDATOR: LazyLock<CompiledRegex> =
    LazyLock::new(|| validator(url_fragment()));

/// Finds URLs in text.
pub static URL_FINDER: LazyLock<CompiledRegex> = LazyLock::new(|| finder(url()));

/// Checks that an entire string is a URL.
pub static URL_VALIDATOR: LazyLock<CompiledRegex> = LazyLock::new(|| validator(url()));
