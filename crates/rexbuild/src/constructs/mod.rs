//! Construct functions: the caller-facing surface over the element model.
//!
//! Each function is a thin wrapper that produces a value of the core data
//! model; all validation and escaping rules live in `rexbuild-core`.

pub mod anchors;
pub mod capture;
pub mod character_class;
pub mod choice;
pub mod quantifiers;
