//! Pre-built patterns assembled from the primitive constructs.

pub mod url;
