//! Error types for definition assembly.
//!
//! The typed builder API cannot fail: [`Fragment`](crate::Fragment) and
//! [`ExampleKind`](crate::ExampleKind) are closed. These errors surface only
//! when loosely-typed input (JSON, CLI data) names a kind outside the four
//! that an `@apiDefine` block knows how to hold.

/// Unsupported input passed to a [`Definition`](crate::Definition).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefineError {
    /// A fragment kind other than header, param, success or error.
    #[error("failed to add fragment: kind {kind:?} is invalid for apiDefine (expected header, param, success or error)")]
    UnsupportedFragmentKind { kind: String },

    /// An example kind other than header, param, success or error.
    #[error("failed to add example: kind {kind:?} is invalid for apiDefine (expected header, param, success or error)")]
    UnsupportedExampleKind { kind: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DefineError>;

impl DefineError {
    pub fn fragment_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedFragmentKind { kind: kind.into() }
    }

    pub fn example_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedExampleKind { kind: kind.into() }
    }
}
