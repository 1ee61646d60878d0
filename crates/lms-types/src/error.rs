//! error types for domain value parsing.

use thiserror::Error;

/// errors produced while interpreting domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// a string did not name any variant of an enumerated field.
    #[error("unknown {kind} value: {value:?}")]
    UnknownVariant {
        /// the enum being parsed
        kind: &'static str,
        /// the rejected input
        value: String,
    },
}
