//! Error types for symbol parsing.

use thiserror::Error;

/// Errors from parsing stem/branch/element names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SymbolError {
    #[error("unknown heavenly stem: {0:?}")]
    UnknownStem(String),
    #[error("unknown earthly branch: {0:?}")]
    UnknownBranch(String),
    #[error("unknown element: {0:?}")]
    UnknownElement(String),
    #[error("{0:?} is neither a stem nor a branch")]
    UnknownSymbol(String),
    #[error("{0:?} names both a stem and a branch; use its hanja")]
    Ambiguous(String),
}
