//! Error taxonomy for the design engine.
//!
//! Three failure classes, all contract violations surfaced immediately:
//! nothing here is retried and no partial result is substituted for bad
//! input. Undersized candidate lists (fewer guides than requested) are a
//! valid outcome, not an error.

use thiserror::Error;

/// Errors produced by the catalog, the sequence primitives and the
/// primer synthesizer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The system identifier matched neither a registry name nor a menu
    /// number `1`..`6`.
    #[error("unknown nuclease system: {0:?}")]
    UnknownSystem(String),

    /// A character outside `{A,C,G,T}` reached a sequence primitive.
    /// Inputs are validated upstream, so this indicates a bypassed check;
    /// it is propagated, never guessed around.
    #[error("invalid base {0:?}; expected uppercase A, C, G or T")]
    InvalidBase(char),

    /// A sequence is shorter than the operation's floor (30 nt for
    /// targets, 29 nt for guides entering primer synthesis).
    #[error("sequence is {len} nt, need at least {min}")]
    SequenceTooShort { len: usize, min: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
