/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Gate error types.

use thiserror::Error;

/// Errors raised by [`Gate`](super::Gate) operations.
///
/// Every failure is reported synchronously to the immediate caller and
/// leaves the gate state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The line label is neither `fastpass` nor `regular`.
    #[error("unknown line kind: {0:?}")]
    InvalidLineKind(String),

    /// `serve` was called while both lines were empty.
    #[error("both lines are empty")]
    EmptyQueues,

    /// A service pattern failed validation.
    #[error("invalid service pattern: {0}")]
    InvalidPattern(String),

    /// A snapshot could not be restored into a gate.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Snapshot encoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
