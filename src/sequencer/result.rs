/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Gate result types.
//!
//! This module defines the result types returned after executing commands
//! on the Gate.

use super::error::GateError;
use super::line::LineKind;

/// Result of executing a gate command.
///
/// Indicates whether the command succeeded and what the outcome was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateResult<T> {
    /// A person joined a line.
    Arrived {
        /// Line the person joined.
        line: LineKind,
    },

    /// A person was released through the gate.
    Served {
        /// Line the person was taken from.
        line: LineKind,
        /// The released person.
        token: T,
        /// Pattern slots consumed by this serve, the serving slot included.
        slots_consumed: usize,
    },

    /// Command was rejected due to an error.
    Rejected {
        /// The error that caused rejection.
        error: GateError,
    },
}

impl<T> GateResult<T> {
    /// Returns `true` if the command was successful.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }

    /// Returns `true` if the command was rejected.
    #[inline]
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Returns the line touched by the command, if any.
    #[must_use]
    pub fn line(&self) -> Option<LineKind> {
        match self {
            Self::Arrived { line } | Self::Served { line, .. } => Some(*line),
            Self::Rejected { .. } => None,
        }
    }
}
