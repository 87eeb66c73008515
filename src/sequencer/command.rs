/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Gate command types.
//!
//! This module defines the commands that can be executed on a [`Gate`]
//! in a deterministic, totally-ordered sequence.
//!
//! [`Gate`]: super::Gate

use super::line::LineKind;

/// Commands that mutate a [`Gate`](super::Gate).
///
/// Lookahead is not a command: it never changes state and is not sequenced.
///
/// # Examples
///
/// ```
/// use gate_rs::{GateCommand, LineKind};
///
/// let command = GateCommand::arrive(LineKind::Regular, 7u32);
/// assert!(matches!(command, GateCommand::Arrive { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateCommand<T> {
    /// Append a person to the line named by `line`.
    ///
    /// The label is kept as given so that rejected arrivals are journaled
    /// exactly as the caller submitted them.
    Arrive {
        /// Raw line label.
        line: String,
        /// The arriving person.
        token: T,
    },

    /// Release the next person according to the service pattern.
    Serve,
}

impl<T> GateCommand<T> {
    /// Builds an arrival for a known line.
    #[must_use]
    pub fn arrive(line: LineKind, token: T) -> Self {
        Self::Arrive {
            line: line.as_str().to_string(),
            token,
        }
    }
}
