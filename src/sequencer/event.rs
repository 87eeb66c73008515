/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Gate event types.
//!
//! This module defines the events emitted by the Gate after executing
//! each command.

use super::command::GateCommand;
use super::result::GateResult;

/// Event emitted after executing a gate command.
///
/// Contains the sequence number, timestamp, original command, and result.
/// Events are emitted in sequence order and can be used for replay,
/// auditing, or real-time monitoring.
///
/// # Examples
///
/// ```
/// use gate_rs::{GateCommand, GateEvent, GateResult, LineKind};
///
/// let event = GateEvent::new(
///     1,
///     1234567890,
///     GateCommand::arrive(LineKind::Fastpass, "ada"),
///     GateResult::Arrived { line: LineKind::Fastpass },
/// );
/// assert_eq!(event.sequence_num, 1);
/// ```
#[derive(Debug, Clone)]
pub struct GateEvent<T> {
    /// Monotonically increasing sequence number.
    pub sequence_num: u64,

    /// Nanosecond timestamp when the command was executed.
    pub timestamp_ns: u64,

    /// The command that was executed.
    pub command: GateCommand<T>,

    /// The result of executing the command.
    pub result: GateResult<T>,
}

impl<T> GateEvent<T> {
    /// Creates a new gate event.
    #[must_use]
    pub fn new(
        sequence_num: u64,
        timestamp_ns: u64,
        command: GateCommand<T>,
        result: GateResult<T>,
    ) -> Self {
        Self {
            sequence_num,
            timestamp_ns,
            command,
            result,
        }
    }
}
