/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Gate receipt types.
//!
//! This module defines the receipt returned to callers after executing
//! a command on the Gate.

use super::result::GateResult;

/// Receipt returned after executing a command on the Gate.
///
/// Contains the assigned sequence number and the result of executing
/// the command.
///
/// # Examples
///
/// ```
/// use gate_rs::{GateReceipt, GateResult, LineKind};
///
/// let receipt: GateReceipt<u32> = GateReceipt::new(42, GateResult::Arrived { line: LineKind::Regular });
/// assert_eq!(receipt.sequence_num, 42);
/// assert!(receipt.is_success());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateReceipt<T> {
    /// The monotonically increasing sequence number assigned to this command.
    pub sequence_num: u64,

    /// The result of executing the command.
    pub result: GateResult<T>,
}

impl<T> GateReceipt<T> {
    /// Creates a new receipt.
    #[must_use]
    pub fn new(sequence_num: u64, result: GateResult<T>) -> Self {
        Self {
            sequence_num,
            result,
        }
    }

    /// Returns `true` if the command was successful.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_success()
    }
}
