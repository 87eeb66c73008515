/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Gate module: weighted round-robin admission of two lines.
//!
//! This module provides a single-owner [`Gate`] that releases people from
//! the fastpass and regular lines following a repeating service pattern,
//! and the sequencing machinery around it.
//!
//! # Architecture
//!
//! - Each line is a FIFO buffer; service within a line is strictly in arrival order
//! - A cycle pointer walks the [`ServicePattern`]; empty lines still consume their slot
//! - Every mutating command receives a monotonic sequence number and nanosecond timestamp
//! - Events are emitted to registered listeners in sequence order
//! - A [`journal::Journal`] of events can be replayed to rebuild identical state
//!
//! # Examples
//!
//! ```
//! use gate_rs::sequencer::{Gate, LineKind};
//!
//! let mut gate: Gate<u32> = Gate::new();
//! gate.add_listener(|event| {
//!     println!("Event {}: {:?}", event.sequence_num, event.result);
//! });
//!
//! for id in 1..=4 {
//!     gate.arrive("regular", id).unwrap();
//! }
//!
//! // Slot 0 is fastpass and that line is empty: it is skipped.
//! assert_eq!(gate.peek_next_line(), Some(LineKind::Regular));
//! assert_eq!(gate.serve().unwrap(), 1);
//! ```

pub mod command;
pub mod core;
pub mod error;
pub mod event;
pub mod journal;
pub mod line;
pub mod pattern;
pub mod person;
pub mod receipt;
pub mod replay;
pub mod result;
pub mod snapshot;

#[cfg(test)]
mod tests;

// Re-export main types
pub use command::GateCommand;
pub use self::core::Gate;
pub use error::GateError;
pub use event::GateEvent;
pub use line::LineKind;
pub use pattern::{DEFAULT_PATTERN, ServicePattern};
pub use person::PersonId;
pub use receipt::GateReceipt;
pub use result::GateResult;
pub use snapshot::GateSnapshot;
