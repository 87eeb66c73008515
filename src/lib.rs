/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Gate-rs
//!
//! A weighted round-robin admission gate. People arrive into one of two
//! lines, `fastpass` or `regular`, and are released one at a time according
//! to a repeating service pattern: one fastpass slot followed by three
//! regular slots.
//!
//! ## Service rules
//!
//! - The slot under the cycle pointer names the line to serve.
//! - If that line is empty, the slot is consumed anyway and the next slot
//!   is examined. The search never takes more than one full cycle.
//! - Serving a person also consumes the slot, so the pointer always lands
//!   one past the slot that served.
//! - Within a line, people leave in arrival order.
//! - [`Gate::peek_next_line`] predicts the next served line without
//!   touching any state, and always agrees with the following
//!   [`Gate::serve`].
//!
//! ## Example
//!
//! ```
//! use gate_rs::{Gate, GateError};
//!
//! let mut gate = Gate::new();
//! gate.arrive("fastpass", "F1").unwrap();
//! for id in ["R1", "R2", "R3", "R4"] {
//!     gate.arrive("regular", id).unwrap();
//! }
//!
//! let served: Vec<_> = std::iter::from_fn(|| gate.serve().ok()).collect();
//! assert_eq!(served, ["F1", "R1", "R2", "R3", "R4"]);
//!
//! assert_eq!(gate.serve(), Err(GateError::EmptyQueues));
//! assert_eq!(gate.peek_next_line(), None);
//! assert_eq!(gate.arrive("vip", "X"), Err(GateError::InvalidLineKind("vip".into())));
//! ```
//!
//! ## Sequencing, journaling and replay
//!
//! Every `arrive` and `serve` (successful or rejected) is assigned a
//! monotonic sequence number and delivered as a [`GateEvent`] to registered
//! listeners. Events can be appended to a [`journal::Journal`] and replayed
//! with [`replay::ReplayEngine`] to rebuild an identical gate, or compared
//! against a [`GateSnapshot`].
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` for accepted and rejected
//! commands, `trace` for skipped slots and `warn` for replay divergence.
//! No subscriber is installed; that is left to the host application.

pub mod sequencer;

pub use sequencer::journal;
pub use sequencer::replay;
pub use sequencer::{
    DEFAULT_PATTERN, Gate, GateCommand, GateError, GateEvent, GateReceipt, GateResult,
    GateSnapshot, LineKind, PersonId, ServicePattern,
};
