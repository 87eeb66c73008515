/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Deterministic replay engine for event journals.
//!
//! [`ReplayEngine`] reads a sequence of [`GateEvent`]s from a [`Journal`]
//! and re-executes each command on a [`Gate`]. The gate is fully
//! deterministic, so every re-executed command must reproduce the result
//! recorded in the journal; any difference is reported as
//! [`ReplayError::Divergence`].
//!
//! # Examples
//!
//! ```
//! use gate_rs::journal::{InMemoryJournal, Journal};
//! use gate_rs::replay::ReplayEngine;
//! use gate_rs::{Gate, ServicePattern};
//! use std::sync::{Arc, Mutex};
//!
//! let journal = Arc::new(Mutex::new(InMemoryJournal::new()));
//! let sink = Arc::clone(&journal);
//!
//! let mut gate = Gate::new();
//! gate.add_listener(move |event| {
//!     sink.lock().unwrap().append(event.clone()).ok();
//! });
//! gate.arrive("regular", 1u32).unwrap();
//! gate.serve().unwrap();
//!
//! let journal = journal.lock().unwrap();
//! let (replayed, last_seq) = ReplayEngine::replay(&*journal, ServicePattern::default()).unwrap();
//! assert_eq!(last_seq, 2);
//! assert_eq!(replayed.cursor(), gate.cursor());
//! ```

use super::core::Gate;
use super::error::GateError;
use super::event::GateEvent;
use super::journal::Journal;
use super::pattern::ServicePattern;
use super::snapshot::GateSnapshot;
use std::fmt;
use std::marker::PhantomData;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during journal replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The journal contains no events to replay.
    #[error("journal is empty, nothing to replay")]
    EmptyJournal,

    /// The requested starting sequence number exceeds the journal's last entry.
    #[error("invalid from_sequence {from_sequence}: journal last sequence is {last_sequence}")]
    InvalidSequence {
        /// The sequence number requested.
        from_sequence: u64,
        /// The last sequence number in the journal.
        last_sequence: u64,
    },

    /// A gap was detected between expected and found sequence numbers.
    #[error("sequence gap detected: expected {expected}, found {found}")]
    SequenceGap {
        /// The expected next sequence number.
        expected: u64,
        /// The actual sequence number found.
        found: u64,
    },

    /// A re-executed command produced a different result than the journal.
    #[error("replay diverged at sequence {sequence_num}: journal has {recorded}, replay produced {replayed}")]
    Divergence {
        /// The sequence number of the diverging event.
        sequence_num: u64,
        /// Result stored in the journal.
        recorded: String,
        /// Result produced by the replay.
        replayed: String,
    },

    /// The gate could not be built for replay.
    #[error("gate error during replay: {0}")]
    Gate(#[from] GateError),
}

/// Stateless replay engine that reconstructs [`Gate`] state from a [`Journal`].
///
/// All methods are associated functions; `ReplayEngine` holds no state
/// itself. Use it as a namespace for replay operations.
pub struct ReplayEngine<T> {
    _phantom: PhantomData<T>,
}

impl<T: Clone + fmt::Debug + PartialEq + 'static> ReplayEngine<T> {
    /// Replays the whole journal onto a fresh gate using `pattern`.
    ///
    /// Returns the reconstructed gate and the sequence number of the last
    /// event applied. Rejected commands are re-executed too, so the
    /// replayed gate's sequence numbers line up with the journal.
    ///
    /// # Errors
    ///
    /// - [`ReplayError::EmptyJournal`] if the journal has no events
    /// - [`ReplayError::SequenceGap`] if the journal does not start at 1 or skips a number
    /// - [`ReplayError::Divergence`] if a command does not reproduce its recorded result
    pub fn replay(
        journal: &impl Journal<T>,
        pattern: ServicePattern,
    ) -> Result<(Gate<T>, u64), ReplayError> {
        Self::replay_onto(Gate::with_pattern(pattern), journal, |_, _| {})
    }

    /// Replays events on top of an existing gate, typically one restored
    /// from a snapshot.
    ///
    /// Replay starts at `gate.last_sequence() + 1`. The progress callback
    /// receives `(events_applied, current_sequence)` after each event.
    ///
    /// # Errors
    ///
    /// - [`ReplayError::EmptyJournal`] if the journal has no events
    /// - [`ReplayError::InvalidSequence`] if the gate is already past the journal's end
    /// - [`ReplayError::SequenceGap`] if the next event is not the one the gate expects
    /// - [`ReplayError::Divergence`] if a command does not reproduce its recorded result
    pub fn replay_onto(
        mut gate: Gate<T>,
        journal: &impl Journal<T>,
        progress: impl Fn(u64, u64),
    ) -> Result<(Gate<T>, u64), ReplayError> {
        if journal.is_empty() {
            return Err(ReplayError::EmptyJournal);
        }

        let from_sequence = gate.last_sequence() + 1;
        if journal
            .last_sequence()
            .is_some_and(|last| from_sequence > last)
        {
            return Err(ReplayError::InvalidSequence {
                from_sequence,
                last_sequence: journal.last_sequence().unwrap_or(0),
            });
        }

        let mut count = 0u64;
        for event in journal.read_from(from_sequence) {
            let expected = gate.last_sequence() + 1;
            if event.sequence_num != expected {
                return Err(ReplayError::SequenceGap {
                    expected,
                    found: event.sequence_num,
                });
            }
            Self::apply_event(&mut gate, event)?;
            count = count.saturating_add(1);
            progress(count, event.sequence_num);
        }

        let last_seq = gate.last_sequence();
        Ok((gate, last_seq))
    }

    /// Returns the events with `from_sequence <= sequence_num <= to_sequence`.
    ///
    /// No gate is constructed; this is a pure slice of the journal.
    ///
    /// # Errors
    ///
    /// - [`ReplayError::EmptyJournal`] if the journal has no events
    /// - [`ReplayError::InvalidSequence`] if `from_sequence` > last journal sequence
    pub fn replay_range(
        journal: &impl Journal<T>,
        from_sequence: u64,
        to_sequence: u64,
    ) -> Result<Vec<&GateEvent<T>>, ReplayError> {
        if journal.is_empty() {
            return Err(ReplayError::EmptyJournal);
        }

        if journal
            .last_sequence()
            .is_some_and(|last| from_sequence > last)
        {
            return Err(ReplayError::InvalidSequence {
                from_sequence,
                last_sequence: journal.last_sequence().unwrap_or(0),
            });
        }

        Ok(journal.read_range(from_sequence, to_sequence).collect())
    }

    /// Replays the full journal with the snapshot's pattern and compares
    /// the result to `expected`.
    ///
    /// Returns `Ok(true)` if the replayed state matches, `Ok(false)` if it
    /// diverges.
    ///
    /// # Errors
    ///
    /// - [`ReplayError::Gate`] if the snapshot's pattern is invalid
    /// - any error from [`replay`](Self::replay)
    pub fn verify(
        journal: &impl Journal<T>,
        expected: &GateSnapshot<T>,
    ) -> Result<bool, ReplayError> {
        let pattern = ServicePattern::new(expected.pattern.clone())?;
        let (gate, _) = Self::replay(journal, pattern)?;
        Ok(snapshots_match(&gate.snapshot(), expected))
    }

    /// Re-executes one event and checks it reproduces the journaled result.
    fn apply_event(gate: &mut Gate<T>, event: &GateEvent<T>) -> Result<(), ReplayError> {
        let receipt = gate.execute(event.command.clone());
        if receipt.result != event.result {
            warn!(
                sequence = event.sequence_num,
                recorded = ?event.result,
                replayed = ?receipt.result,
                "replay diverged from journal"
            );
            return Err(ReplayError::Divergence {
                sequence_num: event.sequence_num,
                recorded: format!("{:?}", event.result),
                replayed: format!("{:?}", receipt.result),
            });
        }
        Ok(())
    }
}

/// Compares two [`GateSnapshot`]s for structural equality.
///
/// Two snapshots are considered equal when the pattern, the cursor and both
/// lines match. `last_sequence` is excluded because a gate rebuilt from a
/// partial history can hold the same state under different numbering.
///
/// # Examples
///
/// ```
/// use gate_rs::replay::snapshots_match;
/// use gate_rs::Gate;
///
/// let mut a: Gate<u32> = Gate::new();
/// let b: Gate<u32> = Gate::new();
/// assert!(snapshots_match(&a.snapshot(), &b.snapshot()));
///
/// a.serve().ok();
/// assert!(snapshots_match(&a.snapshot(), &b.snapshot()));
/// ```
#[must_use]
pub fn snapshots_match<T: PartialEq>(actual: &GateSnapshot<T>, expected: &GateSnapshot<T>) -> bool {
    actual.pattern == expected.pattern
        && actual.cursor == expected.cursor
        && actual.fastpass == expected.fastpass
        && actual.regular == expected.regular
}
