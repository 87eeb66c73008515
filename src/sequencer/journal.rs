/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Journal trait and in-memory implementation for gate event storage.
//!
//! A journal is an append-only log of [`GateEvent`]s. It enables
//! deterministic replay and auditing by preserving the full command
//! history of a [`Gate`].
//!
//! [`Gate`]: super::Gate

use super::event::GateEvent;
use super::replay::ReplayError;

/// Append-only event log for [`GateEvent`]s.
///
/// Implementations must preserve insertion order and provide iteration
/// from an arbitrary sequence number. The journal is the source of truth
/// for [`ReplayEngine`] operations.
///
/// [`ReplayEngine`]: super::replay::ReplayEngine
pub trait Journal<T> {
    /// Appends a new event to the journal.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError`] if the event cannot be stored (e.g. sequence
    /// number out of order).
    fn append(&mut self, event: GateEvent<T>) -> Result<(), ReplayError>;

    /// Returns an iterator over all events with `sequence_num >= from_sequence`.
    ///
    /// Events are yielded in ascending sequence order.
    fn read_from(&self, from_sequence: u64) -> impl Iterator<Item = &GateEvent<T>> + '_
    where
        T: 'static;

    /// Returns an iterator over events with `from_sequence <= sequence_num <= to_sequence`.
    ///
    /// Events are yielded in ascending sequence order.
    fn read_range(
        &self,
        from_sequence: u64,
        to_sequence: u64,
    ) -> impl Iterator<Item = &GateEvent<T>> + '_
    where
        T: 'static;

    /// Returns the total number of events stored.
    #[must_use]
    fn len(&self) -> usize;

    /// Returns `true` if no events have been appended.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sequence number of the last event, or `None` if empty.
    #[must_use]
    fn last_sequence(&self) -> Option<u64>;
}

/// In-memory implementation of [`Journal`].
///
/// Stores all events in a `Vec` in insertion order and requires strictly
/// increasing sequence numbers.
///
/// # Examples
///
/// ```
/// use gate_rs::journal::{InMemoryJournal, Journal};
/// use gate_rs::{GateCommand, GateEvent, GateResult};
///
/// let mut journal: InMemoryJournal<u32> = InMemoryJournal::new();
/// assert!(journal.is_empty());
///
/// let event = GateEvent::new(1, 0, GateCommand::Serve, GateResult::Rejected {
///     error: gate_rs::GateError::EmptyQueues,
/// });
/// journal.append(event).ok();
/// assert_eq!(journal.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryJournal<T> {
    events: Vec<GateEvent<T>>,
}

impl<T> InMemoryJournal<T> {
    /// Creates a new empty in-memory journal.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Creates a new in-memory journal with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    /// Returns a slice of all stored events.
    #[must_use]
    pub fn events(&self) -> &[GateEvent<T>] {
        &self.events
    }
}

impl<T: 'static> Journal<T> for InMemoryJournal<T> {
    fn append(&mut self, event: GateEvent<T>) -> Result<(), ReplayError> {
        if let Some(last) = self.last_sequence() {
            if event.sequence_num <= last {
                return Err(ReplayError::SequenceGap {
                    expected: last + 1,
                    found: event.sequence_num,
                });
            }
        }
        self.events.push(event);
        Ok(())
    }

    fn read_from(&self, from_sequence: u64) -> impl Iterator<Item = &GateEvent<T>> + '_ {
        self.events
            .iter()
            .filter(move |e| e.sequence_num >= from_sequence)
    }

    fn read_range(
        &self,
        from_sequence: u64,
        to_sequence: u64,
    ) -> impl Iterator<Item = &GateEvent<T>> + '_ {
        self.events
            .iter()
            .filter(move |e| e.sequence_num >= from_sequence && e.sequence_num <= to_sequence)
    }

    #[inline]
    fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    fn last_sequence(&self) -> Option<u64> {
        self.events.last().map(|e| e.sequence_num)
    }
}
