/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Core Gate implementation.
//!
//! This module provides the main [`Gate`] struct: two FIFO lines, a service
//! pattern and a cycle pointer. Every mutating operation is assigned a
//! monotonic sequence number and reported to registered listeners.

use super::command::GateCommand;
use super::error::GateError;
use super::event::GateEvent;
use super::line::LineKind;
use super::pattern::ServicePattern;
use super::receipt::GateReceipt;
use super::result::GateResult;
use super::snapshot::GateSnapshot;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Type alias for event listener functions.
type EventListener<T> = Arc<dyn Fn(&GateEvent<T>) + Send + Sync>;

/// A person released by [`Gate::dequeue`].
struct Served<T> {
    line: LineKind,
    token: T,
    slots_consumed: usize,
}

/// A weighted round-robin admission gate.
///
/// People arrive into the fastpass or regular line and are released one at
/// a time following the service pattern. The slot under the cycle pointer
/// names the line to serve; if that line is empty the slot is consumed
/// anyway and the next slot is tried. Within a line, service is strictly
/// first-in first-out.
///
/// The gate is a plain single-owner state machine. Hosts that share it
/// between threads must lock the whole gate for every call, since `serve`
/// reads and writes both lines and the pointer.
///
/// # Examples
///
/// ```
/// use gate_rs::{Gate, LineKind};
///
/// let mut gate = Gate::new();
/// gate.arrive("fastpass", "f1").unwrap();
/// gate.arrive("regular", "r1").unwrap();
/// gate.arrive("regular", "r2").unwrap();
///
/// assert_eq!(gate.peek_next_line(), Some(LineKind::Fastpass));
/// assert_eq!(gate.serve().unwrap(), "f1");
/// assert_eq!(gate.serve().unwrap(), "r1");
/// assert_eq!(gate.serve().unwrap(), "r2");
/// assert!(gate.serve().is_err());
/// ```
pub struct Gate<T> {
    /// Repeating service slots.
    pattern: ServicePattern,

    /// One FIFO buffer per line, indexed by [`LineKind::index`].
    lines: [VecDeque<T>; LineKind::COUNT],

    /// Index of the next slot to evaluate.
    cursor: usize,

    /// Last sequence number assigned; `0` before the first command.
    sequence: u64,

    /// Event listeners called synchronously for each event.
    event_listeners: Vec<EventListener<T>>,
}

impl<T: Clone + fmt::Debug> Gate<T> {
    /// Creates an empty gate with the default 1:3 pattern.
    #[must_use]
    pub fn new() -> Self {
        Self::with_pattern(ServicePattern::default())
    }

    /// Creates an empty gate with a custom, already validated pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use gate_rs::{Gate, LineKind, ServicePattern};
    ///
    /// let pattern = ServicePattern::new(vec![LineKind::Fastpass, LineKind::Regular]).unwrap();
    /// let gate: Gate<u32> = Gate::with_pattern(pattern);
    /// assert_eq!(gate.pattern().len(), 2);
    /// ```
    #[must_use]
    pub fn with_pattern(pattern: ServicePattern) -> Self {
        Self {
            pattern,
            lines: std::array::from_fn(|_| VecDeque::new()),
            cursor: 0,
            sequence: 0,
            event_listeners: Vec::new(),
        }
    }

    /// Registers an event listener.
    ///
    /// Listeners are called synchronously in sequence order for each event.
    ///
    /// # Arguments
    ///
    /// * `listener` - Function to call for each event
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: Fn(&GateEvent<T>) + Send + Sync + 'static,
    {
        self.event_listeners.push(Arc::new(listener));
    }

    /// Appends `token` to the tail of the line named `line`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidLineKind`] if `line` is neither
    /// `fastpass` nor `regular`. Nothing is enqueued in that case.
    pub fn arrive(&mut self, line: &str, token: T) -> Result<(), GateError> {
        let outcome = self.enqueue(line, token.clone());
        let result = arrival_result(&outcome);
        self.emit(
            GateCommand::Arrive {
                line: line.to_string(),
                token,
            },
            result,
        );
        outcome.map(|_| ())
    }

    /// Appends `token` to the tail of `line`.
    pub fn arrive_in(&mut self, line: LineKind, token: T) {
        self.lines[line.index()].push_back(token.clone());
        debug!(sequence = self.sequence + 1, %line, ?token, "arrival");
        self.emit(GateCommand::arrive(line, token), GateResult::Arrived { line });
    }

    /// Releases the next person according to the service pattern.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::EmptyQueues`] if both lines are empty.
    pub fn serve(&mut self) -> Result<T, GateError> {
        self.serve_with_line().map(|(_, token)| token)
    }

    /// Like [`serve`](Self::serve), also reporting which line was served.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::EmptyQueues`] if both lines are empty.
    pub fn serve_with_line(&mut self) -> Result<(LineKind, T), GateError> {
        let outcome = self.dequeue();
        let result = serve_result(&outcome);
        self.emit(GateCommand::Serve, result);
        outcome.map(|served| (served.line, served.token))
    }

    /// Executes a command and returns its receipt.
    ///
    /// Failures never escape as errors here; they are reported as
    /// [`GateResult::Rejected`] and still consume a sequence number.
    pub fn execute(&mut self, command: GateCommand<T>) -> GateReceipt<T> {
        let result = match &command {
            GateCommand::Arrive { line, token } => {
                arrival_result(&self.enqueue(line, token.clone()))
            }
            GateCommand::Serve => serve_result(&self.dequeue()),
        };
        self.emit(command, result)
    }

    /// Predicts which line the next [`serve`](Self::serve) will take from.
    ///
    /// Returns `None` when both lines are empty. Never mutates the gate.
    #[must_use]
    pub fn peek_next_line(&self) -> Option<LineKind> {
        if self.is_empty() {
            return None;
        }
        (0..self.pattern.len())
            .map(|offset| self.pattern.slot(self.cursor + offset))
            .find(|line| !self.lines[line.index()].is_empty())
    }

    /// Returns the person the next [`serve`](Self::serve) would release.
    #[must_use]
    pub fn peek_next(&self) -> Option<(LineKind, &T)> {
        let line = self.peek_next_line()?;
        self.front(line).map(|token| (line, token))
    }

    /// Longest-waiting person in `line`.
    #[must_use]
    pub fn front(&self, line: LineKind) -> Option<&T> {
        self.lines[line.index()].front()
    }

    /// Number of people waiting in `line`.
    #[inline]
    #[must_use]
    pub fn line_len(&self, line: LineKind) -> usize {
        self.lines[line.index()].len()
    }

    /// Number of people waiting across both lines.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.iter().map(VecDeque::len).sum()
    }

    /// Returns `true` if nobody is waiting.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(VecDeque::is_empty)
    }

    /// Index of the next slot to evaluate.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The service pattern.
    #[must_use]
    pub fn pattern(&self) -> &ServicePattern {
        &self.pattern
    }

    /// Sequence number of the last executed command, `0` if none.
    #[inline]
    #[must_use]
    pub fn last_sequence(&self) -> u64 {
        self.sequence
    }

    /// Captures the current state.
    #[must_use]
    pub fn snapshot(&self) -> GateSnapshot<T> {
        GateSnapshot {
            pattern: self.pattern.as_slice().to_vec(),
            cursor: self.cursor,
            fastpass: self.lines[LineKind::Fastpass.index()]
                .iter()
                .cloned()
                .collect(),
            regular: self.lines[LineKind::Regular.index()]
                .iter()
                .cloned()
                .collect(),
            last_sequence: self.sequence,
        }
    }

    /// Rebuilds a gate from a snapshot. Listeners are not restored.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidSnapshot`] if the cursor is outside the
    /// pattern, or [`GateError::InvalidPattern`] if the pattern is invalid.
    pub fn from_snapshot(snapshot: GateSnapshot<T>) -> Result<Self, GateError> {
        let pattern = ServicePattern::new(snapshot.pattern)?;
        if snapshot.cursor >= pattern.len() {
            return Err(GateError::InvalidSnapshot(format!(
                "cursor {} out of range for pattern of length {}",
                snapshot.cursor,
                pattern.len()
            )));
        }
        let mut gate = Self::with_pattern(pattern);
        gate.cursor = snapshot.cursor;
        gate.sequence = snapshot.last_sequence;
        gate.lines[LineKind::Fastpass.index()] = snapshot.fastpass.into();
        gate.lines[LineKind::Regular.index()] = snapshot.regular.into();
        Ok(gate)
    }

    /// Parses `line` and appends `token` to it.
    fn enqueue(&mut self, line: &str, token: T) -> Result<LineKind, GateError> {
        let line: LineKind = line.parse()?;
        debug!(sequence = self.sequence + 1, %line, ?token, "arrival");
        self.lines[line.index()].push_back(token);
        Ok(line)
    }

    /// Walks the pattern from the cursor until a slot's line has someone
    /// waiting. Every visited slot is consumed, the serving one included.
    fn dequeue(&mut self) -> Result<Served<T>, GateError> {
        if self.is_empty() {
            return Err(GateError::EmptyQueues);
        }

        // Terminates within one cycle: every line has a slot in the pattern.
        let mut slots_consumed = 0;
        loop {
            let line = self.pattern.slot(self.cursor);
            self.cursor = self.pattern.next_index(self.cursor);
            slots_consumed += 1;

            if let Some(token) = self.lines[line.index()].pop_front() {
                debug!(
                    sequence = self.sequence + 1,
                    %line,
                    ?token,
                    slots_consumed,
                    cursor = self.cursor,
                    "served"
                );
                return Ok(Served {
                    line,
                    token,
                    slots_consumed,
                });
            }

            trace!(%line, cursor = self.cursor, "slot skipped, line empty");
        }
    }

    /// Assigns the next sequence number and notifies listeners.
    fn emit(&mut self, command: GateCommand<T>, result: GateResult<T>) -> GateReceipt<T> {
        self.sequence += 1;
        let seq = self.sequence;

        if let GateResult::Rejected { error } = &result {
            debug!(sequence = seq, %error, "command rejected");
        }

        if self.event_listeners.is_empty() {
            return GateReceipt::new(seq, result);
        }

        let event = GateEvent::new(seq, nanos_since_epoch(), command, result);
        for listener in &self.event_listeners {
            listener(&event);
        }
        GateReceipt::new(seq, event.result)
    }
}

impl<T: Clone + fmt::Debug> Default for Gate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Gate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gate")
            .field("pattern", &self.pattern)
            .field("lines", &self.lines)
            .field("cursor", &self.cursor)
            .field("sequence", &self.sequence)
            .field("listeners", &self.event_listeners.len())
            .finish()
    }
}

fn arrival_result<T>(outcome: &Result<LineKind, GateError>) -> GateResult<T> {
    match outcome {
        Ok(line) => GateResult::Arrived { line: *line },
        Err(error) => GateResult::Rejected {
            error: error.clone(),
        },
    }
}

fn serve_result<T: Clone>(outcome: &Result<Served<T>, GateError>) -> GateResult<T> {
    match outcome {
        Ok(served) => GateResult::Served {
            line: served.line,
            token: served.token.clone(),
            slots_consumed: served.slots_consumed,
        },
        Err(error) => GateResult::Rejected {
            error: error.clone(),
        },
    }
}

/// Returns the current time in nanoseconds since the Unix epoch.
#[inline]
fn nanos_since_epoch() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
