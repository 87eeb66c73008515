/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Point-in-time images of gate state.
//!
//! A [`GateSnapshot`] holds everything needed to rebuild a [`Gate`]: the
//! pattern, the cycle pointer, both lines in service order and the last
//! sequence number. Listeners are not part of a snapshot.
//!
//! [`Gate`]: super::Gate

use super::error::GateError;
use super::line::LineKind;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Serializable image of a gate.
///
/// # Examples
///
/// ```
/// use gate_rs::Gate;
///
/// let mut gate = Gate::new();
/// gate.arrive("regular", 1u32).unwrap();
///
/// let snapshot = gate.snapshot();
/// assert_eq!(snapshot.regular, vec![1]);
/// assert_eq!(snapshot.checksum().unwrap().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSnapshot<T> {
    /// Service pattern slots.
    pub pattern: Vec<LineKind>,

    /// Index of the next slot to evaluate.
    pub cursor: usize,

    /// Fastpass line, head first.
    pub fastpass: Vec<T>,

    /// Regular line, head first.
    pub regular: Vec<T>,

    /// Sequence number of the last executed command.
    pub last_sequence: u64,
}

impl<T> GateSnapshot<T> {
    /// Returns the tokens waiting in `line`, head first.
    #[must_use]
    pub fn line(&self, line: LineKind) -> &[T] {
        match line {
            LineKind::Fastpass => &self.fastpass,
            LineKind::Regular => &self.regular,
        }
    }
}

impl<T: Serialize> GateSnapshot<T> {
    /// Lower-case hex SHA-256 of the snapshot's JSON encoding.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Serialization`] if a token cannot be encoded.
    pub fn checksum(&self) -> Result<String, GateError> {
        let bytes = serde_json::to_vec(self)?;
        let digest = Sha256::digest(&bytes);
        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest {
            let _ = write!(hex, "{byte:02x}");
        }
        Ok(hex)
    }
}
