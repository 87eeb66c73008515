/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Line labels.
//!
//! A gate has exactly two arrival lines. Callers usually name them with
//! plain strings, so [`LineKind`] parses the two accepted labels and rejects
//! everything else with [`GateError::InvalidLineKind`].

use super::error::GateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two arrival lines of a gate.
///
/// # Examples
///
/// ```
/// use gate_rs::LineKind;
///
/// let line: LineKind = "fastpass".parse().unwrap();
/// assert_eq!(line, LineKind::Fastpass);
/// assert!("vip".parse::<LineKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Priority line, one slot per cycle in the default pattern.
    Fastpass,
    /// Standard line, three slots per cycle in the default pattern.
    Regular,
}

impl LineKind {
    /// Number of distinct lines.
    pub const COUNT: usize = 2;

    /// Every line, in index order.
    pub const ALL: [LineKind; Self::COUNT] = [LineKind::Fastpass, LineKind::Regular];

    /// Returns the canonical label of this line.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fastpass => "fastpass",
            Self::Regular => "regular",
        }
    }

    /// Dense index used to address per-line storage.
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Fastpass => 0,
            Self::Regular => 1,
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineKind {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fastpass" => Ok(Self::Fastpass),
            "regular" => Ok(Self::Regular),
            other => Err(GateError::InvalidLineKind(other.to_string())),
        }
    }
}
