/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Service pattern.
//!
//! The pattern is the repeating list of slots the gate walks through. Each
//! slot names the line it would like to serve. The default pattern is one
//! fastpass slot followed by three regular slots.
//!
//! A pattern must mention every [`LineKind`] at least once. Without that,
//! a gate whose only non-empty line is missing from the pattern would never
//! find a slot to serve from.

use super::error::GateError;
use super::line::LineKind;
use serde::{Deserialize, Serialize};

/// The default 1:3 pattern: one fastpass slot, then three regular slots.
pub const DEFAULT_PATTERN: [LineKind; 4] = [
    LineKind::Fastpass,
    LineKind::Regular,
    LineKind::Regular,
    LineKind::Regular,
];

/// Validated, immutable sequence of service slots.
///
/// # Examples
///
/// ```
/// use gate_rs::{LineKind, ServicePattern};
///
/// let pattern = ServicePattern::default();
/// assert_eq!(pattern.len(), 4);
/// assert_eq!(pattern.weight(LineKind::Regular), 3);
///
/// assert!(ServicePattern::new(vec![LineKind::Regular]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LineKind>", into = "Vec<LineKind>")]
pub struct ServicePattern {
    slots: Vec<LineKind>,
}

impl ServicePattern {
    /// Creates a pattern from an ordered list of slots.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidPattern`] if `slots` is empty or does not
    /// contain every [`LineKind`].
    pub fn new(slots: Vec<LineKind>) -> Result<Self, GateError> {
        if slots.is_empty() {
            return Err(GateError::InvalidPattern(
                "pattern must contain at least one slot".to_string(),
            ));
        }
        if let Some(missing) = LineKind::ALL.iter().find(|line| !slots.contains(*line)) {
            return Err(GateError::InvalidPattern(format!(
                "line {missing} has no slot in the pattern"
            )));
        }
        Ok(Self { slots })
    }

    /// Number of slots in one cycle. Never zero.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`; a validated pattern has at least one slot.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the line of the slot at `index`, wrapping around the cycle.
    #[inline]
    #[must_use]
    pub fn slot(&self, index: usize) -> LineKind {
        self.slots[index % self.slots.len()]
    }

    /// Returns the slot following `index`, wrapping around the cycle.
    #[inline]
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }

    /// Number of slots assigned to `line` per cycle.
    #[must_use]
    pub fn weight(&self, line: LineKind) -> usize {
        self.slots.iter().filter(|slot| **slot == line).count()
    }

    /// The slots as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[LineKind] {
        &self.slots
    }

    /// Iterates over the slots of one cycle.
    pub fn iter(&self) -> impl Iterator<Item = LineKind> + '_ {
        self.slots.iter().copied()
    }
}

impl Default for ServicePattern {
    fn default() -> Self {
        Self {
            slots: DEFAULT_PATTERN.to_vec(),
        }
    }
}

impl TryFrom<Vec<LineKind>> for ServicePattern {
    type Error = GateError;

    fn try_from(slots: Vec<LineKind>) -> Result<Self, Self::Error> {
        Self::new(slots)
    }
}

impl From<ServicePattern> for Vec<LineKind> {
    fn from(pattern: ServicePattern) -> Self {
        pattern.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_to_three() {
        let pattern = ServicePattern::default();
        assert_eq!(pattern.as_slice(), &DEFAULT_PATTERN);
        assert_eq!(pattern.weight(LineKind::Fastpass), 1);
        assert_eq!(pattern.weight(LineKind::Regular), 3);
        assert!(!pattern.is_empty());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let err = ServicePattern::new(Vec::new()).unwrap_err();
        assert!(matches!(err, GateError::InvalidPattern(_)));
    }

    #[test]
    fn test_pattern_missing_line_rejected() {
        let err = ServicePattern::new(vec![LineKind::Fastpass, LineKind::Fastpass]).unwrap_err();
        assert_eq!(
            err,
            GateError::InvalidPattern("line regular has no slot in the pattern".to_string())
        );
    }

    #[test]
    fn test_custom_pattern_accepted() {
        let pattern = ServicePattern::new(vec![LineKind::Regular, LineKind::Fastpass]).unwrap();
        assert_eq!(pattern.len(), 2);
        assert_eq!(pattern.slot(0), LineKind::Regular);
        assert_eq!(pattern.slot(3), LineKind::Fastpass);
    }

    #[test]
    fn test_next_index_wraps() {
        let pattern = ServicePattern::default();
        assert_eq!(pattern.next_index(0), 1);
        assert_eq!(pattern.next_index(3), 0);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: ServicePattern =
            serde_json::from_str(r#"["fastpass","regular","regular","regular"]"#).unwrap();
        assert_eq!(ok, ServicePattern::default());

        let bad = serde_json::from_str::<ServicePattern>(r#"["regular"]"#);
        assert!(bad.is_err());
    }
}
