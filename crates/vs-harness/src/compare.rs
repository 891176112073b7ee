//! First-mismatch comparison of two sorted buffers.
//!
//! Buffers are scanned in ascending index order starting at 0; the scan stops
//! at the first differing position.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of comparing the reference and candidate buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Comparison {
    /// Identical at every position
    Equivalent,
    /// First differing position
    Mismatch(Mismatch),
    /// Every shared position matched but the lengths differ
    LengthMismatch { reference: usize, candidate: usize },
}

impl Comparison {
    pub fn is_equivalent(&self) -> bool {
        matches!(self, Comparison::Equivalent)
    }

    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Comparison::Mismatch(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Equivalent => write!(f, "Equivalent"),
            Comparison::Mismatch(m) => m.fmt(f),
            Comparison::LengthMismatch {
                reference,
                candidate,
            } => write!(f, "Length mismatch: {} != {}", reference, candidate),
        }
    }
}

/// A position where the two buffers disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub index: usize,
    /// Value in the reference buffer
    pub reference: i32,
    /// Value in the candidate buffer
    pub candidate: i32,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mismatch at index {}: {} != {}",
            self.index, self.reference, self.candidate
        )
    }
}

/// Neighbourhood of a mismatch in both buffers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MismatchContext {
    /// Index of `reference[0]` and `candidate[0]`
    pub start: usize,
    pub reference: Vec<i32>,
    pub candidate: Vec<i32>,
}

impl MismatchContext {
    /// Up to `radius` elements on each side of `mismatch`.
    pub fn around(mismatch: &Mismatch, reference: &[i32], candidate: &[i32], radius: usize) -> Self {
        let start = mismatch.index.saturating_sub(radius);
        let end = mismatch.index.saturating_add(radius).saturating_add(1);
        Self {
            start,
            reference: reference[start..end.min(reference.len())].to_vec(),
            candidate: candidate[start..end.min(candidate.len())].to_vec(),
        }
    }
}

/// Compare two buffers position by position, stopping at the first mismatch.
pub fn compare(reference: &[i32], candidate: &[i32]) -> Comparison {
    let first = reference
        .iter()
        .zip(candidate)
        .position(|(r, c)| r != c);

    if let Some(index) = first {
        return Comparison::Mismatch(Mismatch {
            index,
            reference: reference[index],
            candidate: candidate[index],
        });
    }

    if reference.len() != candidate.len() {
        return Comparison::LengthMismatch {
            reference: reference.len(),
            candidate: candidate.len(),
        };
    }

    Comparison::Equivalent
}
