//! Ordered batch of candidates.

use serde::Serialize;

use super::Candidate;

/// A collection of candidates generated and evaluated together.
///
/// Order is significant: filtering preserves it and selection uses it to
/// break score ties.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Batch {
    candidates: Vec<Candidate>,
}

impl Batch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty batch with room for `capacity` candidates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            candidates: Vec::with_capacity(capacity),
        }
    }

    /// Appends a candidate.
    pub fn push(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    /// Number of candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the batch holds no candidates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidate at `index`.
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    /// Iterates candidates in batch order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// Candidates as a slice.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Consumes the batch, returning the underlying vector.
    pub fn into_inner(self) -> Vec<Candidate> {
        self.candidates
    }
}

impl From<Vec<Candidate>> for Batch {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

impl FromIterator<Candidate> for Batch {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self {
            candidates: iter.into_iter().collect(),
        }
    }
}

impl Extend<Candidate> for Batch {
    fn extend<I: IntoIterator<Item = Candidate>>(&mut self, iter: I) {
        self.candidates.extend(iter);
    }
}

impl IntoIterator for Batch {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
