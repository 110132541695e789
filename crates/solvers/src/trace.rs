use std::slice;

/// Common view of one root-finder iteration.
pub trait IterationRecord {
    /// Iteration counter, starting at 1.
    fn iter(&self) -> usize;

    /// Error estimate used for the stopping decision.
    fn error(&self) -> f64;
}

/// Ordered, append-only record of a solver run.
///
/// Records appear in the order they were produced. Only the solver that owns
/// the trace can append, so a trace handed back to a caller is final.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize), serde(transparent))]
pub struct Trace<R> {
    records: Vec<R>,
}

impl<R> Trace<R> {
    pub(crate) fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, record: R) {
        self.records.push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, R> {
        self.records.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&R> {
        self.records.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }
}

impl<R> Default for Trace<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> IntoIterator for Trace<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a Trace<R> {
    type Item = &'a R;
    type IntoIter = slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
