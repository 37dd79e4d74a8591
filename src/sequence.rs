//! One-shot integer sequences over a half-open range `[start, end)`.
//!
//! A sequence owns its cursor and moves it forward on every advance. Once the
//! cursor reaches `end` the sequence is exhausted for good; there is no reset.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::SequenceError;

/// Largest magnitude whose square still fits in `i64`.
const MAX_SQUARE_ROOT: u64 = 3_037_000_499;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceKind {
    /// Square of each integer in the range.
    Squares,
    /// Each odd cursor rounded up to the next even, stepping by two.
    Evens,
}

impl SequenceKind {
    fn step(self) -> i64 {
        match self {
            SequenceKind::Squares => 1,
            SequenceKind::Evens => 2,
        }
    }

    // `current < end <= i64::MAX`, so rounding an odd cursor up cannot overflow.
    fn value_at(self, current: i64) -> Option<i64> {
        match self {
            SequenceKind::Squares => current.checked_mul(current),
            SequenceKind::Evens if current % 2 != 0 => Some(current + 1),
            SequenceKind::Evens => Some(current),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedSequence {
    kind: SequenceKind,
    current: i64,
    end: i64,
}

impl BoundedSequence {
    pub fn new(kind: SequenceKind, start: i64, end: i64) -> Self {
        Self {
            kind,
            current: start,
            end,
        }
    }

    pub fn squares(start: i64, end: i64) -> Self {
        Self::new(SequenceKind::Squares, start, end)
    }

    pub fn evens(start: i64, end: i64) -> Self {
        Self::new(SequenceKind::Evens, start, end)
    }

    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    pub fn is_exhausted(&self) -> bool {
        self.current >= self.end
    }

    /// Number of cursor positions left before exhaustion.
    pub fn remaining(&self) -> usize {
        if self.is_exhausted() {
            return 0;
        }
        let span = self.end.abs_diff(self.current);
        let step = self.kind.step().unsigned_abs();
        usize::try_from(span.div_ceil(step)).unwrap_or(usize::MAX)
    }

    /// True when every remaining position yields a value.
    fn fits(&self) -> bool {
        match self.kind {
            SequenceKind::Evens => true,
            SequenceKind::Squares => {
                self.is_exhausted()
                    || (self.current.unsigned_abs() <= MAX_SQUARE_ROOT
                        && (self.end - 1).unsigned_abs() <= MAX_SQUARE_ROOT)
            }
        }
    }

    /// Yields the next value, or `Exhausted` on this and every later call
    /// once the cursor has reached the bound.
    ///
    /// A square that does not fit in `i64` is reported as `Overflow` and
    /// leaves the cursor where it is.
    pub fn advance(&mut self) -> Result<i64, SequenceError> {
        if self.is_exhausted() {
            trace!(kind = ?self.kind, end = self.end, "advance past bound");
            return Err(SequenceError::Exhausted { end: self.end });
        }
        let value = self
            .kind
            .value_at(self.current)
            .ok_or(SequenceError::Overflow {
                current: self.current,
            })?;
        // stepping past i64::MAX also means the bound was passed
        self.current = self
            .current
            .checked_add(self.kind.step())
            .unwrap_or(self.end);
        Ok(value)
    }
}

impl Iterator for BoundedSequence {
    type Item = i64;

    /// Ends the iteration on overflow as well as on exhaustion.
    fn next(&mut self) -> Option<i64> {
        match self.advance() {
            Ok(value) => Some(value),
            Err(SequenceError::Overflow { current }) => {
                trace!(current, "square overflow ends iteration");
                self.current = self.end;
                None
            }
            Err(SequenceError::Exhausted { .. }) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        let lower = if self.fits() { remaining } else { 0 };
        (lower, Some(remaining))
    }
}

impl FusedIterator for BoundedSequence {}
