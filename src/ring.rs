use std::fmt;

use log::trace;

use crate::error::{StringRingError, StringRingResult};

/// Fixed-capacity ring of text lines, meant as a rolling log of recently seen
/// lines: appends stay cheap, and once the ring is full the oldest line is
/// silently dropped to make room.
///
/// `end` rests on the newest live line and `start` one slot before the oldest,
/// so inserts advance their cursor before writing and removals read before
/// retracting. Both cursors alias when the ring is empty or full; `len` is the
/// sole discriminator between those two states.
#[derive(Debug, Clone)]
pub struct StringRing {
    lines: Vec<String>,
    start: usize,
    end: usize,
    len: usize,
}

impl StringRing {
    /// Creates an empty ring backed by `cap` slots. Capacity 0 is legal and
    /// yields a ring that is both empty and full; every insert into it is
    /// evicted on the spot.
    pub fn with_capacity(cap: usize) -> Self {
        let mut lines = Vec::with_capacity(cap);
        lines.resize_with(cap, String::new);
        Self {
            lines,
            start: 0,
            end: 0,
            len: 0,
        }
    }

    /// Checked constructor for callers holding a signed count.
    pub fn try_with_capacity(cap: i64) -> StringRingResult<Self> {
        let cap = usize::try_from(cap).map_err(|_| StringRingError::InvalidCapacity(cap))?;
        Ok(Self::with_capacity(cap))
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn is_full(&self) -> bool {
        self.len == self.lines.len()
    }
    pub fn capacity(&self) -> usize {
        self.lines.len()
    }

    /// Appends lines to the back, in argument order. A full ring drops its
    /// oldest line for each one admitted. Returns the ring for chaining.
    pub fn push_back<I>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for line in lines {
            if self.lines.is_empty() {
                continue;
            }
            if self.is_full() {
                trace!(
                    "ring full, dropping oldest line at slot {}",
                    self.step_forward(self.start)
                );
                self.start = self.step_forward(self.start);
            } else {
                self.len += 1;
            }
            self.end = self.step_forward(self.end);
            self.lines[self.end] = line.into();
        }
        self
    }

    /// Removes and returns the newest line, or "" if the ring is empty.
    pub fn pop_back(&mut self) -> String {
        if self.is_empty() {
            return String::new();
        }
        self.len -= 1;
        let line = std::mem::take(&mut self.lines[self.end]);
        self.end = self.step_back(self.end);
        line
    }

    /// Prepends lines to the front; the last argument ends up frontmost, as if
    /// each line were prepended on its own. A full ring drops its newest line
    /// for each one admitted.
    pub fn push_front<I>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for line in lines {
            if self.lines.is_empty() {
                continue;
            }
            if self.is_full() {
                trace!("ring full, dropping newest line at slot {}", self.end);
                self.end = self.step_back(self.end);
            } else {
                self.len += 1;
            }
            self.lines[self.start] = line.into();
            self.start = self.step_back(self.start);
        }
        self
    }

    /// Removes and returns the oldest line, or "" if the ring is empty.
    pub fn pop_front(&mut self) -> String {
        if self.is_empty() {
            return String::new();
        }
        self.len -= 1;
        self.start = self.step_forward(self.start);
        std::mem::take(&mut self.lines[self.start])
    }

    /// Replaces every line with `f` applied to it, front to back. Each line is
    /// rotated out the front and back in through the rear, so occupancy and
    /// relative order survive even on a full ring.
    pub fn map<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(String) -> String,
    {
        for _ in 0..self.len {
            let line = f(self.pop_front());
            self.push_back([line]);
        }
        self
    }

    /// Like [`map`](Self::map), traversing back to front.
    pub fn map_rev<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(String) -> String,
    {
        for _ in 0..self.len {
            let line = f(self.pop_back());
            self.push_front([line]);
        }
        self
    }

    /// Visits every live line front to back, leaving the ring untouched.
    pub fn for_each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&str),
    {
        for i in 0..self.len {
            f(&self.lines[self.live_slot(i)]);
        }
        self
    }

    /// Like [`for_each`](Self::for_each), back to front.
    pub fn for_each_rev<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&str),
    {
        for i in (0..self.len).rev() {
            f(&self.lines[self.live_slot(i)]);
        }
        self
    }

    /// Copies the live lines, front to back, into a Vec detached from the
    /// ring's storage.
    pub fn to_vec(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len);
        for i in 0..self.len {
            out.push(self.lines[self.live_slot(i)].clone());
        }
        out
    }

    /// Builds a full ring whose capacity equals `lines.len()`, first element
    /// frontmost. Inverse of [`to_vec`](Self::to_vec); the very next insert
    /// starts evicting.
    pub fn from_vec(lines: Vec<String>) -> Self {
        let len = lines.len();
        // Newest line sits at the last slot; start aliases end on a full ring.
        let cursor = len.saturating_sub(1);
        Self {
            lines,
            start: cursor,
            end: cursor,
            len,
        }
    }

    /// Backing slot of the `i`-th live line counting from the front. Callers
    /// ensure `i < self.len`, which also guarantees a nonzero capacity.
    fn live_slot(&self, i: usize) -> usize {
        (self.start + 1 + i) % self.lines.len()
    }

    fn step_forward(&self, idx: usize) -> usize {
        (idx + 1) % self.lines.len()
    }

    fn step_back(&self, idx: usize) -> usize {
        (idx + self.lines.len() - 1) % self.lines.len()
    }
}

impl fmt::Display for StringRing {
    // Diagnostic dump of the raw state, stale slots included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StringRing {{start: {}, end: {}, lines: {:?}, len: {}}}",
            self.start, self.end, self.lines, self.len
        )
    }
}
