//! Bounded-index navigation shared by every carousel-like control.
//!
//! The same wraparound arithmetic drives the testimonial dots, the project
//! scroller, section tabs, blog post selection, the work filter cycle, and
//! the contact field focus.

/// A position within a fixed-size collection that wraps rather than
/// overflows.
///
/// Invariant: `0 <= index < count` whenever `count > 0`. A count of zero
/// makes the component inert: there is no active index and every movement
/// operation is a no-op.
///
/// # Examples
///
/// ```
/// use folio::domain::BoundedIndex;
///
/// let mut dots = BoundedIndex::new(3);
/// assert_eq!(dots.next(), Some(1));
/// assert_eq!(dots.set_to(-1), Some(2)); // negative input wraps to the high end
/// assert_eq!(dots.set_to(2), None);     // unchanged moves report nothing
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedIndex {
    index: usize,
    count: usize,
}

impl BoundedIndex {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Current position, or `None` when the collection is empty.
    pub fn current(&self) -> Option<usize> {
        if self.count == 0 { None } else { Some(self.index) }
    }

    pub fn is_active(&self, i: usize) -> bool {
        self.current() == Some(i)
    }

    /// Moves to `i` normalized into `[0, count)` with floor-style modulo,
    /// so negative input wraps to the high end. Returns the new index when
    /// the position actually changed, `None` otherwise (including on an
    /// empty collection).
    pub fn set_to(&mut self, i: i64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let count = self.count as i64;
        let normalized = i.rem_euclid(count) as usize;
        if normalized == self.index {
            return None;
        }
        self.index = normalized;
        Some(normalized)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.set_to(self.index as i64 + 1)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.set_to(self.index as i64 - 1)
    }
}
