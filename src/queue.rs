//! The first-in, first-out queue that breadth-first algorithms run on.

use std::collections::VecDeque;
use thiserror::Error;

/// An error raised when dequeuing from an empty queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("cannot dequeue from an empty queue")]
pub struct Underflow;

/// A first-in, first-out queue.
///
/// Level-order traversal is written against this trait, so any FIFO can stand in for the
/// default `VecDeque`.
pub trait Queue<T> {
    /// Pushes an item onto the back of the queue, returning the queue's new length.
    fn enqueue(&mut self, item: T) -> usize;

    /// Pops the item at the front of the queue.
    fn dequeue(&mut self) -> Result<T, Underflow>;

    /// Returns the number of queued items.
    fn len(&self) -> usize;

    /// Checks if the queue is empty.
    fn is_empty(&self) -> bool { self.len() == 0 }
}

impl<T> Queue<T> for VecDeque<T> {
    fn enqueue(&mut self, item: T) -> usize {
        self.push_back(item);
        VecDeque::len(self)
    }

    fn dequeue(&mut self) -> Result<T, Underflow> { self.pop_front().ok_or(Underflow) }

    fn len(&self) -> usize { VecDeque::len(self) }

    fn is_empty(&self) -> bool { VecDeque::is_empty(self) }
}
