//! The blocking queue.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// A thread-safe, unbounded FIFO queue.
///
/// The queue can be shared by any number of producer and consumer threads,
/// typically behind an `Arc`. Producers `push` values; consumers `pop` them
/// in insertion order, blocking while the queue is empty.
pub struct BlockingQueue<T> {
    data: Mutex<VecDeque<T>>,
    not_empty: Condvar,
}

impl<T> BlockingQueue<T> {
    /// Creates a new, empty `BlockingQueue`.
    pub fn new() -> Self {
        BlockingQueue {
            data: Mutex::new(VecDeque::new()),
            not_empty: Condvar::new(),
        }
    }

    /// Appends `item` to the tail of the queue and wakes one waiting
    /// consumer, if any.
    ///
    /// The queue is unbounded, so this never blocks.
    pub fn push(&self, item: T) {
        let mut queue = self.data.lock().unwrap();
        queue.push_back(item);
        self.not_empty.notify_one();
    }

    /// Removes and returns the value at the head of the queue.
    ///
    /// If the queue is empty, the calling thread blocks until a value is
    /// pushed. The wait releases the internal lock, so producers are never
    /// held up by blocked consumers. There is no way to abort the wait; use
    /// [`pop_timeout`](Self::pop_timeout) when a bounded wait is needed.
    pub fn pop(&self) -> T {
        let mut queue = self.data.lock().unwrap();
        // A wakeup carries no claim on an item: another consumer may have
        // taken it first, and spurious wakeups happen. Re-check every time.
        while queue.is_empty() {
            queue = self.not_empty.wait(queue).unwrap();
        }
        queue.pop_front().unwrap()
    }

    /// Like [`pop`](Self::pop), but gives up once `timeout` has elapsed
    /// without a value becoming available, returning `None`.
    ///
    /// A value that is already present is returned immediately, even with a
    /// zero timeout.
    pub fn pop_timeout(&self, timeout: Duration) -> Option<T> {
        let deadline = Instant::now() + timeout;
        let mut queue = self.data.lock().unwrap();
        loop {
            if let Some(item) = queue.pop_front() {
                return Some(item);
            }
            let now = Instant::now();
            if now >= deadline {
                return None;
            }
            let (guard, _) = self.not_empty.wait_timeout(queue, deadline - now).unwrap();
            queue = guard;
        }
    }

    /// Returns the number of values currently in the queue.
    ///
    /// This is a point-in-time snapshot: under concurrent pushes and pops it
    /// may already be stale by the time the caller looks at it.
    pub fn len(&self) -> usize {
        let queue = self.data.lock().unwrap();
        queue.len()
    }

    /// Returns `true` if the queue currently holds no values.
    ///
    /// The same snapshot caveat as [`len`](Self::len) applies.
    pub fn is_empty(&self) -> bool {
        let queue = self.data.lock().unwrap();
        queue.is_empty()
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
