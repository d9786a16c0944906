//! waitq is a library providing a thread-safe, unbounded, blocking FIFO queue.
//!
//! Share a [`BlockingQueue`] between threads behind an `Arc`: producers
//! `push` values, consumers `pop` them in insertion order, blocking while
//! the queue is empty.

#![deny(missing_docs)]

pub mod queue;

pub use queue::BlockingQueue;
