//! Min-priority queue of search candidates.
//!
//! Built on [`BinaryHeap`], which is a max-heap, so entry ordering is
//! reversed. Priorities are `f64` compared with [`f64::total_cmp`]; every
//! NaN is stored as the positive quiet NaN so it sorts after `+inf` whatever
//! its sign.
//!
//! Ties are broken first-in, first-out: every push takes the next value of a
//! monotonically increasing sequence counter, and among equal priorities the
//! smallest sequence number is popped first. The queue supports only insert
//! and extract-min; the search discards superseded entries lazily when they
//! are popped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A value paired with the priority it was queued under.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<T> {
    pub value: T,
    pub priority: f64,
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug)]
struct Entry<T> {
    priority: FloatOrd,
    seq: u64,
    value: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap pops the lowest priority, then the
        // oldest insertion.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-ordered container keyed by a floating-point priority.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Insert `value` under `priority`. Any priority is accepted, including
    /// negative values. NaN is queued after every other priority.
    pub fn push(&mut self, value: T, priority: f64) {
        let priority = if priority.is_nan() { f64::NAN } else { priority };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority: FloatOrd(priority),
            seq,
            value,
        });
    }

    /// Remove and return the item with the smallest priority, or `None` when
    /// the queue is empty.
    pub fn pop(&mut self) -> Option<Item<T>> {
        self.heap.pop().map(|entry| Item {
            value: entry.value,
            priority: entry.priority.0,
        })
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
