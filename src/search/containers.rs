//! Fringe containers shared by the search engines. Both containers pop in a
//! fully deterministic order, so repeated runs expand nodes in the same
//! sequence.

use crate::search::HeuristicValue;
use std::{cmp::Reverse, hash::Hash};

/// A collection of pending items the main loop of a search engine drains.
pub trait Fringe<T> {
    fn pop(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: vec![] }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Fringe<T> for Stack<T> {
    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Min-priority queue. Items with equal priority are popped in increasing
/// order of their key, and items with equal priority and key in insertion
/// order.
#[derive(Debug)]
pub struct PriorityQueue<T, K>
where
    T: Hash + Eq,
    K: Ord,
{
    queue: priority_queue::PriorityQueue<T, Reverse<(HeuristicValue, K, usize)>>,
    num_pushed: usize,
}

impl<T, K> PriorityQueue<T, K>
where
    T: Hash + Eq,
    K: Ord,
{
    pub fn new() -> Self {
        Self {
            queue: priority_queue::PriorityQueue::new(),
            num_pushed: 0,
        }
    }

    /// Push `item` with the given priority and tie-breaking key. Pushing an
    /// item already in the queue replaces its priority.
    pub fn push(&mut self, item: T, priority: HeuristicValue, key: K) {
        self.queue.push(item, Reverse((priority, key, self.num_pushed)));
        self.num_pushed += 1;
    }

    /// Lowest priority of any queued item.
    pub fn peek_priority(&self) -> Option<HeuristicValue> {
        self.queue
            .peek()
            .map(|(_, Reverse((priority, _, _)))| *priority)
    }
}

impl<T, K> Default for PriorityQueue<T, K>
where
    T: Hash + Eq,
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> Fringe<T> for PriorityQueue<T, K>
where
    T: Hash + Eq,
    K: Ord,
{
    fn pop(&mut self) -> Option<T> {
        self.queue.pop().map(|(item, _)| item)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
